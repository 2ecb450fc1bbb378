mod item;

pub use item::{DeleteQuery, Item, NameQuery, UpdateItem};
