use serde::{Deserialize, Serialize};

/// A product held in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub brand: Option<String>,
}

/// Partial patch for an [`Item`]. A `None` field leaves the stored value alone;
/// an explicit JSON `null` is read the same way.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateItem {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub brand: Option<String>,
}

impl UpdateItem {
    /// Overwrites every field present in the patch.
    pub fn apply_to(&self, item: &mut Item) {
        if let Some(name) = &self.name {
            item.name = name.clone();
        }
        if let Some(price) = self.price {
            item.price = price;
        }
        if let Some(brand) = &self.brand {
            item.brand = Some(brand.clone());
        }
    }
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct NameQuery {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    pub item_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milk() -> Item {
        Item {
            name: "milk".to_string(),
            price: 3.99,
            brand: Some("Regular".to_string()),
        }
    }

    #[test]
    fn brand_defaults_to_none() {
        let item: Item = serde_json::from_str(r#"{"name":"bread","price":2.5}"#).unwrap();
        assert_eq!(item.brand, None);
    }

    #[test]
    fn missing_brand_serializes_as_null() {
        let item = Item {
            name: "bread".to_string(),
            price: 2.5,
            brand: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert!(json["brand"].is_null());
    }

    #[test]
    fn item_requires_name_and_price() {
        assert!(serde_json::from_str::<Item>(r#"{"price":1.0}"#).is_err());
        assert!(serde_json::from_str::<Item>(r#"{"name":"x"}"#).is_err());
    }

    #[test]
    fn patch_only_touches_present_fields() {
        let mut item = milk();
        let patch = UpdateItem {
            price: Some(4.49),
            ..Default::default()
        };
        patch.apply_to(&mut item);
        assert_eq!(item.name, "milk");
        assert_eq!(item.price, 4.49);
        assert_eq!(item.brand.as_deref(), Some("Regular"));
    }

    #[test]
    fn null_fields_in_patch_mean_unchanged() {
        let patch: UpdateItem =
            serde_json::from_str(r#"{"name":null,"price":null,"brand":null}"#).unwrap();
        assert_eq!(patch, UpdateItem::default());

        let mut item = milk();
        patch.apply_to(&mut item);
        assert_eq!(item, milk());
    }

    #[test]
    fn applying_same_patch_twice_is_idempotent() {
        let patch = UpdateItem {
            name: Some("oat milk".to_string()),
            brand: Some("Oatly".to_string()),
            ..Default::default()
        };
        let mut once = milk();
        patch.apply_to(&mut once);
        let mut twice = once.clone();
        patch.apply_to(&mut twice);
        assert_eq!(once, twice);
    }
}
