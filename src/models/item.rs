use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Price reported for every synthesized item
pub const SYNTHESIZED_ITEM_PRICE: u32 = 420;

/// Item payload accepted by the write endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
}

impl Item {
    /// Price including tax, rounded to cents. `None` when no tax was given.
    pub fn total_price(&self) -> Option<f64> {
        self.tax.map(|tax| round_cents(self.price + self.price * tax))
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Item looked up by id
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ItemResponse {
    pub item_id: i64,
    pub name: String,
    pub price: u32,
}

impl ItemResponse {
    pub fn synthesize(item_id: i64) -> Self {
        Self {
            item_id,
            name: format!("Item {}", item_id),
            price: SYNTHESIZED_ITEM_PRICE,
        }
    }
}

/// Echo of a created or updated item
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ItemEchoResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

impl ItemEchoResponse {
    pub fn new(item_id: Option<i64>, item: Item) -> Self {
        let total_price = item.total_price();
        Self {
            item_id,
            name: item.name,
            description: item.description,
            price: item.price,
            tax: item.tax,
            total_price,
        }
    }
}

/// Acknowledgement for a deleted item
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ItemDeleteResponse {
    pub status: String,
    pub item_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(price: f64, tax: Option<f64>) -> Item {
        Item {
            name: "Laptop".to_string(),
            description: None,
            price,
            tax,
        }
    }

    #[test]
    fn total_price_requires_tax() {
        assert_eq!(item(10.0, None).total_price(), None);
        assert_eq!(item(1000.0, Some(0.2)).total_price(), Some(1200.0));
    }

    #[test]
    fn total_price_rounds_to_cents() {
        assert_eq!(item(10.0, Some(0.3333)).total_price(), Some(13.33));
        assert_eq!(item(0.1, Some(0.0)).total_price(), Some(0.1));
    }

    #[test]
    fn synthesized_item_uses_path_id() {
        let response = ItemResponse::synthesize(-7);
        assert_eq!(response.item_id, -7);
        assert_eq!(response.name, "Item -7");
        assert_eq!(response.price, 420);
    }

    #[test]
    fn echo_omits_absent_optional_fields() {
        let json = serde_json::to_value(ItemEchoResponse::new(None, item(10.0, None))).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Laptop", "price": 10.0}));
    }
}
