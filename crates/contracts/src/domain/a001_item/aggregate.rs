use serde::{Deserialize, Serialize};

/// Catalog item (aggregate a001). Ids are issued by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
}

/// Create/update payload. The items endpoint accepts only the name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub name: String,
}

/// List envelope of the items endpoint: `{ "content": [...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemListResponse {
    pub content: Vec<Item>,
}

impl ItemListResponse {
    /// Unwrap the envelope into the plain collection.
    pub fn into_items(self) -> Vec<Item> {
        self.content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_envelope_uses_content_field() {
        let json = r#"{"content":[{"id":"61a","name":"Coffee"},{"id":"61b","name":"Tea"}]}"#;
        let parsed: ItemListResponse = serde_json::from_str(json).unwrap();
        let items = parsed.into_items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "61a");
        assert_eq!(items[1].name, "Tea");
    }

    #[test]
    fn test_dto_serializes_name_only() {
        let dto = ItemDto {
            name: "Coffee".to_string(),
        };
        let json = serde_json::to_string(&dto).unwrap();
        assert_eq!(json, r#"{"name":"Coffee"}"#);
    }

    #[test]
    fn test_item_round_trips_with_plain_id() {
        let item = Item {
            id: "61a".to_string(),
            name: "Coffee".to_string(),
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"61a","name":"Coffee"}"#);
        let back: Item = serde_json::from_str(&json).unwrap();
        assert_eq!(back, item);
    }
}
