use serde::{Deserialize, Serialize};

/// Row of `products`. The id is supplied by the client, not generated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
#[sqlx(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub name: String,
    pub count: i32,
    /// Opaque text; never parsed as a date.
    pub create_date: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub status: bool,
    pub unit: String,
}

/// Body for create: every column, including the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    pub count: i32,
    pub create_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub status: bool,
    pub unit: String,
}

/// Body for full update: every column except the id, which comes from the path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductChanges {
    pub name: String,
    pub count: i32,
    pub create_date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    pub status: bool,
    pub unit: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_product_reads_camel_case_fields() {
        let p: NewProduct = serde_json::from_value(json!({
            "id": "p-1",
            "name": "Bolt",
            "count": 40,
            "createDate": "2024-03-01",
            "description": "M6 bolt",
            "image": "https://img.example/bolt.png",
            "status": true,
            "unit": "pcs"
        }))
        .unwrap();
        assert_eq!(p.create_date, "2024-03-01");
        assert_eq!(p.count, 40);
        assert!(p.status);
    }

    #[test]
    fn description_and_image_are_optional() {
        let p: NewProduct = serde_json::from_value(json!({
            "id": "p-2",
            "name": "Nut",
            "count": 3,
            "createDate": "yesterday",
            "status": false,
            "unit": "pcs"
        }))
        .unwrap();
        assert!(p.description.is_none());
        assert!(p.image.is_none());
    }

    #[test]
    fn name_weight_update_body_is_rejected() {
        let err = serde_json::from_value::<ProductChanges>(json!({"Name": "Nut", "Weight": 1.5}));
        assert!(err.is_err());
    }

    #[test]
    fn record_serializes_create_date_in_camel_case() {
        let p = Product {
            id: "p-1".into(),
            name: "Bolt".into(),
            count: 1,
            create_date: "2024-03-01".into(),
            description: None,
            image: None,
            status: true,
            unit: "pcs".into(),
        };
        let v = serde_json::to_value(&p).unwrap();
        assert_eq!(v["createDate"], "2024-03-01");
        assert!(v["description"].is_null());
    }
}
