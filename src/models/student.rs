use serde::{Deserialize, Serialize};

/// Row of `students`. Field and column names are PascalCase on the wire and in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "PascalCase")]
#[sqlx(rename_all = "PascalCase")]
pub struct Student {
    /// Generated by the database.
    pub id: i32,
    pub name: String,
    pub weight: f64,
}

/// Body for create and full update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StudentPayload {
    pub name: String,
    pub weight: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn record_serializes_with_column_names() {
        let student = Student {
            id: 1,
            name: "Ada".into(),
            weight: 61.5,
        };
        assert_eq!(
            serde_json::to_value(&student).unwrap(),
            json!({"Id": 1, "Name": "Ada", "Weight": 61.5})
        );
    }

    #[test]
    fn payload_requires_both_fields() {
        let ok: StudentPayload = serde_json::from_value(json!({"Name": "Ada", "Weight": 61.5})).unwrap();
        assert_eq!(ok.name, "Ada");
        assert!(serde_json::from_value::<StudentPayload>(json!({"Name": "Ada"})).is_err());
        assert!(serde_json::from_value::<StudentPayload>(json!({"Name": "Ada", "Weight": "heavy"})).is_err());
    }

    #[test]
    fn integral_weight_is_accepted() {
        let p: StudentPayload = serde_json::from_value(json!({"Name": "Bo", "Weight": 70})).unwrap();
        assert_eq!(p.weight, 70.0);
    }
}
