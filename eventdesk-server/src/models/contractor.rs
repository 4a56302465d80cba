//! Contractor shapes
//!
//! Contractors are the only resource with foreign keys: every contractor
//! belongs to exactly one category and one event. The references are plain
//! integer keys; the database enforces that they exist.

use serde::{Deserialize, Serialize};

/// Fields a caller may supply when creating or replacing a contractor.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractorCreate {
    pub name: String,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub service_cost: Option<f64>,
    pub category_id: i32,
    pub event_id: i32,
}

/// Contractor as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct ContractorRead {
    pub contractor_id: i32,
    pub name: String,
    pub status: String,
    pub description: Option<String>,
    pub phone_number: Option<String>,
    pub service_cost: Option<f64>,
    pub category_id: i32,
    pub event_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_both_references() {
        let missing_event = serde_json::from_str::<ContractorCreate>(
            r#"{"name":"DJ Sasha","status":"booked","category_id":1}"#,
        );
        assert!(missing_event.is_err());

        let full = serde_json::from_str::<ContractorCreate>(
            r#"{"name":"DJ Sasha","status":"booked","category_id":1,"event_id":2}"#,
        )
        .expect("valid payload");
        assert_eq!(full.category_id, 1);
        assert_eq!(full.event_id, 2);
        assert!(full.service_cost.is_none());
    }
}
