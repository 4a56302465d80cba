//! Event shapes
//!
//! `event_date` is a wall-clock timestamp without timezone, matching the
//! TIMESTAMP column. `budget` is NUMERIC(12,2) in storage and travels as a
//! `Decimal` to avoid float rounding on money.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fields a caller may supply when creating or replacing an event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventCreate {
    pub name: String,
    pub event_date: NaiveDateTime,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub budget: Option<Decimal>,
}

/// Event as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct EventRead {
    pub event_id: i32,
    pub name: String,
    pub event_date: NaiveDateTime,
    pub event_type: Option<String>,
    pub budget: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_naive_timestamp() {
        let input: EventCreate = serde_json::from_str(
            r#"{"name":"Launch","event_date":"2025-06-01T10:00:00","budget":500.00}"#,
        )
        .expect("valid payload");

        assert_eq!(input.name, "Launch");
        assert_eq!(input.event_date.to_string(), "2025-06-01 10:00:00");
        assert_eq!(input.budget, Some(Decimal::new(500, 0)));
        assert!(input.event_type.is_none());
    }

    #[test]
    fn rejects_missing_required_fields() {
        let result = serde_json::from_str::<EventCreate>(r#"{"name":"Launch"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn optional_fields_default_to_none() {
        let input: EventCreate = serde_json::from_str(
            r#"{"name":"Launch","event_date":"2025-06-01T10:00:00"}"#,
        )
        .expect("valid payload");
        assert!(input.event_type.is_none());
        assert!(input.budget.is_none());
    }
}
