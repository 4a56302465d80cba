//! Guest shapes
//!
//! Guests stand alone: no relationships to other resources. `phone_number`
//! is the only required field besides the name.

use serde::{Deserialize, Serialize};

/// Fields a caller may supply when creating a guest.
#[derive(Debug, Clone, Deserialize)]
pub struct GuestCreate {
    pub full_name: String,
    #[serde(default)]
    pub guest_type: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    pub phone_number: String,
}

/// Guest as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct GuestRead {
    pub guest_id: i32,
    pub full_name: String,
    pub guest_type: Option<String>,
    pub category: Option<String>,
    pub comment: Option<String>,
    pub status: Option<String>,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_is_required() {
        let result = serde_json::from_str::<GuestCreate>(r#"{"full_name":"Anna Petrova"}"#);
        assert!(result.is_err());
    }
}
