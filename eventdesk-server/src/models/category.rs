//! Contractor category shapes

use serde::{Deserialize, Serialize};

/// Fields a caller may supply when creating a contractor category.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryCreate {
    pub category_name: String,
}

/// Contractor category as returned to callers.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryRead {
    pub category_id: i32,
    pub category_name: String,
}
