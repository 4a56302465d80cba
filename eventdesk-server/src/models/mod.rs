//! Input/output shapes per resource
//!
//! Each resource has a `*Create` shape (fields a caller may supply) and a
//! `*Read` shape (the same fields plus the storage-assigned identity key).
//! Validation is structural only and happens at the serde boundary: required
//! vs optional fields and primitive type coercion. No business rules live
//! here.

pub mod category;
pub mod contractor;
pub mod event;
pub mod guest;

pub use category::{CategoryCreate, CategoryRead};
pub use contractor::{ContractorCreate, ContractorRead};
pub use event::{EventCreate, EventRead};
pub use guest::{GuestCreate, GuestRead};
