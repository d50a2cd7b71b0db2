//! # autolist-adapter-storage-json
//!
//! Flat-file persistence adapter.
//!
//! ## Responsibilities
//! - Implement the `AutomationRepository` port defined in `autolist-app::ports`
//! - Read and parse the JSON array of automations **on every call**, so edits
//!   to the file are visible to the next request without a restart
//! - Map IO and JSON failures into the domain's data-access error
//!
//! ## Dependency rule
//! Depends on `autolist-app` (for port traits) and `autolist-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod automation_repo;
mod error;

pub use automation_repo::JsonAutomationRepository;
pub use error::StorageError;
