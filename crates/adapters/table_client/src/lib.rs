//! # autolist-adapter-table-client
//!
//! Headless client side of the automations table.
//!
//! ## Responsibilities
//! - Hold the table's UI state as an immutable [`TableState`] value; every
//!   interaction (sort header click, page change, page-size change, filter)
//!   produces a new value
//! - Translate that state into wire query parameters and back
//!   ([`codec`]), including the 0-based UI page index ↔ 1-based wire page
//! - Remember the sort preference in an injected [`PreferenceStore`]
//! - Apply server responses with a last-request-wins policy
//!   ([`AutomationTable`])
//! - Talk to `GET /api/automations` over HTTP ([`HttpGateway`])
//!
//! Rendering is left to the embedding UI.
//!
//! ## Dependency rule
//! Depends on `autolist-domain` only, sharing the wire grammar and record
//! types with the server.

pub mod codec;
pub mod error;
pub mod gateway;
pub mod preferences;
pub mod state;
pub mod table;

pub use error::{ClientError, PreferenceError};
pub use gateway::{AutomationsGateway, HttpGateway};
pub use preferences::{JsonFilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
pub use state::TableState;
pub use table::{AutomationTable, PendingRequest, TableData};
