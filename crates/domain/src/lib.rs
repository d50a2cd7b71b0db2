//! # autolist-domain
//!
//! Pure domain model for the autolist automation listing.
//!
//! ## Responsibilities
//! - Foundational types: record identifiers, error conventions, timestamps
//! - Define the **Automation** record (`id`, `name`, `status`, `creationTime`, `type`)
//! - Define the **query parameter grammar** shared by the server and the client
//!   (`page`, `limit`, `sortBy`, `order`, field filters)
//! - Implement the **query processor**: exact-match filtering, per-field
//!   comparators, and page slicing over an in-memory collection
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod automation;
pub mod query;
