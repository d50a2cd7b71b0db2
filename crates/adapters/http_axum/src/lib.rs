//! # autolist-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve `GET /api/automations`: filter, sort and paginate the collection
//!   according to the query string
//! - Serve `GET /health`
//! - Map query strings into application service calls (driving adapter)
//! - Map application results and errors into JSON responses
//!
//! ## Dependency rule
//! Depends on `autolist-app` (for port traits and services) and `autolist-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
