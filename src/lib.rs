//! locman - a localization management API
//!
//! Stores translation keys (e.g. `button.save`) with per-language values,
//! exposes endpoints to list/search/update them, and serves flattened
//! key→value maps to consuming applications for a given locale.

pub mod cli;
pub mod error;
pub mod http;
pub mod store;
pub mod validation;
