//! Authentication building blocks.
//!
//! Token issuing, refresh, and credential storage belong to the external
//! identity provider; this service only validates the HS256 access tokens
//! it is handed.

pub mod jwt;
