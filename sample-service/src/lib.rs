//! A minimal customer service used to exercise `should-http` end-to-end.
//!
//! The service exists only to produce responses with interesting status
//! codes, headers, and bodies; it carries no business logic worth the
//! name.

pub mod app;
pub mod config;
pub mod customers;
