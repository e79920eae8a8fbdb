//! # Disambiguators
//!
//! Pure functions that take a candidate already captured by
//! [`crate::patterns`] and decide whether it really is an entity. Rules that
//! would explode a single regex (dot runs in usernames, the one-letter domain
//! allowlist) live here instead.

pub mod domain;
pub mod username;

pub use domain::{DomainRejection, IANA_ONE_LETTER_DOMAINS, validate_domain};
pub use username::{Username, disambiguate_username};
