//! Data models for the members backend.

mod member;

pub use member::*;
