//! Service layer: one method per member use case, independent of HTTP.

mod member;

pub use member::*;
