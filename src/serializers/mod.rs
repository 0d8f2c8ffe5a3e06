//! Conversion between stored records and their JSON wire form.

mod member;

pub use member::*;
