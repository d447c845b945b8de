//! Pure data structures managed by the resource actors.

pub mod dish;
pub mod order;

pub use dish::*;
pub use order::*;
