//! Task board management
//!
//! The board holds the ordered task collection. [`reduce`] is the pure
//! transition function; [`BoardStore`] wraps it with persistence.

mod model;
mod store;

pub use model::*;
pub use store::*;
