//! Reducer Core - The reducer contract and its primitives
//!
//! This crate defines the pieces every composite reducer is built from:
//! - The reducer contract (`Reducer`, `BoxReducer`, closure adapters)
//! - Action discriminants (`Action`)
//! - The original-state snapshot threaded through one reduction (`Origin`)
//! - The pass-through default (`PassThrough`)
//! - Construction-time configuration errors

pub mod action;
pub mod error;
pub mod origin;
pub mod pass_through;
pub mod reducer;

pub use action::*;
pub use error::*;
pub use origin::*;
pub use pass_through::*;
pub use reducer::*;
