//! Form state management

mod contact;
mod field;

pub use contact::*;
pub use field::*;
