//! Primitive arithmetic operations and result formatting

mod format;
mod operations;

pub use format::format_result;
pub use operations::{add, divide, multiply, subtract};
