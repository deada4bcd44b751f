mod describe;
mod pretty;
mod value;

pub use describe::{describe, ValueDescription};
pub use pretty::{lines, render, DEFAULT_STEP, WRAP_WIDTH};
pub use value::Value;
