mod splitter;
mod types;

pub use splitter::{split_call, SplitOutcome};
pub use types::ArgumentFragment;
