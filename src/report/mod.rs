mod highlight;
mod reporter;
mod site;

pub use highlight::{Ansi, Highlight, Plain};
pub use reporter::{global, Reporter};
pub use site::CallSite;
