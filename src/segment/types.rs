/// The recovered source text of one top-level call argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentFragment {
    /// Source slice for the argument, flattened to one line.
    pub source_text: String,
    /// True when the fragment carries a name or interpolated string,
    /// i.e. when the text says more than the value itself would.
    pub interesting: bool,
    /// Target identifier of a `name=value` keyword argument, when present.
    pub keyword: Option<String>,
}
