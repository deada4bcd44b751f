use thiserror::Error;

/// Failure taxonomy for call-site recovery and value capture.
///
/// Every variant is swallowed at the reporting boundary and degrades to
/// placeholder output; nothing here ever aborts the instrumented program.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The callee name was not found in the captured source window.
    #[error("call to `{0}` not found in captured source")]
    SourceNotFound(String),

    /// The captured source ran out before the call's closing parenthesis.
    #[error("unbalanced delimiters in captured source")]
    UnbalancedDelimiters,

    /// A value could not be converted into the renderable model.
    #[error("value of type `{0}` cannot be represented")]
    Unrepresentable(String),
}
