/// Where a probe call happened, as supplied by the instrumented code.
///
/// `source` holds the literal text spanning the call expression; it may
/// cover several physical lines.
#[derive(Debug, Clone)]
pub struct CallSite {
    pub file: String,
    pub line: u32,
    /// Enclosing scope name (the `probe!` macro supplies the module path).
    pub function: String,
    pub source: String,
}

impl CallSite {
    pub fn header(&self) -> String {
        format!("{}:{} {}", self.file, self.line, self.function)
    }
}
