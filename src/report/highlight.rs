use colored::Colorize;

/// Formatting hook applied to each piece of report output. The reporter
/// treats implementations as opaque; they only restyle text.
pub trait Highlight: Send + Sync {
    fn header(&self, text: &str) -> String;
    fn label(&self, text: &str) -> String;
    fn summary(&self, text: &str) -> String;
    fn value_line(&self, text: &str) -> String;
}

/// Passthrough highlighter for tests and piped output.
pub struct Plain;

impl Highlight for Plain {
    fn header(&self, text: &str) -> String {
        text.to_string()
    }

    fn label(&self, text: &str) -> String {
        text.to_string()
    }

    fn summary(&self, text: &str) -> String {
        text.to_string()
    }

    fn value_line(&self, text: &str) -> String {
        text.to_string()
    }
}

/// ANSI color highlighter for interactive terminals.
pub struct Ansi;

impl Highlight for Ansi {
    fn header(&self, text: &str) -> String {
        text.bold().to_string()
    }

    fn label(&self, text: &str) -> String {
        text.bright_cyan().to_string()
    }

    fn summary(&self, text: &str) -> String {
        text.yellow().to_string()
    }

    fn value_line(&self, text: &str) -> String {
        text.bright_white().to_string()
    }
}
