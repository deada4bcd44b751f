use std::sync::OnceLock;

use super::highlight::{Ansi, Highlight, Plain};
use super::site::CallSite;
use crate::render::{describe, lines, Value, DEFAULT_STEP};
use crate::segment::split_call;

/// Long-lived formatter for probe reports.
///
/// Pure configuration: every method takes `&self`, so one instance can be
/// reused across calls without locking.
pub struct Reporter {
    step: usize,
    callee: String,
    highlight: Box<dyn Highlight>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            step: DEFAULT_STEP,
            callee: "probe".to_string(),
            highlight: Box::new(Ansi),
        }
    }
}

impl Reporter {
    /// Reporter with no color, for tests and piped output.
    pub fn plain() -> Self {
        Self {
            highlight: Box::new(Plain),
            ..Self::default()
        }
    }

    pub fn with_highlight(highlight: Box<dyn Highlight>) -> Self {
        Self {
            highlight,
            ..Self::default()
        }
    }

    /// Name of the call the segmenter looks for in captured source.
    pub fn for_callee(mut self, callee: &str) -> Self {
        self.callee = callee.to_string();
        self
    }

    /// Build the report for one invocation.
    ///
    /// Fragment recovery failures degrade to positional `arg N` labels;
    /// this never fails, whatever the captured source looks like.
    pub fn report(&self, site: &CallSite, values: &[Value]) -> String {
        let outcome = split_call(&site.source, &self.callee);

        let mut out = Vec::new();
        out.push(self.highlight.header(&site.header()));

        for (i, value) in values.iter().enumerate() {
            let label = match outcome.fragments.get(i) {
                Some(f) if f.keyword.is_some() => f.keyword.clone().unwrap_or_default(),
                Some(f) if f.interesting => f.source_text.clone(),
                _ => format!("arg {}", i + 1),
            };

            let desc = describe(value);
            let block = lines(value, 0, "", self.step);

            if block.len() == 1 {
                out.push(format!(
                    "  {} = {} {}",
                    self.highlight.label(&label),
                    self.highlight.value_line(&desc.display),
                    self.highlight.summary(&desc.summary()),
                ));
            } else {
                out.push(format!(
                    "  {} {}",
                    self.highlight.label(&label),
                    self.highlight.summary(&desc.summary()),
                ));
                for (line, depth) in block {
                    out.push(format!(
                        "{}{}",
                        " ".repeat(self.step + depth),
                        self.highlight.value_line(&line),
                    ));
                }
            }
        }

        out.join("\n")
    }

    /// Print one invocation's report to stdout.
    pub fn print(&self, site: &CallSite, values: &[Value]) {
        println!("{}", self.report(site, values));
    }
}

static REPORTER: OnceLock<Reporter> = OnceLock::new();

/// Process-wide reporter used by the `probe!` macro.
pub fn global() -> &'static Reporter {
    REPORTER.get_or_init(Reporter::default)
}
