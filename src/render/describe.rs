use super::value::Value;

/// Flat, one-level description of a value: a display string plus ordered
/// `(key, value)` attribute pairs. Structural unpacking is the
/// pretty-printer's job, not this one's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueDescription {
    pub display: String,
    pub attributes: Vec<(String, String)>,
}

impl ValueDescription {
    /// Attribute summary as shown after a label, e.g. `(str len=12)`.
    pub fn summary(&self) -> String {
        let mut out = String::from("(");
        for (i, (key, value)) in self.attributes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            if key == "type" {
                out.push_str(value);
            } else {
                out.push_str(key);
                out.push('=');
                out.push_str(value);
            }
        }
        out.push(')');
        out
    }
}

/// Describe one value: canonical display plus `type` and optional `len`.
pub fn describe(value: &Value) -> ValueDescription {
    let display = match value {
        // Triple-quote markers flag multi-line content up front.
        Value::Str(s) if s.contains('\n') => format!("\"\"\"{}\"\"\"", s),
        _ => value.repr(),
    };

    let mut attributes = vec![("type".to_string(), value.type_name().to_string())];
    if let Some(len) = value.len() {
        attributes.push(("len".to_string(), len.to_string()));
    }

    ValueDescription {
        display,
        attributes,
    }
}
