use super::value::Value;

/// Default indentation added per nesting level.
pub const DEFAULT_STEP: usize = 4;

/// Column width past which text is broken out into a wrapped block.
pub const WRAP_WIDTH: usize = 70;

/// Render a value as `(line, depth)` pairs describing an indented tree.
///
/// Pure function of its inputs: rendering the same value twice yields the
/// same lines, and no state is shared between invocations. A container's
/// children sit exactly one `step` deeper than its brackets; the closing
/// bracket returns to the opening depth and carries the caller's suffix.
pub fn lines(value: &Value, depth: usize, suffix: &str, step: usize) -> Vec<(String, usize)> {
    let mut out = Vec::new();
    match value {
        Value::List(items) => sequence(&mut out, items, "[", "]", depth, suffix, step),
        Value::Tuple(items) => sequence(&mut out, items, "(", ")", depth, suffix, step),
        Value::Set(items) => sequence(&mut out, items, "{", "}", depth, suffix, step),
        Value::Map(entries) => {
            out.push(("{".to_string(), depth));
            for (key, child) in entries {
                let rendered = lines(child, depth + step, ",", step);
                let mut rendered = rendered.into_iter();
                if let Some((first, _)) = rendered.next() {
                    out.push((format!("{:?}: {}", key, first), depth + step));
                }
                out.extend(rendered);
            }
            out.push((format!("}}{}", suffix), depth));
        }
        Value::Str(s) if s.contains('\n') || s.chars().count() > WRAP_WIDTH => {
            out.push(("(".to_string(), depth));
            for piece in wrap(s, WRAP_WIDTH) {
                out.push((format!("{:?}", piece), depth + step));
            }
            out.push((format!("){}", suffix), depth));
        }
        _ => out.push((format!("{}{}", value.repr(), suffix), depth)),
    }
    out
}

/// Join `(line, depth)` pairs into text, left-padding each line with its
/// depth in spaces.
pub fn render(value: &Value, step: usize) -> String {
    lines(value, 0, "", step)
        .into_iter()
        .map(|(line, depth)| format!("{}{}", " ".repeat(depth), line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn sequence(
    out: &mut Vec<(String, usize)>,
    items: &[Value],
    open: &str,
    close: &str,
    depth: usize,
    suffix: &str,
    step: usize,
) {
    out.push((open.to_string(), depth));
    for item in items {
        out.extend(lines(item, depth + step, ",", step));
    }
    out.push((format!("{}{}", close, suffix), depth));
}

/// Word-wrap text: existing line breaks split first, then each resulting
/// line is wrapped greedily to `width`. Overlong words overflow on their
/// own line rather than being cut.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.split('\n') {
        let mut current = String::new();
        for word in line.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
            } else if current.chars().count() + 1 + word.chars().count() <= width {
                current.push(' ');
                current.push_str(word);
            } else {
                out.push(current);
                current = word.to_string();
            }
        }
        out.push(current);
    }
    out
}
