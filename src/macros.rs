/// Print each argument's source text next to its value, type and length.
///
/// ```
/// use call_probe::probe;
///
/// let items = vec![1, 2, 3];
/// probe!(items, items.len() + 1, "done");
/// ```
///
/// The macro is the call-site locator: it records `file!()`, `line!()`
/// and `module_path!()`, and reconstructs the call text from
/// `stringify!` so the segmenter can recover per-argument source.
#[macro_export]
macro_rules! probe {
    ($($arg:expr),+ $(,)?) => {{
        let site = $crate::report::CallSite {
            file: file!().to_string(),
            line: line!(),
            function: module_path!().to_string(),
            source: concat!("probe(", stringify!($($arg),+), ")").to_string(),
        };
        let values = vec![$($crate::render::Value::capture(&$arg)),+];
        $crate::report::global().print(&site, &values);
    }};
}
