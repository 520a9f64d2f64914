//! Rendering helpers shared by assertion failure messages.

use serde_json::Value;

/// Renders a collection of header values as `{"a", "b"}`, or `{empty}`
/// when there are none.
pub(crate) fn render_value_set<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let rendered: Vec<String> = values
        .into_iter()
        .map(|value| format!("\"{}\"", value.as_ref()))
        .collect();

    if rendered.is_empty() {
        "{empty}".to_string()
    } else {
        format!("{{{}}}", rendered.join(", "))
    }
}

/// Renders a JSON value compactly for inclusion in a failure message.
pub(crate) fn render_json(value: &Value) -> String {
    value.to_string()
}
