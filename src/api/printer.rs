//! Console rendering of probe responses

use crate::core::client::ProbeResponse;
use crate::core::constants::{BANNER_WIDTH, MAX_RAW_BODY_CHARS, header};
use serde_json::Value;

/// Placeholder printed for an empty body
pub const EMPTY_BODY: &str = "(empty)";

/// Whether a response header is worth showing
///
/// Matches the `x-amz`, `content-type` and `date` prefixes, ignoring case.
pub fn is_displayed_header(name: &str) -> bool {
    let name = name.to_ascii_lowercase();
    header::DISPLAYED_PREFIXES
        .iter()
        .any(|prefix| name.starts_with(prefix))
}

/// Render a body: pretty JSON, else truncated raw text, else a placeholder
pub fn render_body(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Ok(pretty) = serde_json::to_string_pretty(&value) {
            return pretty;
        }
    }

    if body.is_empty() {
        return EMPTY_BODY.to_string();
    }

    body.chars().take(MAX_RAW_BODY_CHARS).collect()
}

/// Render a titled report for one response
pub fn render(title: &str, response: &ProbeResponse) -> String {
    let rule = "=".repeat(BANNER_WIDTH);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        format!("📌 {}", title),
        rule,
        format!("Status: {}", response.status),
        "Headers:".to_string(),
    ];

    lines.extend(
        response
            .headers
            .iter()
            .filter(|(name, _)| is_displayed_header(name))
            .map(|(name, value)| format!("  {}: {}", name, value)),
    );

    lines.push(String::new());
    lines.push("Body:".to_string());
    lines.push(render_body(&response.body));
    lines.push(String::new());

    lines.join("\n")
}

/// Print a titled report for one response to stdout
pub fn print_response(title: &str, response: &ProbeResponse) {
    println!("{}", render(title, response));
}
