//! HTML rendering of a finished reasoning chain

use crate::chain::ChainOutcome;
use std::fmt::Write;

/// Render each step as a collapsible section and the final answer as a
/// plain block, followed by the total thinking time.
pub fn render_html(outcome: &ChainOutcome) -> String {
    let mut html = String::new();

    for step in &outcome.steps {
        let title = escape_html(step.title());
        let content = escape_html(step.content());
        if step.is_final_answer() {
            let _ = write!(html, "<h3>{title}</h3><p>{content}</p>");
        } else {
            let _ = write!(
                html,
                "<details><summary><strong>{title}</strong></summary>\
                 <p>{content}</p>\
                 <p><em>Thinking time for this step: {:.2} seconds</em></p>\
                 </details><br>",
                step.thinking_time_secs()
            );
        }
    }

    let _ = write!(
        html,
        "<strong>Total thinking time: {:.2} seconds</strong>",
        outcome.total_thinking_time_secs()
    );
    html
}

/// Escape text for inclusion in HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
