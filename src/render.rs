//! Report rendering.
//!
//! Produces the HTML fragments written into the result region, and a plain
//! text rendition of a report for terminals.

use scraper::Html;

use crate::config::ANALYZING_TEXT;
use crate::models::AnalysisResponse;

const WRAPPER_OPEN: &str = r#"<div class="hope">  <div class="am-g am-container">    <div class="am-u-lg-6 am-u-md-6 am-u-sm-12">        "#;
const WRAPPER_CLOSE: &str = "    </div>  </div></div>";

/// Fragment shown in the result region while a request is in flight.
pub fn analyzing_placeholder() -> String {
    wrap(&format!("<p>{}</p>", ANALYZING_TEXT))
}

/// Replaces every `\n` and every `\r` with `<br>`.
///
/// Characters are converted one by one, so `\r\n` yields two breaks.
pub fn newlines_to_breaks(data: &str) -> String {
    let mut out = String::with_capacity(data.len());
    for c in data.chars() {
        match c {
            '\n' | '\r' => out.push_str("<br>"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders a decoded response into the result region fragment.
///
/// Picks the colored report template when the response carries a color,
/// the plain paragraph otherwise. `data` is inserted as markup.
pub fn render_response(response: &AnalysisResponse) -> String {
    let body = newlines_to_breaks(&response.data);
    match response.color.as_deref() {
        Some(color) => render_report(response.title.as_deref().unwrap_or_default(), color, &body),
        None => wrap(&format!("<p>{}</p>", body)),
    }
}

fn render_report(title: &str, color: &str, body: &str) -> String {
    let color = css_color(color);
    wrap(&format!(
        concat!(
            r#"<div class="am-panel" style="border-color: {color};">"#,
            r#"<div class="am-panel-hd" style="background-color: {color}; color: #fff;">"#,
            r#"<h3 class="am-panel-title">{title}</h3></div>"#,
            r#"<div class="am-panel-bd"><p>{body}</p></div></div>"#,
        ),
        color = color,
        title = escape_text(title),
        body = body,
    ))
}

fn wrap(inner: &str) -> String {
    format!("{}{}{}", WRAPPER_OPEN, inner, WRAPPER_CLOSE)
}

/// Renders a response for a terminal: the title line, then the report with
/// markup stripped and non-breaking spaces turned into plain spaces.
pub fn render_plain_text(response: &AnalysisResponse) -> String {
    let mut out = String::new();
    if let Some(title) = response.title.as_deref().filter(|t| !t.is_empty()) {
        out.push_str(title);
        out.push('\n');
        out.push('\n');
    }
    let fragment = Html::parse_fragment(&response.data);
    let text: String = fragment.root_element().text().collect();
    let text = text.replace('\u{a0}', " ");
    for line in text.lines() {
        out.push_str(line.trim_end());
        out.push('\n');
    }
    while out.ends_with("\n\n") {
        out.pop();
    }
    out
}

fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Keeps only characters that can appear in a CSS color value (`#fff`,
/// `green`, `rgb(221, 81, 76)`), so the value cannot leave the declaration
/// or the attribute.
fn css_color(value: &str) -> String {
    value
        .chars()
        .filter(|c| {
            c.is_ascii_alphanumeric() || matches!(c, '#' | '(' | ')' | ',' | '.' | '%' | ' ')
        })
        .collect()
}
