//! Lightweight markup for chat bubbles: `**bold**`, `*italic*`, `• ` bullet
//! lines and line breaks. Anything else is shown as escaped text.

use once_cell::sync::Lazy;
use regex::Regex;

const BULLET_PREFIX: &str = "• ";
pub const ERROR_ICON: &str = r#"<i class="fas fa-exclamation-triangle"></i>"#;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern"));

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Render message text to HTML.
pub fn format_message(content: &str) -> String {
    let escaped = escape_html(content);
    let emphasized = BOLD.replace_all(&escaped, "<strong>${1}</strong>");
    let emphasized = ITALIC.replace_all(&emphasized, "<em>${1}</em>");

    let mut blocks: Vec<String> = Vec::new();
    let mut list: Vec<String> = Vec::new();
    for line in emphasized.split('\n') {
        match line.strip_prefix(BULLET_PREFIX).filter(|item| !item.is_empty()) {
            Some(item) => list.push(format!("<li>{item}</li>")),
            None => {
                flush_list(&mut list, &mut blocks);
                blocks.push(line.to_string());
            }
        }
    }
    flush_list(&mut list, &mut blocks);
    blocks.join("<br>")
}

fn flush_list(items: &mut Vec<String>, blocks: &mut Vec<String>) {
    if items.is_empty() {
        return;
    }
    blocks.push(format!("<ul>{}</ul>", items.concat()));
    items.clear();
}

/// Error bubbles skip the markup pipeline and carry a warning icon.
pub fn format_error(content: &str) -> String {
    format!("{ERROR_ICON} {}", escape_html(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_only_gets_line_breaks() {
        assert_eq!(format_message("hello there"), "hello there");
        assert_eq!(
            format_message("one\ntwo\n\nthree"),
            "one<br>two<br><br>three"
        );
    }

    #[test]
    fn bold_runs_before_italic() {
        assert_eq!(
            format_message("**Mission:** we *teach*"),
            "<strong>Mission:</strong> we <em>teach</em>"
        );
    }

    #[test]
    fn bullet_lines_become_one_list() {
        assert_eq!(format_message("• a\n• b"), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn separate_bullet_runs_get_separate_lists() {
        assert_eq!(
            format_message("**Values:**\n• a\n• b\nthen\n• c"),
            "<strong>Values:</strong><br><ul><li>a</li><li>b</li></ul><br>then<br><ul><li>c</li></ul>"
        );
    }

    #[test]
    fn bullet_items_keep_inline_markup() {
        assert_eq!(
            format_message("• **Equity:** for all"),
            "<ul><li><strong>Equity:</strong> for all</li></ul>"
        );
    }

    #[test]
    fn html_is_escaped() {
        assert_eq!(
            format_message("<script>x</script> & co"),
            "&lt;script&gt;x&lt;/script&gt; &amp; co"
        );
    }

    #[test]
    fn error_text_is_not_formatted() {
        assert_eq!(format_error("**oops**"), format!("{ERROR_ICON} **oops**"));
    }
}
