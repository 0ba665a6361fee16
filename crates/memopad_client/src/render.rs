//! HTML rendering for the memo list view.
//!
//! # Responsibility
//! - Escape user text and produce the list fragment the page re-renders from.
//!
//! # Invariants
//! - `title`/`content` are always escaped before insertion, so stored markup
//!   can never execute in the page.
//! - The whole container is rebuilt from the latest server response; there is
//!   no incremental patching.

use memopad_core::Memo;
use std::fmt::Write as _;

/// Escapes `& < > " '` for safe interpolation into HTML.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Renders the full memo list container fragment.
pub fn render_memo_list(memos: &[Memo]) -> String {
    if memos.is_empty() {
        return "<p class=\"no-memos\">No memos yet. Create one with the form above.</p>\n"
            .to_string();
    }

    let mut html = String::new();
    for memo in memos {
        html.push_str(&render_memo(memo));
    }
    html
}

fn render_memo(memo: &Memo) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<div class=\"memo-item\" data-id=\"{}\">", memo.id);
    let _ = writeln!(
        html,
        "  <div class=\"memo-header\"><h3 class=\"memo-title\">{}</h3></div>",
        escape_html(&memo.title)
    );
    let _ = writeln!(
        html,
        "  <div class=\"memo-content\">{}</div>",
        escape_html(&memo.content)
    );
    if memo.created_at == memo.updated_at {
        let _ = writeln!(
            html,
            "  <div class=\"memo-meta\">Created: {}</div>",
            escape_html(&memo.created_at)
        );
    } else {
        let _ = writeln!(
            html,
            "  <div class=\"memo-meta\">Created: {} | Updated: {}</div>",
            escape_html(&memo.created_at),
            escape_html(&memo.updated_at)
        );
    }
    html.push_str("</div>\n");
    html
}
