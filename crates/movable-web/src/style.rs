#![forbid(unsafe_code)]

//! Pure string/number plumbing for the DOM modules; native-testable.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_HOST_ID: AtomicU64 = AtomicU64::new(1);

/// Format a pixel length for a style write.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}

/// Generate a document-unique id for a host element.
#[must_use]
pub fn unique_host_id() -> String {
    let n = NEXT_HOST_ID.fetch_add(1, Ordering::Relaxed);
    format!("movable-{n}")
}

/// Rewrite `:host` selectors to `#<id>` for the non-shadow style fallback.
///
/// Only whole-word occurrences are rewritten: `:host .x` becomes
/// `#movable-1 .x`, while `:hostile` is left alone.
#[must_use]
pub fn rewrite_host_selector(css: &str, id: &str) -> String {
    const NEEDLE: &str = ":host";
    let mut out = String::with_capacity(css.len());
    let mut rest = css;
    while let Some(at) = rest.find(NEEDLE) {
        let (before, tail) = rest.split_at(at);
        out.push_str(before);
        let after = &tail[NEEDLE.len()..];
        let word_continues = after
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if word_continues {
            out.push_str(NEEDLE);
        } else {
            out.push('#');
            out.push_str(id);
        }
        rest = after;
    }
    out.push_str(rest);
    out
}
