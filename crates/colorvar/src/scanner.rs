//! Color literal scanning.
//!
//! The token grammar is a single regex covering the supported formats:
//!
//! - `#rgb` / `#rrggbb` hex, word-boundary terminated
//! - `rgb(n, n, n)` with integer components
//! - `rgba(n, n, n, f)` with an integer or decimal alpha
//! - `hsl(n, n%, n%)`
//! - `hsla(n, n%, n%, f)`
//!
//! Scanning is left to right with standard greedy, non-overlapping match
//! semantics. Tokens are yielded exactly as they appear: internal whitespace
//! is not normalized, so `rgb(1,2,3)` and `rgb(1, 2, 3)` are different
//! tokens, and `rgb`/`hsl` function names only match in lowercase. Both are
//! long-standing behavior that downstream keying and substitution rely on.

use once_cell::sync::Lazy;
use regex::Regex;

/// The color-literal token grammar.
///
/// Component ranges are not validated (`rgb(999, 0, 0)` matches); this is a
/// token scanner, not a color parser.
static COLOR_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"#[0-9a-fA-F]{3}(?:[0-9a-fA-F]{3})?\b",
        r"|rgb\((?:\s*\d+\s*,){2}\s*\d+\)",
        r"|rgba\((?:\s*\d+\s*,){3}\s?[\d.]+\)",
        r"|hsl\(\s*\d+\s*(?:\s*,\s*\d+%){2}\)",
        r"|hsla\(\s*\d+(?:\s*,\s*\d+\s*%){2}\s*,\s*[\d.]+\)",
    ))
    .expect("color token grammar is a valid pattern")
});

/// Returns a lazy iterator over every color token in `source`, in order of
/// appearance.
///
/// Repeated colors are yielded once per occurrence; deduplication is the
/// caller's concern (see [`Palette::collect`](crate::Palette::collect)).
pub fn color_tokens(source: &str) -> impl Iterator<Item = &str> {
    COLOR_TOKEN.find_iter(source).map(|m| m.as_str())
}
