//! The conversion pipeline.

use crate::palette::Palette;
use crate::preprocessor::{normalize_prefix, resolve_sigil};
use crate::scanner::color_tokens;
use crate::substitute::substitute;

/// Result of a conversion: the declaration block plus the rewritten source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Variable declarations, one per distinct color, newline-joined.
    /// Empty when the source contained no color literals.
    pub declarations: String,
    /// The source text with color literals replaced by variable references.
    pub rewritten: String,
}

impl Conversion {
    /// Declarations and rewritten source as one block, separated by a blank
    /// line. With no declarations this is just the rewritten text.
    pub fn merged(&self) -> String {
        if self.declarations.is_empty() {
            self.rewritten.clone()
        } else {
            format!("{}\n\n{}", self.declarations, self.rewritten)
        }
    }
}

/// Converts color literals in `source` into preprocessor variables.
///
/// `preprocessor` picks the sigil (`less` → `@`, `scss`/`sass` → `$`,
/// anything else → `$`), case-insensitively. `prefix` names the variables;
/// the sigil is prepended unless the prefix already contains it. Each
/// distinct color, case-insensitively, gets `<prefix><n>` with `n` counting
/// up from 1 in first-appearance order.
///
/// Every input is valid: empty source, unknown preprocessor names and text
/// without a single color all convert cleanly.
///
/// # Example
///
/// ```rust
/// use colorvar::convert;
///
/// let result = convert("a { color: #111; border-color: #111; }", "less", "tone");
/// assert_eq!(result.declarations, "@tone1: #111;");
/// assert_eq!(result.rewritten, "a { color: @tone1; border-color: @tone1; }");
/// ```
pub fn convert(source: &str, preprocessor: &str, prefix: &str) -> Conversion {
    let sigil = resolve_sigil(preprocessor);
    let prefix = normalize_prefix(prefix, sigil);
    let palette = Palette::collect(color_tokens(source), &prefix);

    Conversion {
        declarations: palette.declarations(),
        rewritten: substitute(source, &palette),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_separates_with_blank_line() {
        let conversion = Conversion {
            declarations: "$c1: #111;".to_string(),
            rewritten: "a { color: $c1; }".to_string(),
        };
        assert_eq!(conversion.merged(), "$c1: #111;\n\na { color: $c1; }");
    }

    #[test]
    fn merged_without_declarations_is_just_the_source() {
        let conversion = Conversion {
            declarations: String::new(),
            rewritten: "a { margin: 0; }".to_string(),
        };
        assert_eq!(conversion.merged(), "a { margin: 0; }");
    }
}
