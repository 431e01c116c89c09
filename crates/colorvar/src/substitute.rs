//! Variable substitution into the source text.
//!
//! Each palette binding is replaced globally, in palette order, matching
//! case-insensitively: the deduplication in [`Palette`] treats `#FF0000` and
//! `#ff0000` as one color, so every casing of a bound token must resolve to
//! the same variable.
//!
//! Substituted variable names can never re-match as color tokens: they start
//! with the sigil, not `#` or a function name, so later passes cannot pick up
//! text an earlier pass introduced.

use regex::{NoExpand, Regex};

use crate::palette::Palette;

/// Rewrites `source` with every color occurrence replaced by its variable.
///
/// Colors with no binding in `palette` (none, if the palette was collected
/// from this source) are left as-is; with an empty palette the source is
/// returned unchanged.
pub fn substitute(source: &str, palette: &Palette) -> String {
    let mut rewritten = source.to_string();

    for binding in palette.iter() {
        rewritten = replace_ignore_case(&rewritten, &binding.color, &binding.variable);
    }

    rewritten
}

/// Replaces every occurrence of `token`, in any casing, with `variable`.
///
/// The token is passed through [`regex::escape`] before the pattern is
/// built: color tokens contain `(`, `)`, `.` and other metacharacters, and
/// every one of them must be neutralized. The replacement side needs the
/// same care, via [`NoExpand`]: a `$color1` replacement string would
/// otherwise be read as a capture-group reference.
fn replace_ignore_case(text: &str, token: &str, variable: &str) -> String {
    let pattern = Regex::new(&format!("(?i){}", regex::escape(token)))
        .expect("escaped literal is a valid pattern");
    pattern.replace_all(text, NoExpand(variable)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_tokens;

    fn convert_body(source: &str, prefix: &str) -> String {
        let palette = Palette::collect(color_tokens(source), prefix);
        substitute(source, &palette)
    }

    #[test]
    fn replaces_every_occurrence() {
        let css = "a { color: #111; } b { color: #111; } c { color: #222; }";
        assert_eq!(
            convert_body(css, "$c"),
            "a { color: $c1; } b { color: $c1; } c { color: $c2; }"
        );
    }

    #[test]
    fn all_casings_share_the_variable() {
        let css = "a { color: #FF0000; } b { color: #ff0000; } c { color: #Ff0000; }";
        assert_eq!(
            convert_body(css, "$c"),
            "a { color: $c1; } b { color: $c1; } c { color: $c1; }"
        );
    }

    #[test]
    fn lowercase_key_still_covers_uppercase_occurrences() {
        let css = "a { color: #ff0000; } b { color: #FF0000; }";
        assert_eq!(convert_body(css, "$c"), "a { color: $c1; } b { color: $c1; }");
    }

    #[test]
    fn metacharacters_in_function_tokens_are_escaped() {
        let css = "a { background: rgba(0, 0, 0, 0.5); } b { background: rgba(0, 0, 0, 0.5); }";
        assert_eq!(
            convert_body(css, "$c"),
            "a { background: $c1; } b { background: $c1; }"
        );
    }

    #[test]
    fn dollar_in_variable_name_is_not_a_capture_reference() {
        // NoExpand: the replacement must land verbatim.
        let css = "a { color: hsl(120, 50%, 50%); }";
        assert_eq!(convert_body(css, "$shade"), "a { color: $shade1; }");
    }

    #[test]
    fn empty_palette_returns_source_unchanged() {
        let css = "a { margin: 0; }";
        assert_eq!(substitute(css, &Palette::default()), css);
    }
}
