//! Preprocessor identification: sigil resolution and prefix normalization.
//!
//! The sigil is the leading character of a variable reference in a given
//! preprocessor syntax: `@name` in less, `$name` in scss and sass. Generated
//! variable names are `<prefix><n>`, so the prefix must carry the sigil; the
//! caller may supply it with or without one.

use std::fmt;

/// Sigil used when the preprocessor name is not recognized.
///
/// Unknown names are not an error. The scss family is the common case, so
/// anything unrecognized (`"css"`, `""`, typos) falls back to `$`.
pub const DEFAULT_SIGIL: char = '$';

/// A supported stylesheet preprocessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preprocessor {
    /// Less, `@` variables.
    Less,
    /// SCSS, `$` variables.
    Scss,
    /// Indented Sass, `$` variables.
    Sass,
}

impl Preprocessor {
    /// Parses a preprocessor name, case-insensitively.
    ///
    /// Returns `None` for anything other than `less`, `scss` or `sass`;
    /// callers that just need a sigil should use [`resolve_sigil`], which
    /// folds `None` into [`DEFAULT_SIGIL`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "less" => Some(Preprocessor::Less),
            "scss" => Some(Preprocessor::Scss),
            "sass" => Some(Preprocessor::Sass),
            _ => None,
        }
    }

    /// Returns the variable sigil for this preprocessor.
    pub fn sigil(self) -> char {
        match self {
            Preprocessor::Less => '@',
            Preprocessor::Scss | Preprocessor::Sass => '$',
        }
    }

    /// Returns the canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Preprocessor::Less => "less",
            Preprocessor::Scss => "scss",
            Preprocessor::Sass => "sass",
        }
    }
}

impl fmt::Display for Preprocessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resolves a preprocessor name to its variable sigil.
///
/// Total function: unrecognized names silently resolve to [`DEFAULT_SIGIL`].
pub fn resolve_sigil(name: &str) -> char {
    Preprocessor::from_name(name)
        .map(Preprocessor::sigil)
        .unwrap_or(DEFAULT_SIGIL)
}

/// Ensures a variable prefix carries the sigil.
///
/// If the prefix already contains the sigil anywhere it is returned
/// unchanged; otherwise the sigil is prepended. The containment check (rather
/// than starts-with) is deliberate: a caller who typed `my$prefix` gets
/// exactly that back, not `$my$prefix`.
pub fn normalize_prefix(prefix: &str, sigil: char) -> String {
    if prefix.contains(sigil) {
        prefix.to_string()
    } else {
        format!("{}{}", sigil, prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_preprocessors() {
        assert_eq!(Preprocessor::from_name("less"), Some(Preprocessor::Less));
        assert_eq!(Preprocessor::from_name("scss"), Some(Preprocessor::Scss));
        assert_eq!(Preprocessor::from_name("sass"), Some(Preprocessor::Sass));
        assert_eq!(Preprocessor::from_name("stylus"), None);
    }

    #[test]
    fn name_matching_is_case_insensitive() {
        assert_eq!(Preprocessor::from_name("LESS"), Some(Preprocessor::Less));
        assert_eq!(Preprocessor::from_name("Scss"), Some(Preprocessor::Scss));
        assert_eq!(Preprocessor::from_name("SASS"), Some(Preprocessor::Sass));
    }

    #[test]
    fn sigils() {
        assert_eq!(Preprocessor::Less.sigil(), '@');
        assert_eq!(Preprocessor::Scss.sigil(), '$');
        assert_eq!(Preprocessor::Sass.sigil(), '$');
    }

    #[test]
    fn resolve_sigil_falls_back_to_default() {
        assert_eq!(resolve_sigil("less"), '@');
        assert_eq!(resolve_sigil("scss"), '$');
        assert_eq!(resolve_sigil("sass"), '$');
        assert_eq!(resolve_sigil("css"), '$');
        assert_eq!(resolve_sigil(""), '$');
    }

    #[test]
    fn prefix_without_sigil_gets_one() {
        assert_eq!(normalize_prefix("c", '$'), "$c");
        assert_eq!(normalize_prefix("color", '@'), "@color");
        assert_eq!(normalize_prefix("", '$'), "$");
    }

    #[test]
    fn prefix_with_sigil_is_unchanged() {
        assert_eq!(normalize_prefix("$c", '$'), "$c");
        assert_eq!(normalize_prefix("@color", '@'), "@color");
    }

    #[test]
    fn sigil_anywhere_suppresses_prepending() {
        // Containment, not starts-with.
        assert_eq!(normalize_prefix("my$prefix", '$'), "my$prefix");
        assert_eq!(normalize_prefix("c@", '@'), "c@");
    }

    #[test]
    fn display_names() {
        assert_eq!(Preprocessor::Less.to_string(), "less");
        assert_eq!(Preprocessor::Scss.to_string(), "scss");
        assert_eq!(Preprocessor::Sass.to_string(), "sass");
    }
}
