//! Deduplicated color-to-variable assignment.
//!
//! A [`Palette`] is an insertion-ordered map from color token to generated
//! variable name. Colors are keyed by their first-seen casing but compared
//! case-insensitively, so `#FF0000` and `#ff0000` share one variable. Lookup
//! is a linear scan; palettes hold one entry per distinct color in a
//! stylesheet, which in practice is dozens, not thousands.

/// One color-to-variable assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The color token, in the casing it was first seen.
    pub color: String,
    /// The assigned variable name, e.g. `$color1`.
    pub variable: String,
}

/// Ordered mapping from distinct color tokens to variable names.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    bindings: Vec<Binding>,
}

impl Palette {
    /// Builds a palette from a stream of color tokens.
    ///
    /// Tokens are folded in order of appearance with a 1-based counter that
    /// advances only when a token is new under case-insensitive comparison.
    /// Repeats are skipped: they neither reassign the existing variable nor
    /// consume a sequence number.
    pub fn collect<'a, I>(tokens: I, prefix: &str) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut bindings: Vec<Binding> = Vec::new();
        let mut next = 1usize;

        for token in tokens {
            if bindings.iter().any(|b| b.color.eq_ignore_ascii_case(token)) {
                continue;
            }
            bindings.push(Binding {
                color: token.to_string(),
                variable: format!("{}{}", prefix, next),
            });
            next += 1;
        }

        Palette { bindings }
    }

    /// Returns the bindings in first-appearance order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Iterates the bindings in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if no colors were collected.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Renders the variable declaration block.
    ///
    /// One `"<variable>: <color>;"` line per binding, in palette order,
    /// joined with newlines. An empty palette renders an empty string.
    pub fn declarations(&self) -> String {
        self.bindings
            .iter()
            .map(|b| format!("{}: {};", b.variable, b.color))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
