//! Colorvar - Extract color literals from stylesheet text into preprocessor
//! variables.
//!
//! Given a chunk of CSS-ish source, colorvar finds every hex, `rgb()`,
//! `rgba()`, `hsl()` and `hsla()` literal, assigns each distinct color a
//! sequentially numbered variable, and returns both the variable declaration
//! block and the source rewritten to reference those variables. It supports
//! the two sigil-based preprocessor syntaxes: `@` variables (less) and `$`
//! variables (scss/sass).
//!
//! Matching is purely textual. There is no CSS parser behind this: a color
//! literal is whatever the token grammar in [`scanner`] says it is, wherever
//! it appears. That keeps the engine tiny and predictable, at the cost of the
//! limitations documented on [`color_tokens`].
//!
//! # Quick Start
//!
//! ```rust
//! use colorvar::convert;
//!
//! let source = "a { color: #FF0000; } b { color: #ff0000; }";
//! let result = convert(source, "scss", "color");
//!
//! assert_eq!(result.declarations, "$color1: #FF0000;");
//! assert_eq!(result.rewritten, "a { color: $color1; } b { color: $color1; }");
//! ```
//!
//! # Pipeline
//!
//! A conversion runs six steps, each behind its own function so the token
//! grammar or naming scheme can be swapped without touching the rest:
//!
//! 1. Resolve the sigil from the preprocessor name ([`resolve_sigil`])
//! 2. Normalize the variable prefix onto the sigil ([`normalize_prefix`])
//! 3. Scan the source for color tokens ([`color_tokens`])
//! 4. Deduplicate and name them ([`Palette::collect`])
//! 5. Render the declaration block ([`Palette::declarations`])
//! 6. Substitute variables back into the source ([`substitute`])
//!
//! Every step is total: empty input, zero matches and unrecognized
//! preprocessor names all produce well-defined results, never errors.

mod convert;
mod palette;
mod preprocessor;
mod scanner;
mod substitute;

// Re-export public API
pub use convert::{convert, Conversion};
pub use palette::{Binding, Palette};
pub use preprocessor::{normalize_prefix, resolve_sigil, Preprocessor, DEFAULT_SIGIL};
pub use scanner::color_tokens;
pub use substitute::substitute;
