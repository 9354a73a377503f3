//! `text-mix` -- blend two strings into an intermediate one.
//!
//! Provides two ways of producing a string "between" two inputs:
//!
//! - **Traversal** -- compute the Levenshtein matrix, backtrack along a
//!   minimum-cost path, and apply the first N edits to the second string.
//! - **Word mixing** -- split on spaces, interpolate numeric words, and mix
//!   the rest char by char according to a ratio.
//!
//! ```
//! use text_mix::TextMixer;
//!
//! let mixer = TextMixer::default();
//! assert_eq!(mixer.traverse("kitten", "sitting", 2).unwrap(), "sitten");
//! assert_eq!(mixer.text_mix("5 apples", "10 apples", 0.5), "8 apples");
//! ```

pub mod config;
pub mod error;
pub mod mix;

pub use config::MixerConfig;
pub use error::{MixError, MixResult};
pub use mix::TextMixer;
pub use mix::matrix::distance;
pub use mix::words::{is_numeric, text_mix};
