//! # fsa-icons
//!
//! Scalable, optionally animated SVG icons that replace emoji glyphs in page
//! text.
//!
//! ```
//! use fsa_icons::IconLibrary;
//!
//! let icons = IconLibrary::new();
//! let svg = icons.get("money", 24, true);
//! assert!(svg.starts_with("<svg class=\"icon icon-money icon-animate\""));
//!
//! let text = icons.replace_glyphs("Save \u{1F4B0} now");
//! assert!(text.contains("icon-money"));
//! ```

mod artwork;
mod glyphs;
mod icon;
mod library;

pub use glyphs::GLYPHS;
pub use icon::IconDef;
pub use library::{DEFAULT_SIZE, GLYPH_SIZE, IconLibrary};
