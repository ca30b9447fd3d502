use std::collections::HashMap;

use crate::artwork::ICONS;
use crate::glyphs::GLYPHS;
use crate::icon::IconDef;

/// Size used by [`IconLibrary::get_default`].
pub const DEFAULT_SIZE: u32 = 24;

/// Size of icons substituted for emoji glyphs.
pub const GLYPH_SIZE: u32 = 20;

/// Name-indexed view over the built-in icon set.
#[derive(Debug, Clone)]
pub struct IconLibrary {
    index: HashMap<&'static str, &'static IconDef>,
}

impl Default for IconLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl IconLibrary {
    #[must_use]
    pub fn new() -> Self {
        Self {
            index: ICONS.iter().map(|icon| (icon.name, icon)).collect(),
        }
    }

    /// Render `name` as SVG markup.
    ///
    /// An unknown name logs a warning and yields an empty string.
    #[must_use]
    pub fn get(&self, name: &str, size: u32, animate: bool) -> String {
        self.try_get(name, size, animate).unwrap_or_else(|| {
            tracing::warn!(icon = name, "icon not found in library");
            String::new()
        })
    }

    /// [`Self::get`] at [`DEFAULT_SIZE`] with animation.
    #[must_use]
    pub fn get_default(&self, name: &str) -> String {
        self.get(name, DEFAULT_SIZE, true)
    }

    #[must_use]
    pub fn try_get(&self, name: &str, size: u32, animate: bool) -> Option<String> {
        self.index.get(name).map(|icon| icon.render(size, animate))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Icon names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        ICONS.iter().map(|icon| icon.name)
    }

    /// Replace every emoji glyph of [`GLYPHS`] in `text` with its icon,
    /// rendered at [`GLYPH_SIZE`] with animation.
    ///
    /// Glyphs are handled in mapping order, each with one global pass, so
    /// the first glyph in mapping order wins when two glyphs overlap. Icon
    /// markup contains no glyphs, so substituted text is never re-matched.
    #[must_use]
    pub fn replace_glyphs(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (glyph, name) in GLYPHS {
            if result.contains(glyph) {
                let icon = self.get(name, GLYPH_SIZE, true);
                result = result.replace(glyph, &icon);
            }
        }
        result
    }
}
