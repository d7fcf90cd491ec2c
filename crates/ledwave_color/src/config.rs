//! # Palette Library
//!
//! Built-in palettes plus user palettes loaded from TOML at startup:
//!
//! ```toml
//! [palettes.sunset]
//! colors = [
//!     "#000000", "#1a0010", "#330020", "#4d0030",
//!     "#660040", "#800050", "#990040", "#b30030",
//!     "#cc2020", "#e64010", "#ff6000", "#ff8000",
//!     "#ffa000", "#ffc040", "#ffe080", "orange",
//! ]
//! ```
//!
//! Colors are `#RRGGBB`, `#RRGGBBAA` or a CSS color name. A user palette
//! with a built-in name replaces the built-in.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ColorError, ColorResult};
use crate::named;
use crate::palette::{Palette16, BUILTIN};
use crate::rgba::Rgba;

/// On-disk shape of a palette file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteFile {
    #[serde(default)]
    palettes: BTreeMap<String, PaletteEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PaletteEntry {
    colors: Vec<String>,
}

/// Palettes by name: user palettes first, then the built-ins.
#[derive(Clone, Debug, Default)]
pub struct PaletteLibrary {
    user: BTreeMap<String, Palette16>,
}

impl PaletteLibrary {
    /// Creates a library holding only the built-in palettes.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a palette file.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Parse`] for malformed TOML or unknown keys,
    /// [`ColorError::InvalidHex`] for a bad color,
    /// [`ColorError::WrongStopCount`] for a palette without 16 colors, or
    /// [`ColorError::DuplicatePalette`] for two names that differ only in
    /// case.
    pub fn from_toml_str(text: &str) -> ColorResult<Self> {
        let file: PaletteFile = toml::from_str(text)?;

        let mut library = Self::new();
        for (name, entry) in file.palettes {
            if library.user.contains_key(&name.to_ascii_lowercase()) {
                return Err(ColorError::DuplicatePalette(name));
            }
            let colors = entry
                .colors
                .iter()
                .map(String::as_str)
                .map(parse_color)
                .collect::<ColorResult<Vec<_>>>()?;
            let palette = Palette16::from_slice(&name, &colors)?;
            library.insert(name, palette);
        }

        tracing::debug!(palettes = library.user.len(), "loaded palette library");
        Ok(library)
    }

    /// Reads and parses a palette file.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::Io`] if the file cannot be read, otherwise as
    /// [`PaletteLibrary::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> ColorResult<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading palette file");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Adds or replaces a user palette.
    pub fn insert(&mut self, name: impl Into<String>, palette: Palette16) {
        let name = name.into();
        if BUILTIN.iter().any(|(builtin, _)| builtin.eq_ignore_ascii_case(&name)) {
            tracing::warn!(palette = %name, "user palette shadows a built-in palette");
        }
        self.user.insert(name.to_ascii_lowercase(), palette);
    }

    /// Looks up a palette by name, ignoring ASCII case.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::UnknownPalette`] if neither a user palette nor
    /// a built-in has this name.
    pub fn get(&self, name: &str) -> ColorResult<Palette16> {
        match self.user.get(&name.to_ascii_lowercase()) {
            Some(palette) => Ok(*palette),
            None => Palette16::builtin(name),
        }
    }

    /// Every available name, sorted, without duplicates.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = BUILTIN
            .iter()
            .map(|&(name, _)| name)
            .chain(self.user.keys().map(String::as_str))
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// A CSS name or a hex color.
fn parse_color(text: &str) -> ColorResult<Rgba> {
    named::by_name(text).map_or_else(|| Rgba::from_hex(text), Ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops(color: &str, count: usize) -> String {
        let quoted = format!("\"{color}\"");
        vec![quoted; count].join(", ")
    }

    #[test]
    fn test_new_has_builtins() {
        let library = PaletteLibrary::new();
        assert_eq!(library.get("lava").unwrap(), Palette16::LAVA);
        assert_eq!(library.names().len(), BUILTIN.len());
    }

    #[test]
    fn test_parse_user_palette() {
        let text = format!("[palettes.Mint]\ncolors = [{}]\n", stops("#00ff80", 16));
        let library = PaletteLibrary::from_toml_str(&text).unwrap();

        let mint = library.get("mint").unwrap();
        assert_eq!(mint.color_at(0x7777), Rgba::new(0, 255, 128));
        assert_eq!(library.get("MINT").unwrap(), mint);
        assert!(library.names().contains(&"mint"));
    }

    #[test]
    fn test_named_and_alpha_colors() {
        let text = format!(
            "[palettes.mix]\ncolors = [\"DarkBlue\", \"#11223344\", {}]\n",
            stops("white", 14)
        );
        let mix = PaletteLibrary::from_toml_str(&text).unwrap().get("mix").unwrap();
        assert_eq!(mix[0], named::DARK_BLUE);
        assert_eq!(mix[1], Rgba::from_rgba(0x11, 0x22, 0x33, 0x44));
        assert_eq!(mix[15], Rgba::WHITE);
    }

    #[test]
    fn test_user_palette_shadows_builtin() {
        let text = format!("[palettes.heat]\ncolors = [{}]\n", stops("#0000ff", 16));
        let library = PaletteLibrary::from_toml_str(&text).unwrap();
        assert_eq!(library.get("heat").unwrap().color_at(0), Rgba::new(0, 0, 255));
        assert_eq!(library.names().iter().filter(|&&n| n == "heat").count(), 1);
    }

    #[test]
    fn test_names_differing_in_case_are_rejected() {
        let text = format!(
            "[palettes.Mint]\ncolors = [{}]\n[palettes.mint]\ncolors = [{}]\n",
            stops("#00ff80", 16),
            stops("#0000ff", 16)
        );
        assert!(matches!(
            PaletteLibrary::from_toml_str(&text),
            Err(ColorError::DuplicatePalette(name)) if name == "mint"
        ));
    }

    #[test]
    fn test_empty_file() {
        let library = PaletteLibrary::from_toml_str("").unwrap();
        assert_eq!(library.names().len(), BUILTIN.len());
    }

    #[test]
    fn test_errors() {
        let short = format!("[palettes.short]\ncolors = [{}]\n", stops("#000000", 15));
        assert!(matches!(
            PaletteLibrary::from_toml_str(&short),
            Err(ColorError::WrongStopCount { found: 15, .. })
        ));

        let bad = format!("[palettes.bad]\ncolors = [\"#12345\", {}]\n", stops("#000000", 15));
        assert!(matches!(PaletteLibrary::from_toml_str(&bad), Err(ColorError::InvalidHex(_))));

        assert!(matches!(
            PaletteLibrary::from_toml_str("[palettes.x]\nstops = []\n"),
            Err(ColorError::Parse(_))
        ));
        assert!(matches!(
            PaletteLibrary::from_toml_str("palettes = ["),
            Err(ColorError::Parse(_))
        ));

        assert!(matches!(
            PaletteLibrary::new().get("nope"),
            Err(ColorError::UnknownPalette(name)) if name == "nope"
        ));
    }
}
