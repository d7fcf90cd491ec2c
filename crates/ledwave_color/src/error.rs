//! # Color Error Types
//!
//! Color math is total; only palette configuration can fail.

use thiserror::Error;

/// Errors that can occur while building or loading palettes.
#[derive(Error, Debug)]
pub enum ColorError {
    /// A color string is not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid hex color {0:?}: expected #RRGGBB or #RRGGBBAA")]
    InvalidHex(String),

    /// A palette does not have exactly 16 stops.
    #[error("palette {name:?} has {found} colors, expected 16")]
    WrongStopCount {
        /// Palette name.
        name: String,
        /// Number of colors given.
        found: usize,
    },

    /// A palette file names the same palette twice, ignoring case.
    #[error("palette {0:?} is defined more than once (names ignore case)")]
    DuplicatePalette(String),

    /// No built-in or loaded palette has this name.
    #[error("unknown palette: {0}")]
    UnknownPalette(String),

    /// Palette file is not valid TOML or has the wrong shape.
    #[error("invalid palette file: {0}")]
    Parse(#[from] toml::de::Error),

    /// Palette file could not be read.
    #[error("failed to read palette file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for palette operations.
pub type ColorResult<T> = Result<T, ColorError>;
