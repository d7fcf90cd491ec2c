//! # Named Colors
//!
//! CSS/X11 web colors, as used by the built-in palettes. Palette files
//! may refer to these by name (case-insensitive, e.g. `"DarkBlue"`).

use crate::rgba::Rgba;

macro_rules! named_colors {
    ($($ident:ident = $name:literal $hex:literal;)*) => {
        $(
            #[doc = concat!("`", $name, "`")]
            pub const $ident: Rgba = Rgba::from_rgb_u32($hex);
        )*

        /// Every named color, keyed by its lowercase CSS name.
        pub const ALL: &[(&str, Rgba)] = &[$(($name, $ident)),*];
    };
}

named_colors! {
    AQUA = "aqua" 0x00_FFFF;
    AQUAMARINE = "aquamarine" 0x7F_FFD4;
    BLACK = "black" 0x00_0000;
    BLUE = "blue" 0x00_00FF;
    CADET_BLUE = "cadetblue" 0x5F_9EA0;
    CORAL = "coral" 0xFF_7F50;
    CORNFLOWER_BLUE = "cornflowerblue" 0x64_95ED;
    CRIMSON = "crimson" 0xDC_143C;
    CYAN = "cyan" 0x00_FFFF;
    DARK_BLUE = "darkblue" 0x00_008B;
    DARK_CYAN = "darkcyan" 0x00_8B8B;
    DARK_GREEN = "darkgreen" 0x00_6400;
    DARK_OLIVE_GREEN = "darkolivegreen" 0x55_6B2F;
    DARK_RED = "darkred" 0x8B_0000;
    DEEP_SKY_BLUE = "deepskyblue" 0x00_BFFF;
    FOREST_GREEN = "forestgreen" 0x22_8B22;
    GOLD = "gold" 0xFF_D700;
    GRAY = "gray" 0x80_8080;
    GREEN = "green" 0x00_8000;
    INDIGO = "indigo" 0x4B_0082;
    LAWN_GREEN = "lawngreen" 0x7C_FC00;
    LIGHT_BLUE = "lightblue" 0xAD_D8E6;
    LIGHT_GREEN = "lightgreen" 0x90_EE90;
    LIGHT_SKY_BLUE = "lightskyblue" 0x87_CEFA;
    LIME = "lime" 0x00_FF00;
    LIME_GREEN = "limegreen" 0x32_CD32;
    MAGENTA = "magenta" 0xFF_00FF;
    MAROON = "maroon" 0x80_0000;
    MEDIUM_AQUAMARINE = "mediumaquamarine" 0x66_CDAA;
    MEDIUM_BLUE = "mediumblue" 0x00_00CD;
    MIDNIGHT_BLUE = "midnightblue" 0x19_1970;
    NAVY = "navy" 0x00_0080;
    OLIVE_DRAB = "olivedrab" 0x6B_8E23;
    ORANGE = "orange" 0xFF_A500;
    ORANGE_RED = "orangered" 0xFF_4500;
    PINK = "pink" 0xFF_C0CB;
    PURPLE = "purple" 0x80_0080;
    RED = "red" 0xFF_0000;
    SEA_GREEN = "seagreen" 0x2E_8B57;
    SKY_BLUE = "skyblue" 0x87_CEEB;
    TEAL = "teal" 0x00_8080;
    VIOLET = "violet" 0xEE_82EE;
    WHITE = "white" 0xFF_FFFF;
    YELLOW = "yellow" 0xFF_FF00;
    YELLOW_GREEN = "yellowgreen" 0x9A_CD32;
}

/// Looks up a color by CSS name, ignoring ASCII case.
#[must_use]
pub fn by_name(name: &str) -> Option<Rgba> {
    ALL.iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, color)| color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values() {
        assert_eq!(DARK_BLUE, Rgba::new(0, 0, 0x8B));
        assert_eq!(ORANGE, Rgba::new(255, 165, 0));
        assert_eq!(WHITE, Rgba::WHITE);
        assert_eq!(BLACK, Rgba::BLACK);
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(by_name("DarkBlue"), Some(DARK_BLUE));
        assert_eq!(by_name("SEAGREEN"), Some(SEA_GREEN));
        assert_eq!(by_name("dark blue"), None);
        assert_eq!(by_name("chartreuse-ish"), None);
    }

    #[test]
    fn test_names_are_unique_and_lowercase() {
        for (i, (name, _)) in ALL.iter().enumerate() {
            assert_eq!(*name, name.to_ascii_lowercase());
            assert!(ALL[i + 1..].iter().all(|(other, _)| other != name), "{name} repeated");
        }
    }
}
