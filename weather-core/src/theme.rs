use serde::{Deserialize, Serialize};

/// A 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// Color palette for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg_primary: Rgb,
    pub bg_card: Rgb,
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub primary: Rgb,
    pub secondary: Rgb,
    pub accent: Rgb,
}

const DARK: Palette = Palette {
    bg_primary: Rgb::from_hex(0x121212),
    bg_card: Rgb::from_hex(0x1F1F1F),
    text_primary: Rgb::from_hex(0xE0E0E0),
    text_secondary: Rgb::from_hex(0xA0A0A0),
    primary: Rgb::from_hex(0x90CAF9),
    secondary: Rgb::from_hex(0x0288D1),
    accent: Rgb::from_hex(0xFFD54F),
};

const LIGHT: Palette = Palette {
    bg_primary: Rgb::from_hex(0xF5F9FF),
    bg_card: Rgb::from_hex(0xFFFFFF),
    text_primary: Rgb::from_hex(0x2E2E2E),
    text_secondary: Rgb::from_hex(0x6D7D8B),
    primary: Rgb::from_hex(0x4FC3F7),
    secondary: Rgb::from_hex(0x0288D1),
    accent: Rgb::from_hex(0xFFD54F),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Dark => DARK,
            ThemeMode::Light => LIGHT,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert!(ThemeMode::default().is_dark());
    }

    #[test]
    fn double_toggle_restores_mode_and_palette() {
        for mode in [ThemeMode::Dark, ThemeMode::Light] {
            let back = mode.toggle().toggle();
            assert_eq!(back, mode);
            assert_eq!(back.palette(), mode.palette());
            assert_ne!(mode.toggle(), mode);
        }
    }

    #[test]
    fn palettes_match_reference_colors() {
        let dark = ThemeMode::Dark.palette();
        assert_eq!(dark.bg_primary.hex(), "#121212");
        assert_eq!(dark.primary.hex(), "#90CAF9");

        let light = ThemeMode::Light.palette();
        assert_eq!(light.bg_card.hex(), "#FFFFFF");
        assert_eq!(light.text_secondary.hex(), "#6D7D8B");
        assert_eq!(light.secondary, dark.secondary);
        assert_eq!(light.accent, dark.accent);
    }

    #[test]
    fn theme_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            theme: ThemeMode,
        }

        let w: Wrapper = toml::from_str(r#"theme = "light""#).unwrap();
        assert_eq!(w.theme, ThemeMode::Light);
    }
}
