//! Built-in palette catalog
//!
//! The table is compiled in and indexed once on first use; it is never
//! mutated afterwards.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;

use crate::error::{Result, TuidooError};
use crate::theme::color::Rgb;
use crate::theme::palette::{is_valid_identifier, Colors, Gradient, Theme};

/// Identifier of the theme every manager starts from
pub const DEFAULT_THEME_ID: &str = "dark";

static BUILTIN: Lazy<Catalog> = Lazy::new(|| Catalog::index(BUILTIN_THEMES.to_vec()));

/// Read-only mapping from theme identifier to [`Theme`]
#[derive(Debug, Clone)]
pub struct Catalog {
    themes: BTreeMap<&'static str, Theme>,
}

impl Catalog {
    /// The compiled-in catalog
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Build a catalog from an arbitrary theme list, rejecting duplicate
    /// or malformed identifiers
    pub fn from_themes(themes: Vec<Theme>) -> Result<Self> {
        let mut seen = BTreeMap::new();
        for theme in themes {
            if !is_valid_identifier(theme.id) {
                return Err(TuidooError::InvalidPalette(format!(
                    "'{}' is not a kebab-case identifier",
                    theme.id
                )));
            }
            if theme.name.trim().is_empty() {
                return Err(TuidooError::InvalidPalette(format!(
                    "theme '{}' has no display name",
                    theme.id
                )));
            }
            if seen.insert(theme.id, theme).is_some() {
                return Err(TuidooError::DuplicateTheme(theme.id.to_string()));
            }
        }
        Ok(Self { themes: seen })
    }

    // The builtin table is covered by tests, so duplicates cannot reach here
    fn index(themes: Vec<Theme>) -> Self {
        Self {
            themes: themes.into_iter().map(|t| (t.id, t)).collect(),
        }
    }

    /// Exact, case-sensitive identifier lookup
    pub fn lookup(&self, id: &str) -> Option<&Theme> {
        self.themes.get(id)
    }

    /// All identifiers, sorted ascending
    pub fn list_identifiers(&self) -> Vec<&'static str> {
        self.themes.keys().copied().collect()
    }

    /// All themes, in identifier order
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.themes.values()
    }
}

/// The shipped themes
pub static BUILTIN_THEMES: &[Theme] = &[
    Theme {
        id: "dark",
        name: "Dark",
        colors: Colors {
            primary: Rgb::hex(0x06B6D4),
            primary_dark: Rgb::hex(0x0891B2),
            primary_light: Rgb::hex(0x22D3EE),

            accent: Rgb::hex(0xA855F7),
            accent_dark: Rgb::hex(0x9333EA),
            accent_light: Rgb::hex(0xC084FC),

            success: Rgb::hex(0x10B981),
            warning: Rgb::hex(0xF59E0B),
            error: Rgb::hex(0xEF4444),
            info: Rgb::hex(0x3B82F6),

            background: Rgb::hex(0x0F172A),
            foreground: Rgb::hex(0xF1F5F9),
            surface: Rgb::hex(0x1E293B),
            border: Rgb::hex(0x334155),

            text_primary: Rgb::hex(0xF1F5F9),
            text_secondary: Rgb::hex(0x94A3B8),
            text_disabled: Rgb::hex(0x64748B),
            text_inverse: Rgb::hex(0x0F172A),

            hover: Rgb::hex(0x475569),
            active: Rgb::hex(0x06B6D4),
            focus: Rgb::hex(0x22D3EE),
            selected: Rgb::hex(0x0E7490),

            header_gradient: Gradient::six([
                Rgb::hex(0x0E7490),
                Rgb::hex(0x0891B2),
                Rgb::hex(0x06B6D4),
                Rgb::hex(0x22D3EE),
                Rgb::hex(0x3B82F6),
                Rgb::hex(0x0891B2),
            ]),
        },
    },
    Theme {
        id: "light",
        name: "Light",
        colors: Colors {
            primary: Rgb::hex(0x0891B2),
            primary_dark: Rgb::hex(0x0E7490),
            primary_light: Rgb::hex(0x06B6D4),

            accent: Rgb::hex(0x9333EA),
            accent_dark: Rgb::hex(0x7E22CE),
            accent_light: Rgb::hex(0xA855F7),

            success: Rgb::hex(0x059669),
            warning: Rgb::hex(0xD97706),
            error: Rgb::hex(0xDC2626),
            info: Rgb::hex(0x2563EB),

            background: Rgb::hex(0xF8FAFC),
            foreground: Rgb::hex(0x0F172A),
            surface: Rgb::hex(0xFFFFFF),
            border: Rgb::hex(0xE2E8F0),

            text_primary: Rgb::hex(0x0F172A),
            text_secondary: Rgb::hex(0x475569),
            text_disabled: Rgb::hex(0x94A3B8),
            text_inverse: Rgb::hex(0xF8FAFC),

            hover: Rgb::hex(0xF1F5F9),
            active: Rgb::hex(0x0891B2),
            focus: Rgb::hex(0x06B6D4),
            selected: Rgb::hex(0xCFFAFE),

            header_gradient: Gradient::five([
                Rgb::hex(0x0891B2),
                Rgb::hex(0x0D9488),
                Rgb::hex(0x06B6D4),
                Rgb::hex(0x2563EB),
                Rgb::hex(0x4F46E5),
            ]),
        },
    },
    Theme {
        id: "mocha",
        name: "Catppuccin Mocha",
        colors: Colors {
            primary: Rgb::hex(0x89B4FA),
            primary_dark: Rgb::hex(0x74C7EC),
            primary_light: Rgb::hex(0xB4BEFE),

            accent: Rgb::hex(0xCBA6F7),
            accent_dark: Rgb::hex(0xF5C2E7),
            accent_light: Rgb::hex(0xF5E0DC),

            success: Rgb::hex(0xA6E3A1),
            warning: Rgb::hex(0xF9E2AF),
            error: Rgb::hex(0xF38BA8),
            info: Rgb::hex(0x89DCEB),

            background: Rgb::hex(0x1E1E2E),
            foreground: Rgb::hex(0xCDD6F4),
            surface: Rgb::hex(0x313244),
            border: Rgb::hex(0x45475A),

            text_primary: Rgb::hex(0xCDD6F4),
            text_secondary: Rgb::hex(0xBAC2DE),
            text_disabled: Rgb::hex(0xA6ADC8),
            text_inverse: Rgb::hex(0x1E1E2E),

            hover: Rgb::hex(0x585B70),
            active: Rgb::hex(0x89B4FA),
            focus: Rgb::hex(0xF5C2E7),
            selected: Rgb::hex(0x313244),

            header_gradient: Gradient::five([
                Rgb::hex(0xCBA6F7),
                Rgb::hex(0x89B4FA),
                Rgb::hex(0x89DCEB),
                Rgb::hex(0x74C7EC),
                Rgb::hex(0xB4BEFE),
            ]),
        },
    },
    Theme {
        id: "cyberpunk",
        name: "Cyberpunk Neon",
        colors: Colors {
            primary: Rgb::hex(0xFF00FF),
            primary_dark: Rgb::hex(0xC800FF),
            primary_light: Rgb::hex(0xFF00C8),

            accent: Rgb::hex(0x00FFFF),
            accent_dark: Rgb::hex(0x00C8C8),
            accent_light: Rgb::hex(0x64FFFF),

            success: Rgb::hex(0x00FF96),
            warning: Rgb::hex(0xFFFF00),
            error: Rgb::hex(0xFF0096),
            info: Rgb::hex(0x6400FF),

            background: Rgb::hex(0x0A0014),
            foreground: Rgb::hex(0x00FFFF),
            surface: Rgb::hex(0x1A0028),
            border: Rgb::hex(0xFF00FF),

            text_primary: Rgb::hex(0x00FFFF),
            text_secondary: Rgb::hex(0xFF00C8),
            text_disabled: Rgb::hex(0x640064),
            text_inverse: Rgb::hex(0x0A0014),

            hover: Rgb::hex(0x320050),
            active: Rgb::hex(0xFF00FF),
            focus: Rgb::hex(0x00FFFF),
            selected: Rgb::hex(0xC800FF),

            header_gradient: Gradient::five([
                Rgb::hex(0xFF00FF),
                Rgb::hex(0xFF00C8),
                Rgb::hex(0xC800FF),
                Rgb::hex(0x6400FF),
                Rgb::hex(0x00FFFF),
            ]),
        },
    },
    Theme {
        id: "matrix",
        name: "Matrix",
        colors: Colors {
            primary: Rgb::hex(0x00F000),
            primary_dark: Rgb::hex(0x00C800),
            primary_light: Rgb::hex(0x64FF64),

            accent: Rgb::hex(0x00FF00),
            accent_dark: Rgb::hex(0x00C800),
            accent_light: Rgb::hex(0x96FF96),

            success: Rgb::hex(0x64FF64),
            warning: Rgb::hex(0x96FF00),
            error: Rgb::hex(0xFF0000),
            info: Rgb::hex(0x00A000),

            background: Rgb::hex(0x000000),
            foreground: Rgb::hex(0x00FF00),
            surface: Rgb::hex(0x001400),
            border: Rgb::hex(0x005000),

            text_primary: Rgb::hex(0x00FF00),
            text_secondary: Rgb::hex(0x00A000),
            text_disabled: Rgb::hex(0x005000),
            text_inverse: Rgb::hex(0x000000),

            hover: Rgb::hex(0x003200),
            active: Rgb::hex(0x00F000),
            focus: Rgb::hex(0x64FF64),
            selected: Rgb::hex(0x007800),

            header_gradient: Gradient::five([
                Rgb::hex(0x00FF00),
                Rgb::hex(0x00FF66),
                Rgb::hex(0x00FFCC),
                Rgb::hex(0x00CCFF),
                Rgb::hex(0x0099FF),
            ]),
        },
    },
    Theme {
        id: "ocean",
        name: "Ocean",
        colors: Colors {
            primary: Rgb::hex(0x0099CC),
            primary_dark: Rgb::hex(0x006699),
            primary_light: Rgb::hex(0x00B4DC),

            accent: Rgb::hex(0x40E0D0),
            accent_dark: Rgb::hex(0x00B4DC),
            accent_light: Rgb::hex(0x7FFFD4),

            success: Rgb::hex(0x7FFFD4),
            warning: Rgb::hex(0xFFD700),
            error: Rgb::hex(0xFF6B6B),
            info: Rgb::hex(0x40E0D0),

            background: Rgb::hex(0x001928),
            foreground: Rgb::hex(0x7FFFD4),
            surface: Rgb::hex(0x003366),
            border: Rgb::hex(0x006699),

            text_primary: Rgb::hex(0x7FFFD4),
            text_secondary: Rgb::hex(0x00B4DC),
            text_disabled: Rgb::hex(0x006699),
            text_inverse: Rgb::hex(0x001928),

            hover: Rgb::hex(0x004C7F),
            active: Rgb::hex(0x0099CC),
            focus: Rgb::hex(0x40E0D0),
            selected: Rgb::hex(0x006699),

            header_gradient: Gradient::five([
                Rgb::hex(0x003366),
                Rgb::hex(0x006699),
                Rgb::hex(0x0099CC),
                Rgb::hex(0x40E0D0),
                Rgb::hex(0x7FFFD4),
            ]),
        },
    },
    Theme {
        id: "fire",
        name: "Fire",
        colors: Colors {
            primary: Rgb::hex(0xFF6400),
            primary_dark: Rgb::hex(0xFF3200),
            primary_light: Rgb::hex(0xFF9600),

            accent: Rgb::hex(0xFFFF00),
            accent_dark: Rgb::hex(0xFFC800),
            accent_light: Rgb::hex(0xFFFF64),

            success: Rgb::hex(0xFFC800),
            warning: Rgb::hex(0xFF9600),
            error: Rgb::hex(0xFF0000),
            info: Rgb::hex(0xFF6400),

            background: Rgb::hex(0x1A0000),
            foreground: Rgb::hex(0xFFFF00),
            surface: Rgb::hex(0x320000),
            border: Rgb::hex(0xFF3200),

            text_primary: Rgb::hex(0xFFFF00),
            text_secondary: Rgb::hex(0xFF9600),
            text_disabled: Rgb::hex(0x643200),
            text_inverse: Rgb::hex(0x1A0000),

            hover: Rgb::hex(0x4B0000),
            active: Rgb::hex(0xFF6400),
            focus: Rgb::hex(0xFFFF00),
            selected: Rgb::hex(0xFF3200),

            header_gradient: Gradient::five([
                Rgb::hex(0xFF0000),
                Rgb::hex(0xFF3200),
                Rgb::hex(0xFF6400),
                Rgb::hex(0xFF9600),
                Rgb::hex(0xFFFF00),
            ]),
        },
    },
    Theme {
        id: "sunset",
        name: "Sunset",
        colors: Colors {
            primary: Rgb::hex(0xFF8C00),
            primary_dark: Rgb::hex(0xFF6432),
            primary_light: Rgb::hex(0xFF4564),

            accent: Rgb::hex(0x8A2BE2),
            accent_dark: Rgb::hex(0xB400C8),
            accent_light: Rgb::hex(0xDC1496),

            success: Rgb::hex(0xFFB432),
            warning: Rgb::hex(0xFF8C00),
            error: Rgb::hex(0xFF4564),
            info: Rgb::hex(0x8A2BE2),

            background: Rgb::hex(0x1A0A00),
            foreground: Rgb::hex(0xFFDC96),
            surface: Rgb::hex(0x321400),
            border: Rgb::hex(0xFF6432),

            text_primary: Rgb::hex(0xFFDC96),
            text_secondary: Rgb::hex(0xFF8C00),
            text_disabled: Rgb::hex(0x643200),
            text_inverse: Rgb::hex(0x1A0A00),

            hover: Rgb::hex(0x4B1E00),
            active: Rgb::hex(0xFF8C00),
            focus: Rgb::hex(0x8A2BE2),
            selected: Rgb::hex(0xFF6432),

            header_gradient: Gradient::five([
                Rgb::hex(0xFF8C00),
                Rgb::hex(0xFF6432),
                Rgb::hex(0xFF4564),
                Rgb::hex(0xDC1496),
                Rgb::hex(0x8A2BE2),
            ]),
        },
    },
    Theme {
        id: "arctic",
        name: "Arctic",
        colors: Colors {
            primary: Rgb::hex(0xA0C8EB),
            primary_dark: Rgb::hex(0x82B4DC),
            primary_light: Rgb::hex(0xBEDCF5),

            accent: Rgb::hex(0xF0FAFF),
            accent_dark: Rgb::hex(0xDCF0FF),
            accent_light: Rgb::hex(0xFFFFFF),

            success: Rgb::hex(0xDCF0FF),
            warning: Rgb::hex(0xFFE6B4),
            error: Rgb::hex(0xFF9696),
            info: Rgb::hex(0xA0C8EB),

            background: Rgb::hex(0x0F1928),
            foreground: Rgb::hex(0xF0FAFF),
            surface: Rgb::hex(0x1E2D3C),
            border: Rgb::hex(0x6496C8),

            text_primary: Rgb::hex(0xF0FAFF),
            text_secondary: Rgb::hex(0xA0C8EB),
            text_disabled: Rgb::hex(0x6496C8),
            text_inverse: Rgb::hex(0x0F1928),

            hover: Rgb::hex(0x2D3C4B),
            active: Rgb::hex(0xA0C8EB),
            focus: Rgb::hex(0xF0FAFF),
            selected: Rgb::hex(0x82B4DC),

            header_gradient: Gradient::five([
                Rgb::hex(0x6496C8),
                Rgb::hex(0x82B4DC),
                Rgb::hex(0xA0C8EB),
                Rgb::hex(0xBEDCF5),
                Rgb::hex(0xF0FAFF),
            ]),
        },
    },
    Theme {
        id: "retro-amber",
        name: "Retro Amber",
        colors: Colors {
            primary: Rgb::hex(0xFFA000),
            primary_dark: Rgb::hex(0xFF8200),
            primary_light: Rgb::hex(0xFFB432),

            accent: Rgb::hex(0xFFDC96),
            accent_dark: Rgb::hex(0xFFC864),
            accent_light: Rgb::hex(0xFFF0D2),

            success: Rgb::hex(0xFFDC96),
            warning: Rgb::hex(0xFFB432),
            error: Rgb::hex(0xFF6400),
            info: Rgb::hex(0xFFA000),

            background: Rgb::hex(0x000000),
            foreground: Rgb::hex(0xFFDC96),
            surface: Rgb::hex(0x0F0A00),
            border: Rgb::hex(0xFF8200),

            text_primary: Rgb::hex(0xFFDC96),
            text_secondary: Rgb::hex(0xFFA000),
            text_disabled: Rgb::hex(0x643200),
            text_inverse: Rgb::hex(0x000000),

            hover: Rgb::hex(0x1E1400),
            active: Rgb::hex(0xFFA000),
            focus: Rgb::hex(0xFFDC96),
            selected: Rgb::hex(0xFF8200),

            header_gradient: Gradient::five([
                Rgb::hex(0xFF6400),
                Rgb::hex(0xFF8200),
                Rgb::hex(0xFFA000),
                Rgb::hex(0xFFB432),
                Rgb::hex(0xFFDC96),
            ]),
        },
    },
    Theme {
        id: "synthwave",
        name: "Synthwave",
        colors: Colors {
            primary: Rgb::hex(0xFF00C8),
            primary_dark: Rgb::hex(0xFF0080),
            primary_light: Rgb::hex(0xDC00FF),

            accent: Rgb::hex(0x00C8FF),
            accent_dark: Rgb::hex(0x6464FF),
            accent_light: Rgb::hex(0x64DCFF),

            success: Rgb::hex(0x00C8FF),
            warning: Rgb::hex(0xDC00FF),
            error: Rgb::hex(0xFF0080),
            info: Rgb::hex(0x6464FF),

            background: Rgb::hex(0x0A0014),
            foreground: Rgb::hex(0x00C8FF),
            surface: Rgb::hex(0x140028),
            border: Rgb::hex(0xFF00C8),

            text_primary: Rgb::hex(0x00C8FF),
            text_secondary: Rgb::hex(0xFF00C8),
            text_disabled: Rgb::hex(0x640064),
            text_inverse: Rgb::hex(0x0A0014),

            hover: Rgb::hex(0x28003C),
            active: Rgb::hex(0xFF00C8),
            focus: Rgb::hex(0x00C8FF),
            selected: Rgb::hex(0xDC00FF),

            header_gradient: Gradient::five([
                Rgb::hex(0xFF0080),
                Rgb::hex(0xFF00C8),
                Rgb::hex(0xDC00FF),
                Rgb::hex(0x6464FF),
                Rgb::hex(0x00C8FF),
            ]),
        },
    },
    Theme {
        id: "forest",
        name: "Forest",
        colors: Colors {
            primary: Rgb::hex(0x32B432),
            primary_dark: Rgb::hex(0x228B22),
            primary_light: Rgb::hex(0x64C832),

            accent: Rgb::hex(0xB4F064),
            accent_dark: Rgb::hex(0x96DC32),
            accent_light: Rgb::hex(0xD2FF96),

            success: Rgb::hex(0xB4F064),
            warning: Rgb::hex(0xFFDC64),
            error: Rgb::hex(0xFF6464),
            info: Rgb::hex(0x64C832),

            background: Rgb::hex(0x000A00),
            foreground: Rgb::hex(0xD2FF96),
            surface: Rgb::hex(0x001400),
            border: Rgb::hex(0x228B22),

            text_primary: Rgb::hex(0xD2FF96),
            text_secondary: Rgb::hex(0x96DC32),
            text_disabled: Rgb::hex(0x006400),
            text_inverse: Rgb::hex(0x000A00),

            hover: Rgb::hex(0x001E00),
            active: Rgb::hex(0x32B432),
            focus: Rgb::hex(0xB4F064),
            selected: Rgb::hex(0x228B22),

            header_gradient: Gradient::five([
                Rgb::hex(0x006400),
                Rgb::hex(0x228B22),
                Rgb::hex(0x32B432),
                Rgb::hex(0x96DC32),
                Rgb::hex(0xB4F064),
            ]),
        },
    },
    Theme {
        id: "dracula",
        name: "Dracula",
        colors: Colors {
            primary: Rgb::hex(0xBD93F9),
            primary_dark: Rgb::hex(0x9370DB),
            primary_light: Rgb::hex(0xD0B3FF),

            accent: Rgb::hex(0xFF79C6),
            accent_dark: Rgb::hex(0xFF55A3),
            accent_light: Rgb::hex(0xFFA0DC),

            success: Rgb::hex(0x50FA7B),
            warning: Rgb::hex(0xF1FA8C),
            error: Rgb::hex(0xFF5555),
            info: Rgb::hex(0x8BE9FD),

            background: Rgb::hex(0x282A36),
            foreground: Rgb::hex(0xF8F8F2),
            surface: Rgb::hex(0x44475A),
            border: Rgb::hex(0x6272A4),

            text_primary: Rgb::hex(0xF8F8F2),
            text_secondary: Rgb::hex(0xBD93F9),
            text_disabled: Rgb::hex(0x6272A4),
            text_inverse: Rgb::hex(0x282A36),

            hover: Rgb::hex(0x6272A4),
            active: Rgb::hex(0xBD93F9),
            focus: Rgb::hex(0xFF79C6),
            selected: Rgb::hex(0x44475A),

            header_gradient: Gradient::five([
                Rgb::hex(0xBD93F9),
                Rgb::hex(0x8BE9FD),
                Rgb::hex(0x50FA7B),
                Rgb::hex(0xFFB86C),
                Rgb::hex(0xFF79C6),
            ]),
        },
    },
    Theme {
        id: "nord",
        name: "Nord",
        colors: Colors {
            primary: Rgb::hex(0x88C0D0),
            primary_dark: Rgb::hex(0x5E81AC),
            primary_light: Rgb::hex(0x8FBCBB),

            accent: Rgb::hex(0x81A1C1),
            accent_dark: Rgb::hex(0x5E81AC),
            accent_light: Rgb::hex(0xA3BE8C),

            success: Rgb::hex(0xA3BE8C),
            warning: Rgb::hex(0xEBCB8B),
            error: Rgb::hex(0xBF616A),
            info: Rgb::hex(0x88C0D0),

            background: Rgb::hex(0x2E3440),
            foreground: Rgb::hex(0xECEFF4),
            surface: Rgb::hex(0x3B4252),
            border: Rgb::hex(0x4C566A),

            text_primary: Rgb::hex(0xECEFF4),
            text_secondary: Rgb::hex(0xD8DEE9),
            text_disabled: Rgb::hex(0x4C566A),
            text_inverse: Rgb::hex(0x2E3440),

            hover: Rgb::hex(0x434C5E),
            active: Rgb::hex(0x88C0D0),
            focus: Rgb::hex(0x8FBCBB),
            selected: Rgb::hex(0x4C566A),

            header_gradient: Gradient::five([
                Rgb::hex(0x8FBCBB),
                Rgb::hex(0x88C0D0),
                Rgb::hex(0x81A1C1),
                Rgb::hex(0x5E81AC),
                Rgb::hex(0xA3BE8C),
            ]),
        },
    },
    Theme {
        id: "vaporwave",
        name: "Vaporwave",
        colors: Colors {
            primary: Rgb::hex(0xFF8CDC),
            primary_dark: Rgb::hex(0xFF71CE),
            primary_light: Rgb::hex(0xC896FF),

            accent: Rgb::hex(0x64DCFF),
            accent_dark: Rgb::hex(0x78C8FF),
            accent_light: Rgb::hex(0x96F0FF),

            success: Rgb::hex(0x96F0FF),
            warning: Rgb::hex(0xFFDC96),
            error: Rgb::hex(0xFF71CE),
            info: Rgb::hex(0x96B4FF),

            background: Rgb::hex(0x0F0A14),
            foreground: Rgb::hex(0xF0DCFF),
            surface: Rgb::hex(0x1E1428),
            border: Rgb::hex(0xFF71CE),

            text_primary: Rgb::hex(0xF0DCFF),
            text_secondary: Rgb::hex(0xC896FF),
            text_disabled: Rgb::hex(0x64466E),
            text_inverse: Rgb::hex(0x0F0A14),

            hover: Rgb::hex(0x32283C),
            active: Rgb::hex(0xFF8CDC),
            focus: Rgb::hex(0x64DCFF),
            selected: Rgb::hex(0xC896FF),

            header_gradient: Gradient::five([
                Rgb::hex(0xFF71CE),
                Rgb::hex(0xFF8CDC),
                Rgb::hex(0xC896FF),
                Rgb::hex(0x96B4FF),
                Rgb::hex(0x64DCFF),
            ]),
        },
    },
    Theme {
        id: "mono-blue",
        name: "Mono Blue",
        colors: Colors {
            primary: Rgb::hex(0x1E90FF),
            primary_dark: Rgb::hex(0x0064C8),
            primary_light: Rgb::hex(0x46B4FF),

            accent: Rgb::hex(0x87CEFA),
            accent_dark: Rgb::hex(0x46B4FF),
            accent_light: Rgb::hex(0xADD8E6),

            success: Rgb::hex(0xADD8E6),
            warning: Rgb::hex(0xFFD700),
            error: Rgb::hex(0xFF6B6B),
            info: Rgb::hex(0x87CEFA),

            background: Rgb::hex(0x000A14),
            foreground: Rgb::hex(0xADD8E6),
            surface: Rgb::hex(0x001428),
            border: Rgb::hex(0x0064C8),

            text_primary: Rgb::hex(0xADD8E6),
            text_secondary: Rgb::hex(0x46B4FF),
            text_disabled: Rgb::hex(0x003296),
            text_inverse: Rgb::hex(0x000A14),

            hover: Rgb::hex(0x00283C),
            active: Rgb::hex(0x1E90FF),
            focus: Rgb::hex(0x87CEFA),
            selected: Rgb::hex(0x0064C8),

            header_gradient: Gradient::five([
                Rgb::hex(0x003296),
                Rgb::hex(0x0064C8),
                Rgb::hex(0x1E90FF),
                Rgb::hex(0x46B4FF),
                Rgb::hex(0xADD8E6),
            ]),
        },
    },
    Theme {
        id: "lava",
        name: "Lava",
        colors: Colors {
            primary: Rgb::hex(0xFF3200),
            primary_dark: Rgb::hex(0xB40000),
            primary_light: Rgb::hex(0xFF6400),

            accent: Rgb::hex(0xFFFF64),
            accent_dark: Rgb::hex(0xFFB400),
            accent_light: Rgb::hex(0xFFFF96),

            success: Rgb::hex(0xFFB400),
            warning: Rgb::hex(0xFF6400),
            error: Rgb::hex(0x640000),
            info: Rgb::hex(0xFF3200),

            background: Rgb::hex(0x0A0000),
            foreground: Rgb::hex(0xFFFF96),
            surface: Rgb::hex(0x1E0000),
            border: Rgb::hex(0xB40000),

            text_primary: Rgb::hex(0xFFFF96),
            text_secondary: Rgb::hex(0xFFB400),
            text_disabled: Rgb::hex(0x640000),
            text_inverse: Rgb::hex(0x0A0000),

            hover: Rgb::hex(0x320000),
            active: Rgb::hex(0xFF3200),
            focus: Rgb::hex(0xFFFF64),
            selected: Rgb::hex(0xB40000),

            header_gradient: Gradient::five([
                Rgb::hex(0x640000),
                Rgb::hex(0xB40000),
                Rgb::hex(0xFF3200),
                Rgb::hex(0xFF6400),
                Rgb::hex(0xFFFF64),
            ]),
        },
    },
    Theme {
        id: "gruvbox",
        name: "Gruvbox",
        colors: Colors {
            primary: Rgb::hex(0xFABD2F),
            primary_dark: Rgb::hex(0xD79921),
            primary_light: Rgb::hex(0xFADB4E),

            accent: Rgb::hex(0xD3869B),
            accent_dark: Rgb::hex(0xB16286),
            accent_light: Rgb::hex(0xE5A4BA),

            success: Rgb::hex(0xB8BB26),
            warning: Rgb::hex(0xFABD2F),
            error: Rgb::hex(0xFB4934),
            info: Rgb::hex(0x83A598),

            background: Rgb::hex(0x282828),
            foreground: Rgb::hex(0xEBDBB2),
            surface: Rgb::hex(0x3C3836),
            border: Rgb::hex(0x504945),

            text_primary: Rgb::hex(0xEBDBB2),
            text_secondary: Rgb::hex(0xD5C4A1),
            text_disabled: Rgb::hex(0x665C54),
            text_inverse: Rgb::hex(0x282828),

            hover: Rgb::hex(0x504945),
            active: Rgb::hex(0xFABD2F),
            focus: Rgb::hex(0xD3869B),
            selected: Rgb::hex(0x504945),

            header_gradient: Gradient::five([
                Rgb::hex(0xFB4934),
                Rgb::hex(0xFABD2F),
                Rgb::hex(0xB8BB26),
                Rgb::hex(0x83A598),
                Rgb::hex(0xD3869B),
            ]),
        },
    },
    Theme {
        id: "tokyo-night",
        name: "Tokyo Night",
        colors: Colors {
            primary: Rgb::hex(0x7DCFFF),
            primary_dark: Rgb::hex(0x2AC3DE),
            primary_light: Rgb::hex(0xB4F9F8),

            accent: Rgb::hex(0xBB9AF7),
            accent_dark: Rgb::hex(0x9D7CD8),
            accent_light: Rgb::hex(0xC0B6F2),

            success: Rgb::hex(0x9ECE6A),
            warning: Rgb::hex(0xE0AF68),
            error: Rgb::hex(0xF7768E),
            info: Rgb::hex(0x73DACA),

            background: Rgb::hex(0x1A1B26),
            foreground: Rgb::hex(0xC0CAF5),
            surface: Rgb::hex(0x24283B),
            border: Rgb::hex(0x414868),

            text_primary: Rgb::hex(0xC0CAF5),
            text_secondary: Rgb::hex(0xA9B1D6),
            text_disabled: Rgb::hex(0x565F89),
            text_inverse: Rgb::hex(0x1A1B26),

            hover: Rgb::hex(0x343B58),
            active: Rgb::hex(0x7DCFFF),
            focus: Rgb::hex(0xBB9AF7),
            selected: Rgb::hex(0x3D59A1),

            header_gradient: Gradient::five([
                Rgb::hex(0x7DCFFF),
                Rgb::hex(0x73DACA),
                Rgb::hex(0x9ECE6A),
                Rgb::hex(0xE0AF68),
                Rgb::hex(0xBB9AF7),
            ]),
        },
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::tests::sample_theme;
    use crate::theme::palette::{MIN_GRADIENT_STOPS, NAMED_SLOT_COUNT};

    #[test]
    fn test_builtin_has_all_shipped_themes() {
        let expected = [
            "arctic",
            "cyberpunk",
            "dark",
            "dracula",
            "fire",
            "forest",
            "gruvbox",
            "lava",
            "light",
            "matrix",
            "mocha",
            "mono-blue",
            "nord",
            "ocean",
            "retro-amber",
            "sunset",
            "synthwave",
            "tokyo-night",
            "vaporwave",
        ];
        assert_eq!(Catalog::builtin().list_identifiers(), expected);
    }

    #[test]
    fn test_builtin_table_passes_validation() {
        let validated = Catalog::from_themes(BUILTIN_THEMES.to_vec()).unwrap();
        assert_eq!(validated.themes().count(), BUILTIN_THEMES.len());
    }

    #[test]
    fn test_builtin_palettes_are_complete() {
        for theme in Catalog::builtin().themes() {
            assert_eq!(theme.colors.slots().len(), NAMED_SLOT_COUNT);
            assert!(
                theme.colors.header_gradient.stops().len() >= MIN_GRADIENT_STOPS,
                "{} has a short gradient",
                theme.id
            );
        }
    }

    #[test]
    fn test_default_theme_exists() {
        let dark = Catalog::builtin().lookup(DEFAULT_THEME_ID).unwrap();
        assert_eq!(dark.name, "Dark");
        assert_eq!(dark.colors.background, Rgb::hex(0x0F172A));
        assert_eq!(dark.colors.header_gradient.stops().len(), 6);
    }

    #[test]
    fn test_lookup_is_exact() {
        let catalog = Catalog::builtin();
        assert!(catalog.lookup("light").is_some());
        assert!(catalog.lookup("Light").is_none());
        assert!(catalog.lookup(" light").is_none());
        assert!(catalog.lookup("tokyo").is_none());
    }

    #[test]
    fn test_from_themes_rejects_duplicates() {
        let err = Catalog::from_themes(vec![
            sample_theme("one", "One"),
            sample_theme("one", "Another One"),
        ])
        .unwrap_err();
        assert!(matches!(err, TuidooError::DuplicateTheme(id) if id == "one"));
    }

    #[test]
    fn test_from_themes_rejects_bad_identifiers() {
        let err = Catalog::from_themes(vec![sample_theme("Not Kebab", "Nope")]).unwrap_err();
        assert!(matches!(err, TuidooError::InvalidPalette(_)));

        let err = Catalog::from_themes(vec![sample_theme("nameless", "  ")]).unwrap_err();
        assert!(matches!(err, TuidooError::InvalidPalette(_)));
    }
}
