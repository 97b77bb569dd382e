//! Palette record types
//!
//! A [`Colors`] value is a closed record: every slot is a struct field, so a
//! palette with a missing colour does not compile. The header ramp is a
//! [`Gradient`], which can only hold five or six stops.

use serde::Serialize;

use crate::core::task::{Priority, Status};
use crate::theme::color::Rgb;

/// Number of named solid colour slots in a palette
pub const NAMED_SLOT_COUNT: usize = 22;

/// Minimum number of stops in a header gradient
pub const MIN_GRADIENT_STOPS: usize = 5;

/// Ordered colour ramp used for banner previews
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    stops: [Rgb; 6],
    len: usize,
}

impl Gradient {
    /// A five-stop ramp
    pub const fn five(stops: [Rgb; 5]) -> Self {
        Self {
            stops: [stops[0], stops[1], stops[2], stops[3], stops[4], stops[4]],
            len: 5,
        }
    }

    /// A six-stop ramp
    pub const fn six(stops: [Rgb; 6]) -> Self {
        Self { stops, len: 6 }
    }

    /// The populated stops, in order
    pub fn stops(&self) -> &[Rgb] {
        &self.stops[..self.len]
    }

    pub fn first(&self) -> Rgb {
        self.stops[0]
    }

    pub fn last(&self) -> Rgb {
        self.stops[self.len - 1]
    }
}

impl Serialize for Gradient {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.stops())
    }
}

/// The full semantic colour set of a theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Colors {
    // Primary
    pub primary: Rgb,
    pub primary_dark: Rgb,
    pub primary_light: Rgb,

    // Accent
    pub accent: Rgb,
    pub accent_dark: Rgb,
    pub accent_light: Rgb,

    // Status
    pub success: Rgb,
    pub warning: Rgb,
    pub error: Rgb,
    pub info: Rgb,

    // Neutral
    pub background: Rgb,
    pub foreground: Rgb,
    pub surface: Rgb,
    pub border: Rgb,

    // Text
    pub text_primary: Rgb,
    pub text_secondary: Rgb,
    pub text_disabled: Rgb,
    pub text_inverse: Rgb,

    // Interaction states
    pub hover: Rgb,
    pub active: Rgb,
    pub focus: Rgb,
    pub selected: Rgb,

    /// Ramp for banner previews
    pub header_gradient: Gradient,
}

impl Colors {
    /// Every named solid slot with its field name, in declaration order
    pub fn slots(&self) -> [(&'static str, Rgb); NAMED_SLOT_COUNT] {
        [
            ("primary", self.primary),
            ("primary_dark", self.primary_dark),
            ("primary_light", self.primary_light),
            ("accent", self.accent),
            ("accent_dark", self.accent_dark),
            ("accent_light", self.accent_light),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("info", self.info),
            ("background", self.background),
            ("foreground", self.foreground),
            ("surface", self.surface),
            ("border", self.border),
            ("text_primary", self.text_primary),
            ("text_secondary", self.text_secondary),
            ("text_disabled", self.text_disabled),
            ("text_inverse", self.text_inverse),
            ("hover", self.hover),
            ("active", self.active),
            ("focus", self.focus),
            ("selected", self.selected),
        ]
    }
}

/// A named palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Stable kebab-case key, also the persisted identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    pub colors: Colors,
}

impl Theme {
    /// Foreground colour for a task priority
    pub fn priority_color(&self, priority: Priority) -> Rgb {
        match priority {
            Priority::Urgent | Priority::High => self.colors.error,
            Priority::Medium => self.colors.warning,
            Priority::Low => self.colors.info,
        }
    }

    /// Foreground colour for a task status
    pub fn status_color(&self, status: Status) -> Rgb {
        match status {
            Status::Done | Status::Closed => self.colors.success,
            Status::InProgress => self.colors.info,
            Status::OnHold => self.colors.error,
            Status::Pending => self.colors.warning,
            Status::New => self.colors.text_primary,
        }
    }
}

/// Whether `id` is a usable catalog key: non-empty lowercase kebab-case
pub fn is_valid_identifier(id: &str) -> bool {
    !id.is_empty()
        && !id.starts_with('-')
        && !id.ends_with('-')
        && !id.contains("--")
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// A throwaway palette with a distinct colour per slot
    pub(crate) fn sample_theme(id: &'static str, name: &'static str) -> Theme {
        let c = |v: u32| Rgb::hex(v);
        Theme {
            id,
            name,
            colors: Colors {
                primary: c(0x010101),
                primary_dark: c(0x020202),
                primary_light: c(0x030303),
                accent: c(0x040404),
                accent_dark: c(0x050505),
                accent_light: c(0x060606),
                success: c(0x070707),
                warning: c(0x080808),
                error: c(0x090909),
                info: c(0x0A0A0A),
                background: c(0x0B0B0B),
                foreground: c(0x0C0C0C),
                surface: c(0x0D0D0D),
                border: c(0x0E0E0E),
                text_primary: c(0x0F0F0F),
                text_secondary: c(0x101010),
                text_disabled: c(0x111111),
                text_inverse: c(0x121212),
                hover: c(0x131313),
                active: c(0x141414),
                focus: c(0x151515),
                selected: c(0x161616),
                header_gradient: Gradient::five([
                    c(0x000000),
                    c(0x404040),
                    c(0x808080),
                    c(0xC0C0C0),
                    c(0xFFFFFF),
                ]),
            },
        }
    }

    #[test]
    fn test_five_stop_gradient_hides_padding() {
        let g = Gradient::five([
            Rgb::hex(0x000001),
            Rgb::hex(0x000002),
            Rgb::hex(0x000003),
            Rgb::hex(0x000004),
            Rgb::hex(0x000005),
        ]);
        assert_eq!(g.stops().len(), 5);
        assert_eq!(g.last(), Rgb::hex(0x000005));
    }

    #[test]
    fn test_slots_cover_every_named_field() {
        let theme = sample_theme("sample", "Sample");
        let slots = theme.colors.slots();
        assert_eq!(slots.len(), NAMED_SLOT_COUNT);

        // Each slot was given a distinct value, so a mis-wired slot shows up as a duplicate
        let mut values: Vec<_> = slots.iter().map(|(_, rgb)| *rgb).collect();
        values.sort_by_key(|rgb| (rgb.r, rgb.g, rgb.b));
        values.dedup();
        assert_eq!(values.len(), NAMED_SLOT_COUNT);
        assert_eq!(slots[0], ("primary", Rgb::hex(0x010101)));
        assert_eq!(slots[21], ("selected", Rgb::hex(0x161616)));
    }

    #[test]
    fn test_priority_color_mapping() {
        let theme = sample_theme("sample", "Sample");
        assert_eq!(theme.priority_color(Priority::Urgent), theme.colors.error);
        assert_eq!(theme.priority_color(Priority::High), theme.colors.error);
        assert_eq!(theme.priority_color(Priority::Medium), theme.colors.warning);
        assert_eq!(theme.priority_color(Priority::Low), theme.colors.info);
    }

    #[test]
    fn test_status_color_mapping() {
        let theme = sample_theme("sample", "Sample");
        assert_eq!(theme.status_color(Status::Done), theme.colors.success);
        assert_eq!(theme.status_color(Status::Closed), theme.colors.success);
        assert_eq!(theme.status_color(Status::InProgress), theme.colors.info);
        assert_eq!(theme.status_color(Status::OnHold), theme.colors.error);
        assert_eq!(theme.status_color(Status::Pending), theme.colors.warning);
        assert_eq!(theme.status_color(Status::New), theme.colors.text_primary);
    }

    #[test]
    fn test_identifier_rules() {
        for ok in ["dark", "retro-amber", "tokyo-night", "mono-blue2"] {
            assert!(is_valid_identifier(ok), "{ok}");
        }
        for bad in ["", "Dark", "-dark", "dark-", "tokyo--night", "tokyo night", "ocean_blue"] {
            assert!(!is_valid_identifier(bad), "{bad}");
        }
    }

    #[test]
    fn test_gradient_serializes_populated_stops_only() {
        let theme = sample_theme("sample", "Sample");
        let json = serde_json::to_value(theme.colors.header_gradient).unwrap();
        assert_eq!(json.as_array().map(|a| a.len()), Some(5));
    }
}
