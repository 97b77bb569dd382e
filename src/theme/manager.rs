//! Active theme selection
//!
//! [`ThemeManager`] is an owned context object: the event loop holds it and
//! lends it to renderers. It has no interior mutability and is not meant to
//! be shared across threads.

use tracing::debug;

use crate::error::{Result, TuidooError};
use crate::theme::banner::{Banner, BannerStyle};
use crate::theme::catalog::{Catalog, DEFAULT_THEME_ID};
use crate::theme::palette::Theme;

/// Single source of truth for the active theme
#[derive(Debug, Clone)]
pub struct ThemeManager {
    catalog: Catalog,
    current: Theme,
    banner_style: BannerStyle,
}

impl ThemeManager {
    /// Manager over the built-in catalog, starting on the default theme
    pub fn new() -> Self {
        let catalog = Catalog::builtin().clone();
        let current = match catalog.lookup(DEFAULT_THEME_ID) {
            Some(theme) => *theme,
            None => unreachable!("built-in catalog always contains the default theme"),
        };
        Self {
            catalog,
            current,
            banner_style: BannerStyle::default(),
        }
    }

    /// Manager over a custom catalog, which must contain the default theme
    pub fn with_catalog(catalog: Catalog) -> Result<Self> {
        let current = *catalog
            .lookup(DEFAULT_THEME_ID)
            .ok_or_else(|| TuidooError::ThemeNotFound(DEFAULT_THEME_ID.to_string()))?;
        Ok(Self {
            catalog,
            current,
            banner_style: BannerStyle::default(),
        })
    }

    /// Switch to `id`. Unknown identifiers leave the current theme untouched.
    pub fn set_theme(&mut self, id: &str) -> Result<()> {
        let theme = self
            .catalog
            .lookup(id)
            .ok_or_else(|| TuidooError::ThemeNotFound(id.to_string()))?;

        debug!(from = self.current.id, to = theme.id, "switching theme");
        self.current = *theme;
        Ok(())
    }

    pub fn current_theme(&self) -> &Theme {
        &self.current
    }

    /// Every selectable identifier, sorted
    pub fn theme_identifiers(&self) -> Vec<&'static str> {
        self.catalog.list_identifiers()
    }

    /// Position of the current theme in [`Self::theme_identifiers`]
    pub fn current_theme_index(&self) -> usize {
        self.theme_identifiers()
            .iter()
            .position(|id| *id == self.current.id)
            .unwrap_or(0)
    }

    /// Look up any catalog theme without switching to it
    pub fn theme(&self, id: &str) -> Option<&Theme> {
        self.catalog.lookup(id)
    }

    /// Every catalog theme in identifier order
    pub fn themes(&self) -> impl Iterator<Item = &Theme> {
        self.catalog.themes()
    }

    pub fn set_banner_style(&mut self, style: BannerStyle) {
        self.banner_style = style;
    }

    /// The brand banner; independent of the active theme
    pub fn create_banner(&self) -> Banner {
        Banner::new(self.banner_style)
    }

    /// The banner coloured with theme `id`'s header gradient
    pub fn create_theme_banner(&self, id: &str) -> Result<Banner> {
        let theme = self
            .theme(id)
            .ok_or_else(|| TuidooError::ThemeNotFound(id.to_string()))?;
        Ok(Banner::from_ramp(
            theme.colors.header_gradient.stops(),
            self.banner_style,
        ))
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}
