//! Theme engine
//!
//! - Colour values and conversions
//! - Palette records and the built-in catalog
//! - The active-theme manager
//! - The gradient banner

pub mod banner;
pub mod catalog;
pub mod color;
pub mod manager;
pub mod palette;

pub use banner::{Banner, BannerStyle};
pub use catalog::{Catalog, DEFAULT_THEME_ID};
pub use color::Rgb;
pub use manager::ThemeManager;
pub use palette::{Colors, Gradient, Theme};
