//! Banner CLI command handler

use crate::cli::commands::BannerArgs;
use crate::cli::context::AppContext;
use crate::error::Result;
use crate::theme::{Banner, BannerStyle, ThemeManager};

/// Print the banner
pub fn handle_banner(args: BannerArgs, ctx: &AppContext) -> Result<()> {
    let style = args
        .style
        .map(BannerStyle::from)
        .unwrap_or(ctx.config.banner_style);
    let banner = build_banner(style, args.theme.as_deref())?;

    if args.plain {
        println!("{}", banner.to_plain());
    } else {
        println!("{}", banner.to_ansi());
    }
    Ok(())
}

/// The brand banner, or one coloured with a theme's header gradient
pub fn build_banner(style: BannerStyle, theme_id: Option<&str>) -> Result<Banner> {
    let mut manager = ThemeManager::new();
    manager.set_banner_style(style);
    match theme_id {
        None => Ok(manager.create_banner()),
        Some(id) => manager.create_theme_banner(id),
    }
}
