//! Theme CLI command handlers

use serde::Serialize;

use crate::cli::commands::ThemeCommand;
use crate::cli::context::AppContext;
use crate::core::theme_service::{apply_theme, load_theme_manager};
use crate::error::{Result, TuidooError};
use crate::theme::{Theme, ThemeManager};

/// Handle theme commands
pub fn handle_theme(command: ThemeCommand, ctx: &AppContext) -> Result<()> {
    let mut store = ctx.open_storage();
    let mut manager = load_theme_manager(&store);

    match command {
        ThemeCommand::List { json } => {
            if json {
                println!("{}", list_json(&manager)?);
            } else {
                for line in list_lines(&manager) {
                    println!("{}", line);
                }
            }
        }
        ThemeCommand::Current => {
            let theme = manager.current_theme();
            println!("{} ({})", theme.id, theme.name);
        }
        ThemeCommand::Set { id } => {
            let change = apply_theme(&mut manager, &mut store, &id)?;
            println!("Theme set to: {}", manager.current_theme().name);
            if let Err(e) = change.persisted {
                eprintln!("Warning: the theme could not be saved and will reset next run.");
                eprintln!("  {}", e);
            }
        }
        ThemeCommand::Show { id } => {
            let theme = match id {
                Some(id) => *manager
                    .theme(&id)
                    .ok_or(TuidooError::ThemeNotFound(id))?,
                None => *manager.current_theme(),
            };
            for line in show_lines(&theme) {
                println!("{}", line);
            }
        }
    }
    Ok(())
}

/// One row per theme, the active one marked with `*`
pub fn list_lines(manager: &ThemeManager) -> Vec<String> {
    let current = manager.current_theme().id;
    manager
        .themes()
        .map(|theme| {
            let marker = if theme.id == current { '*' } else { ' ' };
            format!("{} {:<14} {}", marker, theme.id, theme.name)
        })
        .collect()
}

#[derive(Serialize)]
struct ThemeListing<'a> {
    current: &'a str,
    themes: Vec<&'a Theme>,
}

fn list_json(manager: &ThemeManager) -> Result<String> {
    let listing = ThemeListing {
        current: manager.current_theme().id,
        themes: manager.themes().collect(),
    };
    Ok(serde_json::to_string_pretty(&listing)?)
}

/// Every slot of `theme` as `name  #rrggbb`, then the gradient
pub fn show_lines(theme: &Theme) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", theme.name, theme.id), String::new()];
    lines.extend(
        theme
            .colors
            .slots()
            .iter()
            .map(|(slot, rgb)| format!("  {:<15} {}", slot, rgb)),
    );
    let stops: Vec<String> = theme
        .colors
        .header_gradient
        .stops()
        .iter()
        .map(|rgb| rgb.to_hex())
        .collect();
    lines.push(format!("  {:<15} {}", "header_gradient", stops.join(" ")));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_marks_current_theme() {
        let mut manager = ThemeManager::new();
        manager.set_theme("nord").unwrap();

        let lines = list_lines(&manager);
        assert_eq!(lines.len(), manager.theme_identifiers().len());
        let marked: Vec<_> = lines.iter().filter(|l| l.starts_with('*')).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("nord"));
        assert!(marked[0].ends_with("Nord"));
    }

    #[test]
    fn test_list_json_shape() {
        let manager = ThemeManager::new();
        let value: serde_json::Value = serde_json::from_str(&list_json(&manager).unwrap()).unwrap();
        assert_eq!(value["current"], "dark");
        let themes = value["themes"].as_array().unwrap();
        assert_eq!(themes.len(), manager.theme_identifiers().len());
        assert_eq!(themes[0]["id"], "arctic");
        assert!(themes[0]["colors"]["primary"].as_str().unwrap().starts_with('#'));
    }

    #[test]
    fn test_show_lists_every_slot_and_gradient() {
        let manager = ThemeManager::new();
        let lines = show_lines(manager.current_theme());
        // title, blank, 22 slots, gradient
        assert_eq!(lines.len(), 25);
        assert_eq!(lines[0], "Dark (dark)");
        assert!(lines.iter().any(|l| l.contains("background") && l.contains("#0f172a")));
        assert!(lines.last().unwrap().starts_with("  header_gradient"));
    }
}
