//! Configuration CLI command handlers

use crate::cli::commands::ConfigCommand;
use crate::cli::context::AppContext;
use crate::core::config::ConfigField;
use crate::error::Result;

/// Handle configuration commands
pub fn handle_config(command: ConfigCommand, ctx: &AppContext) -> Result<()> {
    let mut config = ctx.config.clone();

    match command {
        ConfigCommand::Set { key, value } => {
            let field = ConfigField::from(key);
            config.set(field, &value)?;
            config.save_to(&ctx.config_path)?;
            println!("{} set to: {}", field.key(), config.get(field)?);
        }
        ConfigCommand::Get { key } => {
            let field = ConfigField::from(key);
            println!("{}: {}", field.key(), config.get(field)?);
        }
        ConfigCommand::Remove { key } => {
            let field = ConfigField::from(key);
            config.unset(field);
            config.save_to(&ctx.config_path)?;
            println!("{} reset to default: {}", field.key(), config.get(field)?);
        }
    }
    Ok(())
}
