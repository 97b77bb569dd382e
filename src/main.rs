//! tuidoo - terminal todo manager
//!
//! Run without arguments to launch the TUI, or use subcommands to manage
//! todos and colour themes from the shell.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use tuidoo::cli::{banner, config, data, project, theme, todo, AppContext, Cli, Commands};
use tuidoo::core::project::GroupKind;
use tuidoo::core::theme_service::load_theme_manager;
use tuidoo::error::Result;
use tuidoo::tui::App;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize logging; `RUST_LOG` wins over the configured filter
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let ctx = AppContext::resolve(&cli)?;
    init_logging(&ctx.config.log_filter);

    match cli.command {
        // No subcommand - launch TUI mode
        None => run_tui(&ctx).await,
        Some(Commands::Theme(args)) => theme::handle_theme(args.command, &ctx),
        Some(Commands::Banner(args)) => banner::handle_banner(args, &ctx),
        Some(Commands::Config(args)) => config::handle_config(args.command, &ctx),
        Some(Commands::Todo(args)) => todo::handle_todo(args.command, &ctx),
        Some(Commands::Project(args)) => {
            project::handle_group(GroupKind::Project, args.command, &ctx)
        }
        Some(Commands::TodoList(args)) => project::handle_group(GroupKind::List, args.command, &ctx),
        Some(Commands::Seed) => data::handle_seed(&ctx),
        Some(Commands::Clean { yes }) => data::handle_clean(yes, &ctx),
        Some(Commands::Reset { yes }) => data::handle_reset(yes, &ctx),
    }
}

/// Run the TUI application
async fn run_tui(ctx: &AppContext) -> Result<()> {
    let storage = ctx.open_storage();
    let themes = load_theme_manager(&storage);

    let mut app = App::new(themes, storage, &ctx.config);
    app.run().await
}
