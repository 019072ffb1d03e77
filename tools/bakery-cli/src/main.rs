//! Bakery CLI - browse the menu and manage a cart from the terminal.
//!
//! Commands:
//! - `bakery menu` - List what can be added
//! - `bakery add <name>` - Add one of a menu item
//! - `bakery inc|dec|remove <id>` - Adjust or drop a cart entry
//! - `bakery checkout` - Place a demo order and clear the cart
//! - `bakery show` - Print the cart

mod catalog;
mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AddArgs, EntryArgs};

/// Bakery CLI - a terminal shopping cart for the bakery menu
#[derive(Parser)]
#[command(name = "bakery")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Directory holding the persisted cart
    #[arg(long, global = true)]
    data_dir: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List menu items
    Menu,

    /// Add a menu item to the cart
    Add(AddArgs),

    /// Increase an entry's quantity
    Inc(EntryArgs),

    /// Decrease an entry's quantity
    Dec(EntryArgs),

    /// Remove an entry from the cart
    Remove(EntryArgs),

    /// Place the (demo) order and clear the cart
    Checkout,

    /// Show the cart
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), cli.data_dir.as_deref(), output)?;

    let result = match cli.command {
        Commands::Menu => commands::menu::run(&ctx),
        Commands::Add(args) => commands::cart::add(args, &ctx),
        Commands::Inc(args) => commands::cart::increase(args, &ctx),
        Commands::Dec(args) => commands::cart::decrease(args, &ctx),
        Commands::Remove(args) => commands::cart::remove(args, &ctx),
        Commands::Checkout => commands::cart::checkout(&ctx),
        Commands::Show => commands::cart::show(&ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr, honoring `RUST_LOG` when set.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "bakery_cart=debug,bakery_view=debug,bakery_storage=debug,bakery_cli=debug"
    } else {
        "bakery_cart=warn,bakery_view=warn,bakery_storage=warn,bakery_cli=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
