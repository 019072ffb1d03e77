//! CLI command implementations.

pub mod cart;
pub mod menu;

use clap::Args;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Menu item name (case-insensitive).
    #[arg(required = true, num_args = 1..)]
    pub name: Vec<String>,
}

impl AddArgs {
    /// The item name, allowing it to be given unquoted.
    pub fn name(&self) -> String {
        self.name.join(" ")
    }
}

/// Arguments for commands that target one cart entry.
#[derive(Args)]
pub struct EntryArgs {
    /// Entry id, or its 1-based position as printed by `bakery show`.
    pub entry: String,
}
