mod completions;
mod fmt;
mod info;
mod ingredient;
mod init;
mod recipe;
mod shop;
mod units;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use fmt::FmtCommand;
use info::InfoCommand;
use ingredient::IngredientCommand;
use init::InitCommand;
use keks_cookbook::DEFAULT_FILE_NAME;
use recipe::RecipeCommand;
use shop::ShopCommand;
use units::UnitsCommand;

/// Extension trait for exiting on cookbook errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for keks_cookbook::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "keks")]
#[command(version)]
#[command(about = "Manage baking recipes and build shopping lists from them")]
pub(crate) struct Cli {
    /// Path to the cookbook file
    #[arg(
        short,
        long,
        global = true,
        env = "KEKS_COOKBOOK",
        default_value = DEFAULT_FILE_NAME
    )]
    cookbook: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let cookbook = self.cookbook.as_path();
        match &self.command {
            Commands::Init(cmd) => cmd.run(cookbook),
            Commands::Recipe(cmd) => cmd.run(cookbook),
            Commands::Ingredient(cmd) => cmd.run(cookbook),
            Commands::Shop(cmd) => cmd.run(cookbook),
            Commands::Units(cmd) => cmd.run(),
            Commands::Fmt(cmd) => cmd.run(cookbook),
            Commands::Info(cmd) => cmd.run(cookbook),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty cookbook
    Init(InitCommand),

    /// Add, rename, remove and inspect recipes
    Recipe(RecipeCommand),

    /// Edit the ingredient lines of a recipe
    Ingredient(IngredientCommand),

    /// Build a shopping list from a selection of recipes
    Shop(ShopCommand),

    /// Show the unit vocabulary and conversion table
    Units(UnitsCommand),

    /// Format the cookbook
    Fmt(FmtCommand),

    /// Show cookbook statistics
    Info(InfoCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["keks", "info", "-c", "kekse.toml", "-v"]).unwrap();
        assert_eq!(cli.cookbook, PathBuf::from("kekse.toml"));
        assert!(cli.verbose);
    }
}
