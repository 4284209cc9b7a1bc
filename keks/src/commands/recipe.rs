use std::path::Path;

use clap::{Args, Subcommand};
use eyre::Result;
use keks_cookbook::CookbookFile;

use super::UnwrapOrExit;
use crate::reports::{RecipeListReport, RecipeReport, Report, TerminalOutput};

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    command: RecipeSubcommand,
}

#[derive(Subcommand)]
enum RecipeSubcommand {
    /// Add an empty recipe
    Add(RecipeNameArgs),

    /// Rename a recipe, keeping its ingredients
    Rename(RenameArgs),

    /// Remove a recipe and all of its ingredients
    Remove(RecipeNameArgs),

    /// List all recipes
    List,

    /// Show the ingredients of a recipe
    Show(RecipeNameArgs),
}

#[derive(Args)]
struct RecipeNameArgs {
    /// Recipe name
    name: String,
}

#[derive(Args)]
struct RenameArgs {
    /// Current recipe name
    old: String,

    /// New recipe name
    new: String,
}

impl RecipeCommand {
    pub fn run(&self, cookbook: &Path) -> Result<()> {
        match &self.command {
            RecipeSubcommand::Add(args) => Self::add(cookbook, &args.name),
            RecipeSubcommand::Rename(args) => Self::rename(cookbook, &args.old, &args.new),
            RecipeSubcommand::Remove(args) => Self::remove(cookbook, &args.name),
            RecipeSubcommand::List => Self::list(cookbook),
            RecipeSubcommand::Show(args) => Self::show(cookbook, &args.name),
        }
    }

    fn add(cookbook: &Path, name: &str) -> Result<()> {
        let mut file = CookbookFile::open(cookbook).unwrap_or_exit();

        if file.edit(|c| c.add_recipe(name)).unwrap_or_exit() {
            file.save().unwrap_or_exit();
            println!("Added recipe '{}'", name.trim());
        } else {
            println!("Recipe '{}' already exists", name.trim());
        }

        Ok(())
    }

    fn rename(cookbook: &Path, old: &str, new: &str) -> Result<()> {
        let mut file = CookbookFile::open(cookbook).unwrap_or_exit();
        file.edit(|c| c.rename_recipe(old, new)).unwrap_or_exit();
        file.save().unwrap_or_exit();
        println!("Renamed recipe '{}' to '{}'", old.trim(), new.trim());
        Ok(())
    }

    fn remove(cookbook: &Path, name: &str) -> Result<()> {
        let mut file = CookbookFile::open(cookbook).unwrap_or_exit();
        let removed = file.edit(|c| c.remove_recipe(name)).unwrap_or_exit();
        file.save().unwrap_or_exit();
        println!(
            "Removed recipe '{}' ({} ingredients)",
            name.trim(),
            removed.ingredients.len()
        );
        Ok(())
    }

    fn list(cookbook: &Path) -> Result<()> {
        let file = CookbookFile::open(cookbook).unwrap_or_exit();
        RecipeListReport::new(file.cookbook()).render(&mut TerminalOutput::new());
        Ok(())
    }

    fn show(cookbook: &Path, name: &str) -> Result<()> {
        let file = CookbookFile::open(cookbook).unwrap_or_exit();
        let lines = file.cookbook().ingredients(name).unwrap_or_exit();

        RecipeReport::new(name.trim(), lines).render(&mut TerminalOutput::new());
        Ok(())
    }
}
