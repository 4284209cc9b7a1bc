use std::path::Path;

use clap::{Args, Subcommand};
use eyre::Result;
use keks_cookbook::CookbookFile;
use keks_core::{Unit, format_amount};
use tracing::warn;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct IngredientCommand {
    #[command(subcommand)]
    command: IngredientSubcommand,
}

#[derive(Subcommand)]
enum IngredientSubcommand {
    /// Add an ingredient to a recipe, or change its amount
    Add(AddArgs),

    /// Remove an ingredient from a recipe
    Remove(RemoveArgs),

    /// List known ingredient names, optionally only those starting with a prefix
    Names(NamesArgs),
}

#[derive(Args)]
struct AddArgs {
    /// Recipe name
    recipe: String,

    /// Ingredient name
    name: String,

    /// Amount per batch
    #[arg(value_parser = parse_amount, allow_negative_numbers = true)]
    amount: f64,

    /// Unit of the amount (see `keks units`)
    #[arg(short, long, default_value = "gram")]
    unit: Unit,
}

#[derive(Args)]
struct RemoveArgs {
    /// Recipe name
    recipe: String,

    /// Ingredient name
    name: String,

    /// Unit of the line to remove
    #[arg(short, long)]
    unit: Unit,
}

#[derive(Args)]
struct NamesArgs {
    /// Only names starting with this prefix (case-insensitive)
    prefix: Option<String>,
}

impl IngredientCommand {
    pub fn run(&self, cookbook: &Path) -> Result<()> {
        match &self.command {
            IngredientSubcommand::Add(args) => Self::add(cookbook, args),
            IngredientSubcommand::Remove(args) => Self::remove(cookbook, args),
            IngredientSubcommand::Names(args) => Self::names(cookbook, args),
        }
    }

    fn add(cookbook: &Path, args: &AddArgs) -> Result<()> {
        if !args.unit.is_known() {
            warn!(
                unit = %args.unit,
                "unit is not in the conversion table and will only merge with identical labels"
            );
        }

        let mut file = CookbookFile::open(cookbook).unwrap_or_exit();
        let previous = file
            .edit(|c| c.set_ingredient(&args.recipe, &args.name, args.unit.clone(), args.amount))
            .unwrap_or_exit();
        file.save().unwrap_or_exit();

        let line = format!(
            "{} {} {}",
            format_amount(args.amount),
            args.unit,
            args.name.trim()
        );
        match previous {
            Some(old) => println!(
                "Updated {} in '{}' (was {})",
                line,
                args.recipe.trim(),
                format_amount(old)
            ),
            None => println!("Added {} to '{}'", line, args.recipe.trim()),
        }

        Ok(())
    }

    fn remove(cookbook: &Path, args: &RemoveArgs) -> Result<()> {
        let mut file = CookbookFile::open(cookbook).unwrap_or_exit();
        let removed = file
            .edit(|c| c.remove_ingredient(&args.recipe, &args.name, &args.unit))
            .unwrap_or_exit();
        file.save().unwrap_or_exit();
        println!(
            "Removed {} {} {} from '{}'",
            format_amount(removed.amount),
            removed.unit,
            removed.name,
            args.recipe.trim()
        );
        Ok(())
    }

    fn names(cookbook: &Path, args: &NamesArgs) -> Result<()> {
        let file = CookbookFile::open(cookbook).unwrap_or_exit();
        let names = match &args.prefix {
            Some(prefix) => file.cookbook().suggest_ingredients(prefix),
            None => file.cookbook().ingredient_names(),
        };

        for name in names {
            println!("{}", name);
        }
        Ok(())
    }
}

/// Parse an ingredient amount. Anything but a finite number is rejected.
fn parse_amount(s: &str) -> Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => Err(format!("amount must be a number, got '{}'", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("250").unwrap(), 250.0);
        assert_eq!(parse_amount(" 2.5 ").unwrap(), 2.5);
        assert!(parse_amount("viel").is_err());
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }
}
