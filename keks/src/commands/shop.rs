use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Result, WrapErr, bail};
use keks_cookbook::CookbookFile;
use keks_export::ExportFormat;
use tracing::debug;

use super::UnwrapOrExit;
use crate::{
    ops::{self, SelectionArg},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ShopCommand {
    /// Recipes to bake, as NAME or NAME=MULTIPLIER (e.g. "Zimtsterne=2")
    ///
    /// The multiplier follows the last `=`. Select a recipe whose name contains
    /// `=` by giving the multiplier explicitly, e.g. "Kekse=Mix=1".
    #[arg(value_name = "RECIPE[=N]")]
    pub recipes: Vec<SelectionArg>,

    /// Select every recipe once; explicit recipes override the multiplier
    #[arg(short, long)]
    pub all: bool,

    /// Format of the list printed to stdout
    #[arg(short, long, default_value = "text")]
    pub format: ExportFormat,

    /// Also export the list to a paginated document (.json for JSON, text otherwise)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl ShopCommand {
    pub fn run(&self, cookbook: &Path) -> Result<()> {
        if self.recipes.is_empty() && !self.all {
            bail!("No recipes selected. Name recipes to bake or pass --all.");
        }

        let file = CookbookFile::open(cookbook).unwrap_or_exit();
        let mut report = ops::shop(file.cookbook(), &self.recipes, self.all).unwrap_or_exit();
        for (recipe, multiplier) in &report.recipes {
            debug!(recipe = recipe.as_str(), multiplier, "selected recipe");
        }

        if let Some(path) = &self.output {
            report.export = ops::export(&report, &file.cookbook().export.title, path)
                .wrap_err_with(|| format!("Failed to export to {}", path.display()))?;
        }

        match self.format {
            ExportFormat::Text => report.render(&mut TerminalOutput::new()),
            ExportFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&report.entries)?);
            }
        }

        Ok(())
    }
}
