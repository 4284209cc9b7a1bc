use std::path::Path;

use clap::Args;
use eyre::{Result, WrapErr};
use keks_cookbook::CookbookFile;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct FmtCommand {
    /// Check if the cookbook is formatted without making changes (exit 1 if not)
    #[arg(long)]
    pub check: bool,
}

impl FmtCommand {
    pub fn run(&self, cookbook: &Path) -> Result<()> {
        let file = CookbookFile::open(cookbook).unwrap_or_exit();
        let formatted = file.to_formatted_string().unwrap_or_exit();

        if self.check {
            if file.content() != formatted {
                eprintln!("error: {} is not formatted", cookbook.display());
                eprintln!("Run `keks fmt` to fix.");
                std::process::exit(1);
            }
            println!("{} is formatted", cookbook.display());
        } else if file.content() == formatted {
            println!("{} is already formatted", cookbook.display());
        } else {
            std::fs::write(cookbook, &formatted)
                .wrap_err_with(|| format!("Failed to write {}", cookbook.display()))?;
            println!("Formatted {}", cookbook.display());
        }

        Ok(())
    }
}
