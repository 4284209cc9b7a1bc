use std::path::Path;

use clap::Args;
use eyre::Result;
use keks_cookbook::CookbookFile;
use tracing::info;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct InitCommand {
    /// Heading of exported shopping lists
    #[arg(short, long)]
    pub title: Option<String>,
}

impl InitCommand {
    pub fn run(&self, cookbook: &Path) -> Result<()> {
        let mut file = CookbookFile::create(cookbook).unwrap_or_exit();

        if let Some(title) = &self.title {
            file.edit(|cookbook| {
                cookbook.export.title = title.clone();
                Ok(())
            })
            .unwrap_or_exit();
            file.save().unwrap_or_exit();
        }

        info!(path = %cookbook.display(), "initialized cookbook");
        println!("Created {}", cookbook.display());
        Ok(())
    }
}
