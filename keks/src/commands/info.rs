use std::path::Path;

use clap::Args;
use eyre::Result;
use keks_cookbook::CookbookFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct InfoCommand {}

impl InfoCommand {
    pub fn run(&self, cookbook: &Path) -> Result<()> {
        let file = CookbookFile::open(cookbook).unwrap_or_exit();

        let report = ops::info(file.cookbook(), file.path());
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
