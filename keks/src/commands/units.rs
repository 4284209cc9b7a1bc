use clap::Args;
use eyre::Result;

use crate::reports::{Report, TerminalOutput, UnitsReport};

#[derive(Args)]
pub struct UnitsCommand {}

impl UnitsCommand {
    pub fn run(&self) -> Result<()> {
        UnitsReport::new().render(&mut TerminalOutput::new());
        Ok(())
    }
}
