//! Units command report.

use keks_core::{CONVERSIONS, Unit, format_amount};

use super::output::{Output, Report};

/// The unit vocabulary and the conversion table.
#[derive(Debug)]
pub struct UnitsReport {
    /// Each known unit with the unit it is accumulated under and the factor.
    pub units: Vec<(Unit, Unit, f64)>,
}

impl UnitsReport {
    pub fn new() -> Self {
        let units = Unit::KNOWN
            .iter()
            .map(|unit| match unit.conversion() {
                Some(rule) => (unit.clone(), Unit::from(rule.target), rule.factor),
                None => (unit.clone(), unit.clone(), 1.0),
            })
            .collect();
        Self { units }
    }
}

impl Default for UnitsReport {
    fn default() -> Self {
        Self::new()
    }
}

impl Report for UnitsReport {
    fn render(&self, out: &mut dyn Output) {
        out.section("Units");
        for (unit, canonical, factor) in &self.units {
            if unit == canonical {
                out.list_item(unit.as_str());
            } else {
                out.list_item(&format!(
                    "{:<18} = {} {}",
                    unit.as_str(),
                    format_amount(*factor),
                    canonical
                ));
            }
        }
        out.newline();
        out.preformatted(&format!(
            "{} conversions. Other labels are kept as written and never converted.",
            CONVERSIONS.len()
        ));
    }
}
