//! Consolidation of scaled recipe lines into a shopping list.

use indexmap::IndexMap;

use crate::{
    BakeSelection, IngredientLine, ShoppingListEntry, Unit,
    amount::{DECIMALS, round_to},
    unit::normalize,
};

/// Running totals keyed by `(ingredient name, canonical unit)`.
///
/// Names are compared exactly as stored; `Mehl` and `mehl` are different
/// ingredients. Keys keep their first-insertion order, which decides the order of
/// entries that share a name but not a canonical unit.
#[derive(Debug, Default)]
pub struct Aggregator {
    totals: IndexMap<(String, Unit), f64>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale one line by `multiplier`, normalize it and add it to its total.
    pub fn add_line(&mut self, line: &IngredientLine, multiplier: f64) {
        let (amount, unit) = normalize(line.amount * multiplier, &line.unit);
        *self.totals.entry((line.name.clone(), unit)).or_insert(0.0) += amount;
    }

    /// Add every line of a recipe, scaled by `multiplier`.
    pub fn add_recipe(&mut self, lines: &[IngredientLine], multiplier: f64) {
        for line in lines {
            self.add_line(line, multiplier);
        }
    }

    /// Number of distinct `(name, canonical unit)` totals collected so far.
    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Round the totals and order them by case-insensitive name.
    pub fn finish(self) -> Vec<ShoppingListEntry> {
        let mut entries: Vec<ShoppingListEntry> = self
            .totals
            .into_iter()
            .map(|((name, unit), total)| ShoppingListEntry {
                name,
                amount: round_to(total, DECIMALS),
                unit,
            })
            .collect();
        // stable: equal keys keep insertion order
        entries.sort_by_cached_key(|entry| entry.name.to_lowercase());
        entries
    }
}

/// Build the shopping list for a set of recipes and their multipliers.
pub fn aggregate(selection: &[BakeSelection]) -> Vec<ShoppingListEntry> {
    let mut aggregator = Aggregator::new();
    for entry in selection {
        aggregator.add_recipe(&entry.lines, entry.multiplier);
    }
    aggregator.finish()
}
