//! Units of measurement and the fixed conversion table.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize, Serializer};

/// A unit label attached to an ingredient amount.
///
/// Recognized labels parse into their named variant. Any other label is kept
/// verbatim in [`Unit::Other`] and behaves as its own canonical unit, so free-form
/// units stored by older cookbooks keep aggregating exactly as they did.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum Unit {
    Gram,
    Kilogram,
    Milliliter,
    Liter,
    Count,
    TeaspoonLiquid,
    TablespoonLiquid,
    TeaspoonSolid,
    TablespoonSolid,
    Other(String),
}

/// Units that are never converted further and can be the target of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseUnit {
    Gram,
    Milliliter,
}

/// A single `unit -> (base unit, factor)` entry of the conversion table.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRule {
    pub unit: Unit,
    pub target: BaseUnit,
    pub factor: f64,
}

/// The fixed conversion table.
///
/// Every rule targets a [`BaseUnit`], so chains of conversions cannot exist.
pub static CONVERSIONS: [ConversionRule; 6] = [
    ConversionRule {
        unit: Unit::TeaspoonLiquid,
        target: BaseUnit::Milliliter,
        factor: 5.0,
    },
    ConversionRule {
        unit: Unit::TablespoonLiquid,
        target: BaseUnit::Milliliter,
        factor: 15.0,
    },
    ConversionRule {
        unit: Unit::TeaspoonSolid,
        target: BaseUnit::Gram,
        factor: 5.0,
    },
    // Approximation, a level tablespoon of most baking solids.
    ConversionRule {
        unit: Unit::TablespoonSolid,
        target: BaseUnit::Gram,
        factor: 12.0,
    },
    ConversionRule {
        unit: Unit::Kilogram,
        target: BaseUnit::Gram,
        factor: 1000.0,
    },
    ConversionRule {
        unit: Unit::Liter,
        target: BaseUnit::Milliliter,
        factor: 1000.0,
    },
];

impl Unit {
    /// The unit vocabulary offered when entering ingredients, in selector order.
    pub const KNOWN: [Unit; 9] = [
        Unit::Gram,
        Unit::Kilogram,
        Unit::Milliliter,
        Unit::Liter,
        Unit::Count,
        Unit::TeaspoonLiquid,
        Unit::TablespoonLiquid,
        Unit::TeaspoonSolid,
        Unit::TablespoonSolid,
    ];

    /// Returns the label of this unit as stored in a cookbook.
    pub fn as_str(&self) -> &str {
        match self {
            Unit::Gram => "gram",
            Unit::Kilogram => "kilogram",
            Unit::Milliliter => "milliliter",
            Unit::Liter => "liter",
            Unit::Count => "count",
            Unit::TeaspoonLiquid => "teaspoon-liquid",
            Unit::TablespoonLiquid => "tablespoon-liquid",
            Unit::TeaspoonSolid => "teaspoon-solid",
            Unit::TablespoonSolid => "tablespoon-solid",
            Unit::Other(label) => label,
        }
    }

    /// Look up the conversion rule for this unit, if it is a derived unit.
    pub fn conversion(&self) -> Option<&'static ConversionRule> {
        CONVERSIONS.iter().find(|rule| rule.unit == *self)
    }

    /// Whether this unit is its own canonical form.
    pub fn is_base(&self) -> bool {
        self.conversion().is_none()
    }

    /// The unit amounts in this unit are accumulated under.
    pub fn canonical(&self) -> Unit {
        match self.conversion() {
            Some(rule) => rule.target.into(),
            None => self.clone(),
        }
    }

    /// Whether this label is part of the recognized vocabulary.
    pub fn is_known(&self) -> bool {
        !matches!(self, Unit::Other(_))
    }
}

impl BaseUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseUnit::Gram => "gram",
            BaseUnit::Milliliter => "milliliter",
        }
    }
}

impl From<BaseUnit> for Unit {
    fn from(base: BaseUnit) -> Self {
        match base {
            BaseUnit::Gram => Unit::Gram,
            BaseUnit::Milliliter => Unit::Milliliter,
        }
    }
}

/// Convert `amount` expressed in `unit` into its canonical unit.
///
/// Units without a conversion rule, including labels outside the vocabulary,
/// pass through unchanged. This never fails.
pub fn normalize(amount: f64, unit: &Unit) -> (f64, Unit) {
    match unit.conversion() {
        Some(rule) => (amount * rule.factor, rule.target.into()),
        None => (amount, unit.clone()),
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Unit::from(s.to_string()))
    }
}

impl From<String> for Unit {
    fn from(label: String) -> Self {
        match label.as_str() {
            "gram" => Unit::Gram,
            "kilogram" => Unit::Kilogram,
            "milliliter" => Unit::Milliliter,
            "liter" => Unit::Liter,
            "count" => Unit::Count,
            "teaspoon-liquid" => Unit::TeaspoonLiquid,
            "tablespoon-liquid" => Unit::TablespoonLiquid,
            "teaspoon-solid" => Unit::TeaspoonSolid,
            "tablespoon-solid" => Unit::TablespoonSolid,
            _ => Unit::Other(label),
        }
    }
}

impl From<&str> for Unit {
    fn from(label: &str) -> Self {
        Unit::from(label.to_string())
    }
}

impl Serialize for Unit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
