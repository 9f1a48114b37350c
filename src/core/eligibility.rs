use crate::models::University;
use serde::Deserialize;
use std::sync::Arc;

/// Decides whether a university admits students of a given unit
///
/// Any `Fn(&str, &University) -> bool` closure can be used as a rule.
pub trait UnitCompatibility: Send + Sync {
    fn is_compatible(&self, unit: &str, university: &University) -> bool;
}

impl<F> UnitCompatibility for F
where
    F: Fn(&str, &University) -> bool + Send + Sync,
{
    fn is_compatible(&self, unit: &str, university: &University) -> bool {
        self(unit, university)
    }
}

/// Every university accepts every unit
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAllUnits;

impl UnitCompatibility for AcceptAllUnits {
    fn is_compatible(&self, _unit: &str, _university: &University) -> bool {
        true
    }
}

/// Checks the unit against the university's `accepted_units` list
///
/// Comparison is case-insensitive. An empty list admits every unit.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptedUnits;

impl UnitCompatibility for AcceptedUnits {
    fn is_compatible(&self, unit: &str, university: &University) -> bool {
        if university.accepted_units.is_empty() {
            return true;
        }
        let unit = unit.trim().to_lowercase();
        university
            .accepted_units
            .iter()
            .any(|accepted| accepted.trim().to_lowercase() == unit)
    }
}

/// Configurable choice of unit rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitRule {
    #[default]
    AcceptAll,
    AcceptedUnits,
}

impl UnitRule {
    pub fn build(self) -> Arc<dyn UnitCompatibility> {
        match self {
            UnitRule::AcceptAll => Arc::new(AcceptAllUnits),
            UnitRule::AcceptedUnits => Arc::new(AcceptedUnits),
        }
    }
}
