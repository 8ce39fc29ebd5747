use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::Operator;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSnapshot {
    pub current_input: String,
    pub previous_input: String,
    pub pending_operator: Option<Operator>,
    pub should_reset_input: bool,
    #[serde(with = "crate::core::number::display_number_serde")]
    pub memory_value: f64,
    pub memory_indicator: bool,
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}
