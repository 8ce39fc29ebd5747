use serde::{Deserialize, Serialize};

use crate::core::DEFAULT_RESULT_PRECISION;
use crate::error::{CalcError, CalcResult};

/// Whether unary results go through the same guard as `calculate()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnaryResultPolicy {
    /// Unary results are stringified as computed: no rounding, and
    /// `Infinity`/`NaN` text may reach the display.
    #[default]
    Raw,
    /// Unary results are rounded to `result_precision` and non-finite values
    /// become the error marker.
    Guarded,
}

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load calculator
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorEngineConfig {
    #[serde(default = "default_max_input_len")]
    pub max_input_len: usize,
    #[serde(default = "default_result_precision")]
    pub result_precision: u32,
    #[serde(default = "default_error_marker")]
    pub error_marker: String,
    #[serde(default)]
    pub unary_result_policy: UnaryResultPolicy,
}

impl Default for CalculatorEngineConfig {
    fn default() -> Self {
        Self {
            max_input_len: default_max_input_len(),
            result_precision: default_result_precision(),
            error_marker: default_error_marker(),
            unary_result_policy: UnaryResultPolicy::default(),
        }
    }
}

impl CalculatorEngineConfig {
    /// Sets the maximum number of characters typed digits can grow to.
    #[must_use]
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Sets the fractional digits kept by evaluated results.
    #[must_use]
    pub fn with_result_precision(mut self, digits: u32) -> Self {
        self.result_precision = digits;
        self
    }

    #[must_use]
    pub fn with_error_marker(mut self, marker: impl Into<String>) -> Self {
        self.error_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_unary_result_policy(mut self, policy: UnaryResultPolicy) -> Self {
        self.unary_result_policy = policy;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CalcError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> CalcResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| CalcError::InvalidData(format!("failed to parse config: {e}")))
    }
}

fn default_max_input_len() -> usize {
    12
}

fn default_result_precision() -> u32 {
    DEFAULT_RESULT_PRECISION
}

fn default_error_marker() -> String {
    "Error".to_owned()
}
