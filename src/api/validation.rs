use crate::core::parse_display_number;
use crate::error::{CalcError, CalcResult};

use super::CalculatorEngineConfig;

pub(super) const MAX_INPUT_LEN_LIMIT: usize = 64;
pub(super) const MAX_RESULT_PRECISION: u32 = 12;

pub(super) fn validate_engine_config(config: &CalculatorEngineConfig) -> CalcResult<()> {
    if !(1..=MAX_INPUT_LEN_LIMIT).contains(&config.max_input_len) {
        return Err(CalcError::InvalidConfig(format!(
            "max input length must be between 1 and {MAX_INPUT_LEN_LIMIT}"
        )));
    }

    if config.result_precision > MAX_RESULT_PRECISION {
        return Err(CalcError::InvalidConfig(format!(
            "result precision must be <= {MAX_RESULT_PRECISION}"
        )));
    }

    validate_error_marker(&config.error_marker)
}

fn validate_error_marker(marker: &str) -> CalcResult<()> {
    if marker.trim().is_empty() {
        return Err(CalcError::InvalidConfig(
            "error marker must not be blank".to_owned(),
        ));
    }
    if marker.contains('\n') {
        return Err(CalcError::InvalidConfig(
            "error marker must be a single line".to_owned(),
        ));
    }
    // Unary results can put `NaN` or `Infinity` text on the display, so those
    // must not be mistaken for the marker either.
    if !parse_display_number(marker).is_nan() || marker.trim_start().starts_with("NaN") {
        return Err(CalcError::InvalidConfig(format!(
            "error marker `{marker}` must not read as a displayable number"
        )));
    }
    Ok(())
}
