use serde::{Deserialize, Serialize};

use crate::error::{CalcError, CalcResult};
use crate::render::Renderer;

use super::{CalculatorEngine, CalculatorSnapshot};

pub const CALCULATOR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: CalculatorSnapshot,
}

impl CalculatorSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> CalcResult<String> {
        let payload = CalculatorSnapshotJsonContractV1 {
            schema_version: CALCULATOR_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            CalcError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> CalcResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<CalculatorSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: CalculatorSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                CalcError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != CALCULATOR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(CalcError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> CalculatorEngine<R> {
    pub fn snapshot_json_contract_v1_pretty(&self) -> CalcResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
