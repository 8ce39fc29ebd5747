use indexmap::IndexMap;

use crate::extensions::CalculatorPlugin;
use crate::interaction::CalculatorState;

use super::CalculatorEngineConfig;

/// Internal engine core state used by the public facade (`CalculatorEngine`).
pub(super) struct EngineCore {
    pub(super) state: CalculatorState,
    pub(super) config: CalculatorEngineConfig,
    pub(super) runtime: EngineRuntimeState,
}

#[derive(Default)]
pub(super) struct EngineRuntimeState {
    pub(super) plugins: Vec<Box<dyn CalculatorPlugin>>,
    pub(super) metadata: IndexMap<String, String>,
}
