use tracing::debug;

use crate::error::CalcResult;
use crate::interaction::CalculatorState;
use crate::render::Renderer;

use super::{
    CalculatorEngine, CalculatorEngineConfig,
    engine_core::{EngineCore, EngineRuntimeState},
    validation::validate_engine_config,
};

impl<R: Renderer> CalculatorEngine<R> {
    /// Creates an engine in its startup state: input `"0"`, no pending
    /// expression, empty memory.
    pub fn new(renderer: R, config: CalculatorEngineConfig) -> CalcResult<Self> {
        validate_engine_config(&config)?;
        debug!(
            max_input_len = config.max_input_len,
            result_precision = config.result_precision,
            unary_result_policy = ?config.unary_result_policy,
            "calculator engine initialized"
        );

        Ok(Self {
            renderer,
            core: EngineCore {
                state: CalculatorState::default(),
                config,
                runtime: EngineRuntimeState::default(),
            },
        })
    }

    /// Creates an engine with the default configuration.
    pub fn with_defaults(renderer: R) -> CalcResult<Self> {
        Self::new(renderer, CalculatorEngineConfig::default())
    }
}
