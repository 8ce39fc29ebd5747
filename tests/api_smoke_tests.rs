use calc_rs::api::{CalculatorEngine, CalculatorEngineConfig};
use calc_rs::core::Operator;
use calc_rs::render::{DisplayFrame, NullRenderer};

#[test]
fn engine_smoke_flow() {
    let renderer = NullRenderer::default();
    let mut engine =
        CalculatorEngine::new(renderer, CalculatorEngineConfig::default()).expect("engine init");

    assert_eq!(engine.current_input(), "0");
    assert_eq!(engine.previous_input(), "");
    assert_eq!(engine.pending_operator(), None);
    assert!(!engine.memory_indicator());

    engine.press_script("1 2 +").expect("valid script");
    assert_eq!(engine.previous_input(), "12 +");
    assert_eq!(engine.pending_operator(), Some(Operator::Add));
    assert!(engine.should_reset_input());

    engine.press_script("3 0 = m+").expect("valid script");
    assert_eq!(engine.current_input(), "42");
    assert_eq!(engine.previous_input(), "");
    assert!(engine.memory_indicator());

    engine.render().expect("render should succeed");
    let renderer = engine.into_renderer();
    assert_eq!(renderer.render_count, 1);
    assert_eq!(
        renderer.last_frame,
        Some(DisplayFrame::new("42", "").with_memory_indicator(true))
    );
}

#[test]
fn independent_engines_do_not_share_state() {
    let mut first = CalculatorEngine::with_defaults(NullRenderer::default()).expect("engine init");
    let mut second = CalculatorEngine::with_defaults(NullRenderer::default()).expect("engine init");

    first.press_script("7 m+").expect("valid script");
    second.press_script("3").expect("valid script");

    assert_eq!(first.current_input(), "7");
    assert_eq!(second.current_input(), "3");
    assert!(first.memory_indicator());
    assert!(!second.memory_indicator());
}

#[test]
fn display_frame_mirrors_state_before_render() {
    let mut engine = CalculatorEngine::with_defaults(NullRenderer::default()).expect("engine init");
    engine.press_script("9 *").expect("valid script");

    let frame = engine.display_frame();
    assert_eq!(frame.primary, "9");
    assert_eq!(frame.history, "9 *");
    assert!(!frame.memory_indicator);
    assert!(engine.renderer().last_frame.is_none());
}
