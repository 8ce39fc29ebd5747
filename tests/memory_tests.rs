use calc_rs::api::CalculatorEngine;
use calc_rs::core::UnaryFunction;
use calc_rs::render::NullRenderer;

fn run(script: &str) -> CalculatorEngine<NullRenderer> {
    let mut engine = CalculatorEngine::with_defaults(NullRenderer::default()).expect("engine init");
    engine.press_script(script).expect("valid script");
    engine
}

#[test]
fn memory_add_accumulates_and_recall_shows_sum() {
    let engine = run("5 m+ clear 3 m+ mr");
    assert_eq!(engine.current_input(), "8");
    assert_eq!(engine.memory_value(), 8.0);
    assert!(engine.memory_indicator());
}

#[test]
fn recall_marks_input_as_committed() {
    let mut engine = run("7 m+ clear mr");
    assert_eq!(engine.current_input(), "7");
    assert!(engine.should_reset_input());

    engine.append_digit('2');
    assert_eq!(engine.current_input(), "2");
}

#[test]
fn recall_of_empty_memory_shows_zero() {
    assert_eq!(run("4 mr").current_input(), "0");
}

#[test]
fn memory_clear_turns_indicator_off() {
    let mut engine = run("5 m+");
    assert!(engine.memory_indicator());
    engine.apply_unary(UnaryFunction::MemoryClear);
    assert_eq!(engine.memory_value(), 0.0);
    assert!(!engine.memory_indicator());
}

#[test]
fn memory_subtract_to_zero_turns_indicator_off() {
    let engine = run("5 m+ m-");
    assert_eq!(engine.memory_value(), 0.0);
    assert!(!engine.memory_indicator());

    let engine = run("5 m-");
    assert_eq!(engine.memory_value(), -5.0);
    assert!(engine.memory_indicator());
}

#[test]
fn memory_survives_clear_and_evaluation() {
    let engine = run("1 . 5 m+ clear 2 + 2 = m+ clear mr");
    assert_eq!(engine.current_input(), "5.5");
}

#[test]
fn memory_does_not_change_display() {
    let engine = run("1 2 m+");
    assert_eq!(engine.current_input(), "12");
    assert!(!engine.should_reset_input());
}
