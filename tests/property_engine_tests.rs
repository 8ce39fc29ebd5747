use approx::assert_abs_diff_eq;
use calc_rs::api::CalculatorEngine;
use calc_rs::core::{format_display_number, parse_display_number, round_to_precision};
use calc_rs::render::NullRenderer;
use proptest::prelude::*;

const TOKENS: &[&str] = &[
    "0", "1", "2", "5", "9", ".", "+", "-", "*", "/", "^", "=", "square", "sqrt", "percentage",
    "sign", "inverse", "power", "backspace", "clear", "mc", "mr", "m+", "m-",
];

fn build_engine() -> CalculatorEngine<NullRenderer> {
    CalculatorEngine::with_defaults(NullRenderer::default()).expect("engine init")
}

fn run(script: &str) -> CalculatorEngine<NullRenderer> {
    let mut engine = build_engine();
    engine.press_script(script).expect("valid script");
    engine
}

fn spaced(text: &str) -> String {
    text.chars()
        .map(|ch| ch.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

proptest! {
    #[test]
    fn typed_number_is_displayed_verbatim(number in "[1-9][0-9]{0,5}(\\.[0-9]{1,5})?") {
        let engine = run(&spaced(&number));
        prop_assert_eq!(engine.current_input(), number.as_str());
    }

    #[test]
    fn digits_beyond_limit_are_dropped(digits in "[1-9][0-9]{12,30}") {
        let engine = run(&spaced(&digits));
        prop_assert_eq!(engine.current_input(), &digits[..12]);
    }

    #[test]
    fn addition_matches_rounded_sum(
        lhs in "[1-9][0-9]{0,4}\\.[0-9]{1,4}",
        rhs in "[1-9][0-9]{0,4}\\.[0-9]{1,4}"
    ) {
        let engine = run(&format!("{} + {} =", spaced(&lhs), spaced(&rhs)));
        let expected = parse_display_number(&lhs) + parse_display_number(&rhs);

        prop_assert_eq!(
            engine.current_input(),
            format_display_number(round_to_precision(expected, 6))
        );
        assert_abs_diff_eq!(
            parse_display_number(engine.current_input()),
            expected,
            epsilon = 1e-6
        );
    }

    #[test]
    fn second_equals_never_changes_state(
        script in prop::collection::vec(prop::sample::select(TOKENS), 0..40)
    ) {
        let script = script.join(" ");
        let once = run(&format!("{script} ="));
        let twice = run(&format!("{script} = ="));

        prop_assert_eq!(once.current_input(), twice.current_input());
        prop_assert_eq!(once.previous_input(), twice.previous_input());
        prop_assert_eq!(once.pending_operator(), twice.pending_operator());
        prop_assert_eq!(once.should_reset_input(), twice.should_reset_input());
    }

    #[test]
    fn state_invariants_hold_for_any_token_sequence(
        script in prop::collection::vec(prop::sample::select(TOKENS), 0..60)
    ) {
        let mut engine = build_engine();
        for token in script {
            engine.press_str(token).expect("vocabulary token");

            prop_assert!(!engine.current_input().is_empty());
            prop_assert_eq!(
                engine.pending_operator().is_some(),
                !engine.previous_input().is_empty()
            );
            prop_assert_eq!(engine.memory_indicator(), engine.memory_value() != 0.0);
        }
    }
}
