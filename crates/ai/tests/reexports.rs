#![cfg(all(feature = "utility", feature = "tools"))]

use ai::tools::VecTraceSink;
use ai::utility::{action, Evaluator};

#[test]
fn umbrella_exposes_evaluator_and_trace_sinks() {
    let evaluator = Evaluator::new(ai::action_list![
        action("hold", |_: &i32| 0.0, |_: &mut i32| {}),
        action("step", |n: &i32| 10.0 - *n as f32, |n: &mut i32| *n += 1),
    ]);

    let mut sink = VecTraceSink::default();
    let mut n = 0;
    let decision = evaluator.run_traced(&mut n, &mut sink).unwrap();

    assert_eq!(decision.name, "step");
    assert_eq!(n, 1);
    assert_eq!(sink.events.len(), 3);
}

#[cfg(feature = "serde")]
#[test]
fn umbrella_serde_feature_reaches_config() {
    let config: ai::utility::EvaluatorConfig =
        serde_json::from_str(r#"{ "min_score": 2.0 }"#).expect("deserialize");
    assert_eq!(config.min_score, Some(2.0));
}
