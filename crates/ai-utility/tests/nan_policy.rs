use ai_utility::{action, action_list, Evaluator, EvaluatorConfig};

fn scored(scores: &[f32]) -> Evaluator<Vec<usize>> {
    let mut roster = ai_utility::Roster::new();
    for (i, score) in scores.iter().copied().enumerate() {
        roster.push(action(
            "scored",
            move |_: &Vec<usize>| score,
            move |log: &mut Vec<usize>| log.push(i),
        ));
    }
    Evaluator::new(roster)
}

fn winner(scores: &[f32]) -> usize {
    let mut log = Vec::new();
    scored(scores).run(&mut log);
    assert_eq!(log.len(), 1, "exactly one action applies");
    log[0]
}

#[test]
fn leading_nan_loses_to_any_number() {
    assert_eq!(winner(&[f32::NAN, 1.0]), 1);
    assert_eq!(winner(&[f32::NAN, -1.0e30]), 1);
    assert_eq!(winner(&[f32::NAN, f32::MIN]), 1);
}

#[test]
fn trailing_nan_never_replaces_best() {
    assert_eq!(winner(&[-5.0, f32::NAN]), 0);
    assert_eq!(winner(&[2.0, f32::NAN, 3.0, f32::NAN]), 2);
}

#[test]
fn all_nan_roster_selects_first_action() {
    assert_eq!(winner(&[f32::NAN, f32::NAN, f32::NAN]), 0);

    let decision = scored(&[f32::NAN, f32::NAN]).decide(&Vec::new()).unwrap();
    assert_eq!(decision.index, 0);
    assert_eq!(decision.score, f32::NEG_INFINITY);
}

#[test]
fn nan_ties_with_negative_infinity() {
    assert_eq!(winner(&[f32::NEG_INFINITY, f32::NAN]), 0);
    assert_eq!(winner(&[f32::NAN, f32::NEG_INFINITY]), 0);
}

#[test]
fn infinite_scores_order_normally() {
    assert_eq!(winner(&[1.0e38, f32::INFINITY, 3.0]), 1);
    assert_eq!(winner(&[f32::INFINITY, f32::INFINITY]), 0);
    assert_eq!(winner(&[f32::NEG_INFINITY, -1.0e38]), 1);
}

#[test]
fn negative_only_roster_still_selects_the_maximum() {
    let evaluator = Evaluator::new(action_list![
        action("worse", |_: &i32| -3.0, |n: &mut i32| *n = 3),
        action("bad", |_: &i32| -1.0, |n: &mut i32| *n = 1),
        action("awful", |_: &i32| -7.0, |n: &mut i32| *n = 7),
    ]);

    let mut n = 0;
    evaluator.run(&mut n);
    assert_eq!(n, 1);
}

#[test]
fn positive_infinity_survives_trailing_nan() {
    assert_eq!(winner(&[f32::INFINITY, f32::NAN]), 0);
    assert_eq!(winner(&[f32::NAN, f32::INFINITY, f32::NAN]), 1);
}

#[test]
fn all_nan_roster_clears_negative_infinity_threshold() {
    let evaluator = scored(&[f32::NAN, f32::NAN])
        .with_config(EvaluatorConfig::default().with_min_score(f32::NEG_INFINITY))
        .unwrap();

    let mut log = Vec::new();
    let decision = evaluator.run(&mut log).unwrap();
    assert_eq!(decision.index, 0);
    assert_eq!(log, vec![0]);
}
