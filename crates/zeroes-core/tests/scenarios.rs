//! Fixed scenarios: the reference input and the degenerate calls.

use zeroes_core::{
    move_zeroes_pair,
    verify::{run_all, Scenario, ACCEPTED_OUTPUTS, FIXED_INPUT},
    Element, InvalidInput, RuntimeOptimized, SpaceOptimized, Strategy, ZeroMover,
};

#[track_caller]
fn moved(mover: &dyn ZeroMover, input: &[Element]) -> Vec<Element> {
    let mut a = input.to_vec();
    let len = a.len();
    move_zeroes_pair(mover, Some(&mut a), len).unwrap();
    a
}

#[test]
fn reference_input_gives_known_outputs() {
    assert_eq!(moved(&RuntimeOptimized, &FIXED_INPUT), ACCEPTED_OUTPUTS[0]);
    assert_eq!(moved(&SpaceOptimized, &FIXED_INPUT), ACCEPTED_OUTPUTS[1]);
}

#[test]
fn zero_size_is_rejected_and_array_unchanged() {
    for s in Strategy::ALL {
        let mut a = FIXED_INPUT;
        assert_eq!(
            move_zeroes_pair(s.mover(), Some(&mut a), 0),
            Err(InvalidInput::Empty),
            "{s}"
        );
        assert_eq!(a, FIXED_INPUT, "{s} touched the array");

        let mut empty: [Element; 0] = [];
        assert_eq!(s.mover().move_zeroes(&mut empty), Err(InvalidInput::Empty));
    }
}

#[test]
fn absent_array_is_rejected() {
    for s in Strategy::ALL {
        assert_eq!(
            move_zeroes_pair(s.mover(), None, 1),
            Err(InvalidInput::Absent),
            "{s}"
        );
        assert_eq!(
            move_zeroes_pair(s.mover(), None, 0),
            Err(InvalidInput::Empty),
            "{s}"
        );
    }
}

#[test]
fn error_messages_name_the_cause() {
    assert_eq!(
        InvalidInput::Absent.to_string(),
        "invalid input: array reference is absent"
    );
    assert_eq!(
        InvalidInput::Empty.to_string(),
        "invalid input: element count is zero"
    );
    assert_eq!(
        InvalidInput::SizeMismatch { size: 3, len: 2 }.to_string(),
        "invalid input: declared size 3 does not match array length 2"
    );
}

#[test]
fn mixed_inputs_by_hand() {
    let cases: &[&[Element]] = &[
        &[0, 1, 0, 2, 0, 3],
        &[-1, 0, -2, 0],
        &[0, 0, 0, 7],
        &[7, 0, 0, 0],
        &[i32::MIN, 0, i32::MAX],
    ];
    for &input in cases {
        let z = input.iter().filter(|&&v| v == 0).count();
        for s in Strategy::ALL {
            let out = moved(s.mover(), input);
            assert!(out[..z].iter().all(|&v| v == 0), "{s}: {input:?} -> {out:?}");
            assert!(out[z..].iter().all(|&v| v != 0), "{s}: {input:?} -> {out:?}");
        }
    }
    assert_eq!(moved(&SpaceOptimized, &[7, 0, 0, 0]), [0, 0, 0, 7]);
    assert_eq!(moved(&RuntimeOptimized, &[-1, 0, -2, 0]), [0, 0, -1, -2]);
}

#[test]
fn self_test_reports_serialize() {
    let reports = run_all();
    assert_eq!(reports.len(), Strategy::ALL.len() * Scenario::ALL.len());
    assert!(reports.iter().all(|r| r.passed));

    let json = serde_json::to_value(&reports).unwrap();
    assert_eq!(json[0]["strategy"], "runtime-optimized");
    assert_eq!(json[1]["scenario"], "fail");
    assert_eq!(json[3]["passed"], true);
    assert!(json[0].get("detail").is_none());
}
