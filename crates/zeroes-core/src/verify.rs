//! Self-test scenarios run against every [`Strategy`].
//!
//! The scenario list and the strategy table are plain data; [`run_all`]
//! walks their product in the order the self-test prints it (pass then fail
//! scenario for each strategy). A failed scenario only marks its report as
//! failed, the remaining scenarios still run.

use crate::{move_zeroes_pair, Element, Strategy, ZeroMover};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed input of the pass scenario.
pub const FIXED_INPUT: [Element; 10] = [1, 2, 3, 4, 5, 6, 7, 8, 0, 0];

/// Outputs the pass scenario accepts for [`FIXED_INPUT`]. Many other
/// arrangements are valid; these are the two the movers produce.
pub const ACCEPTED_OUTPUTS: [[Element; 10]; 2] = [
    [0, 0, 1, 2, 3, 4, 5, 6, 7, 8],
    [0, 0, 3, 4, 5, 6, 7, 8, 2, 1],
];

/// One rejected call of the fail scenario.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rejection {
    /// Short description used in failure details.
    pub label: &'static str,
    /// Whether an array (with meaningless contents) is passed at all.
    pub present: bool,
    /// Declared element count.
    pub size: usize,
}

/// Calls the fail scenario expects to be rejected.
pub const REJECTIONS: [Rejection; 3] = [
    Rejection {
        label: "absent array, size 0",
        present: false,
        size: 0,
    },
    Rejection {
        label: "absent array, size 1",
        present: false,
        size: 1,
    },
    Rejection {
        label: "placeholder array, size 0",
        present: true,
        size: 0,
    },
];

/// Placeholder contents for the present-but-meaningless rejection.
const PLACEHOLDER: Element = 0x5A5A;

/// Self-test scenarios.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// Move [`FIXED_INPUT`] and compare against [`ACCEPTED_OUTPUTS`].
    Pass,
    /// Every call in [`REJECTIONS`] must fail and leave its array untouched.
    Fail,
}

impl Scenario {
    /// Every scenario, in run order.
    pub const ALL: [Self; 2] = [Self::Pass, Self::Fail];

    /// Console label of the scenario.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pass => "UnitTestPassScenario",
            Self::Fail => "UnitTestFailScenario",
        }
    }
}

/// Outcome of one scenario against one strategy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Strategy under test.
    pub strategy: Strategy,
    /// Scenario that ran.
    pub scenario: Scenario,
    /// Whether every check held.
    pub passed: bool,
    /// What went wrong, when `passed` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({})... {}",
            self.scenario.label(),
            self.strategy,
            if self.passed { "Ok" } else { "FAIL" }
        )
    }
}

fn check_pass(mover: &dyn ZeroMover) -> Result<(), String> {
    let mut a = FIXED_INPUT;
    let size = a.len();
    move_zeroes_pair(mover, Some(&mut a), size).map_err(|e| e.to_string())?;
    if ACCEPTED_OUTPUTS.contains(&a) {
        Ok(())
    } else {
        Err(format!("unexpected output {a:?}"))
    }
}

fn check_fail(mover: &dyn ZeroMover) -> Result<(), String> {
    let mut accepted = Vec::new();
    for r in &REJECTIONS {
        let mut placeholder = [PLACEHOLDER];
        let array = r.present.then_some(&mut placeholder[..]);
        let rejected = move_zeroes_pair(mover, array, r.size).is_err();
        if !rejected || placeholder != [PLACEHOLDER] {
            accepted.push(r.label);
        }
    }
    if accepted.is_empty() {
        Ok(())
    } else {
        Err(format!("not rejected: {}", accepted.join("; ")))
    }
}

/// Run `scenario` against `strategy`.
#[must_use]
pub fn run_scenario(strategy: Strategy, scenario: Scenario) -> ScenarioReport {
    let mover = strategy.mover();
    let outcome = match scenario {
        Scenario::Pass => check_pass(mover),
        Scenario::Fail => check_fail(mover),
    };
    ScenarioReport {
        strategy,
        scenario,
        passed: outcome.is_ok(),
        detail: outcome.err(),
    }
}

/// Run every scenario against every strategy.
#[must_use]
pub fn run_all() -> Vec<ScenarioReport> {
    Strategy::ALL
        .iter()
        .flat_map(|&s| Scenario::ALL.iter().map(move |&sc| run_scenario(s, sc)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_scenario_passes_in_order() {
        let reports = run_all();
        let order: Vec<_> = reports.iter().map(|r| (r.strategy, r.scenario)).collect();
        assert_eq!(
            order,
            [
                (Strategy::RuntimeOptimized, Scenario::Pass),
                (Strategy::RuntimeOptimized, Scenario::Fail),
                (Strategy::SpaceOptimized, Scenario::Pass),
                (Strategy::SpaceOptimized, Scenario::Fail),
            ]
        );
        for r in &reports {
            assert!(r.passed, "{r}: {:?}", r.detail);
            assert!(r.detail.is_none());
        }
    }

    #[test]
    fn report_line_format() {
        let r = run_scenario(Strategy::SpaceOptimized, Scenario::Pass);
        assert_eq!(r.to_string(), "UnitTestPassScenario (SpaceOptimized)... Ok");

        let failed = ScenarioReport {
            passed: false,
            detail: Some("boom".into()),
            ..r
        };
        assert_eq!(
            failed.to_string(),
            "UnitTestPassScenario (SpaceOptimized)... FAIL"
        );
    }

    /// A mover that never rearranges fails the pass scenario; rejections are
    /// enforced by the pair entry before the mover runs.
    #[test]
    fn permissive_mover_is_caught() {
        struct AcceptAll;
        impl ZeroMover for AcceptAll {
            fn name(&self) -> &'static str {
                "AcceptAll"
            }
            fn move_zeroes(&self, _array: &mut [Element]) -> Result<(), crate::InvalidInput> {
                Ok(())
            }
        }

        let pass = check_pass(&AcceptAll).unwrap_err();
        assert!(pass.starts_with("unexpected output"), "{pass}");
        // The pair entry still rejects all three calls on its own.
        assert!(check_fail(&AcceptAll).is_ok());
    }
}
