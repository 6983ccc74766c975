//! Checker findings over whole fixtures.

use wprof_tests::prelude::*;

#[test]
fn test_feature_profiles_are_consistent() {
    Scenario::new("wasm")
        .fixture("wasm.wprof")
        .findings_with(CheckerConfig::exhaustive(), |f| f.none())
        .run()
        .unwrap();
}

#[test]
fn test_sequential_and_parallel_agree() {
    for parallel in [false, true] {
        let config = CheckerConfig::default()
            .with_parallel(parallel)
            .with_parallel_threshold(1);
        Scenario::new("wasm")
            .fixture("wasm.wprof")
            .findings_with(config, |f| f.none())
            .run()
            .unwrap();
    }
}

#[test]
fn test_profile_excluding_everything_warns() {
    Scenario::new("suspicious")
        .fixture("suspicious.wprof")
        .resolves("minimal", |e| e.empty())
        .resolves("simd-free", |e| e.active(["atomic.wait"]))
        .findings(|f| {
            f.errors(0)
                .warnings(1)
                .codes(["empty-profile"])
                .mentions("Profile 'minimal' excludes every rule")
        })
        .run()
        .unwrap();
}

#[test]
fn test_unused_markers_reported_on_request() {
    Scenario::new("suspicious")
        .fixture("suspicious.wprof")
        .findings_with(CheckerConfig::default().with_unused_markers(true), |f| {
            f.codes(["empty-profile", "unused-marker"])
                .mentions("Marker 'L'")
        })
        .run()
        .unwrap();
}

#[test]
fn test_findings_mismatch_is_reported() {
    let err = Scenario::new("suspicious")
        .fixture("suspicious.wprof")
        .findings(|f| f.none())
        .run()
        .unwrap_err();

    assert!(matches!(err, ScenarioError::FindingsMismatch { .. }));
}
