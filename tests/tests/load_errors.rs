//! Definitions that must be rejected at load time.

use wprof_tests::prelude::*;

#[test]
fn test_full_profile_is_reserved() {
    Scenario::new("reserved")
        .fixture("reserved.wprof")
        .fails_to_load("Profile 'full' is reserved")
        .run()
        .unwrap();
}

#[test]
fn test_duplicate_rule_names_identifier() {
    Scenario::new("duplicate")
        .fixture("duplicate.json")
        .fails_to_load("Duplicate rule: r1")
        .run()
        .unwrap();
}

#[test]
fn test_redefining_profile_with_other_markers() {
    Scenario::new("redefined")
        .source(
            "profile deterministic: N T\nprofile deterministic: N\n",
            Format::Text,
        )
        .fails_to_load("already defined")
        .run()
        .unwrap();
}

#[test]
fn test_identical_profile_redefinition_is_accepted() {
    Scenario::new("idempotent")
        .source(
            "marker N\nmarker N\nprofile deterministic: N\nprofile deterministic: N\ngrammar r1 [N]\n",
            Format::Text,
        )
        .resolves("deterministic", |e| e.empty())
        .run()
        .unwrap();
}

mod undeclared_markers {
    use super::*;

    #[test]
    fn test_auto_registered_by_default() {
        Scenario::new("permissive")
            .fixture("undeclared.wprof")
            .resolves("deterministic", |e| e.active(["r2"]))
            .run()
            .unwrap();
    }

    #[test]
    fn test_rejected_when_strict() {
        Scenario::new("strict")
            .fixture("undeclared.wprof")
            .strict()
            .fails_to_load("Rule 'r2' references unknown marker: Q")
            .run()
            .unwrap();
    }
}

#[test]
fn test_load_expected_to_fail_but_succeeds() {
    let err = Scenario::new("fine")
        .fixture("basic.wprof")
        .fails_to_load("Duplicate rule")
        .run()
        .unwrap_err();

    assert!(matches!(err, ScenarioError::LoadSucceeded { .. }));
}
