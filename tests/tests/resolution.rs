//! Resolution scenarios over the basic and WebAssembly fixtures.

use wprof_tests::prelude::*;

mod marker_sets {
    use super::*;

    const SOURCE: &str = r#"
profile n-free: N
profile nt-free: N T

grammar r1
grammar r2 [N]
semantic r3 [T]
semantic r4 [N T]
"#;

    pub fn scenario() -> Scenario {
        Scenario::new("marker_sets")
            .source(SOURCE, Format::Text)
            .resolves("full", |e| e.active(["r1", "r2", "r3", "r4"]))
            .resolves("n-free", |e| e.active(["r1", "r3"]))
            .resolves("nt-free", |e| e.active(["r1"]))
    }

    #[test]
    fn test_more_markers_exclude_more_rules() {
        scenario().run().unwrap();
    }
}

mod named_profiles {
    use super::*;

    pub fn scenario(fixture: &str) -> Scenario {
        Scenario::new("named_profiles")
            .fixture(fixture)
            .resolves("full", |e| e.count(5))
            .resolves("deterministic", |e| e.active(["r1", "r5"]))
            .resolves("scalar", |e| e.active(["r1", "r2", "r3", "r4"]).excludes("r5"))
            .resolves_union(["deterministic", "scalar"], |e| e.active(["r1"]))
            .findings(|f| f.none())
    }

    #[test]
    fn test_text_fixture() {
        scenario("basic.wprof").run().unwrap();
    }

    #[test]
    fn test_json_fixture() {
        scenario("basic.json").run().unwrap();
    }

    #[test]
    fn test_toml_fixture() {
        scenario("basic.toml").run().unwrap();
    }
}

mod webassembly {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("webassembly")
            .fixture("wasm.wprof")
            .resolves("full", |e| e.count(13))
            .resolves("deterministic", |e| {
                e.count(9)
                    .excludes("f32.add")
                    .excludes("f32x4.relaxed_madd")
                    .includes("memory.atomic.wait")
            })
            .resolves("single-threaded", |e| {
                e.count(10)
                    .excludes("memory.atomic.wait")
                    .excludes("i32.atomic.rmw.add")
            })
            .resolves("scalar", |e| e.count(10).excludes("v128.const"))
            .resolves("embedded", |e| {
                e.active(["i32.add", "i32.load", "block", "f32.add", "f32.nearest"])
            })
            .resolves_union(["deterministic", "embedded"], |e| {
                e.active(["i32.add", "i32.load", "block"])
            })
    }

    #[test]
    fn test_feature_profiles() {
        scenario().run().unwrap();
    }

    #[test]
    fn test_untagged_rules_survive_every_profile() {
        let mut scenario = Scenario::new("universal").fixture("wasm.wprof");
        for profile in ["full", "deterministic", "single-threaded", "scalar", "embedded"] {
            scenario = scenario.resolves(profile, |e| {
                e.includes("i32.add").includes("i32.load").includes("block")
            });
        }
        scenario.run().unwrap();
    }

    #[test]
    fn test_unknown_profile_fails() {
        let err = Scenario::new("unknown")
            .fixture("wasm.wprof")
            .resolves("gc", |e| e)
            .run()
            .unwrap_err();

        assert!(err.to_string().contains("gc"));
    }
}
