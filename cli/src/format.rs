//! Output formatting for resolutions, registries and reports.

use serde::Serialize;
use wprof_checker::{Report, Severity};
use wprof_core::{MarkerSet, Rule, RuleKind};
use wprof_registry::{MarkerRegistry, Profile};
use wprof_resolver::{ActiveRules, Exclusion};
use wprof_store::RuleStore;

/// Serializable view of one resolution.
#[derive(Debug, Serialize)]
pub struct ResolutionView<'a> {
    pub profile: &'a str,
    pub markers: &'a MarkerSet,
    pub active: Vec<&'a Rule>,
    pub excluded: Vec<ExcludedView<'a>>,
}

#[derive(Debug, Serialize)]
pub struct ExcludedView<'a> {
    pub rule: &'a Rule,
    pub because: &'a MarkerSet,
}

impl<'a> ResolutionView<'a> {
    pub fn new(
        profile: &'a Profile,
        active: &ActiveRules<'a>,
        excluded: &'a [Exclusion<'a>],
        kind: Option<RuleKind>,
    ) -> Self {
        let keep = |rule: &Rule| kind.map_or(true, |k| rule.kind == k);
        Self {
            profile: profile.name(),
            markers: profile.markers(),
            active: active.rules().filter(|r| keep(*r)).collect(),
            excluded: excluded
                .iter()
                .filter(|e| keep(e.rule))
                .map(|e| ExcludedView {
                    rule: e.rule,
                    because: &e.markers,
                })
                .collect(),
        }
    }
}

/// Format a rule as `id (kind) {markers}`.
pub fn format_rule(rule: &Rule) -> String {
    if rule.is_universal() {
        format!("{} ({})", rule.id, rule.kind)
    } else {
        format!("{} ({}) {}", rule.id, rule.kind, rule.markers)
    }
}

/// Render a resolution as text.
pub fn format_resolution(view: &ResolutionView<'_>, show_excluded: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!("profile {} {}", view.profile, view.markers));
    lines.push(format!("active rules ({}):", view.active.len()));
    for rule in &view.active {
        lines.push(format!("  {}", format_rule(rule)));
    }
    if show_excluded {
        lines.push(format!("excluded rules ({}):", view.excluded.len()));
        for excluded in &view.excluded {
            lines.push(format!(
                "  {} excluded by {}",
                format_rule(excluded.rule),
                excluded.because
            ));
        }
    }
    lines.join("\n")
}

/// Render the profile table.
pub fn format_profiles(registry: &MarkerRegistry, store: &RuleStore) -> String {
    let width = registry
        .profiles()
        .map(|p| p.name().len())
        .max()
        .unwrap_or(0);
    registry
        .profiles()
        .map(|p| {
            let active = wprof_resolver::resolve(p, store).len();
            format!(
                "{:width$}  {}  {}/{} rules",
                p.name(),
                p.markers(),
                active,
                store.len(),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the marker table.
pub fn format_markers(registry: &MarkerRegistry, store: &RuleStore) -> String {
    registry
        .markers()
        .map(|m| {
            let profiles: Vec<&str> = registry
                .profiles()
                .filter(|p| p.markers().contains(m))
                .map(Profile::name)
                .collect();
            let profiles = if profiles.is_empty() {
                "-".to_string()
            } else {
                profiles.join(", ")
            };
            format!(
                "{}  {} rules  profiles: {}",
                m,
                store.rules_tagged_with(m).len(),
                profiles
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a findings report as text.
pub fn format_report(report: &Report) -> String {
    let mut lines: Vec<String> = report.all().iter().map(ToString::to_string).collect();
    let errors = report.errors().count();
    let warnings = report.warnings().count();
    if report.is_empty() {
        lines.push("ok: no findings".to_string());
    } else {
        lines.push(format!(
            "{} {}, {} {}",
            errors,
            plural(errors, Severity::Error),
            warnings,
            plural(warnings, Severity::Warning)
        ));
    }
    lines.join("\n")
}

fn plural(count: usize, severity: Severity) -> String {
    if count == 1 {
        severity.to_string()
    } else {
        format!("{}s", severity)
    }
}

/// Serialize a value as pretty JSON.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}
