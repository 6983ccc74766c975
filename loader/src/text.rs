//! Parser for the annotated text format.
//!
//! ```text
//! # markers may be declared up front
//! marker N T
//! marker V
//!
//! profile deterministic: N T
//! profile scalar: V
//!
//! grammar r1
//! grammar r2 [N]
//! semantic r4 [N, T]   # excluded by N or by T
//! ```
//!
//! Everything after `#` is a comment. Marker lists, in declarations and
//! inside brackets alike, may be separated by spaces or commas.

use crate::{Definitions, LoadError, LoadResult, ProfileRecord, RuleRecord};
use wprof_core::RuleKind;

/// Parse an annotated text source.
pub(crate) fn parse(source: &str) -> LoadResult<Definitions> {
    let mut definitions = Definitions::new();

    for (index, raw) in source.lines().enumerate() {
        let line_no = index + 1;
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        match keyword {
            "marker" => {
                if rest.is_empty() {
                    return Err(LoadError::syntax(line_no, "expected marker name after 'marker'"));
                }
                definitions.markers.extend(split_markers(rest));
            }
            "profile" => definitions.profiles.push(parse_profile(line_no, rest)?),
            "grammar" => definitions
                .rules
                .push(parse_rule(line_no, RuleKind::Grammar, rest)?),
            "semantic" => definitions
                .rules
                .push(parse_rule(line_no, RuleKind::Semantic, rest)?),
            other => {
                return Err(LoadError::syntax(
                    line_no,
                    format!(
                        "unknown declaration '{}' (expected marker, profile, grammar or semantic)",
                        other
                    ),
                ))
            }
        }
    }

    Ok(definitions)
}

/// Parse `name: M1 M2 ...`.
fn parse_profile(line_no: usize, rest: &str) -> LoadResult<ProfileRecord> {
    let (name, markers) = rest
        .split_once(':')
        .ok_or_else(|| LoadError::syntax(line_no, "expected ':' after profile name"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(LoadError::syntax(line_no, "expected profile name"));
    }
    Ok(ProfileRecord::new(name, split_markers(markers)))
}

/// Parse `id` or `id [M1, M2]`.
fn parse_rule(line_no: usize, kind: RuleKind, rest: &str) -> LoadResult<RuleRecord> {
    let (id, tail) = match rest.find('[') {
        Some(open) => (rest[..open].trim(), Some(&rest[open + 1..])),
        None => (rest, None),
    };

    if id.is_empty() {
        return Err(LoadError::syntax(
            line_no,
            format!("expected rule identifier after '{}'", kind),
        ));
    }
    if id.contains(char::is_whitespace) {
        return Err(LoadError::syntax(
            line_no,
            format!("unexpected text after rule identifier in '{}'", id),
        ));
    }

    let markers = match tail {
        None => Vec::new(),
        Some(tail) => {
            let (inside, after) = tail
                .split_once(']')
                .ok_or_else(|| LoadError::syntax(line_no, "unterminated marker list, expected ']'"))?;
            if !after.trim().is_empty() {
                return Err(LoadError::syntax(
                    line_no,
                    format!("unexpected text after marker list: '{}'", after.trim()),
                ));
            }
            split_markers(inside)
        }
    };

    Ok(RuleRecord::new(id, kind, markers))
}

fn split_markers(list: &str) -> Vec<String> {
    list.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|m| !m.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}
