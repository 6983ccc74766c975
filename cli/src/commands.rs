//! Subcommands and their execution.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;
use std::path::{Path, PathBuf};
use wprof_core::{MarkerSet, RuleKind};
use wprof_session::{Session, SessionError};

use crate::config::{CliConfig, OutputFormat};
use crate::format::{self, ResolutionView};

/// Process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and found nothing to report.
    Success,
    /// Definitions could not be loaded or a name did not resolve.
    Failure,
    /// The checker reported errors, or warnings under `--deny-warnings`.
    Inconsistent,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Failure => 1,
            ExitStatus::Inconsistent => 2,
        }
    }
}

impl From<ExitStatus> for std::process::ExitCode {
    fn from(status: ExitStatus) -> Self {
        std::process::ExitCode::from(status.code())
    }
}

/// Rendered command output plus the status to exit with.
#[derive(Debug)]
pub struct Outcome {
    pub output: String,
    pub status: ExitStatus,
}

impl Outcome {
    fn success(output: String) -> Self {
        Self {
            output,
            status: ExitStatus::Success,
        }
    }
}

/// Follow-up suggestion for an error caused by a name that is not defined.
pub fn hint(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<SessionError>()
        .filter(|e| e.is_unknown_reference())
        .map(|_| "run `wprof profiles FILE` or `wprof markers FILE` to list defined names")
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the rules active under one profile, or the union of several
    Resolve {
        /// Definitions file (.wprof, .json or .toml)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Profile names; several names resolve their union
        #[arg(value_name = "PROFILE", required = true)]
        profiles: Vec<String>,

        /// Only list rules of this kind (grammar or semantic)
        #[arg(long)]
        kind: Option<RuleKind>,

        /// Also list excluded rules with the markers responsible
        #[arg(short, long)]
        excluded: bool,
    },

    /// Run the consistency checker
    Check {
        /// Definitions file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Warn about markers no profile references
        #[arg(long)]
        unused_markers: bool,

        /// Exit with status 2 on warnings too
        #[arg(long)]
        deny_warnings: bool,

        /// Check profile pairs on one thread
        #[arg(long)]
        sequential: bool,
    },

    /// List profiles with their markers and active rule counts
    Profiles {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List markers with their rule counts and the profiles excluding them
    Markers {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// List rules tagged with a marker
    Tagged {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(value_name = "MARKER")]
        marker: String,
    },

    /// Show which markers exclude a rule under a profile
    Explain {
        #[arg(value_name = "FILE")]
        file: PathBuf,

        #[arg(value_name = "PROFILE")]
        profile: String,

        #[arg(value_name = "RULE")]
        rule: String,
    },
}

#[derive(Serialize)]
struct Explanation<'a> {
    profile: &'a str,
    rule: &'a str,
    active: bool,
    excluded_by: &'a MarkerSet,
}

impl Command {
    /// The definitions file this command reads.
    pub fn file(&self) -> &Path {
        match self {
            Command::Resolve { file, .. }
            | Command::Check { file, .. }
            | Command::Profiles { file }
            | Command::Markers { file }
            | Command::Tagged { file, .. }
            | Command::Explain { file, .. } => file,
        }
    }

    /// Load the definitions file and run the command.
    pub fn run(&self, config: &CliConfig) -> Result<Outcome> {
        let path = self.file();
        let session = Session::from_file(path, &config.load)
            .with_context(|| format!("Failed to load: {}", path.display()))?;
        self.run_with(&session, config)
    }

    /// Run the command against an already loaded session.
    pub fn run_with(&self, session: &Session, config: &CliConfig) -> Result<Outcome> {
        let json = config.output.format == OutputFormat::Json;

        match self {
            Command::Resolve {
                profiles,
                kind,
                excluded,
                ..
            } => {
                let profile = session.combined_profile(profiles)?;
                let active = wprof_resolver::resolve(&profile, session.store());
                let exclusions = if *excluded || json {
                    wprof_resolver::excluded(&profile, session.store())
                } else {
                    Vec::new()
                };
                let view = ResolutionView::new(&profile, &active, &exclusions, *kind);
                let output = if json {
                    format::to_json(&view)?
                } else {
                    format::format_resolution(&view, *excluded)
                };
                Ok(Outcome::success(output))
            }

            Command::Check {
                unused_markers,
                deny_warnings,
                sequential,
                ..
            } => {
                let mut checker = config.check.checker.clone();
                if *unused_markers {
                    checker.report_unused_markers = true;
                }
                if *sequential {
                    checker.parallel = false;
                }
                let report = session.check(checker);

                let deny = *deny_warnings || config.check.fail_on_warnings;
                let status = if report.has_errors() || (deny && report.has_warnings()) {
                    ExitStatus::Inconsistent
                } else {
                    ExitStatus::Success
                };
                let output = if json {
                    format::to_json(&report)?
                } else {
                    format::format_report(&report)
                };
                Ok(Outcome { output, status })
            }

            Command::Profiles { .. } => {
                let output = if json {
                    let profiles: Vec<_> = session.registry().profiles().collect();
                    format::to_json(&profiles)?
                } else {
                    format::format_profiles(session.registry(), session.store())
                };
                Ok(Outcome::success(output))
            }

            Command::Markers { .. } => {
                let output = if json {
                    let markers: Vec<_> = session.registry().markers().collect();
                    format::to_json(&markers)?
                } else {
                    format::format_markers(session.registry(), session.store())
                };
                Ok(Outcome::success(output))
            }

            Command::Tagged { marker, .. } => {
                let rules = session.rules_tagged_with(marker)?;
                let output = if json {
                    format::to_json(&rules)?
                } else {
                    rules
                        .iter()
                        .map(|rule| format::format_rule(rule))
                        .collect::<Vec<_>>()
                        .join("\n")
                };
                Ok(Outcome::success(output))
            }

            Command::Explain { profile, rule, .. } => {
                let markers = session.explain(profile, rule)?;
                let output = if json {
                    format::to_json(&Explanation {
                        profile,
                        rule,
                        active: markers.is_empty(),
                        excluded_by: &markers,
                    })?
                } else if markers.is_empty() {
                    format!("{} is active under {}", rule, profile)
                } else {
                    format!("{} is excluded under {} by {}", rule, profile, markers)
                };
                Ok(Outcome::success(output))
            }
        }
    }
}
