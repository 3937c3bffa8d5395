//! Output formatting for human and JSON modes
//!
//! Check runs stream through a [`Reporter`]: [`LineReporter`] prints one line
//! per passed group as it happens, [`JsonReporter`] prints a single document
//! once the run is over. Listing commands build a result value and call
//! `render`.

use std::io::{self, Write};

use colored::Colorize;
use log::warn;
use serde::Serialize;

use crate::core::models::{EvaluationResult, RunOutcome, RunStatus};
use crate::core::policy::SUMMARY_MESSAGE;
use crate::core::ports::Reporter;

/// Marker for passed lines
pub const PASS_MARKER: &str = "✓";

/// Marker for failed lines
pub const FAIL_MARKER: &str = "✗";

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Line-oriented reporter for humans
#[derive(Debug)]
pub struct LineReporter<W: Write> {
    out: W,
    plain: bool,
    summarize_failures: bool,
}

impl LineReporter<io::Stdout> {
    /// Reporter writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> LineReporter<W> {
    /// Reporter writing to `out`
    pub fn new(out: W) -> Self {
        Self {
            out,
            plain: false,
            summarize_failures: false,
        }
    }

    /// Never colour output
    #[must_use]
    pub fn plain(mut self) -> Self {
        self.plain = true;
        self
    }

    /// Print a count of violations when the run fails
    ///
    /// Only meaningful when every rule is evaluated; a fail-fast run ends on
    /// its single failure line.
    #[must_use]
    pub fn summarize_failures(mut self, yes: bool) -> Self {
        self.summarize_failures = yes;
        self
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn pass_line(&mut self, message: &str) {
        let marker = if self.plain { PASS_MARKER.normal() } else { PASS_MARKER.green() };
        report_write(writeln!(self.out, "{marker} {message}"));
    }

    fn fail_line(&mut self, message: &str) {
        let marker = if self.plain { FAIL_MARKER.normal() } else { FAIL_MARKER.red() };
        report_write(writeln!(self.out, "{marker} {message}"));
    }
}

impl LineReporter<Vec<u8>> {
    /// Captured output as a string
    #[must_use]
    pub fn captured(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Reporter for LineReporter<W> {
    fn group_passed(&mut self, _group: &str, message: &str) {
        self.pass_line(message);
    }

    fn rule_failed(&mut self, result: &EvaluationResult) {
        self.fail_line(&result.message);
    }

    fn finished(&mut self, outcome: &RunOutcome) {
        if outcome.succeeded() {
            let summary = if self.plain { SUMMARY_MESSAGE.normal() } else { SUMMARY_MESSAGE.bold() };
            self.pass_line(&summary.to_string());
        } else if self.summarize_failures {
            let count = outcome.failures().count();
            self.fail_line(&format!("{count} architecture violation(s)"));
        }
        report_write(self.out.flush());
    }
}

/// Log a failed write to the report stream
///
/// The run outcome and exit status do not depend on the report being
/// delivered, so a closed stdout is logged rather than propagated.
fn report_write(result: io::Result<()>) {
    if let Err(e) = result {
        warn!("failed to write report: {e}");
    }
}

/// Machine-readable report of a run
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Whether every evaluated rule passed
    pub passed: bool,
    /// `success` or `failed`
    pub status: &'static str,
    /// First failing rule, if any
    pub failed_at: Option<&'a str>,
    /// Results in evaluation order
    pub results: &'a [EvaluationResult],
}

impl<'a> From<&'a RunOutcome> for RunReport<'a> {
    fn from(outcome: &'a RunOutcome) -> Self {
        let failed_at = outcome.failures().next().map(|r| r.rule.as_str());
        let status = match outcome.status() {
            RunStatus::Success => "success",
            RunStatus::FailedAt(_) => "failed",
        };
        Self {
            passed: failed_at.is_none(),
            status,
            failed_at,
            results: &outcome.results,
        }
    }
}

/// Reporter that prints one JSON document at the end of the run
#[derive(Debug)]
pub struct JsonReporter<W: Write> {
    out: W,
}

impl JsonReporter<io::Stdout> {
    /// Reporter writing to standard output
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    /// Reporter writing to `out`
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn group_passed(&mut self, _group: &str, _message: &str) {}

    fn rule_failed(&mut self, _result: &EvaluationResult) {}

    fn finished(&mut self, outcome: &RunOutcome) {
        let report = RunReport::from(outcome);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => report_write(writeln!(self.out, "{json}")),
            Err(e) => warn!("failed to serialize report: {e}"),
        }
        report_write(self.out.flush());
    }
}

/// Result of a rules listing
#[derive(Debug, Serialize)]
pub struct RuleListResult {
    /// Rules in evaluation order
    pub rules: Vec<RuleInfo>,
}

/// Information about a rule
#[derive(Debug, Serialize)]
pub struct RuleInfo {
    /// Rule id
    pub id: String,
    /// Group the rule reports under
    pub group: String,
    /// Artifact it inspects
    pub artifact: String,
    /// Predicate kind
    pub predicate: String,
    /// Predicate parameters
    pub parameters: Vec<String>,
}

/// Result of an artifacts listing
#[derive(Debug, Serialize)]
pub struct ArtifactListResult {
    /// Project root
    pub root: String,
    /// Artifacts in resolution order
    pub artifacts: Vec<ArtifactInfo>,
}

/// Information about an artifact
#[derive(Debug, Serialize)]
pub struct ArtifactInfo {
    /// Logical name
    pub name: String,
    /// Path relative to the root
    pub path: String,
    /// Whether the file exists
    pub present: bool,
}

impl RuleListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.rules.is_empty() {
            println!("No rules defined.");
            return;
        }

        println!("Rules (evaluation order):\n");
        for (n, r) in self.rules.iter().enumerate() {
            println!("  {:>2}. [{}] {}", n + 1, r.group, r.id);
            println!("      {} on {}", r.predicate, r.artifact);
            for p in &r.parameters {
                println!("      - {p}");
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl ArtifactListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Project root: {}\n", self.root);
        for a in &self.artifacts {
            let marker = if a.present { PASS_MARKER } else { FAIL_MARKER };
            println!("  {marker} {:<9} {}", a.name, a.path);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
