//! The fixed contract set
//!
//! Rules run in the order built here, cheapest and most fundamental first:
//! artifact existence, then content patterns, then the cross-cutting topology
//! check. The order is observable (it decides which failure is reported
//! first), so append new rules rather than reordering.

use super::models::{ArtifactName, Predicate, Rule, RuleError};
use super::services::ConformanceEngine;

/// Final line printed when every group passed
pub const SUMMARY_MESSAGE: &str = "Architecture conformance checks passed";

/// Endpoints the API service must expose
pub const REQUIRED_ENDPOINTS: [&str; 3] = ["/health", "/signal", "/engine/status"];

/// Keys the snapshot schema must name
pub const SNAPSHOT_KEYS: [&str; 9] = [
    "symbol",
    "timeframe",
    "timestamp",
    "candle_time",
    "signal",
    "stale",
    "error",
    "last_fetch_status",
    "last_success_at",
];

/// Services the deployment descriptor must declare
pub const TOPOLOGY_KEYS: [&str; 3] = ["redis", "api", "worker"];

/// Thread construction in the API process
pub const THREAD_PATTERN: &str = r"\bthreading\.Thread\s*\(|\bThread\s*\(";

/// Long-running loops started from the API process
pub const WORKER_LOOP_PATTERN: &str = r"\b(?:run_forever|run_worker_loop)\b";

/// Long-lived request handler servers
pub const REQUEST_HANDLER_PATTERN: &str = r"\b(?:BaseHTTPRequestHandler|serve_forever)\b";

/// Worker-loop state leaking into the API
pub const WORKER_STATE_PATTERN: &str = r"\b(?:_worker_loop|_stop_event|stop_event)\b";

/// A startup hook whose first statement calls `.start()`
///
/// The statement may sit on the `def` line itself. Blank lines, comments and
/// docstrings before it are skipped.
pub const STARTUP_START_PATTERN: &str = concat!(
    r#"on_event\(\s*["']startup["']\s*\)[ \t]*\r?\n"#,
    r"(?:[ \t]*@[^\n]*\n)*",
    r"[ \t]*(?:async[ \t]+)?def[ \t]+\w+[ \t]*\([^)]*\)[^:\n]*:",
    r"(?:",
    r"[^\n]*\.start\(\)",
    r"|",
    r"[ \t]*(?:#[^\n]*)?\r?\n",
    r#"(?:[ \t]*(?:#[^\n]*|"""[^"]*"""|'''[^']*''')?[ \t]*\r?\n)*"#,
    r"[ \t]*[^#\s][^\n]*\.start\(\)",
    r")",
);

/// The worker drops the last, still-forming candle (`raw.iloc[:-1]`)
pub const CLOSED_CANDLE_PATTERN: &str = r"\[\s*:\s*-1\s*\]";

const ARTIFACTS_OK: &str = "Required artifacts present";
const STATELESS_OK: &str = "API service is stateless (no background scheduling)";
const ENDPOINTS_OK: &str = "API exposes /health, /signal and /engine/status";
const CLOSED_CANDLE_OK: &str = "Worker only uses closed candles";
const SNAPSHOT_OK: &str = "Snapshot schema declares all required keys";
const TOPOLOGY_OK: &str = "Deployment declares redis, api and worker services";

/// Build the ordered rule list
pub fn default_rules() -> Result<Vec<Rule>, RuleError> {
    let mut rules = Vec::new();

    for name in ArtifactName::ALL {
        rules.push(Rule::new(
            format!("{name}-exists"),
            "artifacts",
            name,
            Predicate::FileExists,
            format!("missing {name} artifact ({{detail}})"),
            ARTIFACTS_OK,
        ));
    }

    let forbidden = [
        ("service-no-threads", THREAD_PATTERN, "service artifact starts background threads"),
        ("service-no-worker-loop", WORKER_LOOP_PATTERN, "service artifact runs a worker loop"),
        (
            "service-no-request-handler",
            REQUEST_HANDLER_PATTERN,
            "service artifact runs a long-lived request handler",
        ),
        (
            "service-no-worker-state",
            WORKER_STATE_PATTERN,
            "service artifact holds worker-loop state",
        ),
        (
            "service-no-startup-start",
            STARTUP_START_PATTERN,
            "service artifact starts work from a startup hook",
        ),
    ];
    for (id, pattern, message) in forbidden {
        rules.push(Rule::new(
            id,
            "service-stateless",
            ArtifactName::Service,
            Predicate::forbids(pattern)?,
            format!("{message} ({{detail}})"),
            STATELESS_OK,
        ));
    }

    rules.push(Rule::new(
        "service-endpoints",
        "service-endpoints",
        ArtifactName::Service,
        Predicate::requires_all(REQUIRED_ENDPOINTS)?,
        "service artifact does not expose endpoint {detail}",
        ENDPOINTS_OK,
    ));

    rules.push(Rule::new(
        "worker-closed-candle",
        "worker-closed-candle",
        ArtifactName::Worker,
        Predicate::requires(CLOSED_CANDLE_PATTERN)?,
        "worker artifact does not drop the last, still-forming candle \
         (expected a [:-1] slice such as raw.iloc[:-1])",
        CLOSED_CANDLE_OK,
    ));

    rules.push(Rule::new(
        "snapshot-keys",
        "snapshot-keys",
        ArtifactName::Snapshot,
        Predicate::requires_all(SNAPSHOT_KEYS)?,
        "snapshot artifact is missing required key {detail}",
        SNAPSHOT_OK,
    ));

    rules.push(Rule::new(
        "compose-topology",
        "compose-topology",
        ArtifactName::Compose,
        Predicate::declares_keys(TOPOLOGY_KEYS)?,
        "deployment descriptor does not declare service {detail}",
        TOPOLOGY_OK,
    ));

    Ok(rules)
}

/// Engine over [`default_rules`]
pub fn default_engine() -> Result<ConformanceEngine, RuleError> {
    ConformanceEngine::new(default_rules()?)
}

/// Distinct groups of `rules`, in order
#[must_use]
pub fn groups(rules: &[Rule]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for rule in rules {
        if out.last() != Some(&rule.group.as_str()) {
            out.push(&rule.group);
        }
    }
    out
}
