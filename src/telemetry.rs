//! Telemetry metric name constants.
//!
//! Centralised metric names for demeter operations. Consumers install
//! their own `metrics` recorder (e.g. prometheus, statsd); without a
//! recorder installed, all metric calls are no-ops.
//!
//! # Metric naming conventions
//!
//! All metrics are prefixed with `demeter_`. Counters end in `_total`,
//! histograms use meaningful units (e.g. `_seconds`).
//!
//! # Common labels
//!
//! - `source`: how the crop was chosen: "rule" or "default"
//! - `crop`: recommended crop name (e.g. "Rice")
//! - `status`: outcome: "ok"/"error" for requests, "connected"/"fallback" for probes

/// Total recommendations produced by the rule table.
///
/// Labels: `source` ("rule" | "default"), `crop`.
pub const RECOMMENDATIONS_TOTAL: &str = "demeter_recommendations_total";

/// Total availability probes run against the remote model.
///
/// Labels: `status` ("connected" | "fallback").
pub const PROBE_TOTAL: &str = "demeter_probe_total";

/// Total predict requests sent to the remote model.
///
/// Labels: `status` ("ok" | "error").
pub const REMOTE_REQUESTS_TOTAL: &str = "demeter_remote_requests_total";

/// Remote predict request duration in seconds.
pub const REMOTE_REQUEST_DURATION_SECONDS: &str = "demeter_remote_request_duration_seconds";

/// Remote answers that named a different crop than the rule table.
pub const REMOTE_DISAGREEMENTS_TOTAL: &str = "demeter_remote_disagreements_total";
