//! Machine-readable probe report.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// How far the probe sequence progressed before stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Start,
    Loaded,
    Resolved,
    Invoked,
    Closed,
}

/// Result of one probe run, emitted as JSON under `--json`.
#[derive(Debug, Serialize)]
pub struct ProbeReport {
    /// Module path as given on the command line.
    pub module: PathBuf,

    /// Entry symbol that was (or would have been) resolved.
    pub entry: String,

    /// Shared object the module path resolved to, once known.
    pub library: Option<PathBuf>,

    /// Furthest stage the sequence reached.
    pub stage: Stage,

    /// Whether the entry function reported successful initialization.
    pub initialized: bool,
}

impl ProbeReport {
    /// Creates a report for a run that has not started yet.
    pub fn new(module: &Path, entry: &str) -> Self {
        Self {
            module: module.to_owned(),
            entry: entry.to_owned(),
            library: None,
            stage: Stage::Start,
            initialized: false,
        }
    }

    /// Renders the report as pretty-printed JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("probe report serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_report_starts_at_stage_start() {
        let report = ProbeReport::new(Path::new("/plugins/adelay.so"), "ModuleEntry");
        assert_eq!(report.stage, Stage::Start);
        assert!(!report.initialized);
        assert!(report.library.is_none());
    }

    #[test]
    fn json_report_carries_the_probe_outcome() {
        let mut report = ProbeReport::new(Path::new("/plugins/adelay.so"), "ModuleEntry");
        report.library = Some(PathBuf::from("/plugins/adelay.so"));
        report.stage = Stage::Closed;
        report.initialized = true;

        let json = report.to_json();
        assert!(json.contains("\"entry\": \"ModuleEntry\""));
        assert!(json.contains("\"stage\": \"closed\""));
        assert!(json.contains("\"initialized\": true"));
    }

    #[test]
    fn stages_serialize_in_snake_case() {
        let json = serde_json::to_string(&Stage::Loaded).unwrap();
        assert_eq!(json, "\"loaded\"");
    }
}
