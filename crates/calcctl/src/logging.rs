//! Invocation log for calcctl
//!
//! One JSON line per run, appended to an XDG state file.

use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

pub const LOG_FILE_ENV: &str = "CALCCTL_LOG_FILE";

/// Log entry for each calcctl invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// RFC 3339 timestamp
    pub ts: String,

    pub req_id: String,

    /// Subcommand name (`home` when none was given)
    pub command: String,

    #[serde(default)]
    pub args: Vec<String>,

    pub exit_code: i32,

    pub duration_ms: u64,

    pub ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetails>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    pub code: String,
    pub message: String,
}

impl LogEntry {
    /// Start an entry for `command`; `finish` fills in the result
    pub fn begin(command: &str, args: Vec<String>) -> Self {
        Self {
            ts: Self::now(),
            req_id: Self::generate_req_id(),
            command: command.to_string(),
            args,
            exit_code: 0,
            duration_ms: 0,
            ok: true,
            error: None,
        }
    }

    pub fn finish(mut self, exit_code: i32, duration_ms: u64, error: Option<ErrorDetails>) -> Self {
        self.exit_code = exit_code;
        self.duration_ms = duration_ms;
        self.ok = exit_code == 0;
        self.error = error;
        self
    }

    /// Log file path, in priority order:
    /// 1. `$CALCCTL_LOG_FILE`
    /// 2. `$XDG_STATE_HOME/india-tools/ctl.jsonl`
    /// 3. `~/.local/state/india-tools/ctl.jsonl`
    pub fn discover_log_path() -> Option<PathBuf> {
        if let Ok(path) = std::env::var(LOG_FILE_ENV) {
            if !path.is_empty() {
                return Some(PathBuf::from(path));
            }
        }

        if let Ok(xdg_state) = std::env::var("XDG_STATE_HOME") {
            if !xdg_state.is_empty() {
                return Some(Path::new(&xdg_state).join("india-tools/ctl.jsonl"));
            }
        }

        if let Ok(home) = std::env::var("HOME") {
            return Some(Path::new(&home).join(".local/state/india-tools/ctl.jsonl"));
        }

        None
    }

    /// Append to the discovered log file, falling back to stderr so the
    /// entry never mixes with result output on stdout
    pub fn write(&self) -> Result<(), std::io::Error> {
        let json = serde_json::to_string(self)?;

        if let Some(path) = Self::discover_log_path() {
            if Self::write_to_file(&json, &path).is_ok() {
                return Ok(());
            }
        }

        eprintln!("{}", json);
        Ok(())
    }

    pub fn write_to_file(json: &str, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = OpenOptions::new().create(true).append(true).open(path)?;

        writeln!(file, "{}", json)?;
        Ok(())
    }

    pub fn generate_req_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn now() -> String {
        chrono::Utc::now().to_rfc3339()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_finish_sets_ok_from_exit_code() {
        let entry = LogEntry::begin("gst", vec!["--amount".into(), "1000".into()]).finish(0, 12, None);
        assert!(entry.ok);
        assert_eq!(entry.duration_ms, 12);

        let entry = LogEntry::begin("gst", vec![]).finish(
            65,
            3,
            Some(ErrorDetails {
                code: "REJECTED".to_string(),
                message: "Amount cannot be negative".to_string(),
            }),
        );
        assert!(!entry.ok);
        assert_eq!(entry.exit_code, 65);
    }

    #[test]
    fn test_error_omitted_when_absent() {
        let entry = LogEntry::begin("list", vec![]).finish(0, 1, None);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(!json.contains("\"error\""));
        assert!(json.contains("\"command\":\"list\""));
    }

    #[test]
    fn test_write_to_file_appends_lines() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/ctl.jsonl");

        for command in ["age", "emi"] {
            let entry = LogEntry::begin(command, vec![]).finish(0, 0, None);
            let json = serde_json::to_string(&entry).unwrap();
            LogEntry::write_to_file(&json, &path).unwrap();
        }

        let contents = std::fs::read_to_string(&path).unwrap();
        let entries: Vec<LogEntry> = contents
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].command, "emi");
        assert_ne!(entries[0].req_id, entries[1].req_id);
    }
}
