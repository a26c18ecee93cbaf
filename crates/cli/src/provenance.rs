//! `<stem>.provenance.json` sidecars next to hull output files.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Write the sidecar for `output` recording revision, run parameters, and summary.
pub fn write_sidecar(output: &Path, params: Value, summary: Value) -> Result<PathBuf> {
    let path = sidecar_path(output);
    let doc = json!({
        "code_rev": git_rev(),
        "quickhull_version": quickhull::VERSION,
        "params": params,
        "summary": summary,
        "outputs": [output.to_string_lossy()],
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/points.txt` → `dir/points.provenance.json`.
fn sidecar_path(output: &Path) -> PathBuf {
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("points");
    output.with_file_name(format!("{stem}.provenance.json"))
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`.
pub fn git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_sits_next_to_output() {
        let derived = sidecar_path(Path::new("/tmp/run/hull.txt"));
        assert_eq!(derived, Path::new("/tmp/run/hull.provenance.json"));
    }

    #[test]
    fn sidecar_records_params_and_summary() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("points.txt");
        fs::write(&output, "0,0\n").unwrap();
        let path = write_sidecar(&output, json!({"seed": 1}), json!({"hull_points": 4})).unwrap();
        let parsed: Value = serde_json::from_slice(&fs::read(path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], output.to_string_lossy().as_ref());
        assert_eq!(parsed["params"]["seed"], 1);
        assert_eq!(parsed["summary"]["hull_points"], 4);
    }

    #[test]
    fn sidecar_write_failure_is_an_error() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("missing").join("points.txt");
        assert!(write_sidecar(&output, Value::Null, Value::Null).is_err());
    }
}
