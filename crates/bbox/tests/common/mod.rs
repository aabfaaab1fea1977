#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;

pub fn bbox_command() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bbox"));
    cmd.env_remove("BBOX_PRECISION").env_remove("RUST_LOG");
    cmd
}

/// Runs bbox with the given arguments and parses stdout as JSON.
pub fn run_json<I, S>(args: I) -> Value
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let output = bbox_command().args(args).output().unwrap();
    assert!(output.status.success(), "bbox failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}

pub fn coordinate(json: &Value, corner: &str, axis: &str) -> f64 {
    json[corner][axis]
        .as_f64()
        .unwrap_or_else(|| panic!("missing {corner}.{axis} in {json}"))
}
