use anyhow::{Context, Result, anyhow, bail};
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn catalog_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_attribute-catalog"))
}

/// A catalog command with the output-format variable cleared so tests see
/// the text default unless they opt in.
pub fn catalog_command() -> Command {
    let mut cmd = Command::new(catalog_binary());
    cmd.env_remove("CLEAN_CODE_OUTPUT");
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    let output = cmd
        .output()
        .with_context(|| format!("failed to run command: {:?}", cmd))?;
    if output.status.success() {
        Ok(output)
    } else {
        bail!(
            "command {:?} failed: status {:?}\nstdout: {}\nstderr: {}",
            cmd,
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        )
    }
}

pub fn stdout_lines(output: &Output) -> Result<Vec<String>> {
    let text = String::from_utf8(output.stdout.clone()).context("stdout is not UTF-8")?;
    Ok(text.lines().map(str::to_string).collect())
}

pub fn validate_against_catalog_schema(instance: &Value) -> Result<()> {
    let schema_path = repo_root().join("schema/clean_code_catalog.schema.json");
    let schema = load_json(&schema_path)?;
    let compiled = JSONSchema::compile(&schema)
        .map_err(|err| anyhow!("compiling {}: {err}", schema_path.display()))?;
    if let Err(errors) = compiled.validate(instance) {
        let details = errors
            .map(|err| err.to_string())
            .collect::<Vec<_>>()
            .join("\n");
        bail!("catalog snapshot failed schema validation:\n{details}");
    }
    Ok(())
}

fn load_json(path: &Path) -> Result<Value> {
    let data = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("parsing {}", path.display()))
}
