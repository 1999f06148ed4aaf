//! External command execution.
//!
//! Every subprocess invocation in the crate goes through [`run`], which
//! blocks until the command completes and fails loudly on a non-zero exit
//! status, surfacing the command line and its stderr text.

use anyhow::Context;
use std::path::Path;

/// Runs `program` with `args` in `cwd` and returns its trimmed stdout.
pub fn run(cwd: &Path, program: &str, args: &[&str]) -> anyhow::Result<String> {
    let output = std::process::Command::new(program)
        .current_dir(cwd)
        .args(args)
        .output()
        .with_context(|| format!("Failed to spawn {program} command"))?;

    if output.status.success() {
        let result = String::from_utf8_lossy(&output.stdout);
        Ok(result.as_ref().trim().to_string())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        anyhow::bail!("{} {} failed: {}", program, args.join(" "), stderr.trim())
    }
}
