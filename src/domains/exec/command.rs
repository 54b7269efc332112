//! Child-process execution.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

/// Captured result of a completed child process.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code; -1 when the process was killed by a signal.
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }

    /// Stdout and stderr joined, the way log-scraping callers consume it.
    pub fn combined(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Run a command to completion in `cwd`, capturing both output streams.
///
/// Extra environment variables are layered on top of the inherited
/// environment. Errors only when the process cannot be spawned; a failing
/// exit code is reported through [`CommandOutput::code`].
pub async fn run_command(
    program: &str,
    args: &[String],
    cwd: &Path,
    envs: &[(&str, String)],
) -> std::io::Result<CommandOutput> {
    debug!("Running: {} {}", program, args.join(" "));

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .envs(envs.iter().map(|(key, value)| (*key, value.as_str())))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await?;

    Ok(CommandOutput {
        code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[tokio::test]
    async fn test_run_command_captures_stdout() {
        let output = run_command("echo", &["hello".to_string()], &cwd(), &[])
            .await
            .unwrap();
        assert!(output.success());
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn test_run_command_nonzero_exit_is_not_an_error() {
        let output = run_command("false", &[], &cwd(), &[]).await.unwrap();
        assert!(!output.success());
        assert_ne!(output.code, 0);
    }

    #[tokio::test]
    async fn test_run_command_passes_env() {
        let output = run_command(
            "sh",
            &["-c".to_string(), "printf %s \"$GUARD_TEST_VAR\"".to_string()],
            &cwd(),
            &[("GUARD_TEST_VAR", "guard-value".to_string())],
        )
        .await
        .unwrap();
        assert_eq!(output.stdout, "guard-value");
    }

    #[tokio::test]
    async fn test_run_command_missing_binary_errors() {
        let result = run_command("definitely-not-a-real-binary", &[], &cwd(), &[]).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_combined_joins_streams() {
        let output = CommandOutput {
            code: 0,
            stdout: "out".to_string(),
            stderr: "err".to_string(),
        };
        assert_eq!(output.combined(), "out\nerr");
    }
}
