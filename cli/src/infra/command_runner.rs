//! Infrastructure implementation of the `ScriptRunner` port.
//!
//! `TokioScriptRunner` is the production implementation that uses tokio
//! for process execution with guaranteed timeout and kill on all platforms.

use std::path::Path;
use std::process::{Output, Stdio};
use std::time::Duration;

use tokio::io::AsyncReadExt;

use crate::application::ports::ScriptRunner;
use crate::domain::InstallationError;

/// `PATH` handed to install scripts.
const SCRIPT_PATH: &str = "/usr/local/bin:/usr/bin:/bin";

/// Production `ScriptRunner`.
///
/// Scripts are executed directly (never through a shell) with a scrubbed
/// environment: only `PATH`, `HOME`, `USER`, and `LANG` are passed through.
///
/// `tokio::time::timeout` around `.output().await` does not kill the child
/// when it fires, so the timeout branch of `tokio::select!` kills it
/// explicitly.
pub struct TokioScriptRunner {
    env: Vec<(String, String)>,
}

impl TokioScriptRunner {
    #[must_use]
    pub fn new() -> Self {
        Self { env: script_env() }
    }
}

impl Default for TokioScriptRunner {
    fn default() -> Self {
        Self::new()
    }
}

fn script_env() -> Vec<(String, String)> {
    let home = dirs::home_dir().unwrap_or_default();
    let user = std::env::var("USER")
        .ok()
        .or_else(|| {
            home.file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_default();
    vec![
        ("PATH".to_string(), SCRIPT_PATH.to_string()),
        ("HOME".to_string(), home.display().to_string()),
        ("USER".to_string(), user),
        ("LANG".to_string(), "en_US.UTF-8".to_string()),
    ]
}

impl ScriptRunner for TokioScriptRunner {
    async fn run_script(
        &self,
        script: &Path,
        args: &[String],
        timeout: Duration,
    ) -> Result<Output, InstallationError> {
        let mut child = tokio::process::Command::new(script)
            .args(args)
            .env_clear()
            .envs(self.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| InstallationError::Spawn {
                script: script.to_path_buf(),
                source,
            })?;

        let mut stdout_handle = child.stdout.take();
        let mut stderr_handle = child.stderr.take();

        tokio::select! {
            result = async {
                let (status, stdout, stderr) = tokio::join!(
                    child.wait(),
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stdout_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                    async {
                        let mut buf = Vec::new();
                        if let Some(ref mut h) = stderr_handle {
                            let _ = h.read_to_end(&mut buf).await;
                        }
                        buf
                    },
                );
                status
                    .map(|status| Output { status, stdout, stderr })
                    .map_err(|source| InstallationError::Spawn {
                        script: script.to_path_buf(),
                        source,
                    })
            } => result,
            () = tokio::time::sleep(timeout) => {
                let _ = child.kill().await;
                tracing::warn!(script = %script.display(), secs = timeout.as_secs(), "install script timed out");
                Err(InstallationError::Timeout {
                    script: script.to_path_buf(),
                    secs: timeout.as_secs(),
                })
            }
        }
    }
}
