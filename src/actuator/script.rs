use super::Actuator;
use crate::config::ActuatorConfig;
use crate::error::ActuatorError;
use async_trait::async_trait;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout as tokio_timeout;
use tracing::debug;

/// Runs one external program per move (e.g. `python2 ./NaoMoves/<move>.py ip port`)
pub struct ScriptActuator {
    pub program: String,
    pub args: Vec<String>,
    pub robot_ip: String,
    pub port: u16,
    pub timeout: Duration,
    pub working_dir: Option<PathBuf>,
}

impl ScriptActuator {
    pub fn from_config(config: &ActuatorConfig) -> Self {
        Self {
            program: config.program.clone(),
            args: config.args.clone(),
            robot_ip: config.robot_ip.clone(),
            port: config.port,
            timeout: Duration::from_secs(config.move_timeout_sec),
            working_dir: config.working_dir.clone(),
        }
    }

    /// Argument list for `name`, placeholders substituted
    pub fn render_args(&self, name: &str) -> Vec<String> {
        let port = self.port.to_string();
        self.args
            .iter()
            .map(|arg| {
                arg.replace("{move}", name)
                    .replace("{ip}", &self.robot_ip)
                    .replace("{port}", &port)
            })
            .collect()
    }
}

#[async_trait]
impl Actuator for ScriptActuator {
    fn name(&self) -> &'static str {
        "script"
    }

    async fn perform(&self, name: &str) -> Result<Duration, ActuatorError> {
        let args = self.render_args(name);
        debug!("Running {} {:?}", self.program, args);

        let mut cmd = Command::new(&self.program);
        cmd.args(&args).kill_on_drop(true);
        if let Some(ref dir) = self.working_dir {
            cmd.current_dir(dir);
        }

        let start = Instant::now();
        let output = tokio_timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| ActuatorError::Timeout {
                name: name.to_string(),
                timeout: self.timeout,
            })?
            .map_err(|e| ActuatorError::Spawn {
                name: name.to_string(),
                source: e,
            })?;
        let elapsed = start.elapsed();

        if !output.status.success() {
            return Err(ActuatorError::NonZeroExit {
                name: name.to_string(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(elapsed)
    }
}
