//! Ambient music while the choreography runs
//!
//! Playback is best effort: a missing player or song only produces a warning.

use crate::config::PlaybackConfig;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::{info, warn};

/// Running player process; stopped when dropped
pub struct Playback {
    child: Child,
}

impl Playback {
    pub fn start(config: &PlaybackConfig) -> Option<Self> {
        if !config.enabled {
            return None;
        }

        if !config.song.exists() {
            warn!("Could not play {:?}: file not found", config.song);
            return None;
        }

        let spawned = Command::new(&config.player)
            .arg(&config.song)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn();

        match spawned {
            Ok(child) => {
                info!("Playing {:?} with {:?}", config.song, config.player);
                Some(Self { child })
            }
            Err(e) => {
                warn!("Could not play {:?}: {}", config.song, e);
                None
            }
        }
    }

    pub async fn stop(mut self) {
        if let Err(e) = self.child.kill().await {
            warn!("Failed to stop playback: {}", e);
        }
    }
}
