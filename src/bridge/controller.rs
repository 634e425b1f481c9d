//! Stateful core of the bridge: owns the destination folder and
//! mediates every message exchange between host and content.
//!
//! Each inbound message is an independent request/reply pair. The
//! only long-lived state is the destination folder; everything else
//! is per-call.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;

use super::channel::ContentChannel;
use super::message::{self, Message};
use super::storage::{self, StorageError};

/// Why a `save-gif` request failed. Converted into a `save-result`
/// reply at the controller boundary, never propagated past it.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("Invalid GIF payload: {0}")]
    Payload(#[from] base64::DecodeError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub struct BridgeController {
    folder: Mutex<PathBuf>,
    channel: Arc<dyn ContentChannel>,
}

impl BridgeController {
    pub fn new(channel: Arc<dyn ContentChannel>, folder: PathBuf) -> Self {
        Self {
            folder: Mutex::new(folder),
            channel,
        }
    }

    /// Current destination folder for saved GIFs.
    pub fn save_folder(&self) -> PathBuf {
        self.folder.lock().unwrap().clone()
    }

    /// Announce the current folder to the content surface. Called
    /// once the content finishes its initial load; safe to call again
    /// at any time — it always reflects current state.
    pub fn on_ready(&self) {
        self.post_save_folder();
    }

    /// Entry point for every inbound transport delivery.
    pub async fn on_message(&self, raw: &str) {
        let Some(msg) = message::decode(raw) else {
            // Malformed input must never take the host down.
            log::debug!("Dropping undecodable content message");
            return;
        };

        match msg {
            Message::AskFolder => self.post_save_folder(),
            Message::SaveGif { name, base64 } => {
                let reply = match self.save_gif(name.as_deref(), base64.as_deref()).await {
                    Ok(path) => Message::SaveResult {
                        ok: true,
                        path: Some(path.to_string_lossy().into_owned()),
                        error: None,
                    },
                    Err(e) => {
                        log::error!("Saving GIF failed: {e}");
                        Message::SaveResult {
                            ok: false,
                            path: None,
                            error: Some(e.to_string()),
                        }
                    }
                };
                self.post(&reply);
            }
            // Host-originated shapes arriving inbound carry no intent.
            Message::SaveFolder { .. } | Message::SaveResult { .. } => {}
        }
    }

    /// Redirect saves to `path`. Ignored unless `path` is an existing
    /// directory — the folder picker collaborator only hands over
    /// directories it confirmed.
    pub fn set_save_folder(&self, path: &Path) {
        if !path.is_dir() {
            log::warn!(
                "Ignoring save folder change to non-directory {}",
                path.display()
            );
            return;
        }

        *self.folder.lock().unwrap() = path.to_path_buf();
        log::info!("Save folder changed to {}", path.display());
        self.post_save_folder();
    }

    /// Release the transport. Best-effort: teardown must never block
    /// application exit.
    pub fn shutdown(&self) {
        self.channel.close();
    }

    async fn save_gif(
        &self,
        name: Option<&str>,
        payload: Option<&str>,
    ) -> Result<PathBuf, SaveError> {
        // An absent payload is an empty payload, not an error.
        let bytes = BASE64_STANDARD.decode(payload.unwrap_or_default())?;

        let folder = self.save_folder();
        storage::ensure_dir(&folder)?;

        let target = folder.join(resolve_file_name(name));
        let written = storage::write_artifact(&bytes, &target).await?;
        log::info!("Saved {} bytes to {}", bytes.len(), written.display());
        Ok(written)
    }

    fn post_save_folder(&self) {
        let path = self.save_folder().to_string_lossy().into_owned();
        self.post(&Message::SaveFolder { path });
    }

    fn post(&self, message: &Message) {
        match message::encode(message) {
            Ok(raw) => {
                if let Err(e) = self.channel.post(&raw) {
                    log::error!("{e}");
                }
            }
            Err(e) => log::error!("Failed to encode outbound message: {e}"),
        }
    }
}

/// Pick the file name a GIF will be saved under.
///
/// A blank or absent request gets a timestamped name. A supplied name
/// is reduced to its final path component so content cannot steer the
/// write outside the destination folder.
fn resolve_file_name(requested: Option<&str>) -> String {
    let trimmed = requested.unwrap_or_default().trim();
    if trimmed.is_empty() {
        return timestamped_name();
    }

    match trimmed.rsplit(['/', '\\']).next() {
        Some(base) if !base.is_empty() && base != "." && base != ".." => base.to_string(),
        _ => timestamped_name(),
    }
}

/// `photobooth_YYYYMMDD_HHMMSS.gif` from the current local time.
/// Collisions within a second are accepted — last write wins.
fn timestamped_name() -> String {
    format!(
        "photobooth_{}.gif",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    )
}
