//! Transport between the native host and the embedded content.
//!
//! The controller only ever sees the `ContentChannel` trait. In
//! production the channel rides the Tauri event system; tests
//! substitute an in-memory fake. Ordered delivery is the transport's
//! responsibility, not the bridge's.

use tauri::{Emitter, Manager};

/// Event carrying host → content messages. The content surface
/// listens for this and feeds each payload to its own dispatcher.
pub const MESSAGE_FOR_CONTENT: &str = "photobooth:message-for-content";

#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Failed to post message to content: {0}")]
    Post(String),
}

/// Host-side handle on the bridge transport.
pub trait ContentChannel: Send + Sync {
    /// Deliver one serialized message to the content surface.
    fn post(&self, raw: &str) -> Result<(), ChannelError>;

    /// Tear the channel down. Best-effort; must never block exit.
    fn close(&self) {}
}

/// Production channel backed by the Tauri event system.
pub struct WebviewChannel {
    app: tauri::AppHandle,
}

impl WebviewChannel {
    pub fn new(app: tauri::AppHandle) -> Self {
        Self { app }
    }
}

impl ContentChannel for WebviewChannel {
    fn post(&self, raw: &str) -> Result<(), ChannelError> {
        self.app
            .emit(MESSAGE_FOR_CONTENT, raw)
            .map_err(|e| ChannelError::Post(e.to_string()))
    }

    fn close(&self) {
        if let Some(window) = self.app.get_webview_window("main") {
            let _ = window.close();
        }
    }
}
