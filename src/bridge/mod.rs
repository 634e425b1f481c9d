//! Host–content bridge domain — public API.
//!
//! Everything that crosses the native/web boundary lives here: the
//! message schema and codec, the transport abstraction, the stateful
//! controller, the capability gate, and the file persistence the
//! controller drives. External code should only use what is exported
//! from this module.

mod channel;
mod controller;
mod gate;
mod message;
mod storage;

pub use channel::{ChannelError, ContentChannel, WebviewChannel, MESSAGE_FOR_CONTENT};
pub use controller::{BridgeController, SaveError};
pub use gate::{decide, Capability, Decision};
pub use message::{decode, encode, Message};
pub use storage::{default_save_folder, ensure_dir, StorageError};

use std::sync::Arc;

/// Tauri-managed handle to the bridge controller, shared between
/// command handlers and shell wiring.
pub struct BridgeState {
    pub controller: Arc<BridgeController>,
}
