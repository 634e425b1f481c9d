//! End-to-end tests for the host–content bridge.
//!
//! Drives the controller through the public API with an in-memory
//! channel standing in for the webview transport, exactly as the
//! bridge is meant to be substituted for tests.

use std::path::Path;
use std::sync::{Arc, Mutex};

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use photobooth_desktop_lib::bridge::{
    decode, BridgeController, Capability, ChannelError, ContentChannel, Decision, Message,
};

// ── In-memory transport ─────────────────────────────────────────────

struct RecordingChannel {
    sent: Mutex<Vec<String>>,
}

impl RecordingChannel {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            sent: Mutex::new(Vec::new()),
        })
    }

    fn replies(&self) -> Vec<Message> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|raw| decode(raw).expect("host reply must decode"))
            .collect()
    }
}

impl ContentChannel for RecordingChannel {
    fn post(&self, raw: &str) -> Result<(), ChannelError> {
        self.sent.lock().unwrap().push(raw.to_string());
        Ok(())
    }
}

fn bridge_in(folder: &Path) -> (Arc<RecordingChannel>, BridgeController) {
    let channel = RecordingChannel::new();
    let controller = BridgeController::new(channel.clone(), folder.to_path_buf());
    (channel, controller)
}

// ── Save round-trips ────────────────────────────────────────────────

#[tokio::test]
async fn valid_save_gif_lands_on_disk_with_exact_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let (channel, controller) = bridge_in(dir.path());

    let payload = BASE64_STANDARD.encode(b"0123456789");
    controller
        .on_message(&format!(
            r#"{{"type":"save-gif","name":"a.gif","base64":"{payload}"}}"#
        ))
        .await;

    let expected_path = dir.path().join("a.gif");
    assert_eq!(std::fs::read(&expected_path).unwrap(), b"0123456789");
    assert_eq!(
        channel.replies(),
        vec![Message::SaveResult {
            ok: true,
            path: Some(expected_path.to_string_lossy().into_owned()),
            error: None,
        }]
    );
}

#[tokio::test]
async fn invalid_payload_creates_no_file_and_reports_the_error() {
    let dir = tempfile::tempdir().unwrap();
    let (channel, controller) = bridge_in(dir.path());

    controller
        .on_message(r#"{"type":"save-gif","base64":"not-valid-base64!!"}"#)
        .await;

    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    match channel.replies().as_slice() {
        [Message::SaveResult { ok, path, error }] => {
            assert!(!ok);
            assert!(path.is_none());
            assert!(!error.as_deref().unwrap_or_default().is_empty());
        }
        other => panic!("unexpected replies: {other:?}"),
    }
}

#[tokio::test]
async fn unnamed_save_gets_a_timestamped_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let (channel, controller) = bridge_in(dir.path());

    let payload = BASE64_STANDARD.encode(b"GIF89a");
    controller
        .on_message(&format!(r#"{{"type":"save-gif","base64":"{payload}"}}"#))
        .await;

    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(entries.len(), 1);
    let name = &entries[0];
    assert!(name.starts_with("photobooth_"), "got {name}");
    assert!(name.ends_with(".gif"), "got {name}");
    assert_eq!(name.len(), "photobooth_YYYYMMDD_HHMMSS.gif".len());

    assert!(matches!(
        channel.replies().as_slice(),
        [Message::SaveResult { ok: true, .. }]
    ));
}

#[tokio::test]
async fn each_accepted_save_emits_exactly_one_result() {
    let dir = tempfile::tempdir().unwrap();
    let (channel, controller) = bridge_in(dir.path());

    let payload = BASE64_STANDARD.encode(b"frame");
    for name in ["one.gif", "two.gif"] {
        controller
            .on_message(&format!(
                r#"{{"type":"save-gif","name":"{name}","base64":"{payload}"}}"#
            ))
            .await;
    }

    let replies = channel.replies();
    assert_eq!(replies.len(), 2);
    assert!(replies
        .iter()
        .all(|r| matches!(r, Message::SaveResult { ok: true, .. })));
}

// ── Folder protocol ─────────────────────────────────────────────────

#[tokio::test]
async fn ask_folder_reflects_the_configured_folder() {
    let dir = tempfile::tempdir().unwrap();
    let (channel, controller) = bridge_in(dir.path());

    controller.on_message(r#"{"type":"ask-folder"}"#).await;

    assert_eq!(
        channel.replies(),
        vec![Message::SaveFolder {
            path: dir.path().to_string_lossy().into_owned(),
        }]
    );
}

#[tokio::test]
async fn folder_changes_are_announced_and_honored_by_later_saves() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    let (channel, controller) = bridge_in(first.path());

    controller.set_save_folder(second.path());

    let payload = BASE64_STANDARD.encode(b"moved");
    controller
        .on_message(&format!(
            r#"{{"type":"save-gif","name":"moved.gif","base64":"{payload}"}}"#
        ))
        .await;

    assert!(second.path().join("moved.gif").exists());
    assert!(!first.path().join("moved.gif").exists());

    let replies = channel.replies();
    assert_eq!(
        replies[0],
        Message::SaveFolder {
            path: second.path().to_string_lossy().into_owned(),
        }
    );
    assert!(matches!(replies[1], Message::SaveResult { ok: true, .. }));
}

#[tokio::test]
async fn save_recreates_the_folder_if_it_vanished() {
    let dir = tempfile::tempdir().unwrap();
    let folder = dir.path().join("Photobooth");
    std::fs::create_dir_all(&folder).unwrap();
    let (channel, controller) = bridge_in(&folder);

    std::fs::remove_dir(&folder).unwrap();

    let payload = BASE64_STANDARD.encode(b"back");
    controller
        .on_message(&format!(
            r#"{{"type":"save-gif","name":"back.gif","base64":"{payload}"}}"#
        ))
        .await;

    assert_eq!(std::fs::read(folder.join("back.gif")).unwrap(), b"back");
    assert!(matches!(
        channel.replies().as_slice(),
        [Message::SaveResult { ok: true, .. }]
    ));
}

// ── Capability gate ─────────────────────────────────────────────────

#[test]
fn media_capabilities_are_granted_for_every_prompt() {
    use photobooth_desktop_lib::bridge::decide;

    for _ in 0..2 {
        assert_eq!(decide(Capability::parse("camera")), Decision::Allow);
        assert_eq!(decide(Capability::parse("microphone")), Decision::Allow);
        assert_eq!(decide(Capability::parse("clipboard")), Decision::Default);
    }
}
