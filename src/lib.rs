//! Photobooth — Tauri application entry point.
//!
//! This is the app shell that wires together:
//! - Host–content bridge domain (bridge/)
//! - Application menu (menu.rs)
//! - Tauri command handlers for frontend communication

pub mod bridge;
mod menu;

use std::sync::Arc;

use bridge::{BridgeController, BridgeState, WebviewChannel};
use tauri::Manager;
use tauri_plugin_dialog::{DialogExt, MessageDialogKind};

/// Tauri command: one inbound message from the content surface.
///
/// The payload is raw serialized message text; the controller
/// decodes, dispatches, and posts any reply back over the channel.
/// Malformed text is dropped there — this command never fails the
/// content side.
#[tauri::command]
async fn post_message(state: tauri::State<'_, BridgeState>, raw: String) -> Result<(), String> {
    state.controller.on_message(&raw).await;
    Ok(())
}

/// Tauri command: decide a device-capability prompt.
///
/// The content glue consults the host before resolving the browser's
/// permission request; camera and microphone come back `allow`.
#[tauri::command]
fn request_capability(kind: String) -> String {
    let decision = bridge::decide(bridge::Capability::parse(&kind));
    log::debug!("Capability prompt '{kind}' decided: {}", decision.as_str());
    decision.as_str().to_string()
}

/// Entry point — called by Tauri runtime.
#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    env_logger::init();

    tauri::Builder::default()
        .plugin(tauri_plugin_shell::init())
        .plugin(tauri_plugin_dialog::init())
        .invoke_handler(tauri::generate_handler![post_message, request_capability])
        .setup(|app| {
            log::info!("Photobooth starting up");

            let channel = Arc::new(WebviewChannel::new(app.handle().clone()));
            let controller = Arc::new(BridgeController::new(
                channel,
                bridge::default_save_folder(),
            ));
            app.manage(BridgeState {
                controller: controller.clone(),
            });

            if let Err(e) = init_shell(app.handle(), &controller) {
                // The window stays open so the user sees what broke,
                // but the bridge is non-functional from here on.
                log::error!("Failed to initialize host shell: {e}");
                app.dialog()
                    .message(format!("Failed to initialize Photobooth: {e}"))
                    .kind(MessageDialogKind::Error)
                    .title("Photobooth")
                    .blocking_show();
            }

            Ok(())
        })
        .on_page_load(|webview, payload| {
            // Content finished its initial load — push the current
            // save folder so the capture UI never has to ask first.
            if matches!(payload.event(), tauri::webview::PageLoadEvent::Finished) {
                if let Some(state) = webview.try_state::<BridgeState>() {
                    state.controller.on_ready();
                }
            }
        })
        .on_window_event(|window, event| {
            if let tauri::WindowEvent::Destroyed = event {
                if window.label() == "main" {
                    log::info!("Main window destroyed, shutting bridge down");
                    if let Some(state) = window.try_state::<BridgeState>() {
                        state.controller.shutdown();
                    }
                }
            }
        })
        .run(tauri::generate_context!())
        .expect("Error running Photobooth");
}

/// Create the default save folder and install the application menu.
fn init_shell(
    app: &tauri::AppHandle,
    controller: &Arc<BridgeController>,
) -> Result<(), Box<dyn std::error::Error>> {
    bridge::ensure_dir(&controller.save_folder())?;
    menu::setup_menu(app, controller.clone())?;
    Ok(())
}
