//! Application menu: save-folder selection, folder reveal, exit.
//!
//! Thin collaborators around the bridge controller. The only bridge
//! state the menu touches is the destination folder.

use std::sync::Arc;

use tauri::menu::{MenuBuilder, MenuItemBuilder, SubmenuBuilder};
use tauri::AppHandle;
use tauri_plugin_dialog::DialogExt;
use tauri_plugin_shell::ShellExt;

use crate::bridge::BridgeController;

/// Build the application menu and wire its click handlers.
pub fn setup_menu(
    app: &AppHandle,
    controller: Arc<BridgeController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let choose = MenuItemBuilder::with_id("choose-folder", "Choose Save Folder…").build(app)?;
    let open = MenuItemBuilder::with_id("open-folder", "Open Save Folder").build(app)?;
    let exit = MenuItemBuilder::with_id("exit", "Exit").build(app)?;

    let file = SubmenuBuilder::new(app, "File")
        .item(&choose)
        .item(&open)
        .separator()
        .item(&exit)
        .build()?;
    let menu = MenuBuilder::new(app).item(&file).build()?;
    app.set_menu(menu)?;

    app.on_menu_event(move |app, event| {
        if event.id() == "choose-folder" {
            pick_save_folder(app, controller.clone());
        } else if event.id() == "open-folder" {
            open_save_folder(app, &controller);
        } else if event.id() == "exit" {
            app.exit(0);
        }
    });

    Ok(())
}

/// Let the user pick a new destination folder. The dialog resolves on
/// its own thread; a cancelled pick is simply ignored.
fn pick_save_folder(app: &AppHandle, controller: Arc<BridgeController>) {
    app.dialog()
        .file()
        .set_title("Choose a folder for Photobooth GIFs")
        .set_directory(controller.save_folder())
        .pick_folder(move |picked| {
            let Some(dir) = picked.and_then(|f| f.into_path().ok()) else {
                return;
            };
            controller.set_save_folder(&dir);
        });
}

/// Reveal the destination folder in the platform file browser.
fn open_save_folder(app: &AppHandle, controller: &BridgeController) {
    let folder = controller.save_folder();
    if let Err(e) = app.shell().open(folder.to_string_lossy(), None) {
        log::error!("Failed to open {}: {e}", folder.display());
    }
}
