//! Build script for the Photobooth Tauri app.

fn main() {
    tauri_build::build();
}
