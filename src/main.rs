#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    photobooth_desktop_lib::run()
}
