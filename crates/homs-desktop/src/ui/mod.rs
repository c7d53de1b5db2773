//! One module per window.

pub mod admin_panel;
pub mod dialogs;
pub mod main_window;
pub mod order_form;

use eframe::egui::Color32;

pub const TITLE_BG: Color32 = Color32::from_rgb(0x2c, 0x3e, 0x50);
pub const BLUE: Color32 = Color32::from_rgb(0x34, 0x98, 0xdb);
pub const GREEN: Color32 = Color32::from_rgb(0x2e, 0xcc, 0x71);
pub const RED: Color32 = Color32::from_rgb(0xe7, 0x4c, 0x3c);
