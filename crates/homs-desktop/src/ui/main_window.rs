//! The main menu: title, banner and the three navigation buttons.

use super::{BLUE, GREEN, RED, TITLE_BG};
use eframe::egui::{self, Color32, RichText};
use holster_orders::lifecycle::MainAction;

const BUTTON_SIZE: [f32; 2] = [200.0, 34.0];

/// Draws the main window and returns the button pressed this frame, if any.
pub fn show(
    ctx: &egui::Context,
    banner: Option<&egui::TextureHandle>,
    blocked: bool,
) -> Option<MainAction> {
    egui::CentralPanel::default()
        .show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    egui::Frame::none()
                        .fill(TITLE_BG)
                        .inner_margin(10.0)
                        .show(ui, |ui| {
                            ui.label(
                                RichText::new("Holster Order Management System")
                                    .size(18.0)
                                    .strong()
                                    .color(Color32::WHITE),
                            );
                        });

                    if let Some(texture) = banner {
                        ui.add_space(10.0);
                        ui.image((texture.id(), texture.size_vec2()));
                    }

                    ui.add_space(20.0);
                    let mut pressed = None;
                    for (action, text, fill) in [
                        (MainAction::PlaceNewOrder, "Place New Order", BLUE),
                        (MainAction::ViewOrders, "View Orders", GREEN),
                        (MainAction::Exit, "Exit", RED),
                    ] {
                        let button = egui::Button::new(RichText::new(text).size(14.0).color(Color32::BLACK))
                            .fill(fill)
                            .min_size(BUTTON_SIZE.into());
                        if ui.add(button).clicked() {
                            pressed = Some(action);
                        }
                        ui.add_space(10.0);
                    }
                    pressed
                })
                .inner
            })
            .inner
        })
        .inner
}
