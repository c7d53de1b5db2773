//! Blocking message boxes: notices and the exit prompt.

use eframe::egui::{self, Align2, Color32, RichText};
use holster_orders::lifecycle::{NoticeKind, OrderSession, SessionPhase};

const EXIT_PROMPT: &str = "Do you want to exit the application?";

/// Draws whichever dialog the session is waiting on and applies the answer.
pub fn show(ctx: &egui::Context, session: &mut OrderSession) {
    if let Some(notice) = session.notice().cloned() {
        let accent = match notice.kind {
            NoticeKind::Error => Color32::from_rgb(0xe7, 0x4c, 0x3c),
            NoticeKind::Info => Color32::from_rgb(0x34, 0x98, 0xdb),
        };
        let mut acknowledged = false;
        modal(ctx, "notice", &notice.title).show(ctx, |ui| {
            ui.label(RichText::new(&notice.message).color(accent));
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button("OK").clicked() || ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    acknowledged = true;
                }
            });
        });
        if acknowledged {
            session.acknowledge_notice();
        }
        return;
    }

    if session.phase() == SessionPhase::ConfirmingExit {
        let mut answer = None;
        modal(ctx, "exit_prompt", "Exit").show(ctx, |ui| {
            ui.label(EXIT_PROMPT);
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button("OK").clicked() {
                    answer = Some(true);
                }
                if ui.button("Cancel").clicked() || ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    answer = Some(false);
                }
            });
        });
        if let Some(confirm) = answer {
            session.answer_exit(confirm);
        }
    }
}

fn modal(ctx: &egui::Context, id: &str, title: &str) -> egui::Window<'static> {
    // Keep the dialog above the other windows
    ctx.move_to_top(egui::LayerId::new(egui::Order::Middle, egui::Id::new(id)));
    egui::Window::new(title)
        .id(egui::Id::new(id))
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
}
