//! The "Order Management" windows: a read-only order table with Refresh.

use super::GREEN;
use eframe::egui::{self, Color32, RichText};
use egui_extras::{Column, TableBuilder};
use holster_orders::admin::TableSnapshot;
use holster_orders::lifecycle::{OrderSession, WindowId};
use tracing::warn;

const ROW_HEIGHT: f32 = 20.0;

enum AdminEvent {
    Refresh(WindowId),
    Close(WindowId),
}

/// Draws every open admin view and applies what the user did.
pub fn show_all(ctx: &egui::Context, session: &mut OrderSession, blocked: bool) {
    let mut events = Vec::new();

    for (id, view) in session.admin_views() {
        let mut open = true;
        egui::Window::new("Order Management")
            .id(egui::Id::new(("admin_view", id.0)))
            .open(&mut open)
            .default_size([600.0, 400.0])
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    ui.push_id(id.0, |ui| order_table(ui, view.snapshot()));
                    ui.add_space(10.0);
                    ui.vertical_centered(|ui| {
                        let refresh = egui::Button::new(RichText::new("Refresh").color(Color32::RED))
                            .fill(GREEN)
                            .min_size([120.0, 28.0].into());
                        if ui.add(refresh).clicked() {
                            events.push(AdminEvent::Refresh(id));
                        }
                    });
                });
            });
        if !open {
            events.push(AdminEvent::Close(id));
        }
    }

    for event in events {
        let result = match event {
            AdminEvent::Refresh(id) => session.refresh_admin(id).map(|_| ()),
            AdminEvent::Close(id) => session.close_window(id),
        };
        if let Err(e) = result {
            warn!(error = %e, "Admin view action failed");
        }
    }
}

fn order_table(ui: &mut egui::Ui, snapshot: &TableSnapshot) {
    TableBuilder::new(ui)
        .striped(true)
        .max_scroll_height(280.0)
        .columns(Column::initial(100.0).at_least(60.0).resizable(true), snapshot.columns().len())
        .header(ROW_HEIGHT, |mut header| {
            for column in snapshot.columns() {
                header.col(|ui| {
                    ui.strong(*column);
                });
            }
        })
        .body(|mut body| {
            for row in snapshot.rows() {
                body.row(ROW_HEIGHT, |mut cells| {
                    for cell in &row.cells {
                        cells.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            }
        });
}
