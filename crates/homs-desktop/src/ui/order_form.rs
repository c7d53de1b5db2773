//! The "Place Order" windows.
//!
//! Widgets edit the form's fields in place; submitting and closing go through
//! the session once every window has been drawn.

use super::BLUE;
use eframe::egui::{self, Color32, RichText};
use holster_orders::config::FormConfig;
use holster_orders::intake::{Field, IntakeError, IntakeForm};
use holster_orders::lifecycle::{OrderSession, SessionError, WindowId};
use holster_orders::model::{Color, HolsterType};
use tracing::warn;

const INPUT_WIDTH: f32 = 220.0;

enum FormEvent {
    Submit(WindowId),
    Close(WindowId),
}

/// Draws every open order form and applies what the user did.
pub fn show_all(ctx: &egui::Context, session: &mut OrderSession, blocked: bool) {
    let mut events = Vec::new();

    for (id, form) in session.forms_mut() {
        let mut open = true;
        egui::Window::new("Place Order")
            .id(egui::Id::new(("order_form", id.0)))
            .open(&mut open)
            .default_size([400.0, 500.0])
            .collapsible(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!blocked, |ui| {
                    if form_body(ui, id, form) {
                        events.push(FormEvent::Submit(id));
                    }
                });
            });
        if !open {
            events.push(FormEvent::Close(id));
        }
    }

    for event in events {
        let result = match event {
            FormEvent::Submit(id) => session.submit_order(id).map(|_| ()),
            FormEvent::Close(id) => session.close_window(id),
        };
        match result {
            // Shown to the user as an "Input Error" notice
            Ok(()) | Err(SessionError::Intake(IntakeError::Validation(_))) => {}
            Err(e) => warn!(error = %e, "Order form action failed"),
        }
    }
}

/// Returns true when Submit was clicked.
fn form_body(ui: &mut egui::Ui, id: WindowId, form: &mut IntakeForm) -> bool {
    let config = *form.config();
    let fields = form.fields_mut();

    ui.vertical_centered(|ui| {
        ui.add_space(10.0);
        ui.label(RichText::new("Enter Customer Details").size(16.0).strong());
        ui.add_space(10.0);

        field_label(ui, Field::Name, &config);
        ui.add(egui::TextEdit::singleline(&mut fields.name).desired_width(INPUT_WIDTH));

        field_label(ui, Field::Email, &config);
        ui.add(egui::TextEdit::singleline(&mut fields.email).desired_width(INPUT_WIDTH));

        field_label(ui, Field::HolsterType, &config);
        choice(
            ui,
            (id, Field::HolsterType),
            &mut fields.holster_type,
            HolsterType::ALL.iter().map(|h| h.label()),
            Field::HolsterType.is_required(&config),
        );

        field_label(ui, Field::Color, &config);
        choice(
            ui,
            (id, Field::Color),
            &mut fields.color,
            Color::ALL.iter().map(|c| c.label()),
            Field::Color.is_required(&config),
        );

        ui.add_space(20.0);
        let submit = egui::Button::new(RichText::new("Submit Order").color(Color32::RED))
            .fill(BLUE)
            .min_size([160.0, 30.0].into());
        ui.add(submit).clicked()
    })
    .inner
}

fn field_label(ui: &mut egui::Ui, field: Field, config: &FormConfig) {
    ui.add_space(6.0);
    if field.is_required(config) {
        ui.label(format!("{}:", field.label()));
    } else {
        ui.label(format!("{} (optional):", field.label()));
    }
}

/// Drop-down over a fixed set of labels. Optional fields also offer a blank
/// entry so a choice can be cleared.
fn choice<'a>(
    ui: &mut egui::Ui,
    salt: (WindowId, Field),
    value: &mut String,
    labels: impl Iterator<Item = &'a str>,
    required: bool,
) {
    let selected = if value.is_empty() { "Select..." } else { value.as_str() }.to_owned();
    egui::ComboBox::from_id_source(egui::Id::new(("choice", salt.0 .0, salt.1.key())))
        .selected_text(selected)
        .width(INPUT_WIDTH)
        .show_ui(ui, |ui| {
            if !required {
                ui.selectable_value(value, String::new(), "(none)");
            }
            for label in labels {
                ui.selectable_value(value, label.to_owned(), label);
            }
        });
}
