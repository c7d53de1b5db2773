//! Application state and eframe integration.

use crate::banner;
use crate::ui::{admin_panel, dialogs, main_window, order_form};
use eframe::egui;
use holster_orders::config::HomsConfig;
use holster_orders::lifecycle::{MainAction, OrderSession};
use tracing::{debug, warn};

/// The running application: one session plus the banner texture.
pub struct HomsApp {
    session: OrderSession,
    banner: Option<egui::TextureHandle>,
}

impl HomsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: HomsConfig) -> Self {
        let banner = if config.banner.enabled {
            match banner::load(&config.banner) {
                Ok(image) => Some(cc.egui_ctx.load_texture("banner", image, Default::default())),
                Err(e) => {
                    warn!(error = %e, "Continuing without banner image");
                    None
                }
            }
        } else {
            debug!("Banner disabled");
            None
        };

        Self {
            session: OrderSession::new(config.form),
            banner,
        }
    }

    /// Routes the window's close button through the exit prompt.
    fn intercept_close(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) || self.session.is_exited() {
            return;
        }
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
        if !self.session.is_blocked() {
            if let Err(e) = self.session.dispatch(MainAction::Exit) {
                warn!(error = %e, "Exit request failed");
            }
        }
    }
}

impl eframe::App for HomsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.intercept_close(ctx);

        let blocked = self.session.is_blocked();
        if let Some(action) = main_window::show(ctx, self.banner.as_ref(), blocked) {
            if let Err(e) = self.session.dispatch(action) {
                warn!(error = %e, ?action, "Main window action failed");
            }
        }
        order_form::show_all(ctx, &mut self.session, blocked);
        admin_panel::show_all(ctx, &mut self.session, blocked);
        dialogs::show(ctx, &mut self.session);

        if self.session.is_exited() {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }
}
