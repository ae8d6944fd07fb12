use egui::{CentralPanel, Context, Frame, Ui, Visuals};

use crate::app::GreenPathApp;
use crate::model::AppState;

pub fn top_panel(app: &mut GreenPathApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            if ui.button("📚 Modules").clicked() {
                app.navigate(AppState::Modules);
            }
            if ui.button("🌱 Daily").clicked() {
                app.navigate(AppState::Challenges);
            }
            if ui.button("🏅 Badges").clicked() {
                app.navigate(AppState::Achievements);
            }
            if ui.button("👤 Profile").clicked() {
                app.navigate(AppState::Profile);
            }
            if ui.button("🎓 Faculty").clicked() {
                app.navigate(AppState::Faculty);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!(
                    "Lvl {}  ·  {} XP  ·  🔥 {} days",
                    app.level(),
                    app.profile.total_xp,
                    app.profile.streak_days
                ));
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Vertically centered panel with a capped content width and an inner block.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let panel_width = (ui.available_width() * 0.97).min(max_width);
                ui.vertical_centered(|ui| {
                    ui.set_max_width(panel_width);
                    inner(ui);
                });
            });
    });
}
