use egui::{Context, ScrollArea};

use crate::app::GreenPathApp;
use crate::ui::layout::centered_panel;

pub fn ui_achievements(app: &mut GreenPathApp, ctx: &Context) {
    let rows = app.achievement_rows();
    let unlocked = rows.iter().filter(|r| r.unlocked).count();

    centered_panel(ctx, 440.0, 560.0, |ui| {
        ui.heading("🏅 Achievements");
        ui.label(format!("{unlocked}/{} unlocked", rows.len()));
        ui.add_space(10.0);

        ScrollArea::vertical().max_height(340.0).show(ui, |ui| {
            for row in &rows {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            if row.unlocked {
                                ui.strong(row.label());
                            } else {
                                ui.add_enabled(false, egui::Label::new(row.label()));
                            }
                            ui.weak(&row.description);
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.label(format!("+{} XP", row.xp_reward));
                            },
                        );
                    });
                });
                ui.add_space(4.0);
            }
        });
    });
}
