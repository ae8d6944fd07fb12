use egui::{Context, ScrollArea};

use crate::app::GreenPathApp;
use crate::ui::layout::centered_panel;

pub fn ui_modules(app: &mut GreenPathApp, ctx: &Context) {
    let rows = app.module_rows();

    centered_panel(ctx, 420.0, 560.0, |ui| {
        ui.heading("📚 Learning Modules");
        ui.add_space(4.0);
        ui.label("Pass a quiz to earn its full XP reward.");
        ui.add_space(12.0);

        let mut open: Option<u32> = None;
        ScrollArea::vertical().max_height(320.0).show(ui, |ui| {
            for row in &rows {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.strong(row.label());
                            ui.label(&row.description);
                            let timer = if row.timed { " · ⏱ timed" } else { "" };
                            ui.weak(format!(
                                "{} questions · +{} XP{timer}",
                                row.question_count, row.xp_reward
                            ));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button("Start").clicked() {
                                    open = Some(row.module_id);
                                }
                            },
                        );
                    });
                });
                ui.add_space(6.0);
            }
        });

        if let Some(module_id) = open {
            app.open_quiz(module_id);
        }

        if !app.message.is_empty() {
            ui.add_space(8.0);
            ui.label(&app.message);
        }
    });
}
