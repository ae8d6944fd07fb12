use egui::{Context, ProgressBar};

use crate::app::{GreenPathApp, XP_PER_LEVEL};
use crate::ui::layout::centered_panel;

pub fn ui_profile(app: &mut GreenPathApp, ctx: &Context) {
    centered_panel(ctx, 400.0, 520.0, |ui| {
        let role = app
            .profile
            .role
            .map(|r| r.label())
            .unwrap_or("signed out");
        ui.heading(format!("👤 {}", app.profile.display_name));
        ui.weak(format!("Role: {role}"));
        ui.add_space(12.0);

        ui.strong(format!("Level {}", app.level()));
        ui.add(
            ProgressBar::new(app.level_progress()).text(format!(
                "{}/{XP_PER_LEVEL} XP · {} to level {}",
                app.xp_into_level(),
                app.xp_to_next_level(),
                app.level() + 1
            )),
        );
        ui.add_space(12.0);

        ui.horizontal(|ui| {
            ui.label(format!("⚡ {} total XP", app.profile.total_xp));
            ui.separator();
            ui.label(format!("📚 {} quizzes", app.profile.quizzes_completed));
            ui.separator();
            ui.label(format!("🌱 {} challenges", app.profile.challenges_completed));
        });
        ui.horizontal(|ui| {
            ui.label(format!("🔥 {} day streak", app.profile.streak_days));
            ui.separator();
            ui.label(format!("⭐ {} perfect scores", app.profile.perfect_scores));
        });

        if !app.profile.best_scores.is_empty() {
            ui.add_space(10.0);
            ui.strong("Best quiz scores");
            let mut best: Vec<_> = app.profile.best_scores.iter().collect();
            best.sort_by_key(|(module_id, _)| **module_id);
            for (module_id, score) in best {
                let title = app
                    .quiz_by_module_id(*module_id)
                    .map(|q| q.title.clone())
                    .unwrap_or_else(|| format!("Module {module_id}"));
                ui.label(format!("{title}: {score}%"));
            }
        }

        ui.add_space(16.0);
        if ui.button("🔄 Erase progress and start over").clicked() {
            app.confirm_reset = true;
        }
    });
}
