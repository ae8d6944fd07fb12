use egui::{Context, ProgressBar, ScrollArea};

use crate::app::{DAILY_BONUS_XP, GreenPathApp};
use crate::ui::layout::centered_panel;

pub fn ui_challenges(app: &mut GreenPathApp, ctx: &Context) {
    let rows = app.challenge_rows();
    let completed = rows.iter().filter(|r| r.completed).count();
    let all_done = app.all_daily_completed();
    let bonus_claimed = app.daily.bonus_claimed;
    let earned = app.daily_xp_earned();

    centered_panel(ctx, 480.0, 620.0, |ui| {
        ui.heading("🌱 Today's Eco Tasks");
        ui.label(format!(
            "{} of {} complete · +{} XP earned today · 🔥 {} day streak",
            completed,
            rows.len(),
            earned,
            app.profile.streak_days
        ));
        ui.add_space(8.0);

        // Daily bonus bar
        let frac = if rows.is_empty() {
            0.0
        } else {
            completed as f32 / rows.len() as f32
        };
        ui.add(ProgressBar::new(frac).text(format!("Daily bonus: +{DAILY_BONUS_XP} XP")));
        ui.add_space(4.0);
        if all_done && !bonus_claimed {
            if ui.button("✨ Claim bonus").clicked() {
                app.claim_daily_bonus();
            }
        } else if bonus_claimed {
            ui.weak("Bonus claimed! Come back tomorrow 🌟");
        } else {
            ui.weak(format!("Complete {} more task(s)", rows.len() - completed));
        }
        ui.add_space(10.0);

        let mut mark: Option<String> = None;
        ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
            for row in &rows {
                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            if row.completed {
                                ui.strong(format!("✅ {}", row.title));
                            } else {
                                ui.strong(&row.title);
                            }
                            ui.label(&row.description);
                            ui.weak(format!(
                                "{} · {} · {}",
                                row.category, row.difficulty, row.impact_metric
                            ));
                            ui.weak(format!("💡 Tip: {}", row.tip));
                        });
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                ui.vertical(|ui| {
                                    ui.label(format!("+{} XP", row.xp_reward));
                                    let button = egui::Button::new(if row.completed {
                                        "Done"
                                    } else {
                                        "Mark complete"
                                    });
                                    if ui.add_enabled(!row.completed, button).clicked() {
                                        mark = Some(row.id.clone());
                                    }
                                });
                            },
                        );
                    });
                });
                ui.add_space(6.0);
            }
        });

        if let Some(id) = mark {
            app.complete_challenge(&id);
        }

        ui.add_space(6.0);
        ui.weak("🔄 New challenges every day at midnight");
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });
}
