use egui::{Color32, Context, ProgressBar, RichText, ScrollArea};

use crate::app::GreenPathApp;
use crate::attempt::{Phase, QuizAttempt};
use crate::model::AppState;
use crate::ui::layout::centered_panel;

enum QuizAction {
    Start,
    Select(usize),
    Advance,
    Restart,
    Exit,
}

pub fn ui_quiz(app: &mut GreenPathApp, ctx: &Context) {
    let mut action: Option<QuizAction> = None;
    let now = app.clock.now();
    let message = app.message.clone();

    match &app.attempt {
        None => ui_missing(ctx, &mut action),
        Some(attempt) => match attempt.phase() {
            Phase::Intro => ui_intro(ctx, attempt, &mut action),
            Phase::InProgress => ui_question(ctx, attempt, now, &message, &mut action),
            Phase::Finished => ui_results(ctx, attempt, &mut action),
        },
    }

    match action {
        Some(QuizAction::Start) => app.start_attempt(),
        Some(QuizAction::Select(choice)) => app.answer_current(choice),
        Some(QuizAction::Advance) => app.advance_question(),
        Some(QuizAction::Restart) => app.restart_attempt(),
        Some(QuizAction::Exit) => app.navigate(AppState::Modules),
        None => {}
    }
}

fn ui_missing(ctx: &Context, action: &mut Option<QuizAction>) {
    centered_panel(ctx, 140.0, 420.0, |ui| {
        ui.heading("Quiz not found");
        ui.add_space(10.0);
        if ui.button("Back to modules").clicked() {
            *action = Some(QuizAction::Exit);
        }
    });
}

fn ui_intro(ctx: &Context, attempt: &QuizAttempt, action: &mut Option<QuizAction>) {
    let quiz = attempt.quiz();
    centered_panel(ctx, 340.0, 520.0, |ui| {
        ui.heading(&quiz.title);
        ui.add_space(6.0);
        ui.label(&quiz.description);
        ui.add_space(14.0);

        ui.horizontal(|ui| {
            ui.label(format!("{} questions", quiz.questions.len()));
            ui.separator();
            ui.label(format!("{}% to pass", quiz.passing_score));
            ui.separator();
            ui.label(format!("+{} XP", quiz.xp_reward));
            if let Some(minutes) = quiz.time_limit_minutes {
                ui.separator();
                ui.label(format!("⏱ {minutes} min limit"));
            }
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("⬅ Back to modules").clicked() {
                *action = Some(QuizAction::Exit);
            }
            if ui.button("Start quiz ➡").clicked() {
                *action = Some(QuizAction::Start);
            }
        });
    });
}

fn ui_question(
    ctx: &Context,
    attempt: &QuizAttempt,
    now: chrono::DateTime<chrono::Local>,
    message: &str,
    action: &mut Option<QuizAction>,
) {
    let quiz = attempt.quiz();
    let index = attempt.current_index();
    let total = quiz.questions.len();
    let Some(question) = attempt.current_question() else {
        return;
    };
    let answered = attempt.is_current_answered();
    let selected = attempt.answer_at(index);

    centered_panel(ctx, 460.0, 620.0, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Question {} of {}", index + 1, total));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if let Some(secs) = attempt.remaining_seconds(now) {
                    let clock = format!("⏱ {}:{:02}", secs / 60, secs % 60);
                    if secs <= 30 {
                        ui.colored_label(Color32::LIGHT_RED, clock);
                    } else {
                        ui.label(clock);
                    }
                }
            });
        });
        ui.add(ProgressBar::new((index + 1) as f32 / total as f32).desired_height(6.0));
        ui.add_space(12.0);

        ui.strong(&question.prompt);
        ui.add_space(10.0);

        for (i, option) in question.options.iter().enumerate() {
            let letter = (b'A' + i as u8) as char;
            let text = format!("{letter}.  {option}");
            let rich = if answered && i == question.correct_answer {
                RichText::new(text).color(Color32::LIGHT_GREEN)
            } else if answered && selected == Some(i) {
                RichText::new(text).color(Color32::LIGHT_RED)
            } else {
                RichText::new(text)
            };
            let response = ui.add_enabled(
                !answered,
                egui::Button::new(rich).min_size(egui::vec2(ui.available_width(), 32.0)),
            );
            if response.clicked() {
                *action = Some(QuizAction::Select(i));
            }
            ui.add_space(4.0);
        }

        if answered {
            ui.add_space(8.0);
            if !message.is_empty() {
                ui.label(message);
            }
            ScrollArea::vertical().max_height(80.0).show(ui, |ui| {
                ui.weak(&question.explanation);
            });
            ui.add_space(8.0);
            let label = if attempt.is_last_question() {
                "See results 🏆"
            } else {
                "Next question ➡"
            };
            if ui.button(label).clicked() {
                *action = Some(QuizAction::Advance);
            }
        }
    });
}

fn ui_results(ctx: &Context, attempt: &QuizAttempt, action: &mut Option<QuizAction>) {
    let quiz = attempt.quiz();
    let Some(result) = attempt.result() else {
        return;
    };

    centered_panel(ctx, 360.0, 520.0, |ui| {
        if result.passed {
            ui.heading("🏆 Congratulations!");
            ui.label("You've mastered this module's content!");
        } else {
            ui.heading("Keep Learning!");
            ui.label("Review the material and try again to earn full XP.");
        }
        ui.add_space(14.0);

        ui.add(
            ProgressBar::new(result.percentage as f32 / 100.0)
                .text(format!("{}%", result.percentage)),
        );
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(format!(
                "{}/{} correct",
                result.correct_count,
                quiz.questions.len()
            ));
            ui.separator();
            ui.label(format!("+{} XP earned", result.xp_awarded));
        });

        ui.add_space(16.0);
        ui.horizontal(|ui| {
            if ui.button("🔄 Try again").clicked() {
                *action = Some(QuizAction::Restart);
            }
            if ui.button("🏠 Back to modules").clicked() {
                *action = Some(QuizAction::Exit);
            }
        });
    });
}
