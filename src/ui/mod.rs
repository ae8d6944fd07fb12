pub mod layout;
pub mod views;

use crate::app::GreenPathApp;
use crate::attempt::Phase;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for GreenPathApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.rollover_day();
        self.poll_record_feed();

        if self.state != AppState::Welcome {
            top_panel(self, ctx);
        }
        bottom_panel(ctx);

        // Countdown pump: ticks only while the quiz screen shows a running
        // timed attempt, so leaving InProgress through any route stops it.
        if self.state == AppState::Quiz {
            self.tick_attempt();
            let counting = self.attempt.as_ref().is_some_and(|a| {
                a.phase() == Phase::InProgress
                    && a.remaining_seconds(self.clock.now()).is_some()
            });
            if counting {
                ctx.request_repaint_after(std::time::Duration::from_secs(1));
            }
        }

        // Dispatch by state to the view functions
        match self.state {
            AppState::Welcome => views::welcome::ui_welcome(self, ctx),
            AppState::Modules => views::modules::ui_modules(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Challenges => views::challenges::ui_challenges(self, ctx),
            AppState::Achievements => views::achievements::ui_achievements(self, ctx),
            AppState::Profile => views::profile::ui_profile(self, ctx),
            AppState::Faculty => views::faculty::ui_faculty(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
