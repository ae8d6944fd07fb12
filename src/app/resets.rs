use super::*;

impl GreenPathApp {
    /// Wipes XP, streak, badges and today's completion marks. Keeps the
    /// sign-in, so the user lands back on the modules page.
    pub fn reset_progress(&mut self) {
        let display_name = std::mem::take(&mut self.profile.display_name);
        let role = self.profile.role;

        self.profile = Profile {
            display_name,
            role,
            ..Profile::default()
        };
        self.daily = DailyState::default();
        self.rollover_day();
        self.attempt = None;
        self.attempt_settled = false;
        self.confirm_reset = false;
        self.message.clear();
        self.state = if role.is_some() {
            AppState::Modules
        } else {
            AppState::Welcome
        };
        log::info!("progress reset");
    }

    pub fn confirm_reset(&mut self, ctx: &egui::Context) {
        egui::Window::new("Confirm reset")
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label("Erase all your XP, streak and badges? This cannot be undone!");
                ui.horizontal(|ui| {
                    if ui.button("Yes, erase").clicked() {
                        self.reset_progress();
                    }
                    if ui.button("No").clicked() {
                        self.confirm_reset = false;
                    }
                });
            });
    }
}
