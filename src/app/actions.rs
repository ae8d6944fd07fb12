use super::*;
use crate::auth::{Access, authorize};

impl GreenPathApp {
    pub fn sign_in(&mut self, display_name: &str, role: Role) {
        self.profile.display_name = display_name.trim().to_string();
        self.profile.role = Some(role);
        self.record_activity();
        self.state = AppState::Modules;
        self.message.clear();
        log::info!("signed in as {} ({})", self.profile.display_name, role.label());
    }

    /// All screen changes go through here so the role gate and attempt
    /// teardown cannot be skipped.
    pub fn navigate(&mut self, target: AppState) {
        let allowed: &[Role] = match target {
            AppState::Faculty => &[Role::Faculty, Role::Admin],
            _ => &[],
        };
        match authorize(self.profile.role, allowed) {
            Access::Allow => {
                self.leave_quiz_if_needed(target);
                self.state = target;
            }
            Access::RedirectTo(path) => {
                log::info!("navigation to {target:?} redirected to {path}");
                self.message = "You don't have access to that page.".into();
                self.leave_quiz_if_needed(target);
                self.state = Self::state_for_path(path);
            }
        }
    }

    /// Navigating away discards the live attempt, countdown included.
    fn leave_quiz_if_needed(&mut self, target: AppState) {
        if self.state == AppState::Quiz && target != AppState::Quiz {
            self.attempt = None;
            self.attempt_settled = false;
        }
    }

    fn state_for_path(path: &str) -> AppState {
        match path {
            "/faculty" | "/admin" => AppState::Faculty,
            "/" => AppState::Modules,
            _ => AppState::Welcome,
        }
    }

    pub fn open_quiz(&mut self, module_id: u32) {
        let Some(quiz) = self.quiz_by_module_id(module_id).cloned() else {
            log::warn!("unknown quiz module {module_id}");
            self.message = "Quiz not found.".into();
            return;
        };
        self.attempt = Some(QuizAttempt::new(quiz));
        self.attempt_settled = false;
        self.message.clear();
        self.state = AppState::Quiz;
    }

    pub fn start_attempt(&mut self) {
        let now = self.clock.now();
        if let Some(attempt) = &mut self.attempt {
            attempt.start(now);
        }
        self.settle_attempt();
    }

    pub fn answer_current(&mut self, choice: usize) {
        let Some(attempt) = &mut self.attempt else {
            return;
        };
        if !attempt.select_answer(choice) {
            return;
        }
        self.message = match attempt.is_correct(attempt.current_index()) {
            Some(true) => "✅ Correct!".into(),
            _ => "❌ Not quite right".into(),
        };
    }

    pub fn advance_question(&mut self) {
        if let Some(attempt) = &mut self.attempt {
            attempt.advance();
            self.message.clear();
        }
        self.settle_attempt();
    }

    /// Countdown pump, called once per repaint while the quiz screen is up.
    /// The attempt ignores ticks outside InProgress, so nothing needs
    /// explicit cancellation here.
    pub fn tick_attempt(&mut self) {
        let now = self.clock.now();
        if let Some(attempt) = &mut self.attempt {
            attempt.tick(now);
        }
        self.settle_attempt();
    }

    pub fn restart_attempt(&mut self) {
        if let Some(attempt) = &mut self.attempt {
            attempt.restart();
        }
        self.attempt_settled = false;
        self.message.clear();
    }

    /// Applies a finished attempt to the profile exactly once, whichever
    /// route (last answer or timeout) ended it.
    fn settle_attempt(&mut self) {
        if self.attempt_settled {
            return;
        }
        let finished = self
            .attempt
            .as_ref()
            .and_then(|a| a.result().map(|r| (a.quiz().module_id, r)));
        if let Some((module_id, result)) = finished {
            self.attempt_settled = true;
            self.apply_quiz_result(module_id, result);
        }
    }

    /// One-way completion mark for a challenge in today's selection.
    pub fn complete_challenge(&mut self, id: &str) {
        self.rollover_day();
        if self.daily.completed.contains(id) {
            return;
        }
        let Some(xp) = self
            .todays_challenges()
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.xp_reward)
        else {
            log::warn!("challenge {id} is not in today's selection");
            return;
        };
        self.daily.completed.insert(id.to_string());
        self.profile.challenges_completed += 1;
        self.award_xp(xp);
        self.record_activity();
        self.message = format!("✅ Challenge complete! +{xp} XP");
    }

    pub fn claim_daily_bonus(&mut self) {
        self.rollover_day();
        if self.daily.bonus_claimed || !self.all_daily_completed() {
            return;
        }
        self.daily.bonus_claimed = true;
        self.award_xp(DAILY_BONUS_XP);
        self.record_activity();
        self.message = format!("🎁 Daily bonus claimed! +{DAILY_BONUS_XP} XP");
    }

    /// Drains the external record feed; newest entries end up at the back of
    /// the on-screen log.
    pub fn poll_record_feed(&mut self) {
        let mut changes = Vec::new();
        if let Some(feed) = &self.feed {
            while let Some(change) = feed.poll() {
                changes.push(change);
            }
        }
        for change in changes {
            log::debug!("record change: {change:?}");
            self.feed_log.push(change);
        }
        if self.feed_log.len() > 50 {
            let excess = self.feed_log.len() - 50;
            self.feed_log.drain(..excess);
        }
    }
}
