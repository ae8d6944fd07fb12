use super::*;
use crate::attempt::QuizResult;

impl GreenPathApp {
    /// Opens a new calendar day: fresh completion set, bonus relocked. The
    /// selection itself needs no reset since it is a pure function of the
    /// date.
    pub fn rollover_day(&mut self) {
        let today = self.clock.today();
        if self.daily.date != today {
            log::info!("daily challenges rolled over to {today}");
            self.daily = DailyState {
                date: today,
                completed: HashSet::new(),
                bonus_claimed: false,
            };
        }
    }

    /// Streak bookkeeping: same-day activity is a no-op, the day after the
    /// last one extends the streak, anything else starts over at 1.
    pub fn record_activity(&mut self) {
        let today = self.clock.today();
        match self.profile.last_active {
            Some(last) if last == today => {}
            Some(last) if last.succ_opt() == Some(today) => {
                self.profile.streak_days += 1;
                self.profile.last_active = Some(today);
            }
            _ => {
                self.profile.streak_days = 1;
                self.profile.last_active = Some(today);
            }
        }
    }

    pub fn award_xp(&mut self, xp: u32) {
        self.profile.total_xp += xp;
    }

    pub(super) fn apply_quiz_result(&mut self, module_id: u32, result: QuizResult) {
        self.award_xp(result.xp_awarded);
        self.profile.quizzes_completed += 1;
        if result.percentage == 100 {
            self.profile.perfect_scores += 1;
        }
        let best = self.profile.best_scores.entry(module_id).or_insert(0);
        if result.percentage > *best {
            *best = result.percentage;
        }
        self.record_activity();
        log::info!(
            "quiz {module_id} finished: {}/{} correct, {}%, +{} XP",
            result.correct_count,
            self.quiz_by_module_id(module_id)
                .map(|q| q.questions.len())
                .unwrap_or(0),
            result.percentage,
            result.xp_awarded
        );
        self.message = if result.passed {
            format!("🏆 Passed! +{} XP", result.xp_awarded)
        } else {
            format!("Keep learning — +{} XP", result.xp_awarded)
        };
    }

    pub fn level(&self) -> u32 {
        self.profile.total_xp / XP_PER_LEVEL + 1
    }

    pub fn xp_into_level(&self) -> u32 {
        self.profile.total_xp % XP_PER_LEVEL
    }

    pub fn level_progress(&self) -> f32 {
        self.xp_into_level() as f32 / XP_PER_LEVEL as f32
    }

    pub fn xp_to_next_level(&self) -> u32 {
        XP_PER_LEVEL - self.xp_into_level()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Local, TimeZone};

    fn clock_at(y: i32, m: u32, d: u32) -> Box<FixedClock> {
        Box::new(FixedClock(
            Local.with_ymd_and_hms(y, m, d, 9, 0, 0).unwrap(),
        ))
    }

    #[test]
    fn consecutive_days_extend_the_streak() {
        let mut app = GreenPathApp::with_clock(clock_at(2025, 3, 1));
        app.record_activity();
        assert_eq!(app.profile.streak_days, 1);

        // Same day again: no change.
        app.record_activity();
        assert_eq!(app.profile.streak_days, 1);

        app.clock = clock_at(2025, 3, 2);
        app.record_activity();
        assert_eq!(app.profile.streak_days, 2);
    }

    #[test]
    fn a_gap_resets_the_streak_to_one() {
        let mut app = GreenPathApp::with_clock(clock_at(2025, 3, 1));
        app.record_activity();
        app.clock = clock_at(2025, 3, 2);
        app.record_activity();
        assert_eq!(app.profile.streak_days, 2);

        app.clock = clock_at(2025, 3, 5);
        app.record_activity();
        assert_eq!(app.profile.streak_days, 1);
    }

    #[test]
    fn rollover_resets_daily_state_but_not_the_profile() {
        let mut app = GreenPathApp::with_clock(clock_at(2025, 3, 1));
        let id = app.todays_challenges()[0].id.clone();
        app.complete_challenge(&id);
        assert_eq!(app.daily.completed.len(), 1);
        let xp = app.profile.total_xp;
        assert!(xp > 0);

        app.clock = clock_at(2025, 3, 2);
        app.rollover_day();
        assert!(app.daily.completed.is_empty());
        assert!(!app.daily.bonus_claimed);
        assert_eq!(app.profile.total_xp, xp);
    }

    #[test]
    fn level_is_total_xp_over_500_plus_one() {
        let mut app = GreenPathApp::with_clock(clock_at(2025, 3, 1));
        assert_eq!(app.level(), 1);
        app.award_xp(499);
        assert_eq!(app.level(), 1);
        assert_eq!(app.xp_to_next_level(), 1);
        app.award_xp(1);
        assert_eq!(app.level(), 2);
        assert_eq!(app.xp_into_level(), 0);
        app.award_xp(1200);
        assert_eq!(app.level(), 4);
    }
}
