use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::attempt::QuizAttempt;
use crate::auth::Role;
use crate::clock::{Clock, SystemClock};
use crate::data;
use crate::events::{RecordChange, RecordFeed};
use crate::model::{Achievement, AppState, Challenge, ModuleQuiz};

// Submodules
pub mod actions;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod view_models;

// Re-export of the view models
pub use crate::view_models::{AchievementRow, ChallengeRow, ModuleRow};

/// How many challenges the daily selection holds.
pub const DAILY_CHALLENGE_COUNT: usize = 3;
/// Bonus XP for finishing every challenge of the day.
pub const DAILY_BONUS_XP: u32 = 50;
/// XP per profile level.
pub const XP_PER_LEVEL: u32 = 500;

#[derive(Serialize, Deserialize, Clone)]
pub struct Profile {
    pub display_name: String,
    pub role: Option<Role>,
    pub total_xp: u32,
    pub quizzes_completed: u32,
    pub challenges_completed: u32,
    pub perfect_scores: u32,
    pub best_scores: HashMap<u32, u32>, // module_id -> best percentage
    pub streak_days: u32,
    pub last_active: Option<NaiveDate>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            display_name: String::new(),
            role: None,
            total_xp: 0,
            quizzes_completed: 0,
            challenges_completed: 0,
            perfect_scores: 0,
            best_scores: HashMap::new(),
            streak_days: 0,
            last_active: None,
        }
    }
}

/// Completion state for one calendar day. Replaced wholesale on rollover; the
/// selection itself is recomputed from (date, catalog) and never stored.
#[derive(Serialize, Deserialize, Clone, Default)]
pub struct DailyState {
    pub date: NaiveDate,
    pub completed: HashSet<String>,
    pub bonus_claimed: bool,
}

#[derive(Serialize, Deserialize)]
pub struct GreenPathApp {
    pub profile: Profile,
    pub daily: DailyState,
    pub message: String,
    #[serde(skip, default = "load_challenges")]
    pub challenges: Vec<Challenge>,
    #[serde(skip, default = "load_quizzes")]
    pub quizzes: Vec<ModuleQuiz>,
    #[serde(skip, default = "load_achievements")]
    pub achievements: Vec<Achievement>,
    #[serde(skip, default = "default_clock")]
    pub clock: Box<dyn Clock>,
    #[serde(skip)]
    pub state: AppState,
    #[serde(skip)]
    pub attempt: Option<QuizAttempt>,
    #[serde(skip)]
    pub attempt_settled: bool,
    #[serde(skip)]
    pub confirm_reset: bool,
    #[serde(skip)]
    pub feed: Option<RecordFeed>,
    #[serde(skip)]
    pub feed_log: Vec<RecordChange>,
}

impl GreenPathApp {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    /// Entrypoint with an injected clock, used by tests to pin a date.
    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        let mut app = Self {
            profile: Profile::default(),
            daily: DailyState::default(),
            message: String::new(),
            challenges: load_challenges(),
            quizzes: load_quizzes(),
            achievements: load_achievements(),
            clock,
            state: AppState::Welcome,
            attempt: None,
            attempt_settled: false,
            confirm_reset: false,
            feed: None,
            feed_log: Vec::new(),
        };
        app.rollover_day();
        app
    }

    /// Hooks up the external record-change feed (attendance and profile rows
    /// pushed by the hosted backend).
    pub fn attach_feed(&mut self, feed: RecordFeed) {
        self.feed = Some(feed);
    }
}

impl Default for GreenPathApp {
    fn default() -> Self {
        Self::new()
    }
}

fn load_challenges() -> Vec<Challenge> {
    data::read_challenges_embedded().unwrap_or_else(|e| {
        log::error!("challenge catalog failed to parse: {e}");
        Vec::new()
    })
}

fn load_quizzes() -> Vec<ModuleQuiz> {
    data::read_quizzes_embedded().unwrap_or_else(|e| {
        log::error!("quiz catalog failed to parse: {e}");
        Vec::new()
    })
}

fn load_achievements() -> Vec<Achievement> {
    data::read_achievements_embedded().unwrap_or_else(|e| {
        log::error!("achievement catalog failed to parse: {e}");
        Vec::new()
    })
}

fn default_clock() -> Box<dyn Clock> {
    Box::new(SystemClock)
}
