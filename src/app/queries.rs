use super::*;
use crate::daily::select_daily;
use crate::model::{Requirement, RequirementKind};

impl GreenPathApp {
    pub fn quiz_by_module_id(&self, module_id: u32) -> Option<&ModuleQuiz> {
        self.quizzes.iter().find(|q| q.module_id == module_id)
    }

    /// Today's selection, recomputed from the stored date and the catalog.
    pub fn todays_challenges(&self) -> Vec<&Challenge> {
        select_daily(self.daily.date, &self.challenges, DAILY_CHALLENGE_COUNT)
    }

    pub fn is_challenge_completed(&self, id: &str) -> bool {
        self.daily.completed.contains(id)
    }

    pub fn all_daily_completed(&self) -> bool {
        let todays = self.todays_challenges();
        !todays.is_empty() && todays.iter().all(|c| self.is_challenge_completed(&c.id))
    }

    /// XP earned from today's challenges, daily bonus included.
    pub fn daily_xp_earned(&self) -> u32 {
        let from_challenges: u32 = self
            .todays_challenges()
            .iter()
            .filter(|c| self.is_challenge_completed(&c.id))
            .map(|c| c.xp_reward)
            .sum();
        from_challenges + if self.daily.bonus_claimed { DAILY_BONUS_XP } else { 0 }
    }

    pub fn requirement_met(&self, requirement: &Requirement) -> bool {
        match requirement.kind {
            RequirementKind::QuizzesCompleted => {
                self.profile.quizzes_completed >= requirement.value
            }
            RequirementKind::TotalXp => self.profile.total_xp >= requirement.value,
            RequirementKind::StreakDays => self.profile.streak_days >= requirement.value,
            RequirementKind::PerfectScore => self.profile.perfect_scores >= requirement.value,
            RequirementKind::ModuleComplete => requirement
                .module_id
                .and_then(|m| self.profile.best_scores.get(&m))
                .map(|best| *best >= requirement.value)
                .unwrap_or(false),
        }
    }

    pub fn unlocked_achievements(&self) -> Vec<&crate::model::Achievement> {
        self.achievements
            .iter()
            .filter(|a| self.requirement_met(&a.requirement))
            .collect()
    }
}
