use super::*;

impl GreenPathApp {
    pub fn module_rows(&self) -> Vec<ModuleRow> {
        self.quizzes
            .iter()
            .map(|quiz| ModuleRow {
                module_id: quiz.module_id,
                title: quiz.title.clone(),
                description: quiz.description.clone(),
                question_count: quiz.questions.len(),
                xp_reward: quiz.xp_reward,
                timed: quiz.time_limit_minutes.is_some(),
                best_score: self.profile.best_scores.get(&quiz.module_id).copied(),
            })
            .collect()
    }

    pub fn challenge_rows(&self) -> Vec<ChallengeRow> {
        self.todays_challenges()
            .into_iter()
            .map(|c| ChallengeRow {
                id: c.id.clone(),
                title: c.title.clone(),
                description: c.description.clone(),
                tip: c.tip.clone(),
                category: c.category.label(),
                difficulty: c.difficulty.label(),
                impact_metric: c.impact_metric.clone(),
                xp_reward: c.xp_reward,
                completed: self.is_challenge_completed(&c.id),
            })
            .collect()
    }

    pub fn achievement_rows(&self) -> Vec<AchievementRow> {
        self.achievements
            .iter()
            .map(|a| AchievementRow {
                name: a.name.clone(),
                description: a.description.clone(),
                tier: a.tier.label(),
                xp_reward: a.xp_reward,
                unlocked: self.requirement_met(&a.requirement),
            })
            .collect()
    }
}
