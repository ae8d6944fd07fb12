// src/view_models.rs

#[derive(Clone, Debug)]
pub struct ModuleRow {
    pub module_id: u32,
    pub title: String,
    pub description: String,
    pub question_count: usize,
    pub xp_reward: u32,
    pub timed: bool,
    pub best_score: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct ChallengeRow {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tip: String,
    pub category: &'static str,
    pub difficulty: &'static str,
    pub impact_metric: String,
    pub xp_reward: u32,
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct AchievementRow {
    pub name: String,
    pub description: String,
    pub tier: &'static str,
    pub xp_reward: u32,
    pub unlocked: bool,
}

impl ModuleRow {
    pub fn label(&self) -> String {
        match self.best_score {
            Some(best) if best == 100 => format!("{} ⭐ (best {best}%)", self.title),
            Some(best) => format!("{} (best {best}%)", self.title),
            None => self.title.clone(),
        }
    }
}

impl AchievementRow {
    pub fn label(&self) -> String {
        if self.unlocked {
            format!("🏅 {} [{}]", self.name, self.tier)
        } else {
            format!("🔒 {} [{}]", self.name, self.tier)
        }
    }
}
