use serde::{Deserialize, Serialize};

/// Challenge categories, also the fixed rotation order for the daily picker.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Water,
    Energy,
    Waste,
    Transport,
    Food,
    Lifestyle,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Water => "water",
            Category::Energy => "energy",
            Category::Waste => "waste",
            Category::Transport => "transport",
            Category::Food => "food",
            Category::Lifestyle => "lifestyle",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

/// One entry of the static daily-challenge catalog. Defined once in the
/// embedded YAML, never mutated at runtime.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Challenge {
    pub id: String,
    pub title: String,
    pub description: String,
    pub tip: String,
    pub category: Category,
    pub xp_reward: u32,
    pub difficulty: Difficulty,
    pub impact_metric: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizQuestion {
    pub id: u32,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub explanation: String,
}

/// A module quiz from the static catalog. `passing_score` is the percentage
/// needed to earn the full XP reward.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ModuleQuiz {
    pub module_id: u32,
    pub title: String,
    pub description: String,
    pub xp_reward: u32,
    pub passing_score: u32,
    #[serde(default)]
    pub time_limit_minutes: Option<u32>,
    pub questions: Vec<QuizQuestion>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Bronze,
    Silver,
    Gold,
    Platinum,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Bronze => "bronze",
            Tier::Silver => "silver",
            Tier::Gold => "gold",
            Tier::Platinum => "platinum",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    QuizzesCompleted,
    TotalXp,
    StreakDays,
    PerfectScore,
    ModuleComplete,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Requirement {
    #[serde(rename = "type")]
    pub kind: RequirementKind,
    pub value: u32,
    #[serde(default)]
    pub module_id: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tier: Tier,
    pub requirement: Requirement,
    pub xp_reward: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Modules,
    Quiz,
    Challenges,
    Achievements,
    Profile,
    Faculty,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Welcome
    }
}
