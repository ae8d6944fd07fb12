use crate::model::{Achievement, Challenge, ModuleQuiz};

/// Loads the daily-challenge catalog from the embedded YAML.
pub fn read_challenges_embedded() -> Result<Vec<Challenge>, serde_yaml::Error> {
    serde_yaml::from_str(include_str!("data/challenges.yaml"))
}

/// Loads the module-quiz catalog from the embedded YAML.
pub fn read_quizzes_embedded() -> Result<Vec<ModuleQuiz>, serde_yaml::Error> {
    serde_yaml::from_str(include_str!("data/quizzes.yaml"))
}

/// Loads the badge definitions from the embedded YAML.
pub fn read_achievements_embedded() -> Result<Vec<Achievement>, serde_yaml::Error> {
    serde_yaml::from_str(include_str!("data/achievements.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn challenge_catalog_parses_with_unique_ids() {
        let challenges = read_challenges_embedded().unwrap();
        assert!(!challenges.is_empty());
        let ids: HashSet<_> = challenges.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), challenges.len());
    }

    #[test]
    fn every_category_has_at_least_one_challenge() {
        let challenges = read_challenges_embedded().unwrap();
        for category in crate::daily::CATEGORY_ROTATION {
            assert!(
                challenges.iter().any(|c| c.category == category),
                "no challenge for category {}",
                category.label()
            );
        }
    }

    #[test]
    fn quiz_catalog_parses_and_answers_are_in_range() {
        let quizzes = read_quizzes_embedded().unwrap();
        assert!(!quizzes.is_empty());
        let ids: HashSet<_> = quizzes.iter().map(|q| q.module_id).collect();
        assert_eq!(ids.len(), quizzes.len());
        for quiz in &quizzes {
            assert!(!quiz.questions.is_empty(), "quiz {} has no questions", quiz.module_id);
            assert!(quiz.passing_score <= 100);
            for question in &quiz.questions {
                assert!(
                    question.correct_answer < question.options.len(),
                    "quiz {} question {} has an out-of-range answer",
                    quiz.module_id,
                    question.id
                );
            }
        }
    }

    #[test]
    fn achievement_catalog_parses_with_unique_ids() {
        let achievements = read_achievements_embedded().unwrap();
        assert!(!achievements.is_empty());
        let ids: HashSet<_> = achievements.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids.len(), achievements.len());
    }
}
