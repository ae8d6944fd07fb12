use chrono::{DateTime, Duration, Local};
use serde::{Deserialize, Serialize};

use crate::model::ModuleQuiz;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    Intro,
    InProgress,
    Finished,
}

/// Scored outcome of a finished attempt. Persisting it (XP totals, completion
/// counters) is the caller's job.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizResult {
    pub correct_count: usize,
    pub percentage: u32,
    pub passed: bool,
    pub xp_awarded: u32,
}

/// One run-through of a quiz, Intro to Finished.
///
/// Out-of-contract actions (answering twice, advancing without an answer,
/// starting mid-quiz) are ignored no-ops: the UI only offers valid actions and
/// there is no external consistency to defend. Scoring happens exactly once,
/// on entering Finished through any route.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct QuizAttempt {
    quiz: ModuleQuiz,
    answers: Vec<Option<usize>>,
    current_index: usize,
    deadline: Option<DateTime<Local>>,
    phase: Phase,
    result: Option<QuizResult>,
}

impl QuizAttempt {
    pub fn new(quiz: ModuleQuiz) -> Self {
        let answers = vec![None; quiz.questions.len()];
        Self {
            quiz,
            answers,
            current_index: 0,
            deadline: None,
            phase: Phase::Intro,
            result: None,
        }
    }

    pub fn quiz(&self) -> &ModuleQuiz {
        &self.quiz
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answer_at(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.result
    }

    pub fn current_question(&self) -> Option<&crate::model::QuizQuestion> {
        self.quiz.questions.get(self.current_index)
    }

    pub fn is_current_answered(&self) -> bool {
        self.answer_at(self.current_index).is_some()
    }

    /// Whether the answer recorded at `index` matches the correct option.
    /// `None` while unanswered.
    pub fn is_correct(&self, index: usize) -> Option<bool> {
        let selected = self.answer_at(index)?;
        let question = self.quiz.questions.get(index)?;
        Some(selected == question.correct_answer)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index + 1 >= self.quiz.questions.len()
    }

    /// Seconds left before the forced finish, `None` when no deadline is set.
    pub fn remaining_seconds(&self, now: DateTime<Local>) -> Option<i64> {
        self.deadline.map(|d| (d - now).num_seconds().max(0))
    }

    /// Intro → InProgress. Arms the deadline when the quiz has a time limit.
    pub fn start(&mut self, now: DateTime<Local>) {
        if self.phase != Phase::Intro {
            return;
        }
        self.deadline = self
            .quiz
            .time_limit_minutes
            .map(|m| now + Duration::minutes(m as i64));
        self.phase = Phase::InProgress;
        if self.quiz.questions.is_empty() {
            self.finish();
        }
    }

    /// Records the choice for the current question. One-way per question:
    /// a second selection at the same index is rejected and the stored answer
    /// stays. Returns whether the choice was recorded.
    pub fn select_answer(&mut self, choice: usize) -> bool {
        if self.phase != Phase::InProgress || self.is_current_answered() {
            return false;
        }
        let Some(question) = self.quiz.questions.get(self.current_index) else {
            return false;
        };
        if choice >= question.options.len() {
            return false;
        }
        self.answers[self.current_index] = Some(choice);
        true
    }

    /// Moves to the next question, or finishes the attempt from the last one.
    /// Accepted only once the current question has a recorded answer.
    pub fn advance(&mut self) {
        if self.phase != Phase::InProgress || !self.is_current_answered() {
            return;
        }
        if self.is_last_question() {
            self.finish();
        } else {
            self.current_index += 1;
        }
    }

    /// Deadline check, driven by the caller's repaint loop. Forces the finish
    /// once the countdown hits zero; whatever is unanswered counts incorrect.
    pub fn tick(&mut self, now: DateTime<Local>) {
        if self.phase != Phase::InProgress {
            return;
        }
        if let Some(deadline) = self.deadline {
            if now >= deadline {
                self.finish();
            }
        }
    }

    /// Discards the attempt and hands back a fresh Intro: index 0, answers
    /// cleared, deadline and result cleared.
    pub fn restart(&mut self) {
        self.answers = vec![None; self.quiz.questions.len()];
        self.current_index = 0;
        self.deadline = None;
        self.phase = Phase::Intro;
        self.result = None;
    }

    fn finish(&mut self) {
        // Clearing the deadline here guarantees no countdown survives the
        // transition out of InProgress, whichever path triggered it.
        self.deadline = None;
        self.phase = Phase::Finished;
        if self.result.is_none() {
            self.result = Some(self.score());
        }
    }

    fn score(&self) -> QuizResult {
        let total = self.quiz.questions.len();
        let correct_count = self
            .quiz
            .questions
            .iter()
            .enumerate()
            .filter(|(i, q)| self.answers[*i] == Some(q.correct_answer))
            .count();
        let percentage = if total == 0 {
            0
        } else {
            (100.0 * correct_count as f64 / total as f64).round() as u32
        };
        let passed = percentage >= self.quiz.passing_score;
        // Failing still pays a flat quarter of the reward, however close the
        // score came to the bar.
        let xp_awarded = if passed {
            self.quiz.xp_reward
        } else {
            (self.quiz.xp_reward as f64 * 0.25).round() as u32
        };
        QuizResult {
            correct_count,
            percentage,
            passed,
            xp_awarded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuizQuestion;
    use chrono::TimeZone;

    fn question(id: u32, correct: usize) -> QuizQuestion {
        QuizQuestion {
            id,
            prompt: format!("question {id}"),
            options: vec![
                "a".into(),
                "b".into(),
                "c".into(),
                "d".into(),
            ],
            correct_answer: correct,
            explanation: String::new(),
        }
    }

    fn quiz(questions: Vec<QuizQuestion>, time_limit_minutes: Option<u32>) -> ModuleQuiz {
        ModuleQuiz {
            module_id: 1,
            title: "Recycling Basics".into(),
            description: String::new(),
            xp_reward: 100,
            passing_score: 70,
            time_limit_minutes,
            questions,
        }
    }

    fn now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 4, 2, 12, 0, 0).unwrap()
    }

    #[test]
    fn two_of_three_correct_scores_67_and_quarter_xp() {
        let mut attempt = QuizAttempt::new(quiz(
            vec![question(1, 1), question(2, 2), question(3, 0)],
            None,
        ));
        attempt.start(now());
        assert!(attempt.select_answer(1));
        attempt.advance();
        assert!(attempt.select_answer(2));
        attempt.advance();
        assert!(attempt.select_answer(3));
        attempt.advance();

        assert_eq!(attempt.phase(), Phase::Finished);
        let result = attempt.result().unwrap();
        assert_eq!(result.correct_count, 2);
        assert_eq!(result.percentage, 67);
        assert!(!result.passed);
        assert_eq!(result.xp_awarded, 25);
    }

    #[test]
    fn passing_pays_the_full_reward() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 0), question(2, 3)], None));
        attempt.start(now());
        attempt.select_answer(0);
        attempt.advance();
        attempt.select_answer(3);
        attempt.advance();

        let result = attempt.result().unwrap();
        assert_eq!(result.percentage, 100);
        assert!(result.passed);
        assert_eq!(result.xp_awarded, 100);
    }

    #[test]
    fn recorded_answers_are_immutable() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 1)], None));
        attempt.start(now());
        assert!(attempt.select_answer(2));
        assert!(!attempt.select_answer(1));
        assert_eq!(attempt.answer_at(0), Some(2));
    }

    #[test]
    fn advance_without_an_answer_is_a_no_op() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 0), question(2, 0)], None));
        attempt.start(now());
        attempt.advance();
        assert_eq!(attempt.current_index(), 0);
        assert_eq!(attempt.phase(), Phase::InProgress);
    }

    #[test]
    fn select_is_rejected_before_start_and_after_finish() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 0)], None));
        assert!(!attempt.select_answer(0));
        attempt.start(now());
        attempt.select_answer(0);
        attempt.advance();
        assert_eq!(attempt.phase(), Phase::Finished);
        assert!(!attempt.select_answer(1));
    }

    #[test]
    fn out_of_range_choice_is_rejected() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 0)], None));
        attempt.start(now());
        assert!(!attempt.select_answer(4));
        assert_eq!(attempt.answer_at(0), None);
    }

    #[test]
    fn start_arms_the_deadline_from_the_time_limit() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 0)], Some(5)));
        attempt.start(now());
        assert_eq!(attempt.remaining_seconds(now()), Some(300));
    }

    #[test]
    fn expired_deadline_forces_finish_with_unanswered_incorrect() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 0)], Some(1)));
        attempt.start(now());
        attempt.tick(now() + Duration::minutes(1));

        assert_eq!(attempt.phase(), Phase::Finished);
        let result = attempt.result().unwrap();
        assert_eq!(result.correct_count, 0);
        assert!(!result.passed);
        assert_eq!(result.xp_awarded, 25);
    }

    #[test]
    fn no_countdown_survives_leaving_in_progress() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 0)], Some(1)));
        attempt.start(now());
        attempt.select_answer(0);
        attempt.advance();

        let result = attempt.result().unwrap();
        assert_eq!(result.correct_count, 1);
        // A late tick past the original deadline must not re-score.
        attempt.tick(now() + Duration::minutes(10));
        assert_eq!(attempt.result().unwrap(), result);
        assert_eq!(attempt.remaining_seconds(now() + Duration::minutes(10)), None);
    }

    #[test]
    fn restart_resets_everything_to_intro() {
        let mut attempt = QuizAttempt::new(quiz(vec![question(1, 0), question(2, 1)], Some(3)));
        attempt.start(now());
        attempt.select_answer(0);
        attempt.advance();
        attempt.select_answer(1);
        attempt.advance();
        assert_eq!(attempt.phase(), Phase::Finished);

        attempt.restart();
        assert_eq!(attempt.phase(), Phase::Intro);
        assert_eq!(attempt.current_index(), 0);
        assert_eq!(attempt.answer_at(0), None);
        assert_eq!(attempt.answer_at(1), None);
        assert_eq!(attempt.remaining_seconds(now()), None);
        assert_eq!(attempt.result(), None);
    }
}
