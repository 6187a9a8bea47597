//! Per-word learning progress

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const MAX_MASTERY_LEVEL: u8 = 3;

/// Accuracy a fully reviewed word needs to count as mastered
pub const MASTERY_ACCURACY_THRESHOLD: f64 = 0.8;

/// How well one learner knows one vocabulary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningProgress {
    pub vocabulary_id: Uuid,
    /// 0 (new) to 3 (mastered)
    pub mastery_level: u8,
    pub review_count: u32,
    pub correct_count: u32,
    pub total_attempts: u32,
    pub last_review_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_learned_date: Option<DateTime<Utc>>,
}

impl LearningProgress {
    pub fn new(vocabulary_id: Uuid) -> Self {
        Self {
            vocabulary_id,
            mastery_level: 0,
            review_count: 0,
            correct_count: 0,
            total_attempts: 0,
            last_review_date: Utc::now(),
            first_learned_date: None,
        }
    }

    pub fn record_answer(&mut self, correct: bool) {
        self.record_answer_at(correct, Utc::now());
    }

    pub fn record_answer_at(&mut self, correct: bool, now: DateTime<Utc>) {
        self.total_attempts += 1;
        if correct {
            self.correct_count += 1;
        }

        if self.first_learned_date.is_none() {
            self.first_learned_date = Some(now);
        }
        self.last_review_date = now;
        self.review_count += 1;

        self.mastery_level = if correct {
            (self.mastery_level + 1).min(MAX_MASTERY_LEVEL)
        } else {
            self.mastery_level.saturating_sub(1)
        };
    }

    /// Share of correct answers, 0.0 before the first attempt
    pub fn accuracy(&self) -> f64 {
        if self.total_attempts == 0 {
            return 0.0;
        }
        f64::from(self.correct_count) / f64::from(self.total_attempts)
    }

    pub fn is_mastered(&self) -> bool {
        self.mastery_level == MAX_MASTERY_LEVEL && self.accuracy() >= MASTERY_ACCURACY_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_fresh_progress() {
        let progress = LearningProgress::new(Uuid::new_v4());
        assert_eq!(progress.mastery_level, 0);
        assert_eq!(progress.accuracy(), 0.0);
        assert!(!progress.is_mastered());
        assert!(progress.first_learned_date.is_none());
    }

    #[test]
    fn test_three_right_one_wrong() {
        let mut progress = LearningProgress::new(Uuid::new_v4());
        let mut levels = Vec::new();
        for correct in [true, true, true, false] {
            progress.record_answer(correct);
            levels.push(progress.mastery_level);
        }

        assert_eq!(levels, vec![1, 2, 3, 2]);
        assert_eq!(progress.total_attempts, 4);
        assert_eq!(progress.correct_count, 3);
        assert_eq!(progress.review_count, 4);
        assert!((progress.accuracy() - 0.75).abs() < f64::EPSILON);
        assert!(!progress.is_mastered());
    }

    #[test]
    fn test_level_stays_in_bounds() {
        let mut progress = LearningProgress::new(Uuid::new_v4());
        progress.record_answer(false);
        progress.record_answer(false);
        assert_eq!(progress.mastery_level, 0);

        for _ in 0..10 {
            progress.record_answer(true);
        }
        assert_eq!(progress.mastery_level, MAX_MASTERY_LEVEL);
        // 10 of 12 correct
        assert!(progress.is_mastered());
    }

    #[test]
    fn test_mastery_needs_accuracy() {
        let mut progress = LearningProgress::new(Uuid::new_v4());
        for correct in [false, false, false, true, true, true] {
            progress.record_answer(correct);
        }
        assert_eq!(progress.mastery_level, MAX_MASTERY_LEVEL);
        assert!(!progress.is_mastered());
    }

    #[test]
    fn test_first_learned_is_stamped_once() {
        let mut progress = LearningProgress::new(Uuid::new_v4());
        let start = Utc::now();
        let later = start + Duration::minutes(5);

        progress.record_answer_at(false, start);
        progress.record_answer_at(true, later);

        assert_eq!(progress.first_learned_date, Some(start));
        assert_eq!(progress.last_review_date, later);
    }
}
