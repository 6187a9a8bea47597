//! Learner profile with points and level

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::progress::LearningProgress;

/// Points needed to advance one level
pub const POINTS_PER_LEVEL: u32 = 100;

pub const DEFAULT_AVATAR: &str = "default";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Learner {
    pub id: Uuid,
    pub name: String,
    pub avatar: String,
    pub level: u32,
    pub total_points: u32,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<Uuid>,
    #[serde(default)]
    pub progress: Vec<LearningProgress>,
}

impl Learner {
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            avatar: DEFAULT_AVATAR.to_string(),
            level: 1,
            total_points: 0,
            created_at: Utc::now(),
            parent_id: None,
            progress: Vec::new(),
        }
    }

    /// Add points and level up past every threshold reached
    ///
    /// Level L spans `[L * 100, (L + 1) * 100)` points. Returns the number
    /// of levels gained.
    pub fn award_points(&mut self, points: u32) -> u32 {
        self.total_points = self.total_points.saturating_add(points);

        let reached = self.total_points / POINTS_PER_LEVEL;
        if reached <= self.level {
            return 0;
        }

        let gained = reached - self.level;
        self.level = reached;
        log::info!("Learner '{}' reached level {}", self.name, self.level);
        gained
    }

    /// Points at which the next level starts, `None` past the `u32` range
    fn next_level_threshold(&self) -> Option<u32> {
        self.level.checked_add(1)?.checked_mul(POINTS_PER_LEVEL)
    }

    /// Fraction of the current level span already earned, 0.0 to 1.0
    pub fn level_progress(&self) -> f64 {
        let start = self.level.saturating_mul(POINTS_PER_LEVEL);
        let earned = self.total_points.saturating_sub(start);
        (f64::from(earned) / f64::from(POINTS_PER_LEVEL)).min(1.0)
    }

    pub fn points_to_next_level(&self) -> u32 {
        self.next_level_threshold()
            .map_or(0, |threshold| threshold.saturating_sub(self.total_points))
    }

    pub fn progress_for(&self, vocabulary_id: Uuid) -> Option<&LearningProgress> {
        self.progress.iter().find(|p| p.vocabulary_id == vocabulary_id)
    }

    /// Progress record for a word, created on first use
    pub fn progress_entry(&mut self, vocabulary_id: Uuid) -> &mut LearningProgress {
        let pos = match self.progress.iter().position(|p| p.vocabulary_id == vocabulary_id) {
            Some(pos) => pos,
            None => {
                self.progress.push(LearningProgress::new(vocabulary_id));
                self.progress.len() - 1
            }
        };
        &mut self.progress[pos]
    }

    /// Record one answer and award points for a correct one
    ///
    /// Returns the updated progress for the word.
    pub fn record_answer(&mut self, vocabulary_id: Uuid, correct: bool) -> LearningProgress {
        let progress = self.progress_entry(vocabulary_id);
        progress.record_answer(correct);
        let updated = progress.clone();

        if correct {
            self.award_points(u32::from(updated.mastery_level));
        }
        updated
    }

    pub fn mastered_count(&self) -> usize {
        self.progress.iter().filter(|p| p.is_mastered()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_learner() {
        let learner = Learner::new("はなこ".to_string());
        assert_eq!(learner.level, 1);
        assert_eq!(learner.total_points, 0);
        assert_eq!(learner.avatar, DEFAULT_AVATAR);
        assert_eq!(learner.points_to_next_level(), 200);
        assert_eq!(learner.level_progress(), 0.0);
    }

    #[test]
    fn test_level_up_thresholds() {
        let mut learner = Learner::new("たろう".to_string());

        assert_eq!(learner.award_points(199), 0);
        assert_eq!(learner.level, 1);
        assert_eq!(learner.points_to_next_level(), 1);

        assert_eq!(learner.award_points(1), 1);
        assert_eq!(learner.level, 2);

        assert_eq!(learner.award_points(250), 2);
        assert_eq!(learner.level, 4);
        assert_eq!(learner.total_points, 450);
        assert!((learner.level_progress() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_points_near_u32_max_do_not_overflow() {
        let mut learner = Learner::new("たろう".to_string());
        learner.total_points = u32::MAX - 1;

        learner.award_points(3);
        assert_eq!(learner.total_points, u32::MAX);
        assert_eq!(learner.level, u32::MAX / POINTS_PER_LEVEL);
        assert_eq!(learner.points_to_next_level(), 0);
        assert!(learner.level_progress() <= 1.0);

        learner.level = u32::MAX;
        assert_eq!(learner.points_to_next_level(), 0);
        assert_eq!(learner.level_progress(), 0.0);
    }

    #[test]
    fn test_record_answer_awards_mastery_points() {
        let mut learner = Learner::new("たろう".to_string());
        let word = Uuid::new_v4();

        learner.record_answer(word, true);
        learner.record_answer(word, true);
        let progress = learner.record_answer(word, false);

        // 1 + 2 points, nothing for the miss
        assert_eq!(learner.total_points, 3);
        assert_eq!(progress.mastery_level, 1);
        assert_eq!(learner.progress.len(), 1);
        assert_eq!(learner.progress_for(word).map(|p| p.total_attempts), Some(3));
    }
}
