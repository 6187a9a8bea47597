//! A run through one scene's words as flashcards or quiz questions

use rand::Rng;
use uuid::Uuid;

use crate::quiz::generate_choices;
use crate::stores::LearnerStore;
use crate::vocabulary::VocabularyEntry;

/// Result of one answered card
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerOutcome {
    pub vocabulary_id: Uuid,
    pub correct: bool,
    /// Mastery after the answer, when a learner is tracking progress
    pub mastery_level: Option<u8>,
}

/// Choices for the current card
#[derive(Debug, Clone)]
pub struct QuizRound {
    pub choices: Vec<VocabularyEntry>,
    pub correct_index: usize,
}

pub struct LearningSession {
    entries: Vec<VocabularyEntry>,
    /// Extra words to draw quiz distractors from
    pool: Vec<VocabularyEntry>,
    index: usize,
    answered: bool,
    completed: bool,
    correct_count: u32,
    total_count: u32,
    round: Option<QuizRound>,
}

impl LearningSession {
    pub fn new(entries: Vec<VocabularyEntry>, pool: Vec<VocabularyEntry>) -> Self {
        let completed = entries.is_empty();
        Self {
            entries,
            pool,
            index: 0,
            answered: false,
            completed,
            correct_count: 0,
            total_count: 0,
            round: None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&VocabularyEntry> {
        if self.completed {
            return None;
        }
        self.entries.get(self.index)
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Whether the current card already has an answer
    pub fn is_answered(&self) -> bool {
        self.answered
    }

    /// Check a typed answer for the current card and report it
    ///
    /// Returns `None` once the session is complete or the card was already answered.
    pub fn submit_answer(&mut self, answer: &str, learners: &mut LearnerStore) -> Option<AnswerOutcome> {
        let correct = self.current()?.matches_answer(answer);
        self.record(correct, learners)
    }

    /// Build the multiple-choice round for the current card
    pub fn quiz_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&QuizRound> {
        let correct = self.current()?.clone();
        let pool: Vec<VocabularyEntry> = self
            .entries
            .iter()
            .chain(self.pool.iter())
            .cloned()
            .collect();

        let choices = generate_choices(&correct, &pool, rng);
        let correct_index = choices.iter().position(|c| c.id == correct.id)?;
        self.round = Some(QuizRound {
            choices,
            correct_index,
        });
        self.round.as_ref()
    }

    /// Answer the current quiz round by choice index
    pub fn choose(&mut self, choice: usize, learners: &mut LearnerStore) -> Option<AnswerOutcome> {
        let round = self.round.as_ref()?;
        if choice >= round.choices.len() {
            return None;
        }
        let correct = choice == round.correct_index;
        self.record(correct, learners)
    }

    fn record(&mut self, correct: bool, learners: &mut LearnerStore) -> Option<AnswerOutcome> {
        if self.answered {
            return None;
        }
        let vocabulary_id = self.current()?.id;

        self.answered = true;
        self.total_count += 1;
        if correct {
            self.correct_count += 1;
        }

        let mastery_level = learners
            .record_answer(vocabulary_id, correct)
            .map(|p| p.mastery_level);

        Some(AnswerOutcome {
            vocabulary_id,
            correct,
            mastery_level,
        })
    }

    /// Move to the next card, completing the session after the last one
    pub fn next(&mut self) {
        self.answered = false;
        self.round = None;

        if self.index + 1 < self.entries.len() {
            self.index += 1;
        } else {
            self.completed = true;
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.answered = false;
        self.completed = self.entries.is_empty();
        self.correct_count = 0;
        self.total_count = 0;
        self.round = None;
    }

    /// Position through the session, counting the current card
    pub fn progress(&self) -> f64 {
        if self.entries.is_empty() {
            return 0.0;
        }
        (self.index + 1) as f64 / self.entries.len() as f64
    }

    pub fn accuracy(&self) -> f64 {
        if self.total_count == 0 {
            return 0.0;
        }
        f64::from(self.correct_count) / f64::from(self.total_count)
    }

    /// Cards left after the current one
    pub fn remaining(&self) -> usize {
        self.entries.len().saturating_sub(self.index + 1)
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn total_count(&self) -> u32 {
        self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::FileStorage;
    use crate::vocabulary::sample_data::{sample_for_category, CATEGORY_CLASSROOM};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::TempDir;

    fn create_test_learners() -> (LearnerStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());
        (LearnerStore::new(storage.learners()), temp_dir)
    }

    fn classroom_session() -> LearningSession {
        let mut entries = sample_for_category(CATEGORY_CLASSROOM);
        entries.truncate(3);
        LearningSession::new(entries, Vec::new())
    }

    #[test]
    fn test_flashcard_flow() {
        let (mut learners, _temp) = create_test_learners();
        let mut session = classroom_session();
        assert_eq!(session.remaining(), 2);
        assert!((session.progress() - 1.0 / 3.0).abs() < 1e-9);

        let reading = session.current().unwrap().reading.clone();
        let outcome = session.submit_answer(&format!(" {} ", reading), &mut learners).unwrap();
        assert!(outcome.correct);
        assert_eq!(outcome.mastery_level, None);

        // A second answer for the same card is ignored
        assert!(session.submit_answer("wrong", &mut learners).is_none());

        session.next();
        let outcome = session.submit_answer("wrong", &mut learners).unwrap();
        assert!(!outcome.correct);
        assert!((session.accuracy() - 0.5).abs() < 1e-9);

        session.next();
        session.next();
        assert!(session.is_completed());
        assert!(session.current().is_none());
        assert_eq!(session.remaining(), 0);

        session.reset();
        assert!(!session.is_completed());
        assert_eq!(session.total_count(), 0);
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_answers_reach_current_learner() {
        let (mut learners, _temp) = create_test_learners();
        learners.create("はなこ");
        let mut session = classroom_session();

        let word = session.current().unwrap().word.clone();
        let outcome = session.submit_answer(&word, &mut learners).unwrap();
        assert_eq!(outcome.mastery_level, Some(1));
        assert_eq!(learners.current().map(|l| l.progress.len()), Some(1));
    }

    #[test]
    fn test_quiz_round() {
        let (mut learners, _temp) = create_test_learners();
        let mut rng = StdRng::seed_from_u64(42);
        let mut session = classroom_session();

        assert!(session.choose(0, &mut learners).is_none());

        let round = session.quiz_round(&mut rng).unwrap().clone();
        assert_eq!(round.choices.len(), 4);
        assert_eq!(round.choices[round.correct_index].id, session.current().unwrap().id);

        assert!(session.choose(9, &mut learners).is_none());
        let outcome = session.choose(round.correct_index, &mut learners).unwrap();
        assert!(outcome.correct);

        session.next();
        let round = session.quiz_round(&mut rng).unwrap().clone();
        let wrong = (round.correct_index + 1) % round.choices.len();
        assert!(!session.choose(wrong, &mut learners).unwrap().correct);
        assert_eq!(session.correct_count(), 1);
    }

    #[test]
    fn test_empty_session() {
        let session = LearningSession::new(Vec::new(), Vec::new());
        assert!(session.is_completed());
        assert_eq!(session.progress(), 0.0);
        assert_eq!(session.remaining(), 0);
    }
}
