//! Multiple-choice quiz rounds
//!
//! A round shows the correct entry among three distractors. Distractors
//! come from the same category when possible, then from the rest of the
//! pool, and finally from placeholder entries when the pool runs dry.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

use crate::vocabulary::VocabularyEntry;

/// Choices shown per question, including the correct one
pub const QUIZ_CHOICE_COUNT: usize = 4;

/// Pick the choices for a question about `correct`, in random order
///
/// The result always holds `QUIZ_CHOICE_COUNT` entries with distinct ids,
/// exactly one of which is `correct`.
pub fn generate_choices<R: Rng + ?Sized>(
    correct: &VocabularyEntry,
    pool: &[VocabularyEntry],
    rng: &mut R,
) -> Vec<VocabularyEntry> {
    let needed = QUIZ_CHOICE_COUNT - 1;
    let mut seen: HashSet<Uuid> = HashSet::from([correct.id]);

    let mut same_category = Vec::new();
    let mut others = Vec::new();
    for entry in pool {
        if !seen.insert(entry.id) {
            continue;
        }
        if entry.category == correct.category {
            same_category.push(entry);
        } else {
            others.push(entry);
        }
    }
    same_category.shuffle(rng);
    others.shuffle(rng);

    let mut choices: Vec<VocabularyEntry> = same_category
        .into_iter()
        .chain(others)
        .take(needed)
        .cloned()
        .collect();

    let missing = needed - choices.len();
    if missing > 0 {
        log::debug!(
            "Pool too small for '{}', adding {} placeholder choices",
            correct.word,
            missing
        );
        choices.extend((1..=missing).map(|n| placeholder(correct, n)));
    }

    choices.push(correct.clone());
    choices.shuffle(rng);
    choices
}

/// Same as `generate_choices` with the thread-local RNG
pub fn random_choices(correct: &VocabularyEntry, pool: &[VocabularyEntry]) -> Vec<VocabularyEntry> {
    generate_choices(correct, pool, &mut rand::thread_rng())
}

fn placeholder(correct: &VocabularyEntry, n: usize) -> VocabularyEntry {
    VocabularyEntry::new(
        format!("ダミー{}", n),
        "だみー".to_string(),
        format!("ダミー{}", n),
        format!("ダミーの選択肢{}", n),
        correct.category.clone(),
        correct.difficulty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn entry(word: &str, category: &str) -> VocabularyEntry {
        VocabularyEntry::new(
            word.to_string(),
            word.to_string(),
            word.to_string(),
            format!("{} meaning", word),
            category.to_string(),
            1,
        )
    }

    fn assert_shape(choices: &[VocabularyEntry], correct: &VocabularyEntry) {
        assert_eq!(choices.len(), QUIZ_CHOICE_COUNT);
        let ids: HashSet<Uuid> = choices.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), QUIZ_CHOICE_COUNT);
        assert_eq!(choices.iter().filter(|c| c.id == correct.id).count(), 1);
    }

    #[test]
    fn test_prefers_same_category() {
        let mut rng = StdRng::seed_from_u64(7);
        let correct = entry("机", "教室");
        let mut pool = vec![correct.clone()];
        pool.extend(["椅子", "黒板", "鉛筆", "筆箱"].map(|w| entry(w, "教室")));
        pool.extend(["ほうき", "雑巾"].map(|w| entry(w, "掃除の時間")));

        for _ in 0..20 {
            let choices = generate_choices(&correct, &pool, &mut rng);
            assert_shape(&choices, &correct);
            assert!(choices.iter().all(|c| c.category == "教室"));
        }
    }

    #[test]
    fn test_falls_back_to_other_categories() {
        let mut rng = StdRng::seed_from_u64(11);
        let correct = entry("給食", "給食");
        let pool = vec![
            correct.clone(),
            entry("献立", "給食"),
            entry("ほうき", "掃除の時間"),
            entry("雑巾", "掃除の時間"),
            entry("黒板", "教室"),
        ];

        let choices = generate_choices(&correct, &pool, &mut rng);
        assert_shape(&choices, &correct);
        assert!(choices.iter().any(|c| c.word == "献立"));
        assert!(choices.iter().all(|c| !c.word.starts_with("ダミー")));
    }

    #[test]
    fn test_pads_with_placeholders() {
        let mut rng = StdRng::seed_from_u64(3);
        let correct = entry("机", "教室");

        let choices = generate_choices(&correct, &[], &mut rng);
        assert_shape(&choices, &correct);
        let placeholders = choices.iter().filter(|c| c.word.starts_with("ダミー")).count();
        assert_eq!(placeholders, 3);

        let choices = generate_choices(&correct, &[correct.clone(), entry("椅子", "教室")], &mut rng);
        assert_shape(&choices, &correct);
    }

    #[test]
    fn test_duplicate_pool_entries_are_ignored() {
        let mut rng = StdRng::seed_from_u64(5);
        let correct = entry("机", "教室");
        let chair = entry("椅子", "教室");
        let pool = vec![chair.clone(), chair.clone(), chair, correct.clone(), correct.clone()];

        let choices = generate_choices(&correct, &pool, &mut rng);
        assert_shape(&choices, &correct);
    }

    #[test]
    fn test_random_choices_shape() {
        let correct = entry("机", "教室");
        let pool: Vec<_> = (0..10).map(|i| entry(&format!("語{}", i), "教室")).collect();
        assert_shape(&random_choices(&correct, &pool), &correct);
    }
}
