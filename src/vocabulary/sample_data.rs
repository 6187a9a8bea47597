//! Bundled school-life vocabulary used to seed an empty store

use uuid::Uuid;

use super::models::VocabularyEntry;

/// Namespace for sample entry ids, so reseeding yields the same ids
const SAMPLE_NAMESPACE: Uuid = Uuid::from_u128(0x6b6f_7462_615f_7175_6573_745f_7361_6d70);

pub const CATEGORY_CLASSROOM: &str = "教室";
pub const CATEGORY_LUNCH: &str = "給食";
pub const CATEGORY_BREAK: &str = "休み時間";
pub const CATEGORY_CLEANING: &str = "掃除の時間";
pub const CATEGORY_MEETING: &str = "朝の会・帰りの会";

// (word, reading, ruby text, meaning, category, difficulty, example sentence)
type SampleRow = (&'static str, &'static str, &'static str, &'static str, &'static str, u8, &'static str);

const SAMPLE_WORDS: &[SampleRow] = &[
    ("黒板", "こくばん", "｜黒板《こくばん》", "先生が字や絵を書く黒い板", "教室", 1, "先生が黒板に字を書きました。"),
    ("机", "つくえ", "｜机《つくえ》", "勉強するときに使う台", "教室", 1, "机の上にノートを置きます。"),
    ("椅子", "いす", "｜椅子《いす》", "座るための道具", "教室", 1, "椅子に静かに座りましょう。"),
    ("鉛筆", "えんぴつ", "｜鉛筆《えんぴつ》", "字を書くための道具", "教室", 1, "鉛筆で名前を書きます。"),
    ("消しゴム", "けしゴム", "｜消《け》しゴム", "鉛筆で書いた字を消すもの", "教室", 1, "間違えたら消しゴムで消します。"),
    ("ノート", "ノート", "ノート", "字を書くための本", "教室", 1, "ノートに宿題を書きました。"),
    ("教科書", "きょうかしょ", "｜教科書《きょうかしょ》", "勉強に使う本", "教室", 2, "国語の教科書を開いてください。"),
    ("筆箱", "ふでばこ", "｜筆箱《ふでばこ》", "鉛筆や消しゴムを入れる箱", "教室", 2, "筆箱の中に鉛筆が入っています。"),
    ("給食", "きゅうしょく", "｜給食《きゅうしょく》", "学校で食べる昼ご飯", "給食", 1, "今日の給食はカレーライスです。"),
    ("配膳", "はいぜん", "｜配膳《はいぜん》", "料理をお皿に分けて配ること", "給食", 2, "給食当番が配膳をします。"),
    ("当番", "とうばん", "｜当番《とうばん》", "順番に仕事をする人", "給食", 1, "今日は給食当番の日です。"),
    ("献立", "こんだて", "｜献立《こんだて》", "食事のメニュー", "給食", 2, "明日の献立はハンバーグです。"),
    ("食器", "しょっき", "｜食器《しょっき》", "食事に使うお皿やお椀", "給食", 2, "食器をきれいに洗いました。"),
    ("おかわり", "おかわり", "おかわり", "もう一度もらうこと", "給食", 1, "ご飯のおかわりをください。"),
    ("休み時間", "やすみじかん", "｜休《やす》み｜時間《じかん》", "授業と授業の間の時間", "休み時間", 1, "休み時間に友達と遊びます。"),
    ("校庭", "こうてい", "｜校庭《こうてい》", "学校の運動場", "休み時間", 2, "校庭でサッカーをしました。"),
    ("図書室", "としょしつ", "｜図書室《としょしつ》", "本がたくさんある部屋", "休み時間", 2, "図書室で本を借りました。"),
    ("廊下", "ろうか", "｜廊下《ろうか》", "教室をつなぐ通り道", "休み時間", 1, "廊下は走らないでください。"),
    ("階段", "かいだん", "｜階段《かいだん》", "上の階に上がるための段", "休み時間", 1, "階段を使って二階に行きます。"),
    ("掃除", "そうじ", "｜掃除《そうじ》", "きれいにすること", "掃除の時間", 1, "毎日教室の掃除をします。"),
    ("ほうき", "ほうき", "ほうき", "ゴミを掃くための道具", "掃除の時間", 1, "ほうきで床を掃きます。"),
    ("ちりとり", "ちりとり", "ちりとり", "ゴミを集める道具", "掃除の時間", 1, "ちりとりでゴミを集めます。"),
    ("雑巾", "ぞうきん", "｜雑巾《ぞうきん》", "机や床を拭く布", "掃除の時間", 1, "雑巾で机を拭きました。"),
    ("ゴミ箱", "ゴミばこ", "ゴミ｜箱《ばこ》", "ゴミを入れる箱", "掃除の時間", 1, "紙くずをゴミ箱に捨てます。"),
    ("朝の会", "あさのかい", "｜朝《あさ》の｜会《かい》", "朝の始まりの時間", "朝の会・帰りの会", 1, "朝の会で今日の予定を聞きます。"),
    ("帰りの会", "かえりのかい", "｜帰《かえ》りの｜会《かい》", "一日の終わりの時間", "朝の会・帰りの会", 1, "帰りの会で明日の連絡を聞きます。"),
    ("出席", "しゅっせき", "｜出席《しゅっせき》", "学校に来ること", "朝の会・帰りの会", 2, "今日は全員出席です。"),
    ("欠席", "けっせき", "｜欠席《けっせき》", "学校を休むこと", "朝の会・帰りの会", 2, "風邪で欠席しました。"),
    ("連絡帳", "れんらくちょう", "｜連絡帳《れんらくちょう》", "家と学校の連絡に使うノート", "朝の会・帰りの会", 2, "連絡帳に宿題を書きます。"),
];

/// All bundled entries, with ids derived from the word
pub fn sample_vocabulary() -> Vec<VocabularyEntry> {
    SAMPLE_WORDS
        .iter()
        .map(|&(word, reading, ruby_text, meaning, category, difficulty, example)| {
            let mut entry = VocabularyEntry::new(
                word.to_string(),
                reading.to_string(),
                ruby_text.to_string(),
                meaning.to_string(),
                category.to_string(),
                difficulty,
            )
            .with_examples(vec![example.to_string()]);
            entry.id = Uuid::new_v5(&SAMPLE_NAMESPACE, word.as_bytes());
            entry
        })
        .collect()
}

pub fn sample_for_category(category: &str) -> Vec<VocabularyEntry> {
    sample_vocabulary()
        .into_iter()
        .filter(|e| e.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_ids_are_stable_and_unique() {
        let first = sample_vocabulary();
        let second = sample_vocabulary();
        assert_eq!(first.len(), 29);

        let ids: HashSet<Uuid> = first.iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), first.len());
        assert!(first.iter().zip(&second).all(|(a, b)| a.id == b.id));
    }

    #[test]
    fn test_sample_categories() {
        assert_eq!(sample_for_category(CATEGORY_CLASSROOM).len(), 8);
        assert_eq!(sample_for_category(CATEGORY_LUNCH).len(), 6);
        assert_eq!(sample_for_category(CATEGORY_BREAK).len(), 5);
        assert_eq!(sample_for_category(CATEGORY_CLEANING).len(), 5);
        assert_eq!(sample_for_category(CATEGORY_MEETING).len(), 5);
    }

    #[test]
    fn test_sample_ruby_matches_word() {
        for entry in sample_vocabulary() {
            let plain = crate::ruby::plain_text(&entry.segments());
            assert_eq!(plain, entry.word, "ruby text of {}", entry.word);
        }
    }
}
