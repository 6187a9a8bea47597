//! The five built-in school-life scenes

use std::collections::HashMap;

use uuid::Uuid;

use super::models::{SceneCategory, SceneDefinition};

struct SceneSeed {
    title: &'static str,
    ruby_title: &'static str,
    description: &'static str,
    story: &'static str,
    category: SceneCategory,
    title_en: &'static str,
    description_en: &'static str,
    cultural_note: &'static str,
}

const DEFAULT_SCENES: &[SceneSeed] = &[
    SceneSeed {
        title: "教室",
        ruby_title: "｜教室《きょうしつ》",
        description: "授業中の教室の様子を学びます",
        story: "朝、｜教室《きょうしつ》に入ると、｜先生《せんせい》が｜黒板《こくばん》に｜今日《きょう》の｜予定《よてい》を書いていました。みんな｜筆箱《ふでばこ》から｜鉛筆《えんぴつ》を出して、｜教科書《きょうかしょ》を｜開《ひら》きます。",
        category: SceneCategory::ClassTime,
        title_en: "Classroom",
        description_en: "Learn about classroom activities",
        cultural_note: "日本の教室では、生徒が掃除をすることが一般的です。",
    },
    SceneSeed {
        title: "給食",
        ruby_title: "｜給食《きゅうしょく》",
        description: "みんなで食べる給食の時間",
        story: "｜給食《きゅうしょく》の｜時間《じかん》になりました。｜当番《とうばん》が｜配膳《はいぜん》をします。｜今日《きょう》の｜献立《こんだて》はカレーライスです。みんなで「いただきます」と言ってから食べ始めます。",
        category: SceneCategory::LunchTime,
        title_en: "School Lunch",
        description_en: "Learn about school lunch time",
        cultural_note: "日本の学校では、生徒が配膳を手伝います。",
    },
    SceneSeed {
        title: "休み時間",
        ruby_title: "｜休《やす》み｜時間《じかん》",
        description: "友達と遊ぶ楽しい時間",
        story: "チャイムが鳴って、｜休《やす》み｜時間《じかん》になりました。｜校庭《こうてい》で｜鬼《おに》ごっこをする子、｜図書室《としょしつ》で｜本《ほん》を読む子、なわとびの｜練習《れんしゅう》をする子もいます。",
        category: SceneCategory::BreakTime,
        title_en: "Break Time",
        description_en: "Learn about break time activities",
        cultural_note: "日本の学校では、短い休み時間でも外で遊ぶことが推奨されています。",
    },
    SceneSeed {
        title: "掃除の時間",
        ruby_title: "｜掃除《そうじ》の｜時間《じかん》",
        description: "みんなで学校をきれいにする時間",
        story: "｜掃除《そうじ》の｜時間《じかん》です。｜当番《とうばん》を｜決《き》めて、ほうきで｜床《ゆか》を｜掃《は》いたり、｜雑巾《ぞうきん》で｜机《つくえ》を｜拭《ふ》いたりします。ちりとりでゴミを｜集《あつ》めます。",
        category: SceneCategory::CleaningTime,
        title_en: "Cleaning Time",
        description_en: "Learn about cleaning activities",
        cultural_note: "日本の学校では、生徒自身が教室を掃除することで責任感を学びます。",
    },
    SceneSeed {
        title: "朝の会・帰りの会",
        ruby_title: "｜朝《あさ》の｜会《かい》・｜帰《かえ》りの｜会《かい》",
        description: "一日の始まりと終わりの大切な時間",
        story: "｜朝《あさ》の｜会《かい》で｜日直《にっちょく》が｜号令《ごうれい》をかけます。｜先生《せんせい》が｜出席《しゅっせき》を｜取《と》り、｜連絡帳《れんらくちょう》を｜確認《かくにん》します。｜帰《かえ》りの｜会《かい》では｜明日《あした》の｜予定《よてい》を｜聞《き》いてから｜下校《げこう》します。",
        category: SceneCategory::MorningAssembly,
        title_en: "Morning and Closing Meeting",
        description_en: "Learn about daily meetings",
        cultural_note: "日本の学校では、朝の会と帰りの会で一日の活動を共有します。",
    },
];

/// Build the default scenes, linking each to the vocabulary ids of its category
pub fn default_scenes(ids_by_category: &HashMap<String, Vec<Uuid>>) -> Vec<SceneDefinition> {
    DEFAULT_SCENES
        .iter()
        .zip(1..)
        .map(|(seed, order)| {
            let mut scene = SceneDefinition::new(
                seed.title.to_string(),
                seed.ruby_title.to_string(),
                seed.description.to_string(),
                seed.story.to_string(),
                order,
                seed.category,
            );
            scene.title_en = Some(seed.title_en.to_string());
            scene.description_en = Some(seed.description_en.to_string());
            scene.cultural_note = Some(seed.cultural_note.to_string());
            scene.vocabulary_ids = ids_by_category
                .get(seed.category.vocabulary_category())
                .cloned()
                .unwrap_or_default();
            scene
        })
        .collect()
}
