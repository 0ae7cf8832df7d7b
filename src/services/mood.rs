use serde::{Deserialize, Serialize};

use crate::models::Genre;

/// The six mood categories, in declaration order (ties go to the earlier one)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Sad,
    Stressed,
    Bored,
    Tearful,
    Thrilled,
}

/// Mood substituted when nothing in the text matches
pub const DEFAULT_MOOD: Mood = Mood::Happy;

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Stressed,
        Mood::Bored,
        Mood::Tearful,
        Mood::Thrilled,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Mood::Happy => "開心",
            Mood::Sad => "難過",
            Mood::Stressed => "壓力大",
            Mood::Bored => "無聊",
            Mood::Tearful => "想哭",
            Mood::Thrilled => "想刺激",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Mood::Happy => &["開心", "快樂", "高興", "興奮", "愉快", "開朗", "歡樂", "喜悅"],
            Mood::Sad => &["難過", "悲傷", "沮喪", "失落", "憂鬱", "傷心", "低落", "消沉"],
            Mood::Stressed => &["壓力", "焦慮", "緊張", "煩躁", "疲憊", "累", "忙", "煩"],
            Mood::Bored => &["無聊", "沒事做", "空虛", "無趣", "閒", "發呆"],
            Mood::Tearful => &["想哭", "感傷", "感動", "淚", "哭"],
            Mood::Thrilled => &["刺激", "興奮", "冒險", "挑戰", "熱血", "爽", "過癮"],
        }
    }

    /// Number of this mood's keywords contained in `text` (substring match)
    pub fn score(self, text: &str) -> usize {
        self.keywords()
            .iter()
            .filter(|keyword| text.contains(*keyword))
            .count()
    }
}

/// Highest-scoring mood, or `None` when no keyword appears at all
pub fn classify_mood(text: &str) -> Option<Mood> {
    let mut best: Option<(Mood, usize)> = None;

    for mood in Mood::ALL {
        let hits = mood.score(text);
        if hits == 0 {
            continue;
        }
        match best {
            Some((_, top)) if hits <= top => {}
            _ => best = Some((mood, hits)),
        }
    }

    best.map(|(mood, _)| mood)
}

/// Genres to explore for a mood, most relevant first
pub fn mood_to_genres(mood: Mood) -> &'static [Genre] {
    match mood {
        Mood::Happy => &[Genre::Comedy, Genre::Animation, Genre::Music],
        Mood::Sad => &[Genre::Comedy, Genre::Animation, Genre::Family],
        Mood::Stressed => &[Genre::Comedy, Genre::Animation, Genre::Romance],
        Mood::Bored => &[Genre::Action, Genre::Adventure, Genre::ScienceFiction],
        Mood::Tearful => &[Genre::Romance, Genre::Drama, Genre::Family],
        Mood::Thrilled => &[
            Genre::Action,
            Genre::Thriller,
            Genre::Horror,
            Genre::ScienceFiction,
        ],
    }
}
