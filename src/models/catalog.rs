use serde::{Deserialize, Serialize};

/// Genre vocabulary understood by the catalog's discover endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Genre {
    Action,
    Adventure,
    Animation,
    Comedy,
    Crime,
    Documentary,
    Drama,
    Family,
    Fantasy,
    History,
    Horror,
    Music,
    Romance,
    ScienceFiction,
    Thriller,
    War,
    Western,
    /// Composite of crime, drama and history
    Classic,
}

impl Genre {
    pub const ALL: [Genre; 18] = [
        Genre::Action,
        Genre::Adventure,
        Genre::Animation,
        Genre::Comedy,
        Genre::Crime,
        Genre::Documentary,
        Genre::Drama,
        Genre::Family,
        Genre::Fantasy,
        Genre::History,
        Genre::Horror,
        Genre::Music,
        Genre::Romance,
        Genre::ScienceFiction,
        Genre::Thriller,
        Genre::War,
        Genre::Western,
        Genre::Classic,
    ];

    /// Display label, matching the catalog's zh-TW genre names
    pub fn label(self) -> &'static str {
        match self {
            Genre::Action => "動作",
            Genre::Adventure => "冒險",
            Genre::Animation => "動畫",
            Genre::Comedy => "喜劇",
            Genre::Crime => "犯罪",
            Genre::Documentary => "紀錄片",
            Genre::Drama => "劇情",
            Genre::Family => "家庭",
            Genre::Fantasy => "奇幻",
            Genre::History => "歷史",
            Genre::Horror => "恐怖",
            Genre::Music => "音樂",
            Genre::Romance => "愛情",
            Genre::ScienceFiction => "科幻",
            Genre::Thriller => "驚悚",
            Genre::War => "戰爭",
            Genre::Western => "西部",
            Genre::Classic => "經典電影",
        }
    }

    /// TMDB genre ids this genre expands to in a discover query
    pub fn tmdb_ids(self) -> &'static [u32] {
        match self {
            Genre::Action => &[28],
            Genre::Adventure => &[12],
            Genre::Animation => &[16],
            Genre::Comedy => &[35],
            Genre::Crime => &[80],
            Genre::Documentary => &[99],
            Genre::Drama => &[18],
            Genre::Family => &[10751],
            Genre::Fantasy => &[14],
            Genre::History => &[36],
            Genre::Horror => &[27],
            Genre::Music => &[10402],
            Genre::Romance => &[10749],
            Genre::ScienceFiction => &[878],
            Genre::Thriller => &[53],
            Genre::War => &[10752],
            Genre::Western => &[37],
            Genre::Classic => &[80, 18, 36],
        }
    }

    /// Maps a single TMDB genre id back to a genre. Composite genres never match.
    pub fn from_tmdb_id(id: u32) -> Option<Genre> {
        Genre::ALL
            .into_iter()
            .filter(|g| *g != Genre::Classic)
            .find(|g| g.tmdb_ids() == [id])
    }

    pub fn from_label(label: &str) -> Option<Genre> {
        let label = label.trim();
        Genre::ALL.into_iter().find(|g| g.label() == label)
    }
}

/// A selectable country and its ISO 3166-1 code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub name: &'static str,
    pub code: &'static str,
}

/// Countries grouped by continent, in menu order
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Continent {
    pub name: &'static str,
    pub countries: &'static [Country],
}

const fn country(name: &'static str, code: &'static str) -> Country {
    Country { name, code }
}

pub const REGIONS: &[Continent] = &[
    Continent {
        name: "歐洲",
        countries: &[
            country("英國", "GB"),
            country("法國", "FR"),
            country("德國", "DE"),
            country("義大利", "IT"),
            country("西班牙", "ES"),
            country("俄羅斯", "RU"),
            country("波蘭", "PL"),
        ],
    },
    Continent {
        name: "美洲",
        countries: &[
            country("美國", "US"),
            country("加拿大", "CA"),
            country("墨西哥", "MX"),
            country("巴西", "BR"),
            country("阿根廷", "AR"),
        ],
    },
    Continent {
        name: "亞洲",
        countries: &[
            country("中國", "CN"),
            country("日本", "JP"),
            country("韓國", "KR"),
            country("台灣", "TW"),
            country("香港", "HK"),
            country("印度", "IN"),
            country("泰國", "TH"),
            country("新加坡", "SG"),
        ],
    },
    Continent {
        name: "非洲",
        countries: &[
            country("南非", "ZA"),
            country("埃及", "EG"),
            country("奈及利亞", "NG"),
        ],
    },
    Continent {
        name: "大洋洲",
        countries: &[country("澳洲", "AU"), country("紐西蘭", "NZ")],
    },
];

/// Resolves a country name or ISO code (any case) to its ISO code
pub fn resolve_country(input: &str) -> Option<&'static str> {
    let input = input.trim();
    REGIONS
        .iter()
        .flat_map(|continent| continent.countries.iter())
        .find(|c| c.name == input || c.code.eq_ignore_ascii_case(input))
        .map(|c| c.code)
}
