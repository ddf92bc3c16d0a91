//! Icon classification for utility records
//!
//! Picks a category icon from keywords found in a record's id, title, file
//! name and tags. Emoji rendering depends on the terminal font, so icons can
//! be turned off with `UTILHUB_NO_EMOJI=1` or `"noIcons": true` in the config.

use crate::utilities::UtilityRecord;

/// Whether emoji icons are drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IconMode {
    #[default]
    Emoji,
    /// Every record gets the same plain-text bullet
    Plain,
}

impl IconMode {
    /// Resolve the mode once at startup.
    ///
    /// `env_value` is the raw value of `UTILHUB_NO_EMOJI`; any non-empty value
    /// disables icons, as does `config_no_icons`.
    pub fn resolve(env_value: Option<&str>, config_no_icons: bool) -> Self {
        let env_disabled = env_value.map(|v| !v.is_empty()).unwrap_or(false);
        if env_disabled || config_no_icons {
            IconMode::Plain
        } else {
            IconMode::Emoji
        }
    }
}

/// Icon categories, in match priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconCategory {
    Database,
    Media,
    Network,
    Development,
    Filesystem,
    Default,
    Plain,
}

impl IconCategory {
    pub fn glyph(self) -> &'static str {
        match self {
            IconCategory::Database => "🗄️",
            IconCategory::Media => "🎬",
            IconCategory::Network => "🌐",
            IconCategory::Development => "🔧",
            IconCategory::Filesystem => "📁",
            IconCategory::Default => "🔹",
            IconCategory::Plain => "•",
        }
    }
}

/// Keyword table. Order matters: the first category with a hit wins.
const CATEGORY_KEYWORDS: &[(IconCategory, &[&str])] = &[
    (IconCategory::Database, &["db", "sql", "backup"]),
    (IconCategory::Media, &["media", "video", "audio", "convert"]),
    (IconCategory::Network, &["net", "http", "api", "gcp", "azure"]),
    (IconCategory::Development, &["dev", "build", "ci", "test"]),
    (IconCategory::Filesystem, &["file", "fs", "io"]),
];

/// Classify a record. A keyword hits when it is a substring of
/// `"{id} {title} {file_name}"` (lowercased) or equals one of the tags.
pub fn classify(record: &UtilityRecord, mode: IconMode) -> IconCategory {
    if mode == IconMode::Plain {
        return IconCategory::Plain;
    }

    let haystack = format!(
        "{} {} {}",
        record.id(),
        record.title(),
        record.file_name()
    )
    .to_lowercase();
    let tags: Vec<String> = record.tags().iter().map(|t| t.to_lowercase()).collect();

    let has = |keyword: &str| haystack.contains(keyword) || tags.iter().any(|t| t == keyword);

    CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| has(k)))
        .map(|(category, _)| *category)
        .unwrap_or(IconCategory::Default)
}

/// Glyph for a record; shorthand for `classify(..).glyph()`
pub fn icon_for(record: &UtilityRecord, mode: IconMode) -> &'static str {
    classify(record, mode).glyph()
}
