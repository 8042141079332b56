//! Per-locale query suggestions
//!
//! A pure function over static candidate phrase lists: candidates that
//! substring-overlap the normalized query in either direction, capped at
//! five. Deterministic and infallible - the worst case is an empty list,
//! or the head of the locale defaults for an empty query.

use souq_domain::constants::MAX_SUGGESTIONS;

/// English candidate phrases
static ENGLISH: &[&str] = &[
    "gaming laptop",
    "wireless headphones",
    "mechanical keyboard",
    "smart watch",
    "phone case",
    "usb cable",
    "desk lamp",
    "coffee maker",
    "running shoes",
    "leather wallet",
    "bluetooth speaker",
    "laptop stand",
];

/// Arabic candidate phrases
static ARABIC: &[&str] = &[
    "حاسوب محمول للألعاب",
    "سماعات لاسلكية",
    "لوحة مفاتيح ميكانيكية",
    "ساعة ذكية",
    "غطاء هاتف",
    "مصباح مكتب",
    "آلة قهوة",
    "حذاء رياضي",
    "محفظة جلدية",
    "مكبر صوت بلوتوث",
];

/// Chinese candidate phrases
static CHINESE: &[&str] = &[
    "游戏笔记本电脑",
    "无线耳机",
    "机械键盘",
    "智能手表",
    "手机壳",
    "台灯",
    "咖啡机",
    "跑步鞋",
    "皮革钱包",
    "蓝牙音箱",
];

/// Candidate phrases for a locale; unknown locales use the English list.
fn candidate_phrases(locale: &str) -> &'static [&'static str] {
    match locale {
        "ar" => ARABIC,
        "zh" => CHINESE,
        _ => ENGLISH,
    }
}

/// Suggestion generator over the static phrase lists.
#[derive(Debug, Clone, Default)]
pub struct SuggestionGenerator;

impl SuggestionGenerator {
    /// Create a suggestion generator
    pub fn new() -> Self {
        Self
    }

    /// Up to five suggestions related to the query, for the locale.
    ///
    /// An empty query gets the head of the locale defaults; otherwise a
    /// candidate is kept when it contains the normalized query or the
    /// query contains the candidate.
    pub fn suggest(&self, query: &str, locale: &str) -> Vec<String> {
        let candidates = candidate_phrases(locale);
        let normalized = query.trim().to_lowercase();

        if normalized.is_empty() {
            return candidates
                .iter()
                .take(MAX_SUGGESTIONS)
                .map(|s| s.to_string())
                .collect();
        }

        candidates
            .iter()
            .filter(|candidate| {
                let candidate = candidate.to_lowercase();
                candidate.contains(&normalized) || normalized.contains(&candidate)
            })
            .take(MAX_SUGGESTIONS)
            .map(|s| s.to_string())
            .collect()
    }
}
