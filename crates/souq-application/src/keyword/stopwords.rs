//! Per-locale stop-word lists
//!
//! Small curated lists; extending a locale means extending its slice.
//! Tokens shorter than the extractor's minimum length never reach these
//! lists, so very short function words are omitted.

/// English stop words
static ENGLISH: &[&str] = &[
    "the", "and", "for", "with", "that", "this", "from", "are", "was", "were", "have", "has",
    "had", "not", "but", "all", "any", "can", "you", "your", "our", "out", "get", "its", "one",
    "new", "how", "what", "when", "where", "who", "why", "will", "would", "could", "should",
    "about", "more", "some", "than", "then", "them", "there", "these", "those", "into", "over",
    "under", "best", "good",
];

/// Arabic stop words
static ARABIC: &[&str] = &[
    "هذا", "هذه", "ذلك", "تلك", "التي", "الذي", "الذين", "كان", "كانت", "لكن", "ليس", "ليست",
    "غير", "بعض", "كل", "عند", "عندما", "حتى", "لقد", "أين", "كيف", "ماذا", "لماذا", "متى",
    "بين", "بعد", "قبل", "فوق", "تحت", "أريد", "أفضل",
];

/// Chinese stop words
static CHINESE: &[&str] = &[
    "我们", "你们", "他们", "这个", "那个", "什么", "怎么", "怎样", "可以", "这里", "那里",
    "还有", "一个", "没有", "就是", "但是", "因为", "所以", "如果", "这样", "哪里", "哪个",
    "最好", "一些",
];

/// Stop-word list for a locale; unknown locales use the English list.
pub fn stop_words(locale: &str) -> &'static [&'static str] {
    match locale {
        "ar" => ARABIC,
        "zh" => CHINESE,
        _ => ENGLISH,
    }
}

/// Whether the token is a stop word in the given locale.
pub fn is_stop_word(token: &str, locale: &str) -> bool {
    stop_words(locale).contains(&token)
}
