//! Intent-expansion table
//!
//! A hand-curated mapping from trigger phrases to product-domain keywords.
//! This is the only "intelligence" in the keyword layer: a versioned,
//! immutable, data-only structure loaded once at startup. Extending it is a
//! data change, not a code change.
//!
//! Triggers match as substrings of the *normalized* query, so they fire for
//! any supported language regardless of how the query tokenizes (Chinese
//! queries carry no whitespace at all).

use once_cell::sync::Lazy;

/// One expansion rule: any trigger present in the query injects every
/// keyword into the extracted set.
#[derive(Debug)]
pub struct ExpansionRule {
    /// Trigger phrases, lowercase, any supported locale
    pub triggers: &'static [&'static str],
    /// Product-domain keywords injected when a trigger fires
    pub keywords: &'static [&'static str],
}

/// The versioned rule table.
#[derive(Debug)]
pub struct ExpansionTable {
    /// Bumped whenever the curated data changes
    pub version: u32,
    /// Rules, applied in order
    pub rules: &'static [ExpansionRule],
}

impl ExpansionTable {
    /// Keywords injected for this query, in table order, deduplicated.
    pub fn expand(&self, normalized_query: &str) -> Vec<&'static str> {
        let mut out: Vec<&'static str> = Vec::new();
        for rule in self.rules {
            let fired = rule
                .triggers
                .iter()
                .any(|trigger| normalized_query.contains(trigger));
            if fired {
                for keyword in rule.keywords {
                    if !out.contains(keyword) {
                        out.push(keyword);
                    }
                }
            }
        }
        out
    }
}

static DEFAULT_RULES: &[ExpansionRule] = &[
    ExpansionRule {
        triggers: &["fast", "سريع", "快速"],
        keywords: &["laptop", "phone", "tablet", "computer", "device"],
    },
    ExpansionRule {
        triggers: &["writing", "كتابة", "写作"],
        keywords: &["keyboard", "pen", "notebook", "laptop"],
    },
    ExpansionRule {
        triggers: &["gaming", "ألعاب", "游戏"],
        keywords: &["console", "laptop", "headset", "mouse", "keyboard"],
    },
    ExpansionRule {
        triggers: &["photo", "photography", "تصوير", "摄影"],
        keywords: &["camera", "lens", "tripod", "drone"],
    },
    ExpansionRule {
        triggers: &["music", "موسيقى", "音乐"],
        keywords: &["headphones", "speaker", "guitar", "microphone"],
    },
    ExpansionRule {
        triggers: &["cooking", "kitchen", "طبخ", "مطبخ", "烹饪", "厨房"],
        keywords: &["blender", "knife", "pan", "oven"],
    },
    ExpansionRule {
        triggers: &["fitness", "workout", "رياضة", "健身"],
        keywords: &["dumbbell", "treadmill", "yoga", "watch"],
    },
    ExpansionRule {
        triggers: &["travel", "سفر", "旅行"],
        keywords: &["luggage", "backpack", "adapter", "camera"],
    },
    ExpansionRule {
        triggers: &["gift", "هدية", "礼物"],
        keywords: &["watch", "perfume", "jewelry", "flowers"],
    },
];

static DEFAULT_TABLE: Lazy<ExpansionTable> = Lazy::new(|| ExpansionTable {
    version: 1,
    rules: DEFAULT_RULES,
});

/// The curated table shipped with the subsystem.
pub fn default_table() -> &'static ExpansionTable {
    &DEFAULT_TABLE
}
