// Pattern registry — the fixed, categorized list of unsafe terms.
//
// Terms are grouped by category and language purely so a maintainer can find
// and extend them. At runtime everything is flattened into one deduplicated
// list; the checker never knows which group a term came from.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;
use tracing::debug;

/// What kind of harm a term belongs to. Grouping only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Violence,
    Obscenity,
    Hate,
    Inappropriate,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Violence,
        Category::Obscenity,
        Category::Hate,
        Category::Inappropriate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Violence => "violence",
            Category::Obscenity => "obscenity",
            Category::Hate => "hate",
            Category::Inappropriate => "inappropriate",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Languages covered by the registry. Also selects the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    English,
    Spanish,
    French,
    Portuguese,
}

impl Language {
    pub const ALL: [Language; 4] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Portuguese,
    ];

    /// Two-letter code used in config and on the command line.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Portuguese => "pt",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            "fr" | "french" | "français" | "francais" => Ok(Language::French),
            "pt" | "portuguese" | "português" | "portugues" => Ok(Language::Portuguese),
            other => anyhow::bail!("Unknown language '{other}' (expected one of: en, es, fr, pt)"),
        }
    }
}

/// One block of terms for a single category and language.
#[derive(Debug, Clone, Copy)]
pub struct PatternGroup {
    pub category: Category,
    pub language: Language,
    pub terms: &'static [&'static str],
}

const fn group(
    category: Category,
    language: Language,
    terms: &'static [&'static str],
) -> PatternGroup {
    PatternGroup {
        category,
        language,
        terms,
    }
}

/// The full registry, in iteration order. Adding a language means adding
/// one block per category here; nothing in the checker changes.
pub static REGISTRY: &[PatternGroup] = &[
    // ---- violence ----
    group(
        Category::Violence,
        Language::English,
        &[
            "kill", "murder", "blood", "gun", "knife", "stabbing", "shoot", "weapon", "bomb",
            "torture", "suicide", "massacre", "corpse",
        ],
    ),
    group(
        Category::Violence,
        Language::Spanish,
        &[
            "matar", "asesinar", "sangre", "pistola", "cuchillo", "apuñalar", "disparar", "bomba",
            "muerte", "tortura", "suicidio",
        ],
    ),
    group(
        Category::Violence,
        Language::French,
        &[
            "tuer", "meurtre", "sanglant", "pistolet", "couteau", "poignarder", "tirer", "bombe",
            "torture", "suicide",
        ],
    ),
    group(
        Category::Violence,
        Language::Portuguese,
        &[
            "matar", "assassinar", "sangue", "faca", "esfaquear", "atirar", "bomba", "morte",
            "tortura", "suicídio",
        ],
    ),
    // ---- obscenity ----
    group(
        Category::Obscenity,
        Language::English,
        &[
            "fuck", "shit", "bitch", "ass", "asshole", "dick", "bastard", "damn", "piss", "slut",
            "whore", "porn",
        ],
    ),
    group(
        Category::Obscenity,
        Language::Spanish,
        &[
            "mierda", "puta", "puto", "joder", "coño", "cabrón", "pendejo", "verga", "culo",
            "chingar", "carajo",
        ],
    ),
    group(
        Category::Obscenity,
        Language::French,
        &[
            "merde", "putain", "connard", "salope", "bordel", "enculé", "foutre", "chier",
        ],
    ),
    group(
        Category::Obscenity,
        Language::Portuguese,
        &["merda", "porra", "caralho", "foda", "puta", "buceta", "cacete"],
    ),
    // ---- hate ----
    group(
        Category::Hate,
        Language::English,
        &["nazi", "racist", "retard", "faggot", "tranny", "chink"],
    ),
    group(
        Category::Hate,
        Language::Spanish,
        &["nazi", "racista", "maricón", "retrasado", "sudaca", "negrata"],
    ),
    group(
        Category::Hate,
        Language::French,
        &["nazi", "raciste", "tapette", "bougnoule", "youpin"],
    ),
    group(
        Category::Hate,
        Language::Portuguese,
        &["nazista", "racista", "viado", "retardado"],
    ),
    // ---- inappropriate ----
    group(
        Category::Inappropriate,
        Language::English,
        &[
            "stupid", "idiot", "dumb", "ugly", "moron", "sex", "sexy", "naked", "drugs",
            "cocaine", "drunk",
        ],
    ),
    group(
        Category::Inappropriate,
        Language::Spanish,
        &[
            "estúpido", "idiota", "tonto", "feo", "imbécil", "droga", "borracho", "desnudo",
        ],
    ),
    group(
        Category::Inappropriate,
        Language::French,
        &["stupide", "idiot", "débile", "moche", "crétin", "drogue", "bourré"],
    ),
    group(
        Category::Inappropriate,
        Language::Portuguese,
        &[
            "estúpido", "idiota", "burro", "feio", "otário", "droga", "bêbado", "pelado",
        ],
    ),
];

static UNIFIED_TERMS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut seen = HashSet::new();
    let terms: Vec<&'static str> = REGISTRY
        .iter()
        .flat_map(|g| g.terms.iter().copied())
        .filter(|term| seen.insert(*term))
        .collect();
    debug!(
        groups = REGISTRY.len(),
        unified = terms.len(),
        "Built unified term set"
    );
    terms
});

/// Every registry term, deduplicated, in first-seen registry order.
///
/// Built on first access and never rebuilt.
pub fn unified_terms() -> &'static [&'static str] {
    &UNIFIED_TERMS
}

/// Entry counts for the `terms` command.
#[derive(Debug, Clone, Serialize)]
pub struct RegistryStats {
    pub by_category: BTreeMap<Category, usize>,
    pub by_language: BTreeMap<Language, usize>,
    /// Entries across all groups, duplicates included
    pub raw_total: usize,
    pub unified_total: usize,
}

impl RegistryStats {
    pub fn collect() -> Self {
        let mut by_category = BTreeMap::new();
        let mut by_language = BTreeMap::new();
        let mut raw_total = 0;

        for g in REGISTRY {
            *by_category.entry(g.category).or_insert(0) += g.terms.len();
            *by_language.entry(g.language).or_insert(0) += g.terms.len();
            raw_total += g.terms.len();
        }

        Self {
            by_category,
            by_language,
            raw_total,
            unified_total: unified_terms().len(),
        }
    }

    pub fn duplicates_removed(&self) -> usize {
        self.raw_total - self.unified_total
    }
}
