//! Keyword taxonomy: the fixed category to keyword mapping every analysis
//! runs against. Built once at startup and shared read-only via `AppState`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The four fixed taxonomy categories. Ordering follows the declaration
/// order, so `BTreeMap<Category, _>` iterates categories deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    TechnicalSkills,
    SoftSkills,
    Education,
    Experience,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::TechnicalSkills,
        Category::SoftSkills,
        Category::Education,
        Category::Experience,
    ];

    /// Importance weight applied when this category appears in a job
    /// description. Frozen constants; must not be retuned.
    pub fn importance(self) -> f64 {
        match self {
            Category::TechnicalSkills => 0.8,
            Category::SoftSkills => 0.6,
            Category::Education => 0.7,
            Category::Experience => 0.9,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::TechnicalSkills => "technical_skills",
            Category::SoftSkills => "soft_skills",
            Category::Education => "education",
            Category::Experience => "experience",
        }
    }

    /// Snake-case name with underscores replaced by spaces, for
    /// human-readable suggestion strings.
    pub fn human_label(self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

const TECHNICAL_SKILLS: &[&str] = &[
    "python",
    "javascript",
    "java",
    "c++",
    "sql",
    "react",
    "node.js",
    "aws",
    "docker",
    "kubernetes",
];

const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem-solving",
    "time management",
];

const EDUCATION: &[&str] = &["bachelor", "master", "phd", "degree", "university", "college"];

const EXPERIENCE: &[&str] = &[
    "experience",
    "years",
    "worked",
    "developed",
    "implemented",
    "managed",
];

/// Immutable category → keyword mapping. The lists are matched as
/// case-insensitive substrings against already-lowercased text, so every
/// keyword here is stored lowercase.
#[derive(Debug, Clone)]
pub struct KeywordTaxonomy {
    keywords: BTreeMap<Category, Vec<String>>,
}

impl KeywordTaxonomy {
    pub fn new() -> Self {
        let mut keywords = BTreeMap::new();
        for (category, list) in [
            (Category::TechnicalSkills, TECHNICAL_SKILLS),
            (Category::SoftSkills, SOFT_SKILLS),
            (Category::Education, EDUCATION),
            (Category::Experience, EXPERIENCE),
        ] {
            keywords.insert(category, list.iter().map(|s| s.to_string()).collect());
        }
        Self { keywords }
    }

    pub fn keywords(&self, category: Category) -> &[String] {
        self.keywords
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.keywords.iter().map(|(c, kws)| (*c, kws.as_slice()))
    }
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        Self::new()
    }
}
