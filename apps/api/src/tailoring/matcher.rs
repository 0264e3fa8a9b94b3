//! Per-category comparison of resume text against extracted job requirements.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::taxonomy::Category;
use crate::tailoring::requirements::JobRequirement;

/// Threshold below which a category is considered under-matched. Frozen.
pub const MATCH_THRESHOLD: f64 = 0.8;

#[derive(Debug, Clone, Serialize)]
pub struct KeywordMatch {
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub match_percentage: f64,
    pub importance: f64,
}

/// Computes matched/missing keyword sets per requirement using
/// case-insensitive substring tests against the resume text.
pub fn analyze_resume_match(
    resume_text: &str,
    requirements: &[JobRequirement],
) -> BTreeMap<Category, KeywordMatch> {
    let resume = resume_text.to_lowercase();
    let mut matches = BTreeMap::new();

    for requirement in requirements {
        let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = requirement
            .keywords
            .iter()
            .cloned()
            .partition(|kw| resume.contains(kw.as_str()));

        // Empty keyword list → 0, not a division by zero.
        let match_percentage = if requirement.keywords.is_empty() {
            0.0
        } else {
            matched_keywords.len() as f64 / requirement.keywords.len() as f64
        };

        matches.insert(
            requirement.category,
            KeywordMatch {
                matched_keywords,
                missing_keywords,
                match_percentage,
                importance: requirement.importance,
            },
        );
    }

    matches
}

/// One suggestion per under-matched category that still has missing
/// keywords to name.
pub fn generate_tailoring_suggestions(matches: &BTreeMap<Category, KeywordMatch>) -> Vec<String> {
    let mut suggestions = Vec::new();

    for (category, keyword_match) in matches {
        if keyword_match.match_percentage < MATCH_THRESHOLD
            && !keyword_match.missing_keywords.is_empty()
        {
            suggestions.push(format!(
                "Consider adding these {}: {}",
                category.human_label(),
                keyword_match.missing_keywords.join(", ")
            ));
        }
    }

    suggestions
}
