//! Standalone ATS analysis: keyword scan, formatting checks, score, and
//! recommendations for a single resume.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::formatting::{check_formatting, FormattingIssue};
use crate::analysis::scoring::calculate_score;
use crate::analysis::taxonomy::{Category, KeywordTaxonomy};

/// Output of `POST /api/v1/resume/analyze`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub score: i32,
    pub found_keywords: BTreeMap<Category, Vec<String>>,
    pub formatting_issues: Vec<FormattingIssue>,
    pub recommendations: Vec<String>,
}

/// Scans lowercase resume text for taxonomy keywords (substring match).
/// Categories with zero hits are omitted from the result entirely.
pub fn analyze_keywords(text: &str, taxonomy: &KeywordTaxonomy) -> BTreeMap<Category, Vec<String>> {
    let mut found = BTreeMap::new();
    for (category, keywords) in taxonomy.iter() {
        let hits: Vec<String> = keywords
            .iter()
            .filter(|kw| text.contains(kw.as_str()))
            .cloned()
            .collect();
        if !hits.is_empty() {
            found.insert(category, hits);
        }
    }
    found
}

pub fn analyze_resume(text: &str, taxonomy: &KeywordTaxonomy) -> AnalysisResult {
    let found_keywords = analyze_keywords(text, taxonomy);
    let formatting_issues = check_formatting(text);
    let score = calculate_score(&found_keywords, &formatting_issues);
    let recommendations = generate_recommendations(&found_keywords, &formatting_issues);

    AnalysisResult {
        score,
        found_keywords,
        formatting_issues,
        recommendations,
    }
}

fn generate_recommendations(
    found_keywords: &BTreeMap<Category, Vec<String>>,
    formatting_issues: &[FormattingIssue],
) -> Vec<String> {
    let mut recommendations = Vec::new();

    for category in Category::ALL {
        if !found_keywords.contains_key(&category) {
            recommendations.push(format!(
                "Consider adding {} keywords to your resume",
                category.human_label()
            ));
        }
    }

    for issue in formatting_issues {
        recommendations.push(
            match issue {
                FormattingIssue::NoBulletPoints => {
                    "Use bullet points to highlight your achievements"
                }
                FormattingIssue::MissingSectionHeaders => {
                    "Include clear section headers (Experience, Education, Skills)"
                }
                FormattingIssue::MissingContactInfo => "Add your contact information",
            }
            .to_string(),
        );
    }

    recommendations
}
