//! Full tailoring pipeline: requirements → match analysis → suggestions →
//! weighted score, plus the optimizer that injects synthetic skill lines.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::analysis::analyzer::analyze_keywords;
use crate::analysis::formatting::check_formatting;
use crate::analysis::scoring::{calculate_score, ATS_COMPLIANT_SCORE};
use crate::analysis::taxonomy::{Category, KeywordTaxonomy};
use crate::tailoring::matcher::{
    analyze_resume_match, generate_tailoring_suggestions, KeywordMatch, MATCH_THRESHOLD,
};
use crate::tailoring::requirements::extract_job_requirements;

/// Match score (percentage) at or above which an already-compliant resume is
/// returned untouched.
const MATCH_SCORE_FLOOR: f64 = 80.0;

#[derive(Debug, Clone, Serialize)]
pub struct TailoringResult {
    /// Importance-weighted mean of per-category match percentages, as a
    /// percentage rounded to 2 decimals. The denominator is the number of
    /// emitted categories.
    pub overall_match_score: f64,
    pub ats_score: i32,
    pub matches: BTreeMap<Category, KeywordMatch>,
    pub suggestions: Vec<String>,
    pub is_ats_compliant: bool,
    /// ATS score of the rewritten text; only present after optimization.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optimized_ats_score: Option<i32>,
}

pub fn tailor_resume(
    resume_text: &str,
    job_description: &str,
    taxonomy: &KeywordTaxonomy,
) -> TailoringResult {
    let requirements = extract_job_requirements(job_description, taxonomy);
    let matches = analyze_resume_match(resume_text, &requirements);
    let suggestions = generate_tailoring_suggestions(&matches);

    let overall = if matches.is_empty() {
        0.0
    } else {
        let weighted_sum: f64 = matches
            .values()
            .map(|m| m.match_percentage * m.importance)
            .sum();
        weighted_sum / matches.len() as f64
    };
    let overall_match_score = round2(overall * 100.0);

    let ats_score = ats_score_of(resume_text, taxonomy);

    TailoringResult {
        overall_match_score,
        ats_score,
        matches,
        suggestions,
        is_ats_compliant: ats_score >= ATS_COMPLIANT_SCORE,
        optimized_ats_score: None,
    }
}

/// Produces an optimized resume for the job, together with the tailoring
/// analysis of the original text.
///
/// A resume that is already compliant (`ats_score ≥ 80` and
/// `overall_match_score ≥ 80`) is returned byte-for-byte unchanged with its
/// analysis untouched. Otherwise one synthetic bullet line is appended per
/// missing keyword in under-matched skill categories, and the ATS score of
/// the rewritten text is attached as `optimized_ats_score`.
pub fn get_optimized_resume(
    original_resume: &str,
    job_description: &str,
    taxonomy: &KeywordTaxonomy,
) -> (String, TailoringResult) {
    let mut analysis = tailor_resume(original_resume, job_description, taxonomy);

    if analysis.ats_score >= ATS_COMPLIANT_SCORE && analysis.overall_match_score >= MATCH_SCORE_FLOOR
    {
        return (original_resume.to_string(), analysis);
    }

    let mut optimized = original_resume.to_string();
    for (category, keyword_match) in &analysis.matches {
        if keyword_match.match_percentage >= MATCH_THRESHOLD {
            continue;
        }
        for keyword in &keyword_match.missing_keywords {
            // Only skill categories receive injected lines; education and
            // experience claims are never fabricated.
            match category {
                Category::TechnicalSkills => {
                    optimized.push_str(&format!("\n• Proficient in {keyword}"));
                }
                Category::SoftSkills => {
                    optimized.push_str(&format!("\n• Strong {keyword} abilities"));
                }
                Category::Education | Category::Experience => {}
            }
        }
    }

    let optimized_ats_score = ats_score_of(&optimized, taxonomy);
    analysis.optimized_ats_score = Some(optimized_ats_score);
    analysis.is_ats_compliant = optimized_ats_score >= ATS_COMPLIANT_SCORE;

    (optimized, analysis)
}

fn ats_score_of(text: &str, taxonomy: &KeywordTaxonomy) -> i32 {
    calculate_score(&analyze_keywords(text, taxonomy), &check_formatting(text))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
