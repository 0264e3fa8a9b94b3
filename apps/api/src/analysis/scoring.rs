//! ATS score computation.
//!
//! The formula is frozen for compatibility with existing clients:
//! base 70, +2 per found keyword capped at +20, −5 per formatting issue,
//! clamped to [0, 100]. Do not retune these constants.

use std::collections::BTreeMap;

use crate::analysis::formatting::FormattingIssue;
use crate::analysis::taxonomy::Category;

pub const BASE_SCORE: i32 = 70;
pub const KEYWORD_POINTS: i32 = 2;
pub const KEYWORD_CAP: i32 = 20;
pub const ISSUE_PENALTY: i32 = 5;

/// Score compared against for ATS compliance.
pub const ATS_COMPLIANT_SCORE: i32 = 80;

pub fn calculate_score(
    found_keywords: &BTreeMap<Category, Vec<String>>,
    formatting_issues: &[FormattingIssue],
) -> i32 {
    let keyword_count: i32 = found_keywords.values().map(|kws| kws.len() as i32).sum();

    let score = BASE_SCORE + (keyword_count * KEYWORD_POINTS).min(KEYWORD_CAP)
        - formatting_issues.len() as i32 * ISSUE_PENALTY;

    score.clamp(0, 100)
}
