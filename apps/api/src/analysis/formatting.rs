//! Structural formatting checks on extracted resume text.
//!
//! Three independent checks in fixed order; each failure contributes one
//! issue to the ATS score penalty.

use serde::Serializer;

const BULLET_MARKERS: &[char] = &['•', '-', '*'];

const SECTION_HEADERS: &[&str] = &["experience", "education", "skills", "work", "employment"];

const CONTACT_MARKERS: &[&str] = &["email", "phone", "address", "@"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormattingIssue {
    NoBulletPoints,
    MissingSectionHeaders,
    MissingContactInfo,
}

impl FormattingIssue {
    pub fn message(self) -> &'static str {
        match self {
            FormattingIssue::NoBulletPoints => "No bullet points found",
            FormattingIssue::MissingSectionHeaders => "Missing common section headers",
            FormattingIssue::MissingContactInfo => "Missing contact information",
        }
    }
}

impl std::fmt::Display for FormattingIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

// Issues serialize as their message text, matching the wire format clients
// already consume.
impl serde::Serialize for FormattingIssue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Runs every check against lowercase text. No short-circuiting: all three
/// checks always run, in order.
pub fn check_formatting(text: &str) -> Vec<FormattingIssue> {
    let mut issues = Vec::new();

    if !text.contains(BULLET_MARKERS) {
        issues.push(FormattingIssue::NoBulletPoints);
    }
    if !SECTION_HEADERS.iter().any(|header| text.contains(header)) {
        issues.push(FormattingIssue::MissingSectionHeaders);
    }
    if !CONTACT_MARKERS.iter().any(|marker| text.contains(marker)) {
        issues.push(FormattingIssue::MissingContactInfo);
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_resume_has_no_issues() {
        let text = "experience\n• built services\nemail: dev@example.com";
        assert!(check_formatting(text).is_empty());
    }

    #[test]
    fn test_empty_text_fails_all_checks_in_order() {
        let issues = check_formatting("");
        assert_eq!(
            issues,
            vec![
                FormattingIssue::NoBulletPoints,
                FormattingIssue::MissingSectionHeaders,
                FormattingIssue::MissingContactInfo,
            ]
        );
    }

    #[test]
    fn test_hyphen_counts_as_bullet_marker() {
        let issues = check_formatting("- shipped the thing");
        assert!(!issues.contains(&FormattingIssue::NoBulletPoints));
    }

    #[test]
    fn test_asterisk_counts_as_bullet_marker() {
        let issues = check_formatting("* shipped the thing");
        assert!(!issues.contains(&FormattingIssue::NoBulletPoints));
    }

    #[test]
    fn test_missing_section_headers_detected() {
        let issues = check_formatting("• something\nemail me");
        assert!(issues.contains(&FormattingIssue::MissingSectionHeaders));
        assert!(!issues.contains(&FormattingIssue::NoBulletPoints));
        assert!(!issues.contains(&FormattingIssue::MissingContactInfo));
    }

    #[test]
    fn test_at_sign_counts_as_contact_info() {
        let issues = check_formatting("• work history\ndev@example.com");
        assert!(!issues.contains(&FormattingIssue::MissingContactInfo));
    }

    #[test]
    fn test_checks_are_independent() {
        // Only the contact check should fail here.
        let issues = check_formatting("• experience at a company");
        assert_eq!(issues, vec![FormattingIssue::MissingContactInfo]);
    }

    #[test]
    fn test_issue_serializes_as_message() {
        let json = serde_json::to_string(&FormattingIssue::NoBulletPoints).unwrap();
        assert_eq!(json, r#""No bullet points found""#);
    }
}
