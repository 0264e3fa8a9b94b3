//! Job requirement extraction from a raw job description.

use serde::Serialize;

use crate::analysis::taxonomy::{Category, KeywordTaxonomy};

/// Requirements detected for one taxonomy category. Only categories with at
/// least one keyword hit are emitted; absent categories must not dilute the
/// weighted match average downstream.
#[derive(Debug, Clone, Serialize)]
pub struct JobRequirement {
    pub category: Category,
    pub keywords: Vec<String>,
    pub importance: f64,
}

pub fn extract_job_requirements(
    job_description: &str,
    taxonomy: &KeywordTaxonomy,
) -> Vec<JobRequirement> {
    let jd = job_description.to_lowercase();

    Category::ALL
        .iter()
        .filter_map(|&category| {
            let keywords: Vec<String> = taxonomy
                .keywords(category)
                .iter()
                .filter(|kw| jd.contains(kw.as_str()))
                .cloned()
                .collect();

            if keywords.is_empty() {
                None
            } else {
                Some(JobRequirement {
                    category,
                    keywords,
                    importance: category.importance(),
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn taxonomy() -> KeywordTaxonomy {
        KeywordTaxonomy::new()
    }

    #[test]
    fn test_detected_categories_carry_fixed_importance() {
        let jd = "We need python and leadership, a bachelor degree, and 3 years experience";
        let requirements = extract_job_requirements(jd, &taxonomy());

        assert_eq!(requirements.len(), 4);
        let by_category = |c: Category| {
            requirements
                .iter()
                .find(|r| r.category == c)
                .expect("category missing")
        };
        assert_eq!(by_category(Category::TechnicalSkills).importance, 0.8);
        assert_eq!(by_category(Category::SoftSkills).importance, 0.6);
        assert_eq!(by_category(Category::Education).importance, 0.7);
        assert_eq!(by_category(Category::Experience).importance, 0.9);
    }

    #[test]
    fn test_categories_without_hits_are_omitted() {
        let requirements = extract_job_requirements("python only", &taxonomy());
        assert_eq!(requirements.len(), 1);
        assert_eq!(requirements[0].category, Category::TechnicalSkills);
        assert_eq!(requirements[0].keywords, vec!["python"]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let requirements = extract_job_requirements("PYTHON and Docker", &taxonomy());
        assert_eq!(
            requirements[0].keywords,
            vec!["python".to_string(), "docker".to_string()]
        );
    }

    #[test]
    fn test_empty_description_yields_no_requirements() {
        assert!(extract_job_requirements("", &taxonomy()).is_empty());
    }

    #[test]
    fn test_mixed_description_splits_across_categories() {
        let jd = "looking for python, leadership, bachelor degree, 3 years experience";
        let requirements = extract_job_requirements(jd, &taxonomy());

        let keywords_of = |c: Category| {
            requirements
                .iter()
                .find(|r| r.category == c)
                .map(|r| r.keywords.clone())
                .unwrap_or_default()
        };
        assert_eq!(keywords_of(Category::TechnicalSkills), vec!["python"]);
        assert_eq!(keywords_of(Category::SoftSkills), vec!["leadership"]);
        assert_eq!(keywords_of(Category::Education), vec!["bachelor", "degree"]);
        assert_eq!(keywords_of(Category::Experience), vec!["experience", "years"]);
    }
}
