//! Prompt construction for cover-letter generation.

use crate::cover_letter::handlers::CoverLetterRequest;

pub const COVER_LETTER_SYSTEM: &str = "You are a professional cover letter writer.";

pub fn build_prompt(request: &CoverLetterRequest) -> String {
    let applicant = &request.applicant;

    format!(
        "Please help me write a cover letter for a {job_title} position at {company_name}.\n\
         \n\
         My information:\n\
         - Name: {name}\n\
         - Experience: {years} years\n\
         - Education: {education}\n\
         - Location: {location}\n\
         \n\
         Job Description:\n\
         {job_description}\n\
         \n\
         Make sure to:\n\
         1. Keep it professional and concise\n\
         2. Highlight relevant skills and experience\n\
         3. Show enthusiasm for the specific role and company\n\
         4. Include specific achievements or responsibilities\n\
         5. Maintain a confident but humble tone",
        job_title = request.job_title,
        company_name = request.company_name,
        name = applicant.name,
        years = applicant.years_of_experience,
        education = applicant.education,
        location = applicant.location,
        job_description = request.job_description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cover_letter::handlers::ApplicantProfile;

    fn request() -> CoverLetterRequest {
        CoverLetterRequest {
            job_title: "Backend Engineer".to_string(),
            company_name: "Acme".to_string(),
            job_description: "Build APIs in Rust".to_string(),
            applicant: ApplicantProfile {
                name: "Sam Doe".to_string(),
                years_of_experience: 6,
                education: "BSc Computer Science".to_string(),
                location: "Berlin".to_string(),
            },
        }
    }

    #[test]
    fn test_prompt_names_role_and_company() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Backend Engineer position at Acme"));
    }

    #[test]
    fn test_prompt_includes_applicant_details() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Name: Sam Doe"));
        assert!(prompt.contains("Experience: 6 years"));
        assert!(prompt.contains("Education: BSc Computer Science"));
        assert!(prompt.contains("Location: Berlin"));
    }

    #[test]
    fn test_prompt_includes_job_description() {
        let prompt = build_prompt(&request());
        assert!(prompt.contains("Build APIs in Rust"));
    }
}
