use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

use crate::matching::normalizer::{normalize, SkillSet};
use crate::models::lenient;

/// Structured resume analysis produced by the external analyzer.
/// Every field tolerates absence, `null` and malformed values, so partial
/// analyzer output still deserializes and bad skill data reduces to empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeAnalysis {
    #[serde(deserialize_with = "lenient::or_default")]
    pub skills: SkillsSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub experience: ExperienceSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub education: EducationSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub format: FormatSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub job_fit: JobFitSection,
    #[serde(deserialize_with = "lenient::or_default")]
    pub overall_score: Option<f64>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillsSection {
    #[serde(deserialize_with = "lenient::string_list")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub soft: Vec<String>,
    #[serde(deserialize_with = "lenient::string_list")]
    pub missing: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceSection {
    pub years: Option<f64>,
    pub relevant_projects: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationSection {
    pub degree: Option<String>,
    pub relevance: Option<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatSection {
    pub score: Option<f64>,
    pub improvements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobFitSection {
    pub recommended_roles: Vec<RecommendedRole>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendedRole {
    pub title: String,
    #[serde(rename = "match")]
    pub match_percent: Option<f64>,
    pub missing_skills: Vec<String>,
}

impl ResumeAnalysis {
    /// Candidate skill set: technical ∪ soft, normalized.
    pub fn candidate_skills(&self) -> SkillSet {
        normalize(self.skills.technical.iter().chain(self.skills.soft.iter()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeAnalysisRow {
    pub user_id: Uuid,
    pub analysis: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_analysis_deserializes() {
        let json = r#"{
            "skills": {"technical": ["Python", "React"], "soft": ["Leadership"], "missing": ["Docker"]},
            "experience": {"years": 4, "relevantProjects": ["Chat app"], "suggestions": []},
            "education": {"degree": "BSc Computer Science", "relevance": "High", "suggestions": []},
            "format": {"score": 82, "improvements": ["Use bullet points"]},
            "jobFit": {"recommendedRoles": [{"title": "Backend Engineer", "match": 78, "missingSkills": ["Go"]}]},
            "overallScore": 80,
            "improvements": ["Quantify impact"]
        }"#;

        let analysis: ResumeAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.experience.years, Some(4.0));
        assert_eq!(analysis.job_fit.recommended_roles[0].match_percent, Some(78.0));
        assert_eq!(analysis.job_fit.recommended_roles[0].missing_skills, vec!["Go"]);
        assert_eq!(analysis.overall_score, Some(80.0));
    }

    #[test]
    fn test_partial_analysis_defaults_missing_sections() {
        let analysis: ResumeAnalysis =
            serde_json::from_str(r#"{"skills": {"technical": ["Rust"]}}"#).unwrap();
        assert_eq!(analysis.skills.technical, vec!["Rust"]);
        assert!(analysis.skills.soft.is_empty());
        assert_eq!(analysis.experience.years, None);
    }

    #[test]
    fn test_null_skill_lists_reduce_to_empty() {
        let analysis: ResumeAnalysis = serde_json::from_str(
            r#"{"skills": {"technical": null, "soft": ["React", 4]}, "experience": null}"#,
        )
        .unwrap();
        assert!(analysis.skills.technical.is_empty());
        assert_eq!(analysis.candidate_skills().to_vec(), vec!["react"]);
        assert_eq!(analysis.experience, ExperienceSection::default());

        let analysis: ResumeAnalysis = serde_json::from_str(r#"{"skills": "oops"}"#).unwrap();
        assert!(analysis.candidate_skills().is_empty());
    }

    #[test]
    fn test_candidate_skills_union_technical_and_soft() {
        let analysis = ResumeAnalysis {
            skills: SkillsSection {
                technical: vec!["React".into(), " Node.js".into()],
                soft: vec!["Communication".into(), "react".into()],
                missing: vec!["Kubernetes".into()],
            },
            ..Default::default()
        };
        let skills: Vec<String> = analysis.candidate_skills().to_vec();
        assert_eq!(skills, vec!["react", "node.js", "communication"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(ResumeAnalysis::default()).unwrap();
        assert!(value.get("jobFit").is_some());
        assert!(value.get("overallScore").is_some());
    }
}
