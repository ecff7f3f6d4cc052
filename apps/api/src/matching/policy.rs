use serde::Serialize;

/// How a candidate skill is compared against a required skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Required skill (lowercased) must be present verbatim in the candidate set.
    Exact,
    /// Either string contains the other, case-insensitively.
    Substring,
}

impl ComparisonMode {
    /// `candidate` is a normalized token, `required` is already lowercased.
    pub fn matches(self, candidate: &str, required: &str) -> bool {
        match self {
            ComparisonMode::Exact => candidate == required,
            ComparisonMode::Substring => {
                required.contains(candidate) || candidate.contains(required)
            }
        }
    }
}

/// Comparison mode, cap, inclusion threshold and result limit for one ranking flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoringPolicy {
    pub name: &'static str,
    pub comparison: ComparisonMode,
    /// Upper bound applied after rounding.
    pub cap_percent: u32,
    /// Jobs are kept only when `score > inclusion_threshold`.
    pub inclusion_threshold: u32,
    pub max_results: Option<usize>,
}

impl ScoringPolicy {
    /// Resume-analysis recommendations: substring match, >50%, unbounded.
    pub const RESUME_RECOMMENDATIONS: ScoringPolicy = ScoringPolicy {
        name: "resume_recommendations",
        comparison: ComparisonMode::Substring,
        cap_percent: 100,
        inclusion_threshold: 50,
        max_results: None,
    };

    /// Interview-answer matching: exact match, capped at 95, >70%, top 3.
    pub const INTERVIEW_MATCHES: ScoringPolicy = ScoringPolicy {
        name: "interview_matches",
        comparison: ComparisonMode::Exact,
        cap_percent: 95,
        inclusion_threshold: 70,
        max_results: Some(3),
    };

    pub fn includes(&self, score: u32) -> bool {
        score > self.inclusion_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_is_bidirectional() {
        let mode = ComparisonMode::Substring;
        assert!(mode.matches("react", "react native"));
        assert!(mode.matches("node.js developer", "node.js"));
        assert!(!mode.matches("vue", "react"));
    }

    #[test]
    fn test_exact_requires_equality() {
        let mode = ComparisonMode::Exact;
        assert!(mode.matches("aws", "aws"));
        assert!(!mode.matches("react", "react native"));
    }

    #[test]
    fn test_thresholds_are_strict() {
        assert!(!ScoringPolicy::RESUME_RECOMMENDATIONS.includes(50));
        assert!(ScoringPolicy::RESUME_RECOMMENDATIONS.includes(51));
        assert!(!ScoringPolicy::INTERVIEW_MATCHES.includes(70));
        assert!(ScoringPolicy::INTERVIEW_MATCHES.includes(71));
    }
}
