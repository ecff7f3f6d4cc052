//! Skill Normalizer — canonicalizes skill mentions into comparable lowercase tokens.
//!
//! No stemming and no synonym expansion: "js" and "javascript" stay distinct.

use std::collections::HashSet;
use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::matching::catalog::CatalogError;

/// Technology terms recognized when extracting skills from free-text answers.
pub const DEFAULT_SKILL_VOCABULARY: &[&str] = &[
    "javascript", "python", "java", "react", "node", "aws", "docker", "kubernetes",
    "sql", "mongodb", "typescript", "angular", "vue", "spring", "django", "flask",
    "redis", "postgresql", "mysql", "graphql", "rest", "git", "jenkins", "terraform",
    "azure", "gcp", "html", "css", "redux", "express", "php", "ruby", "rails",
    "scala", "kotlin", "swift", "flutter", "react native", "android", "ios",
    "machine learning", "ai", "data science", "tensorflow", "pytorch", "spark",
];

// ────────────────────────────────────────────────────────────────────────────
// SkillSet
// ────────────────────────────────────────────────────────────────────────────

/// A set of normalized skill tokens. Iteration follows first-seen order;
/// equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(IndexSet<String>);

impl SkillSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Inserts an already-normalized token. Empty tokens are ignored.
    fn insert(&mut self, token: String) {
        if !token.is_empty() {
            self.0.insert(token);
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        normalize(iter)
    }
}

/// Lowercases, trims and dedupes raw skill mentions.
pub fn normalize<I, S>(raw_skills: I) -> SkillSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut set = SkillSet::new();
    for raw in raw_skills {
        set.insert(normalize_token(raw.as_ref()));
    }
    set
}

/// Canonical form of a single skill mention.
pub fn normalize_token(raw: &str) -> String {
    raw.trim().to_lowercase()
}

// ────────────────────────────────────────────────────────────────────────────
// Vocabulary + text extraction
// ────────────────────────────────────────────────────────────────────────────

/// Allow-list of skills recognizable in free text.
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    terms: HashSet<String>,
    /// Multi-word terms pre-split into their word tokens.
    phrases: Vec<(String, Vec<String>)>,
}

impl SkillVocabulary {
    pub fn new<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms: HashSet<String> = normalize(terms).iter().map(str::to_string).collect();
        let mut phrases: Vec<(String, Vec<String>)> = terms
            .iter()
            .map(|t| (t.clone(), tokenize(t)))
            .filter(|(_, words)| words.len() > 1)
            .collect();
        phrases.sort();
        Self { terms, phrases }
    }

    /// Loads a vocabulary from a JSON array of strings.
    pub async fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| CatalogError::Io {
                path: path.display().to_string(),
                source,
            })?;
        let terms: Vec<String> = serde_json::from_str(&raw)?;
        Ok(Self::new(terms))
    }

    pub fn contains(&self, token: &str) -> bool {
        self.terms.contains(token)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILL_VOCABULARY)
    }
}

/// How free text is matched against the vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractionMode {
    /// Single word tokens only. Multi-word terms ("react native") never match.
    #[default]
    WordTokens,
    /// Word tokens plus multi-word terms appearing as consecutive tokens.
    PhraseAware,
}

/// Extracts known skills from free text.
#[derive(Debug, Clone, Default)]
pub struct SkillExtractor {
    vocabulary: SkillVocabulary,
    mode: ExtractionMode,
}

impl SkillExtractor {
    pub fn new(vocabulary: SkillVocabulary, mode: ExtractionMode) -> Self {
        Self { vocabulary, mode }
    }

    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn extract(&self, text: &str) -> SkillSet {
        let words = tokenize(text);
        let mut found = SkillSet::new();

        for word in &words {
            if self.vocabulary.contains(word) {
                found.insert(word.clone());
            }
        }

        if self.mode == ExtractionMode::PhraseAware {
            for (term, parts) in &self.vocabulary.phrases {
                if words.windows(parts.len()).any(|w| w == parts.as_slice()) {
                    found.insert(term.clone());
                }
            }
        }

        found
    }
}

/// Splits on ASCII word boundaries (`[A-Za-z0-9_]+`) and lowercases.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .filter(|w| !w.is_empty())
        .map(|w| w.to_ascii_lowercase())
        .collect()
}
