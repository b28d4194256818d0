//! Typed schema for the profile document
//!
//! Every section is optional and every leaf field defaults to an empty
//! string or list, so a sparse profile still deserializes and chunks.
//! Fields that real profiles store as either a plain label or a structured
//! record (languages, certifications, project impact, Q&A entries) are
//! modeled as untagged enums.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Top-level profile record. Absent sections are not an error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub personal: Option<Personal>,
    pub salary_location: Option<SalaryLocation>,
    pub experience: Vec<Employer>,
    pub skills: Option<Skills>,
    pub education: Option<Education>,
    pub projects_portfolio: Vec<Project>,
    pub career_goals: Option<CareerGoals>,
    pub interview_prep: Option<InterviewPrep>,
    pub interview_signal_summary: Option<SignalSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub location: String,
    pub summary: String,
    pub elevator_pitch: String,
    pub contact: Option<Contact>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SalaryLocation {
    pub salary_expectations: String,
    pub location_preferences: Vec<String>,
    pub remote_experience: String,
    pub work_authorization: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Employer {
    pub company: String,
    pub title: String,
    pub duration: String,
    pub company_context: String,
    pub team_structure: String,
    pub achievements_star: Vec<StarAchievement>,
    pub technical_skills_used: Vec<String>,
}

/// Situation/Task/Action/Result achievement record
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StarAchievement {
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub technical: Option<TechnicalSkills>,
    pub soft_skills: Option<Vec<String>>,
    pub certifications: Option<Vec<Certification>>,
}

/// Technical skill taxonomy. A sub-category key that is present but empty
/// still yields its chunk; an absent key yields none, so these stay Option.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TechnicalSkills {
    pub programming_languages: Option<Vec<LanguageSkill>>,
    pub frontend: Option<Vec<String>>,
    pub backend: Option<Vec<String>>,
    pub databases: Option<Vec<String>>,
    pub cloud_platforms: Option<Vec<String>>,
    pub ai_ml: Option<Vec<String>>,
}

/// A programming language: either a structured entry or a plain label
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LanguageSkill {
    Detailed {
        #[serde(default)]
        language: String,
        #[serde(default)]
        proficiency: String,
        #[serde(default)]
        years: ScalarText,
        #[serde(default)]
        frameworks: Vec<String>,
    },
    Label(String),
}

/// A certification: either a structured entry or a plain label
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Certification {
    Detailed {
        #[serde(default)]
        name: String,
        #[serde(default)]
        provider: String,
        #[serde(default)]
        year: ScalarText,
    },
    Label(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Education {
    pub degree: String,
    pub specialisation: String,
    pub university: String,
    pub graduation_year: ScalarText,
    pub location: String,
    pub relevant_coursework: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub key_features: Vec<String>,
    pub impact: Option<ProjectImpact>,
}

/// Project impact: free text, or a metric -> value mapping
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ProjectImpact {
    Text(String),
    Metrics(serde_json::Map<String, Value>),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CareerGoals {
    pub short_term: String,
    pub long_term: String,
    pub learning_focus: Vec<String>,
    pub industries_interested: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InterviewPrep {
    pub common_questions: Option<CommonQuestions>,
    pub weakness_mitigation: Vec<WeaknessMitigation>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CommonQuestions {
    pub behavioral: Vec<QaRecord>,
    pub technical: Vec<QaRecord>,
    pub situational: Vec<QaRecord>,
}

/// A prepared Q&A entry. Records lacking either field (or not shaped as a
/// mapping at all) fall into `Malformed` and are skipped silently by the
/// chunker.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QaRecord {
    Pair { question: String, answer: String },
    Malformed(Value),
}

impl QaRecord {
    /// The question/answer pair, if this record carries both fields
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        match self {
            QaRecord::Pair { question, answer } => Some((question, answer)),
            QaRecord::Malformed(_) => None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WeaknessMitigation {
    pub weakness: String,
    pub mitigation: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SignalSummary {
    pub strengths: Vec<String>,
    pub recommended_for: Vec<String>,
    pub unique_value_proposition: String,
}

/// Scalar that may arrive as a JSON string or number ("3", 3, "5+").
/// Renders as its bare text either way; anything else renders empty.
#[derive(Debug, Clone, Default)]
pub struct ScalarText(pub String);

impl<'de> Deserialize<'de> for ScalarText {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let text = match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            _ => String::new(),
        };
        Ok(ScalarText(text))
    }
}

impl fmt::Display for ScalarText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
