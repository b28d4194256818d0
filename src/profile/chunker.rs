//! Profile chunking model
//!
//! Flattens a `ProfileRecord` into self-contained text chunks, one per
//! logical fact, so that a partial match during retrieval still surfaces a
//! coherent unit. Each present section contributes chunks independently;
//! ids are assigned by a local accumulator in generation order, so the same
//! profile always yields the same titles, kinds, and contents.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::profile::schema::{
    CareerGoals, Certification, CommonQuestions, Contact, Education, Employer, InterviewPrep,
    LanguageSkill, Personal, ProfileRecord, Project, ProjectImpact, QaRecord, SalaryLocation,
    SignalSummary, Skills, TechnicalSkills,
};

/// Closed category set for chunk metadata filtering and debugging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Personal,
    Contact,
    Compensation,
    Experience,
    Achievement,
    Skills,
    Certification,
    Education,
    Project,
    Goals,
    Interview,
    Summary,
}

impl ChunkKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkKind::Personal => "personal",
            ChunkKind::Contact => "contact",
            ChunkKind::Compensation => "compensation",
            ChunkKind::Experience => "experience",
            ChunkKind::Achievement => "achievement",
            ChunkKind::Skills => "skills",
            ChunkKind::Certification => "certification",
            ChunkKind::Education => "education",
            ChunkKind::Project => "project",
            ChunkKind::Goals => "goals",
            ChunkKind::Interview => "interview",
            ChunkKind::Summary => "summary",
        }
    }
}

/// One retrievable unit of the profile
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    pub id: String,
    pub title: String,
    pub kind: ChunkKind,
    pub content: String,
    pub tags: Vec<String>,
}

impl Chunk {
    /// Text handed to the vector service for embedding
    pub fn embedding_text(&self) -> String {
        format!("{}: {}", self.title, self.content)
    }

    /// Metadata stored alongside the vector. Carries title and content so
    /// they can be recovered verbatim at query time.
    pub fn metadata(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("title".to_string(), json!(self.title));
        map.insert("type".to_string(), json!(self.kind.as_str()));
        map.insert("content".to_string(), json!(self.content));
        map.insert("category".to_string(), json!(self.kind.as_str()));
        map.insert("tags".to_string(), json!(self.tags));
        map
    }
}

/// Accumulator threaded through one chunking pass. Owns the id counter so
/// chunking stays reentrant across profiles.
#[derive(Debug, Default)]
struct ChunkSet {
    chunks: Vec<Chunk>,
    next_id: u32,
}

impl ChunkSet {
    fn push(&mut self, title: String, kind: ChunkKind, content: String, tags: Vec<String>) {
        self.next_id += 1;
        self.chunks.push(Chunk {
            id: format!("chunk_{}", self.next_id),
            title,
            kind,
            content,
            tags,
        });
    }
}

/// Flatten a profile into its chunk sequence. Deterministic for a given
/// record; does not mutate the input.
pub fn chunk_profile(profile: &ProfileRecord) -> Vec<Chunk> {
    let mut out = ChunkSet::default();

    if let Some(personal) = &profile.personal {
        personal_chunks(personal, &mut out);
        if let Some(contact) = &personal.contact {
            contact_chunk(contact, &mut out);
        }
    }
    if let Some(salary) = &profile.salary_location {
        salary_chunk(salary, &mut out);
    }
    for employer in &profile.experience {
        employer_chunks(employer, &mut out);
    }
    if let Some(skills) = &profile.skills {
        skills_chunks(skills, &mut out);
    }
    if let Some(education) = &profile.education {
        education_chunk(education, &mut out);
    }
    for project in &profile.projects_portfolio {
        project_chunk(project, &mut out);
    }
    if let Some(goals) = &profile.career_goals {
        goals_chunk(goals, &mut out);
    }
    if let Some(prep) = &profile.interview_prep {
        interview_chunks(prep, &mut out);
    }
    if let Some(summary) = &profile.interview_signal_summary {
        summary_chunk(summary, &mut out);
    }

    out.chunks
}

fn personal_chunks(p: &Personal, out: &mut ChunkSet) {
    out.push(
        "Personal Information".to_string(),
        ChunkKind::Personal,
        format!(
            "Name: {}. Title: {}. Location: {}. {}",
            p.name, p.title, p.location, p.summary
        ),
        tags(&["name", "title", "location", "summary"]),
    );

    if !p.elevator_pitch.is_empty() {
        out.push(
            "Elevator Pitch".to_string(),
            ChunkKind::Personal,
            p.elevator_pitch.clone(),
            tags(&["elevator_pitch", "introduction"]),
        );
    }
}

fn contact_chunk(c: &Contact, out: &mut ChunkSet) {
    out.push(
        "Contact Information".to_string(),
        ChunkKind::Contact,
        format!(
            "Email: {}. Phone: {}. LinkedIn: {}. GitHub: {}.",
            c.email, c.phone, c.linkedin, c.github
        ),
        tags(&["email", "phone", "linkedin", "github"]),
    );
}

fn salary_chunk(s: &SalaryLocation, out: &mut ChunkSet) {
    out.push(
        "Salary and Location Preferences".to_string(),
        ChunkKind::Compensation,
        format!(
            "Salary expectations: {}. Location preferences: {}. Remote experience: {}. Work authorization: {}.",
            s.salary_expectations,
            s.location_preferences.join(", "),
            s.remote_experience,
            s.work_authorization
        ),
        tags(&["salary", "location", "remote", "authorization"]),
    );
}

fn employer_chunks(e: &Employer, out: &mut ChunkSet) {
    out.push(
        format!("Work Experience - {}", e.company),
        ChunkKind::Experience,
        format!(
            "Company: {}. Role: {}. Duration: {}. Context: {}. Team: {}.",
            e.company, e.title, e.duration, e.company_context, e.team_structure
        ),
        vec!["work".to_string(), "job".to_string(), e.company.to_lowercase()],
    );

    for (i, star) in e.achievements_star.iter().enumerate() {
        out.push(
            format!("Achievement at {} #{}", e.company, i + 1),
            ChunkKind::Achievement,
            format!(
                "At {}: Situation: {}. Task: {}. Action: {}. Result: {}.",
                e.company, star.situation, star.task, star.action, star.result
            ),
            vec![
                "star".to_string(),
                "accomplishment".to_string(),
                e.company.to_lowercase(),
            ],
        );
    }

    if !e.technical_skills_used.is_empty() {
        out.push(
            format!("Skills Used at {}", e.company),
            ChunkKind::Skills,
            format!(
                "Technical skills used at {}: {}.",
                e.company,
                e.technical_skills_used.join(", ")
            ),
            e.technical_skills_used
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        );
    }
}

fn skills_chunks(skills: &Skills, out: &mut ChunkSet) {
    if let Some(technical) = &skills.technical {
        technical_chunks(technical, out);
    }

    if let Some(soft) = &skills.soft_skills {
        out.push(
            "Soft Skills".to_string(),
            ChunkKind::Skills,
            format!("Soft skills: {}.", soft.join(", ")),
            tags(&["soft skills", "interpersonal", "communication"]),
        );
    }

    if let Some(certs) = &skills.certifications {
        let rendered: Vec<String> = certs.iter().map(render_certification).collect();
        out.push(
            "Certifications & Training".to_string(),
            ChunkKind::Certification,
            format!("Certifications and training: {}.", rendered.join("; ")),
            tags(&["certification", "training", "education"]),
        );
    }
}

fn technical_chunks(tech: &TechnicalSkills, out: &mut ChunkSet) {
    if let Some(languages) = &tech.programming_languages {
        let rendered: Vec<String> = languages.iter().map(render_language).collect();
        out.push(
            "Programming Languages".to_string(),
            ChunkKind::Skills,
            format!("Programming languages: {}.", rendered.join("; ")),
            tags(&["programming", "languages", "technical"]),
        );
    }

    if let Some(frontend) = &tech.frontend {
        out.push(
            "Frontend Skills".to_string(),
            ChunkKind::Skills,
            format!("Frontend technologies: {}.", frontend.join(", ")),
            tags(&["frontend", "ui", "web"]),
        );
    }

    if let Some(backend) = &tech.backend {
        out.push(
            "Backend Skills".to_string(),
            ChunkKind::Skills,
            format!("Backend technologies: {}.", backend.join(", ")),
            tags(&["backend", "server", "api"]),
        );
    }

    if let Some(databases) = &tech.databases {
        out.push(
            "Database Skills".to_string(),
            ChunkKind::Skills,
            format!("Database technologies: {}.", databases.join(", ")),
            tags(&["database", "sql", "data"]),
        );
    }

    if let Some(cloud) = &tech.cloud_platforms {
        out.push(
            "Cloud & DevOps Skills".to_string(),
            ChunkKind::Skills,
            format!("Cloud and DevOps: {}.", cloud.join(", ")),
            tags(&["cloud", "devops", "aws", "deployment"]),
        );
    }

    if let Some(ai_ml) = &tech.ai_ml {
        out.push(
            "AI & Machine Learning Skills".to_string(),
            ChunkKind::Skills,
            format!("AI and ML experience: {}.", ai_ml.join(", ")),
            tags(&["ai", "ml", "machine learning", "automation"]),
        );
    }
}

fn education_chunk(edu: &Education, out: &mut ChunkSet) {
    let mut content = format!(
        "Education: {} in {} from {}. Graduated: {}. Location: {}.",
        edu.degree, edu.specialisation, edu.university, edu.graduation_year, edu.location
    );
    if !edu.relevant_coursework.is_empty() {
        content.push_str(&format!(
            " Relevant coursework: {}.",
            edu.relevant_coursework.join(", ")
        ));
    }
    out.push(
        "Education".to_string(),
        ChunkKind::Education,
        content,
        tags(&["university", "degree", "academic"]),
    );
}

fn project_chunk(p: &Project, out: &mut ChunkSet) {
    let mut content = format!(
        "Project: {}. Type: {}. Description: {}. Technologies: {}.",
        p.name,
        p.kind,
        p.description,
        p.technologies.join(", ")
    );
    if !p.key_features.is_empty() {
        content.push_str(&format!(" Key features: {}.", p.key_features.join(", ")));
    }
    if let Some(impact) = &p.impact {
        content.push_str(&format!(" Impact: {}.", render_impact(impact)));
    }
    out.push(
        format!("Project - {}", p.name),
        ChunkKind::Project,
        content,
        p.technologies.iter().map(|t| t.to_lowercase()).collect(),
    );
}

fn goals_chunk(g: &CareerGoals, out: &mut ChunkSet) {
    out.push(
        "Career Goals".to_string(),
        ChunkKind::Goals,
        format!(
            "Career goals - Short term: {}. Long term: {}. Learning focus: {}. Industries interested: {}.",
            g.short_term,
            g.long_term,
            g.learning_focus.join(", "),
            g.industries_interested.join(", ")
        ),
        tags(&["career", "goals", "aspirations", "future"]),
    );
}

fn interview_chunks(prep: &InterviewPrep, out: &mut ChunkSet) {
    if let Some(questions) = &prep.common_questions {
        qa_chunks(questions, out);
    }

    for w in &prep.weakness_mitigation {
        out.push(
            format!("Weakness & Mitigation - {}...", preview(&w.weakness, 30)),
            ChunkKind::Interview,
            format!("Weakness: {}. Mitigation: {}", w.weakness, w.mitigation),
            tags(&["weakness", "improvement", "growth"]),
        );
    }
}

fn qa_chunks(questions: &CommonQuestions, out: &mut ChunkSet) {
    let categories: [(&str, &str, &[QaRecord]); 3] = [
        ("Behavioral", "behavioral", questions.behavioral.as_slice()),
        ("Technical", "technical", questions.technical.as_slice()),
        ("Situational", "situational", questions.situational.as_slice()),
    ];

    for (label, tag, records) in categories {
        for record in records {
            // Entries without both fields are skipped silently
            let Some((question, answer)) = record.as_pair() else {
                continue;
            };
            out.push(
                format!("{} Q&A - {}...", label, preview(question, 50)),
                ChunkKind::Interview,
                format!("Question: {}. Answer: {}", question, answer),
                tags(&[tag, "interview", "question"]),
            );
        }
    }
}

fn summary_chunk(s: &SignalSummary, out: &mut ChunkSet) {
    out.push(
        "Professional Summary & Strengths".to_string(),
        ChunkKind::Summary,
        format!(
            "Strengths: {}. Recommended for roles: {}. Unique value proposition: {}.",
            s.strengths.join(", "),
            s.recommended_for.join(", "),
            s.unique_value_proposition
        ),
        tags(&["strengths", "value", "recommendation"]),
    );
}

fn render_language(lang: &LanguageSkill) -> String {
    match lang {
        LanguageSkill::Detailed {
            language,
            proficiency,
            years,
            frameworks,
        } => format!(
            "{} ({}, {} years, frameworks: {})",
            language,
            proficiency,
            years,
            frameworks.join(", ")
        ),
        LanguageSkill::Label(label) => label.clone(),
    }
}

fn render_certification(cert: &Certification) -> String {
    match cert {
        Certification::Detailed {
            name,
            provider,
            year,
        } => format!("{} from {} ({})", name, provider, year),
        Certification::Label(label) => label.clone(),
    }
}

fn render_impact(impact: &ProjectImpact) -> String {
    match impact {
        ProjectImpact::Text(text) => text.clone(),
        ProjectImpact::Metrics(map) => map
            .iter()
            .map(|(metric, value)| format!("{}: {}", metric, render_value(value)))
            .collect::<Vec<_>>()
            .join(", "),
    }
}

fn render_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First `max_chars` characters, whole characters only
fn preview(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn tags(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn parse(json: &str) -> ProfileRecord {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_empty_profile_yields_no_chunks() {
        assert!(chunk_profile(&ProfileRecord::default()).is_empty());
    }

    #[test]
    fn test_personal_only_profile() {
        let profile = parse(
            r#"{"personal": {"name": "Ada", "title": "Engineer", "location": "Remote", "summary": "Builds systems."}}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].title, "Personal Information");
        assert_eq!(chunks[0].kind, ChunkKind::Personal);
        assert_eq!(
            chunks[0].content,
            "Name: Ada. Title: Engineer. Location: Remote. Builds systems."
        );
    }

    #[test]
    fn test_elevator_pitch_adds_second_chunk() {
        let profile = parse(
            r#"{"personal": {"name": "Ada", "elevator_pitch": "I build fast systems."}}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].title, "Elevator Pitch");
        assert_eq!(chunks[1].content, "I build fast systems.");
    }

    #[test]
    fn test_contact_chunk() {
        let profile = parse(
            r#"{"personal": {"name": "Ada", "contact": {"email": "ada@example.com", "github": "ada"}}}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1].kind, ChunkKind::Contact);
        assert_eq!(
            chunks[1].content,
            "Email: ada@example.com. Phone: . LinkedIn: . GitHub: ada."
        );
    }

    #[test]
    fn test_experience_chunk_count_formula() {
        // 2 employers, 3 + 1 achievements, one employer with a skills list:
        // 2 + 4 + 1 = 7 chunks
        let profile = parse(
            r#"{"experience": [
                {"company": "Acme", "title": "Dev", "duration": "2y",
                 "achievements_star": [
                    {"situation": "s", "task": "t", "action": "a", "result": "r"},
                    {"situation": "s", "task": "t", "action": "a", "result": "r"},
                    {"situation": "s", "task": "t", "action": "a", "result": "r"}],
                 "technical_skills_used": ["Rust", "Postgres"]},
                {"company": "Globex",
                 "achievements_star": [
                    {"situation": "s", "task": "t", "action": "a", "result": "r"}],
                 "technical_skills_used": []}
            ]}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 7);

        let experience = chunks
            .iter()
            .filter(|c| c.kind == ChunkKind::Experience)
            .count();
        let achievements = chunks
            .iter()
            .filter(|c| c.kind == ChunkKind::Achievement)
            .count();
        let skill_lists = chunks.iter().filter(|c| c.kind == ChunkKind::Skills).count();
        assert_eq!((experience, achievements, skill_lists), (2, 4, 1));
    }

    #[test]
    fn test_achievement_chunk_scoped_to_employer() {
        let profile = parse(
            r#"{"experience": [{"company": "Acme", "achievements_star": [
                {"situation": "outage", "task": "fix", "action": "patched", "result": "uptime"}]}]}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks[1].title, "Achievement at Acme #1");
        assert_eq!(
            chunks[1].content,
            "At Acme: Situation: outage. Task: fix. Action: patched. Result: uptime."
        );
        assert!(chunks[1].tags.contains(&"acme".to_string()));
    }

    #[test]
    fn test_skills_subcategories() {
        let profile = parse(
            r#"{"skills": {"technical": {
                "programming_languages": [
                    {"language": "Rust", "proficiency": "advanced", "years": 4, "frameworks": ["tokio", "axum"]},
                    "Python"],
                "frontend": ["React"],
                "databases": ["Postgres", "Redis"]
            }, "soft_skills": ["mentoring"]}}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 4);
        assert_eq!(
            chunks[0].content,
            "Programming languages: Rust (advanced, 4 years, frameworks: tokio, axum); Python."
        );
        assert_eq!(chunks[1].content, "Frontend technologies: React.");
        assert_eq!(chunks[2].content, "Database technologies: Postgres, Redis.");
        assert_eq!(chunks[3].content, "Soft skills: mentoring.");
    }

    #[test]
    fn test_certifications_structured_and_plain() {
        let profile = parse(
            r#"{"skills": {"certifications": [
                {"name": "CKA", "provider": "CNCF", "year": 2023},
                "AWS Solutions Architect"]}}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].kind, ChunkKind::Certification);
        assert_eq!(
            chunks[0].content,
            "Certifications and training: CKA from CNCF (2023); AWS Solutions Architect."
        );
    }

    #[test]
    fn test_education_coursework_clause_only_when_listed() {
        let bare = parse(r#"{"education": {"degree": "BSc", "university": "MIT"}}"#);
        let chunks = chunk_profile(&bare);
        assert!(!chunks[0].content.contains("coursework"));

        let with_coursework = parse(
            r#"{"education": {"degree": "BSc", "relevant_coursework": ["Compilers", "Networks"]}}"#,
        );
        let chunks = chunk_profile(&with_coursework);
        assert!(chunks[0]
            .content
            .ends_with(" Relevant coursework: Compilers, Networks."));
    }

    #[test]
    fn test_project_with_metric_map_impact() {
        let profile = parse(
            r#"{"projects_portfolio": [{
                "name": "Scheduler", "type": "tool", "description": "Automates rosters",
                "technologies": ["Rust"],
                "impact": {"users_saved_hours": 500}}]}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].content.ends_with("Impact: users_saved_hours: 500."));
    }

    #[test]
    fn test_project_with_text_impact_and_features() {
        let profile = parse(
            r#"{"projects_portfolio": [{
                "name": "Bot", "type": "demo", "description": "Chat bot",
                "technologies": ["Rust", "Tokio"],
                "key_features": ["streaming", "retry"],
                "impact": "Adopted by two teams"}]}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(
            chunks[0].content,
            "Project: Bot. Type: demo. Description: Chat bot. Technologies: Rust, Tokio. \
             Key features: streaming, retry. Impact: Adopted by two teams."
        );
        assert_eq!(chunks[0].tags, vec!["rust", "tokio"]);
    }

    #[test]
    fn test_interview_qa_filtering() {
        let profile = parse(
            r#"{"interview_prep": {"common_questions": {
                "behavioral": [
                    {"question": "Tell me about a conflict", "answer": "I listened first."},
                    {"question": "No answer here"},
                    "not a mapping"],
                "technical": [{"question": "Why Rust?", "answer": "Ownership."}]
            }}}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].title.starts_with("Behavioral Q&A - "));
        assert_eq!(
            chunks[0].content,
            "Question: Tell me about a conflict. Answer: I listened first."
        );
        assert!(chunks[1].title.starts_with("Technical Q&A - "));
    }

    #[test]
    fn test_weakness_mitigation_chunk() {
        let profile = parse(
            r#"{"interview_prep": {"weakness_mitigation": [
                {"weakness": "Delegation", "mitigation": "Weekly check-ins"}]}}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].title, "Weakness & Mitigation - Delegation...");
        assert_eq!(chunks[0].content, "Weakness: Delegation. Mitigation: Weekly check-ins");
    }

    #[test]
    fn test_summary_chunk() {
        let profile = parse(
            r#"{"interview_signal_summary": {
                "strengths": ["systems thinking"],
                "recommended_for": ["platform roles"],
                "unique_value_proposition": "Depth plus speed."}}"#,
        );
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks[0].kind, ChunkKind::Summary);
        assert_eq!(
            chunks[0].content,
            "Strengths: systems thinking. Recommended for roles: platform roles. \
             Unique value proposition: Depth plus speed."
        );
    }

    #[test]
    fn test_ids_unique_and_sequential() {
        let profile = parse(
            r#"{"personal": {"name": "Ada", "elevator_pitch": "Pitch"},
                "career_goals": {"short_term": "Ship"}}"#,
        );
        let chunks = chunk_profile(&profile);
        let ids: BTreeSet<&str> = chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), chunks.len());
        assert_eq!(chunks[0].id, "chunk_1");
        assert_eq!(chunks[2].id, "chunk_3");
    }

    #[test]
    fn test_chunking_idempotent_on_content() {
        let profile = parse(
            r#"{"personal": {"name": "Ada", "title": "Engineer"},
                "experience": [{"company": "Acme", "technical_skills_used": ["Rust"]}],
                "career_goals": {"short_term": "Ship", "learning_focus": ["distributed systems"]}}"#,
        );
        let first: Vec<_> = chunk_profile(&profile)
            .into_iter()
            .map(|c| (c.title, c.kind, c.content))
            .collect();
        let second: Vec<_> = chunk_profile(&profile)
            .into_iter()
            .map(|c| (c.title, c.kind, c.content))
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_every_chunk_has_nonempty_title() {
        let profile = parse(
            r#"{"personal": {"name": ""},
                "salary_location": {},
                "experience": [{}],
                "education": {},
                "career_goals": {}}"#,
        );
        for chunk in chunk_profile(&profile) {
            assert!(!chunk.title.is_empty());
        }
    }

    #[test]
    fn test_embedding_text_and_metadata() {
        let profile = parse(r#"{"personal": {"name": "Ada"}}"#);
        let chunks = chunk_profile(&profile);
        let chunk = &chunks[0];
        assert!(chunk
            .embedding_text()
            .starts_with("Personal Information: Name: Ada."));

        let metadata = chunk.metadata();
        assert_eq!(metadata["title"], "Personal Information");
        assert_eq!(metadata["type"], "personal");
        assert_eq!(metadata["content"], chunk.content.as_str());
        assert!(metadata["tags"].is_array());
    }

    #[test]
    fn test_question_preview_respects_char_boundaries() {
        let long_question = "é".repeat(80);
        let profile: ProfileRecord = serde_json::from_value(serde_json::json!({
            "interview_prep": {"common_questions": {"behavioral": [
                {"question": long_question, "answer": "a"}]}}
        }))
        .unwrap();
        let chunks = chunk_profile(&profile);
        assert_eq!(chunks[0].title, format!("Behavioral Q&A - {}...", "é".repeat(50)));
    }
}
