//! Chunking-model tests against the public API
//!
//! Verifies the per-section chunk counts, determinism, and metadata
//! invariants for a realistic multi-section profile.

use std::collections::BTreeSet;

use profiletwin::{chunk_profile, ChunkKind, ProfileRecord};

fn sample_profile() -> ProfileRecord {
    serde_json::from_str(
        r#"{
        "personal": {
            "name": "Ada Moreno",
            "title": "Senior Systems Engineer",
            "location": "Lisbon",
            "summary": "Builds resilient backend platforms.",
            "elevator_pitch": "I turn flaky systems into boring ones.",
            "contact": {"email": "ada@example.com", "linkedin": "ada-moreno", "github": "adam"}
        },
        "salary_location": {
            "salary_expectations": "Market rate",
            "location_preferences": ["Lisbon", "Remote"],
            "remote_experience": "6 years",
            "work_authorization": "EU citizen"
        },
        "experience": [
            {
                "company": "Acme",
                "title": "Staff Engineer",
                "duration": "2019-2024",
                "company_context": "Logistics platform",
                "team_structure": "Team of 8",
                "achievements_star": [
                    {"situation": "Nightly batch failing", "task": "Stabilize it",
                     "action": "Rewrote the scheduler", "result": "Zero missed runs in a year"},
                    {"situation": "Slow deploys", "task": "Speed them up",
                     "action": "Parallelized CI", "result": "Cut deploy time 4x"}
                ],
                "technical_skills_used": ["Rust", "Postgres", "Kafka"]
            },
            {
                "company": "Globex",
                "title": "Backend Engineer",
                "duration": "2016-2019",
                "achievements_star": [
                    {"situation": "Monolith outgrown", "task": "Split services",
                     "action": "Extracted billing", "result": "Independent releases"}
                ],
                "technical_skills_used": []
            }
        ],
        "skills": {
            "technical": {
                "programming_languages": [
                    {"language": "Rust", "proficiency": "expert", "years": 6, "frameworks": ["tokio", "axum"]},
                    "Python"
                ],
                "backend": ["gRPC", "REST"],
                "databases": ["Postgres"],
                "cloud_platforms": ["AWS"]
            },
            "soft_skills": ["mentoring", "incident command"],
            "certifications": [{"name": "CKA", "provider": "CNCF", "year": 2022}]
        },
        "education": {
            "degree": "MSc",
            "specialisation": "Distributed Systems",
            "university": "IST Lisbon",
            "graduation_year": 2015,
            "location": "Lisbon",
            "relevant_coursework": ["Consensus", "Databases"]
        },
        "projects_portfolio": [
            {
                "name": "Rosterer",
                "type": "open source",
                "description": "Shift scheduling service",
                "technologies": ["Rust", "Postgres"],
                "key_features": ["constraint solver", "calendar sync"],
                "impact": {"users_saved_hours": 500}
            },
            {
                "name": "Tracer",
                "type": "internal tool",
                "description": "Request tracing dashboard",
                "technologies": ["TypeScript"],
                "impact": "Cut incident triage time in half"
            }
        ],
        "career_goals": {
            "short_term": "Lead a platform team",
            "long_term": "Principal engineer",
            "learning_focus": ["formal methods"],
            "industries_interested": ["infrastructure", "fintech"]
        },
        "interview_prep": {
            "common_questions": {
                "behavioral": [
                    {"question": "Tell me about a disagreement", "answer": "I brought data."},
                    {"question": "Half-filled entry"}
                ],
                "technical": [
                    {"question": "How does Raft work?", "answer": "Leader election plus a replicated log."}
                ],
                "situational": []
            },
            "weakness_mitigation": [
                {"weakness": "Over-polishing", "mitigation": "Timebox and ship"}
            ]
        },
        "interview_signal_summary": {
            "strengths": ["calm under pressure", "deep systems knowledge"],
            "recommended_for": ["platform teams"],
            "unique_value_proposition": "Reliability instincts with product empathy."
        }
    }"#,
    )
    .unwrap()
}

#[test]
fn test_experience_chunk_count_matches_formula() {
    let chunks = chunk_profile(&sample_profile());

    // 2 employers + 3 achievements + 1 employer with a non-empty skills list
    let experience = chunks
        .iter()
        .filter(|c| c.kind == ChunkKind::Experience)
        .count();
    let achievements = chunks
        .iter()
        .filter(|c| c.kind == ChunkKind::Achievement)
        .count();
    let skills_used = chunks
        .iter()
        .filter(|c| c.title.starts_with("Skills Used at "))
        .count();

    assert_eq!(experience, 2);
    assert_eq!(achievements, 3);
    assert_eq!(skills_used, 1);
}

#[test]
fn test_full_profile_chunk_inventory() {
    let chunks = chunk_profile(&sample_profile());

    // personal + pitch + contact + salary                      = 4
    // experience: 2 + 3 + 1                                    = 6
    // skills: languages + backend + databases + cloud + soft   = 5
    // certifications + education                               = 2
    // projects                                                 = 2
    // goals                                                    = 1
    // interview: 2 Q&A (one behavioral entry skipped) + 1 weakness = 3
    // summary                                                  = 1
    assert_eq!(chunks.len(), 24);
}

#[test]
fn test_half_filled_qa_entry_is_skipped() {
    let chunks = chunk_profile(&sample_profile());
    assert!(chunks
        .iter()
        .all(|c| !c.title.contains("Half-filled entry")));
}

#[test]
fn test_all_chunks_have_nonempty_title_and_closed_kind() {
    for chunk in chunk_profile(&sample_profile()) {
        assert!(!chunk.title.is_empty());
        // as_str is total over the closed set; a new kind would fail here
        assert!(!chunk.kind.as_str().is_empty());
        assert!(!chunk.content.is_empty());
    }
}

#[test]
fn test_ids_unique_within_pass() {
    let chunks = chunk_profile(&sample_profile());
    let ids: BTreeSet<&str> = chunks.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids.len(), chunks.len());
}

#[test]
fn test_chunking_is_idempotent_on_content() {
    let profile = sample_profile();
    let snapshot = |record: &ProfileRecord| -> Vec<(String, String, String)> {
        chunk_profile(record)
            .into_iter()
            .map(|c| (c.title, c.kind.as_str().to_string(), c.content))
            .collect()
    };
    assert_eq!(snapshot(&profile), snapshot(&profile));
}

#[test]
fn test_metric_map_impact_rendering() {
    let chunks = chunk_profile(&sample_profile());
    let rosterer = chunks
        .iter()
        .find(|c| c.title == "Project - Rosterer")
        .unwrap();
    assert!(rosterer.content.ends_with("Impact: users_saved_hours: 500."));
}

#[test]
fn test_text_impact_rendering() {
    let chunks = chunk_profile(&sample_profile());
    let tracer = chunks
        .iter()
        .find(|c| c.title == "Project - Tracer")
        .unwrap();
    assert!(tracer
        .content
        .ends_with("Impact: Cut incident triage time in half."));
}

#[test]
fn test_tags_are_lowercase() {
    for chunk in chunk_profile(&sample_profile()) {
        for tag in &chunk.tags {
            assert_eq!(tag, &tag.to_lowercase(), "tag {:?} in {:?}", tag, chunk.title);
        }
    }
}
