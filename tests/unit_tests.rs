// Unit tests for AlumLink Algo

use alumlink_algo::core::{ModerationGate, calculate_match_score};
use alumlink_algo::models::{AlumniProfile, ScoringPoints, StudentProfile};
use alumlink_algo::services::SentimentAnalyzer;

fn student(
    skills: &[&str],
    interests: &[&str],
    career_goal: Option<&str>,
    industries: &[&str],
) -> StudentProfile {
    StudentProfile {
        user_id: "student".to_string(),
        name: "Student".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        interests: interests.iter().map(|s| s.to_string()).collect(),
        career_goal: career_goal.map(|g| g.to_string()),
        industry_interests: industries.iter().map(|s| s.to_string()).collect(),
        is_active: true,
        created_at: None,
    }
}

fn alumni(skills: &[&str], current_job: Option<&str>) -> AlumniProfile {
    AlumniProfile {
        user_id: "alumni".to_string(),
        name: "Alumni".to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        current_job: current_job.map(|j| j.to_string()),
        mentorship_availability: Some(true),
        is_active: true,
        created_at: None,
    }
}

#[test]
fn test_disjoint_profiles_score_zero() {
    let s = student(&["haskell"], &["compilers"], Some("researcher"), &["academia"]);
    let a = alumni(&["sales"], Some("Account Executive"));

    let (score, shared) = calculate_match_score(&s, &a, &ScoringPoints::default());
    assert_eq!(score, 0);
    assert!(shared.is_empty());
}

#[test]
fn test_skill_overlap_ignores_case() {
    let s = student(&["python"], &[], None, &[]);
    let a = alumni(&["Python"], None);

    let (score, _) = calculate_match_score(&s, &a, &ScoringPoints::default());
    assert_eq!(score, 15);
}

#[test]
fn test_career_goal_substring_scores_once() {
    let s = student(&[], &[], Some("data scientist"), &["data"]);
    let a = alumni(&[], Some("Senior Data Scientist"));

    // Rule 3 fires once at +25; the industry interest "data" also appears in
    // the job title, which is rule 4's separate +10, not a second +25
    let (score, _) = calculate_match_score(&s, &a, &ScoringPoints::default());
    assert_eq!(score, 35);
}

#[test]
fn test_empty_collections_contribute_nothing() {
    let s = student(&[], &[], None, &[]);
    let a = alumni(&[], None);

    let (score, shared) = calculate_match_score(&s, &a, &ScoringPoints::default());
    assert_eq!(score, 0);
    assert!(shared.is_empty());
}

#[test]
fn test_reference_pair_scores_fifty() {
    let s = student(
        &["React", "Node"],
        &["AI"],
        Some("backend engineer"),
        &["fintech"],
    );
    let a = alumni(
        &["react", "python"],
        Some("Backend Engineer at a fintech startup"),
    );

    let (score, shared) = calculate_match_score(&s, &a, &ScoringPoints::default());
    assert_eq!(score, 50);
    assert_eq!(shared, vec!["React"]);
}

#[test]
fn test_interest_overlap_counts_per_distinct_interest() {
    let s = student(&[], &["sql", "go", "sql"], None, &[]);
    let a = alumni(&["SQL", "Go", "java"], None);

    let (score, _) = calculate_match_score(&s, &a, &ScoringPoints::default());
    assert_eq!(score, 20);
}

#[test]
fn test_gate_blocks_strongly_negative_score() {
    let gate = ModerationGate::with_default_threshold();
    assert!(gate.is_blocked(-0.5));
}

#[test]
fn test_gate_allows_positive_score() {
    let gate = ModerationGate::with_default_threshold();
    assert!(!gate.is_blocked(0.2));
}

#[test]
fn test_gate_allows_exact_threshold() {
    let gate = ModerationGate::with_default_threshold();
    assert!(!gate.is_blocked(-0.1));
}

#[test]
fn test_analyzer_flags_hostile_text() {
    let analyzer = SentimentAnalyzer::new();
    let gate = ModerationGate::with_default_threshold();

    let comparative = analyzer.comparative("I hate this horrible awful useless platform");
    assert!(gate.is_blocked(comparative));
}

#[test]
fn test_analyzer_passes_friendly_text() {
    let analyzer = SentimentAnalyzer::new();
    let gate = ModerationGate::with_default_threshold();

    let comparative = analyzer.comparative("Huge thanks to my mentor, this community is wonderful");
    assert!(!gate.is_blocked(comparative));
}
