use std::collections::HashSet;

use crate::models::{AlumniProfile, ScoringPoints, StudentProfile};

/// Calculate a compatibility score for a student/alumni pair
///
/// Scoring rules (all string comparison is case-insensitive):
/// - +15 per skill present in both profiles
/// - +10 per student interest found in the alumni skill set
/// - +25 once if the career goal and current job contain each other
///   (either direction)
/// - +10 once if any industry interest appears in the current job title
///
/// Skill and interest lists are de-duplicated before counting, so repeated
/// entries on either side contribute a single match. Missing or empty fields
/// contribute 0 from their rule.
pub fn calculate_match_score(
    student: &StudentProfile,
    alumni: &AlumniProfile,
    points: &ScoringPoints,
) -> (u32, Vec<String>) {
    let alumni_skills = lowercase_set(&alumni.skills);

    // Rule 1: shared skills, each distinct match counted once
    let mut shared_skills = Vec::new();
    let mut seen = HashSet::new();
    for skill in &student.skills {
        let lowered = skill.to_lowercase();
        if alumni_skills.contains(&lowered) && seen.insert(lowered) {
            shared_skills.push(skill.clone());
        }
    }
    let mut score = shared_skills.len() as u32 * points.shared_skill;

    // Rule 2: student interests that show up as alumni skills
    let matched_interests = student
        .interests
        .iter()
        .map(|interest| interest.to_lowercase())
        .filter(|interest| alumni_skills.contains(interest))
        .collect::<HashSet<_>>();
    score += matched_interests.len() as u32 * points.interest_skill;

    // Rules 3 and 4 only apply when the alumni has a current job on record
    if let Some(job) = non_empty(alumni.current_job.as_deref()) {
        let job_lower = job.to_lowercase();

        // Rule 3: career goal / job title containment, either direction
        if let Some(goal) = non_empty(student.career_goal.as_deref()) {
            let goal_lower = goal.to_lowercase();
            if job_lower.contains(&goal_lower) || goal_lower.contains(&job_lower) {
                score += points.career_goal;
            }
        }

        // Rule 4: first industry interest found in the job title wins
        let industry_hit = student
            .industry_interests
            .iter()
            .filter(|industry| !industry.is_empty())
            .any(|industry| job_lower.contains(&industry.to_lowercase()));
        if industry_hit {
            score += points.industry;
        }
    }

    (score, shared_skills)
}

#[inline]
fn lowercase_set(items: &[String]) -> HashSet<String> {
    items.iter().map(|item| item.to_lowercase()).collect()
}

#[inline]
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(skills: &[&str], interests: &[&str], goal: Option<&str>, industries: &[&str]) -> StudentProfile {
        StudentProfile {
            user_id: "student_1".to_string(),
            name: "Test Student".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            interests: interests.iter().map(|s| s.to_string()).collect(),
            career_goal: goal.map(|g| g.to_string()),
            industry_interests: industries.iter().map(|s| s.to_string()).collect(),
            is_active: true,
            created_at: None,
        }
    }

    fn alumni(skills: &[&str], job: Option<&str>) -> AlumniProfile {
        AlumniProfile {
            user_id: "alumni_1".to_string(),
            name: "Test Alumni".to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            current_job: job.map(|j| j.to_string()),
            mentorship_availability: Some(true),
            is_active: true,
            created_at: None,
        }
    }

    #[test]
    fn test_no_overlap_scores_zero() {
        let s = student(&["Rust"], &["Go"], Some("pilot"), &["aviation"]);
        let a = alumni(&["painting"], Some("Chef"));

        let (score, shared) = calculate_match_score(&s, &a, &ScoringPoints::default());
        assert_eq!(score, 0);
        assert!(shared.is_empty());
    }

    #[test]
    fn test_skill_match_is_case_insensitive() {
        let s = student(&["python"], &[], None, &[]);
        let a = alumni(&["Python"], None);

        let (score, shared) = calculate_match_score(&s, &a, &ScoringPoints::default());
        assert_eq!(score, 15);
        assert_eq!(shared, vec!["python"]);
    }

    #[test]
    fn test_duplicate_skills_count_once() {
        let s = student(&["java", "Java", "JAVA"], &[], None, &[]);
        let a = alumni(&["java", "java"], None);

        let (score, shared) = calculate_match_score(&s, &a, &ScoringPoints::default());
        assert_eq!(score, 15);
        assert_eq!(shared, vec!["java"]);
    }

    #[test]
    fn test_interest_found_in_alumni_skills() {
        let s = student(&[], &["machine learning"], None, &[]);
        let a = alumni(&["Machine Learning", "sql"], None);

        let (score, _) = calculate_match_score(&s, &a, &ScoringPoints::default());
        assert_eq!(score, 10);
    }

    #[test]
    fn test_career_goal_substring_both_directions() {
        let points = ScoringPoints::default();

        let s = student(&[], &[], Some("data scientist"), &[]);
        let a = alumni(&[], Some("Senior Data Scientist"));
        let (score, _) = calculate_match_score(&s, &a, &points);
        assert_eq!(score, 25);

        // Reverse containment also qualifies
        let s = student(&[], &[], Some("Senior Backend Engineer at Acme"), &[]);
        let a = alumni(&[], Some("backend engineer"));
        let (score, _) = calculate_match_score(&s, &a, &points);
        assert_eq!(score, 25);
    }

    #[test]
    fn test_industry_bonus_applied_once() {
        let s = student(&[], &[], None, &["fintech", "startup"]);
        let a = alumni(&[], Some("CTO at a fintech startup"));

        // Both industries appear in the job title, bonus is still +10
        let (score, _) = calculate_match_score(&s, &a, &ScoringPoints::default());
        assert_eq!(score, 10);
    }

    #[test]
    fn test_missing_job_skips_text_rules() {
        let s = student(&[], &[], Some("engineer"), &["tech"]);
        let a = alumni(&[], None);

        let (score, _) = calculate_match_score(&s, &a, &ScoringPoints::default());
        assert_eq!(score, 0);
    }

    #[test]
    fn test_full_rule_combination() {
        let s = student(
            &["React", "Node"],
            &["AI"],
            Some("backend engineer"),
            &["fintech"],
        );
        let a = alumni(&["react", "python"], Some("Backend Engineer at a fintech startup"));

        let (score, shared) = calculate_match_score(&s, &a, &ScoringPoints::default());
        // 15 (react) + 25 (career goal) + 10 (fintech)
        assert_eq!(score, 50);
        assert_eq!(shared, vec!["React"]);
    }
}
