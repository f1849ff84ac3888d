use crate::models::{AlumniProfile, RankedMentor, ScoringPoints, StudentProfile};
use crate::core::scoring::calculate_match_score;

/// Result of a ranking pass
#[derive(Debug)]
pub struct RankResult {
    pub mentors: Vec<RankedMentor>,
    pub total_candidates: usize,
}

/// Mentor ranking orchestrator
///
/// # Pipeline Stages
/// 1. Eligibility filter (active, mentorship-available)
/// 2. Scoring against the student profile
/// 3. Drop zero-score candidates
/// 4. Stable sort by score, truncate to the result limit
#[derive(Debug, Clone)]
pub struct MentorMatcher {
    points: ScoringPoints,
}

impl MentorMatcher {
    pub fn new(points: ScoringPoints) -> Self {
        Self { points }
    }

    pub fn with_default_points() -> Self {
        Self {
            points: ScoringPoints::default(),
        }
    }

    /// Rank alumni candidates for a student
    ///
    /// # Arguments
    /// * `student` - The requesting student's profile
    /// * `candidates` - Alumni profiles fetched from the document store
    /// * `limit` - Maximum number of mentors to return
    ///
    /// # Returns
    /// RankResult with scored mentors in descending score order. Ties keep
    /// their fetch order, so repeated calls over the same candidate list
    /// produce identical output.
    pub fn rank_mentors(
        &self,
        student: &StudentProfile,
        candidates: Vec<AlumniProfile>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = candidates.len();

        let mut mentors: Vec<RankedMentor> = candidates
            .into_iter()
            .filter(|alumni| alumni.is_active && alumni.available())
            .filter_map(|alumni| {
                let (score, shared_skills) =
                    calculate_match_score(student, &alumni, &self.points);

                // Zero-score candidates never appear in the results
                if score > 0 {
                    Some(RankedMentor {
                        user_id: alumni.user_id,
                        name: alumni.name,
                        current_job: alumni.current_job,
                        match_score: score,
                        shared_skills,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Vec::sort_by is stable, so equal scores retain fetch order
        mentors.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        mentors.truncate(limit);

        RankResult {
            mentors,
            total_candidates,
        }
    }
}

impl Default for MentorMatcher {
    fn default() -> Self {
        Self::with_default_points()
    }
}
