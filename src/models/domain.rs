use serde::{Deserialize, Serialize};

/// Student profile document with skills and career intent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(rename = "careerGoal", default)]
    pub career_goal: Option<String>,
    #[serde(rename = "industryInterests", default)]
    pub industry_interests: Vec<String>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Alumni profile document with current position and mentorship flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlumniProfile {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(rename = "currentJob", default)]
    pub current_job: Option<String>,
    #[serde(rename = "mentorshipAvailability", default)]
    pub mentorship_availability: Option<bool>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl AlumniProfile {
    /// Helper to get mentorship_availability as a bool, defaulting to false
    pub fn available(&self) -> bool {
        self.mentorship_availability.unwrap_or(false)
    }
}

fn default_true() -> bool { true }

/// Scored mentor recommendation, computed per request and never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMentor {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    #[serde(rename = "currentJob")]
    pub current_job: Option<String>,
    #[serde(rename = "matchScore")]
    pub match_score: u32,
    #[serde(rename = "sharedSkills")]
    pub shared_skills: Vec<String>,
}

/// Entry in a user's append-only violation log
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Point values for the additive match scoring rules
#[derive(Debug, Clone, Copy)]
pub struct ScoringPoints {
    pub shared_skill: u32,
    pub interest_skill: u32,
    pub career_goal: u32,
    pub industry: u32,
}

impl Default for ScoringPoints {
    fn default() -> Self {
        Self {
            shared_skill: 15,
            interest_skill: 10,
            career_goal: 25,
            industry: 10,
        }
    }
}
