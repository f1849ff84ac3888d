// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{StudentProfile, AlumniProfile, RankedMentor, Violation, ScoringPoints};
pub use requests::{FindMentorsRequest, SubmitPostRequest, SubmitCommentRequest};
pub use responses::{FindMentorsResponse, SubmissionResponse, ViolationsResponse, HealthResponse, ErrorResponse};
