pub mod grading;
pub mod roster;
pub mod scoring;
pub mod teachers;

pub use grading::GradingService;
pub use roster::RosterService;
pub use scoring::ScoringService;
pub use teachers::TeacherService;
