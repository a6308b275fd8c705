//! 预导入模块，方便使用

pub use super::attendance::{
    ActiveModel as AttendanceActiveModel, Entity as Attendance, Model as AttendanceModel,
};
pub use super::feedback::{
    ActiveModel as FeedbackActiveModel, Entity as Feedback, Model as FeedbackModel,
};
pub use super::problems::{
    ActiveModel as ProblemActiveModel, Entity as Problems, Model as ProblemModel,
};
pub use super::scores::{ActiveModel as ScoreActiveModel, Entity as Scores, Model as ScoreModel};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::tags::{ActiveModel as TagActiveModel, Entity as Tags, Model as TagModel};
pub use super::teachers::{
    ActiveModel as TeacherActiveModel, Entity as Teachers, Model as TeacherModel,
};
