use crate::repositories::*;

/// All collaborators needed by the comment use cases.
pub trait Db:
    CourseRepo
    + InstructorRepo
    + FeedbackSessionRepo
    + FeedbackQuestionRepo
    + FeedbackResponseRepo
    + FeedbackResponseCommentRepo
{
}

impl<T> Db for T where
    T: CourseRepo
        + InstructorRepo
        + FeedbackSessionRepo
        + FeedbackQuestionRepo
        + FeedbackResponseRepo
        + FeedbackResponseCommentRepo
{
}
