use crate::id::*;

/// Session names are only unique within a course.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackSession {
    pub course_id : String,
    pub name      : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackQuestion {
    pub id           : Id,
    pub course_id    : String,
    pub session_name : String,
    pub number       : u32,
    pub text         : String,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackResponse {
    pub id              : Id,
    pub question_id     : Id,
    pub giver_email     : String,
    pub recipient_email : String,
}
