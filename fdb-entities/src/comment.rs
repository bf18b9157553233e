use crate::{id::*, time::*};

/// Commentary attached by an instructor to a feedback response.
///
/// The location fields (course, session, question, response) describe
/// the full ancestor chain and are validated on every write. Only the
/// `comment_text` is expected to change after creation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackResponseComment {
    /// Assigned on first successful create, `None` before.
    pub id                    : Option<Id>,
    pub course_id             : String,
    pub feedback_session_name : String,
    pub feedback_question_id  : Id,
    pub feedback_response_id  : Id,
    pub giver_email           : String,
    pub comment_text          : String,
    pub created_at            : Timestamp,
}

impl FeedbackResponseComment {
    pub fn key(&self) -> CommentKey {
        CommentKey {
            response_id: self.feedback_response_id.clone(),
            giver_email: self.giver_email.clone(),
            created_at: self.created_at,
        }
    }

    /// Compare everything but the text.
    pub fn has_same_location(&self, other: &Self) -> bool {
        self.course_id == other.course_id
            && self.feedback_session_name == other.feedback_session_name
            && self.feedback_question_id == other.feedback_question_id
            && self.feedback_response_id == other.feedback_response_id
            && self.giver_email == other.giver_email
    }
}

/// Natural key for exact lookups.
///
/// Several comments of the same giver on the same response would only
/// be distinguishable by `created_at`.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentKey {
    pub response_id : Id,
    pub giver_email : String,
    pub created_at  : Timestamp,
}
