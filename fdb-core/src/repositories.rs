// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::entities::*;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait CourseRepo {
    fn create_course(&self, course: &Course) -> Result<()>;
    fn try_get_course(&self, id: &str) -> Result<Option<Course>>;

    fn course_exists(&self, id: &str) -> Result<bool> {
        Ok(self.try_get_course(id)?.is_some())
    }
}

pub trait InstructorRepo {
    fn create_instructor(&self, instructor: &Instructor) -> Result<()>;
    fn load_instructors_of_course(&self, course_id: &str) -> Result<Vec<Instructor>>;

    // Registrations are course-scoped: being an instructor
    // of another course does not count.
    fn is_instructor_of_course(&self, email: &str, course_id: &str) -> Result<bool> {
        Ok(self
            .load_instructors_of_course(course_id)?
            .iter()
            .any(|i| i.email == email))
    }
}

pub trait FeedbackSessionRepo {
    fn create_feedback_session(&self, session: &FeedbackSession) -> Result<()>;
    fn try_get_feedback_session(
        &self,
        course_id: &str,
        name: &str,
    ) -> Result<Option<FeedbackSession>>;
}

pub trait FeedbackQuestionRepo {
    fn create_feedback_question(&self, question: &FeedbackQuestion) -> Result<()>;
    fn try_get_feedback_question(&self, id: &str) -> Result<Option<FeedbackQuestion>>;
}

pub trait FeedbackResponseRepo {
    fn create_feedback_response(&self, response: &FeedbackResponse) -> Result<()>;
    fn try_get_feedback_response(&self, id: &str) -> Result<Option<FeedbackResponse>>;
}

pub trait FeedbackResponseCommentRepo {
    // Conditional insert: Fails with `Error::AlreadyExists` if a comment
    // from the same giver on the same response has already been stored.
    // The comment must carry an id.
    fn create_comment(&self, comment: &FeedbackResponseComment) -> Result<()>;

    // Overwrites the record with the same id or fails with `Error::NotFound`.
    fn update_comment(&self, comment: &FeedbackResponseComment) -> Result<()>;

    // Ok(true)  => Found and deleted
    // Ok(false) => Nothing to delete
    fn delete_comment(&self, id: &str) -> Result<bool>;

    fn try_get_comment(&self, id: &str) -> Result<Option<FeedbackResponseComment>>;
    fn try_get_comment_by_key(&self, key: &CommentKey) -> Result<Option<FeedbackResponseComment>>;
    fn find_comment_by_response_and_giver(
        &self,
        response_id: &str,
        giver_email: &str,
    ) -> Result<Option<FeedbackResponseComment>>;

    // Ordered by creation time
    fn load_comments_of_session(
        &self,
        course_id: &str,
        session_name: &str,
    ) -> Result<Vec<FeedbackResponseComment>>;

    /// Idempotent write.
    ///
    /// Creates the comment if it has no id yet or if no record with
    /// its id exists, otherwise overwrites the stored record.
    /// Returns the comment as it has been stored.
    fn put_comment(&self, mut comment: FeedbackResponseComment) -> Result<FeedbackResponseComment> {
        let stored = match &comment.id {
            Some(id) => self.try_get_comment(id.as_str())?.is_some(),
            None => false,
        };
        if stored {
            self.update_comment(&comment)?;
        } else {
            if comment.id.is_none() {
                comment.id = Some(Id::new());
            }
            self.create_comment(&comment)?;
        }
        Ok(comment)
    }
}
