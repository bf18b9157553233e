use crate::{entities::*, repositories::*};
use thiserror::Error;

/// The first broken link in the chain
/// course -> giver -> session -> question -> response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HierarchyViolation {
    #[error("Trying to create feedback response comments for a course that does not exist.")]
    CourseNotFound { course_id: String },
    #[error("User {giver_email} is not a registered instructor for course {course_id}.")]
    GiverNotInstructor {
        giver_email: String,
        course_id: String,
    },
    #[error("Feedback session {session_name} is not a session for course {course_id}.")]
    SessionNotInCourse {
        session_name: String,
        course_id: String,
    },
    #[error(
        "Feedback question of id {question_id} is not a question for session {session_name}."
    )]
    QuestionNotInSession {
        question_id: Id,
        session_name: String,
    },
    #[error(
        "Feedback response of id {response_id} is not a response for question of id {question_id}."
    )]
    ResponseNotInQuestion { response_id: Id, question_id: Id },
}

#[derive(Debug, Error)]
pub enum HierarchyError {
    #[error(transparent)]
    Violation(#[from] HierarchyViolation),
    #[error(transparent)]
    Repo(#[from] Error),
}

type Result = std::result::Result<(), HierarchyError>;

/// Verify that the comment references a consistent chain of
/// existing ancestors and that the giver may comment on it.
///
/// The checks run strictly in order and stop at the first failure,
/// because each one relies on the parent confirmed by its predecessor.
pub fn validate_comment_hierarchy<R>(repo: &R, comment: &FeedbackResponseComment) -> Result
where
    R: CourseRepo
        + InstructorRepo
        + FeedbackSessionRepo
        + FeedbackQuestionRepo
        + FeedbackResponseRepo,
{
    check_course(repo, comment)?;
    check_giver(repo, comment)?;
    check_session(repo, comment)?;
    check_question(repo, comment)?;
    check_response(repo, comment)?;
    Ok(())
}

fn check_course<R: CourseRepo>(repo: &R, c: &FeedbackResponseComment) -> Result {
    if !repo.course_exists(&c.course_id)? {
        return Err(HierarchyViolation::CourseNotFound {
            course_id: c.course_id.clone(),
        }
        .into());
    }
    Ok(())
}

fn check_giver<R: InstructorRepo>(repo: &R, c: &FeedbackResponseComment) -> Result {
    if !repo.is_instructor_of_course(&c.giver_email, &c.course_id)? {
        return Err(HierarchyViolation::GiverNotInstructor {
            giver_email: c.giver_email.clone(),
            course_id: c.course_id.clone(),
        }
        .into());
    }
    Ok(())
}

fn check_session<R: FeedbackSessionRepo>(repo: &R, c: &FeedbackResponseComment) -> Result {
    let session = repo.try_get_feedback_session(&c.course_id, &c.feedback_session_name)?;
    if session.is_none() {
        return Err(HierarchyViolation::SessionNotInCourse {
            session_name: c.feedback_session_name.clone(),
            course_id: c.course_id.clone(),
        }
        .into());
    }
    Ok(())
}

fn check_question<R: FeedbackQuestionRepo>(repo: &R, c: &FeedbackResponseComment) -> Result {
    let belongs_to_session = repo
        .try_get_feedback_question(c.feedback_question_id.as_str())?
        .map(|q| q.course_id == c.course_id && q.session_name == c.feedback_session_name)
        .unwrap_or(false);
    if !belongs_to_session {
        return Err(HierarchyViolation::QuestionNotInSession {
            question_id: c.feedback_question_id.clone(),
            session_name: c.feedback_session_name.clone(),
        }
        .into());
    }
    Ok(())
}

fn check_response<R: FeedbackResponseRepo>(repo: &R, c: &FeedbackResponseComment) -> Result {
    let belongs_to_question = repo
        .try_get_feedback_response(c.feedback_response_id.as_str())?
        .map(|r| r.question_id == c.feedback_question_id)
        .unwrap_or(false);
    if !belongs_to_question {
        return Err(HierarchyViolation::ResponseNotInQuestion {
            response_id: c.feedback_response_id.clone(),
            question_id: c.feedback_question_id.clone(),
        }
        .into());
    }
    Ok(())
}
