use fdb_entities::comment::FeedbackResponseComment;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

pub const COURSE_ID_MAX_LENGTH: usize = 40;
pub const EMAIL_MAX_LENGTH: usize = 254;
pub const SESSION_NAME_MAX_LENGTH: usize = 38;

lazy_static! {
    static ref COURSE_ID_REGEX: Regex = Regex::new(r"^[A-Za-z0-9._$-]+$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldDefect {
    Empty,
    TooLong,
    InvalidCharacters,
    WrongFormat,
    SurroundingWhitespace,
}

impl FieldDefect {
    const fn reason(self) -> &'static str {
        match self {
            Self::Empty => "is empty",
            Self::TooLong => "is too long",
            Self::InvalidCharacters => "contains invalid characters",
            Self::WrongFormat => "is not in the correct format",
            Self::SurroundingWhitespace => "starts or ends with whitespace",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommentInvalidation {
    #[error(
        "\"{0}\" is not acceptable to feedbackdb as a Course ID because it {reason}. \
         A Course ID can contain letters, numbers, fullstops, hyphens, underscores, and dollar signs. \
         It cannot be longer than 40 characters.",
        reason = .1.reason()
    )]
    CourseId(String, FieldDefect),
    #[error(
        "\"{0}\" is not acceptable to feedbackdb as an email because it {reason}.",
        reason = .1.reason()
    )]
    GiverEmail(String, FieldDefect),
    #[error(
        "\"{0}\" is not acceptable to feedbackdb as a feedback session name because it {reason}.",
        reason = .1.reason()
    )]
    SessionName(String, FieldDefect),
    #[error("The feedback question id must not be empty.")]
    QuestionId,
    #[error("The feedback response id must not be empty.")]
    ResponseId,
    #[error("The comment text must not be empty.")]
    CommentText,
}

pub fn course_id_defect(course_id: &str) -> Option<FieldDefect> {
    if course_id.is_empty() {
        Some(FieldDefect::Empty)
    } else if course_id.chars().count() > COURSE_ID_MAX_LENGTH {
        Some(FieldDefect::TooLong)
    } else if !COURSE_ID_REGEX.is_match(course_id) {
        Some(FieldDefect::InvalidCharacters)
    } else {
        None
    }
}

pub fn email_defect(email: &str) -> Option<FieldDefect> {
    if email.is_empty() {
        Some(FieldDefect::Empty)
    } else if email.chars().count() > EMAIL_MAX_LENGTH {
        Some(FieldDefect::TooLong)
    } else if !is_valid_email(email) {
        Some(FieldDefect::WrongFormat)
    } else {
        None
    }
}

pub fn session_name_defect(name: &str) -> Option<FieldDefect> {
    if name.is_empty() {
        Some(FieldDefect::Empty)
    } else if name.chars().count() > SESSION_NAME_MAX_LENGTH {
        Some(FieldDefect::TooLong)
    } else if name.trim() != name {
        Some(FieldDefect::SurroundingWhitespace)
    } else {
        None
    }
}

impl Validate for FeedbackResponseComment {
    type Error = CommentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if let Some(defect) = course_id_defect(&self.course_id) {
            return Err(Self::Error::CourseId(self.course_id.clone(), defect));
        }
        if let Some(defect) = email_defect(&self.giver_email) {
            return Err(Self::Error::GiverEmail(self.giver_email.clone(), defect));
        }
        if let Some(defect) = session_name_defect(&self.feedback_session_name) {
            return Err(Self::Error::SessionName(
                self.feedback_session_name.clone(),
                defect,
            ));
        }
        if !self.feedback_question_id.is_valid() {
            return Err(Self::Error::QuestionId);
        }
        if !self.feedback_response_id.is_valid() {
            return Err(Self::Error::ResponseId);
        }
        if self.comment_text.trim().is_empty() {
            return Err(Self::Error::CommentText);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fdb_entities::builders::*;

    fn valid_comment() -> FeedbackResponseComment {
        FeedbackResponseComment::build()
            .course_id("idOfTypicalCourse1")
            .session_name("First feedback session")
            .question_id("q1")
            .response_id("r1")
            .giver_email("instructor1@course1.tmt")
            .text("Nice work")
            .finish()
    }

    #[test]
    fn accept_valid_comment() {
        assert!(valid_comment().validate().is_ok());
    }

    #[test]
    fn course_ids() {
        assert_eq!(None, course_id_defect("CS2103-T1.2014$_x"));
        assert_eq!(Some(FieldDefect::Empty), course_id_defect(""));
        assert_eq!(
            Some(FieldDefect::InvalidCharacters),
            course_id_defect("invalid course name")
        );
        assert_eq!(
            Some(FieldDefect::TooLong),
            course_id_defect(&"x".repeat(COURSE_ID_MAX_LENGTH + 1))
        );
        assert_eq!(None, course_id_defect(&"x".repeat(COURSE_ID_MAX_LENGTH)));
    }

    #[test]
    fn invalid_course_id_message() {
        let mut c = valid_comment();
        c.course_id = "invalid course name".into();
        let err = c.validate().unwrap_err();
        assert_eq!(
            CommentInvalidation::CourseId(
                "invalid course name".into(),
                FieldDefect::InvalidCharacters
            ),
            err
        );
        let msg = err.to_string();
        assert!(msg.contains("not acceptable to feedbackdb as a Course ID"));
        assert!(msg.contains("contains invalid characters"));
    }

    #[test]
    fn emails() {
        assert_eq!(None, email_defect("i1@c1.tmt"));
        assert_eq!(Some(FieldDefect::Empty), email_defect(""));
        assert_eq!(
            Some(FieldDefect::WrongFormat),
            email_defect("invalid giver email")
        );
    }

    #[test]
    fn session_names() {
        assert_eq!(None, session_name_defect("Private feedback session"));
        assert_eq!(
            Some(FieldDefect::SurroundingWhitespace),
            session_name_defect(" padded")
        );
        assert_eq!(
            Some(FieldDefect::TooLong),
            session_name_defect(&"s".repeat(SESSION_NAME_MAX_LENGTH + 1))
        );
    }

    #[test]
    fn reject_blank_references_and_text() {
        let mut c = valid_comment();
        c.feedback_response_id = "".into();
        assert_eq!(Err(CommentInvalidation::ResponseId), c.validate());

        let mut c = valid_comment();
        c.feedback_question_id = " ".into();
        assert_eq!(Err(CommentInvalidation::QuestionId), c.validate());

        let mut c = valid_comment();
        c.comment_text = "\n".into();
        assert_eq!(Err(CommentInvalidation::CommentText), c.validate());
    }
}
