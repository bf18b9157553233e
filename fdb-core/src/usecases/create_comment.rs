use super::{
    prelude::*,
    resolve_comment::resolve_existing_comment,
    validate_hierarchy::validate_comment_hierarchy,
};
use crate::{repositories::Error as RepoError, util::validate::Validate};

#[derive(Debug, Clone)]
pub enum Storable {
    /// No comment of this giver on this response exists yet.
    New(FeedbackResponseComment),
    /// The stored comment with its text replaced.
    Merged(FeedbackResponseComment),
}

impl Storable {
    pub fn comment(&self) -> &FeedbackResponseComment {
        match self {
            Self::New(c) | Self::Merged(c) => c,
        }
    }
}

pub fn prepare_new_comment<R: Db>(repo: &R, candidate: FeedbackResponseComment) -> Result<Storable> {
    validate_comment_hierarchy(repo, &candidate).map_err(|err| {
        log::warn!("Rejecting new feedback response comment: {err}");
        err.into_create_error()
    })?;
    // Only reached with an existing ancestor chain
    candidate.validate()?;
    let storable = match resolve_existing_comment(repo, &candidate)? {
        Some(existing) => Storable::Merged(merge_text(existing, candidate.comment_text)),
        None => Storable::New(FeedbackResponseComment {
            id: Some(Id::new()),
            created_at: Timestamp::now(),
            ..candidate
        }),
    };
    Ok(storable)
}

pub fn store_new_comment<R: Db>(repo: &R, storable: Storable) -> Result<FeedbackResponseComment> {
    match storable {
        Storable::New(comment) => match repo.create_comment(&comment) {
            Ok(()) => {
                log::info!(
                    "Created comment {:?} of {} on response {}",
                    comment.id,
                    comment.giver_email,
                    comment.feedback_response_id
                );
                Ok(comment)
            }
            Err(RepoError::AlreadyExists) => {
                // Another writer stored a comment for the same
                // (response, giver) pair in the meantime.
                let existing = resolve_existing_comment(repo, &comment)?
                    .ok_or(RepoError::NotFound)?;
                log::info!(
                    "Merging concurrently created comment into {:?}",
                    existing.id
                );
                let merged = merge_text(existing, comment.comment_text);
                repo.update_comment(&merged)?;
                Ok(merged)
            }
            Err(err) => Err(err.into()),
        },
        Storable::Merged(comment) => {
            log::info!("Updating existing comment {:?}", comment.id);
            repo.update_comment(&comment)?;
            Ok(comment)
        }
    }
}

/// Validate and store a comment, merging it into the stored
/// comment of the same giver on the same response if there is one.
pub fn create_comment<R: Db>(
    repo: &R,
    candidate: FeedbackResponseComment,
) -> Result<FeedbackResponseComment> {
    let storable = prepare_new_comment(repo, candidate)?;
    store_new_comment(repo, storable)
}

fn merge_text(existing: FeedbackResponseComment, text: String) -> FeedbackResponseComment {
    FeedbackResponseComment {
        comment_text: text,
        ..existing
    }
}

#[cfg(test)]
mod tests {
    use super::super::{tests::*, validate_hierarchy::HierarchyViolation, ParameterError};
    use super::*;

    fn assert_rejected_as_missing(db: &MockDb, c: FeedbackResponseComment, expected_msg: &str) {
        match create_comment(db, c) {
            Err(err @ Error::EntityDoesNotExist(_)) => assert_eq!(expected_msg, err.to_string()),
            res => panic!("unexpected result: {res:?}"),
        }
        assert!(db.comments.borrow().is_empty());
    }

    #[test]
    fn create_for_non_existing_course() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.course_id = "no-such-course".into();
        assert_rejected_as_missing(
            &db,
            c,
            "Trying to create feedback response comments for a course that does not exist.",
        );
    }

    #[test]
    fn create_as_instructor_of_another_course() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.giver_email = INSTRUCTOR_OF_C2.into();
        assert_rejected_as_missing(
            &db,
            c,
            &format!("User {INSTRUCTOR_OF_C2} is not a registered instructor for course C1."),
        );
    }

    #[test]
    fn create_in_session_of_another_course() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.feedback_session_name = "Private feedback session".into();
        assert_rejected_as_missing(
            &db,
            c,
            "Feedback session Private feedback session is not a session for course C1.",
        );
    }

    #[test]
    fn create_for_question_of_another_session() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.feedback_question_id = "Q-C2".into();
        assert_rejected_as_missing(
            &db,
            c,
            "Feedback question of id Q-C2 is not a question for session S1.",
        );
    }

    #[test]
    fn create_for_response_of_another_question() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.feedback_response_id = "R-Q2".into();
        assert_rejected_as_missing(
            &db,
            c,
            "Feedback response of id R-Q2 is not a response for question of id Q1.",
        );
    }

    #[test]
    fn create_with_empty_text() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.comment_text = "  ".into();
        assert!(matches!(
            create_comment(&db, c),
            Err(Error::InvalidParameters(ParameterError::Field(_)))
        ));
        assert!(db.comments.borrow().is_empty());
    }

    #[test]
    fn create_for_malformed_course_id() {
        for course_id in [
            "no such course",
            "a-course-id-that-is-much-longer-than-forty-characters",
            "",
        ] {
            let db = MockDb::typical();
            let mut c = comment_on_r1();
            c.course_id = course_id.into();
            assert!(
                matches!(
                    create_comment(&db, c),
                    Err(Error::EntityDoesNotExist(
                        HierarchyViolation::CourseNotFound { .. }
                    ))
                ),
                "course id: {course_id:?}"
            );
            assert!(db.comments.borrow().is_empty());
        }
    }

    #[test]
    fn create_as_malformed_non_instructor() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.giver_email = "not an instructor".into();
        assert!(matches!(
            create_comment(&db, c),
            Err(Error::EntityDoesNotExist(
                HierarchyViolation::GiverNotInstructor { .. }
            ))
        ));
        assert!(db.comments.borrow().is_empty());
    }

    #[test]
    fn create_in_malformed_session() {
        for session_name in [
            "A feedback session name that is longer than 38 characters",
            " S1",
        ] {
            let db = MockDb::typical();
            let mut c = comment_on_r1();
            c.feedback_session_name = session_name.into();
            assert!(
                matches!(
                    create_comment(&db, c),
                    Err(Error::EntityDoesNotExist(
                        HierarchyViolation::SessionNotInCourse { .. }
                    ))
                ),
                "session name: {session_name:?}"
            );
            assert!(db.comments.borrow().is_empty());
        }
    }

    #[test]
    fn create_assigns_identity_and_creation_time() {
        let db = MockDb::typical();
        let candidate = comment_on_r1();
        assert!(candidate.id.is_none());
        let created = create_comment(&db, candidate.clone()).unwrap();
        assert!(created.id.is_some());
        assert!(created.created_at > candidate.created_at);
        assert!(created.has_same_location(&candidate));
        assert_eq!(vec![created], *db.comments.borrow());
    }

    #[test]
    fn create_twice_merges_into_one_comment() {
        let db = MockDb::typical();
        let first = create_comment(&db, comment_on_r1()).unwrap();

        let mut again = comment_on_r1();
        again.comment_text = "Already existing comment from instructor 1".into();
        let second = create_comment(&db, again).unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(first.created_at, second.created_at);
        let comments = db.load_comments_of_session("C1", "S1").unwrap();
        assert_eq!(1, comments.len());
        assert_eq!(
            "Already existing comment from instructor 1",
            comments[0].comment_text
        );
    }

    #[test]
    fn different_givers_on_same_response_are_distinct() {
        let db = MockDb::typical();
        create_comment(&db, comment_on_r1()).unwrap();
        let mut other = comment_on_r1();
        other.giver_email = INSTRUCTOR2_OF_C1.into();
        create_comment(&db, other).unwrap();
        assert_eq!(2, db.load_comments_of_session("C1", "S1").unwrap().len());
    }

    #[test]
    fn merge_when_losing_a_race() {
        let db = MockDb::typical();
        let winner = create_comment(&db, comment_on_r1()).unwrap();

        let mut late = comment_on_r1();
        late.comment_text = "late".into();
        db.stale_lookups.set(1);
        let storable = prepare_new_comment(&db, late).unwrap();
        assert!(matches!(storable, Storable::New(_)));
        let stored = store_new_comment(&db, storable).unwrap();

        assert_eq!(winner.id, stored.id);
        let comments = db.comments.borrow();
        assert_eq!(1, comments.len());
        assert_eq!("late", comments[0].comment_text);
    }

    #[test]
    fn violation_kind_is_preserved() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.course_id = "no-such-course".into();
        assert!(matches!(
            create_comment(&db, c),
            Err(Error::EntityDoesNotExist(
                HierarchyViolation::CourseNotFound { .. }
            ))
        ));
    }
}
