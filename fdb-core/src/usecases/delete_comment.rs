use super::{prelude::*, resolve_comment::resolve_exact_comment};

/// Ensure that the referenced comment is absent.
///
/// Nothing to delete is not an error: if the candidate cannot be
/// resolved to a stored comment, e.g. because its response id has
/// been altered, the request silently does nothing.
pub fn delete_comment<R>(repo: &R, candidate: &FeedbackResponseComment) -> Result<()>
where
    R: FeedbackResponseCommentRepo,
{
    let Some(stored) = resolve_exact_comment(repo, candidate)? else {
        log::warn!(
            "No comment of {} on response {} to delete",
            candidate.giver_email,
            candidate.feedback_response_id
        );
        return Ok(());
    };
    let Some(id) = stored.id else {
        return Ok(());
    };
    if repo.delete_comment(id.as_str())? {
        log::info!("Deleted comment {id}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::{create_comment, get_comment, load_comments_of_session, tests::*};
    use super::*;

    #[test]
    fn delete_with_unresolvable_response_is_a_noop() {
        let db = MockDb::typical();
        let mut c = comment_on_r1();
        c.feedback_question_id = "Q2".into();
        c.feedback_response_id = "R-Q2".into();
        let created = create_comment(&db, c).unwrap();

        let mut altered = created.clone();
        altered.id = None;
        altered.feedback_response_id = "invalid responseId".into();
        delete_comment(&db, &altered).unwrap();

        let comments = load_comments_of_session(&db, "C1", "S1").unwrap();
        assert_eq!(vec![created], comments);
    }

    #[test]
    fn delete_resolvable_comment() {
        let db = MockDb::typical();
        let created = create_comment(&db, comment_on_r1()).unwrap();
        delete_comment(&db, &created).unwrap();
        assert!(load_comments_of_session(&db, "C1", "S1").unwrap().is_empty());
        assert_eq!(
            None,
            get_comment(
                &db,
                created.feedback_response_id.as_str(),
                &created.giver_email,
                created.created_at
            )
            .unwrap()
        );
    }

    #[test]
    fn delete_by_natural_key() {
        let db = MockDb::typical();
        let mut created = create_comment(&db, comment_on_r1()).unwrap();
        created.id = None;
        delete_comment(&db, &created).unwrap();
        assert!(db.comments.borrow().is_empty());
    }

    #[test]
    fn delete_twice() {
        let db = MockDb::typical();
        let created = create_comment(&db, comment_on_r1()).unwrap();
        delete_comment(&db, &created).unwrap();
        delete_comment(&db, &created).unwrap();
        assert!(db.comments.borrow().is_empty());
    }
}
