use super::prelude::*;

// Unknown courses or sessions yield an empty list.
pub fn load_comments_of_session<R>(
    repo: &R,
    course_id: &str,
    session_name: &str,
) -> Result<Vec<FeedbackResponseComment>>
where
    R: FeedbackResponseCommentRepo,
{
    log::debug!("Loading comments of session '{session_name}' in course {course_id}");
    Ok(repo.load_comments_of_session(course_id, session_name)?)
}

/// Exact lookup by natural key.
pub fn get_comment<R>(
    repo: &R,
    response_id: &str,
    giver_email: &str,
    created_at: Timestamp,
) -> Result<Option<FeedbackResponseComment>>
where
    R: FeedbackResponseCommentRepo,
{
    let key = CommentKey {
        response_id: response_id.into(),
        giver_email: giver_email.into(),
        created_at,
    };
    Ok(repo.try_get_comment_by_key(&key)?)
}
