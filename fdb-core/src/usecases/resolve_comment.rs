use super::prelude::*;

/// Find the stored comment of the same giver on the same response.
///
/// This is the lookup behind create-or-merge: a second create for the
/// same (response, giver) pair must reuse the stored identity.
pub fn resolve_existing_comment<R>(
    repo: &R,
    candidate: &FeedbackResponseComment,
) -> Result<Option<FeedbackResponseComment>>
where
    R: FeedbackResponseCommentRepo,
{
    let existing = repo.find_comment_by_response_and_giver(
        candidate.feedback_response_id.as_str(),
        &candidate.giver_email,
    )?;
    if let Some(ref c) = existing {
        log::debug!(
            "Found existing comment {:?} of {} on response {}",
            c.id,
            c.giver_email,
            c.feedback_response_id
        );
    }
    Ok(existing)
}

/// Resolve the exact stored record that the candidate refers to.
///
/// Uses the identity if present and the natural key
/// (response, giver, created at) otherwise. A record is only
/// returned if it still agrees with the candidate's response
/// and giver, i.e. a candidate with mutated location fields
/// resolves to nothing.
pub fn resolve_exact_comment<R>(
    repo: &R,
    candidate: &FeedbackResponseComment,
) -> Result<Option<FeedbackResponseComment>>
where
    R: FeedbackResponseCommentRepo,
{
    let stored = match candidate.id {
        Some(ref id) => repo.try_get_comment(id.as_str())?,
        None => repo.try_get_comment_by_key(&candidate.key())?,
    };
    Ok(stored.filter(|c| {
        c.feedback_response_id == candidate.feedback_response_id
            && c.giver_email == candidate.giver_email
    }))
}
