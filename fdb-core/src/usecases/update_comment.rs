use super::{
    prelude::*,
    resolve_comment::resolve_exact_comment,
    validate_hierarchy::validate_comment_hierarchy,
};
use crate::util::validate::Validate;

/// Replace the text of a stored comment.
///
/// The target is resolved by identity or by natural key. The whole
/// ancestor chain and the giver's authorization are validated again;
/// any defect is reported as invalid parameters of the comment.
pub fn update_comment<R: Db>(
    repo: &R,
    candidate: FeedbackResponseComment,
) -> Result<FeedbackResponseComment> {
    candidate.validate().map_err(|err| {
        log::warn!("Rejecting update of feedback response comment: {err}");
        err
    })?;
    validate_comment_hierarchy(repo, &candidate).map_err(|err| {
        log::warn!("Rejecting update of feedback response comment: {err}");
        err.into_update_error()
    })?;
    let stored = resolve_exact_comment(repo, &candidate)?.ok_or(Error::CommentDoesNotExist)?;
    let updated = FeedbackResponseComment {
        comment_text: candidate.comment_text,
        ..stored
    };
    repo.update_comment(&updated)?;
    log::info!("Updated comment {:?}", updated.id);
    Ok(updated)
}
