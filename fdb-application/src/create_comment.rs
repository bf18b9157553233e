use super::*;

/// Create a comment or merge it into the giver's existing
/// comment on the same response.
pub fn create_comment(
    connections: &sqlite::Connections,
    candidate: FeedbackResponseComment,
) -> Result<FeedbackResponseComment> {
    let comment = connections.exclusive()?.transaction(|conn| {
        let storable = usecases::prepare_new_comment(conn, candidate)?;
        usecases::store_new_comment(conn, storable).map_err(|err| {
            warn!("Failed to store feedback response comment: {}", err);
            err
        })
    })?;
    Ok(comment)
}
