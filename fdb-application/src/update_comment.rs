use super::*;

pub fn update_comment(
    connections: &sqlite::Connections,
    candidate: FeedbackResponseComment,
) -> Result<FeedbackResponseComment> {
    let comment = connections
        .exclusive()?
        .transaction(|conn| usecases::update_comment(conn, candidate))?;
    Ok(comment)
}
