use super::*;

pub fn delete_comment(
    connections: &sqlite::Connections,
    candidate: &FeedbackResponseComment,
) -> Result<()> {
    connections
        .exclusive()?
        .transaction(|conn| usecases::delete_comment(conn, candidate))?;
    Ok(())
}
