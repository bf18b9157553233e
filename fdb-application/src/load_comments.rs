use super::*;

pub fn load_comments_of_session(
    connections: &sqlite::Connections,
    course_id: &str,
    session_name: &str,
) -> Result<Vec<FeedbackResponseComment>> {
    let conn = connections.shared()?;
    Ok(usecases::load_comments_of_session(
        &conn,
        course_id,
        session_name,
    )?)
}

pub fn load_comment(
    connections: &sqlite::Connections,
    response_id: &str,
    giver_email: &str,
    created_at: Timestamp,
) -> Result<Option<FeedbackResponseComment>> {
    let conn = connections.shared()?;
    Ok(usecases::get_comment(
        &conn,
        response_id,
        giver_email,
        created_at,
    )?)
}
