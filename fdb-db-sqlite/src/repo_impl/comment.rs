use super::*;

macro_rules! impl_comment_repo {
    ($($conn:ident),+) => {
        $(
            impl<'a> FeedbackResponseCommentRepo for $conn<'a> {
                fn create_comment(&self, comment: &FeedbackResponseComment) -> Result<()> {
                    create_comment(&mut *self.writer()?, comment)
                }
                fn update_comment(&self, comment: &FeedbackResponseComment) -> Result<()> {
                    update_comment(&mut *self.writer()?, comment)
                }
                fn delete_comment(&self, id: &str) -> Result<bool> {
                    delete_comment(&mut *self.writer()?, id)
                }
                fn try_get_comment(&self, id: &str) -> Result<Option<FeedbackResponseComment>> {
                    try_get_comment(&mut self.reader(), id)
                }
                fn try_get_comment_by_key(
                    &self,
                    key: &CommentKey,
                ) -> Result<Option<FeedbackResponseComment>> {
                    try_get_comment_by_key(&mut self.reader(), key)
                }
                fn find_comment_by_response_and_giver(
                    &self,
                    response_id: &str,
                    giver_email: &str,
                ) -> Result<Option<FeedbackResponseComment>> {
                    find_comment_by_response_and_giver(&mut self.reader(), response_id, giver_email)
                }
                fn load_comments_of_session(
                    &self,
                    course_id: &str,
                    session_name: &str,
                ) -> Result<Vec<FeedbackResponseComment>> {
                    load_comments_of_session(&mut self.reader(), course_id, session_name)
                }
            }
        )+
    };
}

impl_comment_repo!(DbReadOnly, DbReadWrite, DbConnection);

fn into_new_comment(comment: &FeedbackResponseComment) -> Result<models::NewFeedbackResponseComment> {
    let FeedbackResponseComment {
        id,
        course_id,
        feedback_session_name,
        feedback_question_id,
        feedback_response_id,
        giver_email,
        comment_text,
        created_at,
    } = comment;
    let Some(id) = id else {
        return Err(anyhow!("Cannot store a feedback response comment without an id").into());
    };
    Ok(models::NewFeedbackResponseComment {
        id: id.as_str(),
        course_id,
        session_name: feedback_session_name,
        question_id: feedback_question_id.as_str(),
        response_id: feedback_response_id.as_str(),
        giver_email,
        created_at: created_at.as_millis(),
        text: comment_text,
    })
}

fn create_comment(conn: &mut SqliteConnection, comment: &FeedbackResponseComment) -> Result<()> {
    let new_comment = into_new_comment(comment)?;
    let _count = diesel::insert_into(schema::feedback_response_comment::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn update_comment(conn: &mut SqliteConnection, comment: &FeedbackResponseComment) -> Result<()> {
    use schema::feedback_response_comment::dsl;
    let changeset = into_new_comment(comment)?;
    let count = diesel::update(schema::feedback_response_comment::table)
        .filter(dsl::id.eq(changeset.id))
        .set(&changeset)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    if count < 1 {
        log::debug!(
            "Feedback response comment '{}' not found for update",
            changeset.id
        );
        return Err(repo::Error::NotFound);
    }
    Ok(())
}

fn delete_comment(conn: &mut SqliteConnection, id: &str) -> Result<bool> {
    use schema::feedback_response_comment::dsl;
    let count = diesel::delete(schema::feedback_response_comment::table.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

fn try_get_comment(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<FeedbackResponseComment>> {
    use schema::feedback_response_comment::dsl;
    Ok(schema::feedback_response_comment::table
        .filter(dsl::id.eq(id))
        .first::<models::FeedbackResponseComment>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn try_get_comment_by_key(
    conn: &mut SqliteConnection,
    key: &CommentKey,
) -> Result<Option<FeedbackResponseComment>> {
    use schema::feedback_response_comment::dsl;
    let CommentKey {
        response_id,
        giver_email,
        created_at,
    } = key;
    Ok(schema::feedback_response_comment::table
        .filter(dsl::response_id.eq(response_id.as_str()))
        .filter(dsl::giver_email.eq(giver_email))
        .filter(dsl::created_at.eq(created_at.as_millis()))
        .first::<models::FeedbackResponseComment>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn find_comment_by_response_and_giver(
    conn: &mut SqliteConnection,
    response_id: &str,
    giver_email: &str,
) -> Result<Option<FeedbackResponseComment>> {
    use schema::feedback_response_comment::dsl;
    Ok(schema::feedback_response_comment::table
        .filter(dsl::response_id.eq(response_id))
        .filter(dsl::giver_email.eq(giver_email))
        .first::<models::FeedbackResponseComment>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

fn load_comments_of_session(
    conn: &mut SqliteConnection,
    course_id: &str,
    session_name: &str,
) -> Result<Vec<FeedbackResponseComment>> {
    use schema::feedback_response_comment::dsl;
    Ok(schema::feedback_response_comment::table
        .filter(dsl::course_id.eq(course_id))
        .filter(dsl::session_name.eq(session_name))
        .order_by((dsl::created_at, dsl::rowid))
        .load::<models::FeedbackResponseComment>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

impl From<models::FeedbackResponseComment> for FeedbackResponseComment {
    fn from(from: models::FeedbackResponseComment) -> Self {
        let models::FeedbackResponseComment {
            rowid: _,
            id,
            course_id,
            session_name,
            question_id,
            response_id,
            giver_email,
            created_at,
            text,
        } = from;
        Self {
            id: Some(id.into()),
            course_id,
            feedback_session_name: session_name,
            feedback_question_id: question_id.into(),
            feedback_response_id: response_id.into(),
            giver_email,
            comment_text: text,
            created_at: Timestamp::from_millis(created_at),
        }
    }
}
