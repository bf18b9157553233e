use super::*;

macro_rules! impl_feedback_repos {
    ($($conn:ident),+) => {
        $(
            impl<'a> FeedbackSessionRepo for $conn<'a> {
                fn create_feedback_session(&self, session: &FeedbackSession) -> Result<()> {
                    create_feedback_session(&mut *self.writer()?, session)
                }
                fn try_get_feedback_session(
                    &self,
                    course_id: &str,
                    name: &str,
                ) -> Result<Option<FeedbackSession>> {
                    try_get_feedback_session(&mut self.reader(), course_id, name)
                }
            }

            impl<'a> FeedbackQuestionRepo for $conn<'a> {
                fn create_feedback_question(&self, question: &FeedbackQuestion) -> Result<()> {
                    create_feedback_question(&mut *self.writer()?, question)
                }
                fn try_get_feedback_question(&self, id: &str) -> Result<Option<FeedbackQuestion>> {
                    try_get_feedback_question(&mut self.reader(), id)
                }
            }

            impl<'a> FeedbackResponseRepo for $conn<'a> {
                fn create_feedback_response(&self, response: &FeedbackResponse) -> Result<()> {
                    create_feedback_response(&mut *self.writer()?, response)
                }
                fn try_get_feedback_response(&self, id: &str) -> Result<Option<FeedbackResponse>> {
                    try_get_feedback_response(&mut self.reader(), id)
                }
            }
        )+
    };
}

impl_feedback_repos!(DbReadOnly, DbReadWrite, DbConnection);

///////////////////////////////////////////////////////////////////////
// Sessions
///////////////////////////////////////////////////////////////////////

fn create_feedback_session(conn: &mut SqliteConnection, session: &FeedbackSession) -> Result<()> {
    let FeedbackSession { course_id, name } = session;
    let parent_rowid = resolve_course_rowid(conn, course_id)?;
    let new_session = models::NewFeedbackSession { parent_rowid, name };
    let _count = diesel::insert_into(schema::feedback_session::table)
        .values(&new_session)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn try_get_feedback_session(
    conn: &mut SqliteConnection,
    course_id: &str,
    name: &str,
) -> Result<Option<FeedbackSession>> {
    use schema::{course::dsl as course_dsl, feedback_session::dsl};
    Ok(schema::feedback_session::table
        .inner_join(schema::course::table)
        .select((dsl::name, course_dsl::id))
        .filter(course_dsl::id.eq(course_id))
        .filter(dsl::name.eq(name))
        .first::<models::JoinedFeedbackSession>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(|models::JoinedFeedbackSession { name, course_id }| FeedbackSession {
            course_id,
            name,
        }))
}

///////////////////////////////////////////////////////////////////////
// Questions
///////////////////////////////////////////////////////////////////////

fn create_feedback_question(
    conn: &mut SqliteConnection,
    question: &FeedbackQuestion,
) -> Result<()> {
    let FeedbackQuestion {
        id,
        course_id,
        session_name,
        number,
        text,
    } = question;
    let parent_rowid = resolve_feedback_session_rowid(conn, course_id, session_name)?;
    let new_question = models::NewFeedbackQuestion {
        parent_rowid,
        id: id.as_str(),
        number: i64::from(*number),
        text,
    };
    let _count = diesel::insert_into(schema::feedback_question::table)
        .values(&new_question)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn try_get_feedback_question(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<FeedbackQuestion>> {
    use schema::{
        course::dsl as course_dsl, feedback_question::dsl, feedback_session::dsl as session_dsl,
    };
    schema::feedback_question::table
        .inner_join(schema::feedback_session::table.inner_join(schema::course::table))
        .select((
            dsl::id,
            dsl::number,
            dsl::text,
            session_dsl::name,
            course_dsl::id,
        ))
        .filter(dsl::id.eq(id))
        .first::<models::JoinedFeedbackQuestion>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(FeedbackQuestion::try_from)
        .transpose()
}

impl TryFrom<models::JoinedFeedbackQuestion> for FeedbackQuestion {
    type Error = repo::Error;

    fn try_from(from: models::JoinedFeedbackQuestion) -> Result<Self> {
        let models::JoinedFeedbackQuestion {
            id,
            number,
            text,
            session_name,
            course_id,
        } = from;
        let number = u32::try_from(number)
            .map_err(|_| anyhow!("Invalid number {number} of feedback question '{id}'"))?;
        Ok(Self {
            id: id.into(),
            course_id,
            session_name,
            number,
            text,
        })
    }
}

///////////////////////////////////////////////////////////////////////
// Responses
///////////////////////////////////////////////////////////////////////

fn create_feedback_response(
    conn: &mut SqliteConnection,
    response: &FeedbackResponse,
) -> Result<()> {
    let FeedbackResponse {
        id,
        question_id,
        giver_email,
        recipient_email,
    } = response;
    let parent_rowid = resolve_feedback_question_rowid(conn, question_id.as_str())?;
    let new_response = models::NewFeedbackResponse {
        parent_rowid,
        id: id.as_str(),
        giver_email,
        recipient_email,
    };
    let _count = diesel::insert_into(schema::feedback_response::table)
        .values(&new_response)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn try_get_feedback_response(
    conn: &mut SqliteConnection,
    id: &str,
) -> Result<Option<FeedbackResponse>> {
    use schema::{feedback_question::dsl as question_dsl, feedback_response::dsl};
    Ok(schema::feedback_response::table
        .inner_join(schema::feedback_question::table)
        .select((
            dsl::id,
            dsl::giver_email,
            dsl::recipient_email,
            question_dsl::id,
        ))
        .filter(dsl::id.eq(id))
        .first::<models::JoinedFeedbackResponse>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

impl From<models::JoinedFeedbackResponse> for FeedbackResponse {
    fn from(from: models::JoinedFeedbackResponse) -> Self {
        let models::JoinedFeedbackResponse {
            id,
            giver_email,
            recipient_email,
            question_id,
        } = from;
        Self {
            id: id.into(),
            question_id: question_id.into(),
            giver_email,
            recipient_email,
        }
    }
}
