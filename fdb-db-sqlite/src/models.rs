#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Insertable)]
#[diesel(table_name = course)]
pub struct NewCourse<'a> {
    pub id: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct Course {
    pub rowid: i64,
    pub id: String,
    pub name: String,
}

#[derive(Insertable)]
#[diesel(table_name = course_instructor)]
pub struct NewCourseInstructor<'a> {
    pub parent_rowid: i64,
    pub email: &'a str,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct JoinedCourseInstructor {
    pub email: String,
    pub name: String,
    // Joined columns
    pub course_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = feedback_session)]
pub struct NewFeedbackSession<'a> {
    pub parent_rowid: i64,
    pub name: &'a str,
}

#[derive(Queryable)]
pub struct JoinedFeedbackSession {
    pub name: String,
    // Joined columns
    pub course_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = feedback_question)]
pub struct NewFeedbackQuestion<'a> {
    pub parent_rowid: i64,
    pub id: &'a str,
    pub number: i64,
    pub text: &'a str,
}

#[derive(Queryable)]
pub struct JoinedFeedbackQuestion {
    pub id: String,
    pub number: i64,
    pub text: String,
    // Joined columns
    pub session_name: String,
    pub course_id: String,
}

#[derive(Insertable)]
#[diesel(table_name = feedback_response)]
pub struct NewFeedbackResponse<'a> {
    pub parent_rowid: i64,
    pub id: &'a str,
    pub giver_email: &'a str,
    pub recipient_email: &'a str,
}

#[derive(Queryable)]
pub struct JoinedFeedbackResponse {
    pub id: String,
    pub giver_email: String,
    pub recipient_email: String,
    // Joined columns
    pub question_id: String,
}

#[derive(Insertable, AsChangeset)]
#[diesel(table_name = feedback_response_comment)]
pub struct NewFeedbackResponseComment<'a> {
    pub id: &'a str,
    pub course_id: &'a str,
    pub session_name: &'a str,
    pub question_id: &'a str,
    pub response_id: &'a str,
    pub giver_email: &'a str,
    pub created_at: i64,
    pub text: &'a str,
}

#[derive(Queryable)]
pub struct FeedbackResponseComment {
    pub rowid: i64,
    pub id: String,
    pub course_id: String,
    pub session_name: String,
    pub question_id: String,
    pub response_id: String,
    pub giver_email: String,
    pub created_at: i64,
    pub text: String,
}
