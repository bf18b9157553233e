///////////////////////////////////////////////////////////////////////
// Courses
///////////////////////////////////////////////////////////////////////

table! {
    course (rowid) {
        rowid -> BigInt,
        id -> Text,
        name -> Text,
    }
}

table! {
    course_instructor (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        email -> Text,
        name -> Text,
    }
}

joinable!(course_instructor -> course (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Feedback sessions, questions, and responses
///////////////////////////////////////////////////////////////////////

table! {
    feedback_session (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        name -> Text,
    }
}

joinable!(feedback_session -> course (parent_rowid));

table! {
    feedback_question (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        id -> Text,
        number -> BigInt,
        text -> Text,
    }
}

joinable!(feedback_question -> feedback_session (parent_rowid));

table! {
    feedback_response (rowid) {
        rowid -> BigInt,
        parent_rowid -> BigInt,
        id -> Text,
        giver_email -> Text,
        recipient_email -> Text,
    }
}

joinable!(feedback_response -> feedback_question (parent_rowid));

///////////////////////////////////////////////////////////////////////
// Comments
///////////////////////////////////////////////////////////////////////

table! {
    feedback_response_comment (rowid) {
        rowid -> BigInt,
        id -> Text,
        course_id -> Text,
        session_name -> Text,
        question_id -> Text,
        response_id -> Text,
        giver_email -> Text,
        created_at -> BigInt,
        text -> Text,
    }
}

allow_tables_to_appear_in_same_query!(
    course,
    course_instructor,
    feedback_session,
    feedback_question,
    feedback_response,
    feedback_response_comment,
);
