use std::{collections::BTreeMap, io};

use fdb_core::{
    db::Db,
    repositories::{Error as RepoError, *},
};
use serde::Deserialize;

use super::*;

/// A named collection of records that is imported at once.
///
/// The map keys only name the records within the bundle and
/// are not stored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataBundle {
    #[serde(default)]
    pub courses: BTreeMap<String, CourseRecord>,
    #[serde(default)]
    pub instructors: BTreeMap<String, InstructorRecord>,
    #[serde(default)]
    pub feedback_sessions: BTreeMap<String, FeedbackSessionRecord>,
    #[serde(default)]
    pub feedback_questions: BTreeMap<String, FeedbackQuestionRecord>,
    #[serde(default)]
    pub feedback_responses: BTreeMap<String, FeedbackResponseRecord>,
    #[serde(default)]
    pub feedback_response_comments: BTreeMap<String, FeedbackResponseCommentRecord>,
}

#[derive(Debug, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstructorRecord {
    pub course_id: String,
    pub email: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSessionRecord {
    pub course_id: String,
    pub feedback_session_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackQuestionRecord {
    pub id: String,
    pub course_id: String,
    pub feedback_session_name: String,
    pub question_number: u32,
    #[serde(default)]
    pub question_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponseRecord {
    pub id: String,
    pub feedback_question_id: String,
    pub giver: String,
    pub recipient: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponseCommentRecord {
    pub course_id: String,
    pub feedback_session_name: String,
    pub feedback_question_id: String,
    pub feedback_response_id: String,
    pub comment_giver: String,
    pub comment_text: String,
}

impl From<FeedbackResponseCommentRecord> for FeedbackResponseComment {
    fn from(from: FeedbackResponseCommentRecord) -> Self {
        let FeedbackResponseCommentRecord {
            course_id,
            feedback_session_name,
            feedback_question_id,
            feedback_response_id,
            comment_giver,
            comment_text,
        } = from;
        Self {
            id: None,
            course_id,
            feedback_session_name,
            feedback_question_id: feedback_question_id.into(),
            feedback_response_id: feedback_response_id.into(),
            giver_email: comment_giver,
            comment_text,
            created_at: Timestamp::now(),
        }
    }
}

/// Number of records that have been written by an import.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub courses: usize,
    pub instructors: usize,
    pub sessions: usize,
    pub questions: usize,
    pub responses: usize,
    pub comments: usize,
}

pub fn parse_data_bundle(reader: impl io::Read) -> Result<DataBundle> {
    Ok(serde_json::from_reader(reader)?)
}

/// Import all records of the bundle within a single transaction.
///
/// Ancestor records that already exist are skipped, so a bundle
/// can be imported repeatedly. Comments are created through the
/// regular use case and are merged into existing ones.
pub fn import_data_bundle(
    connections: &sqlite::Connections,
    bundle: DataBundle,
) -> Result<ImportSummary> {
    let summary = connections
        .exclusive()?
        .transaction(|conn| import_records(conn, bundle))?;
    info!("Imported data bundle: {:?}", summary);
    Ok(summary)
}

fn import_records<R: Db>(
    repo: &R,
    bundle: DataBundle,
) -> std::result::Result<ImportSummary, usecases::Error> {
    let DataBundle {
        courses,
        instructors,
        feedback_sessions,
        feedback_questions,
        feedback_responses,
        feedback_response_comments,
    } = bundle;
    let mut summary = ImportSummary::default();
    for (name, record) in courses {
        let CourseRecord { id, name: title } = record;
        let course = Course { id, name: title };
        summary.courses += created(&name, repo.create_course(&course))?;
    }
    for (name, record) in instructors {
        let InstructorRecord {
            course_id,
            email,
            name: display_name,
        } = record;
        let instructor = Instructor {
            course_id,
            email,
            name: display_name,
        };
        summary.instructors += created(&name, repo.create_instructor(&instructor))?;
    }
    for (name, record) in feedback_sessions {
        let FeedbackSessionRecord {
            course_id,
            feedback_session_name,
        } = record;
        let session = FeedbackSession {
            course_id,
            name: feedback_session_name,
        };
        summary.sessions += created(&name, repo.create_feedback_session(&session))?;
    }
    for (name, record) in feedback_questions {
        let FeedbackQuestionRecord {
            id,
            course_id,
            feedback_session_name,
            question_number,
            question_text,
        } = record;
        let question = FeedbackQuestion {
            id: id.into(),
            course_id,
            session_name: feedback_session_name,
            number: question_number,
            text: question_text,
        };
        summary.questions += created(&name, repo.create_feedback_question(&question))?;
    }
    for (name, record) in feedback_responses {
        let FeedbackResponseRecord {
            id,
            feedback_question_id,
            giver,
            recipient,
        } = record;
        let response = FeedbackResponse {
            id: id.into(),
            question_id: feedback_question_id.into(),
            giver_email: giver,
            recipient_email: recipient,
        };
        summary.responses += created(&name, repo.create_feedback_response(&response))?;
    }
    for (name, record) in feedback_response_comments {
        let comment = usecases::create_comment(repo, record.into()).map_err(|err| {
            warn!("Failed to import comment '{}': {}", name, err);
            err
        })?;
        debug!("Imported comment '{}' as {:?}", name, comment.id);
        summary.comments += 1;
    }
    Ok(summary)
}

// Records that already exist are skipped and not counted.
fn created(
    name: &str,
    res: std::result::Result<(), RepoError>,
) -> std::result::Result<usize, RepoError> {
    match res {
        Ok(()) => Ok(1),
        Err(RepoError::AlreadyExists) => {
            debug!("Skipping existing record '{}'", name);
            Ok(0)
        }
        Err(err) => {
            warn!("Failed to import record '{}': {}", name, err);
            Err(err)
        }
    }
}
