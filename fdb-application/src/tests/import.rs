use super::prelude::*;

#[test]
fn import_typical_data_bundle() {
    let fixture = BackendFixture::new();
    let bundle = flows::parse_data_bundle(TYPICAL_DATA_BUNDLE.as_bytes()).unwrap();
    let summary = flows::import_data_bundle(&fixture.db_connections, bundle).unwrap();
    assert_eq!(
        flows::ImportSummary {
            courses: 2,
            instructors: 3,
            sessions: 3,
            questions: 3,
            responses: 4,
            comments: 2,
        },
        summary
    );
    assert!(fixture.course_exists(COURSE_1));
    assert!(fixture.course_exists(COURSE_2));
    assert_eq!(
        2,
        fixture
            .load_comments_of_session(COURSE_1, SESSION_1_OF_COURSE_1)
            .len()
    );
}

#[test]
fn import_is_repeatable() {
    let fixture = BackendFixture::typical();
    let before = fixture.load_comments_of_session(COURSE_1, SESSION_1_OF_COURSE_1);

    let bundle = flows::parse_data_bundle(TYPICAL_DATA_BUNDLE.as_bytes()).unwrap();
    let summary = flows::import_data_bundle(&fixture.db_connections, bundle).unwrap();
    assert_eq!(0, summary.courses);
    assert_eq!(0, summary.instructors);
    assert_eq!(0, summary.sessions);
    assert_eq!(0, summary.questions);
    assert_eq!(0, summary.responses);
    // Comments are merged into the existing ones
    assert_eq!(2, summary.comments);

    let after = fixture.load_comments_of_session(COURSE_1, SESSION_1_OF_COURSE_1);
    assert_eq!(before, after);
}

#[test]
fn failed_import_is_rolled_back() {
    let fixture = BackendFixture::new();
    let json = r#"{
        "courses": {
            "course": { "id": "rolledBackCourse", "name": "Rolled back" }
        },
        "feedbackResponseComments": {
            "orphan": {
                "courseId": "rolledBackCourse",
                "feedbackSessionName": "Missing session",
                "feedbackQuestionId": "q",
                "feedbackResponseId": "r",
                "commentGiver": "nobody@course.tmt",
                "commentText": "Orphaned comment"
            }
        }
    }"#;
    let bundle = flows::parse_data_bundle(json.as_bytes()).unwrap();
    let err = flows::import_data_bundle(&fixture.db_connections, bundle).unwrap_err();
    assert!(matches!(
        err.usecase_error(),
        Some(usecases::Error::EntityDoesNotExist(_))
    ));
    assert!(!fixture.course_exists("rolledBackCourse"));
}

#[test]
fn parse_malformed_data_bundle() {
    let err = flows::parse_data_bundle("{ \"courses\": [] }".as_bytes()).unwrap_err();
    assert!(matches!(err, AppError::Serialize(_)));
}

#[test]
fn parse_empty_data_bundle() {
    let bundle = flows::parse_data_bundle("{}".as_bytes()).unwrap();
    assert!(bundle.courses.is_empty());
    assert!(bundle.feedback_response_comments.is_empty());
}
