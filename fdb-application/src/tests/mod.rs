mod import;

pub mod prelude {

    pub const TYPICAL_DATA_BUNDLE: &str = include_str!("typical_data_bundle.json");

    pub const COURSE_1: &str = "idOfTypicalCourse1";
    pub const COURSE_2: &str = "idOfTypicalCourse2";
    pub const SESSION_1_OF_COURSE_1: &str = "First feedback session";
    pub const INSTRUCTOR_1_OF_COURSE_1: &str = "instructor1@course1.tmt";
    pub const INSTRUCTOR_1_OF_COURSE_2: &str = "instructor1@course2.tmt";

    pub use fdb_core::{
        entities::*,
        repositories::{Error as RepoError, *},
        usecases,
    };
    pub use fdb_entities::builders::*;

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub use crate::{error::AppError, prelude as flows};

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            sqlite::run_embedded_database_migrations(db_connections.exclusive().unwrap())
                .unwrap();
            Self { db_connections }
        }

        /// A backend with the typical data bundle imported.
        pub fn typical() -> Self {
            let fixture = Self::new();
            let bundle = flows::parse_data_bundle(TYPICAL_DATA_BUNDLE.as_bytes()).unwrap();
            flows::import_data_bundle(&fixture.db_connections, bundle).unwrap();
            fixture
        }

        pub fn load_comments_of_session(
            &self,
            course_id: &str,
            session_name: &str,
        ) -> Vec<FeedbackResponseComment> {
            flows::load_comments_of_session(&self.db_connections, course_id, session_name).unwrap()
        }

        pub fn try_get_comment(&self, id: &str) -> Option<FeedbackResponseComment> {
            self.db_connections
                .shared()
                .unwrap()
                .try_get_comment(id)
                .unwrap()
        }

        pub fn comment_exists(&self, id: &str) -> bool {
            self.try_get_comment(id).is_some()
        }

        pub fn course_exists(&self, id: &str) -> bool {
            self.db_connections
                .shared()
                .unwrap()
                .course_exists(id)
                .unwrap()
        }

        pub fn find_comment(&self, response_id: &str, giver_email: &str) -> FeedbackResponseComment {
            self.db_connections
                .shared()
                .unwrap()
                .find_comment_by_response_and_giver(response_id, giver_email)
                .unwrap()
                .unwrap()
        }
    }

    /// Comment of instructor 1 on response 1 of question 1 in the
    /// first session of course 1, i.e. a comment that is part of
    /// the typical data bundle.
    pub fn comment_on_r1q1s1c1() -> FeedbackResponseComment {
        FeedbackResponseComment::build()
            .course_id(COURSE_1)
            .session_name(SESSION_1_OF_COURSE_1)
            .question_id("q1s1c1")
            .response_id("r1q1s1c1")
            .giver_email(INSTRUCTOR_1_OF_COURSE_1)
            .text("Instructor 1 comment to response 1 for question 1")
            .finish()
    }
}
