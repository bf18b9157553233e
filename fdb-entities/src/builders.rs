pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{comment_builder::*, question_builder::*, response_builder::*};

pub mod comment_builder {

    use super::*;
    use crate::{comment::*, id::*, time::*};

    #[derive(Debug)]
    pub struct FeedbackResponseCommentBuild {
        comment: FeedbackResponseComment,
    }

    impl FeedbackResponseCommentBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.comment.id = Some(id.into());
            self
        }
        pub fn course_id(mut self, course_id: &str) -> Self {
            self.comment.course_id = course_id.into();
            self
        }
        pub fn session_name(mut self, name: &str) -> Self {
            self.comment.feedback_session_name = name.into();
            self
        }
        pub fn question_id(mut self, id: &str) -> Self {
            self.comment.feedback_question_id = id.into();
            self
        }
        pub fn response_id(mut self, id: &str) -> Self {
            self.comment.feedback_response_id = id.into();
            self
        }
        pub fn giver_email(mut self, email: &str) -> Self {
            self.comment.giver_email = email.into();
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.comment.comment_text = text.into();
            self
        }
        pub fn created_at(mut self, created_at: Timestamp) -> Self {
            self.comment.created_at = created_at;
            self
        }
        pub fn finish(self) -> FeedbackResponseComment {
            self.comment
        }
    }

    impl Builder for FeedbackResponseComment {
        type Build = FeedbackResponseCommentBuild;
        fn build() -> Self::Build {
            Self::Build {
                comment: FeedbackResponseComment {
                    id: None,
                    course_id: "".into(),
                    feedback_session_name: "".into(),
                    feedback_question_id: Id::default(),
                    feedback_response_id: Id::default(),
                    giver_email: "".into(),
                    comment_text: "".into(),
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}

pub mod question_builder {

    use super::*;
    use crate::{feedback::*, id::*};

    #[derive(Debug)]
    pub struct FeedbackQuestionBuild {
        question: FeedbackQuestion,
    }

    impl FeedbackQuestionBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.question.id = id.into();
            self
        }
        pub fn course_id(mut self, course_id: &str) -> Self {
            self.question.course_id = course_id.into();
            self
        }
        pub fn session_name(mut self, name: &str) -> Self {
            self.question.session_name = name.into();
            self
        }
        pub fn number(mut self, number: u32) -> Self {
            self.question.number = number;
            self
        }
        pub fn text(mut self, text: &str) -> Self {
            self.question.text = text.into();
            self
        }
        pub fn finish(self) -> FeedbackQuestion {
            self.question
        }
    }

    impl Builder for FeedbackQuestion {
        type Build = FeedbackQuestionBuild;
        fn build() -> Self::Build {
            Self::Build {
                question: FeedbackQuestion {
                    id: Id::new(),
                    course_id: "".into(),
                    session_name: "".into(),
                    number: 1,
                    text: "".into(),
                },
            }
        }
    }
}

pub mod response_builder {

    use super::*;
    use crate::{feedback::*, id::*};

    #[derive(Debug)]
    pub struct FeedbackResponseBuild {
        response: FeedbackResponse,
    }

    impl FeedbackResponseBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.response.id = id.into();
            self
        }
        pub fn question_id(mut self, id: &str) -> Self {
            self.response.question_id = id.into();
            self
        }
        pub fn giver_email(mut self, email: &str) -> Self {
            self.response.giver_email = email.into();
            self
        }
        pub fn recipient_email(mut self, email: &str) -> Self {
            self.response.recipient_email = email.into();
            self
        }
        pub fn finish(self) -> FeedbackResponse {
            self.response
        }
    }

    impl Builder for FeedbackResponse {
        type Build = FeedbackResponseBuild;
        fn build() -> Self::Build {
            Self::Build {
                response: FeedbackResponse {
                    id: Id::new(),
                    question_id: Id::default(),
                    giver_email: "".into(),
                    recipient_email: "".into(),
                },
            }
        }
    }
}
