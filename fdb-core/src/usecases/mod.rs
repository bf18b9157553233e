mod create_comment;
mod delete_comment;
mod error;
mod load_comments;
mod resolve_comment;
mod update_comment;
mod validate_hierarchy;


pub use self::{
    create_comment::*,
    delete_comment::*,
    error::{Error, ParameterError},
    load_comments::*,
    resolve_comment::*,
    update_comment::*,
    validate_hierarchy::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{db::*, entities::*, repositories::*};
}
