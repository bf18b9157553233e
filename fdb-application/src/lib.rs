#[macro_use]
extern crate log;

mod create_comment;
mod delete_comment;
mod import_data_bundle;
mod load_comments;
mod update_comment;

pub mod prelude {
    pub use super::{
        create_comment::*, delete_comment::*, import_data_bundle::*, load_comments::*,
        update_comment::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use fdb_core::{entities::*, usecases};

#[cfg(test)]
pub(crate) mod tests;

pub mod sqlite {
    pub use fdb_db_sqlite::{run_embedded_database_migrations, Connections};
}
