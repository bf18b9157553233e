// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use std::cell::RefMut;

use anyhow::anyhow;
use diesel::{
    self,
    prelude::*,
    result::{DatabaseErrorKind, Error as DieselError},
};

use fdb_core::{
    entities::*,
    repositories::{self as repo, *},
};

use super::*;

mod comment;
mod course;
mod feedback;
mod instructor;

type Result<T> = std::result::Result<T, repo::Error>;

pub fn from_diesel_err(err: DieselError) -> repo::Error {
    match err {
        DieselError::NotFound => repo::Error::NotFound,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            repo::Error::AlreadyExists
        }
        _ => repo::Error::Other(err.into()),
    }
}

/// Uniform access to the underlying SQLite connection.
///
/// Only read-only connections refuse to hand out a connection
/// for writing.
trait SqliteAccess {
    fn reader(&self) -> RefMut<'_, SqliteConnection>;
    fn writer(&self) -> Result<RefMut<'_, SqliteConnection>>;
}

impl<'a> SqliteAccess for DbReadOnly<'a> {
    fn reader(&self) -> RefMut<'_, SqliteConnection> {
        RefMut::map(self.conn.borrow_mut(), |conn| &mut **conn)
    }
    fn writer(&self) -> Result<RefMut<'_, SqliteConnection>> {
        Err(repo::Error::Other(anyhow!(
            "Write access on a read-only database connection"
        )))
    }
}

impl<'a> SqliteAccess for DbReadWrite<'a> {
    fn reader(&self) -> RefMut<'_, SqliteConnection> {
        RefMut::map(self.conn.borrow_mut(), |conn| &mut **conn)
    }
    fn writer(&self) -> Result<RefMut<'_, SqliteConnection>> {
        Ok(self.reader())
    }
}

impl<'a> SqliteAccess for DbConnection<'a> {
    fn reader(&self) -> RefMut<'_, SqliteConnection> {
        RefMut::map(self.conn.borrow_mut(), |conn| &mut **conn)
    }
    fn writer(&self) -> Result<RefMut<'_, SqliteConnection>> {
        Ok(self.reader())
    }
}

fn resolve_course_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::course::dsl;
    schema::course::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve course id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_feedback_session_rowid(
    conn: &mut SqliteConnection,
    course_id: &str,
    name: &str,
) -> Result<i64> {
    use schema::{course::dsl as course_dsl, feedback_session::dsl};
    schema::feedback_session::table
        .inner_join(schema::course::table)
        .select(dsl::rowid)
        .filter(course_dsl::id.eq(course_id))
        .filter(dsl::name.eq(name))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!(
                "Failed to resolve feedback session '{}' of course '{}': {}",
                name,
                course_id,
                e
            );
            e
        })
        .map_err(from_diesel_err)
}

fn resolve_feedback_question_rowid(conn: &mut SqliteConnection, id: &str) -> Result<i64> {
    use schema::feedback_question::dsl;
    schema::feedback_question::table
        .select(dsl::rowid)
        .filter(dsl::id.eq(id))
        .first::<i64>(conn)
        .map_err(|e| {
            log::warn!("Failed to resolve feedback question id '{}': {}", id, e);
            e
        })
        .map_err(from_diesel_err)
}
