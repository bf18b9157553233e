use super::*;

macro_rules! impl_instructor_repo {
    ($($conn:ident),+) => {
        $(
            impl<'a> InstructorRepo for $conn<'a> {
                fn create_instructor(&self, instructor: &Instructor) -> Result<()> {
                    create_instructor(&mut *self.writer()?, instructor)
                }
                fn load_instructors_of_course(&self, course_id: &str) -> Result<Vec<Instructor>> {
                    load_instructors_of_course(&mut self.reader(), course_id)
                }
                fn is_instructor_of_course(&self, email: &str, course_id: &str) -> Result<bool> {
                    is_instructor_of_course(&mut self.reader(), email, course_id)
                }
            }
        )+
    };
}

impl_instructor_repo!(DbReadOnly, DbReadWrite, DbConnection);

fn create_instructor(conn: &mut SqliteConnection, instructor: &Instructor) -> Result<()> {
    let Instructor {
        course_id,
        email,
        name,
    } = instructor;
    let parent_rowid = resolve_course_rowid(conn, course_id)?;
    let new_instructor = models::NewCourseInstructor {
        parent_rowid,
        email,
        name,
    };
    let _count = diesel::insert_into(schema::course_instructor::table)
        .values(&new_instructor)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn load_instructors_of_course(
    conn: &mut SqliteConnection,
    course_id: &str,
) -> Result<Vec<Instructor>> {
    use schema::{course::dsl as course_dsl, course_instructor::dsl};
    Ok(schema::course_instructor::table
        .inner_join(schema::course::table)
        .select((dsl::email, dsl::name, course_dsl::id))
        .filter(course_dsl::id.eq(course_id))
        .order_by(dsl::rowid)
        .load::<models::JoinedCourseInstructor>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(Into::into)
        .collect())
}

fn is_instructor_of_course(
    conn: &mut SqliteConnection,
    email: &str,
    course_id: &str,
) -> Result<bool> {
    use schema::{course::dsl as course_dsl, course_instructor::dsl};
    let count = schema::course_instructor::table
        .inner_join(schema::course::table)
        .filter(course_dsl::id.eq(course_id))
        .filter(dsl::email.eq(email))
        .count()
        .get_result::<i64>(conn)
        .map_err(from_diesel_err)?;
    debug_assert!(count <= 1);
    Ok(count > 0)
}

impl From<models::JoinedCourseInstructor> for Instructor {
    fn from(from: models::JoinedCourseInstructor) -> Self {
        let models::JoinedCourseInstructor {
            email,
            name,
            course_id,
        } = from;
        Self {
            course_id,
            email,
            name,
        }
    }
}
