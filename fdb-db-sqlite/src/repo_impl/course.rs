use super::*;

macro_rules! impl_course_repo {
    ($($conn:ident),+) => {
        $(
            impl<'a> CourseRepo for $conn<'a> {
                fn create_course(&self, course: &Course) -> Result<()> {
                    create_course(&mut *self.writer()?, course)
                }
                fn try_get_course(&self, id: &str) -> Result<Option<Course>> {
                    try_get_course(&mut self.reader(), id)
                }
            }
        )+
    };
}

impl_course_repo!(DbReadOnly, DbReadWrite, DbConnection);

fn create_course(conn: &mut SqliteConnection, course: &Course) -> Result<()> {
    let Course { id, name } = course;
    let new_course = models::NewCourse { id, name };
    let _count = diesel::insert_into(schema::course::table)
        .values(&new_course)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn try_get_course(conn: &mut SqliteConnection, id: &str) -> Result<Option<Course>> {
    use schema::course::dsl;
    Ok(schema::course::table
        .filter(dsl::id.eq(id))
        .first::<models::Course>(conn)
        .optional()
        .map_err(from_diesel_err)?
        .map(Into::into))
}

impl From<models::Course> for Course {
    fn from(from: models::Course) -> Self {
        let models::Course { rowid: _, id, name } = from;
        Self { id, name }
    }
}
