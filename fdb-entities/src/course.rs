#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id   : String,
    pub name : String,
}

/// An instructor registration is scoped to exactly one course.
/// The same person teaching two courses has two registrations.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub course_id : String,
    pub email     : String,
    pub name      : String,
}
