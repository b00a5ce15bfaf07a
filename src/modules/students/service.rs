use tracing::instrument;
use uuid::Uuid;

use campus_auth::{Caller, Role, Target, authorize};
use campus_core::{AppError, Page, PaginationMeta};
use campus_db::UserRepository;
use campus_models::{PaginatedStudents, Student};

pub struct StudentService;

impl StudentService {
    /// Reads one student after checking the caller may see it.
    #[instrument(skip(users))]
    pub async fn get_student(
        users: &dyn UserRepository,
        caller: &Caller,
        id: Uuid,
    ) -> Result<Student, AppError> {
        authorize(caller, &Target::Student(id))?;

        users
            .find_by_id(id, Role::Student)
            .await?
            .map(Student::from)
            .ok_or_else(|| AppError::not_found(format!("Student#{id} not found")))
    }

    #[instrument(skip(users))]
    pub async fn list_students(
        users: &dyn UserRepository,
        caller: &Caller,
        page: Page,
    ) -> Result<PaginatedStudents, AppError> {
        authorize(caller, &Target::Students)?;

        let (students, total) = users.list_by_role(Role::Student, page).await?;

        Ok(PaginatedStudents {
            data: students.into_iter().map(Student::from).collect(),
            meta: PaginationMeta::new(page, total),
        })
    }
}
