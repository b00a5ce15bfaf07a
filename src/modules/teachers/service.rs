use tracing::instrument;
use uuid::Uuid;

use campus_auth::{Caller, Role, Target, authorize};
use campus_core::AppError;
use campus_db::UserRepository;
use campus_models::Teacher;

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(users))]
    pub async fn get_teacher(
        users: &dyn UserRepository,
        caller: &Caller,
        id: Uuid,
    ) -> Result<Teacher, AppError> {
        authorize(caller, &Target::Teacher(id))?;

        users
            .find_by_id(id, Role::Teacher)
            .await?
            .map(Teacher::from)
            .ok_or_else(|| AppError::not_found(format!("Teacher#{id} not found")))
    }
}
