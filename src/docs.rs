use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use campus_auth::Role;
use campus_core::{ErrorResource, ErrorType, PaginationMeta};
use campus_models::{PaginatedStudents, Student, Teacher, WhoAmI};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::get_students,
        crate::modules::teachers::controller::get_teacher,
        crate::modules::whoami::controller::whoami,
    ),
    components(
        schemas(
            Student,
            Teacher,
            PaginatedStudents,
            PaginationMeta,
            WhoAmI,
            Role,
            ErrorResource,
            ErrorType,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Students", description = "Student records"),
        (name = "Teachers", description = "Teacher records"),
        (name = "Security", description = "Caller identity")
    ),
    info(
        title = "Campus API",
        version = "0.1.0",
        description = "Student and teacher records with role-directional access control.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
