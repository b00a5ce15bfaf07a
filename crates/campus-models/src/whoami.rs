use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use campus_auth::{Caller, Role};

/// The resolved caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WhoAmI {
    pub id: Uuid,
    pub role: Role,
}

impl From<&Caller> for WhoAmI {
    fn from(caller: &Caller) -> Self {
        Self {
            id: caller.id,
            role: caller.role,
        }
    }
}
