//! Administrative commands backing the `campus-cli` binary.

use sqlx::PgPool;
use tracing::info;

/// A demo account inserted by [`seed_demo_users`].
pub struct DemoUser {
    pub reference: &'static str,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
}

pub const DEMO_USERS: [DemoUser; 4] = [
    DemoUser {
        reference: "STD21001",
        first_name: "Ryan",
        last_name: "Andria",
        email: "ryan@hei.school",
        role: "student",
    },
    DemoUser {
        reference: "STD21002",
        first_name: "Two",
        last_name: "Student",
        email: "student2@hei.school",
        role: "student",
    },
    DemoUser {
        reference: "TCR21001",
        first_name: "Teacher",
        last_name: "One",
        email: "teacher1@hei.school",
        role: "teacher",
    },
    DemoUser {
        reference: "TCR21002",
        first_name: "Teacher",
        last_name: "Two",
        email: "teacher2@hei.school",
        role: "teacher",
    },
];

/// Inserts [`DEMO_USERS`], skipping any whose email already exists.
///
/// Returns the number of rows inserted.
pub async fn seed_demo_users(pool: &PgPool) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    for user in &DEMO_USERS {
        let result = sqlx::query(
            r#"
            INSERT INTO users (ref, first_name, last_name, email, role)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(user.reference)
        .bind(user.first_name)
        .bind(user.last_name)
        .bind(user.email)
        .bind(user.role)
        .execute(&mut *tx)
        .await?;

        inserted += result.rows_affected();
    }

    tx.commit().await?;
    info!(inserted, "demo users seeded");

    Ok(inserted)
}
