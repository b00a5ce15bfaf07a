//! SQLx failure reclassification.

use campus_core::AppError;
use tracing::debug;

/// `lock_not_available`: `NOWAIT` or `lock_timeout` expired.
const LOCK_NOT_AVAILABLE: &str = "55P03";
/// `deadlock_detected`: this transaction was chosen as the victim.
const DEADLOCK_DETECTED: &str = "40P01";
/// `serialization_failure`: concurrent update under a stricter isolation
/// level, the optimistic conflict case.
const SERIALIZATION_FAILURE: &str = "40001";

const LOCK_CONTENTION_CODES: [&str; 3] =
    [LOCK_NOT_AVAILABLE, DEADLOCK_DETECTED, SERIALIZATION_FAILURE];

/// Lock contention becomes [`AppError::LockUnavailable`]; anything else is
/// internal.
pub fn map_sqlx_error(err: sqlx::Error) -> AppError {
    let contended = matches!(
        &err,
        sqlx::Error::Database(db_err)
            if db_err.code().is_some_and(|code| LOCK_CONTENTION_CODES.contains(&&*code))
    );

    if contended {
        debug!(error = %err, "database lock contention");
        AppError::lock_unavailable(err)
    } else {
        AppError::internal(err)
    }
}
