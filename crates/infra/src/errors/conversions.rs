//! Conversions from external infrastructure errors into domain errors.

use rostering_domain::RosteringError;
use tokio::task::JoinError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub RosteringError);

impl From<InfraError> for RosteringError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<RosteringError> for InfraError {
    fn from(value: RosteringError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoRosteringError {
    fn into_rostering(self) -> RosteringError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → RosteringError */
/* -------------------------------------------------------------------------- */

#[cfg(feature = "sqlite")]
impl IntoRosteringError for rusqlite::Error {
    fn into_rostering(self) -> RosteringError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match (err.code, err.extended_code) {
                    (ErrorCode::DatabaseBusy, _) => {
                        RosteringError::Database("database is busy".into())
                    }
                    (ErrorCode::DatabaseLocked, _) => {
                        RosteringError::Database("database is locked".into())
                    }
                    (ErrorCode::ConstraintViolation, 1555 | 2067) => {
                        RosteringError::Database("unique constraint violation".into())
                    }
                    (ErrorCode::CannotOpen, _) => {
                        RosteringError::Database(format!("unable to open database: {message}"))
                    }
                    _ => RosteringError::Database(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => RosteringError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                RosteringError::Database(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                RosteringError::Database(format!("invalid column type: {ty}"))
            }
            RE::InvalidPath(path) => RosteringError::Database(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => RosteringError::Database(other.to_string()),
        }
    }
}

#[cfg(feature = "sqlite")]
impl From<rusqlite::Error> for InfraError {
    fn from(value: rusqlite::Error) -> Self {
        InfraError(value.into_rostering())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → RosteringError */
/* -------------------------------------------------------------------------- */

#[cfg(feature = "sqlite")]
impl IntoRosteringError for r2d2::Error {
    fn into_rostering(self) -> RosteringError {
        RosteringError::Database(format!("connection pool unavailable: {self}"))
    }
}

#[cfg(feature = "sqlite")]
impl From<r2d2::Error> for InfraError {
    fn from(value: r2d2::Error) -> Self {
        InfraError(value.into_rostering())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → RosteringError */
/* -------------------------------------------------------------------------- */

impl IntoRosteringError for JoinError {
    fn into_rostering(self) -> RosteringError {
        if self.is_cancelled() {
            RosteringError::Internal("blocking task was cancelled".into())
        } else {
            RosteringError::Internal(format!("blocking task panicked: {self}"))
        }
    }
}

impl From<JoinError> for InfraError {
    fn from(value: JoinError) -> Self {
        InfraError(value.into_rostering())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
