pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::{validate_create_payload, CreateStadiumRequest, Stadium, ValidationErrors};
pub use storage::{PostgresStadiumStore, SqliteStadiumStore, StadiumStore, StoreError};
