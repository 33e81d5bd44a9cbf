pub mod postgres;
pub mod sqlite;
pub mod store;

pub use postgres::PostgresStadiumStore;
pub use sqlite::SqliteStadiumStore;
pub use store::{connect, StadiumStore, StoreError};
