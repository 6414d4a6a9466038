pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::link_profile_repository::LinkProfileRepository;
