pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod record;
pub mod schema;

pub use error::*;
pub use models::*;
pub use pagination::*;
pub use query::*;
pub use record::*;
pub use schema::*;
