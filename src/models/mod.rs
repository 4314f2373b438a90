pub mod row;
pub mod schema;

pub use row::{Row, row_from_bytes};
pub use schema::parse_schema;
