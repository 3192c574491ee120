mod column;
mod schema;
mod table;

pub use column::Column;
pub use schema::Schema;
pub use table::Table;
