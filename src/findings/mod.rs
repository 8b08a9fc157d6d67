pub mod schema;
pub mod types;

pub use schema::{normalize, RawFinding, SchemaVariant, DEFAULT_SEVERITY};
pub use types::{Finding, Report, SeverityClass, Summary};
