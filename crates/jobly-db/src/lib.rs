//! # Jobly DB
//!
//! SQL building helpers used by the persistence layer.
//!
//! - [`partial_update`]: `SET` clause generation for partial-record updates
//!
//! # Example
//!
//! ```ignore
//! use jobly_db::{ColumnMap, PartialUpdate, sql_for_partial_update};
//! use serde_json::json;
//!
//! let data = PartialUpdate::new().set("firstName", "Aliya").set("age", 32);
//! let columns = ColumnMap::new().with("firstName", "first_name");
//!
//! let clause = sql_for_partial_update(&data, &columns)?;
//! assert_eq!(clause.set_cols, r#""first_name"=$1, "age"=$2"#);
//! assert_eq!(clause.values, vec![json!("Aliya"), json!(32)]);
//! ```

pub mod partial_update;

pub use partial_update::{Clause, ColumnMap, PartialUpdate, sql_for_partial_update};
