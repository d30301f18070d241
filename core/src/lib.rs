pub mod api;
pub mod cli;
pub mod error;
pub mod ingest;
pub mod selection;
pub mod tree;
pub mod types;

pub use api::Diagnoser;
pub use cli::report::TextReport;
pub use error::{DiagnoserError, Result};
pub use ingest::{parse_data, parse_records};
pub use selection::optimal_tree;
pub use tree::{build_tree, Node};
pub use types::*;
