//! Edge-list input and output.
//!
//! Edge lists are CSV files with the header `From,To,Length`, one directed edge per row.

pub mod fs_walk;
pub mod loader;

use serde::{Deserialize, Serialize};

pub use fs_walk::{walk_tree, write_edge_list, WalkerConfig};
pub use loader::{load_edges, load_from_path, InvalidRowPolicy, LoaderConfig};

/// One row of an edge list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeRecord {
    #[serde(rename = "From")]
    pub from: String,
    #[serde(rename = "To")]
    pub to: String,
    #[serde(rename = "Length")]
    pub length: f64,
}

impl EdgeRecord {
    pub fn new(from: impl Into<String>, to: impl Into<String>, length: f64) -> Self {
        EdgeRecord {
            from: from.into(),
            to: to.into(),
            length,
        }
    }
}

/// Column names written and expected on the first line of an edge list
pub const HEADER: [&str; 3] = ["From", "To", "Length"];
