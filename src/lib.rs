//! Word search over a fixed character grid.
//!
//! [`GridIndex`] validates and holds the grid; [`WordRanker`] turns a stream
//! of candidate words into the top grid words by request count.
//!
//! ```
//! use wf_helper::{GridIndex, WordRanker};
//!
//! let grid = GridIndex::new(["chwxz", "hello", "aladt", "tcomx"])?;
//! let found = WordRanker::new(&grid).find(Some(["chat", "hello", "down", "zotx"]))?;
//! assert_eq!(found, vec!["chat", "hello", "zotx"]);
//! # Ok::<(), wf_helper::FinderError>(())
//! ```

pub mod error;
pub mod grid;
pub mod logging;
pub mod ranker;
pub mod store;

pub use error::{FinderError, GridProblem, Result};
pub use grid::{GridIndex, MAX_DIM};
pub use ranker::{WordRanker, TOP_N};
pub use store::{grid_hash, ResultStore};
