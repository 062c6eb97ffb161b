#![forbid(unsafe_code)]

//! Layered layout for compiler IR graphs.
//!
//! `strata` ranks the nodes of a (possibly cyclic) IR graph into rows, packs each row left to
//! right without overlaps, and sets aside lanes for loop back edges. Node sizes come from the
//! caller; rendering is left to the caller as well.
//!
//! ```no_run
//! use strata::graphlib::{EdgeSpec, EdgeType, Graph, NodeKind, NodeSpec};
//!
//! let mut g = Graph::from_specs(
//!     [
//!         NodeSpec::new(0, NodeKind::Start, 80.0, 20.0),
//!         NodeSpec::new(1, NodeKind::Other, 120.0, 20.0),
//!     ],
//!     [EdgeSpec::new(0, 1, 0, EdgeType::Control)],
//! )?;
//! let bounds = strata::layout(&mut g, &strata::LayoutConfig::default())?;
//! # Ok::<(), strata::Error>(())
//! ```

pub use strata_graph as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod back_edges;
pub mod bounds;
pub mod config;
pub mod error;
mod geometry;
pub mod model;
pub mod order;
pub mod pipeline;
pub mod position;
pub mod rank;
pub mod route;
pub mod slots;

pub use config::LayoutConfig;
pub use error::{Error, Result};
pub use model::{LayoutResult, NodePlacement};
pub use pipeline::{compute, layout};
pub use route::{edge_path, edge_paths};
pub use slots::{Direction, SlotTracker};
