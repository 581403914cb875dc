//! Interactive grid-based shortest-path visualizer.
//!
//! The core of the crate is an incremental A* engine ([`algorithms::a_star::search`])
//! over a mutable square [`grid::Grid`]: a caller paints walls and endpoints,
//! recomputes neighbor caches, and then watches the search frontier expand
//! cell-by-cell through a step callback until the path is found and animated
//! in. Presentation is decoupled behind that callback; the crate ships a
//! terminal renderer and a CLI demo binary, plus a road-network grid builder
//! for searching over pre-projected real-world street layouts.

pub mod algorithms;
pub mod config;
pub mod grid;
pub mod render;
pub mod road_network;
pub mod scenario;
pub mod stats;
