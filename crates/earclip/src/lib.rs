//! Ear-clipping triangulation of simple 2D polygons.
//!
//! Layout
//! - `geometry`: orientation, area, and containment predicates.
//! - `types`: `Vertex` and `Triangle` values.
//! - `polygon`: the topology engine (`Polygon::triangulate`).
//! - `io`: `x,y` record loader used by the command-line front end.
//! - `scenarios`: fixed self-test suite (`cli --test`).
//! - `rand`: reproducible random star-shaped polygons for tests and benches.
//!
//! Every input is normalized to counter-clockwise order at construction, so
//! callers may pass either winding.

pub mod cfg;
pub mod geometry;
pub mod io;
pub mod polygon;
pub mod rand;
pub mod scenarios;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{EarClipCfg, DUP_EPS, INSIDE_EPS};
pub use io::LoadError;
pub use polygon::{Polygon, PolygonError};
pub use types::{labeled, Triangle, Vertex};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::geometry::{cross, point_in_triangle, signed_area, triangle_area};
    pub use crate::io::{parse_vertices, read_vertices, LoadError};
    pub use crate::polygon::{total_area, Polygon, PolygonError};
    pub use crate::{EarClipCfg, Triangle, Vertex};
}
