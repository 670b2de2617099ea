//! Triangulate a few random star-shaped polygons and print counts and areas.
//!
//! Usage:
//!   cargo run -p earclip --example star_polygons -- [samples]

use earclip::polygon::total_area;
use earclip::rand::{draw_star_polygon, StarCfg, VertexCount};
use earclip::Polygon;

fn main() {
    let samples: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let cfg = StarCfg {
        vertex_count: VertexCount::Uniform { min: 5, max: 40 },
        ..StarCfg::default()
    };
    for seed in 0..samples {
        let verts = draw_star_polygon(&cfg, 2025 + seed);
        let n = verts.len();
        let mut poly = match Polygon::new(verts) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("sample {seed}: {e}");
                continue;
            }
        };
        match poly.triangulate() {
            Ok(tris) => println!(
                "sample {seed}: n={n}, triangles={}, polygon area={:.6}, triangle area={:.6}",
                tris.len(),
                poly.area(),
                total_area(&tris)
            ),
            Err(e) => eprintln!("sample {seed}: {e}"),
        }
    }
}
