//! Built-in triangulation scenarios (`cli --test`).
//!
//! Each scenario is triangulated once and checked for `n - 2` triangles and
//! for triangle area matching the polygon's shoelace area within `AREA_TOL`.

use std::fmt;

use crate::cfg::EarClipCfg;
use crate::io::{parse_vertices, LoadError};
use crate::polygon::{total_area, Polygon, PolygonError};
use crate::types::{labeled, Vertex};

/// Absolute tolerance between polygon area and summed triangle area.
pub const AREA_TOL: f64 = 1e-9;

const SIMPLE_CONCAVE_CSV: &str = include_str!("../../../data/simple_concave_poly.csv");
const CONCAVE_CSV: &str = include_str!("../../../data/concave_poly.csv");

const CONCAVE_INLINE: [(f64, f64); 6] = [
    (0.0, 0.0),
    (0.0, 1.0),
    (0.5, 0.5),
    (1.0, 1.0),
    (0.8, 0.0),
    (1.0, 0.0),
];

#[derive(Clone, Debug)]
pub struct Scenario {
    pub name: &'static str,
    pub vertices: Vec<Vertex>,
}

impl Scenario {
    pub fn new(name: &'static str, vertices: Vec<Vertex>) -> Self {
        Self { name, vertices }
    }
}

/// Outcome of one scenario run.
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    pub name: &'static str,
    pub vertices: usize,
    pub triangles: usize,
    pub poly_area: f64,
    pub tri_area: f64,
    pub abs_err: f64,
    pub rel_err: f64,
    /// Set when construction or triangulation failed.
    pub error: Option<PolygonError>,
}

impl ScenarioReport {
    pub fn expected_triangles(&self) -> usize {
        self.vertices.saturating_sub(2)
    }

    pub fn passed(&self) -> bool {
        self.error.is_none()
            && self.vertices >= 3
            && self.triangles == self.expected_triangles()
            && self.abs_err <= AREA_TOL
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Test: {} ===", self.name)?;
        writeln!(f, "Vertices        : {}", self.vertices)?;
        writeln!(
            f,
            "Triangles       : {}  (expected {})",
            self.triangles,
            self.expected_triangles()
        )?;
        writeln!(f, "Polygon Area    : {}", self.poly_area)?;
        writeln!(f, "Triang Area     : {}", self.tri_area)?;
        writeln!(f, "Abs Error       : {}", self.abs_err)?;
        writeln!(f, "Rel Error       : {}", self.rel_err)?;
        if let Some(e) = &self.error {
            writeln!(f, "Error           : {e}")?;
        }
        write!(
            f,
            "Result          : {}",
            if self.passed() { "PASS" } else { "FAIL" }
        )
    }
}

/// The fixed scenario list: inline shapes plus the bundled record files.
pub fn builtin() -> Result<Vec<Scenario>, LoadError> {
    let cfg = EarClipCfg::default();
    let mut reversed = CONCAVE_INLINE.to_vec();
    reversed.reverse();

    Ok(vec![
        Scenario::new("Triangle", labeled(&[(0.0, 0.0), (1.0, 0.0), (0.5, 1.0)])),
        Scenario::new(
            "Square",
            labeled(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]),
        ),
        Scenario::new("Simple Concave Inline", labeled(&CONCAVE_INLINE)),
        Scenario::new("Simple Concave Inline (Reversed)", labeled(&reversed)),
        Scenario::new(
            "Small Concave CSV",
            parse_vertices(SIMPLE_CONCAVE_CSV, &cfg)?,
        ),
        Scenario::new("Large Concave CSV", parse_vertices(CONCAVE_CSV, &cfg)?),
        Scenario::new(
            "Almost Collinear",
            labeled(&[(0.0, 0.0), (1.0, 0.001), (2.0, 0.0), (1.0, 1.0)]),
        ),
        Scenario::new(
            "Flat Edge",
            labeled(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (2.0, 1.0), (0.0, 1.0)]),
        ),
    ])
}

/// Triangulate one scenario and compare areas.
pub fn run(scenario: &Scenario) -> ScenarioReport {
    let n = scenario.vertices.len();
    let mut report = ScenarioReport {
        name: scenario.name,
        vertices: n,
        triangles: 0,
        poly_area: 0.0,
        tri_area: 0.0,
        abs_err: f64::INFINITY,
        rel_err: f64::INFINITY,
        error: None,
    };

    let result =
        Polygon::new(scenario.vertices.clone()).and_then(|mut p| Ok((p.area(), p.triangulate()?)));
    match result {
        Ok((poly_area, tris)) => {
            let tri_area = total_area(&tris);
            let abs_err = (poly_area - tri_area).abs();
            report.triangles = tris.len();
            report.poly_area = poly_area;
            report.tri_area = tri_area;
            report.abs_err = abs_err;
            report.rel_err = if poly_area != 0.0 {
                abs_err / poly_area
            } else {
                abs_err
            };
        }
        Err(e) => report.error = Some(e),
    }
    tracing::debug!(
        scenario = report.name,
        passed = report.passed(),
        "scenario"
    );
    report
}

pub fn run_all() -> Result<Vec<ScenarioReport>, LoadError> {
    Ok(builtin()?.iter().map(run).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_builtin_scenario_passes() {
        let reports = run_all().unwrap();
        assert_eq!(reports.len(), 8);
        for r in &reports {
            assert!(r.passed(), "{r}");
        }
    }

    #[test]
    fn bundled_files_drop_closing_duplicate() {
        let scenarios = builtin().unwrap();
        let small = scenarios
            .iter()
            .find(|s| s.name == "Small Concave CSV")
            .unwrap();
        assert_eq!(small.vertices.len(), 5);
        let report = run(small);
        assert!((report.tri_area - 9.0).abs() < 1e-9);
        let large = scenarios
            .iter()
            .find(|s| s.name == "Large Concave CSV")
            .unwrap();
        assert_eq!(large.vertices.len(), 48);
    }

    #[test]
    fn failing_scenario_is_reported_not_panicked() {
        let s = Scenario::new(
            "Collinear",
            labeled(&[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]),
        );
        let r = run(&s);
        assert!(!r.passed());
        assert_eq!(r.error, Some(PolygonError::NoEar { remaining: 4 }));
        assert!(r.to_string().ends_with("Result          : FAIL"));

        let degenerate = run(&Scenario::new("Segment", labeled(&[(0.0, 0.0), (1.0, 0.0)])));
        assert_eq!(
            degenerate.error,
            Some(PolygonError::Degenerate { len: 2 })
        );
        assert_eq!(degenerate.expected_triangles(), 0);
    }
}
