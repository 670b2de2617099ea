use anyhow::{bail, Context, Result};
use clap::Parser;
use earclip::polygon::total_area;
use earclip::{scenarios, EarClipCfg, Polygon, Triangle, DUP_EPS, INSIDE_EPS};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod export;
mod provenance;

use provenance::RunSummary;

const DEFAULT_INPUT: &str = "data/concave_poly.csv";

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Ear-clipping triangulation of simple 2D polygons")]
#[command(after_help = concat!(
    "Examples:\n",
    "  cli                                    triangulate the default polygon\n",
    "  cli data/simple_concave_poly.csv       triangulate a file, no plot\n",
    "  cli data/simple_concave_poly.csv plot  also export triangles and plot them\n",
    "  cli --test                             run the built-in scenarios only",
))]
struct Cmd {
    /// Polygon file with one `x,y` record per line (default: data/concave_poly.csv)
    input: Option<PathBuf>,
    /// Pass the keyword `plot` to export triangles and visualize them
    keyword: Option<String>,
    /// Same as the `plot` keyword
    #[arg(long)]
    plot: bool,
    /// Run the built-in scenarios and exit
    #[arg(long)]
    test: bool,
    /// Triangle export written when plotting
    #[arg(long, default_value = "triangles.csv")]
    out: PathBuf,
    /// Interpreter used to launch the plot script
    #[arg(long, default_value = "python")]
    python: String,
    #[arg(long, default_value = "scripts/visualize_triangulation.py")]
    plot_script: PathBuf,
    /// Containment slack of the ear test
    #[arg(long, default_value_t = INSIDE_EPS)]
    eps_inside: f64,
    /// Tolerance for dropping a closing duplicate record
    #[arg(long, default_value_t = DUP_EPS)]
    eps_dup: f64,
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

impl Cmd {
    fn cfg(&self) -> EarClipCfg {
        EarClipCfg {
            eps_inside: self.eps_inside,
            eps_dup: self.eps_dup,
        }
    }

    fn wants_plot(&self) -> bool {
        match self.keyword.as_deref() {
            Some("plot") => true,
            Some(other) => {
                tracing::warn!(keyword = other, "ignoring unknown argument");
                self.plot
            }
            None => self.plot,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    if cmd.test {
        return run_scenarios();
    }

    let input = match &cmd.input {
        Some(p) => p.clone(),
        None => {
            let p = default_input();
            tracing::info!(input = %p.display(), "no input file provided, using default polygon");
            p
        }
    };
    let cfg = cmd.cfg();
    let (poly, triangles) = triangulate_file(&input, cfg)?;
    let area = total_area(&triangles);
    println!(
        "Ear-Clipping Triangulation Algorithm produced {} triangles with cumulative area = {:.13}",
        triangles.len(),
        area
    );

    if cmd.wants_plot() {
        let summary = RunSummary {
            input: input.to_string_lossy().into_owned(),
            vertices: poly.len(),
            triangles: triangles.len(),
            area,
            eps_inside: cfg.eps_inside,
            eps_dup: cfg.eps_dup,
        };
        if let Err(e) = export_and_plot(&cmd, &input, &triangles, &summary) {
            tracing::warn!("{e:#}; visualization skipped");
        }
    }
    Ok(())
}

fn default_input() -> PathBuf {
    let local = PathBuf::from(DEFAULT_INPUT);
    if local.exists() {
        local
    } else {
        // running from a subdirectory such as target/
        Path::new("..").join(DEFAULT_INPUT)
    }
}

fn triangulate_file(input: &Path, cfg: EarClipCfg) -> Result<(Polygon, Vec<Triangle>)> {
    let mut poly = Polygon::from_csv_with_cfg(input, cfg)
        .with_context(|| format!("loading {}", input.display()))?;
    tracing::info!(vertices = poly.len(), input = %input.display(), "polygon loaded");
    let triangles = poly
        .triangulate()
        .with_context(|| format!("triangulating {}", input.display()))?;
    Ok((poly, triangles))
}

fn export_and_plot(
    cmd: &Cmd,
    input: &Path,
    triangles: &[Triangle],
    summary: &RunSummary,
) -> Result<()> {
    export::write_triangles_csv(&cmd.out, triangles)?;
    provenance::write_sidecar(&cmd.out, summary)?;
    if let Err(e) = plot(&cmd.python, &cmd.plot_script, input, &cmd.out) {
        tracing::warn!("{e:#}");
    }
    Ok(())
}

fn plot(python: &str, script: &Path, polygon: &Path, triangles: &Path) -> Result<()> {
    tracing::info!(python, script = %script.display(), "plot");
    let status = Command::new(python)
        .arg(script)
        .arg(polygon)
        .arg(triangles)
        .status()
        .with_context(|| format!("launching {python}"))?;
    if !status.success() {
        bail!("visualization command failed with status {:?}", status.code());
    }
    Ok(())
}

fn run_scenarios() -> Result<()> {
    let reports = scenarios::run_all().context("loading bundled scenarios")?;
    let passed = reports.iter().filter(|r| r.passed()).count();
    let failed = reports.len() - passed;
    for r in &reports {
        println!("\n{r}");
    }
    println!("\n---------------------------------");
    println!("Tests Passed = {passed}, Failed = {failed}");
    println!("---------------------------------");
    if failed > 0 {
        bail!("{failed} scenario(s) failed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn parses_plot_keyword_and_flags() {
        let cmd = Cmd::parse_from(["cli", "poly.csv", "plot"]);
        assert_eq!(cmd.input.as_deref(), Some(Path::new("poly.csv")));
        assert!(cmd.wants_plot());

        let cmd = Cmd::parse_from(["cli", "poly.csv", "--plot"]);
        assert!(cmd.wants_plot());

        let cmd = Cmd::parse_from(["cli", "poly.csv"]);
        assert!(!cmd.wants_plot());
        assert_eq!(cmd.cfg(), EarClipCfg::default());
        assert_eq!(cmd.out, PathBuf::from("triangles.csv"));

        let cmd = Cmd::parse_from(["cli", "--test"]);
        assert!(cmd.test);
        assert!(cmd.input.is_none());
    }

    #[test]
    fn help_is_a_clap_display_error() {
        let err = Cmd::try_parse_from(["cli", "-h"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn triangulates_a_closed_ring_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.csv");
        fs::write(&input, "0,0\n1,0\n\n1,1\n0,1\n0,0\n").unwrap();
        let (poly, tris) = triangulate_file(&input, EarClipCfg::default()).unwrap();
        assert_eq!(poly.len(), 4);
        assert_eq!(tris.len(), 2);
        assert!((total_area(&tris) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let err = triangulate_file(Path::new("no/such/poly.csv"), EarClipCfg::default())
            .unwrap_err();
        assert!(format!("{err:#}").contains("no/such/poly.csv"));
    }

    #[test]
    fn malformed_polygon_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("line.csv");
        fs::write(&input, "0,0\n1,0\n2,0\n3,0\n").unwrap();
        let err = triangulate_file(&input, EarClipCfg::default()).unwrap_err();
        assert!(format!("{err:#}").contains("no ear found"));
    }

    #[test]
    fn export_writes_rows_and_sidecar_even_if_plot_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.csv");
        fs::write(&input, "0,0\n1,0\n1,1\n0,1\n").unwrap();
        let out = dir.path().join("tris.csv");
        let out_arg = out.to_string_lossy().into_owned();
        let input_arg = input.to_string_lossy().into_owned();
        let cmd = Cmd::parse_from([
            "cli",
            input_arg.as_str(),
            "plot",
            "--out",
            out_arg.as_str(),
            "--python",
            "definitely-not-a-python-binary",
        ]);
        let (poly, tris) = triangulate_file(&input, cmd.cfg()).unwrap();
        let summary = RunSummary {
            input: input_arg.clone(),
            vertices: poly.len(),
            triangles: tris.len(),
            area: total_area(&tris),
            eps_inside: cmd.eps_inside,
            eps_dup: cmd.eps_dup,
        };
        export_and_plot(&cmd, &input, &tris, &summary).unwrap();
        assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 2);
        assert!(dir.path().join("tris.provenance.json").exists());
    }

    #[test]
    fn bundled_scenarios_pass() {
        assert!(run_scenarios().is_ok());
    }
}
