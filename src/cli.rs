use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::RenderConfig;
use crate::error::{TompkinsError, TompkinsResult};
use crate::highlight::{parse_highlight_multi, HighlightSpec};
use crate::plot::render::render_triangle_png;
use crate::plot::types::RenderReport;
use crate::triangle::{build_triangle, Triangle};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tompkins",
    about = "Generate a Tompkins Triangle PNG.",
    allow_negative_numbers = true
)]
pub struct Cli {
    /// Polygon side count (k >= 3). Example: 4 for squares.
    #[arg(long)]
    pub k: i64,
    /// Max row index n_max (rows 0..n).
    #[arg(long)]
    pub n: i64,
    /// Descending diagonal index j to highlight (j=0 is the right edge constant c).
    #[arg(long)]
    pub highlight: Option<i64>,
    /// Comma-separated list of diagonal:color, e.g. 0:red,1:blue,2:#00ff00
    #[arg(long = "highlight-multi")]
    pub highlight_multi: Option<String>,
    /// Output PNG path. If omitted, a name is derived from the arguments.
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// TOML file overriding layout and typography settings.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Also print the triangle rows to stdout.
    #[arg(long)]
    pub print: bool,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// What a successful run produced.
#[derive(Debug)]
pub struct Outcome {
    pub triangle: Triangle,
    pub report: RenderReport,
    /// Absolute path of the written image.
    pub resolved: PathBuf,
}

/// `tompkins_T{k}_n{n}[_j{j}][_multi].png`
pub fn default_output_name(k: i64, n: i64, highlight: Option<i64>, has_multi: bool) -> String {
    let mut name = format!("tompkins_T{}_n{}", k, n);
    if let Some(j) = highlight {
        name.push_str(&format!("_j{}", j));
    }
    if has_multi {
        name.push_str("_multi");
    }
    name.push_str(".png");
    name
}

/// Build, render and write one triangle image.
pub fn run(cli: &Cli) -> TompkinsResult<Outcome> {
    let triangle = build_triangle(cli.k, cli.n)?;

    let multi = cli
        .highlight_multi
        .as_deref()
        .map(parse_highlight_multi)
        .unwrap_or_default();
    let highlights = HighlightSpec::new(cli.highlight, multi);

    let config = match &cli.config {
        Some(path) => RenderConfig::load(path)?,
        None => RenderConfig::default(),
    };

    let out_path = cli.out.clone().unwrap_or_else(|| {
        PathBuf::from(default_output_name(
            cli.k,
            cli.n,
            cli.highlight,
            !highlights.multi.is_empty(),
        ))
    });

    let report = render_triangle_png(&triangle, &highlights, &config, &out_path)?;
    let resolved = std::fs::canonicalize(&report.path).map_err(|e| {
        TompkinsError::io(format!("cannot resolve {}: {}", report.path.display(), e))
    })?;

    Ok(Outcome {
        triangle,
        report,
        resolved,
    })
}
