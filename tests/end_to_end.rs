//! End-to-end runs through the command-line surface.

use std::path::PathBuf;

use clap::Parser;
use tompkins::cli::{run, Cli};
use tompkins::error::ErrorKind;
use tompkins::highlight::HighlightSpec;
use tompkins::plot::layout::layout_scene;
use tompkins::plot::types::HighlightStyle;
use tompkins::config::RenderConfig;
use tompkins::triangle::build_triangle;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tompkins-e2e-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["tompkins"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).unwrap()
}

#[test]
fn test_k3_writes_image() {
    let dir = scratch_dir("k3");
    let out = dir.join("k3.png");
    let outcome = run(&cli(&["--k", "3", "--n", "2", "--out", out.to_str().unwrap()])).unwrap();

    assert_eq!(
        outcome.triangle.rows(),
        &[vec![1], vec![1, 1], vec![1, 2, 1]]
    );
    assert!(outcome.resolved.is_absolute());
    assert!(outcome.resolved.ends_with("k3.png"));
    let bytes = std::fs::read(&outcome.resolved).unwrap();
    assert_eq!(&bytes[1..4], b"PNG");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_k5_single_highlight_marks_diagonal_one() {
    let dir = scratch_dir("k5");
    let out = dir.join("k5.png");
    let outcome = run(&cli(&[
        "--k",
        "5",
        "--n",
        "4",
        "--highlight",
        "1",
        "--out",
        out.to_str().unwrap(),
    ]))
    .unwrap();
    assert_eq!(outcome.report.highlights, 4);

    let spec = HighlightSpec::new(Some(1), Default::default());
    let scene = layout_scene(&outcome.triangle, &spec, &RenderConfig::default()).unwrap();
    let marked: Vec<(usize, usize)> = scene
        .highlights
        .iter()
        .filter(|m| m.style == HighlightStyle::Default)
        .map(|m| (m.n, m.r))
        .collect();
    assert_eq!(marked, vec![(1, 0), (2, 1), (3, 2), (4, 3)]);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_malformed_multi_entries_are_skipped() {
    let dir = scratch_dir("multi");
    let out = dir.join("multi.png");
    let outcome = run(&cli(&[
        "--k",
        "4",
        "--n",
        "5",
        "--highlight-multi",
        "0:red,bad,2:blue",
        "--out",
        out.to_str().unwrap(),
    ]))
    .unwrap();
    // Diagonal 0 has 6 cells, diagonal 2 has 4.
    assert_eq!(outcome.report.highlights, 10);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_single_and_multi_stack() {
    let dir = scratch_dir("stack");
    let out = dir.join("stack.png");
    let outcome = run(&cli(&[
        "--k",
        "6",
        "--n",
        "3",
        "--highlight",
        "0",
        "--highlight-multi",
        "0:#00ff00",
        "--out",
        out.to_str().unwrap(),
    ]))
    .unwrap();
    assert_eq!(outcome.report.highlights, 8);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_css_and_tableau_colors_accepted() {
    let dir = scratch_dir("colors");
    let out = dir.join("colors.png");
    let outcome = run(&cli(&[
        "--k",
        "5",
        "--n",
        "4",
        "--highlight",
        "1",
        "--highlight-multi",
        "0:darkgreen,2:tab:blue,3:C3",
        "--out",
        out.to_str().unwrap(),
    ]))
    .unwrap();
    // Diagonal 1: 4 cells, diagonal 0: 5, diagonal 2: 3, diagonal 3: 2.
    assert_eq!(outcome.report.highlights, 4 + 5 + 3 + 2);
    assert!(out.exists());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_invalid_k_fails_before_writing() {
    let dir = scratch_dir("badk");
    let out = dir.join("never.png");
    let err = run(&cli(&["--k", "2", "--n", "3", "--out", out.to_str().unwrap()])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::InvalidParameter);
    assert!(!out.exists());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_unwritable_output_is_io_error() {
    let out = scratch_dir("io").join("no-such-dir").join("out.png");
    let err = run(&cli(&["--k", "4", "--n", "2", "--out", out.to_str().unwrap()])).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Io);
}

#[test]
fn test_config_file_is_applied() {
    let dir = scratch_dir("config");
    let config_path = dir.join("render.toml");
    std::fs::write(&config_path, "cell_px = 36.0\ncrop_padding_px = 4\n").unwrap();

    let small_out = dir.join("small.png");
    let small = run(&cli(&[
        "--k",
        "4",
        "--n",
        "12",
        "--config",
        config_path.to_str().unwrap(),
        "--out",
        small_out.to_str().unwrap(),
    ]))
    .unwrap();
    let big_out = dir.join("big.png");
    let big = run(&cli(&["--k", "4", "--n", "12", "--out", big_out.to_str().unwrap()])).unwrap();

    assert!(small.report.width < big.report.width);
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_negative_highlight_matches_nothing() {
    let dir = scratch_dir("neg");
    let out = dir.join("neg.png");
    let outcome = run(&cli(&[
        "--k",
        "4",
        "--n",
        "3",
        "--highlight",
        "-1",
        "--out",
        out.to_str().unwrap(),
    ]))
    .unwrap();
    assert_eq!(outcome.report.highlights, 0);
    assert!(out.exists());
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn test_builder_and_cli_agree() {
    let dir = scratch_dir("agree");
    let out = dir.join("agree.png");
    let outcome = run(&cli(&["--k", "7", "--n", "6", "--out", out.to_str().unwrap()])).unwrap();
    assert_eq!(outcome.triangle, build_triangle(7, 6).unwrap());
    std::fs::remove_dir_all(&dir).ok();
}
