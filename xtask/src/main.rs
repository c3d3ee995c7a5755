use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "duograph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH_TARGET: &str = "graph_benchmark";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// Workloads measured against a petgraph equivalent: (ours, petgraph).
const BASELINES: &[(&str, &str)] = &[
    ("weighted_digraph_dijkstra", "petgraph_dijkstra"),
    ("labeled_graph_components", "petgraph_components"),
];

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!("Compiling benchmarks...");
    let status = Command::new("cargo")
        .args(["build", "--bench", BENCH_TARGET, "--release"])
        .status()
        .context("Failed to spawn cargo build")?;
    if !status.success() {
        anyhow::bail!("Failed to compile benchmarks");
    }

    println!("\n>>> Running {BENCH_TARGET}");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.env("CARGO_INCREMENTAL", "0");
    cmd.args(["bench", "--bench", BENCH_TARGET]);

    // Args for the test runner (Criterion) go after --
    cmd.arg("--");
    if quick {
        cmd.arg("--measurement-time").arg("0.1");
        cmd.arg("--noplot");
        cmd.arg("--sample-size").arg("10");
    }

    let status = cmd
        .status()
        .with_context(|| format!("Failed to run bench {BENCH_TARGET}"))?;
    if !status.success() {
        anyhow::bail!("Benchmark {BENCH_TARGET} failed");
    }
    println!("Finished in {:.2?}", start.elapsed());

    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let timings = collect_timings(criterion_dir)?;
    if timings.is_empty() {
        eprintln!("No estimates found under {}", criterion_dir.display());
        return Ok(());
    }

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("Failed to create {}", report_path.display()))?;

    writeln!(file, "# duograph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean time | Ops/s |")?;
    writeln!(file, "|---|---|---|")?;
    for (workload, ns) in &timings {
        writeln!(file, "| {workload} | {} | {} |", format_time(*ns), format_ops(1e9 / ns))?;
    }

    let compared: Vec<_> = BASELINES
        .iter()
        .filter_map(|(ours, theirs)| {
            let a = timings.get(*ours)?;
            let b = timings.get(*theirs)?;
            Some((*ours, *theirs, b / a))
        })
        .collect();
    if !compared.is_empty() {
        writeln!(file)?;
        writeln!(file, "## Against petgraph")?;
        writeln!(file)?;
        writeln!(file, "| duograph | petgraph | Speedup |")?;
        writeln!(file, "|---|---|---|")?;
        for (ours, theirs, speedup) in compared {
            writeln!(file, "| {ours} | {theirs} | **{speedup:.2}x** |")?;
        }
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Mean time in nanoseconds per workload, read from `<workload>/new/estimates.json`.
fn collect_timings(criterion_dir: &Path) -> Result<BTreeMap<String, f64>> {
    let mut timings = BTreeMap::new();
    let entries = fs::read_dir(criterion_dir)
        .with_context(|| format!("Failed to read {}", criterion_dir.display()))?;

    for entry in entries.flatten() {
        let workload_dir = entry.path();
        let Some(workload) = workload_dir.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if workload == "report" {
            continue;
        }

        let estimates_path = workload_dir.join("new").join("estimates.json");
        let Ok(content) = fs::read_to_string(&estimates_path) else {
            continue;
        };
        let estimates: Estimates = serde_json::from_str(&content)
            .with_context(|| format!("Malformed {}", estimates_path.display()))?;
        if estimates.mean.point_estimate > 0.0 {
            timings.insert(workload.to_string(), estimates.mean.point_estimate);
        }
    }

    Ok(timings)
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_ops(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K", ops / 1_000.0)
    } else {
        format!("{ops:.0}")
    }
}
