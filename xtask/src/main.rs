use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "acyclic workspace automation", long_about = None)]
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

        /// Also enable the `tracing` feature, to measure its overhead
        #[arg(long, default_value_t = false)]
        tracing: bool,
    },
}

const BENCHES: &[&str] = &["dag_benchmark"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only, tracing } => {
            if !report_only {
                run_benchmarks(quick, tracing)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool, tracing: bool) -> Result<()> {
    for bench in BENCHES {
        println!("\n>>> Running {}", bench);
        let start = Instant::now();

        let mut cmd = Command::new("cargo");
        cmd.env("CARGO_INCREMENTAL", "0");
        cmd.arg("bench").arg("--bench").arg(bench);
        if tracing {
            cmd.arg("--features").arg("tracing");
        }

        // Args for the test runner (Criterion) go after --
        cmd.arg("--");
        if quick {
            cmd.arg("--measurement-time").arg("0.1");
            cmd.arg("--noplot");
            cmd.arg("--sample-size").arg("10");
        }

        let status = cmd.status().with_context(|| format!("Failed to run bench {}", bench))?;
        if !status.success() {
            anyhow::bail!("Benchmark {} failed", bench);
        }
        println!("Finished {} in {:.2?}", bench, start.elapsed());
    }

    Ok(())
}

/// One measured benchmark: mean time per iteration and, when the benchmark
/// declared element throughput, elements per second.
struct Measurement {
    mean_ns: f64,
    elements_per_sec: Option<f64>,
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");
    let criterion_dir = Path::new("target/criterion");
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut results = BTreeMap::new();
    collect_results(criterion_dir, criterion_dir, &mut results)?;

    let report_path = Path::new("benchmark_results/report.md");
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }

    use std::fmt::Write as _;
    let mut out = String::new();
    writeln!(out, "# Graph Benchmark Report\n")?;
    writeln!(out, "| Benchmark | Mean | Ops/s | Elements/s |")?;
    writeln!(out, "|---|---|---|---|")?;
    for (name, m) in &results {
        let elements = m
            .elements_per_sec
            .map_or_else(|| "-".to_string(), format_rate);
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            name,
            format_time(m.mean_ns),
            format_rate(1e9 / m.mean_ns),
            elements
        )?;
    }

    fs::write(report_path, out)
        .with_context(|| format!("Failed to write {}", report_path.display()))?;
    println!("Report written to {}", report_path.display());
    Ok(())
}

fn format_rate(rate: f64) -> String {
    if rate > 1_000_000.0 {
        format!("{:.2}M", rate / 1_000_000.0)
    } else if rate > 1_000.0 {
        format!("{:.2}K", rate / 1_000.0)
    } else {
        format!("{:.0}", rate)
    }
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{:.0} ns", ns)
    }
}

// Criterion layout: <root>/<group>[/<function>]/new/{estimates,benchmark}.json
fn collect_results(
    root: &Path,
    dir: &Path,
    results: &mut BTreeMap<String, Measurement>,
) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if path.file_name().and_then(|s| s.to_str()) == Some("report") {
                continue;
            }
            collect_results(root, &path, results)?;
            continue;
        }

        if path.file_name().and_then(|s| s.to_str()) != Some("estimates.json") {
            continue;
        }
        let Some(run_dir) = path.parent() else { continue };
        if run_dir.file_name().and_then(|s| s.to_str()) != Some("new") {
            continue;
        }
        let Some(bench_dir) = run_dir.parent() else { continue };

        let estimates: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path)?)
            .with_context(|| format!("Malformed {}", path.display()))?;
        let Some(mean_ns) = estimates
            .get("mean")
            .and_then(|m| m.get("point_estimate"))
            .and_then(serde_json::Value::as_f64)
            .filter(|ns| *ns > 0.0)
        else {
            continue;
        };

        let elements_per_sec = fs::read_to_string(run_dir.join("benchmark.json"))
            .ok()
            .and_then(|content| serde_json::from_str::<serde_json::Value>(&content).ok())
            .and_then(|json| json.get("throughput")?.get("Elements")?.as_f64())
            .map(|elements| elements * 1e9 / mean_ns);

        let name = bench_dir
            .strip_prefix(root)
            .unwrap_or(bench_dir)
            .display()
            .to_string();
        results.insert(name, Measurement { mean_ns, elements_per_sec });
    }

    Ok(())
}
