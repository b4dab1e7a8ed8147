//! Corpus Cleaning Tool
//!
//! This binary runs the cleaning pipeline over a line-per-document text file,
//! the way a dataset column of comments would be fed through it. It can print
//! the cleaned corpus, measure throughput, show how each flag changes a few
//! sample lines, or export the built-in tables for editing.
//!
//! ## Usage
//!
//! ```bash
//! # Clean every line and print the result
//! ./target/release/scour_bench clean comments.txt lowercase,punctuation,contractions
//!
//! # Measure serial and parallel throughput with every stage on
//! ./target/release/scour_bench bench comments.txt all
//!
//! # Print each line under the single-flag, paired-flag and all-flag configs
//! ./target/release/scour_bench grid comments.txt
//!
//! # Write the built-in tables to a directory
//! ./target/release/scour_bench tables ./my-tables
//!
//! # Use edited tables instead of the built-in ones
//! ./target/release/scour_bench clean comments.txt all --tables ./my-tables
//! ```
//!
//! Invalid UTF-8 lines are replaced with U+FFFD placeholders, never skipped.
//! Set `RUST_LOG=debug` to see table sizes at startup.

use std::env;
use std::error::Error;
use std::fs;
use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

use scour_core::resources::loader::render_builtin;
use scour_core::{CleanConfig, ConfigError, LexicalResources, Pipeline, Table};
use tracing::info;
use tracing_subscriber::EnvFilter;

const WARMUP_RUNS: usize = 1;
const MEASURE_RUNS: usize = 5;
const GRID_SAMPLE_LINES: usize = 5;

const USAGE: &str = "Usage: scour_bench <clean|bench|grid> <path> [flags] [--tables <dir>]\n       scour_bench tables <dir>";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let tables_dir = match args.iter().position(|a| a == "--tables") {
        Some(i) if i + 1 < args.len() => {
            let dir = args.remove(i + 1);
            args.remove(i);
            Some(dir)
        }
        Some(_) => return Err("--tables needs a directory".into()),
        None => None,
    };

    let (Some(mode), Some(path)) = (args.first(), args.get(1)) else {
        eprintln!("{}", USAGE);
        process::exit(1);
    };

    if mode == "tables" {
        return export_tables(Path::new(path));
    }

    let config: CleanConfig = args.get(2).map(String::as_str).unwrap_or("all").parse()?;

    let resources = match &tables_dir {
        Some(dir) => {
            info!(dir = %dir, "loading tables");
            LexicalResources::from_dir(dir)?
        }
        None => LexicalResources::english()?,
    };
    let pipeline = Pipeline::new(resources);

    let bytes = fs::read(path)?;
    let lines = split_lines(&bytes);

    info!(path = %path, size = %fmt_bytes(bytes.len() as u64), lines = lines.len(), "corpus loaded");

    match mode.as_str() {
        "clean" => {
            for cleaned in pipeline.clean_batch(&lines, config) {
                println!("{}", cleaned);
            }
        }
        "bench" => {
            info!(%config, "benchmarking");
            bench_serial(&pipeline, &lines, bytes.len(), config);
            bench_batch(&pipeline, &lines, bytes.len(), config);
        }
        "grid" => print_grid(&pipeline, &lines)?,
        other => return Err(format!("unknown mode `{}`\n{}", other, USAGE).into()),
    }

    Ok(())
}

/// One document per line. A final newline does not start another document.
fn split_lines(bytes: &[u8]) -> Vec<String> {
    if bytes.is_empty() {
        return Vec::new();
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    body.split(|&b| b == b'\n')
        .map(|line| String::from_utf8_lossy(line.strip_suffix(b"\r").unwrap_or(line)).into_owned())
        .collect()
}

fn export_tables(dir: &Path) -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(dir)?;
    for table in Table::ALL {
        fs::write(dir.join(table.file_name()), render_builtin(table))?;
        info!(table = table.name(), file = table.file_name(), "table written");
    }
    Ok(())
}

fn bench_serial(pipeline: &Pipeline, lines: &[String], input_bytes: usize, config: CleanConfig) {
    println!("=== Clean (serial) ===");

    let run = || {
        let mut tokens = 0u64;
        for line in lines {
            let out = pipeline.clean(line, config);
            tokens += out.split(' ').filter(|t| !t.is_empty()).count() as u64;
        }
        std::hint::black_box(tokens)
    };

    warmup(|| {
        run();
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| tokens = run());

    print_perf("Serial", input_bytes, elapsed, tokens);
}

fn bench_batch(pipeline: &Pipeline, lines: &[String], input_bytes: usize, config: CleanConfig) {
    println!("=== Clean (batch, parallel) ===");

    let run = || {
        let out = pipeline.clean_batch(lines, config);
        let tokens = out
            .iter()
            .map(|s| s.split(' ').filter(|t| !t.is_empty()).count() as u64)
            .sum::<u64>();
        std::hint::black_box(tokens)
    };

    warmup(|| {
        run();
    });

    let mut tokens = 0u64;
    let elapsed = measure(|| tokens = run());

    print_perf("Batch", input_bytes, elapsed, tokens);
}

/// Single flags, the pairs worth comparing, then everything on.
fn grid_configs() -> Result<Vec<CleanConfig>, ConfigError> {
    let mut configs: Vec<CleanConfig> = (0..7).map(|bit| CleanConfig::from_bits(1 << bit)).collect();
    for pair in ["stopwords,stem", "stem,contractions", "stopwords,contractions"] {
        configs.push(pair.parse::<CleanConfig>()?);
    }
    configs.push(CleanConfig::all());
    Ok(configs)
}

fn print_grid(pipeline: &Pipeline, lines: &[String]) -> Result<(), ConfigError> {
    let configs = grid_configs()?;
    for line in lines.iter().filter(|l| !l.trim().is_empty()).take(GRID_SAMPLE_LINES) {
        println!("{}", line);
        for config in &configs {
            println!("  {:<40} {}", config.to_string(), pipeline.clean(line, *config));
        }
        println!();
    }
    Ok(())
}

fn warmup<F: FnMut()>(mut f: F) {
    (0..WARMUP_RUNS).for_each(|_| f());
}

/// Median wall time over `MEASURE_RUNS` runs.
fn measure<F: FnMut()>(mut f: F) -> Duration {
    let mut runs: Vec<Duration> = (0..MEASURE_RUNS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    runs.sort_unstable();
    runs[runs.len() / 2]
}

fn print_perf(label: &str, input_bytes: usize, elapsed: Duration, tokens: u64) {
    let secs = elapsed.as_secs_f64().max(f64::EPSILON);
    let mib = input_bytes as f64 / (1024.0 * 1024.0);

    println!("{:-<32}", "");
    println!("{:<12}: {}", "Mode", label);
    println!("{:<12}: {:.3} s (median of {})", "Elapsed", secs, MEASURE_RUNS);
    println!("{:<12}: {:.2} MiB/s", "Throughput", mib / secs);
    if tokens > 0 {
        println!("{:<12}: {}", "Tokens out", fmt_count(tokens));
        println!("{:<12}: {}", "Tokens/sec", fmt_count((tokens as f64 / secs) as u64));
    }
    println!("{:-<32}\n", "");
}

fn fmt_bytes(b: u64) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];
    if b < 1024 {
        return format!("{} B", b);
    }
    let mut value = b as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit + 1 < UNITS.len() {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}

/// Groups digits in threes with `_`, like a Rust literal.
fn fmt_count(n: u64) -> String {
    let digits = n.to_string();
    let head = digits.len() % 3;
    let mut groups: Vec<&str> = Vec::with_capacity(digits.len() / 3 + 1);
    if head > 0 {
        groups.push(&digits[..head]);
    }
    groups.extend(
        digits.as_bytes()[head..]
            .chunks(3)
            .filter_map(|chunk| std::str::from_utf8(chunk).ok()),
    );
    groups.join("_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_has_singles_pairs_and_all() {
        let configs = grid_configs().unwrap();
        assert_eq!(configs.len(), 11);
        for (bit, config) in configs[..7].iter().enumerate() {
            assert_eq!(config.bits(), 1 << bit);
        }
        assert_eq!(
            configs[7],
            CleanConfig {
                remove_stopwords: true,
                stem: true,
                ..CleanConfig::none()
            }
        );
        assert_eq!(configs[10], CleanConfig::all());

        let mut bits: Vec<u8> = configs.iter().map(|c| c.bits()).collect();
        bits.sort_unstable();
        bits.dedup();
        assert_eq!(bits.len(), configs.len());
    }

    #[test]
    fn split_lines_drops_final_newline() {
        assert_eq!(split_lines(b"a\nb\n"), ["a", "b"]);
        assert_eq!(split_lines(b"a\r\nb"), ["a", "b"]);
        assert_eq!(split_lines(b"a\n\nb\n\n"), ["a", "", "b", ""]);
        assert_eq!(split_lines(b"\n"), [""]);
        assert!(split_lines(b"").is_empty());
    }

    #[test]
    fn split_lines_replaces_invalid_utf8() {
        assert_eq!(split_lines(b"ok\n\xffx\n"), ["ok", "\u{fffd}x"]);
    }

    #[test]
    fn byte_sizes() {
        assert_eq!(fmt_bytes(0), "0 B");
        assert_eq!(fmt_bytes(1023), "1023 B");
        assert_eq!(fmt_bytes(1536), "1.50 KiB");
        assert_eq!(fmt_bytes(3 * 1024 * 1024), "3.00 MiB");
        assert_eq!(fmt_bytes(5 * 1024 * 1024 * 1024), "5.00 GiB");
        assert_eq!(fmt_bytes(2048 * 1024 * 1024 * 1024), "2048.00 GiB");
    }

    #[test]
    fn counts_group_by_thousands() {
        assert_eq!(fmt_count(0), "0");
        assert_eq!(fmt_count(999), "999");
        assert_eq!(fmt_count(1000), "1_000");
        assert_eq!(fmt_count(12_345), "12_345");
        assert_eq!(fmt_count(1_234_567), "1_234_567");
    }

    #[test]
    fn measure_reports_median_run() {
        let mut calls = 0;
        let elapsed = measure(|| calls += 1);
        assert_eq!(calls, MEASURE_RUNS);
        assert!(elapsed < Duration::from_secs(1));
    }
}
