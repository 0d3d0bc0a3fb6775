use anyhow::{bail, Context};
use clap::Parser;
use randsum::app::bench::{format_summary, BenchMethod, Benchmark};
use randsum::utils::{logger, validation::validate_positive_number};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "randsum-bench")]
#[command(about = "Compare in-process calls against spawning the randsum executable")]
struct Args {
    /// Iterations per method
    #[arg(short = 'n', long, default_value = "100")]
    iterations: usize,

    /// Path to the randsum executable (defaults to the one next to this binary)
    #[arg(long)]
    exe: Option<PathBuf>,

    /// Where to write the summary
    #[arg(long, default_value = "summary.txt")]
    summary: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn default_exe() -> anyhow::Result<PathBuf> {
    let current = std::env::current_exe().context("cannot locate current executable")?;
    let dir = current
        .parent()
        .context("current executable has no parent directory")?;
    Ok(dir.join(format!("randsum{}", std::env::consts::EXE_SUFFIX)))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 初始化日誌
    logger::init_cli_logger(args.verbose);

    validate_positive_number("iterations", args.iterations, 1)?;

    let exe = match args.exe {
        Some(exe) => exe,
        None => default_exe()?,
    };
    if !exe.exists() {
        eprintln!("❌ Error: File not found at {}", exe.display());
        bail!("randsum executable not found");
    }
    tracing::info!("🔍 Found executable: {}", exe.display());

    let workdir = std::env::current_dir().context("cannot read working directory")?;
    let benchmark = Benchmark::new(exe, workdir, args.iterations);

    let mut results = Vec::new();
    for method in [
        BenchMethod::Library,
        BenchMethod::Subprocess,
        BenchMethod::SubprocessRead,
    ] {
        match benchmark.run(method) {
            Ok(result) => results.push(result),
            Err(e) => tracing::error!("❌ {} test failed: {}", method.name(), e),
        }
    }

    let summary = format_summary(&results);
    println!("\n{}", summary);
    tracing::info!("📁 Writing results to {}", args.summary.display());
    std::fs::write(&args.summary, &summary)
        .with_context(|| format!("failed to write {}", args.summary.display()))?;

    Ok(())
}
