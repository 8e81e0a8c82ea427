use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

mod dataset;
mod diagnostics;
mod log;
mod render;
mod stats;
mod walk;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "runlog-times")]
#[command(
    about = "Summarize similarity-to-done times of benchmark run logs",
    long_about = None
)]
struct Cli {
    /// Directory holding initial/, spec_checks/, lhs/, flat_is_justice/ and current/.
    /// Defaults to the working directory; dataset paths then print as `lhs/<name>`.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Also write every dataset summary to this file as JSON.
    #[arg(long)]
    json: Option<PathBuf>,

    /// Log more to stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    diagnostics::init_logging(cli.verbose)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // Everything is fatal; blocks already written stay on stdout.
    let groups = walk::walk_root(cli.root.as_deref(), &mut out)?;
    out.flush()?;

    if let Some(path) = cli.json {
        render::json::write_json_report(&path, &groups)?;
        tracing::info!(path = %path.display(), "wrote json report");
    }

    Ok(())
}
