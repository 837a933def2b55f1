use clap::Parser;
use flotilla::board::Counts;
use flotilla::board::Field;

/// count all fleet placements for a counts pair, given
/// either directly or via a concrete ships string.
#[derive(Parser)]
struct Args {
    /// ships string to derive the counts from
    #[arg(long, conflicts_with_all = ["rows", "cols"])]
    ships: Option<String>,
    /// row counts string
    #[arg(long, requires = "cols")]
    rows: Option<String>,
    /// column counts string
    #[arg(long, requires = "rows")]
    cols: Option<String>,
}

fn main() -> anyhow::Result<()> {
    flotilla::init();
    let args = Args::parse();
    let (rows, cols) = match (args.ships, args.rows, args.cols) {
        (Some(ships), _, _) => Field::try_from(ships.as_str())
            .map_err(|e| anyhow::anyhow!("{}: {}", e, ships))?
            .counts(),
        (None, Some(rows), Some(cols)) => (
            Counts::try_from(rows.as_str()).map_err(|e| anyhow::anyhow!("{}: {}", e, rows))?,
            Counts::try_from(cols.as_str()).map_err(|e| anyhow::anyhow!("{}: {}", e, cols))?,
        ),
        _ => anyhow::bail!("supply --ships or both --rows and --cols"),
    };
    let begin = std::time::Instant::now();
    let count = flotilla::solver::enumerate(rows, cols).len();
    log::info!(
        "{} solutions for {}/{} in {:.3}s",
        count,
        rows,
        cols,
        begin.elapsed().as_secs_f64()
    );
    println!("{}", count);
    Ok(())
}
