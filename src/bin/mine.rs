use clap::Parser;

/// search for hard set-ups: random fleets whose counts admit
/// enormous solution sets. prints one line per find:
/// count, row counts, column counts, ships.
#[derive(Parser)]
struct Args {
    /// worker threads
    #[arg(long, default_value_t = num_cpus::get())]
    threads: usize,
    /// minimum solution count worth reporting
    #[arg(long, default_value_t = flotilla::MIN_DIFFICULTY)]
    difficulty: usize,
}

fn main() {
    flotilla::init();
    let args = Args::parse();
    flotilla::generator::mine(args.threads, args.difficulty);
}
