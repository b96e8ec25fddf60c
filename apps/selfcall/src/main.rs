//! Selfcall CLI entry point.
//!
//! ```bash
//! selfcall eval 3 4 --strategy self-reference
//! selfcall compare 3 4 --json
//! selfcall table 3 6
//! selfcall explain
//! ```
//!
//! Logging goes to stderr and follows `RUST_LOG` (default `warn`, or `debug`
//! with `--verbose`).

use clap::{Args, Parser, Subcommand};
use selfcall::cli::{CliError, cmd_compare, cmd_eval, cmd_explain, cmd_table};
use selfcall_core::{Arguments, DEFAULT_MAX_CALLS, DEFAULT_MAX_DEPTH, Limits, Strategy};
use tracing_subscriber::EnvFilter;

/// Recursive closures without self-naming.
#[derive(Parser)]
#[command(name = "selfcall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate A(m, n) with one strategy.
    Eval {
        m: u64,
        n: u64,

        /// accumulator, self-reference, reference or bounded.
        #[arg(short, long, default_value = "bounded")]
        strategy: Strategy,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Evaluate A(m, n) with every strategy and check they agree.
    Compare {
        m: u64,
        n: u64,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Print A(m, n) for every m <= MAX_M and n <= MAX_N.
    Table {
        max_m: u64,
        max_n: u64,

        #[command(flatten)]
        limits: LimitArgs,
    },

    /// Show why a closure cannot call itself by name.
    Explain,
}

#[derive(Args)]
struct LimitArgs {
    /// Deepest frame allowed for bounded evaluation; also bounds stack use.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u64,

    /// Most invocations allowed for bounded evaluation.
    #[arg(long, default_value_t = DEFAULT_MAX_CALLS)]
    max_calls: u64,
}

impl From<LimitArgs> for Limits {
    fn from(args: LimitArgs) -> Self {
        Limits::new(args.max_depth, args.max_calls)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let json = cli.json;
    match cli.command {
        Command::Eval {
            m,
            n,
            strategy,
            limits,
        } => cmd_eval(Arguments::new(m, n), strategy, &limits.into(), json),
        Command::Compare { m, n, limits } => cmd_compare(Arguments::new(m, n), &limits.into(), json),
        Command::Table {
            max_m,
            max_n,
            limits,
        } => cmd_table(max_m, max_n, &limits.into(), json),
        Command::Explain => cmd_explain(json),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
