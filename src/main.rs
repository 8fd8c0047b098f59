//! Bulwark -- a tower-defense bot speaking the runtime's line protocol.
//!
//! Reads one JSON message per line from stdin and writes each turn's two
//! command lines to stdout. Logs go to stderr.
//!
//! Options:
//!   --seed N          Random seed, 0 for entropy (default: 0)
//!   --log-level F     Log filter, a level such as `debug` or a directive
//!                     list such as `warn,bulwark::strategy=trace`
//!                     (default: $BULWARK_LOG, else warn)

use std::env;
use std::io::{self, BufRead};
use std::process;

use tracing::warn;
use tracing_subscriber::EnvFilter;

use bulwark::engine::{Engine, EngineError, Flow};
use bulwark::logging;
use bulwark::strategy::StrategyConfig;

struct Options {
    seed: u64,
    log_filter: EnvFilter,
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut seed = 0;
    let mut log_level: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = args
                    .get(i)
                    .and_then(|v| v.parse::<u64>().ok())
                    .ok_or("invalid --seed value")?;
            }
            "--log-level" => {
                i += 1;
                log_level = Some(args.get(i).ok_or("missing --log-level value")?.clone());
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    let log_filter = logging::filter(log_level.as_deref())
        .map_err(|e| format!("invalid --log-level value: {e}"))?;
    Ok(Options { seed, log_filter })
}

fn print_usage() {
    eprintln!("Usage: bulwark [--seed N] [--log-level FILTER]");
}

/// Runs the protocol loop, reading messages from stdin and writing turn
/// submissions to stdout.
fn main() {
    let args: Vec<String> = env::args().collect();
    let options = match parse_args(&args) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{e}");
            print_usage();
            process::exit(2);
        }
    };
    if let Err(e) = logging::init(options.log_filter) {
        eprintln!("failed to install logger: {e}");
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut engine = Engine::new(StrategyConfig::default(), options.seed);

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(_) => break,
        };

        match engine.handle_line(&line, &mut out) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Stop) => break,
            Err(EngineError::Io(e)) => {
                warn!("output closed: {e}");
                break;
            }
            Err(e) => warn!("{e}"),
        }
    }
}
