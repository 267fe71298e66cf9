use std::env;
use std::time::Instant;

use card_dp::{CardSolver, MemoizedSolver, NaiveSolver, Strategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("strategy_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Max-card strategy probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "  • Correctness: answers match the naive oracle up to {} cards",
        options.verify_limit
    );
    eprintln!("  • wall_s: wall-clock seconds; rss_delta_kib: resident memory delta");
    eprintln!("  • states: distinct (index, sum) pairs (memoized) or final frontier size (iterative)");
    eprintln!("{}", "=".repeat(80));
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/4] Naive recursion (exponential, small inputs only)...");
    measurements.extend(run_strategy(Strategy::Naive, &[8, 12, 16, 20], &options, &mut sys));
    eprintln!();

    eprintln!("[2/4] Memoized recursion...");
    measurements.extend(run_strategy(
        Strategy::Memoized,
        &[16, 64, 256, 1024],
        &options,
        &mut sys,
    ));
    eprintln!();

    eprintln!("[3/4] Iterative sum frontier...");
    measurements.extend(run_strategy(
        Strategy::Iterative,
        &[16, 64, 256, 1024, 2048, 4096],
        &options,
        &mut sys,
    ));
    eprintln!();

    eprintln!("[4/4] Inverted-comparison fixture (divergence expected)...");
    measurements.extend(run_strategy(Strategy::Buggy, &[8, 12, 16], &options, &mut sys));
    eprintln!();

    print_summary(&measurements);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("strategy_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 18usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin strategy_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest card count checked against the naive oracle (default: 18)
  -h, --help                    Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    strategy: Strategy,
    cards: usize,
    answer: Option<usize>,
    states: Option<usize>,
    wall_s: f64,
    rss_delta_kib: u64,
    status: VerificationStatus,
    detail: Option<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Diverged,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Diverged => "diverged",
            VerificationStatus::Failed => "failed",
        }
    }
}

fn run_strategy(
    strategy: Strategy,
    sizes: &[usize],
    options: &Options,
    sys: &mut System,
) -> Vec<Measurement> {
    let total = sizes.len();
    sizes
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] {} cards... ", idx + 1, total, len);
            let cards = deterministic_cards(len);

            let before = rss_kib(sys);
            let start = Instant::now();
            let outcome = strategy.solver().solve(cards.len(), &cards);
            let wall_s = start.elapsed().as_secs_f64();
            let rss_delta_kib = rss_kib(sys).saturating_sub(before);

            let states = match strategy {
                Strategy::Memoized => MemoizedSolver
                    .solve_with_stats(cards.len(), &cards)
                    .ok()
                    .map(|(_, states)| states),
                Strategy::Iterative => final_frontier_len(&cards),
                _ => None,
            };

            let (answer, status, detail) = match outcome {
                Ok(answer) => {
                    let (status, detail) = verify(strategy, &cards, answer, options.verify_limit);
                    (Some(answer), status, detail)
                }
                Err(err) => (None, VerificationStatus::Failed, Some(err.to_string())),
            };

            let icon = match status {
                VerificationStatus::Passed => "✓",
                VerificationStatus::Diverged => "≠",
                VerificationStatus::Failed => "✗",
                VerificationStatus::NotChecked => "○",
            };
            eprintln!(
                "{} answer={}, time={:.3}s, status={}",
                icon,
                answer.map_or_else(|| "-".to_string(), |a| a.to_string()),
                wall_s,
                status.label()
            );

            Measurement {
                strategy,
                cards: len,
                answer,
                states,
                wall_s,
                rss_delta_kib,
                status,
                detail,
            }
        })
        .collect()
}

fn verify(
    strategy: Strategy,
    cards: &[i64],
    answer: usize,
    verify_limit: usize,
) -> (VerificationStatus, Option<String>) {
    if cards.len() > verify_limit {
        return (VerificationStatus::NotChecked, None);
    }
    let expected = match NaiveSolver.solve(cards.len(), cards) {
        Ok(expected) => expected,
        Err(err) => return (VerificationStatus::Failed, Some(format!("oracle: {err}"))),
    };
    match (answer == expected, strategy) {
        (true, _) => (VerificationStatus::Passed, None),
        (false, Strategy::Buggy) => (
            VerificationStatus::Diverged,
            Some(format!("oracle {expected}, fixture {answer}")),
        ),
        (false, _) => (
            VerificationStatus::Failed,
            Some(format!("expected {expected}, got {answer}")),
        ),
    }
}

fn final_frontier_len(cards: &[i64]) -> Option<usize> {
    let mut frontier = card_dp::SumFrontier::new();
    for (index, &card) in cards.iter().enumerate() {
        frontier = frontier.forward_step(index, card).ok()?;
    }
    Some(frontier.len())
}

/// Values in [-5, 5] with a slight positive drift so long prefixes keep
/// some headroom.
fn deterministic_cards(len: usize) -> Vec<i64> {
    (0..len)
        .map(|i| ((i * 7 + 3) % 11) as i64 - 5 + i64::from(i % 5 == 0))
        .collect()
}

fn print_summary(measurements: &[Measurement]) {
    let failed = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Failed)
        .count();
    let diverged = measurements
        .iter()
        .filter(|m| m.status == VerificationStatus::Diverged)
        .count();
    eprintln!("{}", "=".repeat(80));
    eprintln!(
        "{} runs, {} failed, {} fixture divergences",
        measurements.len(),
        failed,
        diverged
    );
    if failed == 0 {
        eprintln!("✓ every correct strategy matched the oracle where checked");
    } else {
        eprintln!("✗ {failed} run(s) failed. Please review the errors above.");
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn opt(value: Option<usize>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("strategy,cards,answer,states,wall_s,rss_delta_kib,status,detail");
    for m in measurements {
        let detail = m
            .detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{},{},{:.3},{},{},\"{}\"",
            m.strategy,
            m.cards,
            opt(m.answer),
            opt(m.states),
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    println!(
        "{:<10}  {:>6}  {:>6}  {:>9}  {:>10}  {:>13}  {:<12}  detail",
        "strategy", "cards", "answer", "states", "wall_s", "rss_delta_kib", "status"
    );
    println!("{:-<10}  {:-<6}  {:-<6}  {:-<9}  {:-<10}  {:-<13}  {:-<12}  {:-<6}", "", "", "", "", "", "", "", "");
    for m in measurements {
        println!(
            "{:<10}  {:>6}  {:>6}  {:>9}  {:>10.3}  {:>13}  {:<12}  {}",
            m.strategy.name(),
            m.cards,
            opt(m.answer),
            opt(m.states),
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            m.detail.as_deref().unwrap_or("")
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    let json_opt = |v: Option<usize>| v.map_or_else(|| "null".to_string(), |v| v.to_string());
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = m.detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"strategy\":\"{}\",\"cards\":{},\"answer\":{},\"states\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.strategy,
            m.cards,
            json_opt(m.answer),
            json_opt(m.states),
            m.wall_s,
            m.rss_delta_kib,
            m.status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}
