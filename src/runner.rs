use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use eyre::{bail, ensure, eyre, Result};
use structopt::StructOpt;
use tracing::{debug, warn, Level};

use aoc::{Inputs, Puzzle};

const W_DAY: usize = 10;
const W_PART: usize = 18;

fn black_box<T>(dummy: T) -> T {
    unsafe {
        let ret = std::ptr::read_volatile(&dummy);
        std::mem::forget(dummy);
        ret
    }
}

#[derive(Debug, StructOpt)]
struct Args {
    #[structopt(help = "Year: 2020, 2021 or 2023.")]
    pub year: u16,
    #[structopt(help = "Day: 1 to 25. If not selected, all days of the year are used.")]
    pub day: Option<u8>,
    #[structopt(long, short, requires("day"), help = "Part of the day: 1 or 2.")]
    pub part: Option<u8>,
    #[structopt(long, short, help = "Print benchmark times instead of problem answers.")]
    pub bench: bool,
    #[structopt(
        long,
        short,
        requires("bench"),
        help = "Time in seconds allowed for timing each problem part. [default: 1.0]"
    )]
    pub seconds: Option<f64>,
    #[structopt(
        long,
        short,
        requires("bench"),
        help = "Fraction of time used for warmup before benching (0-0.5). [default: 0.2]"
    )]
    pub warmup: Option<f64>,
    #[structopt(long, short, parse(from_os_str), help = "Root directory of puzzle inputs.")]
    pub inputs: Option<PathBuf>,
    #[structopt(long, short, help = "Log debug messages to stderr.")]
    pub verbose: bool,
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Solves one part `times` times, returning the total time and the last answer.
fn run_one_raw(puzzle: &Puzzle, s: &str, part: u8, times: usize) -> Result<(Duration, String)> {
    let t0 = Instant::now();
    let mut out = black_box(puzzle.solve(part, s))?;
    for _ in 1..times {
        out = black_box(puzzle.solve(part, s))?;
    }
    let elapsed = t0.elapsed();
    debug!(puzzle = %puzzle.name(), part, times, ?elapsed, "solved");
    Ok((elapsed, out))
}

fn print_header(year: u16, part: Option<u8>) {
    println!("{} - Advent of Code", year);
    print!("{:<w$}", "day", w = W_DAY);
    if part.unwrap_or(1) == 1 {
        print!("{:<w$}", "part 1", w = W_PART);
    }
    if part.unwrap_or(2) == 2 {
        print!("{:<w$}", "part 2", w = W_PART);
    }
    println!();
    println!("{:-<w$}", "", w = W_DAY + W_PART * (2 - part.is_some() as usize));
}

fn print_day(day: u8) {
    print!("{:<w$}", format!("day {:02}", day), w = W_DAY);
}

/// Answers spanning several lines do not fit a table cell.
fn cell(result: &Result<String>) -> String {
    match result {
        Ok(answer) if answer.contains('\n') => "(see below)".to_owned(),
        Ok(answer) => answer.clone(),
        Err(err) => format!("error: {}", err),
    }
}

/// Every part is solved on its own so a failing part leaves the others intact.
fn solve_parts(puzzle: &Puzzle, s: &str, parts: &[u8]) -> Vec<(u8, Result<String>)> {
    parts.iter().map(|&part| (part, run_one_raw(puzzle, s, part, 1).map(|(_, out)| out))).collect()
}

fn run_output(puzzles: &[&Puzzle], parts: &[u8], inputs: &Inputs) -> usize {
    let mut failures = 0;
    for puzzle in puzzles {
        print_day(puzzle.day);
        let s = match puzzle.input(inputs) {
            Ok(s) => s,
            Err(err) => {
                println!("error: {}", err);
                warn!(puzzle = %puzzle.name(), "{:#}", err);
                failures += 1;
                continue;
            }
        };
        let results = solve_parts(puzzle, &s, parts);
        for (_, result) in &results {
            print!("{:<w$}", cell(result), w = W_PART);
        }
        println!();
        let mut failed = false;
        for (part, result) in &results {
            match result {
                Ok(answer) if answer.contains('\n') => println!("part {}:\n{}", part, answer),
                Ok(_) => {}
                Err(err) => {
                    warn!(puzzle = %puzzle.name(), part, "{:#}", err);
                    failed = true;
                }
            }
        }
        failures += failed as usize;
    }
    failures
}

fn bench_one(puzzle: &Puzzle, s: &str, part: u8, seconds: f64, warmup: f64, fmt_pre: impl Fn()) -> Result<f64> {
    macro_rules! status {
        ($($arg:tt)*) => {
            print!("\r");
            fmt_pre();
            print!($($arg)*);
            std::io::stdout().flush()?;
        }
    }

    const SPINNER: &[char] = &['↑', '↗', '→', '↘', '↓', '↙', '←', '↖'];
    const N_CYCLES: usize = 2;
    let n_chunks = SPINNER.len() * N_CYCLES;

    let (mut n_estimate, mut tm) = (1, 0.);
    while tm < 0.01 {
        tm = run_one_raw(puzzle, s, part, n_estimate)?.0.as_secs_f64();
        n_estimate *= 2;
    }
    let n_total = (seconds / tm * (n_estimate as f64)).ceil() as usize;
    let n_bench = (((n_total as f64) * (1. - warmup) / (n_chunks as f64)).ceil() as usize).max(1);

    // warmup
    let n_warmup = ((n_total as f64) * warmup).ceil().min((n_total as f64) - 1.).max(0.) as usize;
    status!(".");
    run_one_raw(puzzle, s, part, n_warmup)?;

    // bench
    let mut tm_total = Duration::default();
    for i in 0..n_chunks {
        status!("{}", SPINNER[i % SPINNER.len()]);
        tm_total += run_one_raw(puzzle, s, part, n_bench)?.0;
    }

    // result
    print!("\r");
    Ok(tm_total.as_secs_f64() / ((n_chunks * n_bench) as f64))
}

fn format_time(seconds: f64) -> String {
    let mics = seconds * 1e6;
    let prec = match mics {
        m if m < 10. => 2,
        m if m < 100. => 1,
        _ => 0,
    };
    let mics_fmt = format!("{:.p$}", mics, p = prec);
    let units = "μs";
    format!("{} {}", mics_fmt, units)
}

fn run_bench(puzzles: &[&Puzzle], parts: &[u8], inputs: &Inputs, seconds: f64, warmup: f64) -> usize {
    let mut tm_total = 0.;
    let mut failures = 0;
    for puzzle in puzzles {
        let mut tms_day = vec![];
        let result = puzzle.input(inputs).and_then(|s| {
            for &part in parts {
                let tm = bench_one(puzzle, &s, part, seconds, warmup, || {
                    print_day(puzzle.day);
                    for &tm in &tms_day {
                        print!("{:<w$}", format_time(tm), w = W_PART);
                    }
                })?;
                tm_total += tm;
                tms_day.push(tm);
            }
            Ok(())
        });
        print_day(puzzle.day);
        for &tm in &tms_day {
            print!("{:<w$}", format_time(tm), w = W_PART);
        }
        match result {
            Ok(()) => println!(),
            Err(err) => {
                println!("error: {}", err);
                warn!(puzzle = %puzzle.name(), "{:#}", err);
                failures += 1;
            }
        }
    }

    if puzzles.len() > 1 && parts.len() == 2 {
        println!("{:-<w$}", "", w = W_DAY + W_PART * 2);
        println!("total time = {}", format_time(tm_total));
    }
    failures
}

fn main() -> Result<()> {
    let Args { year, day, part, bench, seconds, warmup, inputs, verbose } = StructOpt::from_args_safe()?;
    setup_logging(verbose);

    let years = aoc::years();
    ensure!(years.contains(&year), "year must be one of {:?}", years);
    let puzzles = match day {
        Some(day) => {
            let puzzle = aoc::find(year, day).ok_or_else(|| {
                let days = aoc::days(year).map(|p| p.day).collect::<Vec<_>>();
                eyre!("day {} of {} is not implemented, available: {:?}", day, year, days)
            })?;
            vec![puzzle]
        }
        None => aoc::days(year).collect(),
    };
    if let Some(part) = part {
        ensure!((1..=2).contains(&part), "part must be 1..=2");
    }
    let parts = if let Some(part) = part { vec![part] } else { vec![1, 2] };
    let inputs = match inputs {
        Some(root) => Inputs::new(root),
        None => Inputs::from_env(),
    };
    debug!(root = %inputs.root().display(), "using puzzle inputs");

    print_header(year, part);
    let failures = if bench {
        let seconds = seconds.unwrap_or(1.0);
        ensure!(seconds > 0., "seconds must be a positive number");
        let warmup = warmup.unwrap_or(0.2);
        ensure!((0.0..=0.5).contains(&warmup), "warmup must be in [0.0; 0.5]");
        run_bench(&puzzles, &parts, &inputs, seconds, warmup)
    } else {
        run_output(&puzzles, &parts, &inputs)
    };

    if failures > 0 {
        bail!("{} of {} puzzles failed", failures, puzzles.len());
    }
    Ok(())
}

#[test]
fn test_failed_part_keeps_other_cell() {
    let puzzle = Puzzle {
        year: 2020,
        day: 1,
        title: "Report Repair",
        part1: |_| Ok("42".to_owned()),
        part2: |_| Err(eyre!("bad input")),
        fixed_input: None,
    };
    let results = solve_parts(&puzzle, "", &[1, 2]);
    let cells = results.iter().map(|(_, result)| cell(result)).collect::<Vec<_>>();
    assert_eq!(cells, vec!["42", "error: bad input"]);
    assert_eq!(cell(&Ok("#.\n.#".to_owned())), "(see below)");
}
