use eyre::{ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2023, 6)
}

fn row<'a>(s: &'a str, label: &str) -> Result<&'a str> {
    lines(s)
        .find_map(|line| line.strip_prefix(label))
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| eyre!("missing `{}:` row", label))
}

/// Hold times `h` in `0..=time` with `h * (time - h) > record`. The winning
/// holds form one interval around `time / 2`; its ends come from the quadratic
/// formula and are then nudged to the exact integers.
fn ways(time: u64, record: u64) -> u64 {
    let beats = |h: u64| h * (time - h) > record;
    let (t, d) = (time as f64, record as f64);
    let disc = t * t - 4.0 * d;
    if disc < 0.0 {
        return 0;
    }
    let mut lo = (((t - disc.sqrt()) / 2.0).floor().max(0.0) as u64).min(time / 2);
    while lo > 0 && beats(lo - 1) {
        lo -= 1;
    }
    while lo <= time / 2 && !beats(lo) {
        lo += 1;
    }
    if lo > time / 2 {
        return 0;
    }
    // The interval is symmetric: `h` wins iff `time - h` does.
    time - 2 * lo + 1
}

fn parse_races(s: &str) -> Result<Vec<(u64, u64)>> {
    let times = row(s, "Time")?.split_whitespace().map(parse_num).collect::<Result<Vec<_>>>()?;
    let records = row(s, "Distance")?.split_whitespace().map(parse_num).collect::<Result<Vec<_>>>()?;
    ensure!(times.len() == records.len(), "{} times but {} distances", times.len(), records.len());
    Ok(times.into_iter().zip(records).collect())
}

fn parse_single_race(s: &str) -> Result<(u64, u64)> {
    let joined = |label: &str| row(s, label).map(|r| r.split_whitespace().collect::<String>());
    Ok((parse_num(&joined("Time")?)?, parse_num(&joined("Distance")?)?))
}

pub fn part1(s: &str) -> Result<u64> {
    Ok(parse_races(s)?.into_iter().map(|(t, d)| ways(t, d)).product())
}

pub fn part2(s: &str) -> Result<u64> {
    let (time, record) = parse_single_race(s)?;
    Ok(ways(time, record))
}

#[cfg(test)]
const EXAMPLE: &str = "Time:      7  15   30\nDistance:  9  40  200\n";

#[test]
fn test_2023_day06_part1() {
    assert_eq!(ways(7, 9), 4);
    assert_eq!(ways(15, 40), 8);
    assert_eq!(ways(30, 200), 9);
    assert_eq!(ways(4, 4), 0);
    assert_eq!(part1(EXAMPLE).unwrap(), 288);
}

#[test]
fn test_2023_day06_part2() {
    assert_eq!(parse_single_race(EXAMPLE).unwrap(), (71530, 940200));
    assert_eq!(part2(EXAMPLE).unwrap(), 71503);
}

#[test]
fn test_2023_day06_brute_force_agrees() {
    for time in 0..40 {
        for record in 0..120 {
            let expected = (0..=time).filter(|h| h * (time - h) > record).count() as u64;
            assert_eq!(ways(time, record), expected, "time={} record={}", time, record);
        }
    }
}
