use eyre::{ensure, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 6)
}

/// Fish counted by timer value; the whole school is a 9-bucket histogram.
fn parse(s: &str) -> Result<[u64; 9]> {
    let mut counts = [0; 9];
    for timer in parse_list::<usize>(s, ',')? {
        ensure!(timer < 9, "timer {} out of range", timer);
        counts[timer] += 1;
    }
    Ok(counts)
}

fn simulate(mut counts: [u64; 9], days: usize) -> u64 {
    for _ in 0..days {
        let spawning = counts[0];
        counts.rotate_left(1);
        counts[6] += spawning;
    }
    counts.iter().sum()
}

pub fn part1(s: &str) -> Result<u64> {
    Ok(simulate(parse(s)?, 80))
}

pub fn part2(s: &str) -> Result<u64> {
    Ok(simulate(parse(s)?, 256))
}

#[cfg(test)]
const EXAMPLE: &str = "3,4,3,1,2\n";

#[test]
fn test_2021_day06_part1() {
    assert_eq!(simulate(parse(EXAMPLE).unwrap(), 18), 26);
    assert_eq!(part1(EXAMPLE).unwrap(), 5934);
}

#[test]
fn test_2021_day06_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 26984457539);
}
