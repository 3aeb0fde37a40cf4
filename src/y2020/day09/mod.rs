use std::cmp::Ordering;

use eyre::{eyre, Result};

use crate::utils::*;

const PREAMBLE: usize = 25;

pub fn input() -> Result<String> {
    load(2020, 9)
}

fn parse(s: &str) -> Result<Vec<u64>> {
    parse_lines(s, parse_num)
}

fn is_pair_sum(window: &[u64], target: u64) -> bool {
    window
        .iter()
        .enumerate()
        .any(|(i, &a)| window[i + 1..].iter().any(|&b| a != b && a + b == target))
}

fn first_invalid(numbers: &[u64], preamble: usize) -> Result<u64> {
    numbers
        .windows(preamble + 1)
        .find(|w| !is_pair_sum(&w[..preamble], w[preamble]))
        .map(|w| w[preamble])
        .ok_or_else(|| eyre!("every number is a sum of two of the previous {}", preamble))
}

/// Sliding window over the (non-negative) numbers for a run of at least two summing to `target`.
fn weakness(numbers: &[u64], target: u64) -> Result<u64> {
    let (mut lo, mut hi, mut sum) = (0, 0, 0);
    loop {
        match sum.cmp(&target) {
            Ordering::Equal if hi - lo >= 2 => {
                let run = &numbers[lo..hi];
                let min = run.iter().min().copied().unwrap_or_default();
                let max = run.iter().max().copied().unwrap_or_default();
                return Ok(min + max);
            }
            Ordering::Greater => {
                sum -= numbers[lo];
                lo += 1;
            }
            _ if hi < numbers.len() => {
                sum += numbers[hi];
                hi += 1;
            }
            _ => return Err(eyre!("no contiguous run sums to {}", target)),
        }
    }
}

fn solve1(s: &str, preamble: usize) -> Result<u64> {
    first_invalid(&parse(s)?, preamble)
}

fn solve2(s: &str, preamble: usize) -> Result<u64> {
    let numbers = parse(s)?;
    weakness(&numbers, first_invalid(&numbers, preamble)?)
}

pub fn part1(s: &str) -> Result<u64> {
    solve1(s, PREAMBLE)
}

pub fn part2(s: &str) -> Result<u64> {
    solve2(s, PREAMBLE)
}

#[cfg(test)]
const EXAMPLE: &str = "\
35\n20\n15\n25\n47\n40\n62\n55\n65\n95\n102\n117\n150\n182\n127\n219\n299\n277\n309\n576\n";

#[test]
fn test_2020_day09_part1() {
    assert_eq!(solve1(EXAMPLE, 5).unwrap(), 127);
}

#[test]
fn test_2020_day09_part2() {
    assert_eq!(solve2(EXAMPLE, 5).unwrap(), 62);
}

#[test]
fn test_2020_day09_distinct_pair() {
    assert!(!is_pair_sum(&[5, 5, 1], 10));
    assert!(is_pair_sum(&[5, 4, 6], 10));
}
