use eyre::{eyre, Result};
use itertools::Itertools;

use crate::utils::*;

const TARGET: u32 = 2020;

pub fn input() -> Result<String> {
    load(2020, 1)
}

fn product_of_entries(entries: &[u32], k: usize) -> Result<u64> {
    entries
        .iter()
        .copied()
        .combinations(k)
        .find(|values| values.iter().sum::<u32>() == TARGET)
        .map(|values| values.into_iter().map(u64::from).product())
        .ok_or_else(|| eyre!("no {} entries sum to {}", k, TARGET))
}

fn parse(s: &str) -> Result<Vec<u32>> {
    parse_lines(s, parse_num)
}

pub fn part1(s: &str) -> Result<u64> {
    product_of_entries(&parse(s)?, 2)
}

pub fn part2(s: &str) -> Result<u64> {
    product_of_entries(&parse(s)?, 3)
}

#[cfg(test)]
const EXAMPLE: &str = "1721\n979\n366\n299\n675\n1456\n";

#[test]
fn test_2020_day01_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 514579);
}

#[test]
fn test_2020_day01_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 241861950);
}

#[test]
fn test_2020_day01_no_solution() {
    assert!(part1("1\n2\n3\n").is_err());
}
