use eyre::Result;

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 1)
}

/// Comparing sliding sums of width `w` reduces to comparing `a[i + w]` with `a[i]`.
fn count_increasing(depths: &[u32], window: usize) -> usize {
    depths.iter().zip(depths.iter().skip(window)).filter(|(a, b)| b > a).count()
}

fn parse(s: &str) -> Result<Vec<u32>> {
    parse_lines(s, parse_num)
}

pub fn part1(s: &str) -> Result<usize> {
    Ok(count_increasing(&parse(s)?, 1))
}

pub fn part2(s: &str) -> Result<usize> {
    Ok(count_increasing(&parse(s)?, 3))
}

#[cfg(test)]
const EXAMPLE: &str = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";

#[test]
fn test_2021_day01_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 7);
}

#[test]
fn test_2021_day01_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 5);
    assert_eq!(part2("1\n2\n").unwrap(), 0);
}
