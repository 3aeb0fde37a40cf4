use eyre::{ensure, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 7)
}

fn parse(s: &str) -> Result<Vec<i64>> {
    let x = parse_list(s, ',')?;
    ensure!(!x.is_empty(), "no crab positions");
    Ok(x)
}

fn median(x: &mut [i64]) -> i64 {
    let n = x.len();
    let (_, mid, _) = x.select_nth_unstable(n >> 1);
    *mid
}

fn cost1(x: &[i64], m: i64) -> i64 {
    x.iter().map(|&x| (x - m).abs()).sum()
}

/// Moving `k` steps costs `1 + 2 + ... + k`.
fn cost2(x: &[i64], m: i64) -> i64 {
    x.iter()
        .map(|&x| {
            let d = (x - m).abs();
            d * (d + 1) / 2
        })
        .sum()
}

/// Linear cost is an L1 problem, so the median is optimal.
pub fn part1(s: &str) -> Result<i64> {
    let mut x = parse(s)?;
    let m = median(&mut x);
    Ok(cost1(&x, m))
}

/// Triangular cost sits between L1 and L2: the real optimum lies within 1/2 of
/// the mean, so only the integers around it need checking.
pub fn part2(s: &str) -> Result<i64> {
    let x = parse(s)?;
    let mean = x.iter().sum::<i64>().div_euclid(x.len() as i64);
    Ok((mean - 1..=mean + 2).map(|m| cost2(&x, m)).min().unwrap_or_default())
}

#[cfg(test)]
const EXAMPLE: &str = "16,1,2,0,4,2,7,1,2,14\n";

#[test]
fn test_2021_day07_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 37);
    assert_eq!(cost1(&parse(EXAMPLE).unwrap(), 10), 71);
}

#[test]
fn test_2021_day07_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 168);
    assert_eq!(cost2(&parse(EXAMPLE).unwrap(), 2), 206);
}
