use eyre::{bail, ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 3)
}

struct Report {
    width: usize,
    values: Vec<usize>,
}

fn parse(s: &str) -> Result<Report> {
    let rows = lines(s).collect::<Vec<_>>();
    let width = rows.first().map(|r| r.len()).ok_or_else(|| eyre!("empty report"))?;
    ensure!((1..=16).contains(&width), "unsupported bit width {}", width);
    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        ensure!(row.len() == width, "rows must all be {} bits wide", width);
        values.push(row.bytes().try_fold(0, |acc, c| match c {
            b'0' | b'1' => Ok((acc << 1) | usize::from(c - b'0')),
            _ => bail!("invalid bit {:?}", char::from(c)),
        })?);
    }
    Ok(Report { width, values })
}

pub fn part1(s: &str) -> Result<usize> {
    let report = parse(s)?;
    let n = report.values.len();
    let mut gamma = 0;
    for bit in (0..report.width).rev() {
        let ones = report.values.iter().filter(|&&v| v >> bit & 1 == 1).count();
        gamma = (gamma << 1) | usize::from(2 * ones >= n);
    }
    let epsilon = !gamma & ((1 << report.width) - 1);
    Ok(gamma * epsilon)
}

/// Walks down a histogram of all values, halving the candidate range per bit:
/// `most` keeps the more common half (ties to 1), otherwise the less common one
/// (ties to 0). An empty half is never chosen.
fn rating(counts: &[u32], width: usize, most: bool) -> usize {
    let mut offset = 0;
    let mut total: u32 = counts.iter().sum();
    let mut size = 1 << width;
    for _ in 0..width {
        size >>= 1;
        let zeros: u32 = counts[offset..offset + size].iter().sum();
        let ones = total - zeros;
        let take_ones = if most {
            zeros == 0 || (ones != 0 && ones >= zeros)
        } else {
            zeros == 0 || (ones != 0 && ones < zeros)
        };
        total = if take_ones {
            offset += size;
            ones
        } else {
            zeros
        };
    }
    offset
}

pub fn part2(s: &str) -> Result<usize> {
    let report = parse(s)?;
    let mut counts = vec![0_u32; 1 << report.width];
    for &v in &report.values {
        counts[v] += 1;
    }
    let oxygen = rating(&counts, report.width, true);
    let co2 = rating(&counts, report.width, false);
    Ok(oxygen * co2)
}

#[cfg(test)]
const EXAMPLE: &str = "\
00100\n11110\n10110\n10111\n10101\n01111\n00111\n11100\n10000\n11001\n00010\n01010\n";

#[test]
fn test_2021_day03_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 198);
}

#[test]
fn test_2021_day03_part2() {
    let report = parse(EXAMPLE).unwrap();
    let mut counts = vec![0; 1 << report.width];
    report.values.iter().for_each(|&v| counts[v] += 1);
    assert_eq!(rating(&counts, 5, true), 23);
    assert_eq!(rating(&counts, 5, false), 10);
    assert_eq!(part2(EXAMPLE).unwrap(), 230);
}

#[test]
fn test_2021_day03_large_report() {
    let s = format!("{}01\n", "11\n".repeat(70_000));
    assert_eq!(part2(&s).unwrap(), 3);
}
