use eyre::{eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2023, 4)
}

/// Number of winning numbers on each card.
fn matches(line: &str) -> Result<usize> {
    let (_, numbers) = line.split_once(':').ok_or_else(|| eyre!("expected `Card <n>: ...`"))?;
    let (winning, have) = numbers.split_once('|').ok_or_else(|| eyre!("expected `winning | have`"))?;
    let parse = |s: &str| s.split_whitespace().map(parse_num).collect::<Result<Vec<u32>>>();
    let winning = parse(winning)?;
    Ok(parse(have)?.iter().filter(|n| winning.contains(n)).count())
}

pub fn part1(s: &str) -> Result<u64> {
    Ok(parse_lines(s, matches)?.into_iter().filter(|&m| m > 0).map(|m| 1 << (m - 1)).sum())
}

pub fn part2(s: &str) -> Result<u64> {
    let matches = parse_lines(s, matches)?;
    let mut copies = vec![1_u64; matches.len()];
    for (i, &m) in matches.iter().enumerate() {
        let end = (i + 1 + m).min(copies.len());
        for j in i + 1..end {
            copies[j] += copies[i];
        }
    }
    Ok(copies.iter().sum())
}

#[cfg(test)]
const EXAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

#[test]
fn test_2023_day04_part1() {
    assert_eq!(parse_lines(EXAMPLE, matches).unwrap(), vec![4, 2, 2, 1, 0, 0]);
    assert_eq!(part1(EXAMPLE).unwrap(), 13);
}

#[test]
fn test_2023_day04_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 30);
}
