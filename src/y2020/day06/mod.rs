use eyre::{bail, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 6)
}

/// One bitmask of answered questions per person, grouped.
fn parse(s: &str) -> Result<Vec<Vec<u32>>> {
    blocks(s)
        .into_iter()
        .map(|group| {
            lines(group)
                .map(|person| {
                    person.bytes().try_fold(0_u32, |acc, c| match c {
                        b'a'..=b'z' => Ok(acc | 1 << (c - b'a')),
                        _ => bail!("invalid answer {:?}", char::from(c)),
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

fn solve(s: &str, merge: fn(u32, u32) -> u32) -> Result<u32> {
    Ok(parse(s)?
        .iter()
        .filter_map(|group| group.iter().copied().reduce(merge))
        .map(u32::count_ones)
        .sum())
}

pub fn part1(s: &str) -> Result<u32> {
    solve(s, |a, b| a | b)
}

pub fn part2(s: &str) -> Result<u32> {
    solve(s, |a, b| a & b)
}

#[cfg(test)]
const EXAMPLE: &str = "abc\n\na\nb\nc\n\nab\nac\n\na\na\na\na\n\nb\n";

#[test]
fn test_2020_day06_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 11);
}

#[test]
fn test_2020_day06_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 6);
}
