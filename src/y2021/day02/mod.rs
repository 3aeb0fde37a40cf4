use eyre::{bail, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 2)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Dir {
    Forward(i64),
    Down(i64),
    Up(i64),
}

impl Dir {
    pub fn parse(line: &str) -> Result<Self> {
        let (dir, n) = line.split_once(' ').ok_or_else(|| eyre!("expected `<direction> <n>`"))?;
        let n = parse_num(n)?;
        Ok(match dir {
            "forward" => Self::Forward(n),
            "down" => Self::Down(n),
            "up" => Self::Up(n),
            _ => bail!("unknown direction {:?}", dir),
        })
    }
}

pub fn part1(s: &str) -> Result<i64> {
    let (mut horizontal, mut depth) = (0, 0);
    for dir in parse_lines(s, Dir::parse)? {
        match dir {
            Dir::Forward(x) => horizontal += x,
            Dir::Down(x) => depth += x,
            Dir::Up(x) => depth -= x,
        }
    }
    Ok(horizontal * depth)
}

pub fn part2(s: &str) -> Result<i64> {
    let (mut horizontal, mut depth, mut aim) = (0, 0, 0);
    for dir in parse_lines(s, Dir::parse)? {
        match dir {
            Dir::Forward(x) => {
                horizontal += x;
                depth += aim * x;
            }
            Dir::Down(x) => aim += x,
            Dir::Up(x) => aim -= x,
        }
    }
    Ok(horizontal * depth)
}

#[cfg(test)]
const EXAMPLE: &str = "forward 5\ndown 5\nforward 8\nup 3\ndown 8\nforward 2\n";

#[test]
fn test_2021_day02_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 150);
}

#[test]
fn test_2021_day02_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 900);
    assert!(part2("backward 1\n").is_err());
}
