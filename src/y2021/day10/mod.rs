use eyre::{bail, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 10)
}

/// Openers map to even codes, their closers to the next odd code.
const fn map() -> [u8; 256] {
    let mut map = [0; 256];
    map[b'(' as usize] = 2;
    map[b')' as usize] = 3;
    map[b'[' as usize] = 4;
    map[b']' as usize] = 5;
    map[b'{' as usize] = 6;
    map[b'}' as usize] = 7;
    map[b'<' as usize] = 8;
    map[b'>' as usize] = 9;
    map
}

const MAP: [u8; 256] = map();

#[derive(Debug, Clone, PartialEq, Eq)]
enum Check {
    /// First closer that does not match its opener.
    Corrupted(u8),
    /// Openers still waiting to be closed, innermost last.
    Incomplete(Vec<u8>),
}

fn check(line: &str) -> Result<Check> {
    let mut stack = Vec::with_capacity(line.len());
    for c in line.bytes() {
        match MAP[c as usize] {
            0 => bail!("unexpected character {:?}", char::from(c)),
            code if code & 1 == 0 => stack.push(code),
            code => {
                if stack.pop() != Some(code - 1) {
                    return Ok(Check::Corrupted(code));
                }
            }
        }
    }
    Ok(Check::Incomplete(stack))
}

fn syntax_score(code: u8) -> u64 {
    match code {
        3 => 3,
        5 => 57,
        7 => 1197,
        _ => 25137,
    }
}

fn completion_score(stack: &[u8]) -> u64 {
    stack.iter().rev().fold(0, |acc, &c| acc * 5 + u64::from(c >> 1))
}

pub fn part1(s: &str) -> Result<u64> {
    Ok(parse_lines(s, check)?
        .iter()
        .map(|c| match c {
            Check::Corrupted(code) => syntax_score(*code),
            Check::Incomplete(_) => 0,
        })
        .sum())
}

pub fn part2(s: &str) -> Result<u64> {
    let mut scores = parse_lines(s, check)?
        .iter()
        .filter_map(|c| match c {
            Check::Incomplete(stack) if !stack.is_empty() => Some(completion_score(stack)),
            _ => None,
        })
        .collect::<Vec<_>>();
    if scores.is_empty() {
        bail!("no incomplete lines");
    }
    let n = scores.len();
    Ok(*scores.select_nth_unstable(n >> 1).1)
}

#[cfg(test)]
const EXAMPLE: &str = "\
[({(<(())[]>[[{[]{<()<>>
[(()[<>])]({[<{<<[]>>(
{([(<{}[<>[]}>{[]{[(<()>
(((({<>}<{<{<>}{[]{[]{}
[[<[([]))<([[{}[[()]]]
[{[{({}]{}}([{[{{{}}([]
{<[[]]>}<{[{[{[]{()[[[]
[<(<(<(<{}))><([]([]()
<{([([[(<>()){}]>(<<{{
<{([{{}}[<[[[<>{}]]]>[]]
";

#[test]
fn test_2021_day10_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 26397);
}

#[test]
fn test_2021_day10_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 288957);
    assert_eq!(check("<{([").unwrap(), Check::Incomplete(vec![8, 6, 2, 4]));
    assert_eq!(completion_score(&[8, 6, 2, 4]), 294);
}
