use eyre::{eyre, Result};
use regex::Regex;

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 2)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    lo: usize,
    hi: usize,
    letter: u8,
    password: Vec<u8>,
}

impl Entry {
    fn count_in_range(&self) -> bool {
        let n = self.password.iter().filter(|&&c| c == self.letter).count();
        (self.lo..=self.hi).contains(&n)
    }

    fn at(&self, pos: usize) -> bool {
        pos.checked_sub(1).and_then(|i| self.password.get(i)) == Some(&self.letter)
    }

    fn exactly_one_position(&self) -> bool {
        self.at(self.lo) != self.at(self.hi)
    }
}

fn parse(s: &str) -> Result<Vec<Entry>> {
    let re = Regex::new(r"^(\d+)-(\d+) ([a-z]): ([a-z]+)$")?;
    parse_lines(s, |line| {
        let caps = re.captures(line).ok_or_else(|| eyre!("expected `m-n c: password`"))?;
        Ok(Entry {
            lo: parse_num(&caps[1])?,
            hi: parse_num(&caps[2])?,
            letter: caps[3].as_bytes()[0],
            password: caps[4].as_bytes().to_vec(),
        })
    })
}

pub fn part1(s: &str) -> Result<usize> {
    Ok(parse(s)?.iter().filter(|e| e.count_in_range()).count())
}

pub fn part2(s: &str) -> Result<usize> {
    Ok(parse(s)?.iter().filter(|e| e.exactly_one_position()).count())
}

#[cfg(test)]
const EXAMPLE: &str = "1-3 a: abcde\n1-3 b: cdefg\n2-9 c: ccccccccc\n";

#[test]
fn test_2020_day02_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 2);
}

#[test]
fn test_2020_day02_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 1);
}

#[test]
fn test_2020_day02_malformed() {
    assert!(part1("1-3 a abcde\n").is_err());
}
