use eyre::{bail, ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 8)
}

/// A digit as a 7-bit mask of lit segments `a..=g`.
fn parse_digit(s: &str) -> Result<u8> {
    ensure!(!s.is_empty(), "empty digit pattern");
    s.bytes().try_fold(0_u8, |digit, c| match c {
        b'a'..=b'g' => Ok(digit | 1 << (c - b'a')),
        _ => bail!("invalid segment {:?}", char::from(c)),
    })
}

fn parse_digits<const N: usize>(s: &str) -> Result<[u8; N]> {
    let mut digits = [0; N];
    let mut it = s.split_whitespace();
    for digit in &mut digits {
        *digit = parse_digit(it.next().ok_or_else(|| eyre!("expected {} digit patterns", N))?)?;
    }
    ensure!(it.next().is_none(), "expected {} digit patterns", N);
    Ok(digits)
}

struct Entry {
    patterns: [u8; 10],
    outputs: [u8; 4],
}

impl Entry {
    pub fn parse(line: &str) -> Result<Self> {
        let (patterns, outputs) = line.split_once('|').ok_or_else(|| eyre!("expected `patterns | outputs`"))?;
        Ok(Self { patterns: parse_digits(patterns)?, outputs: parse_digits(outputs)? })
    }

    /// Segment mask for each digit 0-9, deduced from overlaps with 1 and 4.
    fn wiring(&self) -> Result<[u8; 10]> {
        let with_len = |n| self.patterns.iter().copied().find(|p| p.count_ones() == n);
        let one = with_len(2).ok_or_else(|| eyre!("no pattern for 1"))?;
        let four = with_len(4).ok_or_else(|| eyre!("no pattern for 4"))?;
        let mut digits = [0; 10];
        for &p in &self.patterns {
            let digit = match (p.count_ones(), (p & !one).count_ones(), (p & !four).count_ones()) {
                (2, _, _) => 1,
                (3, _, _) => 7,
                (4, _, _) => 4,
                (7, _, _) => 8,
                (5, 3, _) => 3,
                (5, _, 2) => 5,
                (5, _, _) => 2,
                (6, _, 2) => 9,
                (6, 4, _) => 0,
                (6, _, _) => 6,
                _ => bail!("pattern with {} segments", p.count_ones()),
            };
            digits[digit] = p;
        }
        ensure!(digits.iter().all(|&d| d != 0), "patterns do not cover every digit");
        Ok(digits)
    }

    fn decode(&self) -> Result<u32> {
        let digits = self.wiring()?;
        self.outputs.iter().try_fold(0, |acc, &out| -> Result<u32> {
            let d = digits.iter().position(|&p| p == out).ok_or_else(|| eyre!("unknown output pattern"))?;
            Ok(acc * 10 + d as u32)
        })
    }
}

pub fn part1(s: &str) -> Result<usize> {
    // 1, 4, 7, 8 have 2, 4, 3, 7 segments
    Ok(parse_lines(s, Entry::parse)?
        .iter()
        .flat_map(|e| e.outputs)
        .filter(|d| matches!(d.count_ones(), 2 | 3 | 4 | 7))
        .count())
}

pub fn part2(s: &str) -> Result<u32> {
    parse_lines(s, Entry::parse)?.iter().map(Entry::decode).sum()
}

#[cfg(test)]
const EXAMPLE: &str = "\
be cfbegad cbdgef fgaecd cgeb fdcge agebfd fecdb fabcd edb | fdgacbe cefdb cefbgd gcbe
edbfga begcd cbg gc gcadebf fbgde acbgfd abcde gfcbed gfec | fcgedb cgb dgebacf gc
fgaebd cg bdaec gdafb agbcfd gdcbef bgcad gfac gcb cdgabef | cg cg fdcagb cbg
fbegcd cbd adcefb dageb afcb bc aefdc ecdab fgdeca fcdbega | efabcd cedba gadfec cb
aecbfdg fbg gf bafeg dbefa fcge gcbea fcaegb dgceab fcbdga | gecf egdcabf bgf bfgea
fgeab ca afcebg bdacfeg cfaedg gcfdb baec bfadeg bafgc acf | gebdcfa ecba ca fadegcb
dbcfg fgd bdegcaf fgec aegbdf ecdfab fbedc dacgb gdcebf gf | cefg dcbef fcge gbcadfe
bdfegc cbegaf gecbf dfcage bdacg ed bedf ced adcbefg gebcd | ed bcgafe cdgba cbgef
egadfb cdbfeg cegd fecab cgb gbdefca cg fgcdab egfdb bfceg | gbdfcae bgc cg cgb
gcafb gcf dcaebfg ecagb gf abcdeg gaef cafbge fdbac fegbdc | fgae cfgab fg bagce
";

#[test]
fn test_2021_day08_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 26);
}

#[test]
fn test_2021_day08_part2() {
    let line = "acedgfb cdfbe gcdfa fbcad dab cefabd cdfgeb eafb cagedb ab | cdfeb fcadb cdfeb cdbaf";
    assert_eq!(Entry::parse(line).unwrap().decode().unwrap(), 5353);
    assert_eq!(part2(EXAMPLE).unwrap(), 61229);
}

#[test]
fn test_2021_day08_malformed() {
    assert!(part1("ab cd | ef\n").is_err());
    assert!(parse_digit("abz").is_err());
}
