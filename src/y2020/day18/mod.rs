mod parser;

use eyre::{eyre, Result};

use crate::utils::*;

use self::parser::{parse, AdditionFirst, Grammar, SamePrecedence};

pub fn input() -> Result<String> {
    load(2020, 18)
}

fn evaluate<G: Grammar>(line: &str) -> Result<u64> {
    parse::<G>(line)?.eval()
}

fn sum_of_lines<G: Grammar>(s: &str) -> Result<u64> {
    parse_lines(s, evaluate::<G>)?
        .into_iter()
        .try_fold(0_u64, |acc, v| acc.checked_add(v))
        .ok_or_else(|| eyre!("sum overflows"))
}

pub fn part1(s: &str) -> Result<u64> {
    sum_of_lines::<SamePrecedence>(s)
}

pub fn part2(s: &str) -> Result<u64> {
    sum_of_lines::<AdditionFirst>(s)
}

#[test]
fn test_2020_day18_part1() {
    let eval = |s| evaluate::<SamePrecedence>(s).unwrap();
    assert_eq!(eval("1 + 2 * 3 + 4 * 5 + 6"), 71);
    assert_eq!(eval("1 + (2 * 3) + (4 * (5 + 6))"), 51);
    assert_eq!(eval("2 * 3 + (4 * 5)"), 26);
    assert_eq!(eval("5 + (8 * 3 + 9 + 3 * 4 * 3)"), 437);
    assert_eq!(eval("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))"), 12240);
    assert_eq!(eval("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2"), 13632);
    assert_eq!(part1("2 * 3 + (4 * 5)\n5 + (8 * 3 + 9 + 3 * 4 * 3)\n").unwrap(), 26 + 437);
}

#[test]
fn test_2020_day18_part2() {
    let eval = |s| evaluate::<AdditionFirst>(s).unwrap();
    assert_eq!(eval("1 + 2 * 3 + 4 * 5 + 6"), 231);
    assert_eq!(eval("1 + (2 * 3) + (4 * (5 + 6))"), 51);
    assert_eq!(eval("2 * 3 + (4 * 5)"), 46);
    assert_eq!(eval("5 + (8 * 3 + 9 + 3 * 4 * 3)"), 1445);
    assert_eq!(eval("5 * 9 * (7 * 3 * 3 + 9 * 3 + (8 + 6 * 4))"), 669060);
    assert_eq!(eval("((2 + 4 * 9) * (6 + 9 * 8 + 6) + 6) + 2 + 4 * 2"), 23340);
}

#[test]
fn test_2020_day18_grammars_agree_without_mixing() {
    for s in ["1 + 2 + (3 + 4)", "2 * (3 * 4) * 5", "((7))"] {
        assert_eq!(evaluate::<SamePrecedence>(s).unwrap(), evaluate::<AdditionFirst>(s).unwrap());
    }
}

#[test]
fn test_2020_day18_syntax_error() {
    assert!(part1("1 + 2\n3 * * 4\n").is_err());
}
