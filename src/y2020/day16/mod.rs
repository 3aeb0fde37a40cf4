use std::ops::RangeInclusive;

use eyre::{ensure, eyre, Result};
use regex::Regex;

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 16)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Rule<'a> {
    name: &'a str,
    ranges: [RangeInclusive<u64>; 2],
}

impl Rule<'_> {
    fn matches(&self, value: u64) -> bool {
        self.ranges.iter().any(|r| r.contains(&value))
    }
}

type Ticket = Vec<u64>;

#[derive(Debug)]
struct Notes<'a> {
    rules: Vec<Rule<'a>>,
    mine: Ticket,
    nearby: Vec<Ticket>,
}

impl Notes<'_> {
    fn is_valid_value(&self, value: u64) -> bool {
        self.rules.iter().any(|rule| rule.matches(value))
    }

    fn is_valid_ticket(&self, ticket: &[u64]) -> bool {
        ticket.iter().all(|&v| self.is_valid_value(v))
    }
}

fn parse_ticket(line: &str) -> Result<Ticket> {
    parse_list(line, ',')
}

fn parse(s: &str) -> Result<Notes<'_>> {
    let sections = blocks(s);
    ensure!(sections.len() == 3, "expected rules, your ticket and nearby tickets");
    let re = Regex::new(r"^([a-z ]+): (\d+)-(\d+) or (\d+)-(\d+)$")?;
    let rules = parse_lines(sections[0], |line| {
        let caps = re.captures(line).ok_or_else(|| eyre!("expected `name: a-b or c-d`"))?;
        let name = caps.get(1).map_or("", |m| m.as_str());
        let num = |i: usize| parse_num::<u64>(&caps[i]);
        Ok(Rule { name, ranges: [num(2)?..=num(3)?, num(4)?..=num(5)?] })
    })?;
    let mine = lines(sections[1])
        .nth(1)
        .ok_or_else(|| eyre!("missing your ticket"))
        .and_then(parse_ticket)?;
    let nearby = lines(sections[2]).skip(1).map(parse_ticket).collect::<Result<Vec<_>>>()?;
    for ticket in nearby.iter().chain(Some(&mine)) {
        ensure!(ticket.len() == rules.len(), "ticket has {} fields, expected {}", ticket.len(), rules.len());
    }
    Ok(Notes { rules, mine, nearby })
}

/// Assigns each rule to a ticket column: repeatedly fix a column that only one
/// remaining rule can describe.
fn field_order(notes: &Notes) -> Result<Vec<usize>> {
    let n = notes.rules.len();
    ensure!(n <= 64, "too many fields");
    let valid = notes.nearby.iter().filter(|t| notes.is_valid_ticket(t)).collect::<Vec<_>>();
    // candidates[rule] is a bitmask of the columns that rule fits.
    let mut candidates = notes
        .rules
        .iter()
        .map(|rule| {
            (0..n)
                .filter(|&col| valid.iter().all(|t| rule.matches(t[col])))
                .fold(0_u64, |mask, col| mask | 1 << col)
        })
        .collect::<Vec<_>>();
    let mut order = vec![usize::MAX; n];
    for _ in 0..n {
        let rule = (0..n)
            .find(|&r| order[r] == usize::MAX && candidates[r].count_ones() == 1)
            .ok_or_else(|| eyre!("field order is ambiguous"))?;
        let col = candidates[rule].trailing_zeros() as usize;
        order[rule] = col;
        for mask in &mut candidates {
            *mask &= !(1 << col);
        }
    }
    Ok(order)
}

pub fn part1(s: &str) -> Result<u64> {
    let notes = parse(s)?;
    Ok(notes.nearby.iter().flatten().filter(|&&v| !notes.is_valid_value(v)).sum())
}

pub fn part2(s: &str) -> Result<u64> {
    let notes = parse(s)?;
    let order = field_order(&notes)?;
    Ok(notes
        .rules
        .iter()
        .zip(&order)
        .filter(|(rule, _)| rule.name.starts_with("departure"))
        .map(|(_, &col)| notes.mine[col])
        .product())
}

#[test]
fn test_2020_day16_part1() {
    let s = "\
class: 1-3 or 5-7
row: 6-11 or 33-44
seat: 13-40 or 45-50

your ticket:
7,1,14

nearby tickets:
7,3,47
40,4,50
55,2,20
38,6,12
";
    assert_eq!(part1(s).unwrap(), 71);
}

#[cfg(test)]
const EXAMPLE2: &str = "\
class: 0-1 or 4-19
row: 0-5 or 8-19
seat: 0-13 or 16-19

your ticket:
11,12,13

nearby tickets:
3,9,18
15,1,5
5,14,9
";

#[test]
fn test_2020_day16_field_order() {
    let notes = parse(EXAMPLE2).unwrap();
    assert_eq!(field_order(&notes).unwrap(), vec![1, 0, 2]);
}

#[test]
fn test_2020_day16_part2() {
    let s = EXAMPLE2.replace("class:", "departure class:").replace("seat:", "departure seat:");
    assert_eq!(part2(&s).unwrap(), 156);
}
