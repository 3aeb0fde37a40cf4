use eyre::{ensure, eyre, Result};

use crate::utils::*;

const N: usize = 26;

type Rules = [[Option<usize>; N]; N];

fn element(c: u8) -> Result<usize> {
    ensure!(c.is_ascii_uppercase(), "invalid element {:?}", char::from(c));
    Ok(usize::from(c - b'A'))
}

fn parse(s: &str) -> Result<(Vec<usize>, Rules)> {
    let sections = blocks(s);
    ensure!(sections.len() == 2, "expected a template and rules separated by a blank line");
    let word = sections[0].bytes().map(element).collect::<Result<Vec<_>>>()?;
    ensure!(!word.is_empty(), "empty template");
    let mut rules = [[None; N]; N];
    for line in lines(sections[1]) {
        let (pair, insert) = line.split_once(" -> ").ok_or_else(|| eyre!("expected `AB -> C`, got {:?}", line))?;
        ensure!(pair.len() == 2 && insert.len() == 1, "expected `AB -> C`, got {:?}", line);
        let [x, y] = [pair.as_bytes()[0], pair.as_bytes()[1]];
        rules[element(x)?][element(y)?] = Some(element(insert.as_bytes()[0])?);
    }
    Ok((word, rules))
}

/// Tracks pair counts only: each step `XY -> Z` turns every `XY` into `XZ` and `ZY`.
fn solve(word: &[usize], rules: &Rules, n_iter: usize) -> u64 {
    let mut matrix = [[0_u64; N]; N];
    for w in word.windows(2) {
        matrix[w[0]][w[1]] += 1;
    }

    for _ in 0..n_iter {
        let mut next = matrix;
        for left in 0..N {
            for right in 0..N {
                if let Some(c) = rules[left][right] {
                    let n = matrix[left][right];
                    next[left][right] -= n;
                    next[left][c] += n;
                    next[c][right] += n;
                }
            }
        }
        matrix = next;
    }

    // Every element is the left half of exactly one pair, except the last one.
    let mut counts = matrix.map(|row| row.into_iter().sum::<u64>());
    if let Some(&last) = word.last() {
        counts[last] += 1;
    }
    let present = counts.iter().copied().filter(|&n| n != 0);
    let (min, max) = present.fold((u64::MAX, 0), |(lo, hi), n| (lo.min(n), hi.max(n)));
    max - min
}

pub fn input() -> Result<String> {
    load(2021, 14)
}

pub fn part1(s: &str) -> Result<u64> {
    let (word, rules) = parse(s)?;
    Ok(solve(&word, &rules, 10))
}

pub fn part2(s: &str) -> Result<u64> {
    let (word, rules) = parse(s)?;
    Ok(solve(&word, &rules, 40))
}

#[cfg(test)]
const EXAMPLE: &str = "\
NNCB

CH -> B
HH -> N
CB -> H
NH -> C
HB -> C
HC -> B
HN -> C
NN -> C
BH -> H
NC -> B
NB -> B
BN -> B
BB -> N
BC -> B
CC -> N
CN -> C
";

#[test]
fn test_2021_day14_part1() {
    let (word, rules) = parse(EXAMPLE).unwrap();
    assert_eq!(solve(&word, &rules, 0), 1);
    assert_eq!(part1(EXAMPLE).unwrap(), 1588);
}

#[test]
fn test_2021_day14_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 2188189693529);
}
