use eyre::{bail, ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 5)
}

/// Boarding passes are 10-bit binary numbers: `B`/`R` are ones, `F`/`L` zeros.
fn seat_id(pass: &str) -> Result<u16> {
    ensure!(pass.len() == 10, "boarding pass must be 10 characters long");
    pass.bytes().try_fold(0, |acc, c| {
        let bit = match c {
            b'B' | b'R' => 1,
            b'F' | b'L' => 0,
            _ => bail!("invalid boarding pass character {:?}", char::from(c)),
        };
        Ok((acc << 1) | bit)
    })
}

fn parse(s: &str) -> Result<Vec<u16>> {
    parse_lines(s, seat_id)
}

/// The only missing id in the sorted list whose neighbours are both present.
fn find_gap(mut ids: Vec<u16>) -> Result<u16> {
    ids.sort_unstable();
    ids.windows(2)
        .find(|w| w[1] == w[0] + 2)
        .map(|w| w[0] + 1)
        .ok_or_else(|| eyre!("no free seat found"))
}

pub fn part1(s: &str) -> Result<u16> {
    parse(s)?.into_iter().max().ok_or_else(|| eyre!("no boarding passes"))
}

pub fn part2(s: &str) -> Result<u16> {
    find_gap(parse(s)?)
}

#[test]
fn test_2020_day05_seat_id() {
    assert_eq!(seat_id("FBFBBFFRLR").unwrap(), 357);
    assert_eq!(seat_id("BFFFBBFRRR").unwrap(), 567);
    assert_eq!(seat_id("FFFBBBFRRR").unwrap(), 119);
    assert_eq!(seat_id("BBFFBBFRLL").unwrap(), 820);
    assert!(seat_id("BBFFBBFRLX").is_err());
    assert!(seat_id("BBFF").is_err());
}

#[test]
fn test_2020_day05_part1() {
    assert_eq!(part1("FBFBBFFRLR\nBFFFBBFRRR\nFFFBBBFRRR\nBBFFBBFRLL\n").unwrap(), 820);
}

#[test]
fn test_2020_day05_part2() {
    assert_eq!(find_gap(vec![8, 4, 7, 3, 5]).unwrap(), 6);
    assert!(find_gap(vec![1, 2, 3]).is_err());
}
