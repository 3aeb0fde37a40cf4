use eyre::{ensure, Result};

use crate::utils::*;

/// This puzzle's input is short enough to be handed out inline.
pub const STARTING_NUMBERS: &str = "0,13,16,17,1,10,6";

pub fn input() -> Result<String> {
    Ok(STARTING_NUMBERS.to_owned())
}

/// The number spoken on turn `turns` of the memory game.
fn play(start: &[u32], turns: u32) -> u32 {
    if turns as usize <= start.len() {
        return turns.checked_sub(1).map_or(0, |i| start[i as usize]);
    }
    // last_seen[n] is the turn n was last spoken, 0 if never.
    let size = start.iter().map(|&n| n as usize + 1).max().unwrap_or(0).max(turns as usize);
    let mut last_seen = vec![0_u32; size];
    let mut next = 0;
    for (turn, &n) in (1..).zip(start) {
        next = match std::mem::replace(&mut last_seen[n as usize], turn) {
            0 => 0,
            prev => turn - prev,
        };
    }
    let mut spoken = next;
    for turn in start.len() as u32 + 1..=turns {
        spoken = next;
        next = match std::mem::replace(&mut last_seen[spoken as usize], turn) {
            0 => 0,
            prev => turn - prev,
        };
    }
    spoken
}

fn parse(s: &str) -> Result<Vec<u32>> {
    let start = parse_list(s, ',')?;
    ensure!(!start.is_empty(), "no starting numbers");
    Ok(start)
}

fn solve(s: &str, turns: u32) -> Result<u32> {
    Ok(play(&parse(s)?, turns))
}

pub fn part1(s: &str) -> Result<u32> {
    solve(s, 2020)
}

pub fn part2(s: &str) -> Result<u32> {
    solve(s, 30_000_000)
}

#[test]
fn test_2020_day15_part1() {
    assert_eq!(part1("0,3,6").unwrap(), 436);
    assert_eq!(part1("1,3,2").unwrap(), 1);
    assert_eq!(part1("2,1,3").unwrap(), 10);
    assert_eq!(part1("1,2,3").unwrap(), 27);
    assert_eq!(part1("2,3,1").unwrap(), 78);
    assert_eq!(part1("3,2,1").unwrap(), 438);
    assert_eq!(part1("3,1,2").unwrap(), 1836);
}

#[test]
fn test_2020_day15_play() {
    let spoken = (1..=10).map(|turn| play(&[0, 3, 6], turn)).collect::<Vec<_>>();
    assert_eq!(spoken, vec![0, 3, 6, 0, 3, 3, 1, 0, 4, 0]);
}

#[test]
fn test_2020_day15_part2() {
    assert_eq!(part2("0,3,6").unwrap(), 175594);
}
