use eyre::{bail, ensure, eyre, Result};
use num_integer::Integer;

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 13)
}

struct Notes {
    earliest: u64,
    /// `(offset, bus id)` for every bus in service.
    buses: Vec<(u64, u64)>,
}

fn parse(s: &str) -> Result<Notes> {
    let mut it = lines(s);
    let earliest = parse_num(it.next().ok_or_else(|| eyre!("missing earliest departure"))?)?;
    let schedule = it.next().ok_or_else(|| eyre!("missing bus schedule"))?;
    let mut buses = Vec::new();
    for (offset, id) in schedule.split(',').enumerate() {
        if id != "x" {
            let id: u64 = parse_num(id)?;
            ensure!(id > 0, "bus ids must be positive");
            buses.push((offset as u64, id));
        }
    }
    ensure!(!buses.is_empty(), "no buses in service");
    Ok(Notes { earliest, buses })
}

/// Earliest `t` with `(t + offset) % id == 0` for every bus, found by sieving
/// one bus at a time with the step growing to the lcm of the ids handled so far.
/// Residues modulo `id` repeat after `id` steps, so a bus that is still missed
/// by then can never be caught.
fn earliest_sequence(buses: &[(u64, u64)]) -> Result<u64> {
    let mut buses = buses.to_vec();
    buses.sort_unstable_by(|a, b| b.1.cmp(&a.1));
    let (mut t, mut step) = (0_u64, 1_u64);
    for (offset, id) in buses {
        let remainder = (-(offset as i64)).mod_floor(&(id as i64)) as u64;
        let mut tries = 0;
        while t % id != remainder {
            if tries == id {
                bail!("bus schedule has no solution");
            }
            t = t.checked_add(step).ok_or_else(|| eyre!("bus schedule timestamp overflows"))?;
            tries += 1;
        }
        step = step.lcm(&id);
    }
    Ok(t)
}

pub fn part1(s: &str) -> Result<u64> {
    let notes = parse(s)?;
    let wait = |id: u64| (id - notes.earliest % id) % id;
    let (_, id) = notes.buses.iter().min_by_key(|&&(_, id)| wait(id)).ok_or_else(|| eyre!("no buses"))?;
    Ok(id * wait(*id))
}

pub fn part2(s: &str) -> Result<u64> {
    earliest_sequence(&parse(s)?.buses)
}

#[cfg(test)]
const EXAMPLE: &str = "939\n7,13,x,x,59,x,31,19\n";

#[test]
fn test_2020_day13_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 295);
}

#[test]
fn test_2020_day13_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 1068781);
    assert_eq!(part2("0\n17,x,13,19\n").unwrap(), 3417);
    assert_eq!(part2("0\n67,7,59,61\n").unwrap(), 754018);
    assert_eq!(part2("0\n1789,37,47,1889\n").unwrap(), 1202161486);
}

#[test]
fn test_2020_day13_no_solution() {
    assert!(part2("0\n2,4\n").is_err());
    assert_eq!(part2("0\n2,x,4\n").unwrap(), 2);
}
