use ahash::{AHashMap, AHashSet};
use eyre::{bail, Result};

use crate::utils::*;

const CYCLES: usize = 6;

pub fn input() -> Result<String> {
    load(2020, 17)
}

type Cube<const D: usize> = [i32; D];

/// Active cubes of the starting slice, embedded into `D >= 2` dimensions.
fn parse<const D: usize>(s: &str) -> Result<AHashSet<Cube<D>>> {
    let mut active = AHashSet::new();
    for (y, line) in lines(s).enumerate() {
        for (x, c) in line.bytes().enumerate() {
            match c {
                b'#' => {
                    let mut cube = [0; D];
                    cube[0] = x as i32;
                    cube[1] = y as i32;
                    active.insert(cube);
                }
                b'.' => {}
                _ => bail!("invalid cube {:?} on line {}", char::from(c), y + 1),
            }
        }
    }
    Ok(active)
}

/// All `3^D - 1` unit offsets.
fn offsets<const D: usize>() -> Vec<Cube<D>> {
    let mut out = vec![[0; D]];
    for axis in 0..D {
        out = out
            .into_iter()
            .flat_map(|base| {
                (-1..=1).map(move |d| {
                    let mut cube = base;
                    cube[axis] = d;
                    cube
                })
            })
            .collect();
    }
    out.retain(|cube| cube.iter().any(|&d| d != 0));
    out
}

fn cycle<const D: usize>(active: &AHashSet<Cube<D>>, offsets: &[Cube<D>]) -> AHashSet<Cube<D>> {
    let mut counts = AHashMap::<Cube<D>, u8>::with_capacity(active.len() * offsets.len());
    for cube in active {
        for offset in offsets {
            let mut neighbor = *cube;
            neighbor.iter_mut().zip(offset).for_each(|(a, d)| *a += d);
            *counts.entry(neighbor).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .filter(|(cube, n)| *n == 3 || (*n == 2 && active.contains(cube)))
        .map(|(cube, _)| cube)
        .collect()
}

fn simulate<const D: usize>(s: &str) -> Result<usize> {
    let offsets = offsets::<D>();
    let mut active = parse::<D>(s)?;
    for _ in 0..CYCLES {
        active = cycle(&active, &offsets);
    }
    Ok(active.len())
}

pub fn part1(s: &str) -> Result<usize> {
    simulate::<3>(s)
}

pub fn part2(s: &str) -> Result<usize> {
    simulate::<4>(s)
}

#[cfg(test)]
const EXAMPLE: &str = ".#.\n..#\n###\n";

#[test]
fn test_2020_day17_offsets() {
    assert_eq!(offsets::<2>().len(), 8);
    assert_eq!(offsets::<3>().len(), 26);
    assert_eq!(offsets::<4>().len(), 80);
}

#[test]
fn test_2020_day17_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 112);
}

#[test]
fn test_2020_day17_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 848);
}
