use eyre::{bail, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2023, 11)
}

fn parse(s: &str) -> Result<Grid<bool>> {
    Grid::parse(s, |c| match c {
        b'#' => Ok(true),
        b'.' => Ok(false),
        _ => bail!("unexpected image cell {:?}", char::from(c)),
    })
}

/// Sum of pairwise distances along one axis. `coords` are galaxy positions,
/// `empty[i]` tells whether line `i` has no galaxy and is therefore `factor` wide.
fn axis_distance(coords: &mut [usize], empty: &[bool], factor: u64) -> u64 {
    let mut expanded = Vec::with_capacity(empty.len());
    let mut pos = 0;
    for &e in empty {
        expanded.push(pos);
        pos += if e { factor } else { 1 };
    }
    coords.sort_unstable();
    // With sorted positions, the i-th one is subtracted from each of the i before it.
    let (mut sum, mut prefix) = (0, 0);
    for (i, &c) in coords.iter().enumerate() {
        let x = expanded[c];
        sum += x * i as u64 - prefix;
        prefix += x;
    }
    sum
}

fn total_distance(image: &Grid<bool>, factor: u64) -> u64 {
    let galaxies = image.positions().filter(|&pos| image[pos]).collect::<Vec<_>>();
    let empty_rows = (0..image.rows()).map(|r| !image.row(r).contains(&true)).collect::<Vec<_>>();
    let empty_cols = (0..image.cols()).map(|c| (0..image.rows()).all(|r| !image[(r, c)])).collect::<Vec<_>>();
    let mut rows = galaxies.iter().map(|p| p.0).collect::<Vec<_>>();
    let mut cols = galaxies.iter().map(|p| p.1).collect::<Vec<_>>();
    axis_distance(&mut rows, &empty_rows, factor) + axis_distance(&mut cols, &empty_cols, factor)
}

pub fn part1(s: &str) -> Result<u64> {
    Ok(total_distance(&parse(s)?, 2))
}

pub fn part2(s: &str) -> Result<u64> {
    Ok(total_distance(&parse(s)?, 1_000_000))
}

#[cfg(test)]
const EXAMPLE: &str = "\
...#......
.......#..
#.........
..........
......#...
.#........
.........#
..........
.......#..
#...#.....
";

#[test]
fn test_2023_day11_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 374);
}

#[test]
fn test_2023_day11_part2() {
    let image = parse(EXAMPLE).unwrap();
    assert_eq!(total_distance(&image, 10), 1030);
    assert_eq!(total_distance(&image, 100), 8410);
}
