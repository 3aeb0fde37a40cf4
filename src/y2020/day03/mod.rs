use eyre::{bail, Result};

use crate::utils::*;

const SLOPES: [(usize, usize); 5] = [(1, 1), (3, 1), (5, 1), (7, 1), (1, 2)];

pub fn input() -> Result<String> {
    load(2020, 3)
}

fn parse(s: &str) -> Result<Grid<bool>> {
    Grid::parse(s, |c| match c {
        b'#' => Ok(true),
        b'.' => Ok(false),
        _ => bail!("unexpected map cell {:?}", char::from(c)),
    })
}

/// Trees hit going down the hill; the pattern repeats to the right.
fn trees(hill: &Grid<bool>, (right, down): (usize, usize)) -> usize {
    (0..hill.rows())
        .step_by(down)
        .enumerate()
        .filter(|&(i, row)| hill[(row, (i * right) % hill.cols())])
        .count()
}

pub fn part1(s: &str) -> Result<usize> {
    Ok(trees(&parse(s)?, (3, 1)))
}

pub fn part2(s: &str) -> Result<usize> {
    let hill = parse(s)?;
    Ok(SLOPES.iter().map(|&slope| trees(&hill, slope)).product())
}

#[cfg(test)]
const EXAMPLE: &str = "\
..##.......
#...#...#..
.#....#..#.
..#.#...#.#
.#...##..#.
..#.##.....
.#.#.#....#
.#........#
#.##...#...
#...##....#
.#..#...#.#
";

#[test]
fn test_2020_day03_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 7);
}

#[test]
fn test_2020_day03_part2() {
    let hill = parse(EXAMPLE).unwrap();
    let counts = SLOPES.iter().map(|&slope| trees(&hill, slope)).collect::<Vec<_>>();
    assert_eq!(counts, vec![2, 7, 3, 4, 2]);
    assert_eq!(part2(EXAMPLE).unwrap(), 336);
}
