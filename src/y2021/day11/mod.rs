use std::iter;

use eyre::{ensure, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 11)
}

fn parse(s: &str) -> Result<Grid<u8>> {
    let grid = Grid::parse(s, digit)?;
    ensure!(!grid.is_empty(), "empty grid");
    Ok(grid)
}

/// Number of flashes in each successive step.
fn evolve(mut grid: Grid<u8>) -> impl Iterator<Item = usize> {
    let mut stack = Vec::with_capacity(grid.len());
    iter::from_fn(move || {
        for pos in grid.positions() {
            grid[pos] += 1;
            if grid[pos] > 9 {
                stack.push(pos);
            }
        }
        let mut flashed = stack.len();
        while let Some(pos) = stack.pop() {
            let neighbors = grid.neighbors8(pos).collect::<Vec<_>>();
            for n in neighbors {
                // Cells above 9 have already flashed this step.
                if grid[n] <= 9 {
                    grid[n] += 1;
                    if grid[n] > 9 {
                        flashed += 1;
                        stack.push(n);
                    }
                }
            }
        }
        for pos in grid.positions() {
            if grid[pos] > 9 {
                grid[pos] = 0;
            }
        }
        Some(flashed)
    })
}

pub fn part1(s: &str) -> Result<usize> {
    Ok(evolve(parse(s)?).take(100).sum())
}

pub fn part2(s: &str) -> Result<usize> {
    let grid = parse(s)?;
    let n = grid.len();
    Ok(1 + evolve(grid).take_while(|&flashed| flashed != n).count())
}

#[cfg(test)]
const EXAMPLE: &str = "\
5483143223\n2745854711\n5264556173\n6141336146\n6357385478\n4167524645\n2176841721\n6882881134\n4846848554\n5283751526\n";

#[test]
fn test_2021_day11_part1() {
    assert_eq!(evolve(parse(EXAMPLE).unwrap()).take(10).sum::<usize>(), 204);
    assert_eq!(part1(EXAMPLE).unwrap(), 1656);
}

#[test]
fn test_2021_day11_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 195);
}
