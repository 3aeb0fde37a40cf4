use arrayvec::ArrayVec;
use eyre::{bail, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 11)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Cell {
    Floor,
    Empty,
    Occupied,
}

fn parse(s: &str) -> Result<Grid<Cell>> {
    Grid::parse(s, |c| {
        Ok(match c {
            b'.' => Cell::Floor,
            b'L' => Cell::Empty,
            b'#' => Cell::Occupied,
            _ => bail!("invalid seat {:?}", char::from(c)),
        })
    })
}

type Neighbors = ArrayVec<usize, 8>;

/// For every seat, the indices of the seats it watches: adjacent ones, or the
/// first seat along each direction when `line_of_sight` is set.
fn neighbors(grid: &Grid<Cell>, line_of_sight: bool) -> Vec<Neighbors> {
    grid.positions()
        .map(|pos| {
            let mut out = Neighbors::new();
            if grid[pos] == Cell::Floor {
                return out;
            }
            for &dir in &DIRS8 {
                let mut cur = grid.step(pos, dir);
                while let Some(p) = cur {
                    if grid[p] != Cell::Floor {
                        out.push(grid.index_of(p.0, p.1));
                        break;
                    }
                    cur = if line_of_sight { grid.step(p, dir) } else { None };
                }
            }
            out
        })
        .collect()
}

/// Runs the seating rules until nothing changes; returns the occupied count.
fn settle(grid: &Grid<Cell>, line_of_sight: bool, tolerance: usize) -> usize {
    let neighbors = neighbors(grid, line_of_sight);
    let mut cells = grid.cells().to_vec();
    let mut next = cells.clone();
    loop {
        let mut changed = false;
        for (i, watched) in neighbors.iter().enumerate() {
            let occupied = watched.iter().filter(|&&j| cells[j] == Cell::Occupied).count();
            next[i] = match cells[i] {
                Cell::Empty if occupied == 0 => Cell::Occupied,
                Cell::Occupied if occupied >= tolerance => Cell::Empty,
                cell => cell,
            };
            changed |= next[i] != cells[i];
        }
        std::mem::swap(&mut cells, &mut next);
        if !changed {
            return cells.iter().filter(|&&c| c == Cell::Occupied).count();
        }
    }
}

pub fn part1(s: &str) -> Result<usize> {
    Ok(settle(&parse(s)?, false, 4))
}

pub fn part2(s: &str) -> Result<usize> {
    Ok(settle(&parse(s)?, true, 5))
}

#[cfg(test)]
const EXAMPLE: &str = "\
L.LL.LL.LL
LLLLLLL.LL
L.L.L..L..
LLLL.LL.LL
L.LL.LL.LL
L.LLLLL.LL
..L.L.....
LLLLLLLLLL
L.LLLLLL.L
L.LLLLL.LL
";

#[test]
fn test_2020_day11_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 37);
}

#[test]
fn test_2020_day11_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 26);
}

#[test]
fn test_2020_day11_line_of_sight() {
    let grid = parse(".L.L\n....\n...L\n").unwrap();
    let near = neighbors(&grid, false);
    let far = neighbors(&grid, true);
    assert!(near[1].is_empty());
    assert_eq!(far[1].as_slice(), &[3, 11]);
    assert_eq!(far[3].as_slice(), &[1, 11]);
}
