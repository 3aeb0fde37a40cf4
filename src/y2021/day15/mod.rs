use std::cmp::Reverse;
use std::collections::BinaryHeap;

use eyre::{eyre, Result};

use crate::utils::*;

type Score = u32;

pub fn input() -> Result<String> {
    load(2021, 15)
}

fn parse(s: &str) -> Result<Grid<u8>> {
    Grid::parse(s, |c| match digit(c)? {
        0 => Err(eyre!("risk levels must be 1-9")),
        d => Ok(d),
    })
}

/// The map repeated `r` times in each direction; each tile step adds one to
/// the risk, wrapping from 9 back to 1.
fn tile(grid: &Grid<u8>, r: usize) -> Result<Grid<u8>> {
    let (n, m) = (grid.rows(), grid.cols());
    let mut cells = Vec::with_capacity(n * m * r * r);
    for i in 0..n * r {
        for j in 0..m * r {
            let weight = grid[(i % n, j % m)] as usize + i / n + j / m;
            cells.push((((weight - 1) % 9) + 1) as u8);
        }
    }
    Grid::new(n * r, m * r, cells)
}

/// Lowest total risk from the top-left to the bottom-right corner.
fn dijkstra(grid: &Grid<u8>) -> Result<Score> {
    let end = grid.len() - 1;
    let mut dist = vec![Score::MAX; grid.len()];
    let mut queue = BinaryHeap::new();
    dist[0] = 0;
    queue.push(Reverse((0, 0)));
    while let Some(Reverse((d, i))) = queue.pop() {
        if i == end {
            return Ok(d);
        }
        if d > dist[i] {
            continue;
        }
        for pos in grid.neighbors4(grid.position(i)) {
            let j = grid.index_of(pos.0, pos.1);
            let alt = d + Score::from(grid[pos]);
            if alt < dist[j] {
                dist[j] = alt;
                queue.push(Reverse((alt, j)));
            }
        }
    }
    Err(eyre!("bottom-right corner is unreachable"))
}

pub fn part1(s: &str) -> Result<Score> {
    dijkstra(&parse(s)?)
}

pub fn part2(s: &str) -> Result<Score> {
    dijkstra(&tile(&parse(s)?, 5)?)
}

#[cfg(test)]
const EXAMPLE: &str = "\
1163751742
1381373672
2136511328
3694931569
7463417111
1319128137
1359912421
3125421639
1293138521
2311944581
";

#[test]
fn test_2021_day15_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 40);
}

#[test]
fn test_2021_day15_part2() {
    let big = tile(&parse(EXAMPLE).unwrap(), 5).unwrap();
    assert_eq!((big.rows(), big.cols()), (50, 50));
    assert_eq!(big[(0, 10)], 2);
    assert_eq!(big[(49, 49)], 9);
    assert_eq!(big[(10, 49)], 7);
    assert_eq!(part2(EXAMPLE).unwrap(), 315);
}
