use eyre::Result;

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 9)
}

fn parse(s: &str) -> Result<Grid<u8>> {
    Grid::parse(s, digit)
}

fn low_points(grid: &Grid<u8>) -> impl Iterator<Item = (usize, usize)> + '_ {
    grid.positions().filter(move |&pos| grid.neighbors4(pos).all(|n| grid[n] > grid[pos]))
}

/// Size of the basin around `start`: flood fill stopping at height 9.
fn basin_size(grid: &Grid<u8>, visited: &mut [bool], start: (usize, usize)) -> usize {
    let mut stack = vec![start];
    let mut size = 0;
    visited[grid.index_of(start.0, start.1)] = true;
    while let Some(pos) = stack.pop() {
        size += 1;
        for n in grid.neighbors4(pos) {
            let i = grid.index_of(n.0, n.1);
            if !visited[i] && grid[n] != 9 {
                visited[i] = true;
                stack.push(n);
            }
        }
    }
    size
}

pub fn part1(s: &str) -> Result<usize> {
    let grid = parse(s)?;
    Ok(low_points(&grid).map(|pos| usize::from(grid[pos]) + 1).sum())
}

pub fn part2(s: &str) -> Result<usize> {
    let grid = parse(s)?;
    let mut visited = vec![false; grid.len()];
    let mut sizes = low_points(&grid)
        .map(|pos| basin_size(&grid, &mut visited, pos))
        .collect::<Vec<_>>();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    Ok(sizes.iter().take(3).product())
}

#[cfg(test)]
const EXAMPLE: &str = "2199943210\n3987894921\n9856789892\n8767896789\n9899965678\n";

#[test]
fn test_2021_day09_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 15);
}

#[test]
fn test_2021_day09_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 1134);
}
