use ahash::AHashMap;
use eyre::Result;

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2023, 3)
}

fn is_symbol(c: u8) -> bool {
    !c.is_ascii_digit() && c != b'.'
}

/// A part number: its value and the cells around it.
#[derive(Debug, Clone, PartialEq, Eq)]
struct PartNumber {
    value: u64,
    around: Vec<(usize, usize)>,
}

fn numbers(grid: &Grid<u8>) -> Result<Vec<PartNumber>> {
    let mut out = Vec::new();
    for row in 0..grid.rows() {
        let cells = grid.row(row);
        let mut col = 0;
        while col < cells.len() {
            if !cells[col].is_ascii_digit() {
                col += 1;
                continue;
            }
            let len = cells[col..].iter().take_while(|c| c.is_ascii_digit()).count();
            let value = parse_num(std::str::from_utf8(&cells[col..col + len])?)?;
            let around = (row.saturating_sub(1)..=row + 1)
                .flat_map(|r| (col.saturating_sub(1)..=col + len).map(move |c| (r, c)))
                .filter(|&(r, c)| grid.get(r, c).is_some() && !(r == row && (col..col + len).contains(&c)))
                .collect();
            out.push(PartNumber { value, around });
            col += len;
        }
    }
    Ok(out)
}

fn parse(s: &str) -> Result<(Grid<u8>, Vec<PartNumber>)> {
    let grid = Grid::parse(s, Ok)?;
    let numbers = numbers(&grid)?;
    Ok((grid, numbers))
}

pub fn part1(s: &str) -> Result<u64> {
    let (grid, numbers) = parse(s)?;
    Ok(numbers
        .iter()
        .filter(|n| n.around.iter().any(|&pos| is_symbol(grid[pos])))
        .map(|n| n.value)
        .sum())
}

/// A number counts towards every `*` it touches; gears are the `*`s with exactly two.
pub fn part2(s: &str) -> Result<u64> {
    let (grid, numbers) = parse(s)?;
    let mut gears = AHashMap::<(usize, usize), Vec<u64>>::new();
    for n in &numbers {
        for &pos in n.around.iter().filter(|&&pos| grid[pos] == b'*') {
            gears.entry(pos).or_default().push(n.value);
        }
    }
    Ok(gears.values().filter(|v| v.len() == 2).map(|v| v[0] * v[1]).sum())
}

#[cfg(test)]
const EXAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

#[test]
fn test_2023_day03_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 4361);
}

#[test]
fn test_2023_day03_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 467835);
    // Only the top `*` touches both numbers.
    assert_eq!(part2("2*3\n*..\n").unwrap(), 6);
    assert_eq!(part2("2.3\n.*.\n4..\n").unwrap(), 0);
}
