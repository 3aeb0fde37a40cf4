use eyre::{bail, ensure, eyre, Result};

use crate::utils::*;

type T = i32;
type Point = (T, T);

pub fn input() -> Result<String> {
    load(2021, 13)
}

#[inline]
fn fold_1d(coord: &mut T, pivot: T) {
    if *coord > pivot {
        *coord = 2 * pivot - *coord
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Fold {
    pivot: T,
    is_y: bool,
}

impl Fold {
    pub fn parse(line: &str) -> Result<Self> {
        let rest = line.strip_prefix("fold along ").ok_or_else(|| eyre!("expected `fold along x|y=n`"))?;
        let (axis, pivot) = rest.split_once('=').ok_or_else(|| eyre!("expected `x=n` or `y=n`"))?;
        let is_y = match axis {
            "x" => false,
            "y" => true,
            _ => bail!("unknown fold axis {:?}", axis),
        };
        Ok(Self { pivot: parse_num(pivot)?, is_y })
    }

    pub fn apply<'a>(&self, points: impl IntoIterator<Item = &'a mut Point>) {
        if self.is_y {
            for point in points {
                fold_1d(&mut point.1, self.pivot);
            }
        } else {
            for point in points {
                fold_1d(&mut point.0, self.pivot);
            }
        }
    }
}

fn parse(s: &str) -> Result<(Vec<Point>, Vec<Fold>)> {
    let sections = blocks(s);
    ensure!(sections.len() == 2, "expected dots and folds separated by a blank line");
    let points = parse_lines(sections[0], |line| {
        let (x, y) = line.split_once(',').ok_or_else(|| eyre!("expected `x,y`"))?;
        Ok((parse_num(x)?, parse_num(y)?))
    })?;
    let folds = parse_lines(sections[1], Fold::parse)?;
    ensure!(!folds.is_empty(), "no folds");
    Ok((points, folds))
}

fn count_unique(points: &mut Vec<Point>) -> usize {
    points.sort_unstable();
    points.dedup();
    points.len()
}

/// Renders dots as `#` on a `.` background, one text row per y.
fn display_points(points: &[Point]) -> String {
    let xmax = points.iter().map(|p| p.0).max().unwrap_or(-1);
    let ymax = points.iter().map(|p| p.1).max().unwrap_or(-1);
    let (w, h) = ((xmax + 1).max(0) as usize, (ymax + 1).max(0) as usize);
    let mut rows = vec![vec!['.'; w]; h];
    for &(x, y) in points {
        if x >= 0 && y >= 0 {
            rows[y as usize][x as usize] = '#';
        }
    }
    rows.into_iter().map(|row| row.into_iter().collect::<String>()).collect::<Vec<_>>().join("\n")
}

pub fn part1(s: &str) -> Result<usize> {
    let (mut points, folds) = parse(s)?;
    folds[0].apply(&mut points);
    Ok(count_unique(&mut points))
}

pub fn part2(s: &str) -> Result<String> {
    let (mut points, folds) = parse(s)?;
    for fold in &folds {
        fold.apply(&mut points);
    }
    Ok(display_points(&points))
}

#[cfg(test)]
const EXAMPLE: &str = "\
6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

#[test]
fn test_2021_day13_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 17);
}

#[test]
fn test_2021_day13_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), "#####\n#...#\n#...#\n#...#\n#####");
}

#[test]
fn test_2021_day13_malformed() {
    assert!(Fold::parse("fold along z=3").is_err());
    assert!(part1("1,2\n\n").is_err());
}
