use ahash::AHashMap;
use eyre::{ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 5)
}

type Point = (i32, i32);

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Segment {
    from: Point,
    to: Point,
}

impl Segment {
    pub fn parse(line: &str) -> Result<Self> {
        let (from, to) = line.split_once(" -> ").ok_or_else(|| eyre!("expected `x1,y1 -> x2,y2`"))?;
        let point = |s: &str| -> Result<Point> {
            let (x, y) = s.split_once(',').ok_or_else(|| eyre!("expected `x,y`, got {:?}", s))?;
            Ok((parse_num(x)?, parse_num(y)?))
        };
        let segment = Self { from: point(from)?, to: point(to)? };
        let (dx, dy) = segment.delta();
        ensure!(dx == 0 || dy == 0 || dx.abs() == dy.abs(), "segment is not horizontal, vertical or 45 degrees");
        Ok(segment)
    }

    fn delta(&self) -> (i32, i32) {
        (self.to.0 - self.from.0, self.to.1 - self.from.1)
    }

    fn is_diagonal(&self) -> bool {
        let (dx, dy) = self.delta();
        dx != 0 && dy != 0
    }

    fn points(&self) -> impl Iterator<Item = Point> {
        let (dx, dy) = self.delta();
        let (sx, sy) = (dx.signum(), dy.signum());
        let from = self.from;
        (0..=dx.abs().max(dy.abs())).map(move |i| (from.0 + i * sx, from.1 + i * sy))
    }
}

fn count_overlaps(s: &str, diagonals: bool) -> Result<usize> {
    let mut covered = AHashMap::<Point, u16>::new();
    for segment in parse_lines(s, Segment::parse)? {
        if diagonals || !segment.is_diagonal() {
            for p in segment.points() {
                *covered.entry(p).or_default() += 1;
            }
        }
    }
    Ok(covered.values().filter(|&&n| n >= 2).count())
}

pub fn part1(s: &str) -> Result<usize> {
    count_overlaps(s, false)
}

pub fn part2(s: &str) -> Result<usize> {
    count_overlaps(s, true)
}

#[cfg(test)]
const EXAMPLE: &str = "\
0,9 -> 5,9
8,0 -> 0,8
9,4 -> 3,4
2,2 -> 2,1
7,0 -> 7,4
6,4 -> 2,0
0,9 -> 2,9
3,4 -> 1,4
0,0 -> 8,8
5,5 -> 8,2
";

#[test]
fn test_2021_day05_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 5);
}

#[test]
fn test_2021_day05_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 12);
}

#[test]
fn test_2021_day05_points() {
    let seg = Segment::parse("9,7 -> 7,9").unwrap();
    assert_eq!(seg.points().collect::<Vec<_>>(), vec![(9, 7), (8, 8), (7, 9)]);
    assert!(Segment::parse("0,0 -> 1,2").is_err());
}
