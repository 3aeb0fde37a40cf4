use eyre::{ensure, eyre, Result};
use regex::Regex;

use crate::utils::*;

type T = i32;

pub fn input() -> Result<String> {
    load(2021, 17)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Target {
    xmin: T,
    xmax: T,
    ymin: T,
    ymax: T,
}

impl Target {
    pub fn parse(s: &str) -> Result<Self> {
        let re = Regex::new(r"^target area: x=(-?\d+)\.\.(-?\d+), y=(-?\d+)\.\.(-?\d+)$")?;
        let caps = re.captures(s.trim()).ok_or_else(|| eyre!("expected `target area: x=a..b, y=c..d`"))?;
        let num = |i: usize| parse_num::<T>(&caps[i]);
        let (x0, x1, y0, y1) = (num(1)?, num(2)?, num(3)?, num(4)?);
        let target = Self { xmin: x0.min(x1), xmax: x0.max(x1), ymin: y0.min(y1), ymax: y0.max(y1) };
        ensure!(target.xmin > 0 && target.ymax < 0, "target must be right of and below the origin");
        Ok(target)
    }

    fn contains(&self, (x, y): (T, T)) -> bool {
        (self.xmin..=self.xmax).contains(&x) && (self.ymin..=self.ymax).contains(&y)
    }

    /// The apex of the trajectory if the probe ever lands in the target.
    fn shoot(&self, (mut vx, mut vy): (T, T)) -> Option<T> {
        let (mut x, mut y, mut top) = (0, 0, 0);
        while x <= self.xmax && y >= self.ymin {
            x += vx;
            y += vy;
            vx -= vx.signum();
            vy -= 1;
            top = top.max(y);
            if self.contains((x, y)) {
                return Some(top);
            }
        }
        None
    }

    /// Apexes of every hitting initial velocity. Anything faster than the far
    /// corner in a single step overshoots, which bounds the search.
    fn hits(&self) -> impl Iterator<Item = T> + '_ {
        (1..=self.xmax)
            .flat_map(move |vx| (self.ymin..=-self.ymin).map(move |vy| (vx, vy)))
            .filter_map(move |v| self.shoot(v))
    }
}

pub fn part1(s: &str) -> Result<T> {
    Target::parse(s)?.hits().max().ok_or_else(|| eyre!("no trajectory hits the target"))
}

pub fn part2(s: &str) -> Result<usize> {
    Ok(Target::parse(s)?.hits().count())
}

#[cfg(test)]
const EXAMPLE: &str = "target area: x=20..30, y=-10..-5\n";

#[test]
fn test_2021_day17_part1() {
    let target = Target::parse(EXAMPLE).unwrap();
    assert_eq!(target.shoot((7, 2)), Some(3));
    assert_eq!(target.shoot((6, 9)), Some(45));
    assert_eq!(target.shoot((17, -4)), None);
    assert_eq!(part1(EXAMPLE).unwrap(), 45);
}

#[test]
fn test_2021_day17_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 112);
    assert!(part2("target area: x=-5..5, y=-10..-5").is_err());
}
