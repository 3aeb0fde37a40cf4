use eyre::{bail, ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 12)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Action {
    Move(i64, i64),
    /// Number of quarter turns counter-clockwise.
    Turn(u8),
    Forward(i64),
}

fn parse_action(line: &str) -> Result<Action> {
    let kind = *line.as_bytes().first().ok_or_else(|| eyre!("empty action"))?;
    let n: i64 = parse_num(line.get(1..).unwrap_or_default())?;
    let quarter = |n: i64| -> Result<u8> {
        ensure!(n % 90 == 0, "turns must be multiples of 90 degrees, got {}", n);
        Ok((n / 90).rem_euclid(4) as u8)
    };
    Ok(match kind {
        b'N' => Action::Move(0, n),
        b'S' => Action::Move(0, -n),
        b'E' => Action::Move(n, 0),
        b'W' => Action::Move(-n, 0),
        b'L' => Action::Turn(quarter(n)?),
        b'R' => Action::Turn(quarter(-n)?),
        b'F' => Action::Forward(n),
        _ => bail!("unknown action {:?}", char::from(kind)),
    })
}

fn rotate((x, y): (i64, i64), quarters: u8) -> (i64, i64) {
    (0..quarters).fold((x, y), |(x, y), _| (-y, x))
}

/// Sails the ship; with `waypoint` set, moves go to the waypoint instead of the ship.
fn navigate(actions: &[Action], start: (i64, i64), waypoint: bool) -> i64 {
    let (mut ship, mut dir) = ((0, 0), start);
    for &action in actions {
        match action {
            Action::Move(dx, dy) if waypoint => dir = (dir.0 + dx, dir.1 + dy),
            Action::Move(dx, dy) => ship = (ship.0 + dx, ship.1 + dy),
            Action::Turn(q) => dir = rotate(dir, q),
            Action::Forward(n) => ship = (ship.0 + n * dir.0, ship.1 + n * dir.1),
        }
    }
    ship.0.abs() + ship.1.abs()
}

pub fn part1(s: &str) -> Result<i64> {
    Ok(navigate(&parse_lines(s, parse_action)?, (1, 0), false))
}

pub fn part2(s: &str) -> Result<i64> {
    Ok(navigate(&parse_lines(s, parse_action)?, (10, 1), true))
}

#[cfg(test)]
const EXAMPLE: &str = "F10\nN3\nF7\nR90\nF11\n";

#[test]
fn test_2020_day12_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 25);
}

#[test]
fn test_2020_day12_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 286);
}

#[test]
fn test_2020_day12_turns() {
    assert_eq!(parse_action("R90").unwrap(), Action::Turn(3));
    assert_eq!(parse_action("L270").unwrap(), Action::Turn(3));
    assert_eq!(rotate((10, 4), 3), (4, -10));
    assert!(parse_action("R45").is_err());
    assert!(parse_action("X1").is_err());
}
