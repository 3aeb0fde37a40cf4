use eyre::{bail, eyre, Result};

use crate::utils::*;

const BAG: Cubes = Cubes { red: 12, green: 13, blue: 14 };

pub fn input() -> Result<String> {
    load(2023, 2)
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    /// One handful, e.g. `3 blue, 4 red`.
    pub fn parse(s: &str) -> Result<Self> {
        let mut cubes = Self::default();
        for item in s.split(',') {
            let (n, color) = item.trim().split_once(' ').ok_or_else(|| eyre!("expected `<n> <color>`"))?;
            let n: u32 = parse_num(n)?;
            match color {
                "red" => cubes.red += n,
                "green" => cubes.green += n,
                "blue" => cubes.blue += n,
                _ => bail!("unknown color {:?}", color),
            }
        }
        Ok(cubes)
    }

    fn max(self, other: Self) -> Self {
        Self { red: self.red.max(other.red), green: self.green.max(other.green), blue: self.blue.max(other.blue) }
    }

    fn fits_in(&self, bag: &Self) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn power(&self) -> u32 {
        self.red * self.green * self.blue
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Game {
    id: u32,
    /// Per-colour maximum over all handfuls.
    fewest: Cubes,
}

impl Game {
    pub fn parse(line: &str) -> Result<Self> {
        let (head, handfuls) = line.split_once(':').ok_or_else(|| eyre!("expected `Game <id>: ...`"))?;
        let id = head.strip_prefix("Game ").ok_or_else(|| eyre!("expected `Game <id>`"))?;
        let fewest = handfuls.split(';').map(Cubes::parse).try_fold(Cubes::default(), |acc, c| c.map(|c| acc.max(c)))?;
        Ok(Self { id: parse_num(id)?, fewest })
    }
}

pub fn part1(s: &str) -> Result<u32> {
    Ok(parse_lines(s, Game::parse)?.iter().filter(|g| g.fewest.fits_in(&BAG)).map(|g| g.id).sum())
}

pub fn part2(s: &str) -> Result<u32> {
    Ok(parse_lines(s, Game::parse)?.iter().map(|g| g.fewest.power()).sum())
}

#[cfg(test)]
const EXAMPLE: &str = "\
Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green
Game 2: 1 blue, 2 green; 3 green, 4 blue, 1 red; 1 green, 1 blue
Game 3: 8 green, 6 blue, 20 red; 5 blue, 4 red, 13 green; 5 green, 1 red
Game 4: 1 green, 3 red, 6 blue; 3 green, 6 red; 3 green, 15 blue, 14 red
Game 5: 6 red, 1 blue, 3 green; 2 blue, 1 red, 2 green
";

#[test]
fn test_2023_day02_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 8);
}

#[test]
fn test_2023_day02_part2() {
    let game = Game::parse("Game 1: 3 blue, 4 red; 1 red, 2 green, 6 blue; 2 green").unwrap();
    assert_eq!(game.fewest, Cubes { red: 4, green: 2, blue: 6 });
    assert_eq!(part2(EXAMPLE).unwrap(), 2286);
    assert!(Game::parse("Game 1: 3 purple").is_err());
}
