use eyre::{bail, Result};

use crate::input::Inputs;

/// A type-erased solver for one part of a puzzle.
pub type Solver = fn(&str) -> Result<String>;

#[derive(Clone, Copy)]
pub struct Puzzle {
    pub year: u16,
    pub day: u8,
    pub title: &'static str,
    pub part1: Solver,
    pub part2: Solver,
    /// Puzzles whose input is given inline in the puzzle text rather than as a file.
    pub fixed_input: Option<&'static str>,
}

impl Puzzle {
    pub fn input(&self, inputs: &Inputs) -> Result<String> {
        match self.fixed_input {
            Some(s) => Ok(s.to_owned()),
            None => inputs.load(self.year, self.day),
        }
    }

    pub fn solve(&self, part: u8, s: &str) -> Result<String> {
        match part {
            1 => (self.part1)(s),
            2 => (self.part2)(s),
            _ => bail!("part must be 1 or 2, got {}", part),
        }
    }

    pub fn name(&self) -> String {
        format!("{}/day{:02}", self.year, self.day)
    }
}

macro_rules! puzzle {
    ($y:ident::$d:ident, $year:literal, $day:literal, $title:literal) => {
        puzzle!($y::$d, $year, $day, $title, None)
    };
    ($y:ident::$d:ident, $year:literal, $day:literal, $title:literal, $fixed:expr) => {
        Puzzle {
            year: $year,
            day: $day,
            title: $title,
            part1: |s| crate::$y::$d::part1(s).map(|out| out.to_string()),
            part2: |s| crate::$y::$d::part2(s).map(|out| out.to_string()),
            fixed_input: $fixed,
        }
    };
}

pub static PUZZLES: &[Puzzle] = &[
    puzzle!(y2020::day01, 2020, 1, "Report Repair"),
    puzzle!(y2020::day02, 2020, 2, "Password Philosophy"),
    puzzle!(y2020::day03, 2020, 3, "Toboggan Trajectory"),
    puzzle!(y2020::day04, 2020, 4, "Passport Processing"),
    puzzle!(y2020::day05, 2020, 5, "Binary Boarding"),
    puzzle!(y2020::day06, 2020, 6, "Custom Customs"),
    puzzle!(y2020::day07, 2020, 7, "Handy Haversacks"),
    puzzle!(y2020::day08, 2020, 8, "Handheld Halting"),
    puzzle!(y2020::day09, 2020, 9, "Encoding Error"),
    puzzle!(y2020::day10, 2020, 10, "Adapter Array"),
    puzzle!(y2020::day11, 2020, 11, "Seating System"),
    puzzle!(y2020::day12, 2020, 12, "Rain Risk"),
    puzzle!(y2020::day13, 2020, 13, "Shuttle Search"),
    puzzle!(y2020::day14, 2020, 14, "Docking Data"),
    puzzle!(
        y2020::day15,
        2020,
        15,
        "Rambunctious Recitation",
        Some(crate::y2020::day15::STARTING_NUMBERS)
    ),
    puzzle!(y2020::day16, 2020, 16, "Ticket Translation"),
    puzzle!(y2020::day17, 2020, 17, "Conway Cubes"),
    puzzle!(y2020::day18, 2020, 18, "Operation Order"),
    puzzle!(y2020::day19, 2020, 19, "Monster Messages"),
    puzzle!(y2021::day01, 2021, 1, "Sonar Sweep"),
    puzzle!(y2021::day02, 2021, 2, "Dive!"),
    puzzle!(y2021::day03, 2021, 3, "Binary Diagnostic"),
    puzzle!(y2021::day04, 2021, 4, "Giant Squid"),
    puzzle!(y2021::day05, 2021, 5, "Hydrothermal Venture"),
    puzzle!(y2021::day06, 2021, 6, "Lanternfish"),
    puzzle!(y2021::day07, 2021, 7, "The Treachery of Whales"),
    puzzle!(y2021::day08, 2021, 8, "Seven Segment Search"),
    puzzle!(y2021::day09, 2021, 9, "Smoke Basin"),
    puzzle!(y2021::day10, 2021, 10, "Syntax Scoring"),
    puzzle!(y2021::day11, 2021, 11, "Dumbo Octopus"),
    puzzle!(y2021::day12, 2021, 12, "Passage Pathing"),
    puzzle!(y2021::day13, 2021, 13, "Transparent Origami"),
    puzzle!(y2021::day14, 2021, 14, "Extended Polymerization"),
    puzzle!(y2021::day15, 2021, 15, "Chiton"),
    puzzle!(y2021::day16, 2021, 16, "Packet Decoder"),
    puzzle!(y2021::day17, 2021, 17, "Trick Shot"),
    puzzle!(y2021::day18, 2021, 18, "Snailfish"),
    puzzle!(y2023::day02, 2023, 2, "Cube Conundrum"),
    puzzle!(y2023::day03, 2023, 3, "Gear Ratios"),
    puzzle!(y2023::day04, 2023, 4, "Scratchcards"),
    puzzle!(y2023::day06, 2023, 6, "Wait For It"),
    puzzle!(y2023::day11, 2023, 11, "Cosmic Expansion"),
];

pub fn find(year: u16, day: u8) -> Option<&'static Puzzle> {
    PUZZLES.iter().find(|p| p.year == year && p.day == day)
}

pub fn days(year: u16) -> impl Iterator<Item = &'static Puzzle> {
    PUZZLES.iter().filter(move |p| p.year == year)
}

pub fn years() -> Vec<u16> {
    let mut years = PUZZLES.iter().map(|p| p.year).collect::<Vec<_>>();
    years.dedup();
    years
}

#[test]
fn test_registry_sorted_and_unique() {
    let keys = PUZZLES.iter().map(|p| (p.year, p.day)).collect::<Vec<_>>();
    let mut sorted = keys.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(keys, sorted);
    assert_eq!(years(), vec![2020, 2021, 2023]);
    assert_eq!(days(2023).count(), 5);
}

#[test]
fn test_registry_find_and_solve() {
    let puzzle = find(2021, 1).unwrap();
    assert_eq!(puzzle.name(), "2021/day01");
    let s = "199\n200\n208\n210\n200\n207\n240\n269\n260\n263\n";
    assert_eq!(puzzle.solve(1, s).unwrap(), "7");
    assert_eq!(puzzle.solve(2, s).unwrap(), "5");
    assert!(puzzle.solve(3, s).is_err());
    assert!(find(2022, 1).is_none());
}

#[test]
fn test_registry_fixed_input() {
    let puzzle = find(2020, 15).unwrap();
    let inputs = Inputs::new("/nonexistent");
    assert_eq!(puzzle.input(&inputs).unwrap(), crate::y2020::day15::STARTING_NUMBERS);
    assert!(find(2020, 1).unwrap().input(&inputs).is_err());
}
