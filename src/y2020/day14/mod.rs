use ahash::AHashMap;
use eyre::{bail, ensure, eyre, Result};
use regex::Regex;

use crate::utils::*;

const WIDTH: usize = 36;

pub fn input() -> Result<String> {
    load(2020, 14)
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
struct Mask {
    ones: u64,
    zeros: u64,
    floating: u64,
}

impl Mask {
    fn parse(s: &str) -> Result<Self> {
        ensure!(s.len() == WIDTH, "mask must have {} bits", WIDTH);
        let mut mask = Self::default();
        for (i, c) in s.bytes().rev().enumerate() {
            let bit = 1 << i;
            match c {
                b'1' => mask.ones |= bit,
                b'0' => mask.zeros |= bit,
                b'X' => mask.floating |= bit,
                _ => bail!("invalid mask bit {:?}", char::from(c)),
            }
        }
        Ok(mask)
    }

    fn apply_to_value(&self, value: u64) -> u64 {
        (value | self.ones) & !self.zeros
    }

    /// Every address produced by the floating bits, 0 bits keep the address.
    fn addresses(&self, addr: u64) -> impl Iterator<Item = u64> {
        let base = (addr | self.ones) & !self.floating;
        let floating = self.floating;
        // Walk all subsets of `floating`, starting from the full set.
        let mut subset = Some(floating);
        std::iter::from_fn(move || {
            let current = subset?;
            subset = (current != 0).then(|| (current - 1) & floating);
            Some(base | current)
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Instr {
    Mask(Mask),
    Write { addr: u64, value: u64 },
}

fn parse(s: &str) -> Result<Vec<Instr>> {
    let write = Regex::new(r"^mem\[(\d+)\] = (\d+)$")?;
    parse_lines(s, |line| {
        if let Some(mask) = line.strip_prefix("mask = ") {
            return Ok(Instr::Mask(Mask::parse(mask)?));
        }
        let caps = write.captures(line).ok_or_else(|| eyre!("expected `mask = ...` or `mem[a] = v`"))?;
        Ok(Instr::Write { addr: parse_num(&caps[1])?, value: parse_num(&caps[2])? })
    })
}

fn run(program: &[Instr], mut store: impl FnMut(&mut AHashMap<u64, u64>, &Mask, u64, u64)) -> u64 {
    let mut memory = AHashMap::new();
    let mut mask = Mask::default();
    for instr in program {
        match *instr {
            Instr::Mask(m) => mask = m,
            Instr::Write { addr, value } => store(&mut memory, &mask, addr, value),
        }
    }
    memory.values().sum()
}

pub fn part1(s: &str) -> Result<u64> {
    Ok(run(&parse(s)?, |memory, mask, addr, value| {
        memory.insert(addr, mask.apply_to_value(value));
    }))
}

pub fn part2(s: &str) -> Result<u64> {
    Ok(run(&parse(s)?, |memory, mask, addr, value| {
        memory.extend(mask.addresses(addr).map(|a| (a, value)));
    }))
}

#[test]
fn test_2020_day14_part1() {
    let s = "\
mask = XXXXXXXXXXXXXXXXXXXXXXXXXXXXX1XXXX0X
mem[8] = 11
mem[7] = 101
mem[8] = 0
";
    assert_eq!(part1(s).unwrap(), 165);
}

#[test]
fn test_2020_day14_part2() {
    let s = "\
mask = 000000000000000000000000000000X1001X
mem[42] = 100
mask = 00000000000000000000000000000000X0XX
mem[26] = 1
";
    assert_eq!(part2(s).unwrap(), 208);
}

#[test]
fn test_2020_day14_addresses() {
    let mask = Mask::parse("000000000000000000000000000000X1001X").unwrap();
    let mut addrs = mask.addresses(42).collect::<Vec<_>>();
    addrs.sort_unstable();
    assert_eq!(addrs, vec![26, 27, 58, 59]);
    assert!(Mask::parse("X1").is_err());
}
