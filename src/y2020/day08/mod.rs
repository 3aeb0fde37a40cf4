use eyre::{bail, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 8)
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Op {
    Acc(i64),
    Jmp(i64),
    Nop(i64),
}

impl Op {
    fn parse(line: &str) -> Result<Self> {
        let (op, arg) = line.split_once(' ').ok_or_else(|| eyre!("expected `<op> <arg>`"))?;
        let arg = parse_num(arg)?;
        Ok(match op {
            "acc" => Self::Acc(arg),
            "jmp" => Self::Jmp(arg),
            "nop" => Self::Nop(arg),
            _ => bail!("unknown operation {:?}", op),
        })
    }

    fn flipped(self) -> Option<Self> {
        match self {
            Self::Jmp(n) => Some(Self::Nop(n)),
            Self::Nop(n) => Some(Self::Jmp(n)),
            Self::Acc(_) => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Exit {
    /// Ran off the end of the program.
    Halted(i64),
    /// About to execute an instruction a second time.
    Looped(i64),
    /// Jumped before the first instruction.
    Fault,
}

fn run(program: &[Op]) -> Exit {
    let mut seen = vec![false; program.len()];
    let (mut pc, mut acc) = (0_i64, 0_i64);
    loop {
        let i = match usize::try_from(pc) {
            Ok(i) => i,
            Err(_) => return Exit::Fault,
        };
        if i >= program.len() {
            return Exit::Halted(acc);
        }
        if std::mem::replace(&mut seen[i], true) {
            return Exit::Looped(acc);
        }
        match program[i] {
            Op::Acc(n) => acc += n,
            Op::Jmp(n) => pc += n - 1,
            Op::Nop(_) => {}
        }
        pc += 1;
    }
}

pub fn part1(s: &str) -> Result<i64> {
    match run(&parse_lines(s, Op::parse)?) {
        Exit::Looped(acc) => Ok(acc),
        exit => bail!("program did not loop: {:?}", exit),
    }
}

pub fn part2(s: &str) -> Result<i64> {
    let mut program = parse_lines(s, Op::parse)?;
    for i in 0..program.len() {
        let original = program[i];
        if let Some(flipped) = original.flipped() {
            program[i] = flipped;
            if let Exit::Halted(acc) = run(&program) {
                return Ok(acc);
            }
            program[i] = original;
        }
    }
    bail!("no single jmp/nop flip terminates the program")
}

#[cfg(test)]
const EXAMPLE: &str = "nop +0\nacc +1\njmp +4\nacc +3\njmp -3\nacc -99\nacc +1\njmp -4\nacc +6\n";

#[test]
fn test_2020_day08_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 5);
}

#[test]
fn test_2020_day08_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 8);
}

#[test]
fn test_2020_day08_run() {
    assert_eq!(run(&[Op::Acc(2), Op::Jmp(-2)]), Exit::Fault);
    assert_eq!(run(&[Op::Acc(2), Op::Nop(0)]), Exit::Halted(2));
    assert!(Op::parse("mov +1").is_err());
}
