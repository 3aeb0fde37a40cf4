use std::fmt::{self, Debug, Display};

use eyre::{bail, ensure, eyre, Result};
use rayon::prelude::*;

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 18)
}

/// A regular number together with how many pairs enclose it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
struct Cell {
    pub value: u32,
    pub depth: u8,
}

impl Cell {
    #[inline]
    pub const fn new(value: u32, depth: u8) -> Self {
        Self { value, depth }
    }
}

/// A snailfish number flattened to its regular numbers in left-to-right order.
#[derive(Clone, Default, PartialEq, Eq)]
struct Number {
    cells: Vec<Cell>,
}

impl Number {
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim().as_bytes();
        ensure!(s.first() == Some(&b'['), "a snailfish number must be a pair");
        let mut cells = Vec::new();
        let end = Self::parse_element(s, 0, 0, &mut cells)?;
        ensure!(end == s.len(), "trailing characters after position {}", end);
        Ok(Self { cells })
    }

    fn parse_element(s: &[u8], mut pos: usize, depth: u8, cells: &mut Vec<Cell>) -> Result<usize> {
        let expect = |pos: usize, c: u8| -> Result<usize> {
            ensure!(s.get(pos) == Some(&c), "expected {:?} at position {}", char::from(c), pos);
            Ok(pos + 1)
        };
        match s.get(pos) {
            Some(b'[') => {
                ensure!(depth < u8::MAX, "nesting too deep");
                pos = Self::parse_element(s, pos + 1, depth + 1, cells)?;
                pos = expect(pos, b',')?;
                pos = Self::parse_element(s, pos, depth + 1, cells)?;
                expect(pos, b']')
            }
            Some(c) if c.is_ascii_digit() => {
                let len = s[pos..].iter().take_while(|c| c.is_ascii_digit()).count();
                let digits = std::str::from_utf8(&s[pos..pos + len])?;
                cells.push(Cell::new(parse_num(digits)?, depth));
                Ok(pos + len)
            }
            Some(&c) => bail!("unexpected {:?} at position {}", char::from(c), pos),
            None => bail!("unexpected end of number"),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn values(&self) -> Vec<u32> {
        self.cells.iter().map(|c| c.value).collect()
    }

    pub fn depths(&self) -> Vec<u8> {
        self.cells.iter().map(|c| c.depth).collect()
    }

    pub fn add(&mut self, other: &Self) {
        self.cells.extend_from_slice(&other.cells);
        for cell in &mut self.cells {
            cell.depth += 1;
        }
    }

    pub fn add_and_reduce(&mut self, other: &Self) {
        self.add(other);
        self.reduce();
    }

    pub fn reduce(&mut self) {
        while self.explode() || self.split() {}
    }

    /// Explodes the leftmost pair nested inside four pairs, if any.
    fn explode(&mut self) -> bool {
        let cells = &mut self.cells;
        let i = match (0..cells.len().saturating_sub(1))
            .find(|&i| cells[i].depth > 4 && cells[i + 1].depth == cells[i].depth)
        {
            Some(i) => i,
            None => return false,
        };
        let (left, right, depth) = (cells[i].value, cells[i + 1].value, cells[i].depth);
        if i > 0 {
            cells[i - 1].value += left;
        }
        if let Some(next) = cells.get_mut(i + 2) {
            next.value += right;
        }
        cells[i] = Cell::new(0, depth - 1);
        cells.remove(i + 1);
        true
    }

    /// Splits the leftmost regular number of 10 or more, if any.
    fn split(&mut self) -> bool {
        let i = match self.cells.iter().position(|c| c.value >= 10) {
            Some(i) => i,
            None => return false,
        };
        let cell = self.cells[i];
        let left = Cell::new(cell.value / 2, cell.depth + 1);
        let right = Cell::new(cell.value - left.value, left.depth);
        self.cells[i] = left;
        self.cells.insert(i + 1, right);
        true
    }

    /// Collapses adjacent equal-depth cells bottom-up, weighting left by 3 and right by 2.
    pub fn magnitude(&self) -> u64 {
        let mut stack = Vec::<(u64, u8)>::with_capacity(self.len());
        for cell in &self.cells {
            stack.push((u64::from(cell.value), cell.depth));
            while let [.., left, right] = stack[..] {
                if left.1 != right.1 {
                    break;
                }
                stack.truncate(stack.len() - 2);
                stack.push((left.0 * 3 + right.0 * 2, left.1 - 1));
            }
        }
        stack.first().map_or(0, |top| top.0)
    }

    fn fmt_element(&self, f: &mut fmt::Formatter, i: &mut usize, depth: u8) -> fmt::Result {
        let cell = self.cells.get(*i).ok_or(fmt::Error)?;
        if cell.depth == depth {
            *i += 1;
            write!(f, "{}", cell.value)
        } else if cell.depth > depth {
            write!(f, "[")?;
            self.fmt_element(f, i, depth + 1)?;
            write!(f, ",")?;
            self.fmt_element(f, i, depth + 1)?;
            write!(f, "]")
        } else {
            Err(fmt::Error)
        }
    }
}

impl Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Number")
            .field("length", &self.len())
            .field("values", &format!("{:?}", self.values()))
            .field("depths", &format!("{:?}", self.depths()))
            .finish()
    }
}

impl Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.fmt_element(f, &mut 0, 0)
    }
}

fn parse(s: &str) -> Result<Vec<Number>> {
    let nums = parse_lines(s, Number::parse)?;
    ensure!(!nums.is_empty(), "no snailfish numbers");
    Ok(nums)
}

pub fn part1(s: &str) -> Result<u64> {
    let mut nums = parse(s)?.into_iter();
    let first = nums.next().ok_or_else(|| eyre!("no snailfish numbers"))?;
    let sum = nums.fold(first, |mut acc, num| {
        acc.add_and_reduce(&num);
        acc
    });
    Ok(sum.magnitude())
}

pub fn part2(s: &str) -> Result<u64> {
    let nums = parse(s)?;
    let n = nums.len();
    Ok((0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .filter(|&j| j != i)
                .map(|j| {
                    let mut num = nums[i].clone();
                    num.add_and_reduce(&nums[j]);
                    num.magnitude()
                })
                .max()
                .unwrap_or(0)
        })
        .max()
        .unwrap_or(0))
}

#[cfg(test)]
fn parse_nums(s: &str) -> Vec<Number> {
    parse(s).unwrap()
}

#[test]
fn test_2021_day18_number() {
    let input = "[[[[0,7],4],[[7,8],[6,0]]],[8,1]]";
    let num = Number::parse(input).unwrap();
    assert_eq!(num.to_string(), input);
    assert_eq!(num.len(), 9);
    assert_eq!(num.values(), &[0, 7, 4, 7, 8, 6, 0, 8, 1]);
    assert_eq!(num.depths(), &[4, 4, 3, 4, 4, 4, 4, 2, 2]);

    let input1 = "[[[[4,3],4],4],[7,[[8,4],9]]]";
    let mut num1 = Number::parse(input1).unwrap();
    let num2 = Number::parse("[1,1]").unwrap();

    let mut num12 = num1.clone();
    num12.add(&num2);
    assert_eq!(num12.to_string(), "[[[[[4,3],4],4],[7,[[8,4],9]]],[1,1]]");

    num1.add_and_reduce(&num2);
    assert_eq!(num1, num);

    num12.reduce();
    assert_eq!(num12, num);

    assert!(Number::parse("[1,2").is_err());
    assert!(Number::parse("[1;2]").is_err());
    assert!(Number::parse("7").is_err());
}

#[test]
fn test_2021_day18_explode_and_split() {
    let explode = |s: &str| {
        let mut num = Number::parse(s).unwrap();
        assert!(num.explode());
        num.to_string()
    };
    assert_eq!(explode("[[[[[9,8],1],2],3],4]"), "[[[[0,9],2],3],4]");
    assert_eq!(explode("[7,[6,[5,[4,[3,2]]]]]"), "[7,[6,[5,[7,0]]]]");
    assert_eq!(explode("[[6,[5,[4,[3,2]]]],1]"), "[[6,[5,[7,0]]],3]");
    assert_eq!(explode("[[3,[2,[1,[7,3]]]],[6,[5,[4,[3,2]]]]]"), "[[3,[2,[8,0]]],[9,[5,[4,[3,2]]]]]");

    let mut num = Number::parse("[[[[0,7],4],[15,[0,13]]],[1,1]]").unwrap();
    assert!(num.split());
    assert_eq!(num.to_string(), "[[[[0,7],4],[[7,8],[0,13]]],[1,1]]");
    assert!(num.split());
    assert_eq!(num.to_string(), "[[[[0,7],4],[[7,8],[0,[6,7]]]],[1,1]]");
}

#[test]
fn test_2021_day18_sums() {
    let nums = parse_nums("[1,1]\n[2,2]\n[3,3]\n[4,4]\n[5,5]\n[6,6]\n");
    let res = nums.iter().skip(1).fold(nums[0].clone(), |mut acc, num| {
        acc.add_and_reduce(num);
        acc
    });
    assert_eq!(res.to_string(), "[[[[5,0],[7,4]],[5,5]],[6,6]]");

    let nums = parse_nums(
        r#"
        [[[0,[4,5]],[0,0]],[[[4,5],[2,6]],[9,5]]]
        [7,[[[3,7],[4,3]],[[6,3],[8,8]]]]
        [[2,[[0,8],[3,4]]],[[[6,7],1],[7,[1,6]]]]
        [[[[2,4],7],[6,[0,5]]],[[[6,8],[2,8]],[[2,1],[4,5]]]]
        [7,[5,[[3,8],[1,4]]]]
        [[2,[2,2]],[8,[8,1]]]
        [2,9]
        [1,[[[9,3],9],[[9,0],[0,7]]]]
        [[[5,[7,4]],7],1]
        [[[[4,2],2],6],[8,7]]
        "#,
    );
    let expected = parse_nums(
        r#"
        [[[[4,0],[5,4]],[[7,7],[6,0]]],[[8,[7,7]],[[7,9],[5,0]]]]
        [[[[6,7],[6,7]],[[7,7],[0,7]]],[[[8,7],[7,7]],[[8,8],[8,0]]]]
        [[[[7,0],[7,7]],[[7,7],[7,8]]],[[[7,7],[8,8]],[[7,7],[8,7]]]]
        [[[[7,7],[7,8]],[[9,5],[8,7]]],[[[6,8],[0,8]],[[9,9],[9,0]]]]
        [[[[6,6],[6,6]],[[6,0],[6,7]]],[[[7,7],[8,9]],[8,[8,1]]]]
        [[[[6,6],[7,7]],[[0,7],[7,7]]],[[[5,5],[5,6]],9]]
        [[[[7,8],[6,7]],[[6,8],[0,8]]],[[[7,7],[5,0]],[[5,5],[5,6]]]]
        [[[[7,7],[7,7]],[[8,7],[8,7]]],[[[7,0],[7,7]],9]]
        [[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]
        "#,
    );
    let mut res = nums[0].clone();
    for i in 1..nums.len() {
        res.add_and_reduce(&nums[i]);
        assert_eq!(res, expected[i - 1]);
    }
}

#[test]
fn test_2021_day18_magnitude() {
    let nums = parse_nums(
        r#"
        [[1,2],[[3,4],5]]
        [[[[0,7],4],[[7,8],[6,0]]],[8,1]]
        [[[[1,1],[2,2]],[3,3]],[4,4]]
        [[[[3,0],[5,3]],[4,4]],[5,5]]
        [[[[5,0],[7,4]],[5,5]],[6,6]]
        [[[[8,7],[7,7]],[[8,6],[7,7]]],[[[0,7],[6,6]],[8,7]]]
        "#,
    );
    assert_eq!(nums.iter().map(Number::magnitude).collect::<Vec<_>>(), vec![143, 1384, 445, 791, 1137, 3488]);
}

#[cfg(test)]
const EXAMPLE: &str = "\
[[[0,[5,8]],[[1,7],[9,6]]],[[4,[1,2]],[[1,4],2]]]
[[[5,[2,8]],4],[5,[[9,9],0]]]
[6,[[[6,2],[5,6]],[[7,6],[4,7]]]]
[[[6,[0,7]],[0,9]],[4,[9,[9,0]]]]
[[[7,[6,4]],[3,[1,3]]],[[[5,5],1],9]]
[[6,[[7,3],[3,2]]],[[[3,8],[5,7]],4]]
[[[[5,4],[7,7]],8],[[8,3],8]]
[[9,3],[[9,9],[6,[4,9]]]]
[[2,[[7,7],7]],[[5,8],[[9,3],[0,2]]]]
[[[[5,2],5],[8,[3,7]]],[[5,[7,5]],[4,4]]]
";

#[test]
fn test_2021_day18_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 4140);
}

#[test]
fn test_2021_day18_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 3993);
}
