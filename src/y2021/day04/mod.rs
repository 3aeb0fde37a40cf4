use std::fmt::{self, Debug};

use eyre::{ensure, eyre, Result};

use crate::utils::*;

const N: usize = 5;

pub fn input() -> Result<String> {
    load(2021, 4)
}

#[derive(Clone, Default)]
struct Board {
    numbers: [[u8; N]; N],
    /// Bit `i * N + j` is set once cell `(i, j)` has been drawn.
    marked: u32,
}

impl Board {
    pub fn parse(s: &str) -> Result<Self> {
        let mut board = Self::default();
        let rows = lines(s).collect::<Vec<_>>();
        ensure!(rows.len() == N, "board must have {} rows", N);
        for (i, row) in rows.into_iter().enumerate() {
            let row = row.split_whitespace().map(parse_num).collect::<Result<Vec<u8>>>()?;
            ensure!(row.len() == N, "board rows must have {} numbers", N);
            board.numbers[i].copy_from_slice(&row);
        }
        Ok(board)
    }

    /// Marks `number`, returning true if this completes a row or a column.
    pub fn mark(&mut self, number: u8) -> bool {
        let mut won = false;
        for i in 0..N {
            for j in 0..N {
                if self.numbers[i][j] == number {
                    self.marked |= 1 << (i * N + j);
                    won |= self.is_row_done(i) || self.is_col_done(j);
                }
            }
        }
        won
    }

    fn is_row_done(&self, i: usize) -> bool {
        let row = ((1 << N) - 1) << (i * N);
        self.marked & row == row
    }

    fn is_col_done(&self, j: usize) -> bool {
        (0..N).all(|i| self.marked & 1 << (i * N + j) != 0)
    }

    pub fn sum_unmarked(&self) -> u32 {
        let mut sum = 0;
        for i in 0..N {
            for j in 0..N {
                if self.marked & 1 << (i * N + j) == 0 {
                    sum += u32::from(self.numbers[i][j]);
                }
            }
        }
        sum
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for i in 0..N {
            for j in 0..N {
                if self.marked & 1 << (i * N + j) != 0 {
                    write!(f, "  X")?;
                } else {
                    write!(f, "{:>3}", self.numbers[i][j])?;
                }
            }
            if i != N - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn parse(s: &str) -> Result<(Vec<u8>, Vec<Board>)> {
    let sections = blocks(s);
    let (draws, boards) = sections.split_first().ok_or_else(|| eyre!("empty input"))?;
    let draws = parse_list(draws, ',')?;
    let boards = boards.iter().map(|b| Board::parse(b)).collect::<Result<Vec<_>>>()?;
    ensure!(!boards.is_empty(), "no boards");
    Ok((draws, boards))
}

/// Scores of the boards in the order they win.
fn scores(s: &str) -> Result<Vec<u32>> {
    let (draws, mut boards) = parse(s)?;
    let mut won = vec![false; boards.len()];
    let mut scores = Vec::with_capacity(boards.len());
    for number in draws {
        for (k, board) in boards.iter_mut().enumerate() {
            if !won[k] && board.mark(number) {
                won[k] = true;
                scores.push(board.sum_unmarked() * u32::from(number));
            }
        }
    }
    Ok(scores)
}

pub fn part1(s: &str) -> Result<u32> {
    scores(s)?.first().copied().ok_or_else(|| eyre!("no board wins"))
}

pub fn part2(s: &str) -> Result<u32> {
    scores(s)?.last().copied().ok_or_else(|| eyre!("no board wins"))
}

#[cfg(test)]
const EXAMPLE: &str = "\
7,4,9,5,11,17,23,2,0,14,21,24,10,16,13,6,15,25,12,22,18,20,8,19,3,26,1

22 13 17 11  0
 8  2 23  4 24
21  9 14 16  7
 6 10  3 18  5
 1 12 20 15 19

 3 15  0  2 22
 9 18 13 17  5
19  8  7 25 23
20 11 10 24  4
14 21 16 12  6

14 21 17 24  4
10 16 15  9 19
18  8 23 26 20
22 11 13  6  5
 2  0 12  3  7
";

#[test]
fn test_2021_day04_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 4512);
}

#[test]
fn test_2021_day04_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 1924);
}

#[test]
fn test_2021_day04_column() {
    let mut board = Board::parse("1 2 3 4 5\n6 7 8 9 10\n11 12 13 14 15\n16 17 18 19 20\n21 22 23 24 25").unwrap();
    for n in [2, 7, 12, 17] {
        assert!(!board.mark(n));
    }
    assert!(board.mark(22));
    assert_eq!(board.sum_unmarked(), 325 - 60);
    assert_eq!(format!("{:?}", board).lines().next(), Some("  1  X  3  4  5"));
}
