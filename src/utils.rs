use std::fmt::Display;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use eyre::{ensure, eyre, Result, WrapErr};
use memchr::memmem;

pub use crate::input::load;

pub const DIRS4: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

pub const DIRS8: [(isize, isize); 8] =
    [(-1, -1), (-1, 0), (-1, 1), (0, -1), (0, 1), (1, -1), (1, 0), (1, 1)];

/// Trimmed, non-empty lines.
#[inline]
pub fn lines(s: &str) -> impl Iterator<Item = &str> {
    s.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Parses every non-empty line with `f`, tagging errors with the 1-based line number.
pub fn parse_lines<'a, T, F>(s: &'a str, mut f: F) -> Result<Vec<T>>
where
    F: FnMut(&'a str) -> Result<T>,
{
    s.lines()
        .enumerate()
        .map(|(i, line)| (i, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, line)| f(line).wrap_err_with(|| format!("line {}: {:?}", i + 1, line)))
        .collect()
}

/// Sections separated by blank lines, trimmed.
pub fn blocks(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for i in memmem::find_iter(s.as_bytes(), b"\n\n") {
        out.push(&s[start..i]);
        start = i + 2;
    }
    out.push(&s[start..]);
    out.into_iter().map(str::trim).filter(|block| !block.is_empty()).collect()
}

#[inline]
pub fn parse_num<T>(s: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let s = s.trim();
    s.parse().map_err(|e| eyre!("invalid number {:?}: {}", s, e))
}

/// Parses a `sep`-separated list of numbers, ignoring surrounding whitespace.
pub fn parse_list<T>(s: &str, sep: char) -> Result<Vec<T>>
where
    T: FromStr,
    T::Err: Display,
{
    s.trim().split(sep).map(parse_num).collect()
}

/// A dense row-major 2-D grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn new(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self> {
        ensure!(cells.len() == rows * cols, "expected {}x{} cells, got {}", rows, cols, cells.len());
        Ok(Self { rows, cols, cells })
    }

    /// Parses a rectangular block of text, mapping each byte with `f`.
    pub fn parse(s: &str, mut f: impl FnMut(u8) -> Result<T>) -> Result<Self> {
        let (mut rows, mut cols, mut cells) = (0, 0, Vec::with_capacity(s.len()));
        for line in lines(s) {
            if rows == 0 {
                cols = line.len();
            }
            ensure!(line.len() == cols, "row {} has width {}, expected {}", rows + 1, line.len(), cols);
            for &c in line.as_bytes() {
                cells.push(f(c).wrap_err_with(|| format!("row {}", rows + 1))?);
            }
            rows += 1;
        }
        ensure!(rows != 0, "empty grid");
        Ok(Self { rows, cols, cells })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    #[inline]
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    #[inline]
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }

    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |r| (0..cols).map(move |c| (r, c)))
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.cols..(row + 1) * self.cols]
    }

    /// Moves `(row, col)` by `(dr, dc)` if the result stays inside the grid.
    #[inline]
    pub fn step(&self, (row, col): (usize, usize), (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < self.rows && c < self.cols).then(|| (r, c))
    }

    pub fn neighbors4(&self, pos: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        DIRS4.iter().filter_map(move |&d| self.step(pos, d))
    }

    pub fn neighbors8(&self, pos: (usize, usize)) -> impl Iterator<Item = (usize, usize)> + '_ {
        DIRS8.iter().filter_map(move |&d| self.step(pos, d))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.cells[row * self.cols + col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.cols + col]
    }
}

/// Parses a single decimal digit.
#[inline]
pub fn digit(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        _ => Err(eyre!("expected a digit, got {:?}", char::from(c))),
    }
}

#[test]
fn test_lines_and_blocks() {
    let s = "  a b \n\nc\r\n\n\n d\n";
    assert_eq!(lines(s).collect::<Vec<_>>(), vec!["a b", "c", "d"]);
    assert_eq!(blocks("a\nb\n\nc\n\n\n\nd\n"), vec!["a\nb", "c", "d"]);
    assert_eq!(blocks(""), Vec::<&str>::new());
}

#[test]
fn test_parse_lines_reports_line_number() {
    let ok = parse_lines("1\n\n2\n", parse_num::<u8>).unwrap();
    assert_eq!(ok, vec![1, 2]);
    let err = parse_lines("1\n\nx\n", parse_num::<u8>).unwrap_err();
    assert!(format!("{}", err).starts_with("line 3"));
    assert_eq!(parse_list::<i32>(" 3,-4,5\n", ',').unwrap(), vec![3, -4, 5]);
}

#[test]
fn test_grid() {
    let grid = Grid::parse("123\n456\n", digit).unwrap();
    assert_eq!((grid.rows(), grid.cols()), (2, 3));
    assert_eq!(grid[(1, 2)], 6);
    assert_eq!(grid.get(2, 0), None);
    assert_eq!(grid.neighbors4((0, 0)).collect::<Vec<_>>(), vec![(0, 1), (1, 0)]);
    assert_eq!(grid.neighbors8((1, 1)).count(), 5);
    assert_eq!(grid.row(1), &[4, 5, 6]);
    assert!(Grid::parse("12\n3\n", digit).is_err());
    assert!(Grid::parse("1x\n", digit).is_err());
}
