use std::fmt::{self, Debug};

use eyre::{ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 12)
}

const START: usize = 0;
const END: usize = 1;
const MAX_SMALL: usize = 32;

#[derive(Clone)]
struct Node<'a> {
    name: &'a str,
    /// A single bit for small caves, zero for big ones.
    mask: u32,
    edges: Vec<usize>,
}

impl Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Node({:?}", self.name)?;
        if self.mask != 0 {
            write!(f, ", mask={}", self.mask)?;
        }
        write!(f, ", edges={:?})", self.edges)
    }
}

impl<'a> Node<'a> {
    pub fn new(name: &'a str, mask: u32) -> Self {
        Self { name, mask, edges: Vec::new() }
    }

    fn is_big(&self) -> bool {
        self.name.bytes().all(|c| c.is_ascii_uppercase())
    }
}

#[derive(Debug, Clone)]
struct Caves<'a> {
    nodes: Vec<Node<'a>>,
    n_small: usize,
}

impl<'a> Caves<'a> {
    pub fn new() -> Self {
        Self { nodes: vec![Node::new("start", 0), Node::new("end", 0)], n_small: 0 }
    }

    fn find_or_insert_node(&mut self, name: &'a str) -> Result<usize> {
        if let Some(index) = self.nodes.iter().position(|n| n.name == name) {
            return Ok(index);
        }
        let small = !name.is_empty() && name.bytes().all(|c| c.is_ascii_lowercase());
        let big = !name.is_empty() && name.bytes().all(|c| c.is_ascii_uppercase());
        ensure!(small || big, "invalid cave {:?}", name);
        let mask = if small {
            ensure!(self.n_small < MAX_SMALL, "too many small caves");
            self.n_small += 1;
            1 << (self.n_small - 1)
        } else {
            0
        };
        self.nodes.push(Node::new(name, mask));
        Ok(self.nodes.len() - 1)
    }

    /// Edges never lead back into `start` or out of `end`.
    fn add_edge(&mut self, i: usize, j: usize) {
        if i != END && j != START {
            self.nodes[i].edges.push(j);
        }
        if j != END && i != START {
            self.nodes[j].edges.push(i);
        }
    }

    pub fn parse(s: &'a str) -> Result<Self> {
        let mut caves = Self::new();
        for line in lines(s) {
            let (a, b) = line.split_once('-').ok_or_else(|| eyre!("expected `a-b`, got {:?}", line))?;
            let i = caves.find_or_insert_node(a)?;
            let j = caves.find_or_insert_node(b)?;
            caves.add_edge(i, j);
        }
        for node in &caves.nodes {
            ensure!(
                !node.is_big() || node.edges.iter().all(|&j| !caves.nodes[j].is_big()),
                "big cave {:?} is adjacent to another big cave, paths are unbounded",
                node.name
            );
        }
        Ok(caves)
    }

    /// Paths from `i` to `end` avoiding the small caves in `mask`; `twice`
    /// allows one small cave to be revisited.
    fn count_paths(&self, i: usize, mut mask: u32, mut twice: bool) -> usize {
        if i == END {
            return 1;
        }
        let node = &self.nodes[i];
        if node.mask & mask != 0 {
            if twice {
                twice = false;
            } else {
                return 0;
            }
        } else {
            mask |= node.mask;
        }
        node.edges.iter().map(|&j| self.count_paths(j, mask, twice)).sum()
    }
}

pub fn part1(s: &str) -> Result<usize> {
    Ok(Caves::parse(s)?.count_paths(START, 0, false))
}

pub fn part2(s: &str) -> Result<usize> {
    Ok(Caves::parse(s)?.count_paths(START, 0, true))
}

#[cfg(test)]
const EXAMPLE1: &str = "start-A\nstart-b\nA-c\nA-b\nb-d\nA-end\nb-end\n";

#[cfg(test)]
const EXAMPLE2: &str = "\
dc-end\nHN-start\nstart-kj\ndc-start\ndc-HN\nLN-dc\nHN-end\nkj-sa\nkj-HN\nkj-dc\n";

#[test]
fn test_2021_day12_part1() {
    assert_eq!(part1(EXAMPLE1).unwrap(), 10);
    assert_eq!(part1(EXAMPLE2).unwrap(), 19);
}

#[test]
fn test_2021_day12_part2() {
    assert_eq!(part2(EXAMPLE1).unwrap(), 36);
    assert_eq!(part2(EXAMPLE2).unwrap(), 103);
}

#[test]
fn test_2021_day12_big_caves() {
    assert!(part1("start-A\nA-B\nB-end\n").is_err());
}

#[test]
fn test_2021_day12_mixed_case_cave() {
    assert!(part1("start-Ab\nAb-Cd\nCd-end\n").is_err());
    assert!(part1("start-a1\na1-end\n").is_err());
}
