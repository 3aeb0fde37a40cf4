use eyre::{ensure, eyre, Result};
use petgraph::algo::is_cyclic_directed;
use petgraph::graphmap::DiGraphMap;
use petgraph::visit::{Dfs, Reversed};

use crate::utils::*;

const TARGET: &str = "shiny gold";

pub fn input() -> Result<String> {
    load(2020, 7)
}

/// Edge `outer -> inner` weighted by how many `inner` bags `outer` holds.
type Rules<'a> = DiGraphMap<&'a str, u32>;

fn parse_rule<'a>(graph: &mut Rules<'a>, line: &'a str) -> Result<()> {
    let (outer, contents) =
        line.split_once(" bags contain ").ok_or_else(|| eyre!("expected `<color> bags contain ...`"))?;
    graph.add_node(outer);
    let contents = contents.trim_end_matches('.');
    if contents == "no other bags" {
        return Ok(());
    }
    for item in contents.split(", ") {
        let item = item.trim_end_matches(" bags").trim_end_matches(" bag");
        let (count, color) = item.split_once(' ').ok_or_else(|| eyre!("invalid bag count {:?}", item))?;
        graph.add_edge(outer, color, parse_num(count)?);
    }
    Ok(())
}

fn parse(s: &str) -> Result<Rules<'_>> {
    let mut graph = Rules::new();
    parse_lines(s, |line| parse_rule(&mut graph, line))?;
    ensure!(!is_cyclic_directed(&graph), "bag rules contain a cycle");
    ensure!(graph.contains_node(TARGET), "no rule mentions {:?}", TARGET);
    Ok(graph)
}

fn bags_inside<'a>(graph: &Rules<'a>, color: &'a str) -> u64 {
    graph
        .edges(color)
        .map(|(_, inner, &n)| u64::from(n) * (1 + bags_inside(graph, inner)))
        .sum()
}

pub fn part1(s: &str) -> Result<usize> {
    let graph = parse(s)?;
    let reversed = Reversed(&graph);
    let mut dfs = Dfs::new(reversed, TARGET);
    let mut count = 0;
    while dfs.next(reversed).is_some() {
        count += 1;
    }
    Ok(count - 1)
}

pub fn part2(s: &str) -> Result<u64> {
    Ok(bags_inside(&parse(s)?, TARGET))
}

#[cfg(test)]
const EXAMPLE: &str = "\
light red bags contain 1 bright white bag, 2 muted yellow bags.
dark orange bags contain 3 bright white bags, 4 muted yellow bags.
bright white bags contain 1 shiny gold bag.
muted yellow bags contain 2 shiny gold bags, 9 faded blue bags.
shiny gold bags contain 1 dark olive bag, 2 vibrant plum bags.
dark olive bags contain 3 faded blue bags, 4 dotted black bags.
vibrant plum bags contain 5 faded blue bags, 6 dotted black bags.
faded blue bags contain no other bags.
dotted black bags contain no other bags.
";

#[test]
fn test_2020_day07_part1() {
    assert_eq!(part1(EXAMPLE).unwrap(), 4);
}

#[test]
fn test_2020_day07_part2() {
    assert_eq!(part2(EXAMPLE).unwrap(), 32);
    let s = "\
shiny gold bags contain 2 dark red bags.
dark red bags contain 2 dark orange bags.
dark orange bags contain 2 dark yellow bags.
dark yellow bags contain 2 dark green bags.
dark green bags contain 2 dark blue bags.
dark blue bags contain 2 dark violet bags.
dark violet bags contain no other bags.
";
    assert_eq!(part2(s).unwrap(), 126);
}

#[test]
fn test_2020_day07_cycle() {
    let s = "\
shiny gold bags contain 1 dark red bag.
dark red bags contain 1 shiny gold bag.
";
    assert!(part1(s).is_err());
}
