use eyre::{ensure, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 10)
}

/// The full chain: outlet (0), sorted adapters, then the device (max + 3).
fn chain(s: &str) -> Result<Vec<u64>> {
    let mut jolts = parse_lines(s, parse_num)?;
    jolts.push(0);
    jolts.sort_unstable();
    let device = jolts[jolts.len() - 1] + 3;
    jolts.push(device);
    for w in jolts.windows(2) {
        ensure!((1..=3).contains(&(w[1] - w[0])), "adapters {} and {} cannot be chained", w[0], w[1]);
    }
    Ok(jolts)
}

pub fn part1(s: &str) -> Result<usize> {
    let jolts = chain(s)?;
    let gaps = |d| jolts.windows(2).filter(|w| w[1] - w[0] == d).count();
    Ok(gaps(1) * gaps(3))
}

pub fn part2(s: &str) -> Result<u64> {
    let jolts = chain(s)?;
    let mut ways = vec![0_u64; jolts.len()];
    ways[0] = 1;
    for i in 1..jolts.len() {
        ways[i] = (i.saturating_sub(3)..i).filter(|&j| jolts[i] - jolts[j] <= 3).map(|j| ways[j]).sum();
    }
    Ok(ways[jolts.len() - 1])
}

#[cfg(test)]
const EXAMPLE1: &str = "16\n10\n15\n5\n1\n11\n7\n19\n6\n12\n4\n";

#[cfg(test)]
const EXAMPLE2: &str = "\
28\n33\n18\n42\n31\n14\n46\n20\n48\n47\n24\n23\n49\n45\n19\n38\n39\n11\n1\n32\n25\n35\n8\n17\n7\n9\n4\n2\n34\n10\n3\n";

#[test]
fn test_2020_day10_part1() {
    assert_eq!(part1(EXAMPLE1).unwrap(), 35);
    assert_eq!(part1(EXAMPLE2).unwrap(), 220);
}

#[test]
fn test_2020_day10_part2() {
    assert_eq!(part2(EXAMPLE1).unwrap(), 8);
    assert_eq!(part2(EXAMPLE2).unwrap(), 19208);
    assert_eq!(part2("2\n4\n").unwrap(), 1);
}

#[test]
fn test_2020_day10_gap() {
    assert!(part1("1\n5\n").is_err());
    assert!(part1("1\n1\n").is_err());
}
