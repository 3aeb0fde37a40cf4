use ahash::AHashMap;
use eyre::{ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2020, 19)
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Rule {
    Char(u8),
    /// Alternatives, each a sequence of rule ids.
    Alt(Vec<Vec<usize>>),
}

struct Rules(AHashMap<usize, Rule>);

impl Rules {
    fn parse(s: &str) -> Result<Self> {
        let rules = parse_lines(s, |line| {
            let (id, body) = line.split_once(": ").ok_or_else(|| eyre!("expected `<id>: <rule>`"))?;
            let rule = match body.strip_prefix('"').and_then(|b| b.strip_suffix('"')) {
                Some(lit) => {
                    ensure!(lit.len() == 1, "literal rule must be one character");
                    Rule::Char(lit.as_bytes()[0])
                }
                None => Rule::Alt(
                    body.split('|')
                        .map(|seq| seq.split_whitespace().map(parse_num).collect::<Result<Vec<_>>>())
                        .collect::<Result<_>>()?,
                ),
            };
            Ok((parse_num(id)?, rule))
        })?;
        let rules = Self(rules.into_iter().collect());
        rules.check()?;
        Ok(rules)
    }

    fn check(&self) -> Result<()> {
        for rule in self.0.values() {
            if let Rule::Alt(alts) = rule {
                for &id in alts.iter().flatten() {
                    ensure!(self.0.contains_key(&id), "reference to undefined rule {}", id);
                }
                ensure!(alts.iter().all(|seq| !seq.is_empty()), "empty rule sequence");
            }
        }
        ensure!(self.0.contains_key(&0), "rule 0 is missing");
        Ok(())
    }

    /// Every position where a match of rule `id` starting at `start` can end.
    /// `stack` holds the rules being expanded; meeting one again at the same
    /// position without consuming input means the grammar is left-recursive.
    fn ends(&self, id: usize, msg: &[u8], start: usize, stack: &mut Vec<(usize, usize)>) -> Result<Vec<usize>> {
        ensure!(!stack.contains(&(id, start)), "rule {} is left-recursive", id);
        let out = match self.0.get(&id) {
            None => vec![],
            Some(Rule::Char(c)) => match msg.get(start) {
                Some(b) if b == c => vec![start + 1],
                _ => vec![],
            },
            Some(Rule::Alt(alts)) => {
                stack.push((id, start));
                let mut out = Vec::new();
                for seq in alts {
                    let mut positions = vec![start];
                    for &next in seq {
                        let mut reached = Vec::new();
                        for p in positions {
                            reached.extend(self.ends(next, msg, p, stack)?);
                        }
                        positions = reached;
                    }
                    out.extend(positions);
                }
                stack.pop();
                out
            }
        };
        Ok(out)
    }

    fn matches(&self, msg: &str) -> Result<bool> {
        Ok(self.ends(0, msg.as_bytes(), 0, &mut Vec::new())?.contains(&msg.len()))
    }
}

fn parse(s: &str) -> Result<(Rules, Vec<&str>)> {
    let sections = blocks(s);
    ensure!(sections.len() == 2, "expected rules and messages separated by a blank line");
    Ok((Rules::parse(sections[0])?, lines(sections[1]).collect()))
}

fn count_matches(rules: &Rules, messages: &[&str]) -> Result<usize> {
    let mut count = 0;
    for msg in messages {
        count += rules.matches(msg)? as usize;
    }
    Ok(count)
}

pub fn part1(s: &str) -> Result<usize> {
    let (rules, messages) = parse(s)?;
    count_matches(&rules, &messages)
}

/// Rules 8 and 11 become `42 | 42 8` and `42 31 | 42 11 31`; every recursive
/// step consumes input first, so matching still terminates.
pub fn part2(s: &str) -> Result<usize> {
    let (mut rules, messages) = parse(s)?;
    ensure!(rules.0.contains_key(&42) && rules.0.contains_key(&31), "rules 42 and 31 are required");
    rules.0.insert(8, Rule::Alt(vec![vec![42], vec![42, 8]]));
    rules.0.insert(11, Rule::Alt(vec![vec![42, 31], vec![42, 11, 31]]));
    count_matches(&rules, &messages)
}

#[test]
fn test_2020_day19_part1() {
    let s = r#"
0: 4 1 5
1: 2 3 | 3 2
2: 4 4 | 5 5
3: 4 5 | 5 4
4: "a"
5: "b"

ababbb
bababa
abbbab
aaabbb
aaaabbb
"#;
    assert_eq!(part1(s).unwrap(), 2);
}

#[test]
fn test_2020_day19_part2() {
    let s = r#"
0: 8 11
8: 42
11: 42 31
42: "a"
31: "b"

aab
aaabb
ab
aabb
aaab
ba
"#;
    assert_eq!(part1(s).unwrap(), 1);
    assert_eq!(part2(s).unwrap(), 3);
}

#[test]
fn test_2020_day19_undefined_rule() {
    assert!(part1("0: 1 2\n1: \"a\"\n\na\n").is_err());
}

#[test]
fn test_2020_day19_looping_rules() {
    let s = r#"
42: 9 14 | 10 1
9: 14 27 | 1 26
10: 23 14 | 28 1
1: "a"
11: 42 31
5: 1 14 | 15 1
19: 14 1 | 14 14
12: 24 14 | 19 1
16: 15 1 | 14 14
31: 14 17 | 1 13
6: 14 14 | 1 14
2: 1 24 | 14 4
0: 8 11
13: 14 3 | 1 12
15: 1 | 14
17: 14 2 | 1 7
23: 25 1 | 22 14
28: 16 1
4: 1 1
20: 14 14 | 1 15
3: 5 14 | 16 1
27: 1 6 | 14 18
14: "b"
21: 14 1 | 1 14
25: 1 1 | 1 14
22: 14 14
8: 42
26: 14 22 | 1 20
18: 15 15
7: 14 5 | 1 21
24: 14 1

abbbbbabbbaaaababbaabbbbabababbbabbbbbbabaaaa
bbabbbbaabaabba
babbbbaabbbbbabbbbbbaabaaabaaa
aaabbbbbbaaaabaababaabababbabaaabbababababaaa
bbbbbbbaaaabbbbaaabbabaaa
bbbababbbbaaaaaaaabbababaaababaabab
ababaaaaaabaaab
ababaaaaabbbaba
baabbaaaabbaaaababbaababb
abbbbabbbbaaaababbbbbbaaaababb
aaaaabbaabaaaaababaa
aaaabbaaaabbaaa
aaaabbaabbaaaaaaabbbabbbaaabbaabaaa
babaaabbbaaabaababbaabababaaab
aabbbbbaabbbaaaaaabbbbbababaaaaabbaaabba
"#;
    assert_eq!(part1(s).unwrap(), 3);
    assert_eq!(part2(s).unwrap(), 12);
}

#[test]
fn test_2020_day19_left_recursion() {
    assert!(part1("0: 0 1 | 1\n1: \"a\"\n\naa\n").is_err());
    assert!(part1("0: 2 1\n2: 0 | 1\n1: \"a\"\n\naa\n").is_err());
}
