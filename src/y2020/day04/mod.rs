use ahash::AHashMap;
use eyre::{eyre, Result};
use regex::Regex;

use crate::utils::*;

const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];
const EYE_COLORS: [&str; 7] = ["amb", "blu", "brn", "gry", "grn", "hzl", "oth"];

pub fn input() -> Result<String> {
    load(2020, 4)
}

type Passport<'a> = AHashMap<&'a str, &'a str>;

fn parse(s: &str) -> Result<Vec<Passport<'_>>> {
    blocks(s)
        .into_iter()
        .map(|block| {
            block
                .split_whitespace()
                .map(|field| field.split_once(':').ok_or_else(|| eyre!("invalid field {:?}", field)))
                .collect::<Result<Passport>>()
        })
        .collect()
}

fn has_required(passport: &Passport) -> bool {
    REQUIRED.iter().all(|key| passport.contains_key(key))
}

struct Validator {
    year: Regex,
    height: Regex,
    hair: Regex,
    pid: Regex,
}

impl Validator {
    pub fn new() -> Result<Self> {
        Ok(Self {
            year: Regex::new(r"^\d{4}$")?,
            height: Regex::new(r"^(\d+)(cm|in)$")?,
            hair: Regex::new(r"^#[0-9a-f]{6}$")?,
            pid: Regex::new(r"^\d{9}$")?,
        })
    }

    fn year_in(&self, value: &str, lo: u32, hi: u32) -> bool {
        self.year.is_match(value) && value.parse().map_or(false, |y: u32| (lo..=hi).contains(&y))
    }

    fn height(&self, value: &str) -> bool {
        match self.height.captures(value) {
            Some(caps) => match (caps[1].parse::<u32>(), &caps[2]) {
                (Ok(h), "cm") => (150..=193).contains(&h),
                (Ok(h), "in") => (59..=76).contains(&h),
                _ => false,
            },
            None => false,
        }
    }

    fn field(&self, key: &str, value: &str) -> bool {
        match key {
            "byr" => self.year_in(value, 1920, 2002),
            "iyr" => self.year_in(value, 2010, 2020),
            "eyr" => self.year_in(value, 2020, 2030),
            "hgt" => self.height(value),
            "hcl" => self.hair.is_match(value),
            "ecl" => EYE_COLORS.contains(&value),
            "pid" => self.pid.is_match(value),
            _ => true,
        }
    }

    pub fn is_valid(&self, passport: &Passport) -> bool {
        has_required(passport) && passport.iter().all(|(key, value)| self.field(key, value))
    }
}

pub fn part1(s: &str) -> Result<usize> {
    Ok(parse(s)?.iter().filter(|p| has_required(p)).count())
}

pub fn part2(s: &str) -> Result<usize> {
    let validator = Validator::new()?;
    Ok(parse(s)?.iter().filter(|p| validator.is_valid(p)).count())
}

#[test]
fn test_2020_day04_part1() {
    let s = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";
    assert_eq!(part1(s).unwrap(), 2);
    assert_eq!(part2(s).unwrap(), 2);
}

#[test]
fn test_2020_day04_part2() {
    let invalid = "\
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";
    let valid = "\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";
    assert_eq!(part1(invalid).unwrap(), 4);
    assert_eq!(part2(invalid).unwrap(), 0);
    assert_eq!(part2(valid).unwrap(), 4);
}

#[test]
fn test_2020_day04_fields() {
    let v = Validator::new().unwrap();
    assert!(v.field("byr", "2002"));
    assert!(!v.field("byr", "2003"));
    assert!(v.field("hgt", "60in"));
    assert!(v.field("hgt", "190cm"));
    assert!(!v.field("hgt", "190in"));
    assert!(!v.field("hgt", "190"));
    assert!(v.field("hcl", "#123abc"));
    assert!(!v.field("hcl", "#123abz"));
    assert!(!v.field("hcl", "123abc"));
    assert!(v.field("ecl", "brn"));
    assert!(!v.field("ecl", "wat"));
    assert!(v.field("pid", "000000001"));
    assert!(!v.field("pid", "0123456789"));
}
