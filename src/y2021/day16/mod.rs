use eyre::{bail, ensure, eyre, Result};

use crate::utils::*;

pub fn input() -> Result<String> {
    load(2021, 16)
}

const fn hex2bin_map() -> [[u8; 4]; 256] {
    // for each hex digit 0-9A-F, its four bits, most significant first; 0xff elsewhere
    let mut map = [[0xff; 4]; 256];
    let mut i = 0_u8;
    while i < 16 {
        let c = if i < 10 { i + b'0' } else { i + b'A' - 10 };
        let mut j = 0_u8;
        while j < 4 {
            map[c as usize][j as usize] = (i & (1 << (3 - j)) != 0) as u8;
            j += 1;
        }
        i += 1;
    }
    map
}

const HEX2BIN_MAP: [[u8; 4]; 256] = hex2bin_map();

fn parse_hex2bin(s: &str) -> Result<Vec<u8>> {
    let s = s.trim();
    let mut bits = Vec::with_capacity(s.len() * 4);
    for c in s.bytes() {
        let nibble = HEX2BIN_MAP[c as usize];
        ensure!(nibble[0] != 0xff, "invalid hex digit {:?}", char::from(c));
        bits.extend_from_slice(&nibble);
    }
    Ok(bits)
}

struct Bits<'a> {
    bits: &'a [u8],
    pos: usize,
}

impl<'a> Bits<'a> {
    pub fn new(bits: &'a [u8]) -> Self {
        Self { bits, pos: 0 }
    }

    pub fn read(&mut self, n: usize) -> Result<u64> {
        let end = self.pos + n;
        let chunk = self.bits.get(self.pos..end).ok_or_else(|| eyre!("transmission ends early"))?;
        self.pos = end;
        Ok(chunk.iter().fold(0, |v, &b| (v << 1) | u64::from(b)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    Literal(u64),
    Operator { type_id: u8, children: Vec<Packet> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Packet {
    version: u8,
    kind: Kind,
}

impl Packet {
    pub fn decode(hex: &str) -> Result<Self> {
        let bits = parse_hex2bin(hex)?;
        Self::read(&mut Bits::new(&bits))
    }

    fn read(s: &mut Bits) -> Result<Self> {
        let version = s.read(3)? as u8;
        let type_id = s.read(3)? as u8;
        if type_id == 4 {
            let mut v = 0_u64;
            loop {
                let more = s.read(1)? != 0;
                ensure!(v >> 60 == 0, "literal value too large");
                v = (v << 4) | s.read(4)?;
                if !more {
                    break;
                }
            }
            return Ok(Self { version, kind: Kind::Literal(v) });
        }
        let mut children = Vec::new();
        if s.read(1)? == 0 {
            let n = s.read(15)? as usize;
            let end = s.pos + n;
            while s.pos < end {
                children.push(Self::read(s)?);
            }
            ensure!(s.pos == end, "sub-packets overrun their declared length");
        } else {
            for _ in 0..s.read(11)? {
                children.push(Self::read(s)?);
            }
        }
        Ok(Self { version, kind: Kind::Operator { type_id, children } })
    }

    pub fn sum_versions(&self) -> u64 {
        let children: u64 = match &self.kind {
            Kind::Literal(_) => 0,
            Kind::Operator { children, .. } => children.iter().map(Self::sum_versions).sum(),
        };
        u64::from(self.version) + children
    }

    pub fn eval(&self) -> Result<u64> {
        let (type_id, children) = match &self.kind {
            Kind::Literal(v) => return Ok(*v),
            Kind::Operator { type_id, children } => (*type_id, children),
        };
        let values = children.iter().map(Self::eval).collect::<Result<Vec<_>>>()?;
        let compare = |f: fn(&u64, &u64) -> bool| match values.as_slice() {
            [a, b] => Ok(u64::from(f(a, b))),
            _ => Err(eyre!("comparison needs exactly two sub-packets, got {}", values.len())),
        };
        let overflow = || eyre!("arithmetic overflow");
        match type_id {
            0 => values.iter().try_fold(0_u64, |acc, &v| acc.checked_add(v)).ok_or_else(overflow),
            1 => values.iter().try_fold(1_u64, |acc, &v| acc.checked_mul(v)).ok_or_else(overflow),
            2 => values.iter().copied().min().ok_or_else(|| eyre!("minimum of no sub-packets")),
            3 => values.iter().copied().max().ok_or_else(|| eyre!("maximum of no sub-packets")),
            5 => compare(u64::gt),
            6 => compare(u64::lt),
            7 => compare(u64::eq),
            _ => bail!("unknown packet type {}", type_id),
        }
    }
}

pub fn part1(s: &str) -> Result<u64> {
    Ok(Packet::decode(s)?.sum_versions())
}

pub fn part2(s: &str) -> Result<u64> {
    Packet::decode(s)?.eval()
}

#[test]
fn test_2021_day16_literal() {
    let packet = Packet::decode("D2FE28").unwrap();
    assert_eq!(packet, Packet { version: 6, kind: Kind::Literal(2021) });
}

#[test]
fn test_2021_day16_operators() {
    let packet = Packet::decode("38006F45291200").unwrap();
    assert_eq!(packet.version, 1);
    match packet.kind {
        Kind::Operator { type_id, children } => {
            assert_eq!(type_id, 6);
            assert_eq!(children.iter().map(|c| c.eval().unwrap()).collect::<Vec<_>>(), vec![10, 20]);
        }
        _ => panic!("expected an operator packet"),
    }
    let packet = Packet::decode("EE00D40C823060").unwrap();
    assert_eq!(packet.version, 7);
    assert_eq!(packet.eval().unwrap(), 3);
}

#[test]
fn test_2021_day16_part1() {
    assert_eq!(part1("8A004A801A8002F478").unwrap(), 16);
    assert_eq!(part1("620080001611562C8802118E34").unwrap(), 12);
    assert_eq!(part1("C0015000016115A2E0802F182340").unwrap(), 23);
    assert_eq!(part1("A0016C880162017C3686B18A3D4780").unwrap(), 31);
}

#[test]
fn test_2021_day16_part2() {
    assert_eq!(part2("C200B40A82").unwrap(), 3);
    assert_eq!(part2("04005AC33890").unwrap(), 54);
    assert_eq!(part2("880086C3E88112").unwrap(), 7);
    assert_eq!(part2("CE00C43D881120").unwrap(), 9);
    assert_eq!(part2("D8005AC2A8F0").unwrap(), 1);
    assert_eq!(part2("F600BC2D8F").unwrap(), 0);
    assert_eq!(part2("9C005AC2F8F0").unwrap(), 0);
    assert_eq!(part2("9C0141080250320F1802104A08").unwrap(), 1);
}

#[test]
fn test_2021_day16_malformed() {
    assert!(part1("D2FE2").is_err());
    assert!(part1("XYZ").is_err());
}
