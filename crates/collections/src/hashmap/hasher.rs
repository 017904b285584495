use std::{fmt, str::FromStr};

use super::UnknownStrategy;

/// Maps a key to one of `n` buckets.
///
/// Implementations must be pure: the same `(key, n)` always yields the same
/// index, and the index is always in `0..n`.
///
/// # Panics
///
/// Implementations may panic if `n == 0`,
/// a [`ChainedHashTable`](crate::ChainedHashTable) never asks for that.
pub trait HashStrategy {
    fn hash(&self, key: &str, n: usize) -> usize;
}

impl<H: HashStrategy + ?Sized> HashStrategy for &H {
    #[inline]
    fn hash(&self, key: &str, n: usize) -> usize {
        (**self).hash(key, n)
    }
}

/// Polynomial rolling hash with base 127 modulo the prime 16908799
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneralStringHasher;

impl GeneralStringHasher {
    pub const BASE: u32 = 127;
    pub const MODULUS: u32 = 16_908_799;
}

impl HashStrategy for GeneralStringHasher {
    fn hash(&self, key: &str, n: usize) -> usize {
        // BASE * (MODULUS - 1) + u8::MAX still fits a u32
        let h = key
            .bytes()
            .fold(0u32, |h, b| (Self::BASE * h + b as u32) % Self::MODULUS);
        h as usize % n
    }
}

/// Packs the low 6 bits of every byte, older bytes fall off the top
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BitShiftHasher;

impl HashStrategy for BitShiftHasher {
    fn hash(&self, key: &str, n: usize) -> usize {
        let r = key
            .bytes()
            .fold(0u32, |r, b| (r << 6) | (b & 0x3F) as u32);
        r as usize % n
    }
}

/// Sum of the byte values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SumHasher;

impl HashStrategy for SumHasher {
    fn hash(&self, key: &str, n: usize) -> usize {
        let sum = key.bytes().fold(0i32, |s, b| s.wrapping_add(b as i32));
        sum.unsigned_abs() as usize % n
    }
}

/// Product of the byte values.
///
/// Overflows for anything but short keys, which makes it a good worst case
/// to compare the other strategies against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProdHasher;

impl HashStrategy for ProdHasher {
    fn hash(&self, key: &str, n: usize) -> usize {
        let prod = key.bytes().fold(1i32, |p, b| p.wrapping_mul(b as i32));
        prod.unsigned_abs() as usize % n
    }
}

/// Runtime-selectable [`HashStrategy`], one variant per hasher of this module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    #[default]
    General,
    BitShift,
    Sum,
    Prod,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::General,
        Strategy::BitShift,
        Strategy::Sum,
        Strategy::Prod,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            Strategy::General => "general",
            Strategy::BitShift => "bitshift",
            Strategy::Sum => "sum",
            Strategy::Prod => "prod",
        }
    }
}

impl HashStrategy for Strategy {
    #[inline]
    fn hash(&self, key: &str, n: usize) -> usize {
        match self {
            Strategy::General => GeneralStringHasher.hash(key, n),
            Strategy::BitShift => BitShiftHasher.hash(key, n),
            Strategy::Sum => SumHasher.hash(key, n),
            Strategy::Prod => ProdHasher.hash(key, n),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn general_matches_rolling_formula() {
        // ('a' * 127 + 'b') = 97 * 127 + 98
        assert_eq!(GeneralStringHasher.hash("ab", usize::MAX), 12_417);
        assert_eq!(GeneralStringHasher.hash("ab", 100), 17);
        assert_eq!(GeneralStringHasher.hash("", 7), 0);

        // reduction modulo the prime happens on every step
        let long = "z".repeat(64);
        let mut expected: u64 = 0;
        for b in long.bytes() {
            expected = (127 * expected + b as u64) % 16_908_799;
        }
        assert_eq!(
            GeneralStringHasher.hash(&long, 1_000_003),
            (expected % 1_000_003) as usize
        );
    }

    #[test]
    fn bitshift_keeps_low_six_bits() {
        // 'a' = 0x61 -> 0x21, 'b' = 0x62 -> 0x22
        assert_eq!(BitShiftHasher.hash("a", usize::MAX), 0x21);
        assert_eq!(BitShiftHasher.hash("ab", usize::MAX), (0x21 << 6) | 0x22);

        // only the last five full bytes plus two bits of the sixth survive in 32 bits
        assert_eq!(
            BitShiftHasher.hash("xxxxxxxxabcdef", 1 << 20),
            BitShiftHasher.hash("yyyyyyyyabcdef", 1 << 20),
        );
    }

    #[test]
    fn sum_ignores_order() {
        assert_eq!(SumHasher.hash("abc", 1000), 97 + 98 + 99);
        assert_eq!(SumHasher.hash("abc", 10), SumHasher.hash("cba", 10));
        assert_eq!(SumHasher.hash("", 10), 0);
    }

    #[test]
    fn prod_overflows_but_stays_in_range() {
        assert_eq!(ProdHasher.hash("ab", 100_000), 97 * 98);
        assert_eq!(ProdHasher.hash("", 10), 1);

        let long = "~".repeat(40);
        for n in [1, 2, 3, 17, 5000, usize::MAX] {
            assert!(ProdHasher.hash(&long, n) < n);
        }
    }

    #[test]
    fn non_ascii_keys() {
        for strategy in Strategy::ALL {
            for n in [1, 13, 5000] {
                assert!(strategy.hash("ünïcödé ✓", n) < n, "{strategy} with {n}");
            }
        }
    }

    #[test]
    fn strategy_delegates() {
        let key = "delegation";
        assert_eq!(Strategy::General.hash(key, 97), GeneralStringHasher.hash(key, 97));
        assert_eq!(Strategy::BitShift.hash(key, 97), BitShiftHasher.hash(key, 97));
        assert_eq!(Strategy::Sum.hash(key, 97), SumHasher.hash(key, 97));
        assert_eq!(Strategy::Prod.hash(key, 97), ProdHasher.hash(key, 97));

        let by_ref: &dyn HashStrategy = &SumHasher;
        assert_eq!((&by_ref).hash(key, 97), SumHasher.hash(key, 97));
    }

    #[test]
    fn parse_strategy() {
        assert_eq!("general".parse::<Strategy>().unwrap(), Strategy::General);
        assert_eq!("BitShift".parse::<Strategy>().unwrap(), Strategy::BitShift);
        assert_eq!("SUM".parse::<Strategy>().unwrap(), Strategy::Sum);
        assert_eq!("prod".parse::<Strategy>().unwrap(), Strategy::Prod);

        let err = "md5".parse::<Strategy>().unwrap_err();
        assert_eq!(err.0, "md5");

        for strategy in Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>().unwrap(), strategy);
        }
    }
}
