//! Probe sequences for open addressing.
//!
//! A probing scheme maps an attempt index `i` to a candidate slot, starting
//! from the base slot of the key:
//!
//! | Scheme    | Slot for attempt `i`                              |
//! |-----------|---------------------------------------------------|
//! | Linear    | `(base + i) mod N`                                |
//! | Quadratic | `(base + c1*i + c2*i^2) mod N`                    |
//! | Cubic     | `(base + c1*i + c2*i^2 + c3*i^3) mod N`           |
//!
//! Only linear probing is guaranteed to visit every slot in `N` attempts.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;

use crate::error::ConfigError;

/// Polynomial coefficients for quadratic and cubic probing.
///
/// Linear probing ignores them. `c3` is only read by cubic probing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coefficients {
    /// Coefficient of `i`.
    pub c1: u64,
    /// Coefficient of `i^2`.
    pub c2: u64,
    /// Coefficient of `i^3`.
    pub c3: u64,
}

impl Coefficients {
    /// Builds a coefficient set.
    pub const fn new(c1: u64, c2: u64, c3: u64) -> Self {
        Self { c1, c2, c3 }
    }
}

impl Default for Coefficients {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

/// The collision-resolution discipline of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbingScheme {
    /// Step one slot per attempt.
    Linear,
    /// Step by `c1*i + c2*i^2`.
    Quadratic,
    /// Step by `c1*i + c2*i^2 + c3*i^3`.
    Cubic,
}

impl ProbingScheme {
    /// All schemes, in reporting order.
    pub const ALL: [ProbingScheme; 3] = [
        ProbingScheme::Linear,
        ProbingScheme::Quadratic,
        ProbingScheme::Cubic,
    ];

    /// Lowercase selector name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            ProbingScheme::Linear => "linear",
            ProbingScheme::Quadratic => "quadratic",
            ProbingScheme::Cubic => "cubic",
        }
    }

    /// Computes the candidate slot for `attempt`, given the base slot of a key.
    ///
    /// Every term is reduced modulo `capacity` in 128-bit arithmetic before it
    /// is summed, so the result is exact for any coefficients and any attempt
    /// index that fits in a `u64`.
    ///
    /// `capacity` must be non-zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_lab::Coefficients;
    /// use probe_lab::ProbingScheme;
    ///
    /// let coefficients = Coefficients::default();
    /// assert_eq!(ProbingScheme::Linear.slot(coefficients, 3, 10, 2), 5);
    /// // 3 + 2 + 4 = 9
    /// assert_eq!(ProbingScheme::Quadratic.slot(coefficients, 3, 10, 2), 9);
    /// // 3 + 2 + 4 + 8 = 17
    /// assert_eq!(ProbingScheme::Cubic.slot(coefficients, 3, 10, 2), 7);
    /// ```
    #[inline]
    pub fn slot(self, coefficients: Coefficients, base: u64, capacity: u64, attempt: u64) -> u64 {
        debug_assert!(capacity > 0);
        let n = capacity as u128;
        let base = base as u128 % n;
        let i = attempt as u128 % n;

        let offset = match self {
            ProbingScheme::Linear => i,
            ProbingScheme::Quadratic => {
                let i2 = i * i % n;
                (term(coefficients.c1, i, n) + term(coefficients.c2, i2, n)) % n
            }
            ProbingScheme::Cubic => {
                let i2 = i * i % n;
                let i3 = i2 * i % n;
                (term(coefficients.c1, i, n)
                    + term(coefficients.c2, i2, n)
                    + term(coefficients.c3, i3, n))
                    % n
            }
        };

        ((base + offset) % n) as u64
    }

    /// Returns the first `capacity` candidate slots for a key with the given
    /// base slot.
    pub fn sequence(self, coefficients: Coefficients, base: u64, capacity: usize) -> ProbeSequence {
        ProbeSequence {
            scheme: self,
            coefficients,
            base,
            capacity: capacity as u64,
            attempt: 0,
        }
    }
}

/// `c * power mod n`, where `power < n <= u64::MAX`.
#[inline(always)]
fn term(c: u64, power: u128, n: u128) -> u128 {
    (c as u128 % n) * power % n
}

impl fmt::Display for ProbingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProbingScheme {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        ProbingScheme::ALL
            .into_iter()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(selector))
            .ok_or_else(|| ConfigError::InvalidScheme(s.to_string()))
    }
}

/// Iterator over the candidate slots of one key, attempt `0` first.
///
/// Yields exactly `capacity` slots. Slots may repeat for non-linear schemes.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    scheme: ProbingScheme,
    coefficients: Coefficients,
    base: u64,
    capacity: u64,
    attempt: u64,
}

impl Iterator for ProbeSequence {
    type Item = usize;

    #[inline]
    fn next(&mut self) -> Option<usize> {
        if self.attempt >= self.capacity {
            return None;
        }
        let slot = self
            .scheme
            .slot(self.coefficients, self.base, self.capacity, self.attempt);
        self.attempt += 1;
        Some(slot as usize)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.capacity - self.attempt) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;

    use super::*;

    fn naive(scheme: ProbingScheme, c: Coefficients, base: u64, n: u64, i: u64) -> u64 {
        let (base, i, n) = (base as u128, i as u128, n as u128);
        let (c1, c2, c3) = (c.c1 as u128, c.c2 as u128, c.c3 as u128);
        let raw = match scheme {
            ProbingScheme::Linear => base + i,
            ProbingScheme::Quadratic => base + c1 * i + c2 * i * i,
            ProbingScheme::Cubic => base + c1 * i + c2 * i * i + c3 * i * i * i,
        };
        (raw % n) as u64
    }

    #[test]
    fn matches_unreduced_formula() {
        let coefficients = [
            Coefficients::default(),
            Coefficients::new(2, 3, 5),
            Coefficients::new(0, 1, 0),
            Coefficients::new(7, 0, 11),
        ];
        for scheme in ProbingScheme::ALL {
            for &c in &coefficients {
                for n in [1u64, 2, 5, 7, 10, 64, 1000] {
                    for base in [0u64, 3, 999_999] {
                        for i in 0..n.min(50) {
                            assert_eq!(
                                scheme.slot(c, base, n, i),
                                naive(scheme, c, base, n, i),
                                "{scheme} c={c:?} base={base} n={n} i={i}"
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn wide_terms_do_not_overflow() {
        let c = Coefficients::new(u64::MAX, u64::MAX, u64::MAX);
        let n = 1_000_003u64;
        let i = n - 1;
        // i == -1 (mod n), so the cubic offset is -c1 + c2 - c3 == -c (mod n).
        let c_mod = (u64::MAX % n) as u128;
        let expected = ((n as u128 - c_mod) % n as u128) as u64;
        assert_eq!(ProbingScheme::Cubic.slot(c, 0, n, i), expected);

        let slot = ProbingScheme::Cubic.slot(c, u64::MAX, u64::MAX, u64::MAX - 1);
        assert!(slot < u64::MAX);
    }

    #[test]
    fn attempt_zero_is_base_slot() {
        for scheme in ProbingScheme::ALL {
            let c = Coefficients::new(4, 9, 16);
            assert_eq!(scheme.slot(c, 123, 10, 0), 3);
        }
    }

    #[test]
    fn linear_sequence_is_a_permutation() {
        let slots: BTreeSet<usize> = ProbingScheme::Linear
            .sequence(Coefficients::default(), 7, 13)
            .collect();
        assert_eq!(slots.len(), 13);
    }

    #[test]
    fn quadratic_sequence_can_cycle() {
        let slots: Vec<usize> = ProbingScheme::Quadratic
            .sequence(Coefficients::default(), 0, 5)
            .collect();
        assert_eq!(slots, [0, 2, 1, 2, 0]);
    }

    #[test]
    fn sequence_length_is_capacity() {
        let seq = ProbingScheme::Cubic.sequence(Coefficients::default(), 1, 8);
        assert_eq!(seq.len(), 8);
        assert_eq!(seq.count(), 8);
    }

    #[test]
    fn parse_selectors() {
        assert_eq!("linear".parse(), Ok(ProbingScheme::Linear));
        assert_eq!("Quadratic".parse(), Ok(ProbingScheme::Quadratic));
        assert_eq!(" cubic ".parse(), Ok(ProbingScheme::Cubic));
        assert_eq!(
            "double".parse::<ProbingScheme>(),
            Err(ConfigError::InvalidScheme("double".to_string()))
        );
        for scheme in ProbingScheme::ALL {
            assert_eq!(scheme.name().parse(), Ok(scheme));
        }
    }
}
