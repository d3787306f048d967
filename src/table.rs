use alloc::vec::Vec;
use core::fmt::Debug;

use log::debug;
use log::trace;

use crate::digest::HashVariant;
use crate::digest::Key;
use crate::error::ConfigError;
use crate::error::TableFull;
use crate::probe::Coefficients;
use crate::probe::ProbingScheme;

/// Debug statistics for probe-length analysis.
///
/// Requires the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone, PartialEq)]
pub struct DebugStats {
    /// Number of keys currently in the table
    pub populated: usize,
    /// Number of slots
    pub capacity: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Sum of the attempt counts returned by successful inserts
    pub total_collisions: u64,
    /// Largest attempt count returned by a successful insert
    pub longest_probe: usize,
    /// Mean attempt count per successful insert
    pub mean_probe: f64,
}

#[cfg(feature = "stats")]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Probe Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!("Collisions: {}", self.total_collisions);
        println!(
            "Probe length: {:.3} mean, {} longest",
            self.mean_probe, self.longest_probe
        );
    }
}

/// A fixed-capacity open-addressing table.
///
/// `Table<K>` stores keys directly in a slot array of `capacity` slots.
/// Each insert walks the probe sequence of its [`ProbingScheme`] from the
/// key's base slot and reports how many occupied slots it passed before
/// finding an empty one. There is no removal and no resizing.
///
/// Keys are not deduplicated: inserting a key that is already present places
/// a second copy.
///
/// ## Example
///
/// ```rust
/// use probe_lab::HashVariant;
/// use probe_lab::ProbingScheme;
/// use probe_lab::Table;
///
/// let mut table = Table::new(10, ProbingScheme::Linear, HashVariant::Identity).unwrap();
/// assert_eq!(table.insert(3u64), Ok(0));
/// // 13 also starts at slot 3, so it collides once and lands in slot 4.
/// assert_eq!(table.insert(13u64), Ok(1));
/// assert_eq!(table.slot(4), Some(&13));
/// ```
#[derive(Clone)]
pub struct Table<K> {
    slots: Vec<Option<K>>,

    scheme: ProbingScheme,
    hash_variant: HashVariant,
    coefficients: Coefficients,

    populated: usize,
    total_collisions: u64,
    longest_probe: usize,

    #[cfg(feature = "stats")]
    histogram: Vec<usize>,
}

impl<K: Debug> Debug for Table<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        struct Slots<'a, K>(&'a [Option<K>]);

        impl<K: Debug> Debug for Slots<'_, K> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                let mut map = f.debug_map();
                for (index, key) in self.0.iter().enumerate() {
                    if let Some(key) = key {
                        map.entry(&index, key);
                    }
                }
                map.finish()
            }
        }

        f.debug_struct("Table")
            .field("scheme", &self.scheme)
            .field("hash_variant", &self.hash_variant)
            .field("coefficients", &self.coefficients)
            .field("populated", &self.populated)
            .field("capacity", &self.slots.len())
            .field("slots", &Slots(&self.slots))
            .finish()
    }
}

impl<K: Key> Table<K> {
    /// Creates an empty table with default coefficients `(1, 1, 1)`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroCapacity`] if `capacity` is zero.
    /// - [`ConfigError::NonIntegerIdentityKey`] if `hash_variant` is
    ///   [`HashVariant::Identity`] and `K` is not an integer type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_lab::ConfigError;
    /// use probe_lab::HashVariant;
    /// use probe_lab::ProbingScheme;
    /// use probe_lab::Table;
    ///
    /// let table: Table<u64> = Table::new(100, ProbingScheme::Cubic, HashVariant::Identity).unwrap();
    /// assert_eq!(table.capacity(), 100);
    /// assert!(table.is_empty());
    ///
    /// let strings = Table::<String>::new(100, ProbingScheme::Linear, HashVariant::Identity);
    /// assert_eq!(strings.unwrap_err(), ConfigError::NonIntegerIdentityKey);
    /// ```
    pub fn new(
        capacity: usize,
        scheme: ProbingScheme,
        hash_variant: HashVariant,
    ) -> Result<Self, ConfigError> {
        Self::with_coefficients(capacity, scheme, hash_variant, Coefficients::default())
    }

    /// Creates an empty table with explicit probing coefficients.
    ///
    /// # Errors
    ///
    /// Same as [`Table::new`].
    pub fn with_coefficients(
        capacity: usize,
        scheme: ProbingScheme,
        hash_variant: HashVariant,
        coefficients: Coefficients,
    ) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !hash_variant.supports::<K>() {
            return Err(ConfigError::NonIntegerIdentityKey);
        }

        trace!(
            "new table: capacity={capacity} scheme={scheme} hash={hash_variant} {coefficients:?}"
        );

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Ok(Table {
            slots,
            scheme,
            hash_variant,
            coefficients,
            populated: 0,
            total_collisions: 0,
            longest_probe: 0,
            #[cfg(feature = "stats")]
            histogram: Vec::new(),
        })
    }

    /// Inserts `key` into the first empty slot of its probe sequence.
    ///
    /// Returns the number of occupied slots probed before the empty one, so
    /// `0` means the key landed in its base slot.
    ///
    /// # Errors
    ///
    /// Returns [`TableFull`] if none of the first `capacity` probes found an
    /// empty slot. The table is left unchanged. For quadratic and cubic
    /// probing this may happen while other slots are still empty.
    ///
    /// # Panics
    ///
    /// Under [`HashVariant::Identity`], panics if `key.identity()` is `None`,
    /// which only a `Key` implementation breaking the [`Key::INTEGRAL`]
    /// contract can cause.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_lab::HashVariant;
    /// use probe_lab::ProbingScheme;
    /// use probe_lab::Table;
    /// use probe_lab::TableFull;
    ///
    /// let mut table = Table::new(1, ProbingScheme::Linear, HashVariant::Identity).unwrap();
    /// assert_eq!(table.insert(7u32), Ok(0));
    /// assert_eq!(table.insert(8u32), Err(TableFull { capacity: 1 }));
    /// ```
    pub fn insert(&mut self, key: K) -> Result<usize, TableFull> {
        let capacity = self.slots.len();
        let base = match self.hash_variant.base_slot(&key, capacity as u64) {
            Some(base) => base,
            // Non-integer types are rejected in `with_coefficients`.
            None => panic!(
                "identity hashing on a `{}` value without an integer identity, \
                 but `Key::INTEGRAL` is true",
                core::any::type_name::<K>()
            ),
        };

        let probes = self.scheme.sequence(self.coefficients, base, capacity);
        for (attempt, index) in probes.enumerate() {
            let slot = &mut self.slots[index];
            if slot.is_none() {
                *slot = Some(key);
                self.record_insert(attempt);
                return Ok(attempt);
            }
        }

        debug!(
            "{} probing exhausted {capacity} attempts from base slot {base} ({}/{capacity} occupied)",
            self.scheme, self.populated
        );
        Err(TableFull { capacity })
    }
}

impl<K> Table<K> {
    #[inline(always)]
    fn record_insert(&mut self, attempts: usize) {
        self.populated += 1;
        self.total_collisions += attempts as u64;
        self.longest_probe = self.longest_probe.max(attempts);

        #[cfg(feature = "stats")]
        {
            if self.histogram.len() <= attempts {
                self.histogram.resize(attempts + 1, 0);
            }
            self.histogram[attempts] += 1;
        }
    }

    /// Returns the number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if no key has been inserted.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Fraction of occupied slots.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.slots.len() as f64
    }

    /// The probing scheme chosen at construction.
    pub fn scheme(&self) -> ProbingScheme {
        self.scheme
    }

    /// The hash variant chosen at construction.
    pub fn hash_variant(&self) -> HashVariant {
        self.hash_variant
    }

    /// The probing coefficients chosen at construction.
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Sum of the attempt counts of every successful insert.
    pub fn total_collisions(&self) -> u64 {
        self.total_collisions
    }

    /// Largest attempt count of any successful insert.
    pub fn longest_probe(&self) -> usize {
        self.longest_probe
    }

    /// The key stored in slot `index`, if the slot exists and is occupied.
    pub fn slot(&self, index: usize) -> Option<&K> {
        self.slots.get(index).and_then(Option::as_ref)
    }

    /// Iterates over occupied slots as `(index, key)`, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &K)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|key| (index, key)))
    }

    /// Number of successful inserts per attempt count.
    ///
    /// Index `n` holds how many inserts returned `n`. The vector is as long as
    /// [`longest_probe`](Self::longest_probe) + 1, or empty for an empty table.
    #[cfg(feature = "stats")]
    pub fn probe_histogram(&self) -> Vec<usize> {
        self.histogram.clone()
    }

    /// Returns probe statistics for the current table state.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> DebugStats {
        DebugStats {
            populated: self.populated,
            capacity: self.slots.len(),
            load_factor: self.load_factor(),
            total_collisions: self.total_collisions,
            longest_probe: self.longest_probe,
            mean_probe: if self.populated == 0 {
                0.0
            } else {
                self.total_collisions as f64 / self.populated as f64
            },
        }
    }

    /// Pretty-prints the probe-length histogram horizontally using stdout.
    ///
    /// Each row is one attempt count, with a bar proportional to the number
    /// of inserts that needed it.
    #[cfg(all(feature = "stats", feature = "std"))]
    pub fn print_probe_histogram(&self) {
        let max = self.histogram.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        println!(
            "probe histogram ({} entries, {} probing):",
            self.populated, self.scheme
        );
        let width = alloc::format!("{}", self.histogram.len() - 1).len();
        for (attempts, &count) in self.histogram.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let bar = crate::report::bar(count as u128, max as u128, 60);
            println!("{attempts:>width$} | {bar} ({count})");
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use rand::Rng;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;
    use crate::digest::DigestAlgorithm;

    const MD5: HashVariant = HashVariant::Digest(DigestAlgorithm::Md5);
    const SHA1: HashVariant = HashVariant::Digest(DigestAlgorithm::Sha1);
    const CRC32: HashVariant = HashVariant::Digest(DigestAlgorithm::Crc32);

    fn attempts<K: Key>(
        table: &mut Table<K>,
        keys: impl IntoIterator<Item = K>,
    ) -> Vec<Result<usize, TableFull>> {
        keys.into_iter().map(|k| table.insert(k)).collect()
    }

    fn identity(capacity: usize, scheme: ProbingScheme) -> Table<u64> {
        Table::new(capacity, scheme, HashVariant::Identity).unwrap()
    }

    fn random_keys(seed: u64, n: usize) -> Vec<u64> {
        let mut rng = SmallRng::seed_from_u64(seed);
        (0..n).map(|_| rng.random_range(0..1_000_000u64)).collect()
    }

    #[test]
    fn linear_identity_golden() {
        let mut table = identity(10, ProbingScheme::Linear);
        assert_eq!(
            attempts(&mut table, [3, 13, 23, 4]),
            vec![Ok(0), Ok(1), Ok(2), Ok(2)]
        );
        let placed: Vec<(usize, u64)> = table.iter().map(|(i, k)| (i, *k)).collect();
        assert_eq!(placed, vec![(3, 3), (4, 13), (5, 23), (6, 4)]);
        assert_eq!(table.total_collisions(), 5);
        assert_eq!(table.longest_probe(), 2);
    }

    #[test]
    fn quadratic_repeated_key_golden() {
        let mut table = identity(5, ProbingScheme::Quadratic);
        assert_eq!(
            attempts(&mut table, [0, 0, 0, 0]),
            vec![Ok(0), Ok(1), Ok(2), Err(TableFull { capacity: 5 })]
        );
        // Offsets 0, 2, 6, 12, 20 only reach slots {0, 1, 2}.
        assert_eq!(table.len(), 3);
        assert_eq!(table.slot(3), None);
        assert_eq!(table.slot(4), None);
    }

    #[test]
    fn cubic_repeated_key_golden() {
        let mut table = identity(5, ProbingScheme::Cubic);
        assert_eq!(
            attempts(&mut table, [0, 0, 0, 0]),
            vec![Ok(0), Ok(1), Ok(2), Err(TableFull { capacity: 5 })]
        );
        let occupied: Vec<usize> = table.iter().map(|(i, _)| i).collect();
        assert_eq!(occupied, vec![0, 3, 4]);

        let mut table = identity(7, ProbingScheme::Cubic);
        assert_eq!(
            attempts(&mut table, [0; 6]),
            vec![Ok(0), Ok(1), Ok(3), Ok(5), Ok(6), Err(TableFull { capacity: 7 })]
        );
    }

    #[test]
    fn quadratic_power_of_two_golden() {
        let mut table = identity(8, ProbingScheme::Quadratic);
        let results = attempts(&mut table, [0; 5]);
        assert_eq!(
            results,
            vec![Ok(0), Ok(1), Ok(2), Ok(3), Err(TableFull { capacity: 8 })]
        );
        let occupied: Vec<usize> = table.iter().map(|(i, _)| i).collect();
        assert_eq!(occupied, vec![0, 2, 4, 6]);
    }

    #[test]
    fn custom_coefficients_golden() {
        let mut table = Table::with_coefficients(
            10,
            ProbingScheme::Quadratic,
            HashVariant::Identity,
            Coefficients::new(2, 3, 0),
        )
        .unwrap();
        assert_eq!(
            attempts(&mut table, [3u64, 13, 23, 33, 43]),
            vec![Ok(0), Ok(1), Ok(2), Ok(3), Ok(7)]
        );
        assert_eq!(table.slot(4), Some(&43));

        let mut table = Table::with_coefficients(
            10,
            ProbingScheme::Cubic,
            HashVariant::Identity,
            Coefficients::new(1, 2, 3),
        )
        .unwrap();
        assert_eq!(
            attempts(&mut table, [3u64, 13, 23, 33, 43]),
            vec![Ok(0), Ok(1), Ok(2), Ok(3), Ok(4)]
        );
        let occupied: Vec<usize> = table.iter().map(|(i, _)| i).collect();
        assert_eq!(occupied, vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn digest_variants_golden() {
        let mut table: Table<u64> = Table::new(10, ProbingScheme::Linear, MD5).unwrap();
        assert_eq!(
            attempts(&mut table, [0, 3, 13, 42]),
            vec![Ok(0), Ok(0), Ok(1), Ok(1)]
        );
        assert_eq!(table.slot(5), Some(&42));

        let mut table: Table<u64> = Table::new(10, ProbingScheme::Linear, SHA1).unwrap();
        assert_eq!(
            attempts(&mut table, [0, 3, 13, 42]),
            vec![Ok(0), Ok(0), Ok(0), Ok(0)]
        );
        assert_eq!(table.slot(8), Some(&0));
        assert_eq!(table.slot(9), Some(&3));

        let mut table: Table<u64> = Table::new(10, ProbingScheme::Linear, CRC32).unwrap();
        assert_eq!(
            attempts(&mut table, [0, 3, 13, 42]),
            vec![Ok(0), Ok(0), Ok(0), Ok(0)]
        );
        assert_eq!(table.slot(9), Some(&0));
    }

    #[test]
    fn first_insert_never_collides() {
        for scheme in ProbingScheme::ALL {
            for variant in HashVariant::ALL {
                for capacity in [1, 2, 3, 17, 1000] {
                    for key in [0u64, 1, 999_999, u64::MAX] {
                        let mut table = Table::new(capacity, scheme, variant).unwrap();
                        assert_eq!(table.insert(key), Ok(0), "{scheme} {variant} {capacity}");
                    }
                }
            }
        }
    }

    #[test]
    fn occupancy_tracks_successful_inserts() {
        for scheme in ProbingScheme::ALL {
            for variant in HashVariant::ALL {
                let mut table = Table::new(257, scheme, variant).unwrap();
                let mut succeeded = 0;
                for key in random_keys(7, 257) {
                    if table.insert(key).is_ok() {
                        succeeded += 1;
                    }
                    assert_eq!(table.len(), succeeded);
                    assert_eq!(table.iter().count(), succeeded);
                }
            }
        }
    }

    #[test]
    fn failed_insert_leaves_table_unchanged() {
        let mut table = identity(5, ProbingScheme::Quadratic);
        attempts(&mut table, [0, 0, 0]);
        let before: Vec<(usize, u64)> = table.iter().map(|(i, k)| (i, *k)).collect();
        let collisions = table.total_collisions();

        assert_eq!(table.insert(5), Err(TableFull { capacity: 5 }));

        let after: Vec<(usize, u64)> = table.iter().map(|(i, k)| (i, *k)).collect();
        assert_eq!(before, after);
        assert_eq!(table.total_collisions(), collisions);
        // Keys with another base slot still find room.
        assert_eq!(table.insert(3), Ok(0));
    }

    #[test]
    fn inserts_are_deterministic() {
        let keys = random_keys(42, 800);
        for scheme in ProbingScheme::ALL {
            for variant in HashVariant::ALL {
                let run = || {
                    let mut table = Table::new(1000, scheme, variant).unwrap();
                    attempts(&mut table, keys.iter().copied())
                };
                assert_eq!(run(), run(), "{scheme} {variant}");
            }
        }
    }

    #[test]
    fn linear_fills_every_slot() {
        let capacity = 97;
        let mut table = identity(capacity, ProbingScheme::Linear);
        // Distinct base slots.
        for key in (0..capacity as u64).rev().map(|k| k * 3 % capacity as u64) {
            assert!(table.insert(key).is_ok());
        }
        assert_eq!(table.len(), capacity);
        assert_eq!(table.insert(0), Err(TableFull { capacity }));

        // Even identical base slots fill a linear table completely.
        let mut table = identity(capacity, ProbingScheme::Linear);
        for n in 0..capacity {
            assert_eq!(table.insert(5), Ok(n));
        }
    }

    #[test]
    fn capacity_one() {
        for scheme in ProbingScheme::ALL {
            for variant in HashVariant::ALL {
                let mut table = Table::new(1, scheme, variant).unwrap();
                assert_eq!(table.insert(5u64), Ok(0));
                assert_eq!(table.insert(5u64), Err(TableFull { capacity: 1 }));
                assert_eq!(table.insert(6u64), Err(TableFull { capacity: 1 }));
            }
        }
    }

    #[test]
    fn duplicates_take_new_slots() {
        let mut table: Table<u64> = Table::new(4, ProbingScheme::Linear, MD5).unwrap();
        assert_eq!(attempts(&mut table, [9, 9, 9]), vec![Ok(0), Ok(1), Ok(2)]);
        assert_eq!(table.iter().filter(|(_, k)| **k == 9).count(), 3);
    }

    #[test]
    fn string_keys_use_digests() {
        let mut table: Table<String> = Table::new(10, ProbingScheme::Linear, MD5).unwrap();
        // Same text as the integer golden above, same placement.
        for key in ["0", "3", "13", "42"] {
            table.insert(key.to_string()).unwrap();
        }
        assert_eq!(table.slot(5).map(String::as_str), Some("42"));

        let mut borrowed: Table<&str> = Table::new(10, ProbingScheme::Cubic, SHA1).unwrap();
        assert_eq!(borrowed.insert("alpha"), Ok(0));
    }

    /// Claims to be integral but has no identity for odd values.
    #[derive(Debug)]
    struct EvenOnly(u64);

    impl Key for EvenOnly {
        const INTEGRAL: bool = true;

        fn identity(&self) -> Option<u64> {
            (self.0 % 2 == 0).then_some(self.0)
        }

        fn with_canonical_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
            self.0.with_canonical_bytes(f)
        }
    }

    #[test]
    fn custom_integral_keys() {
        let mut table = Table::new(10, ProbingScheme::Linear, HashVariant::Identity).unwrap();
        assert_eq!(table.insert(EvenOnly(4)), Ok(0));
        assert_eq!(table.insert(EvenOnly(14)), Ok(1));

        // Digest variants never consult the identity.
        let mut table = Table::new(10, ProbingScheme::Linear, MD5).unwrap();
        assert_eq!(table.insert(EvenOnly(3)), Ok(0));
    }

    #[test]
    #[should_panic(expected = "`Key::INTEGRAL` is true")]
    fn integral_key_without_identity_panics() {
        let mut table = Table::new(10, ProbingScheme::Linear, HashVariant::Identity).unwrap();
        let _ = table.insert(EvenOnly(3));
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            Table::<u64>::new(0, ProbingScheme::Linear, MD5).unwrap_err(),
            ConfigError::ZeroCapacity
        );
        assert_eq!(
            Table::<String>::new(8, ProbingScheme::Linear, HashVariant::Identity).unwrap_err(),
            ConfigError::NonIntegerIdentityKey
        );
        assert_eq!(
            Table::<&str>::new(8, ProbingScheme::Quadratic, HashVariant::Identity).unwrap_err(),
            ConfigError::NonIntegerIdentityKey
        );
    }

    #[test]
    fn accessors() {
        let c = Coefficients::new(3, 5, 7);
        let mut table = Table::with_coefficients(20, ProbingScheme::Cubic, CRC32, c).unwrap();
        assert_eq!(table.scheme(), ProbingScheme::Cubic);
        assert_eq!(table.hash_variant(), CRC32);
        assert_eq!(table.coefficients(), c);
        assert_eq!(table.capacity(), 20);
        assert!(table.is_empty());
        assert_eq!(table.load_factor(), 0.0);

        for key in 0..10u64 {
            table.insert(key).unwrap();
        }
        assert_eq!(table.load_factor(), 0.5);
        assert_eq!(table.slot(20), None);
    }

    #[test]
    fn debug_lists_occupied_slots() {
        let mut table = identity(10, ProbingScheme::Linear);
        table.insert(3).unwrap();
        let rendered = alloc::format!("{table:?}");
        assert!(rendered.contains("slots: {3: 3}"), "{rendered}");
        assert!(rendered.contains("capacity: 10"), "{rendered}");
    }

    #[test]
    #[cfg(feature = "stats")]
    fn probe_histogram_counts_attempts() {
        let mut table = identity(10, ProbingScheme::Linear);
        assert!(table.probe_histogram().is_empty());
        attempts(&mut table, [3, 13, 23, 4, 8]);
        assert_eq!(table.probe_histogram(), vec![2, 1, 2]);

        let stats = table.debug_stats();
        assert_eq!(stats.populated, 5);
        assert_eq!(stats.total_collisions, 5);
        assert_eq!(stats.longest_probe, 2);
        assert_eq!(stats.mean_probe, 1.0);
    }

    #[test]
    #[cfg_attr(miri, ignore)]
    #[cfg(all(feature = "stats", feature = "std"))]
    fn histogram_output() {
        for scheme in ProbingScheme::ALL {
            let mut table = Table::new(10_000, scheme, MD5).unwrap();
            for key in random_keys(3, 8_000) {
                let _ = table.insert(key);
            }
            table.print_probe_histogram();
            table.debug_stats().print();
        }
    }
}
