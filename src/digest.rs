//! Key digests.
//!
//! A [`HashVariant`] turns a key into a [`KeyDigest`], a non-negative integer
//! of up to 160 bits. The table only ever needs the digest modulo its
//! capacity, which [`KeyDigest::reduce`] computes exactly without a bignum.
//!
//! Digest variants hash the key's canonical bytes, which for integers is the
//! decimal text form (`42` hashes the two bytes `b"42"`).

use core::fmt;
use core::str::FromStr;

use alloc::string::String;
use alloc::string::ToString;

use md5::Digest;
use md5::Md5;
use sha1::Sha1;

use crate::error::ConfigError;

const MAX_DIGEST_BYTES: usize = 20;

/// A type that can be stored in a [`Table`](crate::Table).
///
/// Every key has a canonical byte form for the digest variants. Integer keys
/// additionally have an identity value, which is the only form usable with
/// [`HashVariant::Identity`].
pub trait Key {
    /// Whether [`Key::identity`] returns `Some` for every value of this type.
    ///
    /// [`Table`](crate::Table) only accepts [`HashVariant::Identity`] for
    /// types that set this to `true`, and from then on relies on it: an
    /// implementation that sets `INTEGRAL = true` but returns `None` from
    /// [`Key::identity`] makes [`Table::insert`](crate::Table::insert) panic.
    const INTEGRAL: bool;

    /// The key as a non-negative integer, if it is one.
    ///
    /// Must return `Some` for every value when [`Key::INTEGRAL`] is `true`.
    fn identity(&self) -> Option<u64>;

    /// Calls `f` with the canonical byte representation of the key.
    fn with_canonical_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R;
}

macro_rules! integer_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Key for $ty {
                const INTEGRAL: bool = true;

                #[inline]
                fn identity(&self) -> Option<u64> {
                    Some(*self as u64)
                }

                #[inline]
                fn with_canonical_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
                    let mut buf = [0u8; 20];
                    f(decimal(*self as u64, &mut buf))
                }
            }
        )*
    };
}

integer_key!(u8, u16, u32, u64, usize);

impl Key for str {
    const INTEGRAL: bool = false;

    fn identity(&self) -> Option<u64> {
        None
    }

    fn with_canonical_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_bytes())
    }
}

impl Key for String {
    const INTEGRAL: bool = false;

    fn identity(&self) -> Option<u64> {
        None
    }

    fn with_canonical_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        f(self.as_bytes())
    }
}

impl<K: Key + ?Sized> Key for &K {
    const INTEGRAL: bool = K::INTEGRAL;

    #[inline]
    fn identity(&self) -> Option<u64> {
        (**self).identity()
    }

    #[inline]
    fn with_canonical_bytes<R>(&self, f: impl FnOnce(&[u8]) -> R) -> R {
        (**self).with_canonical_bytes(f)
    }
}

/// Writes the decimal form of `value` to the tail of `buf`.
#[inline]
fn decimal(mut value: u64, buf: &mut [u8; 20]) -> &[u8] {
    let mut start = buf.len();
    loop {
        start -= 1;
        buf[start] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[start..]
}

/// A checksum or cryptographic digest algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// 128-bit MD5.
    Md5,
    /// 160-bit SHA-1.
    Sha1,
    /// 32-bit CRC-32 (IEEE).
    Crc32,
}

impl DigestAlgorithm {
    /// Lowercase selector name.
    pub const fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "md5",
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Crc32 => "crc32",
        }
    }

    /// Digests raw bytes.
    pub fn digest_bytes(self, bytes: &[u8]) -> KeyDigest {
        match self {
            DigestAlgorithm::Md5 => KeyDigest::from_be_bytes(&Md5::digest(bytes)),
            DigestAlgorithm::Sha1 => KeyDigest::from_be_bytes(&Sha1::digest(bytes)),
            DigestAlgorithm::Crc32 => KeyDigest::from_be_bytes(&crc32fast::hash(bytes).to_be_bytes()),
        }
    }
}

/// How keys are mapped to their base digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashVariant {
    /// The key's own integer value. Only valid for integer keys.
    Identity,
    /// A digest of the key's canonical bytes.
    Digest(DigestAlgorithm),
}

impl HashVariant {
    /// Every supported variant, identity first.
    pub const ALL: [HashVariant; 4] = [
        HashVariant::Identity,
        HashVariant::Digest(DigestAlgorithm::Md5),
        HashVariant::Digest(DigestAlgorithm::Sha1),
        HashVariant::Digest(DigestAlgorithm::Crc32),
    ];

    /// Lowercase selector name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            HashVariant::Identity => "identity",
            HashVariant::Digest(algorithm) => algorithm.name(),
        }
    }

    /// Whether keys of type `K` can be digested under this variant.
    pub const fn supports<K: Key + ?Sized>(self) -> bool {
        match self {
            HashVariant::Identity => K::INTEGRAL,
            HashVariant::Digest(_) => true,
        }
    }

    /// Computes the digest of `key`.
    ///
    /// Returns `None` only for [`HashVariant::Identity`] on a non-integer key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use probe_lab::DigestAlgorithm;
    /// use probe_lab::HashVariant;
    ///
    /// let md5 = HashVariant::Digest(DigestAlgorithm::Md5);
    /// let digest = md5.digest(&0u64).unwrap();
    /// assert_eq!(format!("{digest:x}"), "cfcd208495d565ef66e7dff9f98764da");
    ///
    /// assert_eq!(HashVariant::Identity.digest(&42u64).unwrap().reduce(10), 2);
    /// assert!(HashVariant::Identity.digest("42").is_none());
    /// ```
    pub fn digest<K: Key + ?Sized>(self, key: &K) -> Option<KeyDigest> {
        match self {
            HashVariant::Identity => key.identity().map(KeyDigest::from),
            HashVariant::Digest(algorithm) => {
                Some(key.with_canonical_bytes(|bytes| algorithm.digest_bytes(bytes)))
            }
        }
    }

    /// Computes `digest(key) mod modulus` for a non-zero `modulus`.
    ///
    /// Identity hashing skips the byte-wise reduction.
    #[inline]
    pub fn base_slot<K: Key + ?Sized>(self, key: &K, modulus: u64) -> Option<u64> {
        match self {
            HashVariant::Identity => key.identity().map(|value| value % modulus),
            HashVariant::Digest(algorithm) => Some(key.with_canonical_bytes(|bytes| {
                algorithm.digest_bytes(bytes).reduce(modulus)
            })),
        }
    }
}

impl fmt::Display for HashVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashVariant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let selector = s.trim();
        // Aliases for plain modulo hashing.
        if selector.eq_ignore_ascii_case("default") || selector.eq_ignore_ascii_case("modulo") {
            return Ok(HashVariant::Identity);
        }
        HashVariant::ALL
            .into_iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(selector))
            .ok_or_else(|| ConfigError::InvalidHashVariant(s.to_string()))
    }
}

/// Computes the digest of `key` under `variant`.
///
/// Shorthand for [`HashVariant::digest`].
pub fn digest<K: Key + ?Sized>(variant: HashVariant, key: &K) -> Option<KeyDigest> {
    variant.digest(key)
}

/// A non-negative integer digest, stored big-endian.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyDigest {
    bytes: [u8; MAX_DIGEST_BYTES],
    len: u8,
}

impl KeyDigest {
    fn from_be_bytes(bytes: &[u8]) -> Self {
        debug_assert!(bytes.len() <= MAX_DIGEST_BYTES);
        let mut digest = KeyDigest {
            bytes: [0; MAX_DIGEST_BYTES],
            len: bytes.len() as u8,
        };
        digest.bytes[..bytes.len()].copy_from_slice(bytes);
        digest
    }

    /// Big-endian bytes of the digest, at the algorithm's native width.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len as usize]
    }

    /// Computes `self mod modulus`.
    ///
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    #[inline]
    pub fn reduce(&self, modulus: u64) -> u64 {
        assert!(modulus != 0, "digest reduced modulo zero");
        let m = modulus as u128;
        let mut rem = 0u128;
        for &byte in self.as_bytes() {
            rem = ((rem << 8) | byte as u128) % m;
        }
        rem as u64
    }
}

impl From<u64> for KeyDigest {
    fn from(value: u64) -> Self {
        KeyDigest::from_be_bytes(&value.to_be_bytes())
    }
}

/// Fixed-width lowercase hex, two digits per byte.
impl fmt::LowerHex for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for KeyDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyDigest(0x{self:x})")
    }
}
