use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Byte count to request from [`random_bytes`] when a caller has no preference.
pub const DEFAULT_RANDOM_BYTES: usize = 8;
/// Default length of a random alphanumeric string.
pub const DEFAULT_STRING_LEN: usize = 8;
/// Default length of a random digit string.
pub const DEFAULT_DIGITS_LEN: usize = 4;

/// Source of secure randomness used by every generator in this crate.
///
/// Implemented for any cryptographically secure `rand` generator, so
/// production code uses [`OsRng`] and tests can substitute a seeded
/// `StdRng` for reproducible output.
pub trait RandomSource {
    /// Fill `dest` with random bytes.
    fn fill_random(&mut self, dest: &mut [u8]);

    /// Uniform integer in `0..bound`, without modulo bias.
    ///
    /// `bound` must be non-zero.
    fn below(&mut self, bound: u32) -> u32;
}

impl<R: RngCore + CryptoRng> RandomSource for R {
    fn fill_random(&mut self, dest: &mut [u8]) {
        RngCore::fill_bytes(self, dest);
    }

    fn below(&mut self, bound: u32) -> u32 {
        Rng::gen_range(self, 0..bound)
    }
}

/// Code generator bound to a random source.
///
/// The random primitives live here; the domain code builders are added in
/// `core::code`. `Codegen::new()` draws from the operating system.
#[derive(Debug, Clone, Default)]
pub struct Codegen<R = OsRng> {
    rng: R,
}

impl Codegen<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RandomSource> Codegen<R> {
    /// Use an explicit random source instead of the OS one.
    pub fn with_source(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_source(self) -> R {
        self.rng
    }

    /// Return `n` random bytes.
    ///
    /// Panics only if the underlying source is unavailable, which is not
    /// recoverable.
    pub fn random_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; n];
        self.rng.fill_random(&mut bytes);
        bytes
    }

    /// Lowercase alphanumeric string of exactly `len` characters.
    ///
    /// Random bytes are base64url-encoded and stripped of `-` and `_`.
    /// Batches are drawn until enough characters survive the stripping.
    pub fn random_string(&mut self, len: usize) -> String {
        let mut out = String::with_capacity(len);
        while out.len() < len {
            let remaining = len - out.len();
            let bytes = self.random_bytes((remaining * 3).div_ceil(4) + 1);
            out.extend(
                URL_SAFE_NO_PAD
                    .encode(bytes)
                    .chars()
                    .filter(char::is_ascii_alphanumeric)
                    .map(|c| c.to_ascii_lowercase()),
            );
        }
        out.truncate(len);
        out
    }

    /// String of exactly `len` independently drawn decimal digits.
    pub fn random_digits(&mut self, len: usize) -> String {
        (0..len)
            // below(10) < 10, so the cast cannot truncate
            .map(|_| char::from(b'0' + self.rng.below(10) as u8))
            .collect()
    }
}

/// `n` bytes from the OS random source.
pub fn random_bytes(n: usize) -> Vec<u8> {
    Codegen::new().random_bytes(n)
}

/// See [`Codegen::random_string`].
pub fn random_string(len: usize) -> String {
    Codegen::new().random_string(len)
}

/// See [`Codegen::random_digits`].
pub fn random_digits(len: usize) -> String {
    Codegen::new().random_digits(len)
}
