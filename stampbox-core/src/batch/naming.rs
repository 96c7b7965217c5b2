use std::ffi::OsString;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

use crate::watermark::random::time_seed;

/// Characters used for random file-name suffixes.
pub const SUFFIX_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Random alphanumeric suffixes for output file names.
///
/// Owns its own stream, separate from the watermark generator, seeded once at
/// construction.
#[derive(Clone, Debug)]
pub struct SuffixGenerator {
    inner: StdRng,
    len: usize,
}

impl SuffixGenerator {
    pub fn from_seed(seed: u64, len: usize) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            len,
        }
    }

    pub fn from_time(len: usize) -> Self {
        Self::from_seed(time_seed(), len)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn next_suffix(&mut self) -> String {
        (0..self.len)
            .map(|_| SUFFIX_ALPHABET[self.inner.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect()
    }
}

/// `photo.jpg` + `Ab3` -> `photo-Ab3.jpg`. Names without an extension get the
/// suffix appended; the last dot separates the extension.
pub fn randomized_file_name(file_name: &Path, suffix: &str) -> OsString {
    let stem = file_name.file_stem().unwrap_or(file_name.as_os_str());
    let mut out = OsString::from(stem);
    out.push("-");
    out.push(suffix);
    if let Some(ext) = file_name.extension() {
        out.push(".");
        out.push(ext);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/batch/naming.rs"]
mod tests;
