// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Owned, growable set of raw file descriptors.

use smallvec::SmallVec;
use std::os::fd::RawFd;

const BITS_PER_WORD: usize = u64::BITS as usize;

/// Words stored inline before spilling to the heap. 16 words is 1024 bits, which is
/// `FD_SETSIZE` on Linux and macOS.
const INLINE_WORDS: usize = 16;

/// A set of file descriptors, stored as a bitset.
///
/// This is the Rust side equivalent of `fd_set`. It has no upper limit (it grows as
/// needed) and it ignores negative descriptors, so it is always safe to use. Trailing
/// zero words are trimmed on removal, so two sets with the same members compare equal.
///
/// ```
/// use r3bl_fd_select::FdSet;
///
/// let mut set: FdSet = [3, 7, 1200].into_iter().collect();
/// assert!(set.contains(7));
/// assert_eq!(set.highest(), Some(1200));
///
/// set.remove(1200);
/// assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 7]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FdSet {
    words: SmallVec<[u64; INLINE_WORDS]>,
}

/// Splits `fd` into `(word index, bit mask)`. [`None`] for negative descriptors.
fn locate(fd: RawFd) -> Option<(usize, u64)> {
    let index = usize::try_from(fd).ok()?;
    Some((index / BITS_PER_WORD, 1 << (index % BITS_PER_WORD)))
}

impl FdSet {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    /// Adds `fd`. Returns `true` if it was not already present. Negative descriptors are
    /// ignored and return `false`.
    pub fn insert(&mut self, fd: RawFd) -> bool {
        let Some((word_index, mask)) = locate(fd) else {
            return false;
        };
        if word_index >= self.words.len() {
            self.words.resize(word_index + 1, 0);
        }
        let word = &mut self.words[word_index];
        let was_absent = *word & mask == 0;
        *word |= mask;
        was_absent
    }

    /// Removes `fd`. Returns `true` if it was present.
    pub fn remove(&mut self, fd: RawFd) -> bool {
        let Some((word_index, mask)) = locate(fd) else {
            return false;
        };
        let Some(word) = self.words.get_mut(word_index) else {
            return false;
        };
        let was_present = *word & mask != 0;
        *word &= !mask;
        while self.words.last() == Some(&0) {
            self.words.pop();
        }
        was_present
    }

    #[must_use]
    pub fn contains(&self, fd: RawFd) -> bool {
        locate(fd)
            .and_then(|(word_index, mask)| {
                self.words.get(word_index).map(|word| word & mask != 0)
            })
            .unwrap_or(false)
    }

    pub fn clear(&mut self) { self.words.clear(); }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.words.iter().all(|word| *word == 0) }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// The greatest descriptor in the set, or [`None`] if it is empty.
    #[must_use]
    pub fn highest(&self) -> Option<RawFd> {
        let (word_index, word) = self
            .words
            .iter()
            .enumerate()
            .rev()
            .find(|(_, word)| **word != 0)?;
        let bit = BITS_PER_WORD - 1 - word.leading_zeros() as usize;
        RawFd::try_from(word_index * BITS_PER_WORD + bit).ok()
    }

    /// Iterates the descriptors in ascending order.
    #[must_use]
    pub fn iter(&self) -> FdSetIter<'_> {
        FdSetIter {
            words: &self.words,
            word_index: 0,
            remaining: self.words.first().copied().unwrap_or(0),
        }
    }
}

/// Ascending iterator over an [`FdSet`]. Created by [`FdSet::iter()`].
#[derive(Debug, Clone)]
pub struct FdSetIter<'a> {
    words: &'a [u64],
    word_index: usize,
    remaining: u64,
}

impl Iterator for FdSetIter<'_> {
    type Item = RawFd;

    fn next(&mut self) -> Option<Self::Item> {
        while self.remaining == 0 {
            self.word_index += 1;
            self.remaining = *self.words.get(self.word_index)?;
        }
        let bit = self.remaining.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.remaining &= self.remaining - 1;
        RawFd::try_from(self.word_index * BITS_PER_WORD + bit).ok()
    }
}

impl<'a> IntoIterator for &'a FdSet {
    type Item = RawFd;
    type IntoIter = FdSetIter<'a>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}

impl FromIterator<RawFd> for FdSet {
    fn from_iter<I: IntoIterator<Item = RawFd>>(iter: I) -> Self {
        let mut set = FdSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<RawFd> for FdSet {
    fn extend<I: IntoIterator<Item = RawFd>>(&mut self, iter: I) {
        for fd in iter {
            self.insert(fd);
        }
    }
}
