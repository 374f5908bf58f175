//! Key snapshots.

use std::slice;
use std::sync::Arc;

/// Keys that were bound when [`Registry::keys`](super::Registry::keys) was called.
///
/// The snapshot is owned and immutable: later registry mutations never show
/// up in it, and it can be iterated any number of times.
#[derive(Debug, Clone)]
pub struct Keys<K> {
    keys: Arc<[K]>,
}

impl<K> Keys<K> {
    pub(crate) fn new(keys: Arc<[K]>) -> Self {
        Self { keys }
    }

    pub fn iter(&self) -> slice::Iter<'_, K> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: PartialEq<Q>,
        Q: ?Sized,
    {
        self.keys.iter().any(|k| k == key)
    }
}

impl<'a, K> IntoIterator for &'a Keys<K> {
    type Item = &'a K;
    type IntoIter = slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}

impl<K: Clone> IntoIterator for Keys<K> {
    type Item = K;
    type IntoIter = KeysIntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        KeysIntoIter {
            keys: self.keys,
            pos: 0,
        }
    }
}

/// Owning iterator over a [`Keys`] snapshot.
#[derive(Debug, Clone)]
pub struct KeysIntoIter<K> {
    keys: Arc<[K]>,
    pos: usize,
}

impl<K: Clone> Iterator for KeysIntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let key = self.keys.get(self.pos)?.clone();
        self.pos += 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<K: Clone> ExactSizeIterator for KeysIntoIter<K> {}
