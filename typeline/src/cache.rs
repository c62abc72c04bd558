// Copyright 2026 the Typeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caching of computed block layouts.

use crate::error::Error;
use crate::geometry::Rect;
use crate::layout::BlockLayout;

/// How many layouts are retained. Callers tend to alternate between a small
/// set of strings (labels, a score readout), so a handful is plenty.
const MAX_ENTRIES: usize = 8;

#[derive(Debug)]
struct Entry {
    /// Last-use stamp for least-recently-used eviction.
    epoch: u64,
    text: String,
    rect: Rect,
    /// The typesetter settings generation the layout was built under.
    generation: u64,
    layout: BlockLayout,
}

impl Entry {
    fn matches(&self, text: &str, rect: Rect, generation: u64) -> bool {
        self.generation == generation && self.rect == rect && self.text == text
    }
}

/// A least-recently-used layout cache keyed by input text, target rectangle
/// and settings generation.
///
/// Entries are found by linear scan; the cache is sized for a low number of
/// entries. A settings change invalidates every entry at once because the
/// typesetter bumps its generation, which no stored key can match.
#[derive(Debug)]
pub(crate) struct LayoutCache {
    entries: Vec<Entry>,
    epoch: u64,
}

impl LayoutCache {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
            epoch: 0,
        }
    }

    /// Returns the cached layout for the key, building and storing it on a
    /// miss. A failed build stores nothing.
    pub(crate) fn get_or_insert(
        &mut self,
        text: &str,
        rect: Rect,
        generation: u64,
        build: impl FnOnce() -> Result<BlockLayout, Error>,
    ) -> Result<&BlockLayout, Error> {
        self.epoch += 1;
        let epoch = self.epoch;
        if let Some(found) = self
            .entries
            .iter()
            .position(|entry| entry.matches(text, rect, generation))
        {
            let entry = &mut self.entries[found];
            entry.epoch = epoch;
            return Ok(&entry.layout);
        }
        let entry = Entry {
            epoch,
            text: text.to_owned(),
            rect,
            generation,
            layout: build()?,
        };
        let index = if self.entries.len() < MAX_ENTRIES {
            self.entries.push(entry);
            self.entries.len() - 1
        } else {
            let oldest = self
                .entries
                .iter()
                .enumerate()
                .min_by_key(|(_, entry)| entry.epoch)
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.entries[oldest] = entry;
            oldest
        };
        Ok(&self.entries[index].layout)
    }

    /// Drops every cached layout.
    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_layout() -> BlockLayout {
        BlockLayout {
            paragraphs: Vec::new(),
            width: 0.0,
            height: 0.0,
        }
    }

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    #[test]
    fn hit_does_not_rebuild() {
        let mut cache = LayoutCache::new();
        cache
            .get_or_insert("a", rect(), 0, || Ok(empty_layout()))
            .unwrap();
        cache
            .get_or_insert("a", rect(), 0, || panic!("should not rebuild"))
            .unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn distinct_keys_get_distinct_entries() {
        let mut cache = LayoutCache::new();
        cache
            .get_or_insert("a", rect(), 0, || Ok(empty_layout()))
            .unwrap();
        cache
            .get_or_insert("b", rect(), 0, || Ok(empty_layout()))
            .unwrap();
        cache
            .get_or_insert("a", Rect::new(0.0, 0.0, 50.0, 50.0), 0, || {
                Ok(empty_layout())
            })
            .unwrap();
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn generation_change_misses() {
        let mut cache = LayoutCache::new();
        cache
            .get_or_insert("a", rect(), 0, || Ok(empty_layout()))
            .unwrap();
        let mut rebuilt = false;
        cache
            .get_or_insert("a", rect(), 1, || {
                rebuilt = true;
                Ok(empty_layout())
            })
            .unwrap();
        assert!(rebuilt, "a new generation must rebuild");
    }

    #[test]
    fn least_recently_used_entry_is_evicted() {
        let mut cache = LayoutCache::new();
        for i in 0..MAX_ENTRIES {
            cache
                .get_or_insert(&format!("t{i}"), rect(), 0, || Ok(empty_layout()))
                .unwrap();
        }
        // Touch "t0" so "t1" is now oldest.
        cache
            .get_or_insert("t0", rect(), 0, || panic!("t0 should be cached"))
            .unwrap();
        cache
            .get_or_insert("new", rect(), 0, || Ok(empty_layout()))
            .unwrap();
        assert_eq!(cache.len(), MAX_ENTRIES);
        cache
            .get_or_insert("t0", rect(), 0, || panic!("t0 should survive"))
            .unwrap();
        let mut rebuilt = false;
        cache
            .get_or_insert("t1", rect(), 0, || {
                rebuilt = true;
                Ok(empty_layout())
            })
            .unwrap();
        assert!(rebuilt, "t1 should have been evicted");
    }

    #[test]
    fn failed_build_stores_nothing() {
        let mut cache = LayoutCache::new();
        let result = cache.get_or_insert("a", rect(), 0, || Err(Error::NoSpaceGlyph));
        assert!(result.is_err());
        assert_eq!(cache.len(), 0);
    }

    #[test]
    fn clear_drops_everything() {
        let mut cache = LayoutCache::new();
        cache
            .get_or_insert("a", rect(), 0, || Ok(empty_layout()))
            .unwrap();
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
