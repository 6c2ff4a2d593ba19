use std::collections::{BTreeMap, BTreeSet};

use crate::util::canonical::normalize;

/// Slug → name lookup derived from one batch of names. Ordered by slug so
/// page enumeration is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugMap {
    entries: BTreeMap<String, String>,
}

/// Slug that more than one distinct name normalized to, with the name that
/// ended up in the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlugCollision {
    pub slug: String,
    pub names: Vec<String>,
    pub winner: String,
}

impl SlugMap {
    pub fn get(&self, slug: &str) -> Option<&str> {
        self.entries.get(slug).map(String::as_str)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(slug, name)| (slug.as_str(), name.as_str()))
    }

    /// Report slugs shared by several distinct names in `names`. The map
    /// itself is left as built; this only describes what last-write-wins hid.
    pub fn collisions<I, S>(&self, names: I) -> Vec<SlugCollision>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for name in names {
            let name = name.as_ref();
            grouped
                .entry(normalize(name))
                .or_default()
                .insert(name.to_string());
        }

        grouped
            .into_iter()
            .filter(|(_, names)| names.len() > 1)
            .filter_map(|(slug, names)| {
                let winner = self.get(&slug)?.to_string();
                Some(SlugCollision {
                    slug,
                    names: names.into_iter().collect(),
                    winner,
                })
            })
            .collect()
    }
}

impl IntoIterator for SlugMap {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Build a slug → name lookup from a batch of names.
///
/// When two names normalize to the same slug the one seen last wins, without
/// any report. Names with nothing retainable land under the empty slug.
pub fn build_slug_map<I, S>(names: I) -> SlugMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut entries = BTreeMap::new();
    for name in names {
        let name = name.into();
        entries.insert(normalize(&name), name);
    }
    SlugMap { entries }
}
