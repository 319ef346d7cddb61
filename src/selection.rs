use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Set of selected item identifiers
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection(HashSet<i64>);

impl Selection {
    pub fn new() -> Self {
        Self(HashSet::new())
    }

    /// Insert `item` if absent, remove it if present. Returns `true` if it is
    /// now selected.
    pub fn toggle(&mut self, item: i64) -> bool {
        if self.0.remove(&item) {
            false
        } else {
            self.0.insert(item);
            true
        }
    }

    /// Identifiers in ascending order
    pub fn sorted(&self) -> Vec<i64> {
        let mut items: Vec<i64> = self.0.iter().copied().collect();
        items.sort_unstable();
        items
    }
}

impl std::ops::Deref for Selection {
    type Target = HashSet<i64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Selection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl std::iter::FromIterator<i64> for Selection {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<i64> for Selection {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, iter: I) {
        self.0.extend(iter)
    }
}
