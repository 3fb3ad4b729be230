//! Per-category aggregation
//!
//! Sums the amounts of one record kind by category. A category that never
//! occurs has no entry; lookups treat it as zero.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

use crate::models::{Category, Money, Record, RecordKind};

/// Summed amounts per category for one kind, plus the total
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryAggregate {
    amounts: BTreeMap<Category, Money>,
    total: Money,
}

impl CategoryAggregate {
    /// Sum of every category
    pub fn total(&self) -> Money {
        self.total
    }

    /// Amount for a category, zero if it never occurred
    pub fn get(&self, category: Category) -> Money {
        self.amounts.get(&category).copied().unwrap_or_default()
    }

    /// Check if a category has an entry
    pub fn contains(&self, category: Category) -> bool {
        self.amounts.contains_key(&category)
    }

    /// Categories with an entry, in declaration order
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.amounts.keys().copied()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.amounts.iter().map(|(c, m)| (*c, *m))
    }

    /// Number of categories with an entry
    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    /// Check if no category has an entry
    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }

    fn add(&mut self, category: Category, amount: Money) {
        *self.amounts.entry(category).or_default() += amount;
        self.total += amount;
    }
}

/// Serialized as `{"total": .., "<Category>": .., ...}`
impl Serialize for CategoryAggregate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.amounts.len() + 1))?;
        map.serialize_entry("total", &self.total)?;
        for (category, amount) in &self.amounts {
            map.serialize_entry(category.name(), amount)?;
        }
        map.end()
    }
}

/// Sum the records of one kind by category
///
/// Records are assumed to be validated already.
pub fn aggregate<'a, I>(records: I, kind: RecordKind) -> CategoryAggregate
where
    I: IntoIterator<Item = &'a Record>,
{
    let mut aggregate = CategoryAggregate::default();
    for record in records.into_iter().filter(|r| r.kind == kind) {
        aggregate.add(record.category, record.amount);
    }
    aggregate
}
