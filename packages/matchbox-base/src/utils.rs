use std::{collections::HashSet, hash::Hash};

pub const SECONDS_PER_DAY: u64 = 24 * 3_600;

pub fn has_unique_elements<T>(iter: T) -> bool
where
    T: IntoIterator,
    T::Item: Eq + Hash,
{
    let mut uniq = HashSet::new();
    iter.into_iter().all(move |x| uniq.insert(x))
}
