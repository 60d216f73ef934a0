use ahash::AHashSet;
use std::hash::Hash;

use crate::generate::Generator;

/// Collapses consecutive runs of elements whose projected key repeats,
/// emitting only the first of each run.
#[derive(Clone)]
pub struct Dedup<G, F> {
    prev: G,
    key: F,
}

/// Create a stage that collapses consecutive runs by projected key.
pub fn dedup<G, F, K>(prev: G, key: F) -> Dedup<G, F>
where
    G: Generator,
    F: Fn(&G::Item) -> K,
    K: PartialEq,
{
    Dedup { prev, key }
}

impl<G, F, K> Generator for Dedup<G, F>
where
    G: Generator,
    F: Fn(&G::Item) -> K,
    K: PartialEq,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut last: Option<K> = None;
        self.prev.drive(&mut |x| {
            let k = (self.key)(&x);
            if last.as_ref() == Some(&k) {
                return true;
            }
            last = Some(k);
            accept(x)
        })
    }
}

/// Suppresses any element whose projected key has been seen anywhere
/// earlier in the traversal.
///
/// The seen-set is hash-based, so the projection must be `Hash + Eq`
/// (the original design used an ordered set; hashing is the idiomatic
/// choice here).
#[derive(Clone)]
pub struct Uniq<G, F> {
    prev: G,
    key: F,
}

/// Create a stage that suppresses repeated projected keys across the
/// whole traversal.
pub fn uniq<G, F, K>(prev: G, key: F) -> Uniq<G, F>
where
    G: Generator,
    F: Fn(&G::Item) -> K,
    K: Hash + Eq,
{
    Uniq { prev, key }
}

impl<G, F, K> Generator for Uniq<G, F>
where
    G: Generator,
    F: Fn(&G::Item) -> K,
    K: Hash + Eq,
{
    type Item = G::Item;

    fn drive(&self, accept: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        let mut seen = AHashSet::new();
        self.prev.drive(&mut |x| {
            if seen.insert((self.key)(&x)) {
                accept(x)
            } else {
                true
            }
        })
    }
}
