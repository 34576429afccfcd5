use hashbrown::HashMap;

use super::char_trait::PatternChar;
use super::state::StateId;

/// Past this many edges a state switches from a sorted vector to a hash table.
///
/// Roots of CJK vocabularies fan out to thousands of first characters, and a
/// scan probes the root on nearly every character.
pub(crate) const TABLE_THRESHOLD: usize = 16;

/// A compact representation of the outgoing edges of a state that doesn't
/// allocate until there are at least three edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Edges<C: PatternChar> {
    /// No edges.
    None,
    /// Exactly one edge.
    One([(C, StateId); 1]),
    /// Exactly two edges, sorted by label.
    Two([(C, StateId); 2]),
    /// Three up to [`TABLE_THRESHOLD`] edges, sorted by label.
    Many(Vec<(C, StateId)>),
    /// More than [`TABLE_THRESHOLD`] edges.
    Table(HashMap<C, StateId>),
}

impl<C: PatternChar> Edges<C> {
    /// Returns the state that `letter`'s edge leads to, or None if no such edge exists.
    #[inline]
    pub(crate) fn get(&self, letter: C) -> Option<StateId> {
        match self {
            Edges::None => None,
            Edges::One([(ch, to)]) => (*ch == letter).then_some(*to),
            Edges::Two([(c1, t1), (c2, t2)]) => {
                if letter == *c1 {
                    Some(*t1)
                } else if letter == *c2 {
                    Some(*t2)
                } else {
                    None
                }
            }
            Edges::Many(edges) => edges
                .binary_search_by_key(&letter, |&(ch, _)| ch)
                .ok()
                .map(|i| edges[i].1),
            Edges::Table(table) => table.get(&letter).copied(),
        }
    }

    /// Adds an edge. The label must not be present yet.
    pub(crate) fn insert(&mut self, letter: C, to: StateId) {
        debug_assert!(self.get(letter).is_none(), "edge {letter:?} already exists");
        let e = (letter, to);
        match self {
            Edges::None => *self = Edges::One([e]),
            Edges::One([e1]) => {
                let e1 = *e1;
                *self = if letter < e1.0 {
                    Edges::Two([e, e1])
                } else {
                    Edges::Two([e1, e])
                }
            }
            Edges::Two(pair) => {
                let mut v = vec![pair[0], pair[1], e];
                v.sort_by_key(|&(c, _)| c);
                *self = Edges::Many(v);
            }
            Edges::Many(edges) if edges.len() < TABLE_THRESHOLD => {
                let pos = edges.partition_point(|&(c, _)| c < letter);
                edges.insert(pos, e);
            }
            Edges::Many(edges) => {
                let mut table: HashMap<C, StateId> = edges.drain(..).collect();
                table.insert(letter, to);
                *self = Edges::Table(table);
            }
            Edges::Table(table) => {
                table.insert(letter, to);
            }
        }
    }

    /// Returns an iterator over all edges.
    ///
    /// Edges are yielded in label order except for hash-table states.
    pub(crate) fn iter(&self) -> EdgeIter<'_, C> {
        match self {
            Edges::None => EdgeIter::Slice(Default::default()),
            Edges::One(edges) => EdgeIter::Slice(edges.iter()),
            Edges::Two(edges) => EdgeIter::Slice(edges.iter()),
            Edges::Many(edges) => EdgeIter::Slice(edges.iter()),
            Edges::Table(table) => EdgeIter::Table(table.iter()),
        }
    }
}

/// An iterator over the outgoing edges of a state.
#[derive(Clone)]
pub(crate) enum EdgeIter<'a, C: PatternChar> {
    Slice(std::slice::Iter<'a, (C, StateId)>),
    Table(hashbrown::hash_map::Iter<'a, C, StateId>),
}

impl<C: PatternChar> Iterator for EdgeIter<'_, C> {
    type Item = (C, StateId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            EdgeIter::Slice(it) => it.next().copied(),
            EdgeIter::Table(it) => it.next().map(|(&c, &to)| (c, to)),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            EdgeIter::Slice(it) => it.size_hint(),
            EdgeIter::Table(it) => it.size_hint(),
        }
    }
}

impl<C: PatternChar> ExactSizeIterator for EdgeIter<'_, C> {}
