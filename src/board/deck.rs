//! Multiset deck with random draws.
//!
//! A `Deck` wraps a plain `Vec` and adds the operations the placement
//! algorithms need: removal by value or index, and uniform random draws
//! with or without removal. Element order carries no meaning.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Errors raised by deck operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error("index {index} out of range for deck of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("cannot draw from an empty deck")]
    Empty,
}

/// An unordered multiset of values supporting draws without replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Deck<T> {
    items: Vec<T>,
}

impl<T> Deck<T> {
    /// Creates an empty deck.
    pub fn new() -> Self {
        Deck { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Removes and returns the element at `index`.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DeckError> {
        if index >= self.items.len() {
            return Err(DeckError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        Ok(self.items.remove(index))
    }

    /// Returns a uniformly random element without removing it.
    pub fn random_draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T, DeckError> {
        if self.items.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(&self.items[rng.gen_range(0..self.items.len())])
    }

    /// Removes and returns a uniformly random element.
    pub fn pop_random_draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<T, DeckError> {
        if self.items.is_empty() {
            return Err(DeckError::Empty);
        }
        let index = rng.gen_range(0..self.items.len());
        Ok(self.items.swap_remove(index))
    }
}

impl<T: PartialEq> Deck<T> {
    /// Removes the first element equal to `value`. Returns false and leaves
    /// the deck untouched when no such element exists.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.items.iter().position(|item| item == value) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    /// Number of elements equal to `value`.
    pub fn count_of(&self, value: &T) -> usize {
        self.items.iter().filter(|item| *item == value).count()
    }
}

impl<T> Default for Deck<T> {
    fn default() -> Self {
        Deck::new()
    }
}

impl<T> From<Vec<T>> for Deck<T> {
    fn from(items: Vec<T>) -> Self {
        Deck { items }
    }
}

impl<T: Clone> From<&[T]> for Deck<T> {
    fn from(items: &[T]) -> Self {
        Deck {
            items: items.to_vec(),
        }
    }
}

impl<T> FromIterator<T> for Deck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Deck {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Deck<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Deck<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Extend<T> for Deck<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn remove_at_returns_element() {
        let mut deck = Deck::from(vec![10, 20, 30]);
        assert_eq!(deck.remove_at(1), Ok(20));
        assert_eq!(deck.as_slice(), &[10, 30]);
    }

    #[test]
    fn remove_at_out_of_range_fails() {
        let mut deck = Deck::from(vec![1, 2]);
        assert_eq!(
            deck.remove_at(2),
            Err(DeckError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn remove_by_value_takes_first_occurrence_only() {
        let mut deck = Deck::from(vec![3, 5, 3, 7]);
        assert!(deck.remove(&3));
        assert_eq!(deck.as_slice(), &[5, 3, 7]);
        assert_eq!(deck.count_of(&3), 1);
    }

    #[test]
    fn remove_missing_value_is_noop() {
        let mut deck = Deck::from(vec![1, 2, 3]);
        assert!(!deck.remove(&9));
        assert_eq!(deck.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn draws_from_empty_deck_fail() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut deck: Deck<u8> = Deck::new();
        assert_eq!(deck.random_draw(&mut rng), Err(DeckError::Empty));
        assert_eq!(deck.pop_random_draw(&mut rng), Err(DeckError::Empty));
    }

    #[test]
    fn random_draw_does_not_remove() {
        let mut rng = SmallRng::seed_from_u64(7);
        let deck = Deck::from(vec!['a', 'b', 'c']);
        for _ in 0..20 {
            let drawn = *deck.random_draw(&mut rng).unwrap();
            assert!(deck.contains(&drawn));
        }
        assert_eq!(deck.len(), 3);
    }

    #[test]
    fn pop_random_draw_empties_deck_without_replacement() {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut deck: Deck<u32> = (0..10).collect();
        let mut drawn = Vec::new();
        while !deck.is_empty() {
            drawn.push(deck.pop_random_draw(&mut rng).unwrap());
        }
        drawn.sort_unstable();
        assert_eq!(drawn, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn pop_random_draw_is_roughly_uniform() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut counts = [0usize; 4];
        for _ in 0..4000 {
            let mut deck = Deck::from(vec![0usize, 1, 2, 3]);
            counts[deck.pop_random_draw(&mut rng).unwrap()] += 1;
        }
        for c in counts {
            assert!((800..1200).contains(&c), "skewed draw counts: {:?}", counts);
        }
    }
}
