use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Returned when a [`NonEmptyList`] is built from an empty collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("list must contain at least one element")]
pub struct EmptyListError;

/// A list with at least one element.
///
/// The only constructors are [`NonEmptyList::new`], [`NonEmptyList::singleton`]
/// and `TryFrom<Vec<T>>`, so an empty value cannot exist. Serialises as a
/// plain sequence; deserialising an empty sequence fails.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmptyList<T>(Vec<T>);

impl<T> NonEmptyList<T> {
    /// Creates a list from its first element and the remaining ones.
    pub fn new(head: T, tail: Vec<T>) -> Self {
        let mut items = Vec::with_capacity(tail.len() + 1);
        items.push(head);
        items.extend(tail);
        Self(items)
    }

    /// Creates a list holding exactly one element.
    pub fn singleton(item: T) -> Self {
        Self(vec![item])
    }

    /// Returns the first element.
    pub fn first(&self) -> &T {
        &self.0[0]
    }

    /// Number of elements, always at least one.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; present for API symmetry with `Vec`.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }

    /// Splits the list into its first element and the rest.
    pub fn into_parts(self) -> (T, Vec<T>) {
        let mut items = self.0;
        let head = items.remove(0);
        (head, items)
    }

    /// Applies `f` to every element, keeping the non-empty guarantee.
    pub fn map<U, F>(self, f: F) -> NonEmptyList<U>
    where
        F: FnMut(T) -> U,
    {
        NonEmptyList(self.0.into_iter().map(f).collect())
    }
}

impl<T> TryFrom<Vec<T>> for NonEmptyList<T> {
    type Error = EmptyListError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            Err(EmptyListError)
        } else {
            Ok(Self(items))
        }
    }
}

impl<T> From<NonEmptyList<T>> for Vec<T> {
    fn from(list: NonEmptyList<T>) -> Self {
        list.0
    }
}

impl<T> AsRef<[T]> for NonEmptyList<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T> IntoIterator for NonEmptyList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a NonEmptyList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Serialize> Serialize for NonEmptyList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for NonEmptyList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(items).map_err(serde::de::Error::custom)
    }
}
