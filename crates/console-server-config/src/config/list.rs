use std::ops::Deref;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A list which distinguishes "not configured" from "configured, but empty".
///
/// Several customization fields change meaning depending on whether they are absent or empty. An
/// absent `enabled` list of catalog types shows every type, while an empty one shows none. The
/// document represents [`OptionalList::Unset`] as an absent (or `null`) key and
/// [`OptionalList::Empty`] as `[]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OptionalList<T> {
    Unset,
    Empty,
    NonEmpty(NonEmptyVec<T>),
}

/// A [`Vec`] holding at least one item. Only [`OptionalList::from_items`] creates one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonEmptyVec<T>(Vec<T>);

impl<T> NonEmptyVec<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T> Deref for NonEmptyVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T> Default for OptionalList<T> {
    fn default() -> Self {
        Self::Unset
    }
}

impl<T> From<Vec<T>> for OptionalList<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_items(items)
    }
}

impl<T> From<Option<Vec<T>>> for OptionalList<T> {
    fn from(items: Option<Vec<T>>) -> Self {
        items.map_or(Self::Unset, Self::from_items)
    }
}

impl<T> OptionalList<T> {
    /// Creates a set list, normalizing an empty `items` to [`OptionalList::Empty`].
    pub fn from_items(items: Vec<T>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::NonEmpty(NonEmptyVec(items))
        }
    }

    pub const fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// Returns the configured items, or [`None`] if the list is unset.
    pub fn as_slice(&self) -> Option<&[T]> {
        match self {
            Self::Unset => None,
            Self::Empty => Some(&[]),
            Self::NonEmpty(items) => Some(items.0.as_slice()),
        }
    }

    pub fn into_option(self) -> Option<Vec<T>> {
        match self {
            Self::Unset => None,
            Self::Empty => Some(Vec::new()),
            Self::NonEmpty(items) => Some(items.into_vec()),
        }
    }

    /// Applies `f` to the configured items, keeping the list unset if it was unset.
    pub fn map_items<U, E>(
        self,
        f: impl FnOnce(Vec<T>) -> Result<Vec<U>, E>,
    ) -> Result<OptionalList<U>, E> {
        match self.into_option() {
            None => Ok(OptionalList::Unset),
            Some(items) => f(items).map(OptionalList::from_items),
        }
    }
}

impl<T: Serialize> Serialize for OptionalList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<Vec<T>>::deserialize(deserializer).map(Self::from)
    }
}
