#![forbid(unsafe_code)]

//! Partitioning toasts by screen position.
//!
//! Groups appear in the order their position was first seen; members keep
//! their insertion order. The grouping is derived: containers recompute it
//! from the flat record list whenever it is requested.

use qtoast_core::{ToastPosition, ToastRecord};

/// Anything anchored to a screen position.
pub trait Positioned {
    fn position(&self) -> ToastPosition;
}

impl Positioned for ToastRecord {
    fn position(&self) -> ToastPosition {
        self.position
    }
}

impl<T: Positioned> Positioned for &T {
    fn position(&self) -> ToastPosition {
        (**self).position()
    }
}

/// Toasts sharing one position, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastGroup<T> {
    pub position: ToastPosition,
    pub items: Vec<T>,
}

/// All non-empty position groups.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionGroups<T> {
    groups: Vec<ToastGroup<T>>,
}

impl<T> Default for PositionGroups<T> {
    fn default() -> Self {
        Self { groups: Vec::new() }
    }
}

impl<T> PositionGroups<T> {
    /// Members of the group at `position`, if any toast targets it.
    #[must_use]
    pub fn get(&self, position: ToastPosition) -> Option<&[T]> {
        self.groups
            .iter()
            .find(|g| g.position == position)
            .map(|g| g.items.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ToastGroup<T>> {
        self.groups.iter()
    }

    /// Positions in first-seen order.
    pub fn positions(&self) -> impl Iterator<Item = ToastPosition> + '_ {
        self.groups.iter().map(|g| g.position)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of toasts across all groups.
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<ToastGroup<T>> {
        self.groups
    }
}

impl<T> IntoIterator for PositionGroups<T> {
    type Item = ToastGroup<T>;
    type IntoIter = std::vec::IntoIter<ToastGroup<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PositionGroups<T> {
    type Item = &'a ToastGroup<T>;
    type IntoIter = std::slice::Iter<'a, ToastGroup<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition `items` by position, preserving insertion order.
pub fn group_by_position<T, I>(items: I) -> PositionGroups<T>
where
    T: Positioned,
    I: IntoIterator<Item = T>,
{
    let mut groups: Vec<ToastGroup<T>> = Vec::new();
    for item in items {
        let position = item.position();
        match groups.iter_mut().find(|g| g.position == position) {
            Some(group) => group.items.push(item),
            None => groups.push(ToastGroup {
                position,
                items: vec![item],
            }),
        }
    }
    PositionGroups { groups }
}
