//! Selection store holding the characters the user has chosen.
//!
//! The store is the single source of truth for checked state. It has one
//! mutator, [`SelectionStore::set_selection`], which replaces the whole list
//! and notifies every subscriber synchronously before returning.

use crate::domain::Character;
use std::collections::HashSet;
use std::fmt;

/// Handle returned by [`SelectionStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&[Character])>;

/// Plugin-lifetime holder of the current selection.
///
/// Owned by the app shell and handed to the event handler by `&mut`, so each
/// test can build an isolated instance.
///
/// # Example
///
/// ```
/// use charpick::store::SelectionStore;
/// use charpick::domain::Character;
///
/// let mut store = SelectionStore::new();
/// let rick = Character {
///     id: 1,
///     name: "Rick Sanchez".to_string(),
///     image: String::new(),
///     episode: vec![],
/// };
/// store.set_selection(vec![rick]);
/// assert!(store.contains(1));
/// ```
#[derive(Default)]
pub struct SelectionStore {
    selection: Vec<Character>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl SelectionStore {
    /// Creates an empty store with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current selection in the order it was built.
    #[must_use]
    pub fn selection(&self) -> &[Character] {
        &self.selection
    }

    /// Returns `true` if a character with `id` is selected.
    #[must_use]
    pub fn contains(&self, id: u32) -> bool {
        self.selection.iter().any(|c| c.id == id)
    }

    /// Replaces the selection and notifies subscribers in subscription order.
    ///
    /// No validation is performed. Input with repeated ids is stored as given
    /// and reported at `warn` level.
    pub fn set_selection(&mut self, selection: Vec<Character>) {
        let mut seen = HashSet::with_capacity(selection.len());
        if let Some(dup) = selection.iter().find(|c| !seen.insert(c.id)) {
            tracing::warn!(character_id = dup.id, "selection contains duplicate ids");
        }

        tracing::debug!(
            previous = self.selection.len(),
            next = selection.len(),
            subscribers = self.subscribers.len(),
            "selection replaced"
        );

        self.selection = selection;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.selection);
        }
    }

    /// Registers an observer called after every [`set_selection`](Self::set_selection).
    pub fn subscribe<F>(&mut self, subscriber: F) -> SubscriptionId
    where
        F: FnMut(&[Character]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Removes an observer. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }
}

impl fmt::Debug for SelectionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectionStore")
            .field("selection", &self.selection)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn character(id: u32) -> Character {
        Character {
            id,
            name: format!("Character {id}"),
            image: String::new(),
            episode: vec![],
        }
    }

    #[test]
    fn starts_empty() {
        let store = SelectionStore::new();
        assert!(store.selection().is_empty());
        assert!(!store.contains(1));
    }

    #[test]
    fn set_selection_replaces_wholesale() {
        let mut store = SelectionStore::new();
        store.set_selection(vec![character(1), character(2)]);
        store.set_selection(vec![character(3)]);
        assert_eq!(store.selection(), &[character(3)]);
    }

    #[test]
    fn subscribers_are_notified_once_in_order_before_return() {
        let mut store = SelectionStore::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        store.subscribe(move |sel| first.borrow_mut().push(("first", sel.len())));
        let second = Rc::clone(&log);
        store.subscribe(move |sel| second.borrow_mut().push(("second", sel.len())));

        store.set_selection(vec![character(1)]);

        assert_eq!(*log.borrow(), vec![("first", 1), ("second", 1)]);
    }

    #[test]
    fn unsubscribed_observer_is_not_called() {
        let mut store = SelectionStore::new();
        let calls = Rc::new(RefCell::new(0));
        let counter = Rc::clone(&calls);
        let id = store.subscribe(move |_| *counter.borrow_mut() += 1);

        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.set_selection(vec![character(1)]);

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn duplicates_are_stored_as_given() {
        let mut store = SelectionStore::new();
        store.set_selection(vec![character(1), character(1)]);
        assert_eq!(store.selection().len(), 2);
    }
}
