use std::fmt;

use tracing::{debug, trace, warn};

use crate::config::{ListConfig, PositionPolicy};
use crate::error::{ListError, Result};

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// A singly linked list. Every node is owned either by `head` or by the
/// `next` link of the node before it.
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    size: usize,
    config: ListConfig,
}

/// Consuming iterator, pops nodes off the head.
pub struct IntoIter<T>(LinkedList<T>);

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }
}

/// Borrowing head-to-tail iterator. Cloning it gives an independent cursor.
pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter { next: self.next }
    }
}

/// Head-to-tail iterator over mutable references.
pub struct IterMut<'a, T> {
    next: Option<&'a mut Node<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.take().map(|node| {
            self.next = node.next.as_deref_mut();
            &mut node.data
        })
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::with_config(ListConfig::default())
    }

    pub fn with_config(config: ListConfig) -> Self {
        LinkedList {
            head: None,
            size: 0,
            config,
        }
    }

    /// Builds a list from the first `count` values, keeping their order.
    ///
    /// A negative `count` is rejected with [`ListError::InvalidCount`], and
    /// fewer than `count` values with [`ListError::MissingValues`]. Extra
    /// values are left unread.
    pub fn construct<I>(count: i64, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        Self::construct_with_config(ListConfig::default(), count, values)
    }

    pub fn construct_with_config<I>(config: ListConfig, count: i64, values: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
    {
        let expected = usize::try_from(count).map_err(|_| {
            warn!(count, "rejecting negative element count");
            ListError::InvalidCount(count)
        })?;

        let mut list = LinkedList::with_config(config);
        let found = list.append_all(values.into_iter().take(expected));
        if found < expected {
            warn!(expected, found, "not enough values to build the list");
            return Err(ListError::MissingValues { expected, found });
        }

        debug!(len = found, "constructed list");
        Ok(list)
    }

    pub fn config(&self) -> ListConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Head-to-tail traversal for rendering. An empty list is reported as
    /// [`ListError::EmptyList`] instead of an empty iterator.
    pub fn display(&self) -> Result<Iter<'_, T>> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }
        Ok(self.iter())
    }

    /// Counts nodes by walking the chain from head.
    pub fn count_nodes(&self) -> usize {
        let count = self.iter().count();
        debug_assert_eq!(self.size, count);
        count
    }

    pub fn search(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        let found = self.iter().any(|data| data == value);
        trace!(found, "searched list");
        found
    }

    pub fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|x| &x.data)
    }

    /// Element at a 0-indexed position.
    pub fn get(&self, position: usize) -> Option<&T> {
        self.iter().nth(position)
    }

    pub fn insert_at_beginning(&mut self, data: T) {
        self.head = Some(Box::new(Node { data, next: self.head.take() }));
        self.size += 1;
    }

    pub fn insert_at_end(&mut self, data: T) {
        self.append_all(std::iter::once(data));
    }

    /// Links `data` in so that it ends up at `position`.
    ///
    /// Positions past the last node follow the list's [`PositionPolicy`].
    pub fn insert_at_position(&mut self, data: T, position: usize) -> Result<()> {
        if position == 0 {
            self.insert_at_beginning(data);
            return Ok(());
        }

        if position >= self.size {
            if position > self.size && self.config.position_policy == PositionPolicy::Strict {
                warn!(position, len = self.size, "insert position out of range");
                return Err(ListError::PositionOutOfRange { position, len: self.size });
            }
            self.insert_at_end(data);
            return Ok(());
        }

        let len = self.size;
        let prev = self.node_at_mut(position - 1)
            .ok_or(ListError::PositionOutOfRange { position, len })?;
        let next = prev.next.take();
        prev.next = Some(Box::new(Node { data, next }));
        self.size += 1;
        debug!(position, "inserted node");
        Ok(())
    }

    pub fn delete_at_beginning(&mut self) -> Result<T> {
        self.pop().ok_or(ListError::EmptyList)
    }

    pub fn delete_at_end(&mut self) -> Result<T> {
        match self.size {
            0 => Err(ListError::EmptyList),
            1 => self.delete_at_beginning(),
            len => {
                let prev = self.node_at_mut(len - 2).ok_or(ListError::EmptyList)?;
                let last = prev.next.take().ok_or(ListError::EmptyList)?;
                self.size -= 1;
                Ok(last.data)
            }
        }
    }

    pub fn delete_at_position(&mut self, position: usize) -> Result<T> {
        if self.is_empty() {
            return Err(ListError::EmptyList);
        }

        let len = self.size;
        if position >= len {
            warn!(position, len, "delete position out of range");
            return Err(ListError::PositionOutOfRange { position, len });
        }

        if position == 0 {
            return self.delete_at_beginning();
        }

        let prev = self.node_at_mut(position - 1)
            .ok_or(ListError::PositionOutOfRange { position, len })?;
        let mut removed = prev.next.take()
            .ok_or(ListError::PositionOutOfRange { position, len })?;
        prev.next = removed.next.take();
        self.size -= 1;
        debug!(position, "deleted node");
        Ok(removed.data)
    }

    /// Unlinks the first node holding `value`. Returns `None` and leaves the
    /// list untouched when nothing matches.
    pub fn delete_by_value(&mut self, value: &T) -> Option<T>
    where
        T: PartialEq,
    {
        let mut cursor = &mut self.head;
        while cursor.as_ref().is_some_and(|node| node.data != *value) {
            cursor = &mut cursor.as_mut()?.next;
        }

        let mut removed = cursor.take()?;
        *cursor = removed.next.take();
        self.size -= 1;
        debug!(len = self.size, "deleted node by value");
        Some(removed.data)
    }

    /// Reverses the links in place.
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Element at index `len / 2`, so even lengths give the upper middle
    /// (`[1, 2, 3, 4]` yields `3`).
    ///
    /// Both cursors start on the head; `fast` moves two links for each link
    /// `slow` moves.
    pub fn find_middle(&self) -> Result<&T> {
        let mut slow = self.head.as_deref().ok_or(ListError::EmptyList)?;
        let mut fast = Some(slow);
        while let (Some(step), Some(leap)) =
            (slow.next.as_deref(), fast.and_then(|node| node.next.as_deref()))
        {
            slow = step;
            fast = leap.next.as_deref();
        }
        Ok(&slow.data)
    }

    /// Releases every node, head first, and returns how many were released.
    /// Calling it on an empty list does nothing.
    pub fn destroy(&mut self) -> usize {
        let mut released = 0;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            released += 1;
        }
        self.size = 0;
        if released > 0 {
            debug!(released, "released list nodes");
        }
        released
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head.as_deref() }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut { next: self.head.as_deref_mut() }
    }

    fn pop(&mut self) -> Option<T> {
        self.head.take().map(|x| {
            self.head = x.next;
            self.size -= 1;
            x.data
        })
    }

    fn node_at_mut(&mut self, index: usize) -> Option<&mut Node<T>> {
        let mut current = self.head.as_deref_mut();
        for _ in 0..index {
            current = current?.next.as_deref_mut();
        }
        current
    }

    // Walks to the tail once, then links each value after the previous one.
    fn append_all<I>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }

        let mut appended = 0;
        for data in values {
            let node = cursor.insert(Box::new(Node { data, next: None }));
            cursor = &mut node.next;
            appended += 1;
        }
        self.size += appended;
        appended
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.destroy();
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = LinkedList::with_config(self.config);
        list.append_all(self.iter().cloned());
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.append_all(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_all(iter);
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
