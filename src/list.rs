use std::fmt;

use crate::error::{Error, Result};

pub const DEFAULT_SEPARATOR: &str = " -> ";

/*
节点保存在 Vec 里，用下标代替指针：
    head / tail / next 都是 Option<usize>
    pop 之后槽位的值立即被 drop，下标进入 free_list，下一次 push 复用
*/
struct Node<T> {
    elem: Option<T>,
    next: Option<usize>,
}

/// A singly-linked list with stack discipline: `push` appends at the tail,
/// `pop` removes from the tail.
pub struct List<T> {
    nodes: Vec<Node<T>>,
    free_list: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    size: usize,
}

impl<T> List<T> {
    pub fn new() -> Self {
        List {
            nodes: Vec::new(),
            free_list: Vec::new(),
            head: None,
            tail: None,
            size: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none() && self.tail.is_none()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn push(&mut self, elem: T) {
        let index = self.allocate(elem);

        match self.tail {
            None => self.head = Some(index),
            // with a single node, head and tail are the same slot
            Some(tail) => self.nodes[tail].next = Some(index),
        }

        self.tail = Some(index);
        self.size += 1;
    }

    /// Removes the tail and returns its value.
    ///
    /// Fails with [`Error::EmptyCollection`] and leaves the list untouched
    /// when there is nothing to remove.
    pub fn pop(&mut self) -> Result<T> {
        let tail = self.tail.ok_or(Error::EmptyCollection)?;

        let new_tail = match self.size {
            1 => None,
            2 => self.head,
            _ => Some(self.predecessor(tail)?),
        };

        match new_tail {
            Some(index) => self.nodes[index].next = None,
            None => self.head = None,
        }
        self.tail = new_tail;
        self.size -= 1;

        self.release(tail)
    }

    pub fn peek(&self) -> Result<&T> {
        let tail = self.tail.ok_or(Error::EmptyCollection)?;
        self.nodes[tail]
            .elem
            .as_ref()
            .ok_or_else(|| Error::Internal(format!("tail slot {} is vacant", tail)))
    }

    /// Pops until the list is empty, returning how many values were removed.
    pub fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.pop().is_ok() {
            removed += 1;
        }
        removed
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            next: self.head,
        }
    }

    pub fn render(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        self.iter()
            .map(|elem| elem.to_string())
            .collect::<Vec<_>>()
            .join(separator)
    }

    // Internal: walk from head to the node whose next is `target`
    fn predecessor(&self, target: usize) -> Result<usize> {
        let mut current = self.head;
        while let Some(index) = current {
            let next = self.nodes[index].next;
            if next == Some(target) {
                return Ok(index);
            }
            current = next;
        }
        Err(Error::Internal(format!(
            "slot {} is not reachable from head",
            target
        )))
    }

    // Internal: Allocate a node, reusing a released slot if there is one
    fn allocate(&mut self, elem: T) -> usize {
        let node = Node {
            elem: Some(elem),
            next: None,
        };

        if let Some(index) = self.free_list.pop() {
            self.nodes[index] = node;
            index
        } else {
            let index = self.nodes.len();
            self.nodes.push(node);
            index
        }
    }

    // Internal: Drop the slot's link and hand back its value
    fn release(&mut self, index: usize) -> Result<T> {
        let node = &mut self.nodes[index];
        node.next = None;
        let elem = node.elem.take();
        self.free_list.push(index);
        elem.ok_or_else(|| Error::Internal(format!("slot {} released twice", index)))
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for List<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.push(elem);
        }
    }
}

impl<T> FromIterator<T> for List<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = List::new();
        list.extend(iter);
        list
    }
}

impl<T: fmt::Debug> fmt::Debug for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for List<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(DEFAULT_SEPARATOR))
    }
}

/// Head-to-tail traversal. Creating a new one always restarts from head.
pub struct Iter<'a, T> {
    list: &'a List<T>,
    next: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.next?;
        let node = &self.list.nodes[index];
        self.next = node.next;
        node.elem.as_ref()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
