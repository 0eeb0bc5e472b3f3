//! The balanced word index.
//!
//! [`Wordlist`] is an AVL tree keyed by word in byte-lexicographic order.
//! Each node carries an occurrence counter, so inserting a word that is
//! already present bumps its count instead of growing the tree.
//!
//! Nodes are owned through `Option<Box<Node>>` links. There are no parent
//! back-references: the recursive insert and remove helpers take a subtree
//! by value and hand back its new root, and the caller relinks it.

use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;

use crate::error::{Result, WordlistError};
use crate::models::{MostFrequent, Statistics, WordEntry};

type Link = Option<Box<Node>>;

#[derive(Clone)]
struct Node {
    word: String,
    count: u64,
    /// Height of the subtree rooted here. A leaf is 0, an absent child -1.
    height: i32,
    left: Link,
    right: Link,
}

impl Node {
    fn new(word: &str) -> Self {
        Node {
            word: word.to_string(),
            count: 1,
            height: 0,
            left: None,
            right: None,
        }
    }

    fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    fn balance(&self) -> i32 {
        height(&self.left) - height(&self.right)
    }
}

fn height(link: &Link) -> i32 {
    link.as_ref().map_or(-1, |node| node.height)
}

/// A word-frequency index backed by a height-balanced binary search tree.
///
/// ```
/// use wordlist_core::Wordlist;
///
/// let mut list = Wordlist::new();
/// for word in ["to", "be", "or", "not", "to", "be"] {
///     list.insert(word);
/// }
///
/// assert_eq!(list.different_words(), 4);
/// assert_eq!(list.total_words(), 6);
/// assert_eq!(list.get_count("to"), 2);
/// assert_eq!(list.most_frequent().unwrap(), ("be", 2));
/// ```
#[derive(Default)]
pub struct Wordlist {
    root: Link,
    len: usize,
}

impl Wordlist {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word`.
    ///
    /// A new word gets its own node with a count of 1 and the tree is
    /// rebalanced on the way back up. A known word only has its counter
    /// incremented; the shape of the tree does not change.
    pub fn insert(&mut self, word: &str) {
        let (root, created) = insert_node(self.root.take(), word);
        self.root = Some(root);
        if created {
            self.len += 1;
        }
    }

    /// Removes `word` and all of its occurrences.
    ///
    /// Returns `false` and leaves the index untouched if the word is absent.
    pub fn remove(&mut self, word: &str) -> bool {
        let (root, found) = remove_node(self.root.take(), word);
        self.root = root;
        if found {
            self.len -= 1;
        }
        found
    }

    /// Returns `true` if `word` has been inserted and not removed since.
    pub fn contains(&self, word: &str) -> bool {
        self.find(word).is_some()
    }

    /// Returns the number of occurrences of `word`, or 0 if it is absent.
    pub fn get_count(&self, word: &str) -> u64 {
        self.find(word).map_or(0, |node| node.count)
    }

    /// Number of unique words.
    pub fn different_words(&self) -> usize {
        self.len
    }

    /// Sum of all occurrence counters.
    pub fn total_words(&self) -> u64 {
        self.iter().map(|(_, _, count)| count).sum()
    }

    /// Number of words that occurred exactly once.
    pub fn singletons(&self) -> usize {
        self.iter().filter(|&(_, _, count)| count == 1).count()
    }

    /// Returns the word with the highest count together with that count.
    ///
    /// Ties go to the lexicographically smallest word.
    ///
    /// # Errors
    ///
    /// Returns [`WordlistError::EmptyCollection`] if the index is empty.
    pub fn most_frequent(&self) -> Result<(&str, u64)> {
        // In-order traversal visits ties smallest-first, so only a strictly
        // larger count may replace the current best.
        self.iter()
            .fold(None, |best, (_, word, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((word, count)),
            })
            .ok_or(WordlistError::EmptyCollection)
    }

    /// Iterates over `(rank, word, count)` in ascending word order.
    ///
    /// Ranks start at 1. Each call starts a fresh traversal.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root.as_deref(), self.len)
    }

    /// Returns `true` if no words are stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Height of the tree: -1 when empty, 0 for a single word.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// Removes every word, releasing each node exactly once.
    pub fn clear(&mut self) {
        let mut stack: Vec<Box<Node>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Materialises the sorted listing as owned [`WordEntry`] values.
    pub fn entries(&self) -> Vec<WordEntry> {
        self.iter()
            .map(|(rank, word, count)| WordEntry {
                rank,
                word: word.to_string(),
                count,
            })
            .collect()
    }

    /// Summarises the index.
    ///
    /// # Errors
    ///
    /// Returns [`WordlistError::EmptyCollection`] if the index is empty.
    pub fn statistics(&self) -> Result<Statistics> {
        let (word, count) = self.most_frequent()?;
        let different_words = self.different_words();
        let singletons = self.singletons();

        Ok(Statistics {
            different_words,
            total_words: self.total_words(),
            most_frequent: MostFrequent {
                word: word.to_string(),
                count,
            },
            singletons,
            singleton_percent: 100.0 * singletons as f64 / different_words as f64,
        })
    }

    fn find(&self, word: &str) -> Option<&Node> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match word.cmp(node.word.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(node),
            };
        }
        None
    }
}

impl Clone for Wordlist {
    fn clone(&self) -> Self {
        Wordlist {
            root: self.root.clone(),
            len: self.len,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.root = source.root.clone();
        self.len = source.len;
    }
}

impl Drop for Wordlist {
    fn drop(&mut self) {
        self.clear();
    }
}

impl PartialEq for Wordlist {
    /// Two indexes are equal when they hold the same words with the same
    /// counts, regardless of tree shape.
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Wordlist {}

impl fmt::Debug for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|(_, word, count)| (word, count)))
            .finish()
    }
}

impl<S: AsRef<str>> Extend<S> for Wordlist {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Wordlist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = Wordlist::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a Wordlist {
    type Item = (usize, &'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`Wordlist`], created by [`Wordlist::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
    rank: usize,
    remaining: usize,
}

impl<'a> Iter<'a> {
    fn new(root: Option<&'a Node>, len: usize) -> Self {
        let mut iter = Iter {
            stack: Vec::new(),
            rank: 0,
            remaining: len,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = (usize, &'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.rank += 1;
        self.remaining -= 1;
        Some((self.rank, node.word.as_str(), node.count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("word", &self.word)
            .field("count", &self.count)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

/// Inserts `word` below `link` and returns the new subtree root, plus
/// whether a node was created.
fn insert_node(link: Link, word: &str) -> (Box<Node>, bool) {
    let Some(mut node) = link else {
        return (Box::new(Node::new(word)), true);
    };

    let created = match word.cmp(node.word.as_str()) {
        Ordering::Less => {
            let (child, created) = insert_node(node.left.take(), word);
            node.left = Some(child);
            created
        }
        Ordering::Greater => {
            let (child, created) = insert_node(node.right.take(), word);
            node.right = Some(child);
            created
        }
        Ordering::Equal => {
            node.count += 1;
            return (node, false);
        }
    };

    if !created {
        return (node, false);
    }

    node.update_height();
    (rebalance_after_insert(node, word), true)
}

/// Restores balance at `node` after `word` was added somewhere below it.
///
/// Single vs. double rotation is decided by comparing the new word with
/// the heavy child's word.
fn rebalance_after_insert(mut node: Box<Node>, word: &str) -> Box<Node> {
    let balance = node.balance();

    if balance > 1 {
        if node
            .left
            .as_ref()
            .is_some_and(|left| word > left.word.as_str())
        {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node
            .right
            .as_ref()
            .is_some_and(|right| word < right.word.as_str())
        {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Removes `word` below `link`. Returns the new subtree root and whether
/// the word was found.
fn remove_node(link: Link, word: &str) -> (Link, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    let found = match word.cmp(node.word.as_str()) {
        Ordering::Less => {
            let (child, found) = remove_node(node.left.take(), word);
            node.left = child;
            found
        }
        Ordering::Greater => {
            let (child, found) = remove_node(node.right.take(), word);
            node.right = child;
            found
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => return (None, true),
            (Some(child), None) | (None, Some(child)) => return (Some(child), true),
            (Some(left), Some(right)) => {
                let (right, successor) = remove_min(right);
                let Node { word, count, .. } = *successor;
                node.word = word;
                node.count = count;
                node.left = Some(left);
                node.right = right;
                true
            }
        },
    };

    if !found {
        return (Some(node), false);
    }

    node.update_height();
    (Some(rebalance_after_remove(node)), true)
}

/// Detaches the leftmost node of the subtree, rebalancing the path to it.
fn remove_min(mut node: Box<Node>) -> (Link, Box<Node>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            (rest, node)
        }
        Some(left) => {
            let (left, min) = remove_min(left);
            node.left = left;
            node.update_height();
            (Some(rebalance_after_remove(node)), min)
        }
    }
}

/// Restores balance at `node` after a removal below it.
///
/// The heavy child's own balance factor picks single vs. double rotation.
fn rebalance_after_remove(mut node: Box<Node>) -> Box<Node> {
    let balance = node.balance();

    if balance > 1 {
        if node.left.as_ref().is_some_and(|left| left.balance() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }

    if balance < -1 {
        if node.right.as_ref().is_some_and(|right| right.balance() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }

    node
}

/// Promotes the right child of `node`. Heights are fixed child first.
fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut new_root) = node.right.take() else {
        return node;
    };
    node.right = new_root.left.take();
    node.update_height();
    new_root.left = Some(node);
    new_root.update_height();
    new_root
}

/// Promotes the left child of `node`. Heights are fixed child first.
fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut new_root) = node.left.take() else {
        return node;
    };
    node.left = new_root.right.take();
    node.update_height();
    new_root.right = Some(node);
    new_root.update_height();
    new_root
}
