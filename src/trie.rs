//! PrefixTree: a char trie over whole words.

use crate::write_list;
use core::fmt;
use hashbrown::HashMap;

#[derive(Clone, Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    ends_word: bool,
}

impl TrieNode {
    fn walk(&self, path: &str) -> Option<&TrieNode> {
        path.chars()
            .try_fold(self, |node, c| node.children.get(&c))
    }

    fn collect_words(&self, prefix: &mut String, out: &mut Vec<String>) {
        if self.ends_word {
            out.push(prefix.clone());
        }
        for (&c, child) in &self.children {
            prefix.push(c);
            child.collect_words(prefix, out);
            prefix.pop();
        }
    }

    /// Unmarks `rest` below this node. Returns `None` when the word is not
    /// present, otherwise whether this node is now dead weight.
    fn remove(&mut self, mut rest: core::str::Chars<'_>) -> Option<bool> {
        match rest.next() {
            None => {
                if !self.ends_word {
                    return None;
                }
                self.ends_word = false;
            }
            Some(c) => {
                let child = self.children.get_mut(&c)?;
                if child.remove(rest)? {
                    self.children.remove(&c);
                }
            }
        }
        Some(self.children.is_empty() && !self.ends_word)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PrefixTree {
    root: TrieNode,
    word_count: usize,
}

impl PrefixTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns false for the empty string and for words already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }
        let node = word
            .chars()
            .fold(&mut self.root, |node, c| node.children.entry(c).or_default());
        if node.ends_word {
            return false;
        }
        node.ends_word = true;
        self.word_count += 1;
        true
    }

    /// Unmarks `word` and prunes the nodes that no longer lead anywhere.
    pub fn remove(&mut self, word: &str) -> bool {
        if word.is_empty() || self.root.remove(word.chars()).is_none() {
            return false;
        }
        self.word_count -= 1;
        true
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.root.walk(prefix).is_some()
    }

    pub fn contains_word(&self, word: &str) -> bool {
        !word.is_empty() && self.root.walk(word).is_some_and(|n| n.ends_word)
    }

    /// Every stored word starting with `prefix`, sorted. `None` when no path
    /// spells `prefix` or `prefix` is empty.
    pub fn words_with_prefix(&self, prefix: &str) -> Option<Vec<String>> {
        if prefix.is_empty() {
            return None;
        }
        let node = self.root.walk(prefix)?;
        let mut words = Vec::new();
        node.collect_words(&mut prefix.to_string(), &mut words);
        words.sort();
        Some(words)
    }

    /// All stored words, sorted.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        self.root.collect_words(&mut String::new(), &mut words);
        words.sort();
        words
    }
}

impl<'a> Extend<&'a str> for PrefixTree {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for w in iter {
            self.insert(w);
        }
    }
}

impl<'a> FromIterator<&'a str> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut t = Self::new();
        t.extend(iter);
        t
    }
}

impl fmt::Display for PrefixTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.words())
    }
}
