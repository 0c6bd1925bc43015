use std::ops::{Deref, DerefMut};

/// Path and visited markers of the search rooted at one start vertex.
#[derive(Debug)]
pub struct Walk {
    pub path: Vec<usize>,
    visited: Vec<bool>,
}

impl Walk {
    pub fn rooted(n: usize, start: usize) -> Self {
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut path = Vec::with_capacity(n);
        path.push(start);
        Walk { path, visited }
    }

    #[inline]
    pub fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    #[inline]
    pub fn is_visited(&self, v: usize) -> bool {
        self.visited[v]
    }

    /// Appends `v` and marks it visited until the returned guard drops.
    pub fn extend(&mut self, v: usize) -> Extension<'_> {
        assert!(!self.visited[v], "vertex {v} already on the path");
        self.visited[v] = true;
        self.path.push(v);
        Extension { walk: self }
    }
}

/// Tentative extension of a [`Walk`]; retracted on drop.
pub struct Extension<'w> {
    walk: &'w mut Walk,
}

impl Deref for Extension<'_> {
    type Target = Walk;

    fn deref(&self) -> &Walk {
        self.walk
    }
}

impl DerefMut for Extension<'_> {
    fn deref_mut(&mut self) -> &mut Walk {
        self.walk
    }
}

impl Drop for Extension<'_> {
    fn drop(&mut self) {
        if let Some(v) = self.walk.path.pop() {
            self.walk.visited[v] = false;
        }
    }
}
