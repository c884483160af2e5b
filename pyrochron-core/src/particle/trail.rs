//! Bounded position history
//!
//! A fixed-capacity ring of recent positions, newest first. Slots beyond
//! `len` are not part of the trail and are never rendered; this replaces
//! the classic `x = -1` "do not draw" sentinel with an explicit length.

use crate::geometry::Point;

/// Number of positions kept per particle
pub const TRAIL_LEN: usize = 10;

/// Ring buffer of the most recent positions
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Trail {
    slots: [Point; TRAIL_LEN],
    /// Index of the newest entry
    head: usize,
    /// Number of valid entries
    len: usize,
}

impl Default for Trail {
    fn default() -> Self {
        Self::new()
    }
}

impl Trail {
    /// Create an empty trail
    pub const fn new() -> Self {
        Self {
            slots: [Point::ZERO; TRAIL_LEN],
            head: 0,
            len: 0,
        }
    }

    /// Record a new position, dropping the oldest one when full
    pub fn push_front(&mut self, p: Point) {
        self.head = (self.head + TRAIL_LEN - 1) % TRAIL_LEN;
        self.slots[self.head] = p;
        if self.len < TRAIL_LEN {
            self.len += 1;
        }
    }

    /// Number of valid entries
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no position has been recorded since the last clear
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Entry `index` positions back from the newest, if recorded
    pub fn get(&self, index: usize) -> Option<Point> {
        if index < self.len {
            Some(self.slots[(self.head + index) % TRAIL_LEN])
        } else {
            None
        }
    }

    /// Most recently recorded position
    pub fn newest(&self) -> Option<Point> {
        self.get(0)
    }

    /// Iterate entries newest first
    pub fn iter(&self) -> impl Iterator<Item = Point> + '_ {
        (0..self.len).map(move |i| self.slots[(self.head + i) % TRAIL_LEN])
    }

    /// Consecutive pairs of entries, i.e. the polyline segments to draw
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.iter().zip(self.iter().skip(1))
    }
}

impl PartialEq for Trail {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for Trail {}
