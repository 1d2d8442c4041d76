//! Bounded position history used to draw fading orbit paths.
//!
//! A [`Trail`] is a FIFO ring: points are pushed at the tail and, once the
//! configured capacity is reached, the oldest point is dropped from the head.

use glam::DVec2;
use std::collections::VecDeque;

/// Fixed-capacity FIFO of scene positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Trail {
    points: VecDeque<DVec2>,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail holding at most `capacity` points.
    ///
    /// A capacity of zero keeps nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a point, evicting the oldest one when full.
    pub fn push(&mut self, point: DVec2) {
        if self.capacity == 0 {
            return;
        }
        while self.points.len() >= self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Most recently pushed point.
    pub fn latest(&self) -> Option<DVec2> {
        self.points.back().copied()
    }

    /// Points from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = DVec2> + ExactSizeIterator + '_ {
        self.points.iter().copied()
    }
}
