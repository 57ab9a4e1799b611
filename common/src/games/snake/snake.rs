use std::collections::{HashSet, VecDeque};

use super::types::Point;

/// Snake body, head first. `body_set` mirrors `body` so occupancy checks stay
/// constant time; the two are only changed together.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Point>,
    body_set: HashSet<Point>,
}

impl Snake {
    pub fn new(start_pos: Point) -> Self {
        let mut body = VecDeque::new();
        body.push_back(start_pos);
        let mut body_set = HashSet::new();
        body_set.insert(start_pos);

        Self { body, body_set }
    }

    /// Builds a body from head-first cells. Returns `None` for an empty or
    /// self-overlapping body.
    pub fn from_cells(cells: &[Point]) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let body: VecDeque<Point> = cells.iter().copied().collect();
        let body_set: HashSet<Point> = cells.iter().copied().collect();
        if body_set.len() != body.len() {
            return None;
        }
        Some(Self { body, body_set })
    }

    pub fn head(&self) -> Point {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn contains(&self, point: &Point) -> bool {
        self.body_set.contains(point)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Point> {
        self.body.iter()
    }

    pub(crate) fn push_head(&mut self, point: Point) {
        self.body.push_front(point);
        self.body_set.insert(point);
    }

    /// Drops the tail, but never the last remaining cell.
    pub(crate) fn pop_tail(&mut self) -> Option<Point> {
        if self.body.len() <= 1 {
            return None;
        }
        let tail = self.body.pop_back()?;
        self.body_set.remove(&tail);
        Some(tail)
    }
}
