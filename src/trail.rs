use std::collections::VecDeque;

#[derive(Clone, Debug)]
pub struct Trail<T> {
    points: VecDeque<T>,
    capacity: usize,
}

impl<T> Trail<T> {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn seeded(capacity: usize, first: T) -> Self {
        let mut trail = Self::new(capacity);
        trail.push(first);
        trail
    }

    pub fn push(&mut self, point: T) {
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn oldest(&self) -> Option<&T> {
        self.points.front()
    }

    pub fn newest(&self) -> Option<&T> {
        self.points.back()
    }

    // (index of older, older, newer), oldest first.
    pub fn segments(&self) -> impl Iterator<Item = (usize, &T, &T)> {
        self.points
            .iter()
            .zip(self.points.iter().skip(1))
            .enumerate()
            .map(|(i, (a, b))| (i, a, b))
    }
}
