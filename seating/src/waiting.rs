//! Waiting queue - groups that could not be seated on arrival

use shared::models::{Group, GroupId};
use std::collections::VecDeque;

/// FIFO of waiting groups, arrival order preserved
#[derive(Debug, Default)]
pub struct WaitingQueue {
    groups: VecDeque<Group>,
}

impl WaitingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group, returning its 0-based position
    pub fn push_back(&mut self, group: Group) -> usize {
        self.groups.push_back(group);
        self.groups.len() - 1
    }

    pub fn position(&self, group_id: GroupId) -> Option<usize> {
        self.groups.iter().position(|g| g.id() == group_id)
    }

    /// Take a group out of the queue wherever it sits
    pub fn remove(&mut self, group_id: GroupId) -> Option<Group> {
        let pos = self.position(group_id)?;
        self.groups.remove(pos)
    }

    /// Offer waiting groups to `try_seat` in arrival order.
    ///
    /// Groups for which `try_seat` returns `true` leave the queue; the
    /// number served is returned. With `stop_at_first_miss` the walk ends at the first group
    /// that could not be seated; otherwise later groups still get a chance.
    /// Unserved groups keep their relative order.
    pub fn serve<F>(&mut self, stop_at_first_miss: bool, mut try_seat: F) -> usize
    where
        F: FnMut(&Group) -> bool,
    {
        let mut served = 0;
        let mut remaining = VecDeque::with_capacity(self.groups.len());
        let mut blocked = false;

        while let Some(group) = self.groups.pop_front() {
            if !blocked && try_seat(&group) {
                served += 1;
                continue;
            }
            blocked = stop_at_first_miss;
            remaining.push_back(group);
        }

        self.groups = remaining;
        served
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }

    pub fn to_vec(&self) -> Vec<Group> {
        self.groups.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
