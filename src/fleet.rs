//! Per-player ship inventory and remaining hit points.

use crate::common::InputError;
use crate::config::{MAX_SHIPS, MIN_SHIPS};
use crate::ship::ShipType;

/// Ships `1..=count` and how many unhit cells each has left.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    count: usize,
    remaining: [u8; MAX_SHIPS],
}

impl Fleet {
    /// Build a fleet of `count` ships; `count` must be in `1..=5`.
    pub fn new(count: usize) -> Result<Self, InputError> {
        if !(MIN_SHIPS..=MAX_SHIPS).contains(&count) {
            return Err(InputError::InvalidShipCount);
        }
        let remaining = core::array::from_fn(|i| if i < count { i as u8 + 1 } else { 0 });
        Ok(Self { count, remaining })
    }

    /// Number of ships in the fleet.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Descriptors in placement order: ship `i` has length `i`.
    pub fn ship_types(&self) -> impl Iterator<Item = ShipType> {
        (1..=self.count as u8).map(ShipType::new)
    }

    /// Unhit cells left on ship `id`; zero for ids outside the fleet.
    pub fn remaining_for(&self, id: u8) -> u8 {
        self.slot(id).map(|i| self.remaining[i]).unwrap_or(0)
    }

    /// Record one hit on ship `id` and return what is left of it.
    ///
    /// Board cells only go `Ship -> Hit` once, so a ship is never
    /// decremented past zero.
    pub fn decrement(&mut self, id: u8) -> u8 {
        match self.slot(id) {
            Some(i) => {
                debug_assert!(self.remaining[i] > 0, "ship {} decremented past zero", id);
                self.remaining[i] = self.remaining[i].saturating_sub(1);
                self.remaining[i]
            }
            None => 0,
        }
    }

    /// `true` once every ship's counter reached zero.
    pub fn is_destroyed(&self) -> bool {
        self.remaining[..self.count].iter().all(|&r| r == 0)
    }

    /// Total unhit cells across the fleet.
    pub fn cells_remaining(&self) -> usize {
        self.remaining.iter().map(|&r| r as usize).sum()
    }

    fn slot(&self, id: u8) -> Option<usize> {
        let i = (id as usize).checked_sub(1)?;
        (i < self.count).then_some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_follow_ids() {
        let fleet = Fleet::new(4).unwrap();
        let lens: [usize; 4] = {
            let mut it = fleet.ship_types().map(|s| s.length());
            core::array::from_fn(|_| it.next().unwrap())
        };
        assert_eq!(lens, [1, 2, 3, 4]);
        assert_eq!(fleet.cells_remaining(), 10);
    }

    #[test]
    fn rejects_counts_outside_range() {
        assert_eq!(Fleet::new(0), Err(InputError::InvalidShipCount));
        assert_eq!(Fleet::new(6), Err(InputError::InvalidShipCount));
    }

    #[test]
    fn unknown_ids_are_inert() {
        let mut fleet = Fleet::new(2).unwrap();
        assert_eq!(fleet.remaining_for(3), 0);
        assert_eq!(fleet.decrement(3), 0);
        assert_eq!(fleet.remaining_for(2), 2);
    }
}
