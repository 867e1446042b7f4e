use std::collections::HashMap;

use crate::error::Rejection;
use crate::Floor;

/// Cyclic "next floor" lookup over the floors of a group, in the order the
/// engine listed them. The last floor wraps around to the first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuccessorMap {
    next: HashMap<Floor, Floor>,
}

impl SuccessorMap {
    pub fn build(floors: &[Floor]) -> Result<Self, Rejection> {
        let (Some(&first), Some(&last)) = (floors.first(), floors.last()) else {
            return Err(Rejection::EmptyGroup);
        };
        let mut next = HashMap::with_capacity(floors.len());
        for pair in floors.windows(2) {
            if next.insert(pair[0], pair[1]).is_some() {
                return Err(Rejection::DuplicateFloor(pair[0]));
            }
        }
        if next.insert(last, first).is_some() {
            return Err(Rejection::DuplicateFloor(last));
        }
        Ok(Self { next })
    }

    pub fn next(&self, floor: Floor) -> Option<Floor> {
        self.next.get(&floor).copied()
    }

    pub fn advance(&self, floor: Floor, hops: usize) -> Option<Floor> {
        (0..hops).try_fold(floor, |f, _| self.next(f))
    }

    pub fn contains(&self, floor: Floor) -> bool {
        self.next.contains_key(&floor)
    }
}
