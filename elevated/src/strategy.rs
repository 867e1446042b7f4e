use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::protocol::Command;
use crate::setup::Building;
use crate::Floor;

// Elevator i starts 2*i successor hops past the first floor.
const HOPS_BETWEEN_ELEVATORS: usize = 2;

/// Decides where elevators go. The session handles the handshake, the
/// tick timer and the `done` acknowledgement around it.
pub trait Strategy {
    fn tick_start(&mut self, building: &Building) -> Result<Vec<Command>, Error>;

    fn doors_closed(
        &mut self,
        building: &Building,
        elevator: usize,
        floor: Floor,
    ) -> Result<Vec<Command>, Error>;

    // Any event line the session does not recognize.
    fn other_event(&mut self, _building: &Building, _line: &str) -> Vec<Command> {
        vec![]
    }

    fn tick_done(&mut self) {}
}

/// Sends every elevator round the group's floors in order.
#[derive(Debug, Default)]
pub struct CycleStrategy;

impl Strategy for CycleStrategy {
    fn tick_start(&mut self, building: &Building) -> Result<Vec<Command>, Error> {
        let mut floor = building.first_floor();
        let mut commands = vec![];
        for elevator in 0..building.num_elevators {
            commands.push(Command::Move { elevator, floor });
            floor = building
                .successors
                .advance(floor, HOPS_BETWEEN_ELEVATORS)
                .ok_or(Error::UnknownFloor(floor))?;
        }
        Ok(commands)
    }

    fn doors_closed(
        &mut self,
        building: &Building,
        elevator: usize,
        floor: Floor,
    ) -> Result<Vec<Command>, Error> {
        let next = building
            .successors
            .next(floor)
            .ok_or(Error::UnknownFloor(floor))?;
        Ok(vec![Command::Move {
            elevator,
            floor: next,
        }])
    }
}

/// Moves elevator 0 to random floors: once when a tick starts and once more
/// on the first event of a tick (the tick start line included), never to
/// the floor it was last sent to.
#[derive(Debug)]
pub struct RandomTravelStrategy {
    rng: StdRng,
    last_floor: Option<Floor>,
    responded: bool,
}

impl RandomTravelStrategy {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            last_floor: None,
            responded: false,
        }
    }

    // A group with a single floor has nowhere else to go.
    fn pick(&mut self, floors: &[Floor], avoid: Option<Floor>) -> Floor {
        let others = floors
            .iter()
            .copied()
            .filter(|f| Some(*f) != avoid)
            .collect::<Vec<_>>();
        let pool: &[Floor] = if others.is_empty() { floors } else { &others[..] };
        pool[self.rng.gen_range(0..pool.len())]
    }

    fn respond(&mut self, building: &Building) -> Vec<Command> {
        if self.responded {
            return vec![];
        }
        self.responded = true;
        let floor = self.pick(&building.floors, self.last_floor);
        self.last_floor = Some(floor);
        vec![Command::Move { elevator: 0, floor }]
    }
}

impl Strategy for RandomTravelStrategy {
    fn tick_start(&mut self, building: &Building) -> Result<Vec<Command>, Error> {
        let floor = self.pick(&building.floors, None);
        self.last_floor = Some(floor);
        Ok(vec![Command::Move { elevator: 0, floor }])
    }

    fn doors_closed(
        &mut self,
        building: &Building,
        _elevator: usize,
        _floor: Floor,
    ) -> Result<Vec<Command>, Error> {
        Ok(self.respond(building))
    }

    fn other_event(&mut self, building: &Building, _line: &str) -> Vec<Command> {
        self.respond(building)
    }

    fn tick_done(&mut self) {
        self.responded = false;
    }
}
