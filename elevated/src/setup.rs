use arena_api::textapi;

use crate::error::Rejection;
use crate::successor::SuccessorMap;
use crate::Floor;

// More elevators than any building the engine generates.
pub const MAX_ELEVATORS: usize = 1024;

/// What the bot knows about the building once the handshake is over.
#[derive(Clone, Debug)]
pub struct Building {
    pub num_elevators: usize,
    pub floors: Vec<Floor>,
    pub successors: SuccessorMap,
}

impl Building {
    pub fn new(num_elevators: usize, floors: Vec<Floor>) -> Result<Self, Rejection> {
        let successors = SuccessorMap::build(&floors)?;
        Ok(Self {
            num_elevators,
            floors,
            successors,
        })
    }

    // Never empty: construction fails on an empty group.
    pub fn first_floor(&self) -> Floor {
        self.floors[0]
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Progress {
    Pending,
    Complete,
}

/// Consumes handshake lines one at a time until `done`.
#[derive(Debug)]
pub struct SetupParser {
    num_elevators: usize,
    floors: Vec<Floor>,
    awaiting_group: bool,
}

impl Default for SetupParser {
    fn default() -> Self {
        Self {
            num_elevators: 1,
            floors: vec![],
            awaiting_group: false,
        }
    }
}

impl SetupParser {
    pub fn handle_line(&mut self, line: &str) -> Result<Progress, Rejection> {
        if self.awaiting_group {
            self.awaiting_group = false;
            self.floors = parse_group(line)?;
            log::debug!("Got floors {:?}", self.floors);
            return Ok(Progress::Pending);
        }
        if line == "done" {
            return Ok(Progress::Complete);
        }
        if line.starts_with("building ") {
            let [_, groups, elevators] = textapi::split::<3>(line);
            let elevators = elevators.split(' ').next().unwrap_or_default();
            let unexpected = || Rejection::UnexpectedBuilding(line.to_owned());
            let groups = groups.parse::<i64>().map_err(|_| unexpected())?;
            if groups > 1 {
                return Err(Rejection::MultipleGroups);
            }
            self.num_elevators = elevators
                .parse::<usize>()
                .ok()
                .filter(|n| *n <= MAX_ELEVATORS)
                .ok_or_else(unexpected)?;
            self.awaiting_group = true;
        } else {
            log::trace!("Ignoring setup line {line:?}");
        }
        Ok(Progress::Pending)
    }

    // Called on `done` or when the input ends during the handshake.
    pub fn finish(self) -> Result<Building, Rejection> {
        if self.awaiting_group {
            return Err(Rejection::UnexpectedGroup(String::new()));
        }
        let building = Building::new(self.num_elevators, self.floors)?;
        log::debug!("next: {:?}", building.successors);
        Ok(building)
    }
}

fn parse_group(line: &str) -> Result<Vec<Floor>, Rejection> {
    let unexpected = || Rejection::UnexpectedGroup(line.to_owned());
    // `group <id> <x> <floors>`, optionally with a second unused field
    // before the floor list.
    let parts = line.split(' ').collect::<Vec<_>>();
    let (Some(&"group"), Some(floors), 4..=5) = (parts.first(), parts.last(), parts.len()) else {
        return Err(unexpected());
    };
    textapi::parse_int_list(floors).map_err(|_| unexpected())
}
