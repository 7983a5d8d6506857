//! The standard 19-tile board.
//!
//! Positions run clockwise around the outer ring from the top-left tile
//! (0-11), then clockwise around the inner ring (12-17), with 18 at the
//! center.

use super::{hex, ScenarioData};
use crate::board::piece::chit;
use crate::board::{AdjacencyList, Direction::*, PortSpot, PortType, RollNumber};

const ADJACENCIES: [AdjacencyList; 19] = [
    hex([-1, 1, 12, 11, -1, -1]), // 0
    hex([-1, 2, 13, 12, 0, -1]),  // 1
    hex([-1, -1, 3, 13, 1, -1]),  // 2
    hex([-1, -1, 4, 14, 13, 2]),  // 3
    hex([-1, -1, -1, 5, 14, 3]),  // 4
    hex([4, -1, -1, 6, 15, 14]),  // 5
    hex([5, -1, -1, -1, 7, 15]),  // 6
    hex([15, 6, -1, -1, 8, 16]),  // 7
    hex([16, 7, -1, -1, -1, 9]),  // 8
    hex([17, 16, 8, -1, -1, 10]), // 9
    hex([11, 17, 9, -1, -1, -1]), // 10
    hex([0, 12, 17, 10, -1, -1]), // 11
    hex([1, 13, 18, 17, 11, 0]),  // 12
    hex([2, 3, 14, 18, 12, 1]),   // 13
    hex([3, 4, 5, 15, 18, 13]),   // 14
    hex([14, 5, 6, 7, 16, 18]),   // 15
    hex([18, 15, 7, 8, 9, 17]),   // 16
    hex([12, 18, 16, 9, 10, 11]), // 17
    hex([13, 14, 15, 16, 17, 12]), // 18
];

const PORT_SPOTS: [PortSpot; 9] = [
    PortSpot::new(0, NorthWest),
    PortSpot::new(1, NorthEast),
    PortSpot::new(3, NorthEast),
    PortSpot::new(4, East),
    PortSpot::new(5, SouthEast),
    PortSpot::new(7, SouthEast),
    PortSpot::new(8, SouthWest),
    PortSpot::new(9, West),
    PortSpot::new(11, West),
];

const NUMBERS: [RollNumber; 18] = [
    chit(2), chit(3), chit(3), chit(4), chit(4), chit(5), chit(5), chit(6), chit(6),
    chit(8), chit(8), chit(9), chit(9), chit(10), chit(10), chit(11), chit(11), chit(12),
];

const PORTS: [PortType; 9] = [
    PortType::Mystery,
    PortType::Wool,
    PortType::Mystery,
    PortType::Mystery,
    PortType::Brick,
    PortType::Lumber,
    PortType::Mystery,
    PortType::Grain,
    PortType::Ore,
];

pub(crate) static DATA: ScenarioData = ScenarioData {
    adjacencies: &ADJACENCIES,
    deserts: &[18],
    port_spots: &PORT_SPOTS,
    // Brick, Lumber, Wool, Grain, Ore
    tile_counts: [3, 4, 4, 4, 3],
    numbers: &NUMBERS,
    ports: &PORTS,
};
