//! The 30-tile expansion board for five and six players.
//!
//! Rows of 3, 4, 5, 6, 5, 4, 3 tiles. Positions 0-15 form the outer ring,
//! 16-25 the middle ring and 26-29 the core; the two deserts sit in the
//! core.

use super::{hex, ScenarioData};
use crate::board::piece::chit;
use crate::board::{AdjacencyList, Direction::*, PortSpot, PortType, RollNumber};

const ADJACENCIES: [AdjacencyList; 30] = [
    hex([-1, 1, 16, 15, -1, -1]),   // 0
    hex([-1, 2, 17, 16, 0, -1]),    // 1
    hex([-1, -1, 3, 17, 1, -1]),    // 2
    hex([-1, -1, 4, 18, 17, 2]),    // 3
    hex([-1, -1, 5, 19, 18, 3]),    // 4
    hex([-1, -1, -1, 6, 19, 4]),    // 5
    hex([5, -1, -1, 7, 20, 19]),    // 6
    hex([6, -1, -1, 8, 21, 20]),    // 7
    hex([7, -1, -1, -1, 9, 21]),    // 8
    hex([21, 8, -1, -1, 10, 22]),   // 9
    hex([22, 9, -1, -1, -1, 11]),   // 10
    hex([23, 22, 10, -1, -1, 12]),  // 11
    hex([24, 23, 11, -1, -1, 13]),  // 12
    hex([14, 24, 12, -1, -1, -1]),  // 13
    hex([15, 25, 24, 13, -1, -1]),  // 14
    hex([0, 16, 25, 14, -1, -1]),   // 15
    hex([1, 17, 26, 25, 15, 0]),    // 16
    hex([2, 3, 18, 26, 16, 1]),     // 17
    hex([3, 4, 19, 27, 26, 17]),    // 18
    hex([4, 5, 6, 20, 27, 18]),     // 19
    hex([19, 6, 7, 21, 28, 27]),    // 20
    hex([20, 7, 8, 9, 22, 28]),     // 21
    hex([28, 21, 9, 10, 11, 23]),   // 22
    hex([29, 28, 22, 11, 12, 24]),  // 23
    hex([25, 29, 23, 12, 13, 14]),  // 24
    hex([16, 26, 29, 24, 14, 15]),  // 25
    hex([17, 18, 27, 29, 25, 16]),  // 26
    hex([18, 19, 20, 28, 29, 26]),  // 27
    hex([27, 20, 21, 22, 23, 29]),  // 28
    hex([26, 27, 28, 23, 24, 25]),  // 29
];

const PORT_SPOTS: [PortSpot; 11] = [
    PortSpot::new(0, NorthWest),
    PortSpot::new(1, NorthEast),
    PortSpot::new(3, NorthEast),
    PortSpot::new(5, East),
    PortSpot::new(6, SouthEast),
    PortSpot::new(8, East),
    PortSpot::new(9, SouthEast),
    PortSpot::new(10, SouthWest),
    PortSpot::new(11, West),
    PortSpot::new(13, SouthWest),
    PortSpot::new(14, West),
];

const NUMBERS: [RollNumber; 28] = [
    chit(11), chit(11), chit(6), chit(5), chit(10), chit(10), chit(5), chit(2), chit(3),
    chit(8), chit(4), chit(11), chit(10), chit(8), chit(4), chit(5), chit(9), chit(3),
    chit(12), chit(9), chit(6), chit(12), chit(8), chit(4), chit(2), chit(5), chit(3),
    chit(9),
];

const PORTS: [PortType; 11] = [
    PortType::Mystery,
    PortType::Wool,
    PortType::Mystery,
    PortType::Mystery,
    PortType::Brick,
    PortType::Wool,
    PortType::Lumber,
    PortType::Mystery,
    PortType::Grain,
    PortType::Mystery,
    PortType::Ore,
];

pub(crate) static DATA: ScenarioData = ScenarioData {
    adjacencies: &ADJACENCIES,
    deserts: &[27, 29],
    port_spots: &PORT_SPOTS,
    // Brick, Lumber, Wool, Grain, Ore
    tile_counts: [5, 6, 6, 6, 5],
    numbers: &NUMBERS,
    ports: &PORTS,
};
