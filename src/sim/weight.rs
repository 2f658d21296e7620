//! Boat weight accounting
//!
//! Pure functions over the loaded cargo list. Passengers ride in every round
//! and eat into the capacity before any cargo is loaded.

use super::catalog::{CargoKind, weight_of};
use crate::consts::{MAX_CAPACITY, PASSENGER_COUNT, PASSENGER_WEIGHT};

pub fn passenger_weight() -> u32 {
    PASSENGER_COUNT * PASSENGER_WEIGHT
}

pub fn cargo_weight(loaded: &[CargoKind]) -> u32 {
    loaded.iter().map(|&k| weight_of(k)).sum()
}

pub fn total_weight(loaded: &[CargoKind]) -> u32 {
    passenger_weight() + cargo_weight(loaded)
}

/// Capacity left; signed so an over-full boat would show up as negative
pub fn remaining_capacity(loaded: &[CargoKind]) -> i64 {
    i64::from(MAX_CAPACITY) - i64::from(total_weight(loaded))
}

/// Whether `candidate` can go aboard without exceeding capacity
pub fn admits(loaded: &[CargoKind], candidate: CargoKind) -> bool {
    remaining_capacity(loaded) - i64::from(weight_of(candidate)) >= 0
}

/// Every required key is aboard (order does not matter)
pub fn required_satisfied(loaded: &[CargoKind], required: &[CargoKind]) -> bool {
    required.iter().all(|r| loaded.contains(r))
}
