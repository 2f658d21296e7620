//! Round manifest generation
//!
//! Picks the required cargo and the supply list offered on the clipboard.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

use super::catalog::CargoKind;

/// Number of required items per round
pub const REQUIRED_COUNT: usize = 3;
/// Extra (non-required) items offered per round
pub const EXTRA_COUNT: usize = 3;
pub const SUPPLY_COUNT: usize = REQUIRED_COUNT + EXTRA_COUNT;

/// What the boat must carry and what the dock can offer this round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Required keys, distinct, drawn from the core pool
    pub required: Vec<CargoKind>,
    /// Offerable keys in clipboard display order (fixed for the round)
    pub supply: Vec<CargoKind>,
}

impl Manifest {
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let required = generate_required(rng);
        let supply = generate_supply(&required, rng);
        Self { required, supply }
    }

    pub fn is_required(&self, kind: CargoKind) -> bool {
        self.required.contains(&kind)
    }
}

/// Sample the required set uniformly without replacement from the core pool
pub fn generate_required<R: Rng + ?Sized>(rng: &mut R) -> Vec<CargoKind> {
    CargoKind::CORE
        .choose_multiple(rng, REQUIRED_COUNT)
        .copied()
        .collect()
}

/// Required keys plus extras from the rest of the catalog, shuffled once
pub fn generate_supply<R: Rng + ?Sized>(required: &[CargoKind], rng: &mut R) -> Vec<CargoKind> {
    let extras_pool: Vec<CargoKind> = CargoKind::ALL
        .into_iter()
        .filter(|k| !required.contains(k))
        .collect();

    let mut supply = required.to_vec();
    supply.extend(extras_pool.choose_multiple(rng, EXTRA_COUNT).copied());
    supply.shuffle(rng);
    supply
}
