//! Cargo catalog
//!
//! Closed set of supplies that can appear on a manifest, with their weights.

use crate::consts::DEFAULT_CARGO_WEIGHT;

/// A kind of cargo
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CargoKind {
    Food,
    Water,
    RepairKit,
    Medicine,
    Blanket,
    Ballast,
    ExtraSail,
}

impl CargoKind {
    /// Every catalog entry, in catalog order
    pub const ALL: [CargoKind; 7] = [
        CargoKind::Food,
        CargoKind::Water,
        CargoKind::RepairKit,
        CargoKind::Medicine,
        CargoKind::Blanket,
        CargoKind::Ballast,
        CargoKind::ExtraSail,
    ];

    /// Pool the required items are drawn from
    pub const CORE: [CargoKind; 4] = [
        CargoKind::Food,
        CargoKind::Water,
        CargoKind::RepairKit,
        CargoKind::Medicine,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CargoKind::Food => "Food",
            CargoKind::Water => "Water",
            CargoKind::RepairKit => "Repair Kit",
            CargoKind::Medicine => "Medicine",
            CargoKind::Blanket => "Blanket",
            CargoKind::Ballast => "Ballast",
            CargoKind::ExtraSail => "Extra Sail",
        }
    }

}

impl std::fmt::Display for CargoKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CargoItem {
    pub kind: CargoKind,
    pub weight: u32,
}

/// Weight table
pub const CATALOG: [CargoItem; 7] = [
    CargoItem { kind: CargoKind::Food, weight: 1 },
    CargoItem { kind: CargoKind::Water, weight: 1 },
    CargoItem { kind: CargoKind::RepairKit, weight: 1 },
    CargoItem { kind: CargoKind::Medicine, weight: 1 },
    CargoItem { kind: CargoKind::Blanket, weight: 1 },
    CargoItem { kind: CargoKind::Ballast, weight: 1 },
    CargoItem { kind: CargoKind::ExtraSail, weight: 1 },
];

/// Look up a weight in a catalog, falling back to `DEFAULT_CARGO_WEIGHT`
pub fn weight_in(catalog: &[CargoItem], kind: CargoKind) -> u32 {
    catalog
        .iter()
        .find(|c| c.kind == kind)
        .map_or(DEFAULT_CARGO_WEIGHT, |c| c.weight)
}

pub fn weight_of(kind: CargoKind) -> u32 {
    weight_in(&CATALOG, kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_covers_every_kind() {
        for kind in CargoKind::ALL {
            assert!(CATALOG.iter().any(|c| c.kind == kind), "{kind} missing");
        }
        assert!(CATALOG.iter().all(|c| c.weight > 0));
    }

    #[test]
    fn test_unknown_kind_uses_default_weight() {
        let partial = [CargoItem { kind: CargoKind::Ballast, weight: 5 }];
        assert_eq!(weight_in(&partial, CargoKind::Ballast), 5);
        assert_eq!(weight_in(&partial, CargoKind::Food), DEFAULT_CARGO_WEIGHT);
    }

    #[test]
    fn test_core_pool_is_part_of_catalog() {
        for kind in CargoKind::CORE {
            assert!(CargoKind::ALL.contains(&kind));
        }
    }
}
