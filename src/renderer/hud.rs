//! HUD text model
//!
//! All text shown around the play field, computed from the round state. The
//! web build writes these strings into DOM elements.

use crate::consts::MAX_CAPACITY;
use crate::sim::{CargoKind, Outcome, Phase, RoundState, remaining_capacity, total_weight};

/// One line of a checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudLine {
    pub text: String,
    /// Highlight (loaded) or dim (locked) depending on the list
    pub flag: bool,
}

/// Text for the end-of-round overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndSummary {
    pub title: &'static str,
    pub required: String,
    pub loaded: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HudText {
    pub time: Option<String>,
    pub load: Option<String>,
    /// Required items, flagged when aboard
    pub required: Vec<HudLine>,
    /// Clipboard labels, flagged when locked (loaded)
    pub clipboard: Vec<HudLine>,
    pub carrying: Option<String>,
    /// Depart prompt, flagged when requirements are met
    pub prompt: Option<HudLine>,
    pub banner: Option<&'static str>,
    pub end: Option<EndSummary>,
}

impl HudText {
    pub fn from_round(round: &RoundState, now: f64) -> Self {
        let mut hud = HudText {
            banner: match round.phase {
                Phase::Docking { .. } => Some("Arriving at Port B..."),
                Phase::Lashing { .. } => Some("Lashing cargo..."),
                Phase::Departing => Some("Departing..."),
                _ => None,
            },
            ..Default::default()
        };

        if round.phase.ordinal() < Phase::Allocation.ordinal() {
            return hud;
        }

        hud.time = Some(format!("Time: {:.1}s", round.remaining_time(now)));
        hud.load = Some(format!(
            "Load: {}/{}  (Remaining: {})",
            total_weight(&round.loaded),
            MAX_CAPACITY,
            remaining_capacity(&round.loaded)
        ));

        hud.required = round
            .manifest
            .required
            .iter()
            .map(|&kind| {
                let loaded = round.is_loaded(kind);
                let mark = if loaded { "✓" } else { "☐" };
                HudLine {
                    text: format!("{mark} {kind}"),
                    flag: loaded,
                }
            })
            .collect();

        hud.clipboard = round
            .clipboard
            .iter()
            .map(|entry| {
                let locked = round.is_loaded(entry.kind);
                let suffix = if locked { " (LOADED)" } else { "" };
                HudLine {
                    text: format!("{}{suffix}", entry.kind),
                    flag: locked,
                }
            })
            .collect();

        if round.phase == Phase::Allocation {
            hud.carrying = Some(match round.carrying {
                Some(kind) => format!("Carrying: {kind}"),
                None => "Carrying: (nothing)".to_string(),
            });
            hud.prompt = Some(if round.is_ready() {
                HudLine {
                    text: format!(
                        "Requirements met! Auto-depart in {:.1}s (or press SPACE).",
                        round.auto_lash_in(now)
                    ),
                    flag: true,
                }
            } else {
                HudLine {
                    text: "Load all REQUIRED items to depart.".to_string(),
                    flag: false,
                }
            });
        }

        if let Some(outcome) = round.outcome() {
            hud.end = Some(EndSummary {
                title: match outcome {
                    Outcome::Won => "All Secured! Departure!",
                    Outcome::Failed => "Too Late — Manifest Incomplete",
                },
                required: format!("Required: {}", join(&round.manifest.required)),
                loaded: format!(
                    "Loaded: {}",
                    if round.loaded.is_empty() {
                        "(none)".to_string()
                    } else {
                        join(&round.loaded)
                    }
                ),
            });
        }

        hud
    }
}

fn join(kinds: &[CargoKind]) -> String {
    kinds
        .iter()
        .map(|k| k.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::DOCK_AREA;
    use crate::sim::{DockGrid, Manifest};
    use CargoKind::*;

    fn round() -> RoundState {
        let manifest = Manifest {
            required: vec![Food, RepairKit, Water],
            supply: vec![Water, ExtraSail, Food, Ballast, RepairKit, Blanket],
        };
        let mut state = RoundState::with_parts(manifest, DockGrid::for_area(DOCK_AREA), 0.0);
        state.phase = Phase::Allocation;
        state.countdown_start = Some(0.0);
        state
    }

    #[test]
    fn test_docking_shows_banner_only() {
        let state = RoundState::with_parts(round().manifest, DockGrid::for_area(DOCK_AREA), 0.0);
        let hud = HudText::from_round(&state, 0.5);
        assert_eq!(hud.banner, Some("Arriving at Port B..."));
        assert_eq!(hud.time, None);
        assert!(hud.clipboard.is_empty());
    }

    #[test]
    fn test_allocation_lines() {
        let mut state = round();
        state.loaded.push(Food);
        state.clipboard[2].requested = true;
        state.carrying = Some(Water);

        let hud = HudText::from_round(&state, 32.7);
        assert_eq!(hud.time.as_deref(), Some("Time: 12.3s"));
        assert_eq!(hud.load.as_deref(), Some("Load: 9/12  (Remaining: 3)"));
        assert_eq!(hud.required[0], HudLine { text: "✓ Food".into(), flag: true });
        assert_eq!(hud.required[1].text, "☐ Repair Kit");
        assert_eq!(hud.clipboard[2].text, "Food (LOADED)");
        assert_eq!(hud.clipboard[1].text, "Extra Sail");
        assert_eq!(hud.carrying.as_deref(), Some("Carrying: Water"));
        assert_eq!(
            hud.prompt.map(|p| p.text).as_deref(),
            Some("Load all REQUIRED items to depart.")
        );
        assert_eq!(hud.banner, None);
    }

    #[test]
    fn test_ready_prompt_counts_down() {
        let mut state = round();
        state.loaded.extend([Food, RepairKit, Water]);
        state.requirements_met_at = Some(10.0);

        let hud = HudText::from_round(&state, 10.5);
        let prompt = hud.prompt.expect("prompt in allocation");
        assert!(prompt.flag);
        assert_eq!(prompt.text, "Requirements met! Auto-depart in 1.5s (or press SPACE).");
    }

    #[test]
    fn test_end_summaries() {
        let mut state = round();
        state.phase = Phase::Ended(Outcome::Failed);
        let end = HudText::from_round(&state, 50.0).end.expect("ended");
        assert_eq!(end.title, "Too Late — Manifest Incomplete");
        assert_eq!(end.required, "Required: Food, Repair Kit, Water");
        assert_eq!(end.loaded, "Loaded: (none)");

        state.loaded.extend([Water, Food, RepairKit]);
        state.phase = Phase::Ended(Outcome::Won);
        let hud = HudText::from_round(&state, 50.0);
        let end = hud.end.expect("ended");
        assert_eq!(end.title, "All Secured! Departure!");
        assert_eq!(end.loaded, "Loaded: Water, Food, Repair Kit");
        assert_eq!(hud.carrying, None);
        assert_eq!(hud.time.as_deref(), Some("Time: 0.0s"));
    }
}
