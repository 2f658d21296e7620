//! Round sequencing
//!
//! Owns the seeded RNG so consecutive rounds draw fresh manifests, and swaps in
//! a brand new `RoundState` on restart.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::RoundState;
use super::tick::{RoundEvent, TickInput, tick};

pub struct Session {
    pub round: RoundState,
    rng: Pcg32,
    rounds_played: u32,
}

impl Session {
    pub fn new(seed: u64, now: f64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let round = RoundState::new(&mut rng, now);
        log::info!("Session seed {seed}, required {:?}", round.manifest.required);
        Self {
            round,
            rng,
            rounds_played: 1,
        }
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Run one frame; restart is only honored after the round has ended
    pub fn frame(&mut self, input: &TickInput, now: f64, dt: f32) -> Vec<RoundEvent> {
        if input.restart && self.round.outcome().is_some() {
            self.restart(now);
            return vec![RoundEvent::Restarted];
        }
        tick(&mut self.round, input, now, dt)
    }

    fn restart(&mut self, now: f64) {
        self.round = RoundState::new(&mut self.rng, now);
        self.rounds_played += 1;
        log::info!(
            "Round {} started, required {:?}",
            self.rounds_played,
            self.round.manifest.required
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::FRAME_DT;
    use crate::sim::state::{Outcome, Phase};

    fn restart() -> TickInput {
        TickInput {
            restart: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_restart_ignored_mid_round() {
        let mut session = Session::new(9, 0.0);
        let manifest = session.round.manifest.clone();

        let events = session.frame(&restart(), 0.5, FRAME_DT);
        assert!(!events.contains(&RoundEvent::Restarted));
        assert_eq!(session.round.manifest, manifest);
        assert_eq!(session.rounds_played(), 1);
    }

    #[test]
    fn test_restart_after_end_builds_fresh_round() {
        let mut session = Session::new(9, 0.0);
        session.round.loaded.push(session.round.manifest.required[0]);
        session.round.phase = Phase::Ended(Outcome::Failed);

        let events = session.frame(&restart(), 50.0, FRAME_DT);
        assert_eq!(events, vec![RoundEvent::Restarted]);
        assert_eq!(session.rounds_played(), 2);
        assert_eq!(session.round.phase, Phase::Docking { started_at: 50.0 });
        assert!(session.round.loaded.is_empty());
        assert!(session.round.clipboard.iter().all(|e| !e.requested));
        assert_eq!(session.round.countdown_start, None);
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let a = Session::new(77, 0.0);
        let b = Session::new(77, 0.0);
        assert_eq!(a.round.manifest, b.round.manifest);
    }
}
