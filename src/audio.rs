//! Sound effects
//!
//! Every effect is a short synthesized sine tone - no external files needed.
//! On the web the samples are uploaded once into Web Audio buffers; native
//! builds have no audio backend and only log what would have played.

#[cfg(target_arch = "wasm32")]
use web_sys::{AudioBuffer, AudioContext};

use crate::settings::Settings;
use crate::sim::RoundEvent;

/// Sample rate used for synthesis
pub const SAMPLE_RATE: u32 = 44_100;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Cargo picked up from the dock
    Pickup,
    /// Cargo stowed aboard
    Load,
    /// Boat cleared the harbor
    Victory,
    /// Countdown ran out
    Defeat,
}

/// Parameters of a single fading sine tone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub start_hz: f32,
    /// Linear sweep target (same as `start_hz` for a steady tone)
    pub end_hz: f32,
    pub duration: f32,
    pub volume: f32,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 4] = [
        SoundEffect::Pickup,
        SoundEffect::Load,
        SoundEffect::Victory,
        SoundEffect::Defeat,
    ];

    pub fn tone(self) -> Tone {
        match self {
            SoundEffect::Pickup => Tone { start_hz: 900.0, end_hz: 900.0, duration: 0.12, volume: 0.15 },
            SoundEffect::Load => Tone { start_hz: 450.0, end_hz: 450.0, duration: 0.08, volume: 0.10 },
            SoundEffect::Victory => Tone { start_hz: 700.0, end_hz: 950.0, duration: 0.30, volume: 0.20 },
            SoundEffect::Defeat => Tone { start_hz: 400.0, end_hz: 200.0, duration: 0.40, volume: 0.15 },
        }
    }

    /// Effect triggered by a round event, if any
    pub fn for_event(event: &RoundEvent) -> Option<Self> {
        match event {
            RoundEvent::PickedUp(_) => Some(SoundEffect::Pickup),
            RoundEvent::Loaded(_) => Some(SoundEffect::Load),
            RoundEvent::Victory => Some(SoundEffect::Victory),
            RoundEvent::Failed => Some(SoundEffect::Defeat),
            _ => None,
        }
    }
}

/// Render a tone to mono samples: sine with an `exp(-5 * progress)` fade
pub fn synthesize(tone: Tone, sample_rate: u32) -> Vec<f32> {
    let n = (tone.duration * sample_rate as f32).round() as usize;
    let mut samples = Vec::with_capacity(n);
    let mut phase = 0.0f32;
    for i in 0..n {
        let progress = i as f32 / n as f32;
        let freq = tone.start_hz + (tone.end_hz - tone.start_hz) * progress;
        samples.push(phase.sin() * (-5.0 * progress).exp() * tone.volume);
        phase += std::f32::consts::TAU * freq / sample_rate as f32;
        if phase > std::f32::consts::TAU {
            phase -= std::f32::consts::TAU;
        }
    }
    samples
}

/// Audio manager for the game
pub struct AudioManager {
    #[cfg(target_arch = "wasm32")]
    ctx: Option<AudioContext>,
    #[cfg(target_arch = "wasm32")]
    buffers: Vec<(SoundEffect, Option<AudioBuffer>)>,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl Default for AudioManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioManager {
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        let buffers = SoundEffect::ALL
            .into_iter()
            .map(|effect| {
                let buffer = ctx.as_ref().and_then(|ctx| upload(ctx, effect));
                (effect, buffer)
            })
            .collect();
        Self {
            ctx,
            buffers,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        #[cfg(target_arch = "wasm32")]
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    pub fn apply_settings(&mut self, settings: &Settings) {
        self.set_master_volume(settings.master_volume);
        self.set_sfx_volume(settings.sfx_volume);
        self.set_muted(settings.muted);
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play whatever effects a frame's events call for
    pub fn play_events(&self, events: &[RoundEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    /// Play a sound effect (silently does nothing without a backend)
    #[cfg(target_arch = "wasm32")]
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        let Some(buffer) = self
            .buffers
            .iter()
            .find(|(e, _)| *e == effect)
            .and_then(|(_, b)| b.as_ref())
        else {
            return;
        };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        if play_buffer(ctx, buffer, vol).is_none() {
            log::debug!("Could not play {effect:?}");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn play(&self, effect: SoundEffect) {
        if self.effective_volume() > 0.0 {
            log::debug!("Sound: {effect:?}");
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn upload(ctx: &AudioContext, effect: SoundEffect) -> Option<AudioBuffer> {
    let samples = synthesize(effect.tone(), SAMPLE_RATE);
    let buffer = ctx
        .create_buffer(1, samples.len() as u32, SAMPLE_RATE as f32)
        .ok()?;
    buffer.copy_to_channel(&samples, 0).ok()?;
    Some(buffer)
}

#[cfg(target_arch = "wasm32")]
fn play_buffer(ctx: &AudioContext, buffer: &AudioBuffer, vol: f32) -> Option<()> {
    let source = ctx.create_buffer_source().ok()?;
    let gain = ctx.create_gain().ok()?;
    source.set_buffer(Some(buffer));
    gain.gain().set_value(vol);
    source.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;
    source.start().ok()
}
