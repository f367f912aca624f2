//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed. One-shot
//! cues come from drained simulation events; the engine drone is a persistent
//! oscillator whose pitch follows the score-boost state.

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::prefs::AudioPrefs;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Obstacle collision
    Hit,
    /// Phase transition
    Checkpoint,
    /// Run ended
    GameOver,
    /// Pickup collected
    PowerUp,
    /// Lane change blip
    LaneChange,
    /// Power-up countdown beep
    TimerBeep,
}

impl SoundEffect {
    /// Map a simulation event to its cue.
    pub fn from_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::LaneChange => Some(SoundEffect::LaneChange),
            GameEvent::Hit => Some(SoundEffect::Hit),
            GameEvent::Checkpoint => Some(SoundEffect::Checkpoint),
            GameEvent::PowerUpCollected(_) => Some(SoundEffect::PowerUp),
            GameEvent::TimerBeep => Some(SoundEffect::TimerBeep),
            GameEvent::GameOver => Some(SoundEffect::GameOver),
        }
    }
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    sfx_muted: bool,
    engine_muted: bool,
    engine: Option<(OscillatorNode, GainNode)>,
    engine_boosted: bool,
}

impl AudioManager {
    pub fn new(prefs: AudioPrefs) -> Self {
        // May fail outside a secure context
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            sfx_muted: prefs.sfx_muted,
            engine_muted: prefs.engine_muted,
            engine: None,
            engine_boosted: false,
        }
    }

    /// Resume audio context (required after user gesture)
    pub fn resume(&self) {
        if let Some(ctx) = &self.ctx {
            let _ = ctx.resume();
        }
    }

    pub fn is_sfx_muted(&self) -> bool {
        self.sfx_muted
    }

    pub fn is_engine_muted(&self) -> bool {
        self.engine_muted
    }

    pub fn set_sfx_muted(&mut self, muted: bool) {
        self.sfx_muted = muted;
    }

    /// Muting the engine also kills the running drone.
    pub fn set_engine_muted(&mut self, muted: bool) {
        self.engine_muted = muted;
        if muted {
            self.stop_engine();
        }
    }

    /// Current mute switches, for persisting.
    pub fn prefs(&self) -> AudioPrefs {
        AudioPrefs {
            sfx_muted: self.sfx_muted,
            engine_muted: self.engine_muted,
        }
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        if self.sfx_muted {
            return;
        }
        let Some(ctx) = &self.ctx else { return };

        // Resume context if suspended (browsers require user gesture)
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }

        match effect {
            SoundEffect::Hit => self.play_tone(ctx, 120.0, 0.15, OscillatorType::Sawtooth, 0.3),
            SoundEffect::Checkpoint => self.play_checkpoint(ctx),
            SoundEffect::GameOver => self.play_game_over(ctx),
            SoundEffect::PowerUp => self.play_tone(ctx, 800.0, 0.1, OscillatorType::Sine, 0.2),
            SoundEffect::LaneChange => self.play_tone(ctx, 600.0, 0.05, OscillatorType::Sine, 0.15),
            SoundEffect::TimerBeep => self.play_tone(ctx, 700.0, 0.08, OscillatorType::Sine, 0.25),
        }
    }

    /// React to the power-up state: collect a boost and the engine revs up.
    pub fn update_engine_boost(&mut self, boosted: bool) {
        if boosted == self.engine_boosted {
            return;
        }
        self.engine_boosted = boosted;

        let Some(ctx) = &self.ctx else { return };
        let Some((osc, gain)) = &self.engine else {
            return;
        };
        let t = ctx.current_time();
        let (freq, vol) = engine_params(boosted);
        osc.frequency().linear_ramp_to_value_at_time(freq, t + 0.3).ok();
        gain.gain().linear_ramp_to_value_at_time(vol, t + 0.3).ok();
    }

    /// Start the engine drone (no-op while muted or already running).
    pub fn start_engine(&mut self, boosted: bool) {
        if self.engine_muted || self.engine.is_some() {
            return;
        }
        let Some(ctx) = &self.ctx else { return };
        let (freq, vol) = engine_params(boosted);
        let Some((osc, gain)) = create_osc(ctx, freq, OscillatorType::Sawtooth) else {
            return;
        };
        let t = ctx.current_time();
        gain.gain().set_value_at_time(vol, t).ok();
        if osc.start().is_ok() {
            self.engine_boosted = boosted;
            self.engine = Some((osc, gain));
        }
    }

    pub fn stop_engine(&mut self) {
        if let Some((osc, _gain)) = self.engine.take() {
            let _ = osc.stop();
        }
    }

    // === Sound generators ===

    /// Single oscillator burst with an exponential fade-out
    fn play_tone(&self, ctx: &AudioContext, freq: f32, duration: f64, osc_type: OscillatorType, vol: f32) {
        let Some((osc, gain)) = create_osc(ctx, freq, osc_type) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + duration)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + duration).ok();
    }

    /// Checkpoint - rising sweep
    fn play_checkpoint(&self, ctx: &AudioContext) {
        let Some((osc, gain)) = create_osc(ctx, 400.0, OscillatorType::Sine) else {
            return;
        };
        let t = ctx.current_time();

        osc.frequency().set_value_at_time(400.0, t).ok();
        osc.frequency().linear_ramp_to_value_at_time(800.0, t + 0.3).ok();
        gain.gain().set_value_at_time(0.25, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.3)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.3).ok();
    }

    /// Game over - descending triad, each note scheduled on the audio clock
    fn play_game_over(&self, ctx: &AudioContext) {
        let t = ctx.current_time();
        for (i, freq) in [600.0, 400.0, 200.0].iter().enumerate() {
            let Some((osc, gain)) = create_osc(ctx, *freq, OscillatorType::Sine) else {
                continue;
            };
            let start = t + i as f64 * 0.2;
            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain().set_value_at_time(0.3, start).ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(0.01, start + 0.2)
                .ok();
            osc.start_with_when(start).ok();
            osc.stop_with_when(start + 0.2).ok();
        }
    }
}

/// Engine drone frequency/volume for the boost state.
fn engine_params(boosted: bool) -> (f32, f32) {
    if boosted { (150.0, 0.10) } else { (90.0, 0.06) }
}

/// Create an oscillator wired through a gain node to the destination.
fn create_osc(ctx: &AudioContext, freq: f32, osc_type: OscillatorType) -> Option<(OscillatorNode, GainNode)> {
    let osc = ctx.create_oscillator().ok()?;
    let gain = ctx.create_gain().ok()?;

    osc.set_type(osc_type);
    osc.frequency().set_value(freq);
    osc.connect_with_audio_node(&gain).ok()?;
    gain.connect_with_audio_node(&ctx.destination()).ok()?;

    Some((osc, gain))
}
