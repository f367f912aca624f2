//! Input mapping
//!
//! Pure key/pointer/swipe to intent translation, kept free of DOM types so
//! it unit-tests anywhere. The wasm entry point wires DOM events through
//! these and applies the resulting intents between ticks.

/// Discrete player intents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Pause,
    Restart,
    ToggleSfx,
    ToggleEngine,
}

/// Map a keyboard key (as reported by `KeyboardEvent.key`) to an intent.
pub fn map_key(key: &str) -> Option<Intent> {
    match key.to_ascii_lowercase().as_str() {
        "arrowleft" | "a" => Some(Intent::MoveLeft),
        "arrowright" | "d" => Some(Intent::MoveRight),
        "p" | " " => Some(Intent::Pause),
        "r" => Some(Intent::Restart),
        "m" => Some(Intent::ToggleSfx),
        "e" => Some(Intent::ToggleEngine),
        _ => None,
    }
}

/// Tap zones: left half steers left, right half steers right.
pub fn map_pointer(x: f32, width: f32) -> Intent {
    if x < width / 2.0 {
        Intent::MoveLeft
    } else {
        Intent::MoveRight
    }
}

/// Default horizontal swipe distance before a swipe registers, pixels.
pub const SWIPE_THRESHOLD: f32 = 30.0;

/// Interpret a horizontal drag delta as a lane change.
pub fn detect_swipe(delta_x: f32, threshold: f32) -> Option<Intent> {
    if delta_x > threshold {
        Some(Intent::MoveRight)
    } else if delta_x < -threshold {
        Some(Intent::MoveLeft)
    } else {
        None
    }
}
