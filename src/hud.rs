//! HUD text formatting

/// One-line status readout: score, lives, phase, and elapsed time.
pub fn format_hud(score: u64, lives: u32, phase: u32, time: f64) -> String {
    format!("Score: {score}  Lives: {lives}  Phase: {phase}  Time: {time:.1}s")
}
