//! Canvas 2D rendering
//!
//! Pure read-side: draws a frame from the game state and the clock's
//! interpolation fraction. Descending entities are extrapolated by the
//! fraction of a tick left in the accumulator so motion stays smooth at
//! refresh rates above the simulation rate. Nothing here mutates the sim.

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::{GameState, PickupKind};

/// Road palette for one phase.
struct PhaseColors {
    margin: &'static str,
    road: &'static str,
    divider: &'static str,
}

/// Background colors keyed by phase id.
fn phase_colors(phase_id: u32) -> PhaseColors {
    match phase_id {
        2 => PhaseColors { margin: "#0f0f0f", road: "#3a3430", divider: "#5a5047" }, // earthy
        3 => PhaseColors { margin: "#221c18", road: "#5a4b2b", divider: "#7a6b4b" }, // sandy
        4 => PhaseColors { margin: "#050611", road: "#0d1220", divider: "#26324a" }, // dark blue
        _ => PhaseColors { margin: "#111", road: "#2b2b2b", divider: "#444" },
    }
}

/// Obstacle tint by descent speed: green slow, yellow medium, red fast.
fn speed_color(speed: f32) -> &'static str {
    if speed < 100.0 {
        "#5f5"
    } else if speed < 150.0 {
        "#ff5"
    } else {
        "#f55"
    }
}

/// Draw one frame.
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    interp: f32,
    sfx_muted: bool,
    engine_muted: bool,
) {
    let w = f64::from(state.config.view_width);
    let h = f64::from(state.config.view_height);
    let colors = phase_colors(state.level.current_phase().id);

    // margins/background
    ctx.set_fill_style_str(colors.margin);
    ctx.fill_rect(0.0, 0.0, w, h);

    // road
    let road_x = f64::from(ROAD_MARGIN);
    let road_w = w - 2.0 * road_x;
    ctx.set_fill_style_str(colors.road);
    ctx.fill_rect(road_x, 0.0, road_w, h);

    // lane dividers
    ctx.set_stroke_style_str(colors.divider);
    ctx.set_line_width(4.0);
    let lanes = &state.config.lanes;
    for i in 1..lanes.len() {
        let x = f64::from((lanes[i - 1] + lanes[i]) / 2.0);
        ctx.begin_path();
        ctx.move_to(x, 0.0);
        ctx.line_to(x, h);
        ctx.stroke();
    }

    // obstacles, extrapolated a fraction of a tick forward
    for o in &state.obstacles {
        let x = f64::from(o.pos.x - OBSTACLE_WIDTH / 2.0);
        let y = f64::from(o.pos.y + o.speed * SIM_DT * interp - OBSTACLE_HEIGHT / 2.0);
        ctx.set_fill_style_str(speed_color(o.speed));
        ctx.fill_rect(x, y, f64::from(OBSTACLE_WIDTH), f64::from(OBSTACLE_HEIGHT));
    }

    // pickups: glowing discs
    for p in &state.pickups {
        let color = match p.kind {
            PickupKind::Invuln => "#00f",
            PickupKind::ScoreBoost => "#f90",
        };
        let y = f64::from(p.pos.y + p.speed * SIM_DT * interp);
        ctx.set_fill_style_str(color);
        ctx.begin_path();
        let _ = ctx.arc(
            f64::from(p.pos.x),
            y,
            f64::from(PICKUP_SIZE / 2.0),
            0.0,
            std::f64::consts::TAU,
        );
        ctx.fill();
        ctx.set_stroke_style_str(color);
        ctx.set_line_width(3.0);
        ctx.stroke();
    }

    // player car; yellow while the post-hit window is open
    ctx.set_fill_style_str(if state.lives.is_invulnerable() { "#ff0" } else { "#0ff" });
    ctx.fill_rect(
        f64::from(state.car.pos.x - CAR_WIDTH / 2.0),
        f64::from(state.car.pos.y - CAR_HEIGHT / 2.0),
        f64::from(CAR_WIDTH),
        f64::from(CAR_HEIGHT),
    );

    draw_hud(ctx, state, w, sfx_muted, engine_muted);

    // flash effect
    if state.flash_timer > 0.0 {
        ctx.set_fill_style_str("rgba(255,255,255,0.2)");
        ctx.fill_rect(0.0, 0.0, w, h);
    }

    // phase title overlay (small pill below the HUD)
    if state.phase_overlay_timer > 0.0 {
        let box_w = (w - 160.0).min(360.0);
        let box_h = 36.0;
        let box_x = (w - box_w) / 2.0;
        let box_y = 60.0;
        ctx.set_fill_style_str("rgba(0,0,0,0.6)");
        ctx.fill_rect(box_x, box_y, box_w, box_h);
        ctx.set_fill_style_str("#fff");
        ctx.set_font("18px monospace");
        let name = &state.level.current_phase().name;
        let text_w = text_width(ctx, name);
        let _ = ctx.fill_text(name, w / 2.0 - text_w / 2.0, box_y + box_h / 2.0 + 6.0);
    }

    // pause overlay
    if state.paused {
        ctx.set_fill_style_str("rgba(0,0,0,0.5)");
        ctx.fill_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str("#fff");
        ctx.set_font("24px monospace");
        let _ = ctx.fill_text("PAUSED", w / 2.0 - 40.0, h / 2.0);
    }

    // game over overlay
    if !state.running {
        ctx.set_fill_style_str("rgba(0,0,0,0.6)");
        ctx.fill_rect(0.0, 0.0, w, h);
        ctx.set_fill_style_str("#fff");
        ctx.set_font("24px monospace");
        let _ = ctx.fill_text("GAME OVER", w / 2.0 - 70.0, h / 2.0 - 10.0);
        ctx.set_font("16px monospace");
        let _ = ctx.fill_text(
            &format!("Score: {}", state.score.score()),
            w / 2.0 - 40.0,
            h / 2.0 + 20.0,
        );
        let _ = ctx.fill_text("Press R to restart", w / 2.0 - 70.0, h / 2.0 + 50.0);
    }
}

fn draw_hud(
    ctx: &CanvasRenderingContext2d,
    state: &GameState,
    w: f64,
    sfx_muted: bool,
    engine_muted: bool,
) {
    // Header: centered title
    ctx.set_fill_style_str("#0f0");
    ctx.set_font("18px monospace");
    let header = "Enduro Dash";
    let header_w = text_width(ctx, header);
    let _ = ctx.fill_text(header, w / 2.0 - header_w / 2.0, 22.0);

    // score and lives on the top corners
    ctx.set_font("14px monospace");
    let _ = ctx.fill_text(&format!("Score: {}", state.score.score()), 18.0, 44.0);
    let _ = ctx.fill_text(&format!("Lives: {}", state.lives.lives()), w - 100.0, 44.0);

    // audio indicators (upper right, below lives)
    ctx.set_font("12px monospace");
    ctx.set_fill_style_str(if sfx_muted { "#666" } else { "#0f0" });
    let _ = ctx.fill_text(if sfx_muted { "[M] OFF" } else { "[M] ON" }, w - 80.0, 58.0);
    ctx.set_fill_style_str(if engine_muted { "#666" } else { "#fa0" });
    let _ = ctx.fill_text(if engine_muted { "[E] OFF" } else { "[E] ON" }, w - 80.0, 72.0);

    // touch target borders around the indicators
    ctx.set_line_width(1.0);
    ctx.set_stroke_style_str(if sfx_muted { "#666" } else { "#0f0" });
    ctx.stroke_rect(w - 82.0, 40.0, 39.0, 20.0);
    ctx.set_stroke_style_str(if engine_muted { "#666" } else { "#fa0" });
    ctx.stroke_rect(w - 82.0, 55.0, 39.0, 20.0);

    // power-up countdown
    if let Some(kind) = state.power_up.active() {
        let (label, color) = match kind {
            PickupKind::Invuln => ("SHIELD", "#00f"),
            PickupKind::ScoreBoost => ("BOOST", "#f90"),
        };
        ctx.set_fill_style_str(color);
        ctx.set_font("14px monospace");
        let text = format!("{label}: {}s", state.power_up.remaining().ceil() as u32);
        let _ = ctx.fill_text(&text, w / 2.0 - 40.0, 44.0);
    }
}

fn text_width(ctx: &CanvasRenderingContext2d, text: &str) -> f64 {
    ctx.measure_text(text).map(|m| m.width()).unwrap_or(0.0)
}
