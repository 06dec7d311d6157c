//! Brick Breaker entry point
//!
//! There is no window here: the native binary runs the simulation headless
//! with the autopilot at a fixed timestep and logs the HUD as it changes.

/// Give up after ten simulated minutes
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 120 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use brick_breaker::consts::SIM_DT;
    use brick_breaker::renderer::Scene;
    use brick_breaker::sim::{GameEvent, GameState, TickOutcome, autopilot, tick};

    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let mut state = GameState::default();
    let mut ticks = 0u64;

    while ticks < MAX_TICKS {
        let mut input = autopilot::steer(&state);
        input.quit = state.is_game_over() || state.is_cleared();

        if tick(&mut state, &input, SIM_DT) == TickOutcome::Quit {
            break;
        }
        ticks += 1;

        let hud_changed = state.events().iter().any(|event| {
            matches!(
                event,
                GameEvent::BrickDestroyed { .. } | GameEvent::BallLost | GameEvent::GameOver
            )
        });
        if hud_changed {
            let scene = Scene::capture(&state);
            let hud: Vec<&str> = scene.labels.iter().map(|l| l.text.as_str()).collect();
            log::info!("[{:.2}s] {}", ticks as f32 * SIM_DT, hud.join("  "));
        }
    }

    let scene = Scene::capture(&state);
    log::info!(
        "Finished after {} ticks: score {}, lives {}, {} bricks left, {} vertex bytes in last frame",
        ticks,
        state.score(),
        state.lives(),
        state.active_brick_count(),
        scene.vertex_bytes().len()
    );
    println!(
        "Score: {}  Lives: {}{}",
        state.score(),
        state.lives(),
        if state.is_game_over() { "  GAME OVER!" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Library-only on the web; the host page drives `tick` itself
}
