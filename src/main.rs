//! Shell Hustle entry point
//!
//! Native builds run a headless session: a scripted player who never loses
//! track of the ball plays a number of rounds against the hustler, and the
//! final scoreboard is printed as JSON.
//!
//! Usage: `shell-hustle [settings.json] [rounds] [easy|medium|hard]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use shell_hustle::Settings;
    use shell_hustle::audio::LogAudio;
    use shell_hustle::renderer::LogRenderer;
    use shell_hustle::session::Session;
    use shell_hustle::sim::{Difficulty, RoundState};

    env_logger::init();
    log::info!("Shell Hustle (headless) starting...");

    let mut args = std::env::args().skip(1);
    let mut settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let rounds: u32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5);
    if let Some(difficulty) = args.next().and_then(|s| Difficulty::from_str(&s)) {
        settings.difficulty = difficulty;
    }

    let mut session = Session::new(&settings, LogRenderer::default(), LogAudio::default());
    let frame_dt = 1.0 / 60.0;
    // Per-round frame cap (two minutes at 60 fps)
    let max_frames = 60 * 120;

    for round in 1..=rounds {
        session.start();
        let mut picked = false;
        for _ in 0..max_frames {
            session.update(frame_dt);
            match session.state.phase() {
                RoundState::Picking if !picked => {
                    let cup = session.state.tracker().cup_over_ball();
                    session.pick(cup);
                    picked = true;
                }
                RoundState::Idle if picked => break,
                _ => {}
            }
        }
        if session.state.phase() != RoundState::Idle {
            log::warn!("Round {} did not finish", round);
            break;
        }
    }

    match serde_json::to_string_pretty(&session.score) {
        Ok(json) => println!("{json}"),
        Err(err) => log::error!("Failed to serialize scoreboard: {err}"),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The library is embedded by a web front end; nothing to run here
}
