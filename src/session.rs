//! Session driver
//!
//! Owns a [`GameState`] plus its collaborators and runs the fixed-timestep
//! loop: frame time goes into an accumulator, the sim ticks at `SIM_DT`,
//! queued events go out to audio and the scoreboard, and one frame is drawn.

use crate::audio::Audio;
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{Frame, Renderer};
use crate::score::Scoreboard;
use crate::settings::Settings;
use crate::sim::{CupId, Difficulty, GameEvent, GameState, TickInput, tick};

pub struct Session<R: Renderer, A: Audio> {
    pub state: GameState,
    pub score: Scoreboard,
    renderer: R,
    audio: A,
    speech: bool,
    accumulator: f32,
    input: TickInput,
    render_failures: u64,
}

impl<R: Renderer, A: Audio> Session<R, A> {
    pub fn new(settings: &Settings, renderer: R, audio: A) -> Self {
        let seed = settings.seed_or_random();
        log::info!("Session seed: {}", seed);
        Self {
            state: GameState::with_difficulty(seed, settings.difficulty),
            score: Scoreboard::new(),
            renderer,
            audio,
            speech: settings.speech,
            accumulator: 0.0,
            input: TickInput::default(),
            render_failures: 0,
        }
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Frames the renderer failed to draw
    pub fn render_failures(&self) -> u64 {
        self.render_failures
    }

    // One-shot commands are latched and consumed by the next tick

    pub fn start(&mut self) {
        self.input.start = true;
    }

    pub fn pick(&mut self, cup: CupId) {
        self.input.pick = Some(cup);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.input.difficulty = Some(difficulty);
    }

    /// Easy -> Medium -> Hard -> Easy
    pub fn cycle_difficulty(&mut self) {
        let current = self.input.difficulty.unwrap_or(self.state.difficulty());
        self.input.difficulty = Some(current.next());
    }

    pub fn hover(&mut self, cup: Option<CupId>) {
        self.input.hover = cup;
    }

    /// Run simulation ticks for `dt` seconds of wall time, then draw
    pub fn update(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.clear_commands();
            self.dispatch_events();
        }

        // Hitting the substep cap means we can't keep up; drop the backlog
        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::debug!("Dropping {:.3}s of sim backlog", self.accumulator);
            self.accumulator %= SIM_DT;
        }

        let frame = Frame::capture(&self.state);
        if let Err(err) = self.renderer.draw(&frame) {
            self.render_failures += 1;
            log::warn!("Renderer: {err}");
        }
    }

    fn dispatch_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::Cue(cue) => self.audio.play(cue),
                GameEvent::ShuffleIntensity { speed, intensity } => {
                    self.audio.update_shuffle(speed, intensity)
                }
                GameEvent::Commentary {
                    line,
                    emotion: Some(emotion),
                } if self.speech => self.audio.speak(line, emotion),
                GameEvent::RoundResolved(outcome) => self.score.record(&outcome),
                GameEvent::StreakReset => self.score.reset_streak(),
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{Cue, Emotion, NullAudio};
    use crate::error::CollaboratorError;
    use crate::renderer::NullRenderer;
    use crate::sim::RoundState;

    #[derive(Default)]
    struct RecordingAudio {
        cues: Vec<Cue>,
        lines: Vec<(String, Emotion)>,
        shuffle_updates: usize,
    }

    impl Audio for RecordingAudio {
        fn play(&mut self, cue: Cue) {
            self.cues.push(cue);
        }
        fn update_shuffle(&mut self, _speed: f32, _intensity: f32) {
            self.shuffle_updates += 1;
        }
        fn speak(&mut self, line: &str, emotion: Emotion) {
            self.lines.push((line.to_string(), emotion));
        }
    }

    struct BrokenRenderer;

    impl Renderer for BrokenRenderer {
        fn draw(&mut self, _frame: &Frame) -> Result<(), CollaboratorError> {
            Err(CollaboratorError::Unavailable("gpu"))
        }
    }

    fn seeded(seed: u64) -> Settings {
        Settings {
            seed: Some(seed),
            ..Default::default()
        }
    }

    fn run_until<R: Renderer, A: Audio>(session: &mut Session<R, A>, phase: RoundState) {
        for _ in 0..50_000 {
            if session.state.phase() == phase {
                return;
            }
            session.update(1.0 / 60.0);
        }
        panic!("never reached {:?}", phase);
    }

    #[test]
    fn test_round_through_session() {
        let mut session = Session::new(&seeded(10), NullRenderer, RecordingAudio::default());
        session.start();
        run_until(&mut session, RoundState::Picking);

        let cup = session.state.tracker().cup_over_ball();
        session.pick(cup);
        session.update(1.0 / 60.0);
        assert_eq!(session.state.phase(), RoundState::Result);
        assert_eq!(session.score.wins, 1);
        assert_eq!(session.score.streak, 1);

        let audio = session.audio();
        assert_eq!(audio.cues.first(), Some(&Cue::Click));
        assert!(audio.cues.contains(&Cue::ShuffleStart));
        assert!(audio.cues.contains(&Cue::ShuffleStop));
        assert!(audio.cues.contains(&Cue::Win));
        assert!(audio.shuffle_updates > 0);
        assert_eq!(audio.lines.first().map(|l| l.1), Some(Emotion::Intro));
        assert_eq!(audio.lines.last().map(|l| l.1), Some(Emotion::Win));
    }

    #[test]
    fn test_speech_disabled() {
        let settings = Settings {
            speech: false,
            ..seeded(11)
        };
        let mut session = Session::new(&settings, NullRenderer, RecordingAudio::default());
        session.start();
        run_until(&mut session, RoundState::Shuffling);
        assert!(session.audio().lines.is_empty());
    }

    #[test]
    fn test_broken_renderer_does_not_stall() {
        let mut session = Session::new(&seeded(12), BrokenRenderer, NullAudio);
        session.start();
        run_until(&mut session, RoundState::Picking);
        assert!(session.render_failures() > 0);
    }

    #[test]
    fn test_difficulty_change_resets_streak() {
        let mut session = Session::new(&seeded(13), NullRenderer, NullAudio);
        session.start();
        run_until(&mut session, RoundState::Picking);
        session.pick(session.state.tracker().cup_over_ball());
        session.update(1.0 / 60.0);
        assert_eq!(session.score.streak, 1);

        session.cycle_difficulty();
        session.update(1.0 / 60.0);
        assert_eq!(session.state.difficulty(), Difficulty::Medium);
        assert_eq!(session.score.streak, 0);
        assert_eq!(session.score.wins, 1);
    }

    #[test]
    fn test_slow_frames_do_not_build_backlog() {
        let mut session = Session::new(&seeded(15), NullRenderer, NullAudio);
        session.start();
        for _ in 0..600 {
            session.update(MAX_FRAME_DT);
            assert!(session.accumulator < SIM_DT, "backlog {}", session.accumulator);
        }
        let capped = 600.0 * MAX_SUBSTEPS as f32 * SIM_DT;
        assert!((session.state.elapsed - capped).abs() < 0.05);

        // Back at 60 fps the sim does not fast-forward
        let before = session.state.elapsed;
        session.update(1.0 / 60.0);
        assert!(session.state.elapsed - before <= 2.0 * SIM_DT + 1e-4);
    }

    #[test]
    fn test_small_frames_accumulate() {
        let mut session = Session::new(&seeded(14), NullRenderer, NullAudio);
        session.start();
        // Less than one timestep: the command stays latched
        session.update(SIM_DT * 0.5);
        assert_eq!(session.state.phase(), RoundState::Idle);
        session.update(SIM_DT * 0.6);
        assert_eq!(session.state.phase(), RoundState::Reveal);
    }
}
