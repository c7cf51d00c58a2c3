//! Audio and commentary collaborator
//!
//! The core only says *what* happened (a [`Cue`], a shuffle intensity, a line
//! of banter with an [`Emotion`]). Backends decide how it sounds; every call is
//! fire-and-forget and a missing backend simply stays silent.

pub use crate::commentary::Emotion;
pub use crate::sim::Cue;

pub trait Audio {
    fn play(&mut self, cue: Cue);
    /// Continuous shuffle feedback, called every shuffling tick
    fn update_shuffle(&mut self, speed: f32, intensity: f32);
    fn speak(&mut self, line: &str, emotion: Emotion);
}

/// Silent backend
#[derive(Debug, Default)]
pub struct NullAudio;

impl Audio for NullAudio {
    fn play(&mut self, _cue: Cue) {}
    fn update_shuffle(&mut self, _speed: f32, _intensity: f32) {}
    fn speak(&mut self, _line: &str, _emotion: Emotion) {}
}

/// Backend that writes cues and lines to the log
#[derive(Debug, Default)]
pub struct LogAudio {
    pub cues_played: u64,
    pub lines_spoken: u64,
}

impl Audio for LogAudio {
    fn play(&mut self, cue: Cue) {
        self.cues_played += 1;
        log::debug!("cue: {:?}", cue);
    }

    fn update_shuffle(&mut self, speed: f32, intensity: f32) {
        log::trace!("shuffle speed={:.2} intensity={:.2}", speed, intensity);
    }

    fn speak(&mut self, line: &str, emotion: Emotion) {
        self.lines_spoken += 1;
        log::info!("hustler ({:?}): \"{}\"", emotion, line);
    }
}

/// Filter/gain settings for the shuffle drone
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShuffleVoicing {
    pub filter_hz: f32,
    pub gain: f32,
}

/// Map shuffle speed and the per-swap intensity pulse to drone settings
pub fn shuffle_voicing(speed: f32, intensity: f32) -> ShuffleVoicing {
    let base = (speed / 6.0).clamp(0.0, 1.0) * 0.3;
    ShuffleVoicing {
        filter_hz: 400.0 + speed.max(0.0) * 250.0,
        gain: base * (0.2 + 0.8 * intensity.clamp(0.0, 1.0)),
    }
}

/// Speech rate and pitch for a line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voice {
    pub rate: f32,
    pub pitch: f32,
}

const BASE_RATE: f32 = 0.85;
const BASE_PITCH: f32 = 0.9;

/// Slow, deep delivery; gloating is a little brighter, mocking a little lower.
/// `variance` nudges pitch so repeated lines don't sound canned.
pub fn voice_for(emotion: Emotion, variance: f32) -> Voice {
    let variance = variance.clamp(-0.05, 0.05);
    match emotion {
        Emotion::Intro => Voice {
            rate: BASE_RATE,
            pitch: BASE_PITCH + variance,
        },
        Emotion::Win => Voice {
            rate: BASE_RATE + 0.05,
            pitch: BASE_PITCH + 0.1 + variance,
        },
        Emotion::Lose => Voice {
            rate: BASE_RATE - 0.05,
            pitch: BASE_PITCH - 0.1 + variance,
        },
    }
}

/// Index of the voice to use for the hustler, best match first: a named
/// high-quality male voice, then any English voice labelled male.
pub fn preferred_voice<'a, I>(voices: I) -> Option<usize>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    const NAMED: [&str; 4] = ["Google UK English Male", "Daniel", "David", "Mark"];

    let voices: Vec<(&str, &str)> = voices.into_iter().collect();
    let exact = voices.iter().position(|(name, _)| *name == NAMED[0]);
    exact
        .or_else(|| {
            NAMED[1..]
                .iter()
                .find_map(|n| voices.iter().position(|(name, _)| name.contains(n)))
        })
        .or_else(|| {
            voices
                .iter()
                .position(|(name, lang)| name.contains("Male") && lang.contains("en"))
        })
}

#[cfg(target_arch = "wasm32")]
pub use web::WebAudio;

/// Web Audio API + speech synthesis backend
#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::JsCast;
    use web_sys::{
        AudioContext, BiquadFilterNode, BiquadFilterType, GainNode, OscillatorNode,
        OscillatorType, SpeechSynthesis, SpeechSynthesisUtterance, SpeechSynthesisVoice,
    };

    use super::{Audio, Cue, Emotion, preferred_voice, shuffle_voicing, voice_for};

    /// Voices load asynchronously; an empty list just means the default voice
    fn hustler_voice(synth: &SpeechSynthesis) -> Option<SpeechSynthesisVoice> {
        let list: js_sys::Array = synth.get_voices();
        let voices: Vec<SpeechSynthesisVoice> = list
            .iter()
            .filter_map(|v| v.dyn_into::<SpeechSynthesisVoice>().ok())
            .collect();
        let labels: Vec<(String, String)> = voices.iter().map(|v| (v.name(), v.lang())).collect();
        let index = preferred_voice(labels.iter().map(|(n, l)| (n.as_str(), l.as_str())))?;
        voices.into_iter().nth(index)
    }

    struct ShuffleDrone {
        osc: OscillatorNode,
        filter: BiquadFilterNode,
        gain: GainNode,
    }

    pub struct WebAudio {
        ctx: Option<AudioContext>,
        drone: Option<ShuffleDrone>,
        volume: f32,
        speech: bool,
    }

    impl WebAudio {
        pub fn new(volume: f32, speech: bool) -> Self {
            // May fail outside a secure context
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self {
                ctx,
                drone: None,
                volume: volume.clamp(0.0, 1.0),
                speech,
            }
        }

        fn context(&self) -> Option<&AudioContext> {
            let ctx = self.ctx.as_ref()?;
            // Browsers keep the context suspended until a user gesture
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }
            Some(ctx)
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        /// Short downward blip
        fn play_click(&self, ctx: &AudioContext) {
            let Some((osc, gain)) = Self::create_osc(ctx, 800.0, OscillatorType::Sine) else {
                return;
            };
            let t = ctx.current_time();
            osc.frequency().set_value_at_time(800.0, t).ok();
            osc.frequency().exponential_ramp_to_value_at_time(400.0, t + 0.1).ok();
            gain.gain().set_value_at_time(self.volume * 0.1, t).ok();
            gain.gain().exponential_ramp_to_value_at_time(0.01, t + 0.1).ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.1).ok();
        }

        /// Rising whoosh of a cup coming up
        fn play_lift(&self, ctx: &AudioContext) {
            let Some((osc, gain)) = Self::create_osc(ctx, 300.0, OscillatorType::Triangle) else {
                return;
            };
            let t = ctx.current_time();
            osc.frequency().set_value_at_time(300.0, t).ok();
            osc.frequency().linear_ramp_to_value_at_time(600.0, t + 0.1).ok();
            gain.gain().set_value_at_time(0.0, t).ok();
            gain.gain().linear_ramp_to_value_at_time(self.volume * 0.1, t + 0.05).ok();
            gain.gain().linear_ramp_to_value_at_time(0.0, t + 0.2).ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.25).ok();
        }

        /// Major arpeggio
        fn play_win(&self, ctx: &AudioContext) {
            for (i, freq) in [523.25, 659.25, 783.99, 1046.5].into_iter().enumerate() {
                let Some((osc, gain)) = Self::create_osc(ctx, freq, OscillatorType::Square) else {
                    continue;
                };
                let t = ctx.current_time() + i as f64 * 0.1;
                gain.gain().set_value_at_time(0.0, t).ok();
                gain.gain().linear_ramp_to_value_at_time(self.volume * 0.05, t + 0.05).ok();
                gain.gain().exponential_ramp_to_value_at_time(0.001, t + 0.4).ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.5).ok();
            }
        }

        /// Sagging buzz
        fn play_lose(&self, ctx: &AudioContext) {
            let Some((osc, gain)) = Self::create_osc(ctx, 150.0, OscillatorType::Sawtooth) else {
                return;
            };
            let t = ctx.current_time();
            osc.frequency().set_value_at_time(150.0, t).ok();
            osc.frequency().linear_ramp_to_value_at_time(100.0, t + 0.3).ok();
            gain.gain().set_value_at_time(self.volume * 0.1, t).ok();
            gain.gain().linear_ramp_to_value_at_time(0.0, t + 0.5).ok();
            osc.start().ok();
            osc.stop_with_when(t + 0.6).ok();
        }

        fn start_drone(&mut self) {
            self.stop_drone();
            let Some(ctx) = self.context() else { return };
            let drone = (|| {
                let osc = ctx.create_oscillator().ok()?;
                let filter = ctx.create_biquad_filter().ok()?;
                let gain = ctx.create_gain().ok()?;
                osc.set_type(OscillatorType::Sawtooth);
                osc.frequency().set_value(90.0);
                filter.set_type(BiquadFilterType::Bandpass);
                filter.q().set_value(1.0);
                filter.frequency().set_value(400.0);
                gain.gain().set_value(0.0);
                osc.connect_with_audio_node(&filter).ok()?;
                filter.connect_with_audio_node(&gain).ok()?;
                gain.connect_with_audio_node(&ctx.destination()).ok()?;
                osc.start().ok()?;
                Some(ShuffleDrone { osc, filter, gain })
            })();
            self.drone = drone;
        }

        fn stop_drone(&mut self) {
            let Some(drone) = self.drone.take() else { return };
            let Some(ctx) = self.ctx.as_ref() else { return };
            let t = ctx.current_time();
            drone.gain.gain().cancel_scheduled_values(t).ok();
            drone.gain.gain().set_target_at_time(0.0, t, 0.1).ok();
            drone.osc.stop_with_when(t + 0.3).ok();
        }
    }

    impl Audio for WebAudio {
        fn play(&mut self, cue: Cue) {
            match cue {
                Cue::ShuffleStart => return self.start_drone(),
                Cue::ShuffleStop => return self.stop_drone(),
                _ => {}
            }
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = self.context() else { return };
            match cue {
                Cue::Click => self.play_click(ctx),
                Cue::Lift => self.play_lift(ctx),
                Cue::Win => self.play_win(ctx),
                Cue::Lose => self.play_lose(ctx),
                Cue::ShuffleStart | Cue::ShuffleStop => {}
            }
        }

        fn update_shuffle(&mut self, speed: f32, intensity: f32) {
            let (Some(ctx), Some(drone)) = (self.ctx.as_ref(), self.drone.as_ref()) else {
                return;
            };
            let voicing = shuffle_voicing(speed, intensity);
            let t = ctx.current_time();
            drone.filter.frequency().set_target_at_time(voicing.filter_hz, t, 0.05).ok();
            drone
                .gain
                .gain()
                .set_target_at_time(voicing.gain * self.volume, t, 0.02)
                .ok();
        }

        fn speak(&mut self, line: &str, emotion: Emotion) {
            if !self.speech {
                return;
            }
            let Some(synth) = web_sys::window().and_then(|w| w.speech_synthesis().ok()) else {
                return;
            };
            let Ok(utterance) = SpeechSynthesisUtterance::new_with_text(line) else {
                return;
            };
            if let Some(v) = hustler_voice(&synth) {
                utterance.set_voice(Some(&v));
            }
            let voice = voice_for(emotion, rand::random_range(-0.05..0.05));
            utterance.set_rate(voice.rate);
            utterance.set_pitch(voice.pitch);
            utterance.set_volume(self.volume.max(0.0));
            synth.cancel();
            synth.speak(&utterance);
        }
    }
}
