//! Hustler banter
//!
//! The round engine picks a line with its own seeded RNG and hands it to the
//! audio collaborator together with an [`Emotion`] tag.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Tone of a commentary line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Intro,
    Win,
    Lose,
}

pub const INTRO_LINES: &[&str] = &[
    "Step right up! Try your luck!",
    "Three cups, one ball. It's easy money!",
    "The hand is faster than the eye, my friend.",
    "Don't blink, or you'll miss it!",
    "I hope you brought your wallet today!",
    "Pick a cup, any cup... just pick the right one.",
    "You look like a sharp one. Let's see what you got.",
    "Feeling lucky? Or just confident?",
    "Watch the ball, not my hands.",
    "Round and round she goes, where she stops, nobody knows!",
    "Focus. Total focus. Don't let me distract you.",
    "I've got a mortgage to pay, so lose gracefully, okay?",
    "My hands are slippery today. Or are they?",
    "Don't look at the bird! Focus on the cups!",
    "This ball is worth more than my car. Don't lose it.",
    "I learned this in prison... I mean, boarding school.",
    "Keep your eyes open and your wallet... nearby.",
    "Is that a cop behind you? Just kidding, watch the ball.",
    "Three cups. One ball. Infinite sadness if you lose.",
    "I'm not saying I'm magic, but I'm definitely not honest.",
    "Let's see if you're smarter than a 5th grader.",
    "Pay attention class is in session.",
    "I promise I won't cheat. Much.",
    "I practiced this move for 3 minutes. You're in trouble.",
    "Watch closely. I move faster than my ex-wife's lawyer.",
    "Put your money where your mouth is. Unless you're eating.",
    "No refunds for blinkers. House rules.",
    "I had too much coffee today, so good luck following these hands.",
    "Are you watching the ball? Or are you admiring my cups?",
    "Don't worry, I'm a professional. A professional hustler.",
    "Okay, serious face. Game face. Let's do this.",
    "If you win, I'll tell you a secret. If you lose, I keep your money.",
    "Ready? Set? Wait, I wasn't ready. Okay, now go.",
    "My grandmother plays faster than you. Let's go!",
    "I bet you 5 imaginary dollars you can't find it.",
    "Do you believe in miracles? You're gonna need one.",
    "Don't overthink it. That's how I get you.",
];

pub const WIN_LINES: &[&str] = &[
    "Beginner's luck! Pure beginner's luck.",
    "Hey, who taught you that? You're a pro!",
    "Winner winner, chicken dinner!",
    "I demand a rematch! Double or nothing?",
    "You got eyes like a hawk, I swear.",
    "Alright, alright, take the money and run.",
    "Unbelievable. Do you have x-ray vision?",
    "You're ruining my business here!",
    "Okay, you got me. Nice catch.",
    "Not bad... for an amateur.",
    "You must be counting cards! Wait, there are no cards.",
    "Beginner's luck is a powerful drug.",
    "Okay, who told you? Was it the bird?",
    "My kids are gonna starve tonight. Thanks a lot.",
    "I'm calling security. You're too good.",
    "Pure skill? Or pure accident? I'm watching you.",
    "You cracked the code! The code was 'look at the cup'.",
    "I hate losing. I really, really hate it.",
    "Take your winnings and get out of here before I cry.",
    "Wow. Just... wow. I need a drink.",
    "Stop taking all my money!",
    "Are you a wizard? You have to tell me if you're a wizard.",
    "You must be cheating. I'm telling mom.",
    "I'm going to go cry in the corner now. Don't follow me.",
    "Did you guess? Be honest, you guessed.",
    "That was luck. Pure, unadulterated luck.",
    "Fine. You win. But do you feel like a winner inside?",
    "I think the wind blew the cup over. That doesn't count.",
    "You're banned. Just kidding. Come back, I need my money back.",
    "Wait, did you use magnets? Everyone uses magnets these days.",
    "I looked away for one second! One second!",
    "Who are you? The Shell Whisperer?",
    "Okay, okay, you're the captain now.",
    "I suspect time travel was involved.",
    "My retirement fund just took a hit.",
    "Stop being so good at this. It's annoying.",
];

pub const LOSE_LINES: &[&str] = &[
    "Aaaand... it's gone!",
    "Were you even watching the cups?",
    "Donation accepted! No refunds!",
    "Better luck next time, champ.",
    "Too slow! You gotta be faster than that!",
    "Your eyes played tricks on you, didn't they?",
    "Close, but 'close' doesn't pay the rent.",
    "Maybe stick to Tic-Tac-Toe?",
    "I told you, the hand is faster than the eye.",
    "Ouch. That was painful to watch.",
    "Thanks for the contribution to the fund.",
    "And that is why I drive a Mercedes.",
    "Look on the bright side, you made me richer.",
    "Did you blink? I saw you blink.",
    "It's not gambling if you know you're gonna lose.",
    "Faster than a cheetah on rollerblades.",
    "You picked the empty one. It's a metaphor for life.",
    "Don't quit your day job, buddy.",
    "I could do this in my sleep. In fact, I am asleep.",
    "Was the sun in your eyes? In this windowless room?",
    "Gravity is a harsh mistress.",
    "You're making this too easy for me.",
    "Easy come, easy go. Mostly go.",
    "Not even close! Were you watching the ceiling?",
    "Gravity 1, You 0.",
    "Maybe try closing one eye? No, wait, open both.",
    "I saw a squirrel, did you see it? Distracted you, didn't I?",
    "Your wallet looks lighter. It suits you.",
    "It was lag. Must have been the WiFi.",
    "You zigged when you should have zagged.",
    "Are you sure you're wearing your glasses?",
    "That cup was empty yesterday too.",
    "I'd offer you a refund, but I already spent it.",
    "Wrong cup. Right spirit, but wrong cup.",
    "Swing and a miss!",
    "Do you want a map? I can draw you a map.",
    "I felt that loss in my soul. Oof.",
    "Next time, try using The Force.",
];

/// Placeholder shown while the cups are moving
pub const SHUFFLING_LINE: &str = "...";

impl Emotion {
    pub fn lines(&self) -> &'static [&'static str] {
        match self {
            Emotion::Intro => INTRO_LINES,
            Emotion::Win => WIN_LINES,
            Emotion::Lose => LOSE_LINES,
        }
    }
}

/// Uniformly pick a line for `emotion`
pub fn pick_line<R: Rng + ?Sized>(emotion: Emotion, rng: &mut R) -> &'static str {
    let lines = emotion.lines();
    lines[rng.random_range(0..lines.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_pick_from_matching_pool() {
        let mut rng = Pcg32::seed_from_u64(1);
        for emotion in [Emotion::Intro, Emotion::Win, Emotion::Lose] {
            for _ in 0..20 {
                assert!(emotion.lines().contains(&pick_line(emotion, &mut rng)));
            }
        }
    }

    #[test]
    fn test_pools_are_distinct() {
        for emotion in [Emotion::Intro, Emotion::Win, Emotion::Lose] {
            let lines = emotion.lines();
            assert!(lines.len() >= 30);
            for (i, line) in lines.iter().enumerate() {
                assert!(!line.is_empty());
                assert!(!lines[i + 1..].contains(line), "duplicate: {line}");
            }
        }
    }
}
