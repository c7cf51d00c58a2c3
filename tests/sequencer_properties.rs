use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use shell_hustle::sim::{
    CupId, Difficulty, DifficultyProfile, PositionTracker, Slot, SwapOp, generate_swaps,
};

fn any_difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

prop_compose! {
    fn any_profile()(min in 0u32..12, extra in 0u32..15, scam in 0.0f64..=1.0) -> DifficultyProfile {
        DifficultyProfile {
            max_speed: 3.0,
            min_swaps: min,
            max_swaps: min + extra,
            scam_chance: scam,
        }
    }
}

fn any_swap() -> impl Strategy<Value = SwapOp> {
    (0u8..3, 1u8..3).prop_map(|(a, step)| {
        let a = Slot::new(a).unwrap();
        let b = Slot::new((a.index() as u8 + step) % 3).unwrap();
        SwapOp::new(a, b).unwrap()
    })
}

proptest! {
    #[test]
    fn preset_length_within_bounds(difficulty in any_difficulty(), seed in any::<u64>()) {
        let profile = difficulty.profile();
        let queue = generate_swaps(&profile, &mut Pcg32::seed_from_u64(seed));
        prop_assert!(queue.len() >= profile.min_swaps as usize);
        prop_assert!(queue.len() <= profile.max_swaps as usize);
    }

    #[test]
    fn custom_length_within_bounds(profile in any_profile(), seed in any::<u64>()) {
        let queue = generate_swaps(&profile, &mut Pcg32::seed_from_u64(seed));
        prop_assert!(queue.len() >= profile.min_swaps as usize);
        prop_assert!(queue.len() <= profile.max_swaps as usize);
    }

    #[test]
    fn no_consecutive_repeat_or_reverse(difficulty in any_difficulty(), seed in any::<u64>()) {
        let queue = generate_swaps(&difficulty.profile(), &mut Pcg32::seed_from_u64(seed));
        for (prev, next) in queue.iter().zip(queue.iter().skip(1)) {
            prop_assert_ne!(prev, next);
            prop_assert_ne!(&prev.reversed(), next);
            prop_assert_ne!(next.a(), next.b());
        }
    }

    #[test]
    fn tracker_stays_bijective(ops in prop::collection::vec(any_swap(), 0..40)) {
        let mut tracker = PositionTracker::new();
        let mut ball = Slot::CENTER;
        for op in &ops {
            tracker.commit_swap(op.a(), op.b());
            prop_assert!(tracker.is_bijection());
            for cup in CupId::ALL {
                prop_assert_eq!(tracker.cup_at_slot(tracker.slot_of_cup(cup)), cup);
            }

            if ball == op.a() {
                ball = op.b();
            } else if ball == op.b() {
                ball = op.a();
            }
            prop_assert_eq!(tracker.ball_slot(), ball);
        }
    }
}
