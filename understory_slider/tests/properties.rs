// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for value-model and controller invariants.
//!
//! 1. Values on the step grid survive a value → percentage → value round trip.
//! 2. Clamping is idempotent.
//! 3. Range ordering holds after any sequence of pointer and keyboard input.

use kurbo::{Point, Rect};
use proptest::prelude::*;
use understory_slider::{Slider, SliderConfig, SliderKey, SliderValue, Thumb, ValueModel};

#[derive(Clone, Debug)]
enum Op {
    Press(f64),
    Down(Thumb),
    Move(f64),
    Up,
    Key(Thumb, SliderKey),
}

fn arb_thumb() -> impl Strategy<Value = Thumb> {
    prop_oneof![Just(Thumb::Lower), Just(Thumb::Upper)]
}

fn arb_key() -> impl Strategy<Value = SliderKey> {
    prop_oneof![
        Just(SliderKey::ArrowRight),
        Just(SliderKey::ArrowUp),
        Just(SliderKey::ArrowLeft),
        Just(SliderKey::ArrowDown),
        Just(SliderKey::PageUp),
        Just(SliderKey::PageDown),
        Just(SliderKey::Home),
        Just(SliderKey::End),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    // Pointer x spans well beyond the 0..400 track on both sides.
    prop_oneof![
        (-200.0..600.0_f64).prop_map(Op::Press),
        arb_thumb().prop_map(Op::Down),
        (-200.0..600.0_f64).prop_map(Op::Move),
        Just(Op::Up),
        (arb_thumb(), arb_key()).prop_map(|(t, k)| Op::Key(t, k)),
    ]
}

proptest! {
    #[test]
    fn grid_values_round_trip(min in -1000_i32..1000, len in 1_u32..200, step in 1_u32..20, k in 0_u32..200) {
        let min = f64::from(min);
        let step = f64::from(step);
        let max = min + f64::from(len) * step;
        let model = ValueModel::new(SliderConfig::new(min, max, step).unwrap());

        let v = min + f64::from(k.min(len)) * step;
        let back = model.percentage_to_value(model.value_to_percentage(v));
        prop_assert!((back - v).abs() < 1e-9, "{v} -> {back}");
    }

    #[test]
    fn clamp_is_idempotent(v in proptest::num::f64::NORMAL, min in -1e6..1e6_f64, width in 1e-3..1e6_f64) {
        let model = ValueModel::new(SliderConfig::new(min, min + width, width / 10.0).unwrap());
        let once = model.clamp(v);
        prop_assert_eq!(model.clamp(once), once);
        prop_assert!(once >= min && once <= min + width);
    }

    #[test]
    fn range_stays_ordered(
        seed in (0.0..100.0_f64, 0.0..100.0_f64),
        ops in proptest::collection::vec(arb_op(), 0..64),
    ) {
        let config = SliderConfig::new(0.0, 100.0, 5.0).unwrap().with_range(true);
        let mut slider = Slider::new(config).with_value(Some(SliderValue::from(seed)));
        let track = Rect::new(0.0, 0.0, 400.0, 24.0);

        for op in ops {
            match op {
                Op::Press(x) => { slider.track_press(Point::new(x, 12.0), track); }
                Op::Down(thumb) => { slider.thumb_down(thumb); }
                Op::Move(x) => { slider.pointer_move(Point::new(x, 12.0), track); }
                Op::Up => { slider.pointer_up(); }
                Op::Key(thumb, key) => { slider.key_down(thumb, key); }
            }
            let pair = slider.value().as_range().unwrap();
            prop_assert!(pair.low() <= pair.high(), "{pair:?}");
            prop_assert!(pair.low() >= 0.0 && pair.high() <= 100.0, "{pair:?}");
        }
    }
}
