//! Property tests for layout, selection and patching

use blockshift::level::{BlockSpec, Level, ModifierSpec};
use blockshift::puzzle::{
    BlockPatch, BlockSize, BlockState, Color, ModifierMode, ModifierState, TrackLayout, modifier,
    prospective_block, start,
};
use glam::Vec2;
use proptest::prelude::*;

fn block_size() -> impl Strategy<Value = BlockSize> {
    prop_oneof![Just(BlockSize::Small), Just(BlockSize::Large)]
}

fn color() -> impl Strategy<Value = Color> {
    (0u32..=Color::MAX).prop_map(Color)
}

fn block() -> impl Strategy<Value = BlockState> {
    (block_size(), color()).prop_map(|(size, color)| BlockState::new(size, color))
}

fn modifier_spec() -> impl Strategy<Value = ModifierSpec> {
    prop_oneof![
        block_size().prop_map(|s| ModifierSpec::resize(s.tier() as i32)),
        color().prop_map(|c| ModifierSpec::colorize(c.to_string().as_str())),
    ]
}

fn built(specs: &[ModifierSpec]) -> (ModifierMode, Vec<ModifierState>) {
    modifier::build(specs).unwrap()
}

fn spec_of(block: BlockState) -> BlockSpec {
    BlockSpec::new(block.size.tier() as i32, block.color.to_string().as_str())
}

/// Block a fresh level would produce on commit
fn committed(initial: BlockState, modifiers: Vec<ModifierSpec>) -> BlockState {
    let levels = vec![Level {
        name: "order".to_string(),
        initial: spec_of(initial),
        target: spec_of(initial),
        modifiers,
    }];
    let (progress, ctx) = start(&levels, &TrackLayout::default()).unwrap();
    prospective_block(&ctx, progress.selection_index)
}

proptest! {
    #[test]
    fn sequence_layout_is_evenly_spaced(
        specs in prop::collection::vec(modifier_spec(), 1..12),
        start in 0.0f32..300.0,
        span in 100.0f32..600.0,
    ) {
        let (mode, mut modifiers) = built(&specs);
        prop_assert_eq!(mode, ModifierMode::Sequence);
        let start = Vec2::new(start, 240.0);
        let end = Vec2::new(start.x + span, 240.0);
        modifier::layout(&mut modifiers, mode, start, end);

        let gap = span / (modifiers.len() + 1) as f32;
        let mut prev = start.x;
        for m in &modifiers {
            prop_assert!(m.position.x > prev);
            prop_assert!((m.position.x - prev - gap).abs() < 1e-3);
            prev = m.position.x;
        }
        prop_assert!(prev < end.x);
        prop_assert!((end.x - prev - gap).abs() < 1e-3);
    }

    #[test]
    fn select_layout_shares_midpoint(
        options in prop::collection::vec(modifier_spec(), 1..8),
        start in -100.0f32..300.0,
        end in 300.0f32..900.0,
    ) {
        let (mode, mut modifiers) = built(&[ModifierSpec::select(options)]);
        prop_assert_eq!(mode, ModifierMode::Select);
        modifier::layout(&mut modifiers, mode, Vec2::new(start, 10.0), Vec2::new(end, 10.0));
        let mid = (start + end) / 2.0;
        for m in &modifiers {
            prop_assert_eq!(m.position, Vec2::new(mid, 10.0));
        }
    }

    #[test]
    fn cycle_selection_returns_to_start(
        options in prop::collection::vec(modifier_spec(), 1..8),
        first in 0usize..8,
    ) {
        let (_, modifiers) = built(&[ModifierSpec::select(options)]);
        let len = modifiers.len();
        let first = first % len;

        let mut seen = vec![false; len];
        let mut index = first;
        for _ in 0..len {
            prop_assert!(!seen[index]);
            seen[index] = true;
            index = modifier::cycle_selection(&modifiers, index);
            prop_assert!(index < len);
        }
        prop_assert_eq!(index, first);
        prop_assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn resize_keeps_color_and_colorize_keeps_size(
        start in block(),
        size in block_size(),
        color in color(),
    ) {
        let resized = start.patched(&BlockPatch::size(size));
        prop_assert_eq!(resized.color, start.color);
        prop_assert_eq!(resized.size, size);

        let painted = start.patched(&BlockPatch::color(color));
        prop_assert_eq!(painted.size, start.size);
        prop_assert_eq!(painted.color, color);
    }

    #[test]
    fn disjoint_patches_commute(start in block(), size in block_size(), color in color()) {
        let a = start
            .patched(&BlockPatch::size(size))
            .patched(&BlockPatch::color(color));
        let b = start
            .patched(&BlockPatch::color(color))
            .patched(&BlockPatch::size(size));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn disjoint_modifier_order_does_not_matter(
        initial in block(),
        size in block_size(),
        color in color(),
        swap in any::<bool>(),
    ) {
        let resize = ModifierSpec::resize(size.tier() as i32);
        let colorize = ModifierSpec::colorize(color.to_string().as_str());
        let mut ordered = vec![resize, colorize];
        if swap {
            ordered.reverse();
        }
        let mut reversed = ordered.clone();
        reversed.reverse();

        let a = committed(initial, ordered);
        let b = committed(initial, reversed);
        prop_assert_eq!(a, b);
        prop_assert_eq!(a, BlockState::new(size, color));
    }
}
