//! Property-based tests for the buildup rules.
//!
//! - Stats: additions clamp at max, never decrease
//! - Leveling: level stays in bounds, thresholds never shrink
//! - Evolution: gating is monotonic and idempotent
//! - Synthesis: applying items is order-independent and matches one combined item

use buildup_core::{
    Affinity, AttributeVector, BuildupConfig, Element, EvolutionPath, Stat, StatBlock,
    SynthesisItem, WeaponProgression, WeaponTemplate, available_evolutions, is_satisfied,
};
use proptest::prelude::*;

fn any_stat() -> impl Strategy<Value = Stat> {
    prop::sample::select(Stat::all().to_vec())
}

fn any_element() -> impl Strategy<Value = Element> {
    prop::sample::select(Element::all().to_vec())
}

fn any_affinity() -> impl Strategy<Value = Affinity> {
    prop::sample::select(Affinity::all().to_vec())
}

fn template(attack: u32, max: u32) -> WeaponTemplate {
    WeaponTemplate::new("prop_sword", "Prop Sword").with_stats(
        StatBlock::new()
            .with(Stat::Attack, attack, max)
            .with(Stat::Speed, 0, max)
            .with(Stat::Magic, 0, max)
            .with(Stat::Endurance, 0, max),
    )
}

fn delta_item(id: &str, stat: Stat, stat_amount: u32, affinity: Affinity, aff_amount: u32) -> SynthesisItem {
    SynthesisItem::new(id, id).with_deltas(
        AttributeVector::new()
            .with_stat(stat, stat_amount)
            .with_affinity(affinity, aff_amount),
    )
}

// ============================================================
// Stat clamping
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_stat_add_clamps(start in 0u32..=200, max in 0u32..=200, amount in any::<u32>(), stat in any_stat()) {
        let mut block = StatBlock::new().with(stat, start, max);
        let before = block.current(stat);
        let returned = block.add(stat, amount);
        let after = block.current(stat);

        prop_assert_eq!(returned, after);

        prop_assert!(after <= max);
        prop_assert!(after >= before);
        prop_assert_eq!(after, (u64::from(before) + u64::from(amount)).min(u64::from(max)) as u32);
    }

    #[test]
    fn prop_completion_ratio_in_unit_range(values in prop::array::uniform4((0u32..=300, 0u32..=300))) {
        let mut block = StatBlock::new();
        for (stat, (current, max)) in Stat::all().into_iter().zip(values) {
            block = block.with(stat, current, max);
        }
        let ratio = block.completion_ratio();
        prop_assert!((0.0..=1.0).contains(&ratio), "ratio {ratio} out of range");
    }
}

// ============================================================
// Leveling
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_level_stays_in_bounds(
        grants in prop::collection::vec(0u32..5_000, 1..20),
        level_max in 1u32..=15,
        threshold in 1u32..=500,
    ) {
        let mut weapon = WeaponProgression::from_template(
            &template(10, 100)
                .with_level_max(level_max)
                .with_experience_to_next_level(threshold),
        );

        let mut last_threshold = weapon.experience_to_next_level();
        let mut last_level = weapon.level();
        for grant in grants {
            let leveled = weapon.add_experience(grant);
            prop_assert!(weapon.level() >= 1 && weapon.level() <= level_max);
            prop_assert!(weapon.experience_to_next_level() >= last_threshold);
            prop_assert_eq!(leveled, weapon.level() > last_level);
            if !weapon.is_max_level() {
                prop_assert!(weapon.experience() < weapon.experience_to_next_level());
            }
            last_threshold = weapon.experience_to_next_level();
            last_level = weapon.level();
        }
    }

    #[test]
    fn prop_threshold_never_shrinks(current in 1u32..=u32::MAX) {
        prop_assert!(BuildupConfig::next_threshold(current) >= current);
    }
}

// ============================================================
// Evolution gating
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_gating_is_monotonic(
        required_attack in 0u32..=100,
        required_fire in 0u32..=50,
        raises in prop::collection::vec((any_stat(), 0u32..30, any_element(), 0u32..30), 0..10),
    ) {
        let path = EvolutionPath::new("Blaze")
            .with_target("flame_blade")
            .requires_stat(Stat::Attack, required_attack)
            .requires_affinity(Element::Fire, required_fire);
        let mut weapon = WeaponProgression::from_template(&template(10, 100));

        let mut was_satisfied = is_satisfied(&weapon, &path);
        for (stat, stat_amount, element, element_amount) in raises {
            weapon.synthesize_stat(stat, stat_amount);
            weapon.synthesize_element(element, element_amount);
            let now = is_satisfied(&weapon, &path);
            prop_assert!(!was_satisfied || now, "satisfied path became locked");
            was_satisfied = now;
        }
    }

    #[test]
    fn prop_available_evolutions_is_idempotent(
        attack in 0u32..=100,
        requirements in prop::collection::vec((0u32..=100, any_affinity(), 0u32..5), 0..6),
    ) {
        let paths: Vec<_> = requirements
            .iter()
            .enumerate()
            .map(|(index, (required_attack, affinity, required))| {
                EvolutionPath::new(format!("path_{index}"))
                    .with_target(format!("target_{index}"))
                    .requires_stat(Stat::Attack, *required_attack)
                    .requires_affinity(*affinity, *required)
            })
            .collect();
        let weapon = WeaponProgression::from_template(&template(attack, 100));
        let before = weapon.clone();

        let first = available_evolutions(&weapon, &paths);
        let second = available_evolutions(&weapon, &paths);
        prop_assert_eq!(first, second);
        prop_assert_eq!(&weapon, &before);
    }
}

// ============================================================
// Synthesis
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_synthesis_is_order_independent(
        start in 0u32..=100,
        a in (any_stat(), 0u32..80, any_affinity(), 0u32..80),
        b in (any_stat(), 0u32..80, any_affinity(), 0u32..80),
    ) {
        let first = delta_item("a", a.0, a.1, a.2, a.3);
        let second = delta_item("b", b.0, b.1, b.2, b.3);

        let mut forward = WeaponProgression::from_template(&template(start, 100));
        first.apply_to(&mut forward);
        second.apply_to(&mut forward);

        let mut backward = WeaponProgression::from_template(&template(start, 100));
        second.apply_to(&mut backward);
        first.apply_to(&mut backward);

        prop_assert_eq!(forward.stats(), backward.stats());
        prop_assert_eq!(forward.affinities(), backward.affinities());
    }

    #[test]
    fn prop_sequential_items_match_combined_item(
        start in 0u32..=20,
        a in (any_stat(), 0u32..80, any_affinity(), 0u32..80),
        b in (any_stat(), 0u32..80, any_affinity(), 0u32..80),
    ) {
        let first = delta_item("a", a.0, a.1, a.2, a.3);
        let second = delta_item("b", b.0, b.1, b.2, b.3);

        let mut combined = AttributeVector::new();
        for deltas in [&first.deltas, &second.deltas] {
            for (stat, amount) in &deltas.stats {
                *combined.stats.entry(*stat).or_default() += amount;
            }
            for (affinity, amount) in &deltas.affinities {
                *combined.affinities.entry(*affinity).or_default() += amount;
            }
        }
        let merged = SynthesisItem::new("a_plus_b", "A+B").with_deltas(combined);

        // totals stay below the max, so no clamp is crossed
        let mut sequential = WeaponProgression::from_template(&template(start, 200));
        first.apply_to(&mut sequential);
        second.apply_to(&mut sequential);

        let mut at_once = WeaponProgression::from_template(&template(start, 200));
        merged.apply_to(&mut at_once);

        prop_assert_eq!(sequential.stats(), at_once.stats());
        prop_assert_eq!(sequential.affinities(), at_once.affinities());
    }

    #[test]
    fn prop_affinities_are_additive(amounts in prop::collection::vec(0u32..1_000, 0..10), affinity in any_affinity()) {
        let item_for = |amount: u32| {
            SynthesisItem::new("shard", "Shard")
                .with_deltas(AttributeVector::new().with_affinity(affinity, amount))
        };
        let mut weapon = WeaponProgression::from_template(&template(10, 100));
        for amount in &amounts {
            item_for(*amount).apply_to(&mut weapon);
        }
        prop_assert_eq!(weapon.affinity(affinity), amounts.iter().sum::<u32>());
    }

    #[test]
    fn prop_untouched_attributes_are_unchanged(stat in any_stat(), amount in 0u32..200, affinity in any_affinity()) {
        let item = SynthesisItem::new("single", "Single")
            .with_deltas(AttributeVector::new().with_stat(stat, amount));
        let mut weapon = WeaponProgression::from_template(&template(10, 100));
        let before = weapon.clone();
        item.apply_to(&mut weapon);

        for other in Stat::all().into_iter().filter(|s| *s != stat) {
            prop_assert_eq!(weapon.stats().get(other), before.stats().get(other));
        }
        prop_assert_eq!(weapon.affinity(affinity), before.affinity(affinity));
        prop_assert_eq!(weapon.level(), before.level());
        prop_assert_eq!(weapon.experience(), before.experience());
    }
}
