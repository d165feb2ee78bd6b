/// Buildup configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildupConfig {
    /// Gold the wallet holds when a session starts.
    pub starting_gold: u32,
    /// Number of stacks the synthesis item satchel can hold.
    pub satchel_slots: usize,
}

impl BuildupConfig {
    // ===== progression rules =====
    /// Level threshold growth is `NUMERATOR / DENOMINATOR` (×1.5), rounded half-up.
    pub const THRESHOLD_GROWTH_NUMERATOR: u64 = 3;
    pub const THRESHOLD_GROWTH_DENOMINATOR: u64 = 2;

    // ===== authoring defaults =====
    pub const DEFAULT_LEVEL_MAX: u32 = 10;
    pub const DEFAULT_EXPERIENCE_TO_NEXT_LEVEL: u32 = 100;
    pub const DEFAULT_STAT_MAX: u32 = 100;
    pub const DEFAULT_ATTACK_RANGE: f32 = 2.0;
    pub const DEFAULT_STACK_SIZE: u32 = 99;
    pub const DEFAULT_SELL_VALUE: u32 = 10;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STARTING_GOLD: u32 = 100;
    pub const DEFAULT_SATCHEL_SLOTS: usize = 12;

    pub fn new() -> Self {
        Self {
            starting_gold: Self::DEFAULT_STARTING_GOLD,
            satchel_slots: Self::DEFAULT_SATCHEL_SLOTS,
        }
    }

    /// Next experience threshold after a level-up.
    ///
    /// Integer-only half-up rounding of `current × 1.5`, saturating at `u32::MAX`.
    /// The result is never smaller than `current`, so thresholds are non-decreasing.
    pub const fn next_threshold(current: u32) -> u32 {
        let scaled = current as u64 * Self::THRESHOLD_GROWTH_NUMERATOR
            + Self::THRESHOLD_GROWTH_DENOMINATOR / 2;
        let next = scaled / Self::THRESHOLD_GROWTH_DENOMINATOR;
        if next > u32::MAX as u64 {
            u32::MAX
        } else {
            next as u32
        }
    }
}

impl Default for BuildupConfig {
    fn default() -> Self {
        Self::new()
    }
}
