//! Tester configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use buildup_core::{ItemId, WeaponId};

/// Process-level settings for an interactive tester session.
///
/// Game tunables (starting gold, satchel size) live in the data directory's
/// `config.toml`; this only covers how the tester itself behaves.
#[derive(Clone, Debug)]
pub struct TesterConfig {
    /// Directory holding `config.toml`, `weapons.ron`, and `items.ron`.
    /// `None` uses the data bundled with `buildup-content`.
    pub data_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    pub starting_weapon: WeaponId,
    pub keys: KeyConfig,
    pub test_items: TestItems,
    /// Quantity of each test item placed in the satchel at startup.
    pub seed_quantity: u32,
}

/// Amounts used by the single-key shortcuts.
#[derive(Clone, Debug)]
pub struct KeyConfig {
    pub experience_step: u32,
    pub stat_step: u32,
    pub element_step: u32,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            experience_step: 50,
            stat_step: 5,
            element_step: 10,
        }
    }
}

/// Items the shortcuts apply when held. A missing item falls back to direct
/// synthesis.
#[derive(Clone, Debug)]
pub struct TestItems {
    pub attack: Option<ItemId>,
    pub speed: Option<ItemId>,
    pub magic: Option<ItemId>,
    pub fire: Option<ItemId>,
}

impl Default for TestItems {
    fn default() -> Self {
        Self {
            attack: Some(ItemId::new("attack_stone")),
            speed: Some(ItemId::new("speed_stone")),
            magic: Some(ItemId::new("magic_stone")),
            fire: Some(ItemId::new("fire_gem")),
        }
    }
}

impl TestItems {
    pub fn iter(&self) -> impl Iterator<Item = &ItemId> {
        [&self.attack, &self.speed, &self.magic, &self.fire]
            .into_iter()
            .flatten()
    }
}

impl Default for TesterConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            session_id: None,
            starting_weapon: WeaponId::new("rusty_sword"),
            keys: KeyConfig::default(),
            test_items: TestItems::default(),
            seed_quantity: 10,
        }
    }
}

impl TesterConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BUILDUP_DATA_DIR` - Content directory (default: bundled data)
    /// - `BUILDUP_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `BUILDUP_STARTING_WEAPON` - Weapon equipped at startup (default: rusty_sword)
    /// - `BUILDUP_XP_STEP` - Experience granted by `x` (default: 50)
    /// - `BUILDUP_STAT_STEP` - Direct stat synthesis amount (default: 5)
    /// - `BUILDUP_ELEMENT_STEP` - Direct element synthesis amount (default: 10)
    /// - `BUILDUP_ATTACK_ITEM`, `BUILDUP_SPEED_ITEM`, `BUILDUP_MAGIC_ITEM`,
    ///   `BUILDUP_FIRE_ITEM` - Test item ids; empty disables the item
    /// - `BUILDUP_SEED_QUANTITY` - Test items placed in the satchel (default: 10)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.data_dir = env::var("BUILDUP_DATA_DIR").ok().map(PathBuf::from);
        config.session_id = env::var("BUILDUP_SESSION_ID").ok();

        if let Ok(weapon) = env::var("BUILDUP_STARTING_WEAPON")
            && !weapon.trim().is_empty()
        {
            config.starting_weapon = WeaponId::new(weapon.trim());
        }

        if let Some(step) = read_env::<u32>("BUILDUP_XP_STEP") {
            config.keys.experience_step = step;
        }
        if let Some(step) = read_env::<u32>("BUILDUP_STAT_STEP") {
            config.keys.stat_step = step;
        }
        if let Some(step) = read_env::<u32>("BUILDUP_ELEMENT_STEP") {
            config.keys.element_step = step;
        }

        read_item("BUILDUP_ATTACK_ITEM", &mut config.test_items.attack);
        read_item("BUILDUP_SPEED_ITEM", &mut config.test_items.speed);
        read_item("BUILDUP_MAGIC_ITEM", &mut config.test_items.magic);
        read_item("BUILDUP_FIRE_ITEM", &mut config.test_items.fire);

        if let Some(quantity) = read_env::<u32>("BUILDUP_SEED_QUANTITY") {
            config.seed_quantity = quantity;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

fn read_item(key: &str, slot: &mut Option<ItemId>) {
    if let Ok(raw) = env::var(key) {
        let raw = raw.trim();
        *slot = (!raw.is_empty()).then(|| ItemId::new(raw));
    }
}
