//! Maps tester input lines to driver commands.
//!
//! Single keys mirror the in-game debug shortcuts; anything else is parsed as
//! a textual [`Command`].

use buildup_core::{Element, ItemId, Stat};
use buildup_runtime::{Command, RuntimeError, Satchel};

use crate::config::{KeyConfig, TestItems};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    /// Print the current snapshot as JSON.
    DumpJson,
    Help,
    Quit,
}

pub struct Keymap {
    keys: KeyConfig,
    items: TestItems,
}

impl Keymap {
    pub fn new(keys: KeyConfig, items: TestItems) -> Self {
        Self { keys, items }
    }

    /// Resolves one input line.
    ///
    /// Item shortcuts apply the configured test item while the satchel holds
    /// one, and fall back to direct synthesis otherwise.
    pub fn resolve(&self, line: &str, satchel: &Satchel) -> Result<Input, RuntimeError> {
        let line = line.trim();
        let input = match line.to_ascii_lowercase().as_str() {
            "x" => Input::Command(Command::GrantExperience(self.keys.experience_step)),
            "1" => self.item_or_stat(&self.items.attack, Stat::Attack, satchel),
            "2" => self.item_or_stat(&self.items.speed, Stat::Speed, satchel),
            "3" => self.item_or_stat(&self.items.magic, Stat::Magic, satchel),
            "4" => Input::Command(Command::SynthesizeStat(Stat::Endurance, self.keys.stat_step)),
            "f" => match held(&self.items.fire, satchel) {
                Some(item) => Input::Command(Command::ApplyItem(item)),
                None => Input::Command(Command::SynthesizeElement(
                    Element::Fire,
                    self.keys.element_step,
                )),
            },
            "e" => Input::Command(Command::QueryEvolutions),
            "s" => Input::Command(Command::Snapshot),
            "j" => Input::DumpJson,
            "h" | "?" | "help" => Input::Help,
            "q" | "quit" | "exit" => Input::Quit,
            _ => Input::Command(line.parse()?),
        };
        Ok(input)
    }

    fn item_or_stat(&self, item: &Option<ItemId>, stat: Stat, satchel: &Satchel) -> Input {
        match held(item, satchel) {
            Some(item) => Input::Command(Command::ApplyItem(item)),
            None => Input::Command(Command::SynthesizeStat(stat, self.keys.stat_step)),
        }
    }
}

fn held(item: &Option<ItemId>, satchel: &Satchel) -> Option<ItemId> {
    item.as_ref()
        .filter(|id| satchel.count(id) > 0)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use buildup_core::SynthesisItem;

    fn keymap() -> Keymap {
        Keymap::new(KeyConfig::default(), TestItems::default())
    }

    #[test]
    fn shortcuts_fall_back_to_direct_synthesis() {
        let satchel = Satchel::new(4);
        let keymap = keymap();
        assert_eq!(
            keymap.resolve("1", &satchel).unwrap(),
            Input::Command(Command::SynthesizeStat(Stat::Attack, 5))
        );
        assert_eq!(
            keymap.resolve("F", &satchel).unwrap(),
            Input::Command(Command::SynthesizeElement(Element::Fire, 10))
        );
        assert_eq!(
            keymap.resolve("x", &satchel).unwrap(),
            Input::Command(Command::GrantExperience(50))
        );
    }

    #[test]
    fn shortcuts_prefer_held_items() {
        let mut satchel = Satchel::new(4);
        satchel.add(&SynthesisItem::new("attack_stone", "Attack Stone"), 1);
        assert_eq!(
            keymap().resolve("1", &satchel).unwrap(),
            Input::Command(Command::ApplyItem(ItemId::new("attack_stone")))
        );
    }

    #[test]
    fn other_lines_parse_as_commands() {
        let satchel = Satchel::new(1);
        assert_eq!(
            keymap().resolve("equip flame_blade", &satchel).unwrap(),
            Input::Command(Command::Equip("flame_blade".into()))
        );
        assert!(matches!(
            keymap().resolve("xp -10", &satchel),
            Err(RuntimeError::InvalidArgument(_))
        ));
        assert_eq!(keymap().resolve("q", &satchel).unwrap(), Input::Quit);
    }
}
