//! Named driver commands and their outcomes.
//!
//! Commands have a textual form so testers and scripts can drive a session:
//!
//! ```text
//! xp <amount>                 grant experience
//! pickup <item> [quantity]    store items in the satchel (default 1)
//! apply <item>                consume one item on the equipped weapon
//! stat <stat> <amount>        raise a stat directly
//! element <element> <amount>  raise an elemental affinity directly
//! evolutions                  list evolution paths with their requirements
//! evolve <path name>          commit a satisfied evolution
//! equip <weapon>              equip a fresh instance of a template
//! unequip
//! sell <item>                 sell one item for its sell value
//! gold <amount>               add gold to the wallet
//! snapshot
//! ```

use core::str::FromStr;

use buildup_core::{
    Element, ItemId, KeyError, RequirementReport, Stat, StatValue, SynthesisReport, WeaponId,
    WeaponSnapshot,
};

use crate::api::RuntimeError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    GrantExperience(u32),
    PickUpItem { item: ItemId, quantity: u32 },
    ApplyItem(ItemId),
    SynthesizeStat(Stat, u32),
    SynthesizeElement(Element, u32),
    QueryEvolutions,
    CommitEvolution(String),
    Equip(WeaponId),
    Unequip,
    SellItem(ItemId),
    AddGold(u32),
    Snapshot,
}

/// What a successfully handled command did.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Experience {
        gained: u32,
        leveled_up: bool,
        level: u32,
        experience: u32,
        experience_to_next_level: u32,
    },
    PickedUp {
        item: ItemId,
        stored: u32,
        leftover: u32,
    },
    ItemApplied(SynthesisReport),
    StatRaised {
        stat: Stat,
        value: StatValue,
    },
    ElementRaised {
        element: Element,
        value: u32,
    },
    /// Every outgoing path of the equipped weapon, in authoring order.
    Evolutions(Vec<RequirementReport>),
    Evolved {
        from: WeaponId,
        to: WeaponId,
    },
    Equipped {
        weapon: WeaponId,
        replaced: Option<WeaponId>,
    },
    Unequipped(WeaponId),
    /// `gold` is the amount actually credited.
    Sold {
        item: ItemId,
        gold: u32,
        balance: u32,
    },
    GoldAdded {
        amount: u32,
        balance: u32,
    },
    Snapshot(WeaponSnapshot),
}

fn parse_amount(raw: Option<&str>, what: &str) -> Result<u32, RuntimeError> {
    let raw = raw.ok_or_else(|| RuntimeError::InvalidArgument(format!("missing {what}")))?;
    raw.parse::<u32>().map_err(|_| {
        RuntimeError::InvalidArgument(format!("{what} must be a non-negative integer, got '{raw}'"))
    })
}

fn required<'a>(raw: Option<&'a str>, what: &str) -> Result<&'a str, RuntimeError> {
    raw.filter(|s| !s.is_empty())
        .ok_or_else(|| RuntimeError::InvalidArgument(format!("missing {what}")))
}

impl FromStr for Command {
    type Err = RuntimeError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        let mut args = rest.split_whitespace();

        let command = match verb.to_ascii_lowercase().as_str() {
            "xp" => Command::GrantExperience(parse_amount(args.next(), "experience amount")?),
            "pickup" => {
                let item = ItemId::new(required(args.next(), "item id")?);
                let quantity = match args.next() {
                    Some(raw) => parse_amount(Some(raw), "quantity")?,
                    None => 1,
                };
                Command::PickUpItem { item, quantity }
            }
            "apply" => Command::ApplyItem(ItemId::new(required(args.next(), "item id")?)),
            "stat" => {
                let name = required(args.next(), "stat name")?;
                let stat = name
                    .parse::<Stat>()
                    .map_err(|_| KeyError::UnknownStat(name.to_string()))?;
                Command::SynthesizeStat(stat, parse_amount(args.next(), "amount")?)
            }
            "element" => {
                let name = required(args.next(), "element name")?;
                let element = name
                    .parse::<Element>()
                    .map_err(|_| KeyError::UnknownElement(name.to_string()))?;
                Command::SynthesizeElement(element, parse_amount(args.next(), "amount")?)
            }
            "evolutions" => Command::QueryEvolutions,
            "evolve" => Command::CommitEvolution(required(Some(rest), "evolution name")?.to_string()),
            "equip" => Command::Equip(WeaponId::new(required(args.next(), "weapon id")?)),
            "unequip" => Command::Unequip,
            "sell" => Command::SellItem(ItemId::new(required(args.next(), "item id")?)),
            "gold" => Command::AddGold(parse_amount(args.next(), "gold amount")?),
            "snapshot" => Command::Snapshot,
            "" => return Err(RuntimeError::InvalidArgument("empty command".into())),
            other => {
                return Err(RuntimeError::InvalidArgument(format!(
                    "unknown command '{other}'"
                )));
            }
        };
        Ok(command)
    }
}
