//! Drives a full buildup session against the bundled content.

use buildup_content::ContentFactory;
use buildup_core::{BuildupConfig, BuildupError, Element, ItemId, Stat, WeaponId};
use buildup_runtime::{
    Command, Event, EventBus, EvolutionEvent, Outcome, ProgressionDriver, ProgressionEvent,
    RuntimeError, Topic,
};

fn driver() -> ProgressionDriver {
    let bundle = ContentFactory::bundled().load_all().expect("bundled content");
    ProgressionDriver::new(bundle)
}

fn equipped(id: &str) -> ProgressionDriver {
    let mut driver = driver();
    driver
        .handle(Command::Equip(WeaponId::new(id)))
        .expect("equip");
    driver
}

fn drain(rx: &mut tokio::sync::broadcast::Receiver<Event>) -> Vec<Event> {
    std::iter::from_fn(|| rx.try_recv().ok()).collect()
}

#[test]
fn commands_without_weapon_are_refused() {
    let mut driver = driver();
    for command in [
        Command::GrantExperience(10),
        Command::SynthesizeStat(Stat::Attack, 5),
        Command::SynthesizeElement(Element::Fire, 5),
        Command::QueryEvolutions,
        Command::Snapshot,
        Command::Unequip,
    ] {
        let err = driver.handle(command).unwrap_err();
        assert!(matches!(err, RuntimeError::NoWeaponEquipped));
        assert!(err.severity().is_recoverable());
    }
}

#[test]
fn leveled_up_is_published_once_per_grant() {
    let mut driver = equipped("rusty_sword");
    let mut rx = driver.event_bus().subscribe(Topic::Progression);

    let outcome = driver.handle(Command::GrantExperience(250)).expect("grant");
    assert_eq!(
        outcome,
        Outcome::Experience {
            gained: 250,
            leveled_up: true,
            level: 3,
            experience: 0,
            experience_to_next_level: 225,
        }
    );

    let events = drain(&mut rx);
    let level_ups: Vec<_> = events
        .iter()
        .filter_map(|event| match event {
            Event::Progression(ProgressionEvent::LeveledUp {
                from_level,
                to_level,
                ..
            }) => Some((*from_level, *to_level)),
            _ => None,
        })
        .collect();
    assert_eq!(level_ups, [(1, 3)]);

    driver.handle(Command::GrantExperience(10)).expect("grant");
    let events = drain(&mut rx);
    assert!(
        !events
            .iter()
            .any(|e| matches!(e, Event::Progression(ProgressionEvent::LeveledUp { .. })))
    );
}

#[test]
fn items_must_be_held_to_apply() {
    let mut driver = equipped("rusty_sword");
    let stone = ItemId::new("attack_stone");

    let err = driver.handle(Command::ApplyItem(stone.clone())).unwrap_err();
    assert!(matches!(err, RuntimeError::ItemNotHeld(_)));

    driver
        .handle(Command::PickUpItem {
            item: stone.clone(),
            quantity: 2,
        })
        .expect("pick up");
    let outcome = driver.handle(Command::ApplyItem(stone.clone())).expect("apply");
    assert!(matches!(outcome, Outcome::ItemApplied(ref report) if report.changes.len() == 1));
    assert_eq!(driver.satchel().count(&stone), 1);
    assert_eq!(driver.weapon().expect("weapon").damage(), 15);

    let err = driver
        .handle(Command::ApplyItem(ItemId::new("moon_rock")))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownItem(_)));
}

#[test]
fn evolution_commit_yields_fresh_target() {
    let mut driver = equipped("rusty_sword");

    let err = driver
        .handle(Command::CommitEvolution("Flame Blade".into()))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::EvolutionLocked { unmet: 2, .. }));

    driver.handle(Command::GrantExperience(500)).expect("grant");
    driver
        .handle(Command::SynthesizeStat(Stat::Attack, 30))
        .expect("attack");
    driver
        .handle(Command::SynthesizeElement(Element::Fire, 30))
        .expect("fire");

    let Outcome::Evolutions(reports) = driver.handle(Command::QueryEvolutions).expect("query")
    else {
        panic!("expected evolution reports");
    };
    let flame = reports
        .iter()
        .find(|r| r.path == "Flame Blade")
        .expect("flame path");
    assert!(flame.satisfied);

    let mut rx = driver.event_bus().subscribe(Topic::Evolution);
    let outcome = driver
        .handle(Command::CommitEvolution("Flame Blade".into()))
        .expect("evolve");
    assert_eq!(
        outcome,
        Outcome::Evolved {
            from: WeaponId::new("rusty_sword"),
            to: WeaponId::new("flame_blade"),
        }
    );
    assert!(matches!(
        rx.try_recv(),
        Ok(Event::Evolution(EvolutionEvent::Evolved { .. }))
    ));

    let weapon = driver.weapon().expect("weapon");
    assert_eq!(weapon.template_id().as_str(), "flame_blade");
    assert_eq!(weapon.level(), 1);
    assert_eq!(weapon.experience(), 0);
    assert_eq!(weapon.damage(), 35);
    assert_eq!(weapon.affinity(Element::Fire), 30);

    // the catalog template is untouched by the previous weapon's growth
    let template = driver
        .weapons()
        .get(&WeaponId::new("flame_blade"))
        .expect("template");
    assert_eq!(template.stats.current(Stat::Attack), 35);
}

#[test]
fn targetless_and_unknown_paths_are_refused() {
    let mut driver = equipped("rusty_sword");
    driver
        .handle(Command::SynthesizeStat(Stat::Magic, 50))
        .expect("magic");

    let err = driver
        .handle(Command::CommitEvolution("Forgotten Relic".into()))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::MissingEvolutionTarget(_)));

    let err = driver
        .handle(Command::CommitEvolution("Moonlight".into()))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownEvolution { .. }));
}

#[test]
fn selling_credits_the_wallet() {
    let mut driver = driver();
    let gem = ItemId::new("fire_gem");
    let start = driver.wallet().balance();

    let err = driver.handle(Command::SellItem(gem.clone())).unwrap_err();
    assert!(matches!(err, RuntimeError::ItemNotHeld(_)));

    let mut rx = driver.event_bus().subscribe(Topic::Wallet);
    driver
        .handle(Command::PickUpItem {
            item: gem.clone(),
            quantity: 1,
        })
        .expect("pick up");
    let outcome = driver.handle(Command::SellItem(gem.clone())).expect("sell");
    assert_eq!(
        outcome,
        Outcome::Sold {
            item: gem.clone(),
            gold: 25,
            balance: start + 25,
        }
    );
    assert_eq!(drain(&mut rx).len(), 1);
    assert_eq!(driver.satchel().count(&gem), 0);

    assert!(!driver.spend_gold(start + 26));
    assert!(driver.spend_gold(25));
    assert_eq!(driver.wallet().balance(), start);
}

#[test]
fn satchel_overflow_is_reported() {
    let mut driver = driver();
    let whetstone = ItemId::new("giant_whetstone");
    let slots = driver.satchel().capacity() as u32;

    // giant whetstones stack to 5
    let outcome = driver
        .handle(Command::PickUpItem {
            item: whetstone.clone(),
            quantity: slots * 5 + 3,
        })
        .expect("pick up");
    assert_eq!(
        outcome,
        Outcome::PickedUp {
            item: whetstone.clone(),
            stored: slots * 5,
            leftover: 3,
        }
    );

    let err = driver
        .handle(Command::PickUpItem {
            item: ItemId::new("fire_gem"),
            quantity: 1,
        })
        .unwrap_err();
    assert!(matches!(err, RuntimeError::SatchelFull { .. }));
}

#[test]
fn parsed_commands_drive_the_session() {
    let mut driver = driver();
    for line in ["equip hunting_bow", "stat speed 45", "element wind 40"] {
        let command: Command = line.parse().expect("parse");
        driver.handle(command).expect("handle");
    }
    let snapshot = driver.weapon().expect("weapon").snapshot();
    assert_eq!(snapshot.stats[1].1.current, 60);
    assert!(snapshot.available_evolutions.is_empty());

    driver
        .handle("pickup harpy_feather 2".parse().expect("parse"))
        .expect("pick up");
    driver
        .handle("apply harpy_feather".parse().expect("parse"))
        .expect("apply");
    driver
        .handle("apply harpy_feather".parse().expect("parse"))
        .expect("apply");

    let snapshot = driver.snapshot().expect("snapshot");
    assert_eq!(snapshot.available_evolutions, ["Gale Bow"]);
}

#[test]
fn reequip_discards_progress() {
    let mut driver = equipped("rusty_sword");
    driver
        .handle(Command::SynthesizeStat(Stat::Attack, 40))
        .expect("attack");
    let outcome = driver
        .handle(Command::Equip(WeaponId::new("rusty_sword")))
        .expect("equip");
    assert_eq!(
        outcome,
        Outcome::Equipped {
            weapon: WeaponId::new("rusty_sword"),
            replaced: Some(WeaponId::new("rusty_sword")),
        }
    );
    assert_eq!(driver.weapon().expect("weapon").damage(), 10);

    let err = driver
        .handle(Command::Equip(WeaponId::new("excalibur")))
        .unwrap_err();
    assert!(matches!(err, RuntimeError::UnknownWeapon(_)));
}

#[test]
fn selling_into_a_full_wallet_reports_what_was_credited() {
    let mut bundle = ContentFactory::bundled().load_all().expect("bundled content");
    bundle.config.starting_gold = u32::MAX - 5;
    let mut driver = ProgressionDriver::new(bundle);
    let gem = ItemId::new("fire_gem");
    driver
        .handle(Command::PickUpItem {
            item: gem.clone(),
            quantity: 2,
        })
        .expect("pick up");

    let outcome = driver.handle(Command::SellItem(gem.clone())).expect("sell");
    assert_eq!(
        outcome,
        Outcome::Sold {
            item: gem.clone(),
            gold: 5,
            balance: u32::MAX,
        }
    );

    let mut rx = driver.event_bus().subscribe(Topic::Wallet);
    let outcome = driver.handle(Command::SellItem(gem.clone())).expect("sell");
    assert_eq!(
        outcome,
        Outcome::Sold {
            item: gem.clone(),
            gold: 0,
            balance: u32::MAX,
        }
    );
    assert!(drain(&mut rx).is_empty());
}

#[test]
fn add_gold_command_credits_the_wallet() {
    let mut driver = driver();
    let start = driver.wallet().balance();
    let mut rx = driver.event_bus().subscribe(Topic::Wallet);

    let command = "gold 40".parse::<Command>().expect("parse");
    assert_eq!(
        driver.handle(command).expect("add gold"),
        Outcome::GoldAdded {
            amount: 40,
            balance: start + 40,
        }
    );
    assert_eq!(
        driver.handle(Command::AddGold(0)).expect("add nothing"),
        Outcome::GoldAdded {
            amount: 0,
            balance: start + 40,
        }
    );
    assert_eq!(drain(&mut rx).len(), 1);
}

#[test]
fn catalogs_alone_use_default_tunables() {
    let bundle = ContentFactory::bundled().load_all().expect("bundled content");
    let driver = ProgressionDriver::from_catalogs(bundle.weapons, bundle.items);
    assert_eq!(
        driver.wallet().balance(),
        BuildupConfig::DEFAULT_STARTING_GOLD
    );
    assert_eq!(
        driver.satchel().capacity(),
        BuildupConfig::DEFAULT_SATCHEL_SLOTS
    );
}

#[test]
fn shared_event_bus_sees_every_topic() {
    let bus = EventBus::new();
    let mut receivers = bus.subscribe_multiple(&Topic::ALL);
    let mut driver = driver().with_event_bus(bus);

    driver
        .handle(Command::Equip(WeaponId::new("rusty_sword")))
        .expect("equip");
    driver.handle(Command::GrantExperience(10)).expect("xp");
    driver.handle(Command::AddGold(5)).expect("gold");

    let seen: Vec<Topic> = receivers
        .iter_mut()
        .filter_map(|(topic, rx)| (!drain(rx).is_empty()).then_some(*topic))
        .collect();
    assert_eq!(seen, [Topic::Progression, Topic::Equipment, Topic::Wallet]);
}
