//! Session driver that applies named commands to the equipped weapon.
//!
//! [`ProgressionDriver`] owns the loaded catalogs, the equipment slot, the
//! wallet, and the satchel. Every command either succeeds and publishes events
//! on the [`EventBus`], or fails with a [`RuntimeError`] and leaves the session
//! untouched.

mod command;

pub use command::{Command, Outcome};

use buildup_content::{ContentBundle, ItemCatalog, WeaponCatalog};
use buildup_core::{
    BuildupConfig, Element, ItemId, RequirementReport, Stat, WeaponId, WeaponProgression,
    WeaponSnapshot, requirement_report,
};
use tracing::{debug, info, warn};

use crate::api::{Result, RuntimeError};
use crate::events::{
    EquipmentEvent, Event, EventBus, EvolutionEvent, ProgressionEvent, SatchelEvent, WalletEvent,
};
use crate::inventory::{Equipment, Satchel, Wallet};

pub struct ProgressionDriver {
    weapons: WeaponCatalog,
    items: ItemCatalog,
    equipment: Equipment,
    wallet: Wallet,
    satchel: Satchel,
    event_bus: EventBus,
}

impl ProgressionDriver {
    /// Creates a driver with nothing equipped.
    ///
    /// Dangling evolution targets in the catalog are logged; committing one
    /// later fails with [`RuntimeError::UnknownWeapon`].
    pub fn new(content: ContentBundle) -> Self {
        let ContentBundle {
            config,
            weapons,
            items,
        } = content;

        for dangling in weapons.dangling_targets() {
            warn!(
                "Weapon '{}' evolution '{}' targets unknown weapon '{}'",
                dangling.weapon, dangling.path, dangling.target
            );
        }

        info!(
            "ProgressionDriver initialized with {} weapon(s), {} item(s), {} gold, {} satchel slot(s)",
            weapons.len(),
            items.len(),
            config.starting_gold,
            config.satchel_slots
        );

        Self {
            weapons,
            items,
            equipment: Equipment::empty(),
            wallet: Wallet::new(config.starting_gold),
            satchel: Satchel::new(config.satchel_slots),
            event_bus: EventBus::new(),
        }
    }

    /// Creates a driver from catalogs with default tunables.
    pub fn from_catalogs(weapons: WeaponCatalog, items: ItemCatalog) -> Self {
        Self::new(ContentBundle {
            config: BuildupConfig::default(),
            weapons,
            items,
        })
    }

    /// Replaces the event bus, e.g. to share one with other components.
    pub fn with_event_bus(mut self, event_bus: EventBus) -> Self {
        self.event_bus = event_bus;
        self
    }

    /// Dispatches a command to its handler.
    pub fn handle(&mut self, command: Command) -> Result<Outcome> {
        debug!("Handling command {:?}", command);
        match command {
            Command::GrantExperience(amount) => self.grant_experience(amount),
            Command::PickUpItem { item, quantity } => self.pick_up_item(&item, quantity),
            Command::ApplyItem(item) => self.apply_item(&item),
            Command::SynthesizeStat(stat, amount) => self.synthesize_stat(stat, amount),
            Command::SynthesizeElement(element, amount) => self.synthesize_element(element, amount),
            Command::QueryEvolutions => self.query_evolutions().map(Outcome::Evolutions),
            Command::CommitEvolution(name) => self.commit_evolution(&name),
            Command::Equip(weapon) => self.equip(&weapon),
            Command::Unequip => self.unequip(),
            Command::SellItem(item) => self.sell_item(&item),
            Command::AddGold(amount) => self.add_gold(amount),
            Command::Snapshot => self.snapshot().map(Outcome::Snapshot),
        }
    }

    // ===== progression =====

    pub fn grant_experience(&mut self, amount: u32) -> Result<Outcome> {
        let weapon = self.weapon_mut()?;
        let from_level = weapon.level();
        let leveled_up = weapon.add_experience(amount);

        let id = weapon.template_id().clone();
        let level = weapon.level();
        let experience = weapon.experience();
        let experience_to_next_level = weapon.experience_to_next_level();

        info!(
            "[XP] Added {} XP to {}. Total: {}/{}",
            amount, id, experience, experience_to_next_level
        );
        self.publish_progression(ProgressionEvent::ExperienceGained {
            weapon: id.clone(),
            amount,
            experience,
            experience_to_next_level,
        });

        if leveled_up {
            info!("LEVEL UP! {} is now level {}", id, level);
            self.publish_progression(ProgressionEvent::LeveledUp {
                weapon: id,
                from_level,
                to_level: level,
            });
        }
        Ok(Outcome::Experience {
            gained: amount,
            leveled_up,
            level,
            experience,
            experience_to_next_level,
        })
    }

    pub fn synthesize_stat(&mut self, stat: Stat, amount: u32) -> Result<Outcome> {
        let weapon = self.weapon_mut()?;
        let before = weapon.stats().current(stat);
        let after = weapon.synthesize_stat(stat, amount);
        let value = weapon.stats().get(stat);
        let id = weapon.template_id().clone();

        info!("[STAT] {} {} +{} ({} -> {}/{})", id, stat, amount, before, after, value.max);
        self.publish_progression(ProgressionEvent::StatSynthesized {
            weapon: id,
            stat,
            before,
            after,
        });
        Ok(Outcome::StatRaised { stat, value })
    }

    pub fn synthesize_element(&mut self, element: Element, amount: u32) -> Result<Outcome> {
        let weapon = self.weapon_mut()?;
        let before = weapon.affinity(element);
        let after = weapon.synthesize_element(element, amount);
        let id = weapon.template_id().clone();

        info!("[ELEMENT] {} {} +{} ({} -> {})", id, element, amount, before, after);
        self.publish_progression(ProgressionEvent::ElementSynthesized {
            weapon: id,
            element,
            before,
            after,
        });
        Ok(Outcome::ElementRaised {
            element,
            value: after,
        })
    }

    // ===== items =====

    pub fn pick_up_item(&mut self, item: &ItemId, quantity: u32) -> Result<Outcome> {
        if quantity == 0 {
            return Err(RuntimeError::InvalidArgument(
                "pick-up quantity must be at least 1".into(),
            ));
        }
        let definition = self
            .items
            .get(item)
            .ok_or_else(|| RuntimeError::UnknownItem(item.clone()))?;

        let leftover = self.satchel.add(definition, quantity);
        let stored = quantity - leftover;
        if stored == 0 {
            return Err(RuntimeError::SatchelFull { item: item.clone() });
        }
        if leftover > 0 {
            warn!("Satchel full: {} x{} left behind", item, leftover);
        }

        debug!("Stored {} x{} (leftover {})", item, stored, leftover);
        self.event_bus.publish(Event::Satchel(SatchelEvent::Stored {
            item: item.clone(),
            quantity: stored,
            leftover,
        }));
        Ok(Outcome::PickedUp {
            item: item.clone(),
            stored,
            leftover,
        })
    }

    /// Consumes one held item and applies its deltas to the equipped weapon.
    pub fn apply_item(&mut self, item: &ItemId) -> Result<Outcome> {
        if !self.equipment.is_equipped() {
            return Err(RuntimeError::NoWeaponEquipped);
        }
        let definition = self
            .items
            .get(item)
            .ok_or_else(|| RuntimeError::UnknownItem(item.clone()))?;
        if !self.satchel.take(item) {
            return Err(RuntimeError::ItemNotHeld(item.clone()));
        }

        let weapon = self
            .equipment
            .weapon_mut()
            .ok_or(RuntimeError::NoWeaponEquipped)?;
        let report = definition.apply_to(weapon);
        let id = weapon.template_id().clone();

        info!("[SYNTHESIS] Applied {} to {}", definition.name, id);
        for change in &report.changes {
            if change.was_clamped() {
                debug!(
                    "{} clamped: requested +{}, applied +{}",
                    change.attribute,
                    change.requested,
                    change.applied()
                );
            }
        }

        self.event_bus.publish(Event::Satchel(SatchelEvent::Removed {
            item: item.clone(),
            remaining: self.satchel.count(item),
        }));
        self.publish_progression(ProgressionEvent::ItemApplied {
            weapon: id,
            report: report.clone(),
        });
        Ok(Outcome::ItemApplied(report))
    }

    /// Sells one held item for its sell value.
    pub fn sell_item(&mut self, item: &ItemId) -> Result<Outcome> {
        let gold = self
            .items
            .get(item)
            .map(|definition| definition.sell_value)
            .ok_or_else(|| RuntimeError::UnknownItem(item.clone()))?;
        if !self.satchel.take(item) {
            return Err(RuntimeError::ItemNotHeld(item.clone()));
        }

        let credited = self.wallet.add_gold(gold);
        let balance = self.wallet.balance();
        if credited < gold {
            warn!("Wallet full: {} of {} gold credited for {}", credited, gold, item);
        }
        info!("Sold {} for {} gold. Current gold: {}", item, credited, balance);

        self.event_bus.publish(Event::Satchel(SatchelEvent::Removed {
            item: item.clone(),
            remaining: self.satchel.count(item),
        }));
        if credited > 0 {
            self.event_bus.publish(Event::Wallet(WalletEvent::GoldAdded {
                amount: credited,
                balance,
            }));
        }
        Ok(Outcome::Sold {
            item: item.clone(),
            gold: credited,
            balance,
        })
    }

    /// Spends gold from the session wallet.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if !self.wallet.spend_gold(amount) {
            debug!("Not enough gold to spend {} (balance {})", amount, self.wallet.balance());
            return false;
        }
        let balance = self.wallet.balance();
        info!("Spent {} gold. Current gold: {}", amount, balance);
        self.event_bus
            .publish(Event::Wallet(WalletEvent::GoldSpent { amount, balance }));
        true
    }

    /// Adds gold to the session wallet, saturating at `u32::MAX`.
    ///
    /// Zero is ignored and publishes nothing.
    pub fn add_gold(&mut self, amount: u32) -> Result<Outcome> {
        let credited = self.wallet.add_gold(amount);
        let balance = self.wallet.balance();
        if credited > 0 {
            info!("Added {} gold. Current gold: {}", credited, balance);
            self.event_bus.publish(Event::Wallet(WalletEvent::GoldAdded {
                amount: credited,
                balance,
            }));
        }
        Ok(Outcome::GoldAdded {
            amount: credited,
            balance,
        })
    }

    // ===== evolution =====

    /// Reports every outgoing path of the equipped weapon.
    pub fn query_evolutions(&self) -> Result<Vec<RequirementReport>> {
        let weapon = self.weapon()?;
        let reports: Vec<_> = weapon
            .evolution_paths()
            .iter()
            .map(|path| requirement_report(weapon, path))
            .collect();

        let available = reports.iter().filter(|r| r.satisfied).count();
        info!(
            "EVOLUTION CHECK: {} has {} of {} path(s) available",
            weapon.name(),
            available,
            reports.len()
        );
        self.event_bus
            .publish(Event::Evolution(EvolutionEvent::Queried {
                weapon: weapon.template_id().clone(),
                reports: reports.clone(),
            }));
        Ok(reports)
    }

    /// Replaces the equipped weapon with a fresh instance of the path's target.
    ///
    /// Level, experience, stats, and affinities of the old weapon are
    /// discarded; the new weapon starts at the target template's baseline.
    pub fn commit_evolution(&mut self, name: &str) -> Result<Outcome> {
        let weapon = self.weapon()?;
        let from = weapon.template_id().clone();
        let path = weapon
            .evolution_path(name)
            .ok_or_else(|| RuntimeError::UnknownEvolution {
                weapon: from.clone(),
                path: name.to_string(),
            })?;
        let target = path
            .target
            .clone()
            .ok_or_else(|| RuntimeError::MissingEvolutionTarget(name.to_string()))?;

        let report = requirement_report(weapon, path);
        if !report.satisfied {
            return Err(RuntimeError::EvolutionLocked {
                path: name.to_string(),
                unmet: report.unmet().count(),
            });
        }

        let template = self
            .weapons
            .get(&target)
            .ok_or_else(|| RuntimeError::UnknownWeapon(target.clone()))?;
        self.equipment.equip(template);

        info!("EVOLVED: {} -> {} via '{}'", from, target, name);
        self.event_bus
            .publish(Event::Evolution(EvolutionEvent::Evolved {
                from: from.clone(),
                to: target.clone(),
                path: name.to_string(),
            }));
        Ok(Outcome::Evolved { from, to: target })
    }

    // ===== equipment =====

    pub fn equip(&mut self, weapon: &WeaponId) -> Result<Outcome> {
        let template = self
            .weapons
            .get(weapon)
            .ok_or_else(|| RuntimeError::UnknownWeapon(weapon.clone()))?;
        let replaced = self
            .equipment
            .equip(template)
            .map(|previous| previous.template_id().clone());

        info!("Equipped weapon: {}", template.name);
        self.event_bus
            .publish(Event::Equipment(EquipmentEvent::Equipped {
                weapon: weapon.clone(),
                replaced: replaced.clone(),
            }));
        Ok(Outcome::Equipped {
            weapon: weapon.clone(),
            replaced,
        })
    }

    pub fn unequip(&mut self) -> Result<Outcome> {
        let previous = self
            .equipment
            .unequip()
            .ok_or(RuntimeError::NoWeaponEquipped)?;
        let id = previous.template_id().clone();

        info!("Unequipped weapon: {}", previous.name());
        self.event_bus
            .publish(Event::Equipment(EquipmentEvent::Unequipped {
                weapon: id.clone(),
            }));
        Ok(Outcome::Unequipped(id))
    }

    pub fn snapshot(&self) -> Result<WeaponSnapshot> {
        Ok(self.weapon()?.snapshot())
    }

    // ===== accessors =====

    pub fn weapon(&self) -> Result<&WeaponProgression> {
        self.equipment.weapon().ok_or(RuntimeError::NoWeaponEquipped)
    }

    fn weapon_mut(&mut self) -> Result<&mut WeaponProgression> {
        self.equipment
            .weapon_mut()
            .ok_or(RuntimeError::NoWeaponEquipped)
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    pub fn satchel(&self) -> &Satchel {
        &self.satchel
    }

    pub fn weapons(&self) -> &WeaponCatalog {
        &self.weapons
    }

    pub fn items(&self) -> &ItemCatalog {
        &self.items
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    fn publish_progression(&self, event: ProgressionEvent) {
        self.event_bus.publish(Event::Progression(event));
    }
}
