use buildup_core::{WeaponProgression, WeaponTemplate};

/// Weapon slot.
///
/// Equipping always instantiates a fresh copy of the template; the slot never
/// holds a reference to catalog data.
#[derive(Clone, Debug, Default)]
pub struct Equipment {
    weapon: Option<WeaponProgression>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Equips a new instance of `template`, returning the previously equipped
    /// weapon if any.
    pub fn equip(&mut self, template: &WeaponTemplate) -> Option<WeaponProgression> {
        self.weapon
            .replace(WeaponProgression::from_template(template))
    }

    /// Unequips the current weapon, returning it if one was equipped.
    pub fn unequip(&mut self) -> Option<WeaponProgression> {
        self.weapon.take()
    }

    pub fn weapon(&self) -> Option<&WeaponProgression> {
        self.weapon.as_ref()
    }

    pub fn weapon_mut(&mut self) -> Option<&mut WeaponProgression> {
        self.weapon.as_mut()
    }

    pub fn is_equipped(&self) -> bool {
        self.weapon.is_some()
    }
}
