/// Gold balance owned by one session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wallet {
    gold: u32,
}

impl Wallet {
    pub fn new(starting_gold: u32) -> Self {
        Self {
            gold: starting_gold,
        }
    }

    pub fn balance(&self) -> u32 {
        self.gold
    }

    /// Adds gold, saturating at `u32::MAX`. Zero is ignored.
    ///
    /// Returns the amount actually credited.
    pub fn add_gold(&mut self, amount: u32) -> u32 {
        let before = self.gold;
        self.gold = self.gold.saturating_add(amount);
        self.gold - before
    }

    /// Spends gold if `amount > 0` and the balance covers it.
    pub fn spend_gold(&mut self, amount: u32) -> bool {
        if amount == 0 || self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }
}
