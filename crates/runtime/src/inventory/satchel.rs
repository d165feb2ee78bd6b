use buildup_core::{ItemId, SynthesisItem};

/// A stack of one item in a satchel slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemStack {
    pub item: ItemId,
    pub quantity: u32,
    pub stack_size: u32,
}

impl ItemStack {
    fn room(&self) -> u32 {
        self.stack_size.saturating_sub(self.quantity)
    }
}

/// Fixed number of slots holding synthesis item stacks.
#[derive(Clone, Debug)]
pub struct Satchel {
    slots: Vec<Option<ItemStack>>,
}

impl Satchel {
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Stores up to `quantity` of `item` and returns what did not fit.
    ///
    /// Matching stacks with room are topped up first, in slot order, then
    /// empty slots are used. Stacks never exceed the item's `stack_size`.
    pub fn add(&mut self, item: &SynthesisItem, quantity: u32) -> u32 {
        let stack_size = item.stack_size.max(1);
        let mut remaining = quantity;

        for stack in self.slots.iter_mut().flatten() {
            if remaining == 0 {
                break;
            }
            if stack.item == item.id {
                let moved = remaining.min(stack.room());
                stack.quantity += moved;
                remaining -= moved;
            }
        }

        for slot in self.slots.iter_mut().filter(|slot| slot.is_none()) {
            if remaining == 0 {
                break;
            }
            let moved = remaining.min(stack_size);
            *slot = Some(ItemStack {
                item: item.id.clone(),
                quantity: moved,
                stack_size,
            });
            remaining -= moved;
        }

        remaining
    }

    /// Removes one `item`, taking from the last matching stack.
    pub fn take(&mut self, item: &ItemId) -> bool {
        let Some(index) = self
            .slots
            .iter()
            .rposition(|slot| matches!(slot, Some(stack) if &stack.item == item))
        else {
            return false;
        };

        let slot = &mut self.slots[index];
        let emptied = match slot {
            Some(stack) => {
                stack.quantity -= 1;
                stack.quantity == 0
            }
            None => false,
        };
        if emptied {
            *slot = None;
        }
        true
    }

    pub fn count(&self, item: &ItemId) -> u32 {
        self.stacks()
            .filter(|stack| &stack.item == item)
            .map(|stack| stack.quantity)
            .sum()
    }

    /// Occupied slots in slot order.
    pub fn stacks(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().flatten()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}
