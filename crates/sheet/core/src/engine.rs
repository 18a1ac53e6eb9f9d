//! Sheet engine facade.
//!
//! [`SheetEngine`] bundles the rules configuration and the spell progression
//! tables so callers never reach for ambient settings. Every operation is a
//! pure read of the character record.

use arrayvec::ArrayVec;

use crate::config::RulesConfig;
use crate::encumbrance::{self, EncumbranceState};
use crate::spells::{self, MagicTradition, ProgressionRegistry, SpellSlotTable};
use crate::state::Character;
use crate::stats::{DerivationBuilder, DerivedAttributes};
use crate::traits::{self, RollOption, TraitDisplay};

/// Entry point for every derivation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SheetEngine {
    config: RulesConfig,
    progressions: ProgressionRegistry,
}

impl SheetEngine {
    pub fn new(config: RulesConfig, progressions: ProgressionRegistry) -> Self {
        Self {
            config,
            progressions,
        }
    }

    pub fn with_config(config: RulesConfig) -> Self {
        Self::new(config, ProgressionRegistry::new())
    }

    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn progressions(&self) -> &ProgressionRegistry {
        &self.progressions
    }

    /// Final snapshot of `character`.
    pub fn derive_attributes(&self, character: &Character) -> DerivedAttributes {
        DerivedAttributes::derive(character, &self.config)
    }

    /// Derivation builder for adding transient conditions.
    pub fn derivation<'a>(&'a self, character: &'a Character) -> DerivationBuilder<'a> {
        DerivationBuilder::new(character, &self.config)
    }

    /// Load and speed tier under the configured method.
    ///
    /// Computed even when encumbrance is disabled for derivation, so the load
    /// can still be shown.
    pub fn compute_encumbrance(&self, character: &Character) -> EncumbranceState {
        let settings = &self.config.encumbrance;
        let percent = settings.significant_load_percent;
        encumbrance::compute_encumbrance(character, settings.method, percent)
    }

    /// Slot maxes for `tradition`, or `None` if the character lacks it.
    pub fn resolve_spell_slots(
        &self,
        character: &Character,
        tradition: MagicTradition,
    ) -> Option<ArrayVec<u32, { MagicTradition::MAX_RANKS }>> {
        if !spells::tradition_enabled(character, tradition) {
            return None;
        }
        let table = character
            .class_item()
            .and_then(|class| self.progressions.get(&class.id, tradition));
        let adjustments = &character.adjustments.magic.get(tradition).ranks;
        let slots = spells::resolve_spell_slots(table, character.level(), tradition, adjustments);
        Some(slots)
    }

    /// Refreshes `table` in place; see [`SpellSlotTable::refresh`].
    pub fn refresh_spell_slots(&self, character: &Character, table: &mut SpellSlotTable) -> bool {
        table.refresh(character, &self.progressions)
    }

    /// Fresh slot tables for every tradition the character has.
    pub fn spell_slot_tables(&self, character: &Character) -> Vec<SpellSlotTable> {
        MagicTradition::ALL
            .into_iter()
            .filter_map(|tradition| {
                let mut table = SpellSlotTable::new(tradition);
                self.refresh_spell_slots(character, &mut table)
                    .then_some(table)
            })
            .collect()
    }

    /// Opt-in options for a roll on `roll_path` (`"saves.doom"`, `"abilities.str"`).
    pub fn roll_options(&self, character: &Character, roll_path: &str) -> Vec<RollOption> {
        let active = traits::active_traits(character);
        traits::roll_options(&active, character.level(), roll_path)
    }

    pub fn display_traits(&self, character: &Character) -> Vec<TraitDisplay> {
        traits::display_traits(character)
    }
}
