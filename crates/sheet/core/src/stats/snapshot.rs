//! Attribute Derivation Engine - the derived snapshot.
//!
//! [`DerivedAttributes`] is a value object recomputed on demand from the
//! character record and the rules configuration. It has no lifecycle of its
//! own: discard it and derive again whenever any input changes.

use super::abilities::AbilityLayer;
use super::armor_class::{ArmorBase, ArmorClass};
use super::attack::{AttackBonus, AttackBonuses};
use super::bonus::{BonusStack, StatLayer};
use super::conditions::{Condition, ConditionSet};
use super::defenses::{SaveLayer, magic_resistance};
use super::movement::{Movement, MovementBonuses};
use super::skills::{SkillBonuses, SkillLayer};
use crate::config::RulesConfig;
use crate::encumbrance::{EncumbranceState, compute_encumbrance};
use crate::state::{Abilities, AbilityScore, Character, Saves, Skills};
use crate::traits::{AttributePath, TraitAdjustments, TraitContext, active_traits};

/// Final, display-ready statistics of one character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedAttributes {
    pub level: u8,
    pub abilities: Abilities<AbilityScore>,
    pub hp_max: i32,
    pub ac: ArmorClass,
    pub attack: AttackBonus,
    pub saves: Saves<i32>,
    pub magic_resistance: i32,
    pub skills: Skills,
    pub speed: i32,
    pub movement: Movement,
    pub xp_modifier: i32,
    /// `None` when encumbrance is disabled.
    pub encumbrance: Option<EncumbranceState>,
}

impl DerivedAttributes {
    /// Derives the snapshot with the conditions recorded on the character.
    pub fn derive(character: &Character, config: &RulesConfig) -> Self {
        DerivationBuilder::new(character, config).build()
    }

    /// Attack bonus for a melee roll.
    pub fn melee_attack(&self) -> i32 {
        self.attack.melee_total()
    }

    /// Attack bonus for a missile roll.
    pub fn missile_attack(&self) -> i32 {
        self.attack.missile_total()
    }

    pub fn skill(&self, id: &str) -> Option<i32> {
        self.skills.get(id)
    }
}

/// Builder for a derivation with extra conditions.
pub struct DerivationBuilder<'a> {
    character: &'a Character,
    config: &'a RulesConfig,
    conditions: ConditionSet,
}

impl<'a> DerivationBuilder<'a> {
    pub fn new(character: &'a Character, config: &'a RulesConfig) -> Self {
        Self {
            character,
            config,
            conditions: ConditionSet::from_base(&character.base),
        }
    }

    /// Adds a condition on top of those recorded on the character.
    pub fn with_condition(mut self, condition: impl Condition + 'static) -> Self {
        self.conditions.add(Box::new(condition));
        self
    }

    pub fn build(self) -> DerivedAttributes {
        let character = self.character;
        let base = &character.base;
        let manual = &character.adjustments;

        let active = active_traits(character);
        let context = TraitContext::new(character.level(), character.wears_heavy_armor());
        let traits = TraitAdjustments::collect(&active, context);

        // Layer 1: abilities feed AC through the DEX modifier.
        let ability_bonuses = AbilityLayer::bonuses(&manual.abilities, &traits);
        let abilities = AbilityLayer::compute(&base.abilities, &ability_bonuses);

        let ac = ArmorClass::compute(
            &ArmorBase::for_character(character),
            &ArmorClass::bonuses(character, &abilities, &traits),
        );
        let attack = AttackBonus::compute(
            &base.attack,
            &AttackBonuses::collect(character, &traits, &self.conditions),
        );
        let saves = SaveLayer::compute(&base.saves, &SaveLayer::bonuses(character, &traits));
        let skills = SkillLayer::compute(&base.skills, &SkillBonuses::collect(character, &traits));

        let encumbrance = self.config.encumbrance.enabled.then(|| {
            compute_encumbrance(
                character,
                self.config.encumbrance.method,
                self.config.encumbrance.significant_load_percent,
            )
        });
        let speed_base = encumbrance
            .as_ref()
            .map_or(base.speed, EncumbranceState::speed);
        let movement = Movement::compute(
            &speed_base,
            &MovementBonuses::collect(character, &traits),
        );

        let derived = DerivedAttributes {
            level: character.level(),
            abilities,
            hp_max: additive(base.hp.max, manual.hp_max, &traits, &AttributePath::HpMax),
            ac,
            attack,
            saves,
            magic_resistance: magic_resistance(character, &traits),
            skills,
            speed: movement.speed,
            movement,
            xp_modifier: additive(
                base.xp_modifier,
                manual.xp_modifier,
                &traits,
                &AttributePath::XpModifier,
            ),
            encumbrance,
        };

        tracing::trace!(
            level = derived.level,
            active_traits = active.len(),
            ac = derived.ac.value,
            attack = derived.attack.value,
            speed = derived.speed,
            "derived attributes"
        );
        derived
    }
}

/// `stored + manual + Σ static traits on path`.
fn additive(stored: i32, manual: i32, traits: &TraitAdjustments, path: &AttributePath) -> i32 {
    let mut stack = BonusStack::new().with_manual(manual);
    stack.add_traits(traits.contributions(path));
    stack.apply(stored)
}
