//! Labelled additive bonuses shared by every stat layer.
//!
//! Everything on the sheet is additive: a layer starts from a base value and
//! adds the entries of a [`BonusStack`]. Each entry keeps the label of where it
//! came from so any total can be broken down for display.

use core::fmt;

use crate::state::AbilityKind;
use crate::traits::TraitContribution;

/// Where a bonus came from.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BonusSource {
    /// Stored value the stack is applied to.
    Base,
    /// Unarmored AC.
    Unarmored,
    /// Equipped body armor, by item name.
    Armor(String),
    /// Equipped shield, by item name.
    Shield(String),
    /// Modifier of an adjusted ability score.
    Ability(AbilityKind),
    /// Static adjustment from an active trait.
    Trait { id: String, name: String },
    /// Player-entered adjustment.
    Manual,
    /// Condition such as exhaustion.
    Condition(String),
    /// Speed tier from the encumbrance method.
    Encumbrance,
}

impl fmt::Display for BonusSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BonusSource::Base => f.write_str("base"),
            BonusSource::Unarmored => f.write_str("unarmored"),
            BonusSource::Armor(name) | BonusSource::Shield(name) => f.write_str(name),
            BonusSource::Ability(kind) => write!(f, "{kind} modifier"),
            BonusSource::Trait { name, .. } => f.write_str(name),
            BonusSource::Manual => f.write_str("manual"),
            BonusSource::Condition(name) => f.write_str(name),
            BonusSource::Encumbrance => f.write_str("encumbrance"),
        }
    }
}

/// A single signed contribution to a stat.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bonus {
    pub source: BonusSource,
    pub value: i32,
}

impl Bonus {
    pub fn new(source: BonusSource, value: i32) -> Self {
        Self { source, value }
    }

    pub fn manual(value: i32) -> Self {
        Self::new(BonusSource::Manual, value)
    }
}

impl From<&TraitContribution> for Bonus {
    fn from(contribution: &TraitContribution) -> Self {
        Self::new(
            BonusSource::Trait {
                id: contribution.trait_id.clone(),
                name: contribution.name.clone(),
            },
            contribution.value,
        )
    }
}

/// Ordered collection of bonuses for one stat.
///
/// Zero-valued bonuses are dropped on insert; they cannot change a total and
/// would only clutter breakdowns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct BonusStack {
    bonuses: Vec<Bonus>,
}

impl BonusStack {
    pub fn new() -> Self {
        Self {
            bonuses: Vec::new(),
        }
    }

    pub fn add(&mut self, bonus: Bonus) {
        if bonus.value != 0 {
            self.bonuses.push(bonus);
        }
    }

    pub fn extend(&mut self, bonuses: impl IntoIterator<Item = Bonus>) {
        for bonus in bonuses {
            self.add(bonus);
        }
    }

    /// Adds every trait contribution in order.
    pub fn add_traits(&mut self, contributions: &[TraitContribution]) {
        self.extend(contributions.iter().map(Bonus::from));
    }

    pub fn total(&self) -> i32 {
        self.bonuses.iter().map(|bonus| bonus.value).sum()
    }

    /// `base` plus every bonus. Never clamped.
    pub fn apply(&self, base: i32) -> i32 {
        base + self.total()
    }

    pub fn entries(&self) -> &[Bonus] {
        &self.bonuses
    }

    pub fn is_empty(&self) -> bool {
        self.bonuses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bonuses.len()
    }
}

/// Builder-style helpers.
impl BonusStack {
    pub fn with(mut self, source: BonusSource, value: i32) -> Self {
        self.add(Bonus::new(source, value));
        self
    }

    pub fn with_manual(self, value: i32) -> Self {
        self.with(BonusSource::Manual, value)
    }
}

/// A stat layer following the Base -> Bonuses -> Final pattern.
///
/// ```text
/// Abilities<i32>   + AbilityBonuses  -> Abilities<AbilityScore>
/// ArmorBase        + BonusStack      -> ArmorClass
/// i32 (attack)     + AttackBonuses   -> AttackBonus
/// Saves<i32>       + SaveBonuses     -> Saves<i32>
/// Skills           + SkillBonuses    -> Skills
/// i32 (speed base) + MovementBonuses -> Movement
/// ```
pub trait StatLayer {
    /// The base/input type for this layer
    type Base;

    /// The bonuses type for this layer
    type Bonuses;

    /// The final/output type for this layer
    type Final;

    /// Compute the final values from base and bonuses
    fn compute(base: &Self::Base, bonuses: &Self::Bonuses) -> Self::Final;

    /// Create an empty bonus holder
    fn empty_bonuses() -> Self::Bonuses;

    /// Compute with no bonuses (convenience method)
    fn from_base(base: &Self::Base) -> Self::Final {
        Self::compute(base, &Self::empty_bonuses())
    }
}
