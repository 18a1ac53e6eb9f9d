//! Trait definitions and the build items that carry them.

use super::value::AdjustmentValue;
use crate::spells::MagicTradition;

/// What kind of rule a trait represents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum TraitType {
    /// Ability the player activates, possibly with limited uses.
    Active,
    #[default]
    Passive,
    Info,
    Restrictions,
    /// Numeric adjustment to a derived attribute or roll.
    Adjustment,
    NaturalWeapon,
    AlignmentRestriction,
    SizeRestriction,
}

/// How an adjustment trait combines with its target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[strum(serialize_all = "camelCase")]
pub enum AdjustmentType {
    /// Added into the passive snapshot.
    #[default]
    Static,
    /// Offered as an opt-in bonus when a matching roll is made.
    RollOption,
    /// Replaces the stored base of each target skill.
    SkillOverride,
    /// Player-facing reminder; never applied.
    Info,
}

/// Numeric payload of an adjustment trait.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Adjustment {
    pub kind: AdjustmentType,
    /// Single target path (static, roll option, info).
    pub target: Option<String>,
    /// Target paths for skill overrides.
    pub targets: Vec<String>,
    pub value: AdjustmentValue,
}

impl Adjustment {
    pub fn new(
        kind: AdjustmentType,
        target: impl Into<String>,
        value: impl Into<AdjustmentValue>,
    ) -> Self {
        Self {
            kind,
            target: Some(target.into()),
            targets: Vec::new(),
            value: value.into(),
        }
    }

    pub fn skill_override<S: Into<String>>(
        targets: impl IntoIterator<Item = S>,
        value: impl Into<AdjustmentValue>,
    ) -> Self {
        Self {
            kind: AdjustmentType::SkillOverride,
            target: None,
            targets: targets.into_iter().map(Into::into).collect(),
            value: value.into(),
        }
    }
}

/// Limited uses of an active ability, scaled by level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraitUses {
    pub max: AdjustmentValue,
    /// Free-form period shown next to the count ("per day", "per turn").
    pub period: String,
}

/// A named rule attached to a build item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraitDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    pub trait_type: TraitType,
    pub adjustment: Option<Adjustment>,
    /// Trait is locked below this level.
    pub min_level: Option<u8>,
    /// Trait is suppressed while medium or heavy body armor is equipped.
    pub requires_no_heavy_armor: bool,
    /// Parent trait whose selection list must contain this trait's id.
    pub parent_trait: Option<String>,
    pub uses: Option<TraitUses>,
}

impl TraitDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>, trait_type: TraitType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            trait_type,
            ..Self::default()
        }
    }

    /// Shorthand for an adjustment trait.
    pub fn adjustment(
        id: impl Into<String>,
        name: impl Into<String>,
        adjustment: Adjustment,
    ) -> Self {
        Self::new(id, name, TraitType::Adjustment).with_adjustment(adjustment)
    }

    pub fn with_adjustment(mut self, adjustment: Adjustment) -> Self {
        self.adjustment = Some(adjustment);
        self
    }

    pub fn with_min_level(mut self, level: u8) -> Self {
        self.min_level = Some(level);
        self
    }

    pub fn without_heavy_armor(mut self) -> Self {
        self.requires_no_heavy_armor = true;
        self
    }

    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent_trait = Some(parent.into());
        self
    }

    pub fn with_uses(mut self, max: impl Into<AdjustmentValue>, period: impl Into<String>) -> Self {
        self.uses = Some(TraitUses {
            max: max.into(),
            period: period.into(),
        });
        self
    }

    /// True once the character reaches `min_level` (or there is no gate).
    pub fn is_unlocked(&self, level: u8) -> bool {
        self.min_level.is_none_or(|min| level >= min)
    }

    /// Adjustment payload, only for traits of type [`TraitType::Adjustment`].
    pub fn adjustment_of(&self, kind: AdjustmentType) -> Option<&Adjustment> {
        match (&self.trait_type, &self.adjustment) {
            (TraitType::Adjustment, Some(adjustment)) if adjustment.kind == kind => {
                Some(adjustment)
            }
            _ => None,
        }
    }
}

/// The four display categories a build item sorts its traits into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum TraitCategory {
    Active,
    Passive,
    Info,
    Restrictions,
}

impl TraitCategory {
    /// Flattening order used by the resolver.
    pub const ORDER: [TraitCategory; 4] = [
        TraitCategory::Active,
        TraitCategory::Passive,
        TraitCategory::Info,
        TraitCategory::Restrictions,
    ];
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TraitCategories {
    pub active: Vec<TraitDefinition>,
    pub passive: Vec<TraitDefinition>,
    pub info: Vec<TraitDefinition>,
    pub restrictions: Vec<TraitDefinition>,
}

impl TraitCategories {
    pub fn get(&self, category: TraitCategory) -> &[TraitDefinition] {
        match category {
            TraitCategory::Active => &self.active,
            TraitCategory::Passive => &self.passive,
            TraitCategory::Info => &self.info,
            TraitCategory::Restrictions => &self.restrictions,
        }
    }

    pub fn get_mut(&mut self, category: TraitCategory) -> &mut Vec<TraitDefinition> {
        match category {
            TraitCategory::Active => &mut self.active,
            TraitCategory::Passive => &mut self.passive,
            TraitCategory::Info => &mut self.info,
            TraitCategory::Restrictions => &mut self.restrictions,
        }
    }

    /// All traits in flattening order, tagged with their category.
    pub fn iter(&self) -> impl Iterator<Item = (TraitCategory, &TraitDefinition)> {
        TraitCategory::ORDER
            .into_iter()
            .flat_map(move |category| {
                self.get(category).iter().map(move |t| (category, t))
            })
    }

    pub fn len(&self) -> usize {
        self.active.len() + self.passive.len() + self.info.len() + self.restrictions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Role a build item plays for the character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum BuildKind {
    #[default]
    Kindred,
    Class,
    /// A single item that is both kindred and class.
    KindredClass,
}

/// A kindred, class, or fused kindred-class item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildItem {
    pub id: String,
    pub name: String,
    pub kind: BuildKind,
    pub traits: TraitCategories,
    /// Magic traditions this item grants.
    pub magic: Vec<MagicTradition>,
}

impl BuildItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: BuildKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    pub fn kindred(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, BuildKind::Kindred)
    }

    pub fn class(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(id, name, BuildKind::Class)
    }

    pub fn with_trait(mut self, category: TraitCategory, definition: TraitDefinition) -> Self {
        self.traits.get_mut(category).push(definition);
        self
    }

    pub fn with_magic(mut self, tradition: MagicTradition) -> Self {
        if !self.magic.contains(&tradition) {
            self.magic.push(tradition);
        }
        self
    }

    pub fn grants(&self, tradition: MagicTradition) -> bool {
        self.magic.contains(&tradition)
    }
}
