//! Typed attribute paths.
//!
//! Trait data names its targets with dotted strings (`"saves.doom"`,
//! `"abilities.dex"`, `"skills.tracking"`). [`AttributePath`] is the parsed form
//! the aggregator keys its sums by.

use core::fmt;
use core::str::FromStr;

use crate::error::PathError;
use crate::state::{AbilityKind, SaveKind};

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AttributePath {
    Ability(AbilityKind),
    HpMax,
    Ac,
    Attack,
    AttackMelee,
    AttackMissile,
    Save(SaveKind),
    /// `saves.all` - wildcard used by roll-time options.
    AllSaves,
    MagicResistance,
    Skill(String),
    Speed,
    MovementExploring,
    MovementOverland,
    XpModifier,
}

impl AttributePath {
    pub fn skill(id: impl Into<String>) -> Self {
        AttributePath::Skill(id.into())
    }

    pub fn is_skill(&self) -> bool {
        matches!(self, AttributePath::Skill(_))
    }
}

impl FromStr for AttributePath {
    type Err = PathError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let path = path.trim();
        if path.is_empty() {
            return Err(PathError::Empty);
        }

        let (head, tail) = match path.split_once('.') {
            Some((head, tail)) => (head, Some(tail)),
            None => (path, None),
        };

        match (head, tail) {
            ("abilities", Some(ability)) => ability
                .parse()
                .map(AttributePath::Ability)
                .map_err(|_| PathError::UnknownAbility(ability.to_string())),
            ("hp", Some("max")) => Ok(AttributePath::HpMax),
            ("ac", None) => Ok(AttributePath::Ac),
            ("attack", None) => Ok(AttributePath::Attack),
            ("attack", Some("melee")) => Ok(AttributePath::AttackMelee),
            ("attack", Some("missile")) => Ok(AttributePath::AttackMissile),
            ("saves", Some("all")) => Ok(AttributePath::AllSaves),
            ("saves", Some(save)) => save
                .parse()
                .map(AttributePath::Save)
                .map_err(|_| PathError::UnknownSave(save.to_string())),
            ("magicResistance", None) => Ok(AttributePath::MagicResistance),
            ("skills", Some(id)) if !id.is_empty() => Ok(AttributePath::skill(id)),
            ("skills", _) => Err(PathError::MissingSkill(path.to_string())),
            ("speed", None) => Ok(AttributePath::Speed),
            ("movement", Some("exploring")) => Ok(AttributePath::MovementExploring),
            ("movement", Some("overland")) => Ok(AttributePath::MovementOverland),
            ("xpModifier", None) => Ok(AttributePath::XpModifier),
            _ => Err(PathError::Unknown(path.to_string())),
        }
    }
}

impl fmt::Display for AttributePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributePath::Ability(kind) => write!(f, "abilities.{kind}"),
            AttributePath::HpMax => f.write_str("hp.max"),
            AttributePath::Ac => f.write_str("ac"),
            AttributePath::Attack => f.write_str("attack"),
            AttributePath::AttackMelee => f.write_str("attack.melee"),
            AttributePath::AttackMissile => f.write_str("attack.missile"),
            AttributePath::Save(kind) => write!(f, "saves.{kind}"),
            AttributePath::AllSaves => f.write_str("saves.all"),
            AttributePath::MagicResistance => f.write_str("magicResistance"),
            AttributePath::Skill(id) => write!(f, "skills.{id}"),
            AttributePath::Speed => f.write_str("speed"),
            AttributePath::MovementExploring => f.write_str("movement.exploring"),
            AttributePath::MovementOverland => f.write_str("movement.overland"),
            AttributePath::XpModifier => f.write_str("xpModifier"),
        }
    }
}
