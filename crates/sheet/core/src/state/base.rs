//! Stored base attributes - the only inputs the player rolls or writes down.
//!
//! These values are read, never written, by the derivation engine.

use super::abilities::Abilities;

/// The five saving throws. Targets are lower-is-better.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SaveKind {
    Doom,
    Ray,
    Hold,
    Blast,
    Spell,
}

impl SaveKind {
    pub const ALL: [SaveKind; 5] = [
        SaveKind::Doom,
        SaveKind::Ray,
        SaveKind::Hold,
        SaveKind::Blast,
        SaveKind::Spell,
    ];
}

/// One value per saving throw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Saves<T = i32> {
    pub doom: T,
    pub ray: T,
    pub hold: T,
    pub blast: T,
    pub spell: T,
}

impl<T> Saves<T> {
    pub fn get(&self, kind: SaveKind) -> &T {
        match kind {
            SaveKind::Doom => &self.doom,
            SaveKind::Ray => &self.ray,
            SaveKind::Hold => &self.hold,
            SaveKind::Blast => &self.blast,
            SaveKind::Spell => &self.spell,
        }
    }

    pub fn get_mut(&mut self, kind: SaveKind) -> &mut T {
        match kind {
            SaveKind::Doom => &mut self.doom,
            SaveKind::Ray => &mut self.ray,
            SaveKind::Hold => &mut self.hold,
            SaveKind::Blast => &mut self.blast,
            SaveKind::Spell => &mut self.spell,
        }
    }

    pub fn from_fn(mut f: impl FnMut(SaveKind) -> T) -> Self {
        Self {
            doom: f(SaveKind::Doom),
            ray: f(SaveKind::Ray),
            hold: f(SaveKind::Hold),
            blast: f(SaveKind::Blast),
            spell: f(SaveKind::Spell),
        }
    }
}

/// The three skills every character has.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum SkillKind {
    Listen,
    Search,
    Survival,
}

impl SkillKind {
    pub const ALL: [SkillKind; 3] = [SkillKind::Listen, SkillKind::Search, SkillKind::Survival];
}

/// A class- or kindred-granted skill beyond the three common ones.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExtraSkill {
    pub id: String,
    pub target: i32,
}

impl ExtraSkill {
    pub fn new(id: impl Into<String>, target: i32) -> Self {
        Self {
            id: id.into(),
            target,
        }
    }
}

/// Skill targets keyed by skill id.
///
/// Used for stored targets, manual adjustments and derived targets alike.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Skills {
    pub listen: i32,
    pub search: i32,
    pub survival: i32,
    pub extra: Vec<ExtraSkill>,
}

impl Skills {
    /// Stored target for a common skill nobody has trained.
    pub const DEFAULT_TARGET: i32 = 6;

    /// Common skills at [`Self::DEFAULT_TARGET`], no extras.
    pub fn untrained() -> Self {
        Self {
            listen: Self::DEFAULT_TARGET,
            search: Self::DEFAULT_TARGET,
            survival: Self::DEFAULT_TARGET,
            extra: Vec::new(),
        }
    }

    pub fn with_extra(mut self, id: impl Into<String>, target: i32) -> Self {
        self.set(&id.into(), target);
        self
    }

    pub fn common(&self, kind: SkillKind) -> i32 {
        match kind {
            SkillKind::Listen => self.listen,
            SkillKind::Search => self.search,
            SkillKind::Survival => self.survival,
        }
    }

    /// Value for a skill id; `None` when the character has no such skill.
    pub fn get(&self, id: &str) -> Option<i32> {
        match id.parse::<SkillKind>() {
            Ok(kind) => Some(self.common(kind)),
            Err(_) => self
                .extra
                .iter()
                .find(|skill| skill.id == id)
                .map(|skill| skill.target),
        }
    }

    /// Sets a skill value, appending an extra skill if the id is new.
    pub fn set(&mut self, id: &str, value: i32) {
        match id.parse::<SkillKind>() {
            Ok(SkillKind::Listen) => self.listen = value,
            Ok(SkillKind::Search) => self.search = value,
            Ok(SkillKind::Survival) => self.survival = value,
            Err(_) => match self.extra.iter_mut().find(|skill| skill.id == id) {
                Some(skill) => skill.target = value,
                None => self.extra.push(ExtraSkill::new(id, value)),
            },
        }
    }

    /// Ids and values in display order: common skills first, then extras.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        SkillKind::ALL
            .into_iter()
            .map(|kind| (<&'static str>::from(kind), self.common(kind)))
            .chain(
                self.extra
                    .iter()
                    .map(|skill| (skill.id.as_str(), skill.target)),
            )
    }
}

/// Current and maximum hit points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    pub value: i32,
    pub max: i32,
}

impl HitPoints {
    pub const fn new(value: i32, max: i32) -> Self {
        Self { value, max }
    }
}

/// Raw stored values for one character.
///
/// Missing values deserialize to neutral defaults (level 1, average
/// abilities, untrained skills, unarmored AC 10).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BaseAttributes {
    /// Character level, 1..=15.
    pub level: u8,
    pub hp: HitPoints,
    /// AC of the character with no body armor equipped.
    pub ac: i32,
    pub attack: i32,
    pub saves: Saves,
    pub skills: Skills,
    /// Speed in feet per round when encumbrance is not tracked.
    pub speed: i32,
    pub magic_resistance: i32,
    /// Experience modifier in percent.
    pub xp_modifier: i32,
    /// Exhaustion points; each imposes −1 to attack.
    pub exhaustion: u8,
    pub abilities: Abilities<i32>,
}

impl BaseAttributes {
    pub const MIN_LEVEL: u8 = 1;
    pub const MAX_LEVEL: u8 = 15;
    pub const UNARMORED_AC: i32 = 10;
    pub const DEFAULT_SPEED: i32 = 40;

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    pub fn with_abilities(mut self, abilities: Abilities<i32>) -> Self {
        self.abilities = abilities;
        self
    }
}

impl Default for BaseAttributes {
    fn default() -> Self {
        Self {
            level: Self::MIN_LEVEL,
            hp: HitPoints::default(),
            ac: Self::UNARMORED_AC,
            attack: 0,
            saves: Saves::default(),
            skills: Skills::untrained(),
            speed: Self::DEFAULT_SPEED,
            magic_resistance: 0,
            xp_modifier: 0,
            exhaustion: 0,
            abilities: Abilities::average(),
        }
    }
}
