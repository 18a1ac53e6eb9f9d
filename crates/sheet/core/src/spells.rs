//! Spell Slot Progression Resolver.
//!
//! Per class and magic tradition, a table indexed by level gives the slot
//! count of each spell rank. Manual per-rank adjustments are added afterwards
//! and the result is floored at 0.

use std::collections::BTreeMap;

use arrayvec::ArrayVec;

use crate::error::ProgressionError;
use crate::state::{BaseAttributes, Character, TraditionAdjustments};

/// Magic traditions with spell slots.
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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum MagicTradition {
    /// Six spell ranks.
    Arcane,
    /// Five spell ranks.
    Holy,
}

impl MagicTradition {
    /// Rank count of the widest tradition.
    pub const MAX_RANKS: usize = 6;

    pub const ALL: [MagicTradition; 2] = [MagicTradition::Arcane, MagicTradition::Holy];

    pub const fn ranks(self) -> usize {
        match self {
            MagicTradition::Arcane => 6,
            MagicTradition::Holy => 5,
        }
    }
}

/// Slot counts for every rank of one level.
pub type ProgressionRow = ArrayVec<u8, { MagicTradition::MAX_RANKS }>;

/// A validated level → per-rank slot table.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ProgressionTable {
    tradition: MagicTradition,
    rows: Vec<ProgressionRow>,
}

impl ProgressionTable {
    /// Validates `rows` (row 0 = level 1) for `tradition`.
    pub fn new(tradition: MagicTradition, rows: Vec<Vec<u8>>) -> Result<Self, ProgressionError> {
        if rows.is_empty() {
            return Err(ProgressionError::Empty);
        }
        let max = usize::from(BaseAttributes::MAX_LEVEL);
        if rows.len() > max {
            return Err(ProgressionError::TooManyRows {
                rows: rows.len(),
                max,
            });
        }

        let expected = tradition.ranks();
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(index, row)| {
                if row.len() != expected {
                    return Err(ProgressionError::RowWidth {
                        level: index + 1,
                        width: row.len(),
                        expected,
                    });
                }
                Ok(row.into_iter().collect::<ProgressionRow>())
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tradition, rows })
    }

    pub fn tradition(&self) -> MagicTradition {
        self.tradition
    }

    /// Number of levels the table defines.
    pub fn levels(&self) -> usize {
        self.rows.len()
    }

    /// Row for `level`, clamped into the defined range.
    pub fn row(&self, level: u8) -> &[u8] {
        let last = self.rows.len().saturating_sub(1);
        let index = usize::from(level.max(1) - 1).min(last);
        self.rows.get(index).map_or(&[][..], |row| row.as_slice())
    }
}

/// Progression tables keyed by class id and tradition.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressionRegistry {
    tables: BTreeMap<(String, MagicTradition), ProgressionTable>,
}

impl ProgressionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a table, returning the one it replaced.
    pub fn insert(
        &mut self,
        class_id: impl Into<String>,
        table: ProgressionTable,
    ) -> Option<ProgressionTable> {
        let key = (class_id.into(), table.tradition());
        self.tables.insert(key, table)
    }

    pub fn with_table(mut self, class_id: impl Into<String>, table: ProgressionTable) -> Self {
        self.insert(class_id, table);
        self
    }

    pub fn get(&self, class_id: &str, tradition: MagicTradition) -> Option<&ProgressionTable> {
        self.tables.get(&(class_id.to_string(), tradition))
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// One spell rank's slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpellSlot {
    /// Overwritten on every recompute.
    pub max: u32,
    pub used: u32,
    /// Ids of memorized spells.
    pub memorized: Vec<String>,
}

impl SpellSlot {
    pub fn with_max(max: u32) -> Self {
        Self {
            max,
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> u32 {
        self.max.saturating_sub(self.used)
    }
}

/// Slot maxes per rank (index 0 = rank 1) from a progression lookup.
///
/// A missing table yields 0 for every rank before adjustments.
pub fn resolve_spell_slots(
    table: Option<&ProgressionTable>,
    level: u8,
    tradition: MagicTradition,
    adjustments: &[i32],
) -> ArrayVec<u32, { MagicTradition::MAX_RANKS }> {
    let row = table.map_or(&[][..], |table| table.row(level));
    (0..tradition.ranks())
        .map(|rank| {
            let base = row.get(rank).copied().map_or(0, i32::from);
            let adjustment = adjustments.get(rank).copied().unwrap_or(0);
            u32::try_from(base + adjustment).unwrap_or(0)
        })
        .collect()
}

/// True if `character` has access to `tradition`.
///
/// Either build item granting it, or the manual flag, enables it.
pub fn tradition_enabled(character: &Character, tradition: MagicTradition) -> bool {
    character.adjustments.magic.get(tradition).enabled
        || character.build_items().any(|item| item.grants(tradition))
}

/// Persistent spell slot state of one tradition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellSlotTable {
    pub tradition: MagicTradition,
    pub ranks: ArrayVec<SpellSlot, { MagicTradition::MAX_RANKS }>,
}

impl SpellSlotTable {
    /// Empty slots for every rank of `tradition`.
    pub fn new(tradition: MagicTradition) -> Self {
        Self {
            tradition,
            ranks: (0..tradition.ranks()).map(|_| SpellSlot::default()).collect(),
        }
    }

    /// Slot of `rank` (1-based).
    pub fn rank(&self, rank: usize) -> Option<&SpellSlot> {
        rank.checked_sub(1).and_then(|index| self.ranks.get(index))
    }

    pub fn maxes(&self) -> impl Iterator<Item = u32> + '_ {
        self.ranks.iter().map(|slot| slot.max)
    }

    /// Overwrites every rank's `max`; `used` and `memorized` are kept.
    ///
    /// Leaves the table untouched when the tradition is not enabled.
    pub fn refresh(&mut self, character: &Character, registry: &ProgressionRegistry) -> bool {
        if !tradition_enabled(character, self.tradition) {
            tracing::trace!(
                tradition = %self.tradition,
                "tradition disabled, slots untouched"
            );
            return false;
        }

        let table = character
            .class_item()
            .and_then(|class| registry.get(&class.id, self.tradition));
        if table.is_none() {
            tracing::debug!(
                tradition = %self.tradition,
                "no progression table, slots resolve to 0"
            );
        }

        let TraditionAdjustments { ranks, .. } = character.adjustments.magic.get(self.tradition);
        let maxes = resolve_spell_slots(table, character.level(), self.tradition, ranks);

        while self.ranks.len() < maxes.len() {
            self.ranks.push(SpellSlot::default());
        }
        for (slot, max) in self.ranks.iter_mut().zip(maxes) {
            slot.max = max;
        }
        true
    }
}
