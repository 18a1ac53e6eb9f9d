//! Level-dependent trait values.
//!
//! A trait's numeric value is either a literal or one of a small closed set of
//! level-keyed strategies. All variants are plain data so trait definitions
//! stay serializable.

/// Strategy for resolving a value at a character level.
pub trait LevelScaling {
    fn value_at(&self, level: u8) -> i32;
}

/// One step of a [`LevelSteps`] table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelStep {
    pub level: u8,
    pub value: i32,
}

/// Step table: the value of the highest step whose level has been reached.
///
/// Below the first step the value is 0.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct LevelSteps {
    steps: Vec<LevelStep>,
}

impl LevelSteps {
    /// Creates a table from `(level, value)` pairs in any order.
    pub fn new(pairs: impl IntoIterator<Item = (u8, i32)>) -> Self {
        let mut steps: Vec<LevelStep> = pairs
            .into_iter()
            .map(|(level, value)| LevelStep { level, value })
            .collect();
        steps.sort_by_key(|step| step.level);
        Self { steps }
    }
}

impl LevelScaling for LevelSteps {
    fn value_at(&self, level: u8) -> i32 {
        // Steps may arrive unsorted from deserialization, so scan for the best match.
        self.steps
            .iter()
            .filter(|step| step.level <= level)
            .max_by_key(|step| step.level)
            .map_or(0, |step| step.value)
    }
}

/// Linear formula: `base + step × ((level − from_level) / every)`, capped at `max`.
///
/// Below `from_level` the value is 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LevelFormula {
    pub base: i32,
    pub step: i32,
    pub every: u8,
    pub from_level: u8,
    pub max: Option<i32>,
}

impl LevelFormula {
    /// `base` at `from_level`, then `+step` every `every` levels.
    pub const fn new(base: i32, step: i32, every: u8) -> Self {
        Self {
            base,
            step,
            every,
            from_level: 1,
            max: None,
        }
    }

    pub const fn capped(mut self, max: i32) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn starting_at(mut self, level: u8) -> Self {
        self.from_level = level;
        self
    }
}

impl Default for LevelFormula {
    fn default() -> Self {
        Self::new(0, 0, 1)
    }
}

impl LevelScaling for LevelFormula {
    fn value_at(&self, level: u8) -> i32 {
        if level < self.from_level {
            return 0;
        }
        let steps = match self.every {
            0 => 0,
            every => i32::from((level - self.from_level) / every),
        };
        let value = self.base + self.step * steps;
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }
}

/// Value carried by a trait adjustment or a limited-use count.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AdjustmentValue {
    Fixed(i32),
    ByLevel(LevelSteps),
    Scaling(LevelFormula),
}

impl AdjustmentValue {
    pub fn resolve(&self, level: u8) -> i32 {
        self.value_at(level)
    }
}

impl LevelScaling for AdjustmentValue {
    fn value_at(&self, level: u8) -> i32 {
        match self {
            AdjustmentValue::Fixed(value) => *value,
            AdjustmentValue::ByLevel(steps) => steps.value_at(level),
            AdjustmentValue::Scaling(formula) => formula.value_at(level),
        }
    }
}

impl Default for AdjustmentValue {
    fn default() -> Self {
        AdjustmentValue::Fixed(0)
    }
}

impl From<i32> for AdjustmentValue {
    fn from(value: i32) -> Self {
        AdjustmentValue::Fixed(value)
    }
}
