//! Ability scores and the fixed modifier table.

/// The six abilities that define a character.
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
pub enum AbilityKind {
    Str,
    Int,
    Wis,
    Dex,
    Con,
    Cha,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 6] = [
        AbilityKind::Str,
        AbilityKind::Int,
        AbilityKind::Wis,
        AbilityKind::Dex,
        AbilityKind::Con,
        AbilityKind::Cha,
    ];
}

/// Modifier for an ability score.
///
/// Fixed breakpoints, always evaluated on the adjusted score:
///
/// | score  | modifier |
/// |--------|----------|
/// | ≤ 3    | −3       |
/// | 4–5    | −2       |
/// | 6–8    | −1       |
/// | 9–12   | 0        |
/// | 13–15  | +1       |
/// | 16–17  | +2       |
/// | ≥ 18   | +3       |
pub const fn ability_modifier(score: i32) -> i32 {
    match score {
        i32::MIN..=3 => -3,
        4..=5 => -2,
        6..=8 => -1,
        9..=12 => 0,
        13..=15 => 1,
        16..=17 => 2,
        _ => 3,
    }
}

/// A score together with the modifier computed from it.
///
/// The modifier is never set independently; construct through [`AbilityScore::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityScore {
    pub score: i32,
    pub modifier: i32,
}

impl AbilityScore {
    pub const fn new(score: i32) -> Self {
        Self {
            score,
            modifier: ability_modifier(score),
        }
    }
}

impl Default for AbilityScore {
    fn default() -> Self {
        Self::new(Abilities::<i32>::AVERAGE)
    }
}

/// One value per ability.
///
/// Used for raw stored scores (`Abilities<i32>`), manual adjustments,
/// per-ability bonus stacks, and adjusted scores (`Abilities<AbilityScore>`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Abilities<T> {
    pub str: T,
    pub int: T,
    pub wis: T,
    pub dex: T,
    pub con: T,
    pub cha: T,
}

impl Abilities<i32> {
    /// Score used when a stored ability is absent.
    pub const AVERAGE: i32 = 10;

    pub const fn new(str: i32, int: i32, wis: i32, dex: i32, con: i32, cha: i32) -> Self {
        Self {
            str,
            int,
            wis,
            dex,
            con,
            cha,
        }
    }

    /// All abilities at [`Self::AVERAGE`].
    pub const fn average() -> Self {
        Self::new(10, 10, 10, 10, 10, 10)
    }
}

impl<T> Abilities<T> {
    pub fn get(&self, kind: AbilityKind) -> &T {
        match kind {
            AbilityKind::Str => &self.str,
            AbilityKind::Int => &self.int,
            AbilityKind::Wis => &self.wis,
            AbilityKind::Dex => &self.dex,
            AbilityKind::Con => &self.con,
            AbilityKind::Cha => &self.cha,
        }
    }

    pub fn get_mut(&mut self, kind: AbilityKind) -> &mut T {
        match kind {
            AbilityKind::Str => &mut self.str,
            AbilityKind::Int => &mut self.int,
            AbilityKind::Wis => &mut self.wis,
            AbilityKind::Dex => &mut self.dex,
            AbilityKind::Con => &mut self.con,
            AbilityKind::Cha => &mut self.cha,
        }
    }

    /// Builds a new table by evaluating `f` for every ability.
    pub fn from_fn(mut f: impl FnMut(AbilityKind) -> T) -> Self {
        Self {
            str: f(AbilityKind::Str),
            int: f(AbilityKind::Int),
            wis: f(AbilityKind::Wis),
            dex: f(AbilityKind::Dex),
            con: f(AbilityKind::Con),
            cha: f(AbilityKind::Cha),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (AbilityKind, &T)> {
        AbilityKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.get(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn modifier_matches_table_at_every_boundary() {
        let expected = [
            (1, -3),
            (3, -3),
            (4, -2),
            (5, -2),
            (6, -1),
            (8, -1),
            (9, 0),
            (12, 0),
            (13, 1),
            (15, 1),
            (16, 2),
            (17, 2),
            (18, 3),
            (19, 3),
        ];
        for (score, modifier) in expected {
            assert_eq!(ability_modifier(score), modifier, "score {score}");
        }
    }

    #[test]
    fn modifier_is_recomputed_not_summed() {
        // 12 has modifier 0; +1 crosses into the next bucket.
        let boosted = AbilityScore::new(12 + 1);
        assert_eq!(boosted.modifier, 1);

        // 13 has modifier +1; +2 stays in the +1 bucket rather than becoming +3.
        let boosted = AbilityScore::new(13 + 2);
        assert_eq!(boosted.modifier, 1);
    }

    #[test]
    fn kinds_parse_from_path_segments() {
        assert_eq!(AbilityKind::from_str("dex").unwrap(), AbilityKind::Dex);
        assert_eq!(AbilityKind::from_str("CHA").unwrap(), AbilityKind::Cha);
        assert!(AbilityKind::from_str("luck").is_err());
        assert_eq!(AbilityKind::Wis.as_ref(), "wis");
    }

    #[test]
    fn table_lookup_by_kind() {
        let mut scores = Abilities::new(3, 5, 8, 12, 15, 18);
        *scores.get_mut(AbilityKind::Dex) += 1;
        assert_eq!(*scores.get(AbilityKind::Dex), 13);

        let adjusted = Abilities::from_fn(|kind| AbilityScore::new(*scores.get(kind)));
        assert_eq!(adjusted.str.modifier, -3);
        assert_eq!(adjusted.cha.modifier, 3);
    }
}
