use sheet_core::{
    BaseAttributes, BuildItem, BuildKind, Character, MagicTradition, ProgressionRegistry,
    ProgressionTable, RulesConfig, SheetEngine, SpellSlotTable,
};

fn magician_engine() -> SheetEngine {
    let rows = vec![
        vec![1, 0, 0, 0, 0, 0],
        vec![2, 0, 0, 0, 0, 0],
        vec![2, 1, 0, 0, 0, 0],
        vec![2, 2, 0, 0, 0, 0],
    ];
    let table = ProgressionTable::new(MagicTradition::Arcane, rows).unwrap();
    SheetEngine::new(
        RulesConfig::default(),
        ProgressionRegistry::new().with_table("magician", table),
    )
}

fn magician(level: u8) -> Character {
    let class = BuildItem::class("magician", "Magician").with_magic(MagicTradition::Arcane);
    Character::new(BaseAttributes::default().with_level(level)).with_class(class)
}

#[test]
fn manual_rank_adjustment_applies_after_lookup() {
    let engine = magician_engine();
    let mut character = magician(3);
    character.adjustments.magic.arcane.ranks[0] = -1;

    let slots = engine
        .resolve_spell_slots(&character, MagicTradition::Arcane)
        .unwrap();
    assert_eq!(slots[0], 1);
    assert_eq!(slots[1], 1);
    assert_eq!(slots.len(), 6);
}

#[test]
fn levels_past_the_table_use_the_last_row() {
    let engine = magician_engine();
    let slots = engine
        .resolve_spell_slots(&magician(15), MagicTradition::Arcane)
        .unwrap();
    assert_eq!(slots.as_slice(), &[2, 2, 0, 0, 0, 0]);
}

#[test]
fn negative_totals_floor_at_zero() {
    let engine = magician_engine();
    let mut character = magician(1);
    character.adjustments.magic.arcane.ranks[0] = -5;

    let slots = engine
        .resolve_spell_slots(&character, MagicTradition::Arcane)
        .unwrap();
    assert_eq!(slots[0], 0);
}

#[test]
fn class_without_table_has_zero_slots() {
    let engine = magician_engine();
    let enchanter = BuildItem::class("enchanter", "Enchanter").with_magic(MagicTradition::Arcane);
    let character = Character::default().with_class(enchanter);

    let slots = engine
        .resolve_spell_slots(&character, MagicTradition::Arcane)
        .unwrap();
    assert!(slots.iter().all(|max| *max == 0));
}

#[test]
fn fused_kindred_class_keys_the_lookup() {
    let engine = magician_engine();
    let mut fused = BuildItem::new("magician", "Fey Magician", BuildKind::KindredClass);
    fused.magic.push(MagicTradition::Arcane);
    let character = Character::new(BaseAttributes::default().with_level(2)).with_kindred(fused);

    let mut table = SpellSlotTable::new(MagicTradition::Arcane);
    assert!(engine.refresh_spell_slots(&character, &mut table));
    assert_eq!(table.rank(1).map(|slot| slot.max), Some(2));
}

#[test]
fn refresh_preserves_usage_across_level_up() {
    let engine = magician_engine();
    let mut character = magician(2);

    let mut table = SpellSlotTable::new(MagicTradition::Arcane);
    engine.refresh_spell_slots(&character, &mut table);
    table.ranks[0].used = 2;
    table.ranks[0].memorized = vec!["glyph-of-sealing".into(), "vapours-of-dream".into()];

    character.base.level = 3;
    engine.refresh_spell_slots(&character, &mut table);

    assert_eq!(table.ranks[0].max, 2);
    assert_eq!(table.ranks[1].max, 1);
    assert_eq!(table.ranks[0].used, 2);
    assert_eq!(table.ranks[0].memorized.len(), 2);
}
