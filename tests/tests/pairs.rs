use unicode_syllabic_bakery::output::Legend;
use unicode_syllabic_bakery::profile::{
    compile_syllabic, SyllabicSources, SyllabicTable, DEFAULT_PAIR_CELL,
};
use unicode_syllabic_bakery::properties::{PositionalCategory, SyllabicCategory};
use unicode_syllabic_bakery::source::{parse_range_table, AxisLayout, RangeTable};
use unicode_syllabic_bakery::table::{Page, ROW_ALIGN};

fn sources() -> SyllabicSources<'static>
{
    SyllabicSources {
        syllabic: include_str!("../data/IndicSyllabicCategory.txt"),
        positional: include_str!("../data/IndicPositionalCategory.txt"),
        blocks: include_str!("../data/Blocks.txt"),
    }
}

fn cell(syllabic: SyllabicCategory, positional: PositionalCategory) -> u16
{
    (positional as u16) << 8 | syllabic as u16
}

fn legend_count(legend: &Legend, name: &str) -> u32
{
    legend
        .rows
        .iter()
        .find(|(_, row, _)| row == name)
        .map(|&(_, _, count)| count)
        .unwrap()
}

#[test]
fn test_pages()
{
    let table = compile_syllabic(&sources()).unwrap();

    assert_eq!(
        table.table.pages,
        vec![
            Page { start: 0x0900, end: 0x0978, offset: 0 },
            Page { start: 0x1000, end: 0x10A0, offset: 120 },
            Page { start: 0x2008, end: 0x2010, offset: 280 },
        ]
    );
    assert_eq!(table.table.total, 288);
    assert_eq!(table.table.used, 270);
    assert_eq!(table.table.occupancy(), 93);

    for page in table.table.pages.iter() {
        assert_eq!(page.start % ROW_ALIGN, 0);
        assert_eq!(page.end % ROW_ALIGN, 0);
    }

    assert_eq!(
        table.table.block_marks,
        vec![
            (0x0900, "Devanagari".to_string()),
            (0x1000, "Myanmar".to_string()),
            (0x2008, "General Punctuation".to_string()),
        ]
    );
}

#[test]
fn test_singles()
{
    let table = compile_syllabic(&sources()).unwrap();

    // выбросы извлечены из страниц в порядке списка исключений
    let placeholder = cell(SyllabicCategory::ConsonantPlaceholder, PositionalCategory::NotApplicable);

    assert_eq!(table.singles, vec![(0x00A0, placeholder), (0x25CC, placeholder)]);
    assert_eq!(table.default_cell, DEFAULT_PAIR_CELL);

    assert_eq!(table.get(0x00A0), placeholder);
    assert_eq!(table.get(0x25CC), placeholder);
}

#[test]
fn test_cells()
{
    let table = compile_syllabic(&sources()).unwrap();

    use PositionalCategory as Pos;
    use SyllabicCategory as Syl;

    assert_eq!(table.get(0x0915), cell(Syl::Consonant, Pos::NotApplicable));
    assert_eq!(table.get(0x0941), cell(Syl::VowelDependent, Pos::Bottom));
    assert_eq!(table.get(0x0902), cell(Syl::Bindu, Pos::Top));
    assert_eq!(table.get(0x0903), cell(Syl::Visarga, Pos::Right));
    assert_eq!(table.get(0x094D), cell(Syl::Virama, Pos::Bottom));
    assert_eq!(table.get(0x200C), cell(Syl::NonJoiner, Pos::NotApplicable));
    assert_eq!(table.get(0x200D), cell(Syl::Joiner, Pos::NotApplicable));
    assert_eq!(table.get(0x1039), cell(Syl::InvisibleStacker, Pos::NotApplicable));
    assert_eq!(table.get(0x103A), cell(Syl::PureKiller, Pos::Top));

    // ведические ударения остаются с парой Other+Top: точечные правки
    // здесь не применяются
    assert_eq!(table.get(0x0953), cell(Syl::Other, Pos::Top));

    // числовые значения пары фиксированы форматом артефакта
    assert_eq!(table.get(0x0915), 0x0005);
    assert_eq!(table.get(0x0941), 0x0126);
    assert_eq!(table.get(0x0902), 0x0802);

    // дырки внутри страниц и кодпоинты вне страниц дают умолчание
    assert_eq!(table.get(0x094E), DEFAULT_PAIR_CELL);
    assert_eq!(table.get(0x0964), DEFAULT_PAIR_CELL);
    assert_eq!(table.get(0x25CB), DEFAULT_PAIR_CELL);
    assert_eq!(table.get(0x0F35), DEFAULT_PAIR_CELL);
    assert_eq!(table.get(0x11313), DEFAULT_PAIR_CELL);
}

fn token_of(table: &RangeTable, code: u32) -> Option<&str>
{
    table
        .ranges
        .iter()
        .find(|range| code >= range.start && code <= range.end)
        .map(|range| range.token.as_str())
}

#[test]
fn test_lookup_matches_sources()
{
    let table = compile_syllabic(&sources()).unwrap();

    let layout = AxisLayout::standard();
    let syllabic =
        parse_range_table("ISC", include_str!("../data/IndicSyllabicCategory.txt"), &layout).unwrap();
    let positional =
        parse_range_table("IPC", include_str!("../data/IndicPositionalCategory.txt"), &layout).unwrap();

    // независимая сверка каждой скомпилированной ячейки с парой,
    // собранной прямо из источников
    let spans: Vec<_> = table.table.pages.iter().map(|page| page.start .. page.end).collect();

    for code in spans.into_iter().flatten().chain([0x00A0, 0x25CC]) {
        let expected = cell(
            token_of(&syllabic, code)
                .map_or(SyllabicCategory::Other, |token| SyllabicCategory::parse(token).unwrap()),
            token_of(&positional, code).map_or(PositionalCategory::NotApplicable, |token| {
                PositionalCategory::parse(token).unwrap()
            }),
        );

        assert_eq!(table.get(code), expected, "кодпоинт {:04X}", code);
    }
}

#[test]
fn test_stats()
{
    let table = compile_syllabic(&sources()).unwrap();

    assert_eq!(table.stats.classified(), 270);

    assert_eq!(table.stats.get("Consonant"), 105);
    assert_eq!(table.stats.get("Vowel_Dependent"), 49);
    assert_eq!(table.stats.get("Vowel_Independent"), 39);
    assert_eq!(table.stats.get("Number"), 30);
    assert_eq!(table.stats.get("Tone_Mark"), 19);
    assert_eq!(table.stats.get("Consonant_Medial"), 8);
    assert_eq!(table.stats.get("Bindu"), 4);
    assert_eq!(table.stats.get("Visarga"), 2);
    assert_eq!(table.stats.get("Cantillation_Mark"), 2);
    assert_eq!(table.stats.get("Other"), 2);
    assert_eq!(table.stats.get("Consonant_Placeholder"), 2);
    assert_eq!(table.stats.get("Nukta"), 1);
    assert_eq!(table.stats.get("Avagraha"), 1);
    assert_eq!(table.stats.get("Virama"), 1);
    assert_eq!(table.stats.get("Syllable_Modifier"), 1);
    assert_eq!(table.stats.get("Invisible_Stacker"), 1);
    assert_eq!(table.stats.get("Pure_Killer"), 1);
    assert_eq!(table.stats.get("Non_Joiner"), 1);
    assert_eq!(table.stats.get("Joiner"), 1);

    // выбросы и отброшенные блоки в счёт не входят
    assert_eq!(table.stats.get("Brahmi_Joining_Number"), 0);
}

#[test]
fn test_legends()
{
    let table = compile_syllabic(&sources()).unwrap();

    let [syllabic, positional] = &table.legends;

    assert_eq!(syllabic.title, "слоговая ось (покрытие в кодпоинтах)");
    assert_eq!(positional.title, "позиционная ось (покрытие в кодпоинтах)");

    // легенда считает покрытие источника целиком, до отбора блоков
    assert_eq!(syllabic.rows.len(), 23);
    assert_eq!(syllabic.rows[0], ("A", "Avagraha".to_string(), 2));
    assert_eq!(legend_count(syllabic, "Consonant"), 141);
    assert_eq!(legend_count(syllabic, "Vowel_Dependent"), 72);
    assert_eq!(legend_count(syllabic, "Invisible_Stacker"), 2);
    assert_eq!(legend_count(syllabic, "Virama"), 2);
    assert_eq!(legend_count(syllabic, "Other"), 1);

    assert_eq!(positional.rows.len(), 5);
    assert_eq!(positional.rows[0], ("B", "Bottom".to_string(), 47));
    assert_eq!(legend_count(positional, "Top"), 61);
    assert_eq!(legend_count(positional, "Right"), 46);
    assert_eq!(legend_count(positional, "Left"), 9);
    assert_eq!(legend_count(positional, "Not_Applicable"), 1);
}

#[test]
fn test_sources_captured()
{
    let table: SyllabicTable = compile_syllabic(&sources()).unwrap();

    assert_eq!(table.sources.len(), 3);
    assert_eq!(table.sources[0].0, "IndicSyllabicCategory.txt");
    assert_eq!(table.sources[1].0, "IndicPositionalCategory.txt");
    assert_eq!(table.sources[2].0, "Blocks.txt");

    assert_eq!(table.sources[0].1.len(), 2);
    assert_eq!(table.sources[0].1[0], "# IndicSyllabicCategory-16.0.0.txt");
    assert_eq!(table.sources[2].1[0], "# Blocks-16.0.0.txt");
}
