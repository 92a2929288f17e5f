use unicode_syllabic_bakery::classify::UniversalCategory as Cat;
use unicode_syllabic_bakery::profile::{compile_universal, UniversalSources};
use unicode_syllabic_bakery::table::{Page, ROW_ALIGN};

fn sources() -> UniversalSources<'static>
{
    UniversalSources {
        syllabic: include_str!("../data/IndicSyllabicCategory.txt"),
        positional: include_str!("../data/IndicPositionalCategory.txt"),
        joining: include_str!("../data/ArabicShaping.txt"),
        ignorable: include_str!("../data/DerivedCoreProperties.txt"),
        unicode_data: include_str!("../data/UnicodeData.txt"),
        blocks: include_str!("../data/Blocks.txt"),
        scripts: include_str!("../data/Scripts.txt"),
        syllabic_extra: include_str!("../data/IndicSyllabicCategory-Additional.txt"),
        positional_extra: include_str!("../data/IndicPositionalCategory-Additional.txt"),
    }
}

#[test]
fn test_pages()
{
    let table = compile_universal(&sources()).unwrap();

    assert_eq!(
        table.table.pages,
        vec![
            Page { start: 0x00A0, end: 0x00A8, offset: 0 },
            Page { start: 0x0348, end: 0x0350, offset: 8 },
            Page { start: 0x0900, end: 0x0978, offset: 16 },
            Page { start: 0x0CF0, end: 0x0CF8, offset: 136 },
            Page { start: 0x0F18, end: 0x0F98, offset: 144 },
            Page { start: 0x1000, end: 0x10A0, offset: 272 },
            Page { start: 0x1A50, end: 0x1A70, offset: 432 },
            Page { start: 0x1B68, end: 0x1B78, offset: 464 },
            Page { start: 0x2008, end: 0x2010, offset: 480 },
            Page { start: 0x2060, end: 0x2070, offset: 488 },
            Page { start: 0x25C8, end: 0x25D0, offset: 504 },
            Page { start: 0xFE00, end: 0xFE10, offset: 512 },
            Page { start: 0x10D00, end: 0x10D08, offset: 528 },
            Page { start: 0x11050, end: 0x11080, offset: 536 },
            Page { start: 0x11300, end: 0x11378, offset: 584 },
        ]
    );
    assert_eq!(table.table.total, 704);
    assert_eq!(table.table.used, 460);
    assert_eq!(table.table.occupancy(), 65);

    for page in table.table.pages.iter() {
        assert_eq!(page.start % ROW_ALIGN, 0);
        assert_eq!(page.end % ROW_ALIGN, 0);
    }
}

#[test]
fn test_census()
{
    let table = compile_universal(&sources()).unwrap();

    // классифицировано больше, чем попало в страницы: одиночные теги O
    // без соседей не открывают отрезок
    assert_eq!(table.stats.classified(), 466);

    assert_eq!(table.stats.get("B"), 235);
    assert_eq!(table.stats.get("CGJ"), 18);
    assert_eq!(table.stats.get("CMAbv"), 1);
    assert_eq!(table.stats.get("CMBlw"), 4);
    assert_eq!(table.stats.get("CS"), 2);
    assert_eq!(table.stats.get("FAbv"), 1);
    assert_eq!(table.stats.get("FBlw"), 2);
    assert_eq!(table.stats.get("FMAbv"), 2);
    assert_eq!(table.stats.get("FMPst"), 1);
    assert_eq!(table.stats.get("FPst"), 1);
    assert_eq!(table.stats.get("GB"), 4);
    assert_eq!(table.stats.get("H"), 2);
    assert_eq!(table.stats.get("HN"), 1);
    assert_eq!(table.stats.get("IS"), 1);
    assert_eq!(table.stats.get("MBlw"), 7);
    assert_eq!(table.stats.get("MPre"), 2);
    assert_eq!(table.stats.get("MPst"), 1);
    assert_eq!(table.stats.get("N"), 20);
    assert_eq!(table.stats.get("O"), 9);
    assert_eq!(table.stats.get("SMAbv"), 8);
    assert_eq!(table.stats.get("SMBlw"), 1);
    assert_eq!(table.stats.get("SUB"), 8);
    assert_eq!(table.stats.get("Sk"), 1);
    assert_eq!(table.stats.get("VAbv"), 28);
    assert_eq!(table.stats.get("VBlw"), 21);
    assert_eq!(table.stats.get("VMAbv"), 21);
    assert_eq!(table.stats.get("VMBlw"), 3);
    assert_eq!(table.stats.get("VMPst"), 19);
    assert_eq!(table.stats.get("VPre"), 7);
    assert_eq!(table.stats.get("VPst"), 22);
    assert_eq!(table.stats.get("WJ"), 12);
    assert_eq!(table.stats.get("ZWNJ"), 1);

    // в источниках нет иероглифов, репх и некоторых позиций
    assert_eq!(table.stats.get("G"), 0);
    assert_eq!(table.stats.get("J"), 0);
    assert_eq!(table.stats.get("SB"), 0);
    assert_eq!(table.stats.get("SE"), 0);
    assert_eq!(table.stats.get("R"), 0);
    assert_eq!(table.stats.get("MAbv"), 0);
    assert_eq!(table.stats.get("VMPre"), 0);
    assert_eq!(table.stats.get("FMBlw"), 0);
}

#[test]
fn test_get()
{
    let table = compile_universal(&sources()).unwrap();

    // деванагари
    assert_eq!(table.get(0x0915), Cat::B);
    assert_eq!(table.get(0x093F), Cat::VPre);
    assert_eq!(table.get(0x0941), Cat::VBlw);
    assert_eq!(table.get(0x094D), Cat::H);
    assert_eq!(table.get(0x0902), Cat::VMAbv);
    assert_eq!(table.get(0x0903), Cat::VMPst);

    // ведические ударения: точечная правка снимает позицию
    assert_eq!(table.get(0x0953), Cat::O);
    assert_eq!(table.get(0x0954), Cat::O);

    // соседи правки не затронуты, 0955 - из той же строки источника
    assert_eq!(table.get(0x0951), Cat::VMAbv);
    assert_eq!(table.get(0x0952), Cat::VMBlw);
    assert_eq!(table.get(0x0955), Cat::VAbv);

    // дырки в страницах: назначенный кодпоинт против зарезервированного
    assert_eq!(table.get(0x0950), Cat::O);
    assert_eq!(table.get(0x094E), Cat::WJ);
    assert_eq!(table.get(0x0964), Cat::O);

    // тибетские правки слоговой оси
    assert_eq!(table.get(0x0F19), Cat::VBlw);
    assert_eq!(table.get(0x0F3E), Cat::VPst);
    assert_eq!(table.get(0x0F3F), Cat::VPre);
    assert_eq!(table.get(0x0F7F), Cat::O);
    assert_eq!(table.get(0x0F45), Cat::O);
    assert_eq!(table.get(0x0F48), Cat::WJ);
    assert_eq!(table.get(0x0F6E), Cat::WJ);

    // мьянма и тай тхам
    assert_eq!(table.get(0x1039), Cat::IS);
    assert_eq!(table.get(0x103A), Cat::VAbv);
    assert_eq!(table.get(0x1A58), Cat::FMAbv);
    assert_eq!(table.get(0x1A5A), Cat::FAbv);
    assert_eq!(table.get(0x1A60), Cat::Sk);

    // каннада из дополнительной оси
    assert_eq!(table.get(0x0CF1), Cat::CS);
    assert_eq!(table.get(0x0CF0), Cat::WJ);

    // ханифи рохинджа вводится соединительным типом
    assert_eq!(table.get(0x10D01), Cat::B);

    // брахми: цифры и числовой соединитель
    assert_eq!(table.get(0x11052), Cat::N);
    assert_eq!(table.get(0x11066), Cat::B);
    assert_eq!(table.get(0x1107F), Cat::HN);

    // общая пунктуация и селекторы вариаций
    assert_eq!(table.get(0x2008), Cat::O);
    assert_eq!(table.get(0x200B), Cat::WJ);
    assert_eq!(table.get(0x200C), Cat::ZWNJ);
    assert_eq!(table.get(0x200D), Cat::CGJ);
    assert_eq!(table.get(0x2065), Cat::WJ);
    assert_eq!(table.get(0x206A), Cat::O);
    assert_eq!(table.get(0x034F), Cat::CGJ);
    assert_eq!(table.get(0xFE05), Cat::CGJ);

    // запретная письменность выброшена из страниц, но кодпоинт назначен
    assert_eq!(table.get(0x0627), Cat::O);
    assert_eq!(table.table.get(0x0627), None);

    // классифицированные одиночки вне страниц откатываются на умолчание
    assert_eq!(table.get(0x1160), Cat::O);
    assert_eq!(table.get(0x1BCA0), Cat::O);
    assert_eq!(table.table.get(0x1160), None);

    // совсем неизвестный кодпоинт
    assert_eq!(table.get(0x0800), Cat::WJ);
}

#[test]
fn test_row_cells()
{
    let table = compile_universal(&sources()).unwrap();

    // строка 0x0900: бинду, бинду, бинду, висарга, четыре независимых гласных
    assert_eq!(
        table.table.cells[16 .. 24],
        [0x20u16, 0x20, 0x20, 0x23, 0x00, 0x00, 0x00, 0x00]
    );

    // строка 0x2008: пунктуация, ZWSP, ZWNJ, ZWJ, LRM, RLM
    assert_eq!(
        table.table.cells[480 .. 488],
        [0x16u16, 0x16, 0x16, 0x26, 0x27, 0x01, 0x26, 0x26]
    );
}

#[test]
fn test_block_marks()
{
    let table = compile_universal(&sources()).unwrap();

    assert_eq!(table.table.block_marks.len(), 14);
    assert_eq!(table.table.block_marks[0], (0x00A0, "Latin-1 Supplement".to_string()));
    assert_eq!(table.table.block_marks[8], (0x2008, "General Punctuation".to_string()));

    assert!(table
        .table
        .block_marks
        .contains(&(0x11300, "Grantha".to_string())));

    // обе страницы пунктуации принадлежат одному блоку - метка одна
    assert!(!table.table.block_marks.iter().any(|mark| mark.0 == 0x2060));
}

#[test]
fn test_assigned()
{
    let table = compile_universal(&sources()).unwrap();

    assert_eq!(table.assigned.len(), 647);
    assert!(table.assigned.contains(&0x0915));
    assert!(table.assigned.contains(&0x206A));
    assert!(!table.assigned.contains(&0x0800));
    assert!(!table.assigned.contains(&0x2065));
}

#[test]
fn test_sources_order()
{
    let table = compile_universal(&sources()).unwrap();

    assert_eq!(table.sources.len(), 9);
    assert_eq!(table.sources[0].0, "IndicSyllabicCategory.txt");
    assert_eq!(table.sources[4].0, "UnicodeData.txt");
    assert_eq!(table.sources[8].0, "IndicPositionalCategory-Additional.txt");

    // у UnicodeData.txt шапки нет
    assert!(table.sources[4].1.is_empty());

    // у дополнительной оси шапка - ведущий блок комментариев
    assert!(!table.sources[7].1.is_empty());
}
