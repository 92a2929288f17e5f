use std::collections::BTreeMap;
use std::path::Path;

use tracing::{debug, info};

use super::read_source;
use crate::error::BakeError;
use crate::merge::{apply_axis, parse_token, BlockList, MergeMode, SyllabicRecord, NO_BLOCK};
use crate::output::{self, Legend};
use crate::properties::{PositionalCategory, SyllabicCategory};
use crate::source::{parse_range_table, AxisLayout, RangeTable};
use crate::stats::{BakeStats, BakeSummary};
use crate::table::{compile_table, BuilderOptions, CompiledTable, TableEntry};

/// минимальная заполненность парной таблицы
pub const SYLLABIC_OCCUPANCY_FLOOR: u32 = 30;

/// выбросы, которые держим отдельными проверками вне страниц:
/// неразрывный пробел и пунктирный кружок
pub const ALLOWED_SINGLES: &[u32] = &[0x00A0, 0x25CC];

/// ячейка по умолчанию: (Not_Applicable << 8) | Other
pub const DEFAULT_PAIR_CELL: u16 = 0;

/// блоки, входящие в парную таблицу
pub const ALLOWED_BLOCKS: &[&str] = &[
    "Basic Latin",
    "Latin-1 Supplement",
    "Devanagari",
    "Bengali",
    "Gurmukhi",
    "Gujarati",
    "Oriya",
    "Tamil",
    "Telugu",
    "Kannada",
    "Malayalam",
    "Sinhala",
    "Myanmar",
    "Khmer",
    "Vedic Extensions",
    "General Punctuation",
    "Superscripts and Subscripts",
    "Devanagari Extended",
    "Myanmar Extended-B",
    "Myanmar Extended-A",
];

/// тексты источников профиля в порядке подачи
#[derive(Debug)]
pub struct SyllabicSources<'a>
{
    pub syllabic: &'a str,
    pub positional: &'a str,
    pub blocks: &'a str,
}

/// скомпилированная парная таблица со всем, что нужно для печати артефакта
#[derive(Debug)]
pub struct SyllabicTable
{
    pub table: CompiledTable,
    /// одиночные кодпоинты, проверяемые до страниц
    pub singles: Vec<(u32, u16)>,
    pub default_cell: u16,
    pub legends: [Legend; 2],
    /// (имя файла, строки шапки) в порядке подачи
    pub sources: Vec<(String, Vec<String>)>,
    pub stats: BakeStats,
}

impl SyllabicTable
{
    /// поиск по таблице: сначала одиночные кодпоинты, затем страницы, иначе умолчание
    #[inline(always)]
    pub fn get(&self, code: u32) -> u16
    {
        for &(single, cell) in self.singles.iter() {
            if code == single {
                return cell;
            }
        }

        match self.table.get(code) {
            Some(cell) => cell,
            None => self.default_cell,
        }
    }
}

/// упаковка пары категорий: старший байт - позиционная, младший - слоговая
#[inline(always)]
pub fn pair_cell(record: &SyllabicRecord) -> u16
{
    (record.positional as u16) << 8 | record.syllabic as u16
}

/// компиляция парной таблицы из текстов источников
pub fn compile_syllabic(sources: &SyllabicSources) -> Result<SyllabicTable, BakeError>
{
    let layout = AxisLayout::standard();

    let mut syllabic = parse_range_table("IndicSyllabicCategory", sources.syllabic, &layout)?;
    let mut positional = parse_range_table("IndicPositionalCategory", sources.positional, &layout)?;
    let mut block_axis = parse_range_table("Blocks", sources.blocks, &layout)?;

    syllabic.count_default(SyllabicCategory::Other.name());
    positional.count_default(PositionalCategory::NotApplicable.name());
    block_axis.count_default(NO_BLOCK);

    // слияние осей: слоговая и позиционная вводят кодпоинты, блоки только уточняют
    let mut blocks = BlockList::new();
    let mut records: BTreeMap<u32, SyllabicRecord> = BTreeMap::new();
    let default_record = SyllabicRecord::default();

    apply_axis(
        &mut records,
        &syllabic,
        MergeMode::Introduces,
        &default_record,
        |range| parse_token("IndicSyllabicCategory", range, SyllabicCategory::parse),
        |record, value| record.syllabic = value,
    )?;

    apply_axis(
        &mut records,
        &positional,
        MergeMode::Introduces,
        &default_record,
        |range| parse_token("IndicPositionalCategory", range, PositionalCategory::parse),
        |record, value| record.positional = value,
    )?;

    apply_axis(
        &mut records,
        &block_axis,
        MergeMode::RefinesOnly,
        &default_record,
        |range| Ok(blocks.intern(&range.token)),
        |record, value| record.block = value,
    )?;

    // в таблицу входят только разрешённые блоки и одиночные исключения
    records.retain(|code, record| {
        ALLOWED_SINGLES.contains(code) || ALLOWED_BLOCKS.contains(&blocks.name(record.block))
    });

    let mut singles = vec![];

    for &code in ALLOWED_SINGLES.iter() {
        if let Some(record) = records.remove(&code) {
            singles.push((code, pair_cell(&record)));
        }
    }

    let mut stats = BakeStats::new();
    let mut entries: BTreeMap<u32, TableEntry> = BTreeMap::new();

    for (&code, record) in records.iter() {
        stats.inc(record.syllabic.name());

        entries.insert(
            code,
            TableEntry {
                cell: pair_cell(record),
                block: record.block,
            },
        );
    }

    debug!(codepoints = stats.classified(), "парные записи собраны");

    let table = compile_table(
        &entries,
        &blocks,
        &BuilderOptions {
            fill: |_| DEFAULT_PAIR_CELL,
            skip_run_start: None,
            occupancy_floor: SYLLABIC_OCCUPANCY_FLOOR,
        },
    )?;

    let legends = [
        axis_legend("слоговая ось (покрытие в кодпоинтах)", &syllabic, |name| {
            SyllabicCategory::parse(name).map_or("?", SyllabicCategory::short)
        }),
        axis_legend("позиционная ось (покрытие в кодпоинтах)", &positional, |name| {
            PositionalCategory::parse(name).map_or("?", PositionalCategory::short)
        }),
    ];

    Ok(SyllabicTable {
        table,
        singles,
        default_cell: DEFAULT_PAIR_CELL,
        legends,
        sources: vec![
            ("IndicSyllabicCategory.txt".to_string(), syllabic.header),
            ("IndicPositionalCategory.txt".to_string(), positional.header),
            ("Blocks.txt".to_string(), block_axis.header),
        ],
        stats,
    })
}

/// полный цикл: чтение источников, компиляция, печать и запись артефакта
pub fn bake_syllabic(paths: [&Path; 3], target: &Path) -> Result<BakeSummary, BakeError>
{
    let syllabic = read_source(paths[0])?;
    let positional = read_source(paths[1])?;
    let blocks = read_source(paths[2])?;

    let table = compile_syllabic(&SyllabicSources {
        syllabic: &syllabic,
        positional: &positional,
        blocks: &blocks,
    })?;

    let rendered = output::render_syllabic(&table);
    let written = output::write_if_changed(target, &rendered)?;

    info!(
        pages = table.table.pages.len(),
        items = table.table.total,
        occupancy = table.table.occupancy(),
        written,
        "парная таблица собрана"
    );

    Ok(BakeSummary {
        pages: table.table.pages.len(),
        items: table.table.total,
        occupancy: table.table.occupancy(),
        written,
    })
}

/// легенда оси: значения, встреченные в источнике, по алфавиту
fn axis_legend(title: &'static str, table: &RangeTable, short: fn(&str) -> &'static str) -> Legend
{
    let mut rows: Vec<(&'static str, String, u32)> = table
        .counts
        .iter()
        .map(|(name, &count)| (short(name), name.clone(), count))
        .collect();

    rows.sort_by(|a, b| a.1.cmp(&b.1));

    Legend { title, rows }
}
