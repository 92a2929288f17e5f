use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use tracing::{debug, info};

use super::read_source;
use crate::classify::{classify, refine, UniversalCategory};
use crate::error::BakeError;
use crate::merge::{
    apply_axis, apply_fixes, parse_token, BlockList, MergeMode, PointFix, UniversalRecord,
};
use crate::output;
use crate::properties::{GeneralCategory, JoiningType, PositionalCategory, SyllabicCategory};
use crate::source::{parse_range_table, AxisLayout, HeaderRule, TokenRule};
use crate::stats::{BakeStats, BakeSummary};
use crate::table::{compile_table, BuilderOptions, CompiledTable, TableEntry};

/// минимальная заполненность универсальной таблицы
pub const UNIVERSAL_OCCUPANCY_FLOOR: u32 = 50;

/// письменности с отдельными движками формовки - в таблицу не входят
pub const DISABLED_SCRIPTS: &[&str] = &["Arabic", "Lao", "Samaritan", "Syriac", "Thai"];

/// правки слоговой оси: кодпоинты без ISC в источниках, но с известной ролью
const SYLLABIC_FIXES: &[PointFix<SyllabicCategory>] = &[
    PointFix {
        range: 0x1CE2 ..= 0x1CE8,
        value: SyllabicCategory::CantillationMark,
    },
    PointFix {
        range: 0x0F18 ..= 0x0F19,
        value: SyllabicCategory::VowelDependent,
    },
    PointFix {
        range: 0x0F3E ..= 0x0F3F,
        value: SyllabicCategory::VowelDependent,
    },
    PointFix {
        range: 0x1BF2 ..= 0x1BF3,
        value: SyllabicCategory::Nukta,
    },
    PointFix {
        range: 0x1CED ..= 0x1CED,
        value: SyllabicCategory::ToneMark,
    },
];

/// правки позиционной оси
const POSITIONAL_FIXES: &[PointFix<PositionalCategory>] = &[
    PointFix {
        range: 0x1BF2 ..= 0x1BF3,
        value: PositionalCategory::Bottom,
    },
    PointFix {
        range: 0x0953 ..= 0x0954,
        value: PositionalCategory::NotApplicable,
    },
    PointFix {
        range: 0xA926 ..= 0xA92A,
        value: PositionalCategory::Top,
    },
    PointFix {
        range: 0x11302 ..= 0x11303,
        value: PositionalCategory::Top,
    },
    PointFix {
        range: 0x114C1 ..= 0x114C1,
        value: PositionalCategory::Top,
    },
    PointFix {
        range: 0x1CF8 ..= 0x1CF9,
        value: PositionalCategory::Top,
    },
    PointFix {
        range: 0x1112A ..= 0x1112B,
        value: PositionalCategory::Top,
    },
    PointFix {
        range: 0x11131 ..= 0x11132,
        value: PositionalCategory::Top,
    },
];

/// тексты источников профиля в порядке подачи
#[derive(Debug)]
pub struct UniversalSources<'a>
{
    pub syllabic: &'a str,
    pub positional: &'a str,
    pub joining: &'a str,
    pub ignorable: &'a str,
    pub unicode_data: &'a str,
    pub blocks: &'a str,
    pub scripts: &'a str,
    pub syllabic_extra: &'a str,
    pub positional_extra: &'a str,
}

/// скомпилированная универсальная таблица
#[derive(Debug)]
pub struct UniversalTable
{
    pub table: CompiledTable,
    /// кодпоинты, перечисленные в UnicodeData.txt
    pub assigned: HashSet<u32>,
    /// (имя файла, строки шапки) в порядке подачи
    pub sources: Vec<(String, Vec<String>)>,
    /// покрытие по тегам категорий
    pub stats: BakeStats,
}

impl UniversalTable
{
    /// категория кодпоинта: страницы, вне таблицы - умолчание по назначенности
    #[inline(always)]
    pub fn get(&self, code: u32) -> UniversalCategory
    {
        match self.table.get(code) {
            Some(cell) => UniversalCategory::from_cell(cell),
            None => match self.assigned.contains(&code) {
                true => UniversalCategory::FALLBACK_ASSIGNED,
                false => UniversalCategory::FALLBACK_UNASSIGNED,
            },
        }
    }
}

/// компиляция универсальной таблицы из текстов источников
pub fn compile_universal(sources: &UniversalSources) -> Result<UniversalTable, BakeError>
{
    let standard = AxisLayout::standard();

    let joining_layout = AxisLayout {
        token_field: 2,
        ..standard
    };

    let ignorable_layout = AxisLayout {
        rule: TokenRule::KeepOnly("Default_Ignorable_Code_Point"),
        ..standard
    };

    let unicode_layout = AxisLayout {
        token_field: 2,
        header: HeaderRule::None,
        ..standard
    };

    let extra_syllabic_layout = AxisLayout {
        header: HeaderRule::LeadingBlock,
        rule: TokenRule::Rename(&[("Consonant_Final_Modifier", "Syllable_Modifier")]),
        ..standard
    };

    let extra_positional_layout = AxisLayout {
        header: HeaderRule::LeadingBlock,
        rule: TokenRule::Rename(&[("NA", "Not_Applicable")]),
        ..standard
    };

    let syllabic = parse_range_table("IndicSyllabicCategory", sources.syllabic, &standard)?;
    let positional = parse_range_table("IndicPositionalCategory", sources.positional, &standard)?;
    let joining = parse_range_table("ArabicShaping", sources.joining, &joining_layout)?;
    let ignorable = parse_range_table("DerivedCoreProperties", sources.ignorable, &ignorable_layout)?;
    let unicode_data = parse_range_table("UnicodeData", sources.unicode_data, &unicode_layout)?;
    let block_axis = parse_range_table("Blocks", sources.blocks, &standard)?;
    let scripts = parse_range_table("Scripts", sources.scripts, &standard)?;

    let syllabic_extra = parse_range_table(
        "IndicSyllabicCategory-Additional",
        sources.syllabic_extra,
        &extra_syllabic_layout,
    )?;

    let positional_extra = parse_range_table(
        "IndicPositionalCategory-Additional",
        sources.positional_extra,
        &extra_positional_layout,
    )?;

    // слияние осей: первые шесть вводят кодпоинты, последние две только уточняют.
    // дополнительные оси перекрывают значения основных
    let mut blocks = BlockList::new();
    let mut records: BTreeMap<u32, UniversalRecord> = BTreeMap::new();
    let default_record = UniversalRecord::default();

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
        &syllabic_extra,
        MergeMode::Introduces,
        &default_record,
        |range| parse_token("IndicSyllabicCategory-Additional", range, SyllabicCategory::parse),
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
        &positional_extra,
        MergeMode::Introduces,
        &default_record,
        |range| parse_token("IndicPositionalCategory-Additional", range, PositionalCategory::parse),
        |record, value| record.positional = value,
    )?;

    apply_axis(
        &mut records,
        &joining,
        MergeMode::Introduces,
        &default_record,
        |range| parse_token("ArabicShaping", range, JoiningType::parse),
        |record, value| record.joining = value,
    )?;

    apply_axis(
        &mut records,
        &ignorable,
        MergeMode::Introduces,
        &default_record,
        |_| Ok(true),
        |record, value| record.ignorable = value,
    )?;

    apply_axis(
        &mut records,
        &unicode_data,
        MergeMode::RefinesOnly,
        &default_record,
        |range| parse_token("UnicodeData", range, GeneralCategory::parse),
        |record, value| record.general = value,
    )?;

    apply_axis(
        &mut records,
        &block_axis,
        MergeMode::RefinesOnly,
        &default_record,
        |range| Ok(blocks.intern(&range.token)),
        |record, value| record.block = value,
    )?;

    // запретные письменности выбрасываются целиком
    let mut denied: HashSet<u32> = HashSet::new();

    for range in scripts.ranges.iter() {
        if DISABLED_SCRIPTS.contains(&range.token.as_str()) {
            denied.extend(range.start ..= range.end);
        }
    }

    records.retain(|code, _| !denied.contains(code));

    apply_fixes(&mut records, SYLLABIC_FIXES, |record, value| record.syllabic = value);
    apply_fixes(&mut records, POSITIONAL_FIXES, |record, value| record.positional = value);

    // назначенные кодпоинты - для ячейки заполнения и умолчания при поиске
    let assigned: HashSet<u32> = unicode_data.codepoints().collect();

    let mut stats = BakeStats::new();
    let mut entries: BTreeMap<u32, TableEntry> = BTreeMap::new();

    for (&code, record) in records.iter() {
        let category = classify(code, record)?;
        let category = refine(code, category, record)?;

        stats.inc(category.tag());

        entries.insert(
            code,
            TableEntry {
                cell: category.cell(),
                block: record.block,
            },
        );
    }

    debug!("распределение по категориям:\n{}", stats.report());

    let table = compile_table(
        &entries,
        &blocks,
        &BuilderOptions {
            fill: |code| match assigned.contains(&code) {
                true => UniversalCategory::FALLBACK_ASSIGNED.cell(),
                false => UniversalCategory::FALLBACK_UNASSIGNED.cell(),
            },
            skip_run_start: Some(UniversalCategory::FALLBACK_ASSIGNED.cell()),
            occupancy_floor: UNIVERSAL_OCCUPANCY_FLOOR,
        },
    )?;

    Ok(UniversalTable {
        table,
        assigned,
        sources: vec![
            ("IndicSyllabicCategory.txt".to_string(), syllabic.header),
            ("IndicPositionalCategory.txt".to_string(), positional.header),
            ("ArabicShaping.txt".to_string(), joining.header),
            ("DerivedCoreProperties.txt".to_string(), ignorable.header),
            ("UnicodeData.txt".to_string(), unicode_data.header),
            ("Blocks.txt".to_string(), block_axis.header),
            ("Scripts.txt".to_string(), scripts.header),
            ("IndicSyllabicCategory-Additional.txt".to_string(), syllabic_extra.header),
            ("IndicPositionalCategory-Additional.txt".to_string(), positional_extra.header),
        ],
        stats,
    })
}

/// полный цикл: чтение источников, компиляция, печать и запись артефакта
pub fn bake_universal(paths: [&Path; 9], target: &Path) -> Result<BakeSummary, BakeError>
{
    let texts: Vec<String> = paths
        .iter()
        .map(|&path| read_source(path))
        .collect::<Result<_, _>>()?;

    let table = compile_universal(&UniversalSources {
        syllabic: &texts[0],
        positional: &texts[1],
        joining: &texts[2],
        ignorable: &texts[3],
        unicode_data: &texts[4],
        blocks: &texts[5],
        scripts: &texts[6],
        syllabic_extra: &texts[7],
        positional_extra: &texts[8],
    })?;

    let rendered = output::render_universal(&table);
    let written = output::write_if_changed(target, &rendered)?;

    info!(
        pages = table.table.pages.len(),
        items = table.table.total,
        occupancy = table.table.occupancy(),
        written,
        "универсальная таблица собрана"
    );

    Ok(BakeSummary {
        pages: table.table.pages.len(),
        items: table.table.total,
        occupancy: table.table.occupancy(),
        written,
    })
}
