use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::classify::UniversalCategory;
use crate::error::BakeError;
use crate::profile::{SyllabicTable, UniversalTable};
use crate::properties::{PositionalCategory, SyllabicCategory};
use crate::table::{CompiledTable, ROW_ALIGN};

/// легенда оси: подпись и строки (псевдоним, имя значения, покрытие в кодпоинтах)
#[derive(Debug)]
pub struct Legend
{
    pub title: &'static str,
    pub rows: Vec<(&'static str, String, u32)>,
}

/// артефакт парной таблицы: выражение Rust для include!
pub fn render_syllabic(table: &SyllabicTable) -> String
{
    let mut out = String::new();

    banner(
        &mut out,
        "пары \"слоговая + позиционная категория\"",
        &table.sources,
    );

    for legend in table.legends.iter() {
        render_legend(&mut out, legend);
    }

    out.push_str("// ячейка: (позиционная категория << 8) | слоговая категория\n");
    out.push_str("// поиск: ключ страницы = кодпоинт >> 12; сначала одиночные кодпоинты,\n");
    out.push_str("// затем границы страниц; вне таблицы - ячейка по умолчанию\n");
    out.push_str("SyllabicTableData {\n");
    out.push_str("    pages: &[\n");
    out.push_str("        // (первый кодпоинт, исключающая граница, смещение в ячейках)\n");

    for page in table.table.pages.iter() {
        out.push_str(&format!(
            "        ({:#06X}, {:#06X}, {}),\n",
            page.start, page.end, page.offset
        ));
    }

    out.push_str("    ],\n");
    out.push_str("    cells: &[\n");

    render_cells(
        &mut out,
        &table.table,
        |cell| format!("{:#06X}", cell),
        pair_label,
    );

    out.push_str("    ],\n");
    out.push_str("    singles: &[\n");

    for &(code, cell) in table.singles.iter() {
        out.push_str(&format!(
            "        ({:#06X}, {:#06X}), // {}\n",
            code,
            cell,
            pair_label(cell)
        ));
    }

    out.push_str("    ],\n");
    out.push_str(&format!("    default_cell: {:#06X},\n", table.default_cell));
    out.push_str("}\n");
    out.push_str(&format!(
        "// ячеек: {}; заполненность: {}%\n",
        table.table.total,
        table.table.occupancy()
    ));

    out
}

/// артефакт универсальной таблицы: выражение Rust для include!
pub fn render_universal(table: &UniversalTable) -> String
{
    let mut out = String::new();

    banner(&mut out, "универсальные слоговые категории", &table.sources);

    out.push_str("// теги и значения ячеек (покрытие в кодпоинтах):\n");

    for category in UniversalCategory::ALL.iter() {
        out.push_str(&format!(
            "//   {:<5} {:#04X} {}\n",
            category.tag(),
            category.cell(),
            table.stats.get(category.tag())
        ));
    }

    out.push_str("//\n");
    out.push_str("// поиск: ключ страницы = кодпоинт >> 12, затем границы страниц;\n");
    out.push_str("// вне таблицы - ячейка по умолчанию, для неназначенных кодпоинтов\n");
    out.push_str("// (категория Cn) - ячейка unassigned_cell\n");
    out.push_str("UniversalTableData {\n");
    out.push_str("    pages: &[\n");
    out.push_str("        // (первый кодпоинт, исключающая граница, смещение в ячейках)\n");

    for page in table.table.pages.iter() {
        out.push_str(&format!(
            "        ({:#06X}, {:#06X}, {}),\n",
            page.start, page.end, page.offset
        ));
    }

    out.push_str("    ],\n");
    out.push_str("    cells: &[\n");

    render_cells(
        &mut out,
        &table.table,
        |cell| format!("{:#04X}", cell),
        |cell| UniversalCategory::from_cell(cell).tag().to_string(),
    );

    out.push_str("    ],\n");
    out.push_str(&format!(
        "    default_cell: {:#04X},    // {}\n",
        UniversalCategory::FALLBACK_ASSIGNED.cell(),
        UniversalCategory::FALLBACK_ASSIGNED.tag()
    ));
    out.push_str(&format!(
        "    unassigned_cell: {:#04X}, // {}\n",
        UniversalCategory::FALLBACK_UNASSIGNED.cell(),
        UniversalCategory::FALLBACK_UNASSIGNED.tag()
    ));
    out.push_str("}\n");
    out.push_str(&format!(
        "// ячеек: {}; заполненность: {}%\n",
        table.table.total,
        table.table.occupancy()
    ));

    out
}

/// записать артефакт, не трогая файл при совпадении содержимого.
/// замена атомарная: текст пишется рядом и переименовывается
pub fn write_if_changed(path: &Path, content: &str) -> Result<bool, BakeError>
{
    match fs::read(path) {
        Ok(existing) if existing == content.as_bytes() => {
            debug!(path = %path.display(), "артефакт не изменился, файл не трогаем");

            return Ok(false);
        }
        _ => {}
    }

    let mut tmp = path.as_os_str().to_os_string();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, content).map_err(|e| BakeError::io(&tmp, e))?;
    fs::rename(&tmp, path).map_err(|e| BakeError::io(path, e))?;

    Ok(true)
}

/// шапка артефакта: кто собрал и из чего
fn banner(out: &mut String, profile: &str, sources: &[(String, Vec<String>)])
{
    out.push_str("// == автоматически собранная таблица; не редактировать ==\n");
    out.push_str("//\n");
    out.push_str(&format!(
        "// {} {}, профиль: {}\n",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        profile
    ));
    out.push_str("// источники в порядке подачи:\n");

    for (name, header) in sources.iter() {
        out.push_str(&format!("//   {}\n", name));

        match header.is_empty() {
            true => out.push_str("//     (файл без шапки)\n"),
            false => {
                for line in header.iter() {
                    out.push_str(&format!("//     {}\n", line));
                }
            }
        }
    }

    out.push_str("//\n");
}

fn render_legend(out: &mut String, legend: &Legend)
{
    out.push_str(&format!("// {}:\n", legend.title));

    let width_short = legend.rows.iter().map(|(short, ..)| short.len()).max().unwrap_or(0);
    let width_name = legend.rows.iter().map(|(_, name, _)| name.len()).max().unwrap_or(0);

    for (short, name, count) in legend.rows.iter() {
        out.push_str(&format!(
            "//   {:<ws$} {:<wn$} {}\n",
            short,
            name,
            count,
            ws = width_short,
            wn = width_name
        ));
    }

    out.push_str("//\n");
}

/// строки ячеек с подписями кодпоинтов, метками блоков и границами страниц
fn render_cells<C, D>(out: &mut String, table: &CompiledTable, format_cell: C, describe_cell: D)
where
    C: Fn(u16) -> String,
    D: Fn(u16) -> String,
{
    let marks: BTreeMap<u32, &str> = table
        .block_marks
        .iter()
        .map(|(at, name)| (*at, name.as_str()))
        .collect();

    for page in table.pages.iter() {
        out.push_str(&format!(
            "        // - страница {:#06X}, смещение {} -\n",
            page.start, page.offset
        ));

        let mut row = page.start;

        while row < page.end {
            if let Some(name) = marks.get(&row) {
                out.push_str(&format!("        // {}\n", name));
            }

            let base = (row - page.start + page.offset) as usize;
            let cells = &table.cells[base .. base + ROW_ALIGN as usize];

            let values: Vec<String> = cells.iter().map(|&cell| format_cell(cell)).collect();
            let labels: Vec<String> = cells.iter().map(|&cell| describe_cell(cell)).collect();

            out.push_str(&format!(
                "        /* {:04X} */ {}, // {}\n",
                row,
                values.join(", "),
                labels.join(" ")
            ));

            row += ROW_ALIGN;
        }
    }
}

/// подпись парной ячейки: слоговая/позиционная
fn pair_label(cell: u16) -> String
{
    let syllabic = SyllabicCategory::ALL[(cell & 0xFF) as usize];
    let positional = PositionalCategory::ALL[(cell >> 8) as usize];

    format!("{}/{}", syllabic.short(), positional.short())
}
