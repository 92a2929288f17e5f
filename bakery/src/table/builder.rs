use std::collections::BTreeMap;

use tracing::debug;

use super::{CompiledTable, Page, GAP_FILL_LIMIT, ROW_ALIGN};
use crate::error::BakeError;
use crate::merge::{BlockId, BlockList};

/// вход компилятора: итоговая ячейка кодпоинта и его блок
#[derive(Debug, Clone, Copy)]
pub struct TableEntry
{
    pub cell: u16,
    pub block: BlockId,
}

/// настройки упаковки профиля
pub struct BuilderOptions<F>
where
    F: Fn(u32) -> u16,
{
    /// ячейка для кодпоинта, попавшего внутрь страницы, но отсутствующего в данных
    pub fill: F,
    /// ячейка, с которой отрезок не начинается; внутрь отрезка или зазора она попасть может
    pub skip_run_start: Option<u16>,
    /// минимальная заполненность таблицы в процентах
    pub occupancy_floor: u32,
}

/// компилятор таблицы: режет отсортированные данные на отрезки, выровненные
/// по строкам, и собирает отрезки в страницы. короткие зазоры между отрезками
/// заполняются, длинные открывают новую страницу
pub fn compile_table<F>(
    entries: &BTreeMap<u32, TableEntry>,
    blocks: &BlockList,
    options: &BuilderOptions<F>,
) -> Result<CompiledTable, BakeError>
where
    F: Fn(u32) -> u16,
{
    let mut builder = Builder::new();
    let mut last: Option<u32> = None;

    for (&code, entry) in entries.iter() {
        if let Some(last) = last {
            if code <= last {
                continue;
            }
        }

        if options.skip_run_start == Some(entry.cell) {
            continue;
        }

        // отрезок: от выровненного вниз начала вперёд по подряд идущим
        // кодпоинтам того же блока, конец выравнивается вверх
        let start = code / ROW_ALIGN * ROW_ALIGN;
        let mut end = start + 1;

        while let Some(next) = entries.get(&end) {
            if next.block != entry.block {
                break;
            }

            end += 1;
        }

        let end = (end - 1) / ROW_ALIGN * ROW_ALIGN + ROW_ALIGN - 1;

        match last {
            Some(prev) if start == prev + 1 => {}
            Some(prev) => match start - prev <= GAP_FILL_LIMIT {
                true => builder.emit_span(None, prev + 1, start - 1, entries, &options.fill, blocks),
                false => {
                    builder.close_page(prev + 1);
                    builder.open_page(start);
                }
            },
            None => builder.open_page(start),
        }

        builder.emit_span(Some(entry.block), start, end, entries, &options.fill, blocks);
        last = Some(end);
    }

    let last = match last {
        Some(last) => last,
        None => return Err(BakeError::EmptyTable),
    };

    builder.close_page(last + 1);

    let table = builder.finish();
    let pct = table.occupancy();

    debug!(
        pages = table.pages.len(),
        items = table.total,
        occupancy = pct,
        "таблица скомпилирована"
    );

    if pct < options.occupancy_floor {
        return Err(BakeError::OccupancyTooLow {
            pct,
            floor: options.occupancy_floor,
        });
    }

    Ok(table)
}

/// накопитель страниц и ячеек
struct Builder
{
    pages: Vec<Page>,
    cells: Vec<u16>,
    block_marks: Vec<(u32, String)>,
    total: u32,
    used: u32,
    /// суммарная длина закрытых страниц
    offset: u32,
    page_start: Option<u32>,
    page_base: u32,
    last_block: Option<BlockId>,
}

impl Builder
{
    fn new() -> Self
    {
        Self {
            pages: vec![],
            cells: vec![],
            block_marks: vec![],
            total: 0,
            used: 0,
            offset: 0,
            page_start: None,
            page_base: 0,
            last_block: None,
        }
    }

    fn open_page(&mut self, start: u32)
    {
        self.page_start = Some(start);
        self.page_base = self.offset;
    }

    fn close_page(&mut self, end: u32)
    {
        let start = match self.page_start.take() {
            Some(start) => start,
            None => return,
        };

        self.pages.push(Page {
            start,
            end,
            offset: self.page_base,
        });

        self.offset += end - start;
    }

    /// выдать ячейки отрезка [from ..= to]; None вместо блока - заполнение зазора
    fn emit_span<F>(
        &mut self,
        block: Option<BlockId>,
        from: u32,
        to: u32,
        entries: &BTreeMap<u32, TableEntry>,
        fill: &F,
        blocks: &BlockList,
    ) where
        F: Fn(u32) -> u16,
    {
        assert!(from % ROW_ALIGN == 0);
        assert!((to + 1) % ROW_ALIGN == 0);

        if let Some(block) = block {
            if self.last_block != Some(block) {
                self.block_marks.push((from, blocks.name(block).to_string()));
            }

            self.last_block = Some(block);
        }

        for code in from ..= to {
            match entries.get(&code) {
                Some(entry) => {
                    self.used += 1;
                    self.cells.push(entry.cell);
                }
                None => self.cells.push(fill(code)),
            }
        }

        self.total += to - from + 1;
    }

    fn finish(self) -> CompiledTable
    {
        CompiledTable {
            pages: self.pages,
            cells: self.cells,
            total: self.total,
            used: self.used,
            block_marks: self.block_marks,
        }
    }
}
