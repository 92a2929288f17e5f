use std::collections::HashMap;

use crate::error::BakeError;

/// разобранная строка источника: диапазон кодпоинтов и значение свойства
#[derive(Debug, Clone)]
pub struct RawRange
{
    pub start: u32,
    pub end: u32,
    pub token: String,
    /// номер строки в файле, для контекста ошибок
    pub line: usize,
}

/// одна ось данных: содержимое источника формата UCD
/// `кодпоинт[..кодпоинт] ; значение [; ...] [# комментарий]`
#[derive(Debug)]
pub struct RangeTable
{
    /// имя оси - для ошибок и шапки артефакта
    pub axis: &'static str,
    /// диапазоны в порядке следования в файле
    pub ranges: Vec<RawRange>,
    /// покрытие в кодпоинтах по каждому значению свойства
    pub counts: HashMap<String, u32>,
    /// захваченная шапка файла - попадает в артефакт как происхождение данных
    pub header: Vec<String>,
}

impl RangeTable
{
    /// значение по умолчанию оси тоже показывается в легенде
    pub fn count_default(&mut self, token: &str)
    {
        *self.counts.entry(token.to_string()).or_insert(0) += 1;
    }

    /// все кодпоинты, упомянутые осью
    pub fn codepoints(&self) -> impl Iterator<Item = u32> + '_
    {
        self.ranges.iter().flat_map(|range| range.start ..= range.end)
    }
}

/// как читать конкретный источник
#[derive(Debug, Clone, Copy)]
pub struct AxisLayout
{
    /// из какого поля строки берётся значение свойства
    pub token_field: usize,
    /// сколько строк шапки отрезается до данных
    pub header: HeaderRule,
    /// предварительная обработка значения
    pub rule: TokenRule,
}

impl AxisLayout
{
    /// типовой файл свойств: значение во втором поле, шапка из двух строк
    pub fn standard() -> Self
    {
        Self {
            token_field: 1,
            header: HeaderRule::FirstTwoLines,
            rule: TokenRule::AsIs,
        }
    }
}

/// где кончается шапка файла
#[derive(Debug, Clone, Copy)]
pub enum HeaderRule
{
    /// файл без шапки, данные с первой строки
    None,
    /// первые две строки
    FirstTwoLines,
    /// все начальные строки до первой пустой
    LeadingBlock,
}

/// предварительная обработка значения свойства
#[derive(Debug, Clone, Copy)]
pub enum TokenRule
{
    /// значение берётся как есть
    AsIs,
    /// учитываются только строки с указанным значением
    KeepOnly(&'static str),
    /// часть значений переименовывается
    Rename(&'static [(&'static str, &'static str)]),
}

/// разбор текста источника в таблицу диапазонов.
/// комментарии и строки из одного поля пропускаются, остальной брак фатален
pub fn parse_range_table(
    axis: &'static str,
    text: &str,
    layout: &AxisLayout,
) -> Result<RangeTable, BakeError>
{
    let lines: Vec<&str> = text.lines().collect();

    let (header_end, data_start) = match layout.header {
        HeaderRule::None => (0, 0),
        HeaderRule::FirstTwoLines => {
            let cut = lines.len().min(2);
            (cut, cut)
        }
        HeaderRule::LeadingBlock => match lines.iter().position(|line| line.trim().is_empty()) {
            Some(pos) => (pos, pos + 1),
            None => (lines.len(), lines.len()),
        },
    };

    let header = lines[.. header_end]
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();

    let mut ranges: Vec<RawRange> = vec![];
    let mut counts: HashMap<String, u32> = HashMap::new();

    for (idx, &raw) in lines.iter().enumerate().skip(data_start) {
        let line = idx + 1;

        let data = match raw.split_once('#') {
            Some((data, _)) => data,
            None => raw,
        };

        let fields: Vec<&str> = data.split(';').map(str::trim).collect();

        if fields.len() < 2 {
            continue;
        }

        let token = match fields.get(layout.token_field) {
            Some(token) if !token.is_empty() => *token,
            _ => {
                return Err(BakeError::MalformedLine {
                    axis,
                    line,
                    text: raw.to_string(),
                })
            }
        };

        let token = match layout.rule {
            TokenRule::AsIs => token,
            TokenRule::KeepOnly(keep) => match token == keep {
                true => token,
                false => continue,
            },
            TokenRule::Rename(pairs) => pairs
                .iter()
                .find(|(from, _)| *from == token)
                .map_or(token, |(_, to)| *to),
        };

        let (start, end) = parse_range_spec(axis, line, fields[0])?;

        *counts.entry(token.to_string()).or_insert(0) += end - start + 1;

        ranges.push(RawRange {
            start,
            end,
            token: token.to_string(),
            line,
        });
    }

    Ok(RangeTable {
        axis,
        ranges,
        counts,
        header,
    })
}

/// `XXXX` или `XXXX..YYYY`, шестнадцатеричные, в пределах пространства Unicode
fn parse_range_spec(axis: &'static str, line: usize, text: &str) -> Result<(u32, u32), BakeError>
{
    match text.split_once("..") {
        Some((from, to)) => {
            let start = parse_codepoint(axis, line, from)?;
            let end = parse_codepoint(axis, line, to)?;

            if start > end {
                return Err(BakeError::InvertedRange {
                    axis,
                    line,
                    start,
                    end,
                });
            }

            Ok((start, end))
        }
        None => {
            let code = parse_codepoint(axis, line, text)?;

            Ok((code, code))
        }
    }
}

fn parse_codepoint(axis: &'static str, line: usize, text: &str) -> Result<u32, BakeError>
{
    let value = u32::from_str_radix(text.trim(), 16).map_err(|_| BakeError::MalformedLine {
        axis,
        line,
        text: text.to_string(),
    })?;

    if value > 0x10FFFF {
        return Err(BakeError::CodepointOutOfRange { axis, line, value });
    }

    Ok(value)
}
