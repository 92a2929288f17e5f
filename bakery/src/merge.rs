use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::error::BakeError;
use crate::properties::{GeneralCategory, JoiningType, PositionalCategory, SyllabicCategory};
use crate::source::{RangeTable, RawRange};

/// имя псевдоблока для кодпоинтов вне известных блоков
pub const NO_BLOCK: &str = "No_Block";

/// интернированный идентификатор блока Unicode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockId(u16);

/// имена блоков в порядке появления в Blocks.txt; нулевой id - вне блоков
#[derive(Debug)]
pub struct BlockList
{
    names: Vec<String>,
}

impl BlockList
{
    pub fn new() -> Self
    {
        Self {
            names: vec![NO_BLOCK.to_string()],
        }
    }

    /// id блока по имени; новое имя добавляется в конец списка
    pub fn intern(&mut self, name: &str) -> BlockId
    {
        match self.names.iter().position(|known| known == name) {
            Some(pos) => BlockId(pos as u16),
            None => {
                self.names.push(name.to_string());

                BlockId((self.names.len() - 1) as u16)
            }
        }
    }

    pub fn name(&self, id: BlockId) -> &str
    {
        &self.names[id.0 as usize]
    }
}

/// свойства кодпоинта, собранные для парной таблицы
#[derive(Debug, Clone, Copy)]
pub struct SyllabicRecord
{
    pub syllabic: SyllabicCategory,
    pub positional: PositionalCategory,
    pub block: BlockId,
}

impl Default for SyllabicRecord
{
    fn default() -> Self
    {
        Self {
            syllabic: SyllabicCategory::Other,
            positional: PositionalCategory::NotApplicable,
            block: BlockId(0),
        }
    }
}

/// свойства кодпоинта, собранные для универсальной классификации
#[derive(Debug, Clone, Copy)]
pub struct UniversalRecord
{
    pub syllabic: SyllabicCategory,
    pub positional: PositionalCategory,
    pub joining: JoiningType,
    /// Default_Ignorable_Code_Point из DerivedCoreProperties.txt
    pub ignorable: bool,
    pub general: GeneralCategory,
    pub block: BlockId,
}

impl Default for UniversalRecord
{
    fn default() -> Self
    {
        Self {
            syllabic: SyllabicCategory::Other,
            positional: PositionalCategory::NotApplicable,
            joining: JoiningType::X,
            ignorable: false,
            general: GeneralCategory::Cn,
            block: BlockId(0),
        }
    }
}

impl UniversalRecord
{
    /// сводка свойств для сообщений об ошибках
    pub fn describe(&self) -> String
    {
        format!(
            "ISC={}, IPC={}, JT={}, DI={}, GC={}",
            self.syllabic.name(),
            self.positional.name(),
            self.joining.name(),
            self.ignorable,
            self.general.name()
        )
    }
}

/// роль оси при слиянии
#[derive(Debug, Clone, Copy)]
pub enum MergeMode
{
    /// ось добавляет отсутствующие кодпоинты с записью по умолчанию
    Introduces,
    /// ось только уточняет уже известные кодпоинты
    RefinesOnly,
}

/// наложение оси на записи. диапазоны идут в порядке файла,
/// позднее значение одной и той же оси перекрывает раннее
pub fn apply_axis<R, V>(
    records: &mut BTreeMap<u32, R>,
    table: &RangeTable,
    mode: MergeMode,
    default_record: &R,
    mut parse: impl FnMut(&RawRange) -> Result<V, BakeError>,
    mut set: impl FnMut(&mut R, V),
) -> Result<(), BakeError>
where
    R: Clone,
    V: Copy,
{
    for range in table.ranges.iter() {
        let value = parse(range)?;

        for code in range.start ..= range.end {
            match records.get_mut(&code) {
                Some(record) => set(record, value),
                None => {
                    if let MergeMode::RefinesOnly = mode {
                        continue;
                    }

                    let mut record = default_record.clone();
                    set(&mut record, value);

                    records.insert(code, record);
                }
            }
        }
    }

    Ok(())
}

/// значение свойства оси с закрытым алфавитом
pub fn parse_token<T>(
    axis: &'static str,
    range: &RawRange,
    parse: fn(&str) -> Option<T>,
) -> Result<T, BakeError>
{
    parse(&range.token).ok_or_else(|| BakeError::UnknownToken {
        axis,
        line: range.line,
        token: range.token.clone(),
    })
}

/// точечная правка - задокументированное исключение к данным источников
#[derive(Debug)]
pub struct PointFix<T: 'static>
{
    pub range: RangeInclusive<u32>,
    pub value: T,
}

/// правки применяются поверх слитых осей и только к уже известным кодпоинтам
pub fn apply_fixes<R, T>(
    records: &mut BTreeMap<u32, R>,
    fixes: &[PointFix<T>],
    mut set: impl FnMut(&mut R, T),
) where
    T: Copy,
{
    for fix in fixes.iter() {
        for code in fix.range.clone() {
            if let Some(record) = records.get_mut(&code) {
                set(record, fix.value);
            }
        }
    }
}
