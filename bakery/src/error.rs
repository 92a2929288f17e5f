use std::path::{Path, PathBuf};

use thiserror::Error;

/// ошибки сборки таблиц; любая из них фатальна - артефакт не записывается
#[derive(Debug, Error)]
pub enum BakeError
{
    /// ошибка чтения источника или записи артефакта
    #[error("ввод-вывод, {}: {source}", path.display())]
    Io
    {
        path: PathBuf,
        source: std::io::Error,
    },
    /// строка источника не разбирается
    #[error("{axis}, строка {line}: не разобрать {text:?}")]
    MalformedLine
    {
        axis: &'static str,
        line: usize,
        text: String,
    },
    /// кодпоинт за пределами пространства Unicode
    #[error("{axis}, строка {line}: кодпоинт вне диапазона Unicode: {value:#06X}")]
    CodepointOutOfRange
    {
        axis: &'static str,
        line: usize,
        value: u32,
    },
    /// перевёрнутый диапазон
    #[error("{axis}, строка {line}: начало диапазона больше конца: {start:#06X} .. {end:#06X}")]
    InvertedRange
    {
        axis: &'static str,
        line: usize,
        start: u32,
        end: u32,
    },
    /// значение свойства не входит в алфавит оси
    #[error("{axis}, строка {line}: неизвестное значение свойства {token:?}")]
    UnknownToken
    {
        axis: &'static str,
        line: usize,
        token: String,
    },
    /// ни одно правило классификации не подошло
    #[error("U+{code:04X}: ни одно правило не подошло ({record})")]
    NoRuleMatched
    {
        code: u32,
        record: String,
    },
    /// кодпоинт попал под несколько правил классификации
    #[error("U+{code:04X}: правила пересеклись: {matched:?} ({record})")]
    AmbiguousRules
    {
        code: u32,
        matched: Vec<&'static str>,
        record: String,
    },
    /// позиционная категория не даёт категории ровно одного суффикса
    #[error("U+{code:04X}: для {category} позиция {position} даёт суффиксы {matched:?}, нужен ровно один")]
    PositionConflict
    {
        code: u32,
        category: &'static str,
        position: &'static str,
        matched: Vec<&'static str>,
    },
    /// позиционная категория у кодпоинта, категория которого не уточняется по позиции
    #[error("U+{code:04X}: категория {category} не ожидает позиции, получена {position}")]
    UnexpectedPosition
    {
        code: u32,
        category: &'static str,
        position: &'static str,
    },
    /// в таблицу не попало ни одного кодпоинта
    #[error("таблица пуста: ни один кодпоинт не прошёл фильтры")]
    EmptyTable,
    /// таблица выродилась - профиль требует перестройки упаковки
    #[error("заполненность таблицы {pct}% ниже порога {floor}%")]
    OccupancyTooLow
    {
        pct: u32,
        floor: u32,
    },
}

impl BakeError
{
    /// ошибка ввода-вывода с путём файла
    pub fn io(path: &Path, source: std::io::Error) -> Self
    {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
