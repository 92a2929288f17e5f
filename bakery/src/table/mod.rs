pub mod builder;

pub use builder::{compile_table, BuilderOptions, TableEntry};

/// сколько младших бит кодпоинта не входит в ключ страницы
pub const PAGE_BITS: u32 = 12;
/// границы отрезков выравниваются по строкам таблицы
pub const ROW_ALIGN: u32 = 8;
/// максимальный зазор между отрезками (в кодпоинтах), который выгоднее
/// заполнить ячейками по умолчанию, чем открывать новую страницу: 1 + 16 * 3
pub const GAP_FILL_LIMIT: u32 = 1 + 16 * 3;

/// страница: непрерывный кусок массива ячеек
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page
{
    /// первый кодпоинт страницы
    pub start: u32,
    /// кодпоинт за последним (исключающая граница)
    pub end: u32,
    /// смещение начала страницы в массиве ячеек
    pub offset: u32,
}

/// скомпилированная постраничная таблица
#[derive(Debug)]
pub struct CompiledTable
{
    /// страницы по возрастанию кодпоинтов
    pub pages: Vec<Page>,
    /// ячейки всех страниц подряд
    pub cells: Vec<u16>,
    /// сколько кодпоинтов покрывают страницы
    pub total: u32,
    /// сколько из них пришло из данных, а не из заполнения зазоров
    pub used: u32,
    /// где начинаются блоки Unicode - метки для печати артефакта
    pub block_marks: Vec<(u32, String)>,
}

impl CompiledTable
{
    /// ячейка кодпоинта; None - кодпоинт не попал ни в одну страницу.
    /// страница-кандидат отбирается сравнением ключей её границ с ключом кодпоинта,
    /// затем проверяются точные границы
    #[inline(always)]
    pub fn get(&self, code: u32) -> Option<u16>
    {
        let key = code >> PAGE_BITS;

        for page in self.pages.iter() {
            if page.start >> PAGE_BITS > key {
                break;
            }

            if (page.end - 1) >> PAGE_BITS < key {
                continue;
            }

            if code >= page.start && code < page.end {
                return Some(self.cells[(code - page.start + page.offset) as usize]);
            }
        }

        None
    }

    /// целочисленный процент заполненности
    pub fn occupancy(&self) -> u32
    {
        self.used * 100 / self.total
    }
}
