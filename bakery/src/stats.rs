use std::collections::BTreeMap;

/// распределение классифицированных кодпоинтов по группам - сводка сборки
#[derive(Debug, Default)]
pub struct BakeStats
{
    groups: BTreeMap<&'static str, u32>,
}

impl BakeStats
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// учесть кодпоинт в группе
    pub fn inc(&mut self, group: &'static str)
    {
        *self.groups.entry(group).or_insert(0) += 1;
    }

    pub fn get(&self, group: &str) -> u32
    {
        self.groups.get(group).copied().unwrap_or(0)
    }

    /// всего учтено кодпоинтов
    pub fn classified(&self) -> u32
    {
        self.groups.values().sum()
    }

    /// группы по убыванию количества, при равенстве - по имени
    pub fn report(&self) -> String
    {
        let mut entries: Vec<(&str, u32)> = self
            .groups
            .iter()
            .map(|(&group, &count)| (group, count))
            .collect();

        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        let mut out = String::new();

        for (group, count) in entries {
            out.push_str(&format!("{:<6} {}\n", group, count));
        }

        out
    }
}

/// итог сборки одного артефакта
#[derive(Debug)]
pub struct BakeSummary
{
    /// количество страниц таблицы
    pub pages: usize,
    /// суммарная длина страниц в ячейках
    pub items: u32,
    /// целочисленный процент заполненности
    pub occupancy: u32,
    /// false - файл уже содержал ровно этот артефакт и не перезаписывался
    pub written: bool,
}
