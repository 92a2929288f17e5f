//! запекание таблиц слоговых свойств Unicode.
//!
//! из текстовых источников UCD собираются компактные постраничные таблицы
//! для движков слоговой формовки, в виде выражений Rust под include!.
//!
//! профили:
//! - парный: ячейка (позиционная категория << 8) | слоговая категория,
//!   только индийские блоки и пара одиночных кодпоинтов
//! - универсальный: одна категория универсального движка на кодпоинт,
//!   классификация по слитым осям ISC, IPC, AJT, DI и GC

pub mod classify;
pub mod error;
pub mod merge;
pub mod output;
pub mod profile;
pub mod properties;
pub mod source;
pub mod stats;
pub mod table;

pub use error::BakeError;
pub use profile::{bake_syllabic, bake_universal, SyllabicTable, UniversalTable};
pub use stats::BakeSummary;
