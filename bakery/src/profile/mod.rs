//! профили запекания: из каких источников и какая таблица собирается

use std::fs;
use std::path::Path;

use crate::error::BakeError;

pub mod syllabic;
pub mod universal;

pub use syllabic::{
    bake_syllabic, compile_syllabic, pair_cell, SyllabicSources, SyllabicTable, ALLOWED_BLOCKS,
    ALLOWED_SINGLES, DEFAULT_PAIR_CELL, SYLLABIC_OCCUPANCY_FLOOR,
};
pub use universal::{
    bake_universal, compile_universal, UniversalSources, UniversalTable, DISABLED_SCRIPTS,
    UNIVERSAL_OCCUPANCY_FLOOR,
};

/// текст источника; ошибка чтения дополняется путём к файлу
pub fn read_source(path: &Path) -> Result<String, BakeError>
{
    fs::read_to_string(path).map_err(|e| BakeError::io(path, e))
}
