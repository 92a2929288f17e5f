//! консольная утилита запекания: профиль, файлы источников, файл артефакта

use std::path::Path;
use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use unicode_syllabic_bakery::{bake_syllabic, bake_universal};

const USAGE: &str = "\
использование:
  bakery syllabic <IndicSyllabicCategory.txt> <IndicPositionalCategory.txt> <Blocks.txt> <артефакт>
  bakery universal <IndicSyllabicCategory.txt> <IndicPositionalCategory.txt> <ArabicShaping.txt>
      <DerivedCoreProperties.txt> <UnicodeData.txt> <Blocks.txt> <Scripts.txt>
      <IndicSyllabicCategory-Additional.txt> <IndicPositionalCategory-Additional.txt> <артефакт>

подробность журнала задаётся переменной RUST_LOG";

fn main() -> ExitCode
{
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let result = match args.split_first() {
        Some((profile, rest)) if profile == "syllabic" && rest.len() == 4 => bake_syllabic(
            [Path::new(&rest[0]), Path::new(&rest[1]), Path::new(&rest[2])],
            Path::new(&rest[3]),
        ),
        Some((profile, rest)) if profile == "universal" && rest.len() == 10 => bake_universal(
            [
                Path::new(&rest[0]),
                Path::new(&rest[1]),
                Path::new(&rest[2]),
                Path::new(&rest[3]),
                Path::new(&rest[4]),
                Path::new(&rest[5]),
                Path::new(&rest[6]),
                Path::new(&rest[7]),
                Path::new(&rest[8]),
            ],
            Path::new(&rest[9]),
        ),
        _ => {
            eprintln!("{}", USAGE);

            return ExitCode::from(2);
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");

            ExitCode::FAILURE
        }
    }
}
