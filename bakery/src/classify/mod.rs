pub mod position;

pub use position::{refine, UniversalCategory};

use crate::error::BakeError;
use crate::merge::UniversalRecord;
use crate::properties::{GeneralCategory, SyllabicCategory};

/// базовая категория универсальной классификации, до позиционного уточнения
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category
{
    Base,
    BaseNum,
    BaseOther,
    Cgj,
    ConsFinal,
    ConsFinalMod,
    ConsMedial,
    ConsMod,
    ConsSubjoined,
    ConsWithStacker,
    Halant,
    HalantNum,
    InvisibleStacker,
    Hieroglyph,
    HieroglyphJoiner,
    HieroglyphSegmentBegin,
    HieroglyphSegmentEnd,
    Zwnj,
    Other,
    Repha,
    Sakot,
    SymMod,
    Vowel,
    VowelMod,
    WordJoiner,
}

impl Category
{
    /// тег категории; уточняемые категории получают к нему позиционный суффикс
    pub fn tag(self) -> &'static str
    {
        match self {
            Self::Base => "B",
            Self::BaseNum => "N",
            Self::BaseOther => "GB",
            Self::Cgj => "CGJ",
            Self::ConsFinal => "F",
            Self::ConsFinalMod => "FM",
            Self::ConsMedial => "M",
            Self::ConsMod => "CM",
            Self::ConsSubjoined => "SUB",
            Self::ConsWithStacker => "CS",
            Self::Halant => "H",
            Self::HalantNum => "HN",
            Self::InvisibleStacker => "IS",
            Self::Hieroglyph => "G",
            Self::HieroglyphJoiner => "J",
            Self::HieroglyphSegmentBegin => "SB",
            Self::HieroglyphSegmentEnd => "SE",
            Self::Zwnj => "ZWNJ",
            Self::Other => "O",
            Self::Repha => "R",
            Self::Sakot => "Sk",
            Self::SymMod => "SM",
            Self::Vowel => "V",
            Self::VowelMod => "VM",
            Self::WordJoiner => "WJ",
        }
    }
}

/// правила классификации. порядок не играет роли: для каждого кодпоинта
/// вычисляются все правила и требуется ровно одно совпадение
pub const RULES: &[(Category, fn(u32, &UniversalRecord) -> bool)] = &[
    (Category::Base, is_base),
    (Category::BaseNum, is_base_num),
    (Category::BaseOther, is_base_other),
    (Category::Cgj, is_cgj),
    (Category::ConsFinal, is_cons_final),
    (Category::ConsFinalMod, is_cons_final_mod),
    (Category::ConsMedial, is_cons_medial),
    (Category::ConsMod, is_cons_mod),
    (Category::ConsSubjoined, is_cons_subjoined),
    (Category::ConsWithStacker, is_cons_with_stacker),
    (Category::Halant, is_halant),
    (Category::HalantNum, is_halant_num),
    (Category::InvisibleStacker, is_invisible_stacker),
    (Category::Hieroglyph, is_hieroglyph),
    (Category::HieroglyphJoiner, is_hieroglyph_joiner),
    (Category::HieroglyphSegmentBegin, is_hieroglyph_segment_begin),
    (Category::HieroglyphSegmentEnd, is_hieroglyph_segment_end),
    (Category::Zwnj, is_zwnj),
    (Category::Other, is_other),
    (Category::Repha, is_repha),
    (Category::Sakot, is_sakot),
    (Category::SymMod, is_sym_mod),
    (Category::Vowel, is_vowel),
    (Category::VowelMod, is_vowel_mod),
    (Category::WordJoiner, is_word_joiner),
];

/// перебор всех правил; ноль или несколько совпадений - дефект данных, сборка прерывается
pub fn classify(code: u32, record: &UniversalRecord) -> Result<Category, BakeError>
{
    let matched: Vec<Category> = RULES
        .iter()
        .filter(|(_, rule)| rule(code, record))
        .map(|(category, _)| *category)
        .collect();

    match matched.as_slice() {
        [category] => Ok(*category),
        [] => Err(BakeError::NoRuleMatched {
            code,
            record: record.describe(),
        }),
        _ => Err(BakeError::AmbiguousRules {
            code,
            matched: matched.iter().map(|category| category.tag()).collect(),
            record: record.describe(),
        }),
    }
}

fn is_base(_code: u32, r: &UniversalRecord) -> bool
{
    matches!(
        r.syllabic,
        SyllabicCategory::Number
            | SyllabicCategory::Consonant
            | SyllabicCategory::ConsonantHeadLetter
            | SyllabicCategory::ToneLetter
            | SyllabicCategory::VowelIndependent
    ) || (r.joining.is_joining_letter() && r.syllabic != SyllabicCategory::Joiner)
        || (r.general == GeneralCategory::Lo
            && matches!(
                r.syllabic,
                SyllabicCategory::Avagraha
                    | SyllabicCategory::Bindu
                    | SyllabicCategory::ConsonantFinal
                    | SyllabicCategory::ConsonantMedial
                    | SyllabicCategory::ConsonantSubjoined
                    | SyllabicCategory::Vowel
                    | SyllabicCategory::VowelDependent
            ))
}

fn is_base_num(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::BrahmiJoiningNumber
}

fn is_base_other(code: u32, r: &UniversalRecord) -> bool
{
    if r.syllabic == SyllabicCategory::ConsonantPlaceholder {
        return true;
    }

    // горизонтальная черта, маркер списка и квадраты-заполнители
    matches!(code, 0x2015 | 0x2022 | 0x25FB ..= 0x25FE)
}

/// сюда же попадают селекторы вариаций и ZWJ
fn is_cgj(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::Joiner || (r.ignorable && r.general.is_mark())
}

fn is_cons_final(_code: u32, r: &UniversalRecord) -> bool
{
    (r.syllabic == SyllabicCategory::ConsonantFinal && r.general != GeneralCategory::Lo)
        || r.syllabic == SyllabicCategory::ConsonantSucceedingRepha
}

fn is_cons_final_mod(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::SyllableModifier
}

fn is_cons_medial(_code: u32, r: &UniversalRecord) -> bool
{
    (r.syllabic == SyllabicCategory::ConsonantMedial && r.general != GeneralCategory::Lo)
        || r.syllabic == SyllabicCategory::ConsonantInitialPostfixed
}

fn is_cons_mod(code: u32, r: &UniversalRecord) -> bool
{
    matches!(
        r.syllabic,
        SyllabicCategory::Nukta | SyllabicCategory::GeminationMark | SyllabicCategory::ConsonantKiller
    ) && !is_sym_mod(code, r)
}

fn is_cons_subjoined(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::ConsonantSubjoined && r.general != GeneralCategory::Lo
}

fn is_cons_with_stacker(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::ConsonantWithStacker
}

fn is_halant(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::Virama
}

fn is_halant_num(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::NumberJoiner
}

/// выделен из вирам: стекер не даёт видимой формы
fn is_invisible_stacker(code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::InvisibleStacker && !is_sakot(code, r)
}

fn is_hieroglyph(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::Hieroglyph
}

fn is_hieroglyph_joiner(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::HieroglyphJoiner
}

fn is_hieroglyph_segment_begin(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::HieroglyphSegmentBegin
}

fn is_hieroglyph_segment_end(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::HieroglyphSegmentEnd
}

fn is_zwnj(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::NonJoiner
}

/// сюда же попадают независимые базы и символы
fn is_other(code: u32, r: &UniversalRecord) -> bool
{
    (r.general == GeneralCategory::Po
        || matches!(
            r.syllabic,
            SyllabicCategory::ConsonantDead
                | SyllabicCategory::Joiner
                | SyllabicCategory::ModifyingLetter
                | SyllabicCategory::Other
        ))
        && !is_base(code, r)
        && !is_base_other(code, r)
        && !is_cgj(code, r)
        && !is_sym_mod(code, r)
        && !is_word_joiner(code, r)
}

fn is_repha(_code: u32, r: &UniversalRecord) -> bool
{
    matches!(
        r.syllabic,
        SyllabicCategory::ConsonantPrecedingRepha | SyllabicCategory::ConsonantPrefixed
    )
}

/// выделен из вирам: сакот Тай Тхам ведёт себя иначе
fn is_sakot(code: u32, _r: &UniversalRecord) -> bool
{
    code == 0x1A60
}

/// балийские музыкальные знаки
fn is_sym_mod(code: u32, _r: &UniversalRecord) -> bool
{
    matches!(code, 0x1B6B ..= 0x1B73)
}

fn is_vowel(_code: u32, r: &UniversalRecord) -> bool
{
    r.syllabic == SyllabicCategory::PureKiller
        || (r.general != GeneralCategory::Lo
            && matches!(
                r.syllabic,
                SyllabicCategory::Vowel | SyllabicCategory::VowelDependent
            ))
}

fn is_vowel_mod(_code: u32, r: &UniversalRecord) -> bool
{
    matches!(
        r.syllabic,
        SyllabicCategory::ToneMark
            | SyllabicCategory::CantillationMark
            | SyllabicCategory::RegisterShifter
            | SyllabicCategory::Visarga
    ) || (r.general != GeneralCategory::Lo && r.syllabic == SyllabicCategory::Bindu)
}

/// сюда же попадают зарезервированные кодпоинты; заполнители хангыля
/// остаются видимыми и исключены поимённо
fn is_word_joiner(code: u32, r: &UniversalRecord) -> bool
{
    (r.ignorable
        && !matches!(
            code,
            0x115F | 0x1160 | 0x3164 | 0xFFA0 | 0x1BCA0 ..= 0x1BCA3
        )
        && r.syllabic == SyllabicCategory::Other
        && !is_cgj(code, r))
        || r.general == GeneralCategory::Cn
}
