use super::Category;
use crate::error::BakeError;
use crate::merge::UniversalRecord;
use crate::properties::PositionalCategory as Pos;

/// позиционный суффикс уточняемой категории
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix
{
    Above,
    Below,
    Post,
    Pre,
}

impl Suffix
{
    pub fn tag(self) -> &'static str
    {
        match self {
            Self::Above => "Abv",
            Self::Below => "Blw",
            Self::Post => "Pst",
            Self::Pre => "Pre",
        }
    }
}

/// отношение категории к позиционной оси
enum PositionRule
{
    /// категория уточняется суффиксом по таблице позиций
    Suffixed(&'static [(Suffix, &'static [Pos])]),
    /// позиция допустима, но на тег не влияет
    Exempt,
    /// позиции быть не должно
    Strict,
}

const FINAL_POSITIONS: &[(Suffix, &[Pos])] = &[
    (Suffix::Above, &[Pos::Top]),
    (Suffix::Below, &[Pos::Bottom]),
    (Suffix::Post, &[Pos::Right]),
];

const MEDIAL_POSITIONS: &[(Suffix, &[Pos])] = &[
    (Suffix::Above, &[Pos::Top]),
    (Suffix::Below, &[Pos::Bottom, Pos::BottomAndLeft, Pos::BottomAndRight]),
    (Suffix::Post, &[Pos::Right]),
    (Suffix::Pre, &[Pos::Left, Pos::TopAndBottomAndLeft]),
];

const CONS_MOD_POSITIONS: &[(Suffix, &[Pos])] = &[
    (Suffix::Above, &[Pos::Top]),
    (Suffix::Below, &[Pos::Bottom, Pos::Overstruck]),
];

const VOWEL_POSITIONS: &[(Suffix, &[Pos])] = &[
    (
        Suffix::Above,
        &[Pos::Top, Pos::TopAndBottom, Pos::TopAndBottomAndRight, Pos::TopAndRight],
    ),
    (Suffix::Below, &[Pos::Bottom, Pos::Overstruck, Pos::BottomAndRight]),
    (Suffix::Post, &[Pos::Right]),
    (
        Suffix::Pre,
        &[Pos::Left, Pos::TopAndLeft, Pos::TopAndLeftAndRight, Pos::LeftAndRight],
    ),
];

const VOWEL_MOD_POSITIONS: &[(Suffix, &[Pos])] = &[
    (Suffix::Above, &[Pos::Top]),
    (Suffix::Below, &[Pos::Bottom, Pos::Overstruck]),
    (Suffix::Post, &[Pos::Right]),
    (Suffix::Pre, &[Pos::Left]),
];

const SYM_MOD_POSITIONS: &[(Suffix, &[Pos])] = &[
    (Suffix::Above, &[Pos::Top]),
    (Suffix::Below, &[Pos::Bottom]),
];

/// у слоговых модификаторов без позиции подразумевается постпозиция
const FINAL_MOD_POSITIONS: &[(Suffix, &[Pos])] = &[
    (Suffix::Above, &[Pos::Top]),
    (Suffix::Below, &[Pos::Bottom]),
    (Suffix::Post, &[Pos::NotApplicable]),
];

fn position_rule(category: Category) -> PositionRule
{
    match category {
        Category::ConsFinal => PositionRule::Suffixed(FINAL_POSITIONS),
        Category::ConsFinalMod => PositionRule::Suffixed(FINAL_MOD_POSITIONS),
        Category::ConsMedial => PositionRule::Suffixed(MEDIAL_POSITIONS),
        Category::ConsMod => PositionRule::Suffixed(CONS_MOD_POSITIONS),
        Category::SymMod => PositionRule::Suffixed(SYM_MOD_POSITIONS),
        Category::Vowel => PositionRule::Suffixed(VOWEL_POSITIONS),
        Category::VowelMod => PositionRule::Suffixed(VOWEL_MOD_POSITIONS),
        Category::Base
        | Category::ConsSubjoined
        | Category::Halant
        | Category::InvisibleStacker
        | Category::Repha => PositionRule::Exempt,
        Category::BaseNum
        | Category::BaseOther
        | Category::Cgj
        | Category::ConsWithStacker
        | Category::HalantNum
        | Category::Hieroglyph
        | Category::HieroglyphJoiner
        | Category::HieroglyphSegmentBegin
        | Category::HieroglyphSegmentEnd
        | Category::Zwnj
        | Category::Other
        | Category::Sakot
        | Category::WordJoiner => PositionRule::Strict,
    }
}

/// позиционное уточнение категории.
/// уточняемой категории позиция обязана дать ровно один суффикс; у остальных
/// позиция либо допустима без последствий, либо её не должно быть вовсе
pub fn refine(
    code: u32,
    category: Category,
    record: &UniversalRecord,
) -> Result<UniversalCategory, BakeError>
{
    match position_rule(category) {
        PositionRule::Suffixed(table) => {
            let matched: Vec<Suffix> = table
                .iter()
                .filter(|(_, positions)| positions.contains(&record.positional))
                .map(|(suffix, _)| *suffix)
                .collect();

            match matched.as_slice() {
                [suffix] => Ok(UniversalCategory::from_parts(category, Some(*suffix))),
                _ => Err(BakeError::PositionConflict {
                    code,
                    category: category.tag(),
                    position: record.positional.name(),
                    matched: matched.iter().map(|suffix| suffix.tag()).collect(),
                }),
            }
        }
        PositionRule::Exempt => Ok(UniversalCategory::from_parts(category, None)),
        PositionRule::Strict => {
            // у знака намбчад (U+0F7F) позиция справа, тег при этом не уточняется
            if !matches!(record.positional, Pos::NotApplicable | Pos::VisualOrderLeft)
                && code != 0x0F7F
            {
                return Err(BakeError::UnexpectedPosition {
                    code,
                    category: category.tag(),
                    position: record.positional.name(),
                });
            }

            Ok(UniversalCategory::from_parts(category, None))
        }
    }
}

/// итоговый тег универсальной классификации, он же значение ячейки таблицы.
/// порядок - алфавитный по тегу, дискриминант числом входит в артефакт
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniversalCategory
{
    B = 0,
    CGJ,
    CMAbv,
    CMBlw,
    CS,
    FAbv,
    FBlw,
    FMAbv,
    FMBlw,
    FMPst,
    FPst,
    G,
    GB,
    H,
    HN,
    IS,
    J,
    MAbv,
    MBlw,
    MPre,
    MPst,
    N,
    O,
    R,
    SB,
    SE,
    SMAbv,
    SMBlw,
    SUB,
    Sk,
    VAbv,
    VBlw,
    VMAbv,
    VMBlw,
    VMPre,
    VMPst,
    VPre,
    VPst,
    WJ,
    ZWNJ,
}

impl UniversalCategory
{
    /// тег вне таблицы для назначенного кодпоинта
    pub const FALLBACK_ASSIGNED: Self = Self::O;
    /// тег вне таблицы для неназначенного кодпоинта
    pub const FALLBACK_UNASSIGNED: Self = Self::WJ;

    /// все теги в порядке дискриминантов
    pub const ALL: [Self; 40] = [
        Self::B,
        Self::CGJ,
        Self::CMAbv,
        Self::CMBlw,
        Self::CS,
        Self::FAbv,
        Self::FBlw,
        Self::FMAbv,
        Self::FMBlw,
        Self::FMPst,
        Self::FPst,
        Self::G,
        Self::GB,
        Self::H,
        Self::HN,
        Self::IS,
        Self::J,
        Self::MAbv,
        Self::MBlw,
        Self::MPre,
        Self::MPst,
        Self::N,
        Self::O,
        Self::R,
        Self::SB,
        Self::SE,
        Self::SMAbv,
        Self::SMBlw,
        Self::SUB,
        Self::Sk,
        Self::VAbv,
        Self::VBlw,
        Self::VMAbv,
        Self::VMBlw,
        Self::VMPre,
        Self::VMPst,
        Self::VPre,
        Self::VPst,
        Self::WJ,
        Self::ZWNJ,
    ];

    /// тег из категории и суффикса
    pub fn from_parts(category: Category, suffix: Option<Suffix>) -> Self
    {
        match (category, suffix) {
            (Category::Base, None) => Self::B,
            (Category::BaseNum, None) => Self::N,
            (Category::BaseOther, None) => Self::GB,
            (Category::Cgj, None) => Self::CGJ,
            (Category::ConsFinal, Some(Suffix::Above)) => Self::FAbv,
            (Category::ConsFinal, Some(Suffix::Below)) => Self::FBlw,
            (Category::ConsFinal, Some(Suffix::Post)) => Self::FPst,
            (Category::ConsFinalMod, Some(Suffix::Above)) => Self::FMAbv,
            (Category::ConsFinalMod, Some(Suffix::Below)) => Self::FMBlw,
            (Category::ConsFinalMod, Some(Suffix::Post)) => Self::FMPst,
            (Category::ConsMedial, Some(Suffix::Above)) => Self::MAbv,
            (Category::ConsMedial, Some(Suffix::Below)) => Self::MBlw,
            (Category::ConsMedial, Some(Suffix::Post)) => Self::MPst,
            (Category::ConsMedial, Some(Suffix::Pre)) => Self::MPre,
            (Category::ConsMod, Some(Suffix::Above)) => Self::CMAbv,
            (Category::ConsMod, Some(Suffix::Below)) => Self::CMBlw,
            (Category::ConsSubjoined, None) => Self::SUB,
            (Category::ConsWithStacker, None) => Self::CS,
            (Category::Halant, None) => Self::H,
            (Category::HalantNum, None) => Self::HN,
            (Category::InvisibleStacker, None) => Self::IS,
            (Category::Hieroglyph, None) => Self::G,
            (Category::HieroglyphJoiner, None) => Self::J,
            (Category::HieroglyphSegmentBegin, None) => Self::SB,
            (Category::HieroglyphSegmentEnd, None) => Self::SE,
            (Category::Zwnj, None) => Self::ZWNJ,
            (Category::Other, None) => Self::O,
            (Category::Repha, None) => Self::R,
            (Category::Sakot, None) => Self::Sk,
            (Category::SymMod, Some(Suffix::Above)) => Self::SMAbv,
            (Category::SymMod, Some(Suffix::Below)) => Self::SMBlw,
            (Category::Vowel, Some(Suffix::Above)) => Self::VAbv,
            (Category::Vowel, Some(Suffix::Below)) => Self::VBlw,
            (Category::Vowel, Some(Suffix::Post)) => Self::VPst,
            (Category::Vowel, Some(Suffix::Pre)) => Self::VPre,
            (Category::VowelMod, Some(Suffix::Above)) => Self::VMAbv,
            (Category::VowelMod, Some(Suffix::Below)) => Self::VMBlw,
            (Category::VowelMod, Some(Suffix::Post)) => Self::VMPst,
            (Category::VowelMod, Some(Suffix::Pre)) => Self::VMPre,
            (Category::WordJoiner, None) => Self::WJ,
            _ => unreachable!(),
        }
    }

    /// значение ячейки таблицы
    #[inline(always)]
    pub fn cell(self) -> u16
    {
        self as u16
    }

    /// тег по значению ячейки
    #[inline(always)]
    pub fn from_cell(cell: u16) -> Self
    {
        Self::ALL[cell as usize]
    }

    pub fn tag(self) -> &'static str
    {
        match self {
            Self::B => "B",
            Self::CGJ => "CGJ",
            Self::CMAbv => "CMAbv",
            Self::CMBlw => "CMBlw",
            Self::CS => "CS",
            Self::FAbv => "FAbv",
            Self::FBlw => "FBlw",
            Self::FMAbv => "FMAbv",
            Self::FMBlw => "FMBlw",
            Self::FMPst => "FMPst",
            Self::FPst => "FPst",
            Self::G => "G",
            Self::GB => "GB",
            Self::H => "H",
            Self::HN => "HN",
            Self::IS => "IS",
            Self::J => "J",
            Self::MAbv => "MAbv",
            Self::MBlw => "MBlw",
            Self::MPre => "MPre",
            Self::MPst => "MPst",
            Self::N => "N",
            Self::O => "O",
            Self::R => "R",
            Self::SB => "SB",
            Self::SE => "SE",
            Self::SMAbv => "SMAbv",
            Self::SMBlw => "SMBlw",
            Self::SUB => "SUB",
            Self::Sk => "Sk",
            Self::VAbv => "VAbv",
            Self::VBlw => "VBlw",
            Self::VMAbv => "VMAbv",
            Self::VMBlw => "VMBlw",
            Self::VMPre => "VMPre",
            Self::VMPst => "VMPst",
            Self::VPre => "VPre",
            Self::VPst => "VPst",
            Self::WJ => "WJ",
            Self::ZWNJ => "ZWNJ",
        }
    }
}
