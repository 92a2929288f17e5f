/// Indic_Syllabic_Category - слоговая категория кодпоинта.
/// нулевое значение - Other, оно же умолчание для кодпоинтов, не упомянутых в источнике
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyllabicCategory
{
    Other = 0,
    Avagraha,
    Bindu,
    BrahmiJoiningNumber,
    CantillationMark,
    Consonant,
    ConsonantDead,
    ConsonantFinal,
    ConsonantHeadLetter,
    ConsonantInitialPostfixed,
    ConsonantKiller,
    ConsonantMedial,
    ConsonantPlaceholder,
    ConsonantPrecedingRepha,
    ConsonantPrefixed,
    ConsonantSubjoined,
    ConsonantSucceedingRepha,
    ConsonantWithStacker,
    GeminationMark,
    Hieroglyph,
    HieroglyphJoiner,
    HieroglyphSegmentBegin,
    HieroglyphSegmentEnd,
    InvisibleStacker,
    Joiner,
    ModifyingLetter,
    NonJoiner,
    Nukta,
    Number,
    NumberJoiner,
    PureKiller,
    RegisterShifter,
    SyllableModifier,
    ToneLetter,
    ToneMark,
    Virama,
    Visarga,
    Vowel,
    VowelDependent,
    VowelIndependent,
}

impl SyllabicCategory
{
    /// все значения в порядке дискриминантов
    pub const ALL: [Self; 40] = [
        Self::Other,
        Self::Avagraha,
        Self::Bindu,
        Self::BrahmiJoiningNumber,
        Self::CantillationMark,
        Self::Consonant,
        Self::ConsonantDead,
        Self::ConsonantFinal,
        Self::ConsonantHeadLetter,
        Self::ConsonantInitialPostfixed,
        Self::ConsonantKiller,
        Self::ConsonantMedial,
        Self::ConsonantPlaceholder,
        Self::ConsonantPrecedingRepha,
        Self::ConsonantPrefixed,
        Self::ConsonantSubjoined,
        Self::ConsonantSucceedingRepha,
        Self::ConsonantWithStacker,
        Self::GeminationMark,
        Self::Hieroglyph,
        Self::HieroglyphJoiner,
        Self::HieroglyphSegmentBegin,
        Self::HieroglyphSegmentEnd,
        Self::InvisibleStacker,
        Self::Joiner,
        Self::ModifyingLetter,
        Self::NonJoiner,
        Self::Nukta,
        Self::Number,
        Self::NumberJoiner,
        Self::PureKiller,
        Self::RegisterShifter,
        Self::SyllableModifier,
        Self::ToneLetter,
        Self::ToneMark,
        Self::Virama,
        Self::Visarga,
        Self::Vowel,
        Self::VowelDependent,
        Self::VowelIndependent,
    ];

    /// значение по имени из источника
    pub fn parse(token: &str) -> Option<Self>
    {
        let value = match token {
            "Other" => Self::Other,
            "Avagraha" => Self::Avagraha,
            "Bindu" => Self::Bindu,
            "Brahmi_Joining_Number" => Self::BrahmiJoiningNumber,
            "Cantillation_Mark" => Self::CantillationMark,
            "Consonant" => Self::Consonant,
            "Consonant_Dead" => Self::ConsonantDead,
            "Consonant_Final" => Self::ConsonantFinal,
            "Consonant_Head_Letter" => Self::ConsonantHeadLetter,
            "Consonant_Initial_Postfixed" => Self::ConsonantInitialPostfixed,
            "Consonant_Killer" => Self::ConsonantKiller,
            "Consonant_Medial" => Self::ConsonantMedial,
            "Consonant_Placeholder" => Self::ConsonantPlaceholder,
            "Consonant_Preceding_Repha" => Self::ConsonantPrecedingRepha,
            "Consonant_Prefixed" => Self::ConsonantPrefixed,
            "Consonant_Subjoined" => Self::ConsonantSubjoined,
            "Consonant_Succeeding_Repha" => Self::ConsonantSucceedingRepha,
            "Consonant_With_Stacker" => Self::ConsonantWithStacker,
            "Gemination_Mark" => Self::GeminationMark,
            "Hieroglyph" => Self::Hieroglyph,
            "Hieroglyph_Joiner" => Self::HieroglyphJoiner,
            "Hieroglyph_Segment_Begin" => Self::HieroglyphSegmentBegin,
            "Hieroglyph_Segment_End" => Self::HieroglyphSegmentEnd,
            "Invisible_Stacker" => Self::InvisibleStacker,
            "Joiner" => Self::Joiner,
            "Modifying_Letter" => Self::ModifyingLetter,
            "Non_Joiner" => Self::NonJoiner,
            "Nukta" => Self::Nukta,
            "Number" => Self::Number,
            "Number_Joiner" => Self::NumberJoiner,
            "Pure_Killer" => Self::PureKiller,
            "Register_Shifter" => Self::RegisterShifter,
            "Syllable_Modifier" => Self::SyllableModifier,
            "Tone_Letter" => Self::ToneLetter,
            "Tone_Mark" => Self::ToneMark,
            "Virama" => Self::Virama,
            "Visarga" => Self::Visarga,
            "Vowel" => Self::Vowel,
            "Vowel_Dependent" => Self::VowelDependent,
            "Vowel_Independent" => Self::VowelIndependent,
            _ => return None,
        };

        Some(value)
    }

    /// имя значения, как оно записано в источнике
    pub fn name(self) -> &'static str
    {
        match self {
            Self::Other => "Other",
            Self::Avagraha => "Avagraha",
            Self::Bindu => "Bindu",
            Self::BrahmiJoiningNumber => "Brahmi_Joining_Number",
            Self::CantillationMark => "Cantillation_Mark",
            Self::Consonant => "Consonant",
            Self::ConsonantDead => "Consonant_Dead",
            Self::ConsonantFinal => "Consonant_Final",
            Self::ConsonantHeadLetter => "Consonant_Head_Letter",
            Self::ConsonantInitialPostfixed => "Consonant_Initial_Postfixed",
            Self::ConsonantKiller => "Consonant_Killer",
            Self::ConsonantMedial => "Consonant_Medial",
            Self::ConsonantPlaceholder => "Consonant_Placeholder",
            Self::ConsonantPrecedingRepha => "Consonant_Preceding_Repha",
            Self::ConsonantPrefixed => "Consonant_Prefixed",
            Self::ConsonantSubjoined => "Consonant_Subjoined",
            Self::ConsonantSucceedingRepha => "Consonant_Succeeding_Repha",
            Self::ConsonantWithStacker => "Consonant_With_Stacker",
            Self::GeminationMark => "Gemination_Mark",
            Self::Hieroglyph => "Hieroglyph",
            Self::HieroglyphJoiner => "Hieroglyph_Joiner",
            Self::HieroglyphSegmentBegin => "Hieroglyph_Segment_Begin",
            Self::HieroglyphSegmentEnd => "Hieroglyph_Segment_End",
            Self::InvisibleStacker => "Invisible_Stacker",
            Self::Joiner => "Joiner",
            Self::ModifyingLetter => "Modifying_Letter",
            Self::NonJoiner => "Non_Joiner",
            Self::Nukta => "Nukta",
            Self::Number => "Number",
            Self::NumberJoiner => "Number_Joiner",
            Self::PureKiller => "Pure_Killer",
            Self::RegisterShifter => "Register_Shifter",
            Self::SyllableModifier => "Syllable_Modifier",
            Self::ToneLetter => "Tone_Letter",
            Self::ToneMark => "Tone_Mark",
            Self::Virama => "Virama",
            Self::Visarga => "Visarga",
            Self::Vowel => "Vowel",
            Self::VowelDependent => "Vowel_Dependent",
            Self::VowelIndependent => "Vowel_Independent",
        }
    }

    /// короткий псевдоним для легенды артефакта: заглавные буквы имени,
    /// кроме случаев, где такая свёртка даёт совпадения
    pub fn short(self) -> &'static str
    {
        match self {
            Self::Other => "x",
            Self::Avagraha => "A",
            Self::Bindu => "Bi",
            Self::BrahmiJoiningNumber => "BJN",
            Self::CantillationMark => "Ca",
            Self::Consonant => "C",
            Self::ConsonantDead => "CD",
            Self::ConsonantFinal => "CF",
            Self::ConsonantHeadLetter => "CHL",
            Self::ConsonantInitialPostfixed => "CIP",
            Self::ConsonantKiller => "CK",
            Self::ConsonantMedial => "CM",
            Self::ConsonantPlaceholder => "CP",
            Self::ConsonantPrecedingRepha => "CPR",
            Self::ConsonantPrefixed => "CPrf",
            Self::ConsonantSubjoined => "CS",
            Self::ConsonantSucceedingRepha => "CSR",
            Self::ConsonantWithStacker => "CWS",
            Self::GeminationMark => "GM",
            Self::Hieroglyph => "H",
            Self::HieroglyphJoiner => "HJ",
            Self::HieroglyphSegmentBegin => "HSB",
            Self::HieroglyphSegmentEnd => "HSE",
            Self::InvisibleStacker => "IS",
            Self::Joiner => "ZWJ",
            Self::ModifyingLetter => "ML",
            Self::NonJoiner => "ZWNJ",
            Self::Nukta => "N",
            Self::Number => "Nd",
            Self::NumberJoiner => "NJ",
            Self::PureKiller => "PK",
            Self::RegisterShifter => "RS",
            Self::SyllableModifier => "SM",
            Self::ToneLetter => "TL",
            Self::ToneMark => "TM",
            Self::Virama => "V",
            Self::Visarga => "Vs",
            Self::Vowel => "Vo",
            Self::VowelDependent => "M",
            Self::VowelIndependent => "VI",
        }
    }
}
