/// General_Category - двухбуквенный код из третьего поля UnicodeData.txt.
/// кодпоинты, отсутствующие в файле, не назначены (Cn)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneralCategory
{
    Cn = 0, // Unassigned
    Cc,
    Cf,
    Co,
    Cs,
    Ll,
    Lm,
    Lo,
    Lt,
    Lu,
    Mc,
    Me,
    Mn,
    Nd,
    Nl,
    No,
    Pc,
    Pd,
    Pe,
    Pf,
    Pi,
    Po,
    Ps,
    Sc,
    Sk,
    Sm,
    So,
    Zl,
    Zp,
    Zs,
}

impl GeneralCategory
{
    /// значение по коду из источника
    pub fn parse(token: &str) -> Option<Self>
    {
        let value = match token {
            "Cn" => Self::Cn,
            "Cc" => Self::Cc,
            "Cf" => Self::Cf,
            "Co" => Self::Co,
            "Cs" => Self::Cs,
            "Ll" => Self::Ll,
            "Lm" => Self::Lm,
            "Lo" => Self::Lo,
            "Lt" => Self::Lt,
            "Lu" => Self::Lu,
            "Mc" => Self::Mc,
            "Me" => Self::Me,
            "Mn" => Self::Mn,
            "Nd" => Self::Nd,
            "Nl" => Self::Nl,
            "No" => Self::No,
            "Pc" => Self::Pc,
            "Pd" => Self::Pd,
            "Pe" => Self::Pe,
            "Pf" => Self::Pf,
            "Pi" => Self::Pi,
            "Po" => Self::Po,
            "Ps" => Self::Ps,
            "Sc" => Self::Sc,
            "Sk" => Self::Sk,
            "Sm" => Self::Sm,
            "So" => Self::So,
            "Zl" => Self::Zl,
            "Zp" => Self::Zp,
            "Zs" => Self::Zs,
            _ => return None,
        };

        Some(value)
    }

    /// код значения
    pub fn name(self) -> &'static str
    {
        match self {
            Self::Cn => "Cn",
            Self::Cc => "Cc",
            Self::Cf => "Cf",
            Self::Co => "Co",
            Self::Cs => "Cs",
            Self::Ll => "Ll",
            Self::Lm => "Lm",
            Self::Lo => "Lo",
            Self::Lt => "Lt",
            Self::Lu => "Lu",
            Self::Mc => "Mc",
            Self::Me => "Me",
            Self::Mn => "Mn",
            Self::Nd => "Nd",
            Self::Nl => "Nl",
            Self::No => "No",
            Self::Pc => "Pc",
            Self::Pd => "Pd",
            Self::Pe => "Pe",
            Self::Pf => "Pf",
            Self::Pi => "Pi",
            Self::Po => "Po",
            Self::Ps => "Ps",
            Self::Sc => "Sc",
            Self::Sk => "Sk",
            Self::Sm => "Sm",
            Self::So => "So",
            Self::Zl => "Zl",
            Self::Zp => "Zp",
            Self::Zs => "Zs",
        }
    }

    /// несущий знак (Mc, Me или Mn)
    #[inline(always)]
    pub fn is_mark(self) -> bool
    {
        matches!(self, Self::Mc | Self::Me | Self::Mn)
    }
}
