/// Joining_Type из ArabicShaping.txt, однобуквенные коды.
/// кодпоинты, не упомянутые в источнике, считаются несоединяющимися (X)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoiningType
{
    X = 0, // Non_Joining
    C,     // Join_Causing
    D,     // Dual_Joining
    L,     // Left_Joining
    R,     // Right_Joining
    T,     // Transparent
    U,     // Non_Joining (явно размеченный)
}

impl JoiningType
{
    /// значение по коду из источника
    pub fn parse(token: &str) -> Option<Self>
    {
        let value = match token {
            "X" => Self::X,
            "C" => Self::C,
            "D" => Self::D,
            "L" => Self::L,
            "R" => Self::R,
            "T" => Self::T,
            "U" => Self::U,
            _ => return None,
        };

        Some(value)
    }

    /// код значения
    pub fn name(self) -> &'static str
    {
        match self {
            Self::X => "X",
            Self::C => "C",
            Self::D => "D",
            Self::L => "L",
            Self::R => "R",
            Self::T => "T",
            Self::U => "U",
        }
    }

    /// участвует ли кодпоинт в скорописном соединении как буква
    #[inline(always)]
    pub fn is_joining_letter(self) -> bool
    {
        matches!(self, Self::C | Self::D | Self::L | Self::R)
    }
}
