/// Indic_Positional_Category - где визуально располагается зависимый знак
/// относительно базы. Not_Applicable - нулевое значение и умолчание
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionalCategory
{
    NotApplicable = 0,
    Bottom,
    BottomAndLeft,
    BottomAndRight,
    Left,
    LeftAndRight,
    Overstruck,
    Right,
    Top,
    TopAndBottom,
    TopAndBottomAndLeft,
    TopAndBottomAndRight,
    TopAndLeft,
    TopAndLeftAndRight,
    TopAndRight,
    VisualOrderLeft,
}

impl PositionalCategory
{
    /// все значения в порядке дискриминантов
    pub const ALL: [Self; 16] = [
        Self::NotApplicable,
        Self::Bottom,
        Self::BottomAndLeft,
        Self::BottomAndRight,
        Self::Left,
        Self::LeftAndRight,
        Self::Overstruck,
        Self::Right,
        Self::Top,
        Self::TopAndBottom,
        Self::TopAndBottomAndLeft,
        Self::TopAndBottomAndRight,
        Self::TopAndLeft,
        Self::TopAndLeftAndRight,
        Self::TopAndRight,
        Self::VisualOrderLeft,
    ];

    /// значение по имени из источника
    pub fn parse(token: &str) -> Option<Self>
    {
        let value = match token {
            "Not_Applicable" => Self::NotApplicable,
            "Bottom" => Self::Bottom,
            "Bottom_And_Left" => Self::BottomAndLeft,
            "Bottom_And_Right" => Self::BottomAndRight,
            "Left" => Self::Left,
            "Left_And_Right" => Self::LeftAndRight,
            "Overstruck" => Self::Overstruck,
            "Right" => Self::Right,
            "Top" => Self::Top,
            "Top_And_Bottom" => Self::TopAndBottom,
            "Top_And_Bottom_And_Left" => Self::TopAndBottomAndLeft,
            "Top_And_Bottom_And_Right" => Self::TopAndBottomAndRight,
            "Top_And_Left" => Self::TopAndLeft,
            "Top_And_Left_And_Right" => Self::TopAndLeftAndRight,
            "Top_And_Right" => Self::TopAndRight,
            "Visual_Order_Left" => Self::VisualOrderLeft,
            _ => return None,
        };

        Some(value)
    }

    /// имя значения, как оно записано в источнике
    pub fn name(self) -> &'static str
    {
        match self {
            Self::NotApplicable => "Not_Applicable",
            Self::Bottom => "Bottom",
            Self::BottomAndLeft => "Bottom_And_Left",
            Self::BottomAndRight => "Bottom_And_Right",
            Self::Left => "Left",
            Self::LeftAndRight => "Left_And_Right",
            Self::Overstruck => "Overstruck",
            Self::Right => "Right",
            Self::Top => "Top",
            Self::TopAndBottom => "Top_And_Bottom",
            Self::TopAndBottomAndLeft => "Top_And_Bottom_And_Left",
            Self::TopAndBottomAndRight => "Top_And_Bottom_And_Right",
            Self::TopAndLeft => "Top_And_Left",
            Self::TopAndLeftAndRight => "Top_And_Left_And_Right",
            Self::TopAndRight => "Top_And_Right",
            Self::VisualOrderLeft => "Visual_Order_Left",
        }
    }

    /// короткий псевдоним для легенды артефакта
    pub fn short(self) -> &'static str
    {
        match self {
            Self::NotApplicable => "x",
            Self::Bottom => "B",
            Self::BottomAndLeft => "BL",
            Self::BottomAndRight => "BR",
            Self::Left => "L",
            Self::LeftAndRight => "LR",
            Self::Overstruck => "O",
            Self::Right => "R",
            Self::Top => "T",
            Self::TopAndBottom => "TB",
            Self::TopAndBottomAndLeft => "TBL",
            Self::TopAndBottomAndRight => "TBR",
            Self::TopAndLeft => "TL",
            Self::TopAndLeftAndRight => "TLR",
            Self::TopAndRight => "TR",
            Self::VisualOrderLeft => "VOL",
        }
    }
}
