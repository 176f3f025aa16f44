//! Named RGB565 colors.
//!
//! The driver works on plain `u16` RGB565 values (5 bits red, 6 green, 5 blue). [`Color`] is
//! only a lookup table of commonly used values; every drawing call accepts it through
//! `Into<u16>`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    Black,
    Navy,
    DarkGreen,
    DarkCyan,
    Maroon,
    Purple,
    Olive,
    LightGrey,
    DarkGrey,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
    Orange,
    GreenYellow,
    Pink,
}

impl Color {
    pub const ALL: [Color; 19] = [
        Color::Black,
        Color::Navy,
        Color::DarkGreen,
        Color::DarkCyan,
        Color::Maroon,
        Color::Purple,
        Color::Olive,
        Color::LightGrey,
        Color::DarkGrey,
        Color::Blue,
        Color::Green,
        Color::Cyan,
        Color::Red,
        Color::Magenta,
        Color::Yellow,
        Color::White,
        Color::Orange,
        Color::GreenYellow,
        Color::Pink,
    ];

    /// The packed RGB565 value.
    pub const fn rgb565(self) -> u16 {
        match self {
            Color::Black => 0x0000,
            Color::Navy => 0x000F,
            Color::DarkGreen => 0x03E0,
            Color::DarkCyan => 0x03EF,
            Color::Maroon => 0x7800,
            Color::Purple => 0x780F,
            Color::Olive => 0x7BE0,
            Color::LightGrey => 0xC618,
            Color::DarkGrey => 0x7BEF,
            Color::Blue => 0x001F,
            Color::Green => 0x07E0,
            Color::Cyan => 0x07FF,
            Color::Red => 0xF800,
            Color::Magenta => 0xF81F,
            Color::Yellow => 0xFFE0,
            Color::White => 0xFFFF,
            Color::Orange => 0xFD20,
            Color::GreenYellow => 0xAFE5,
            // same value as Magenta
            Color::Pink => 0xF81F,
        }
    }
}

impl From<Color> for u16 {
    fn from(color: Color) -> u16 {
        color.rgb565()
    }
}
