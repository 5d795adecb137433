use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::TrueColor {
    r: 95,
    g: 175,
    b: 255,
};
pub const IPV4_PREFIX: Color = Color::TrueColor {
    r: 255,
    g: 175,
    b: 95,
};
pub const IPV6_ADDR: Color = Color::TrueColor {
    r: 175,
    g: 135,
    b: 255,
};
