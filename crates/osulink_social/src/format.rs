//! Text formatting shared by the views.

use osulink_core::Grade;

/// Mods as `+HDDT`, or `No Mod`.
pub fn mods(mods: &[String]) -> String {
    if mods.is_empty() {
        "No Mod".to_string()
    } else {
        format!("+{}", mods.concat())
    }
}

/// Seconds as `m:ss`.
pub fn length(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Seconds as `Nh Nm`.
pub fn play_time(seconds: u64) -> String {
    format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
}

/// Integer with comma thousands separators.
pub fn number(value: impl Into<u64>) -> String {
    let digits = value.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Fractional accuracy (0..=1) as `xx.xx%`.
pub fn accuracy(fraction: f64) -> String {
    percent(fraction * 100.0)
}

/// Percentage as `xx.xx%`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// Embed colour for a grade.
pub fn grade_colour(grade: Grade) -> u32 {
    match grade {
        Grade::XH | Grade::X => colours::GOLD,
        Grade::SH | Grade::S => colours::YELLOW,
        Grade::A => colours::GREEN,
        Grade::B => colours::BLUE,
        Grade::C => colours::PURPLE,
        Grade::D => colours::RED,
        Grade::F => colours::GREY,
    }
}

/// Embed colours.
pub mod colours {
    /// Profiles
    pub const BLUE: u32 = 0x3498DB;
    /// Beatmaps, C grades
    pub const PURPLE: u32 = 0x9B59B6;
    /// Errors, D grades
    pub const RED: u32 = 0xED4245;
    /// Confirmations, A grades
    pub const GREEN: u32 = 0x57F287;
    /// SS grades
    pub const GOLD: u32 = 0xF1C40F;
    /// S grades
    pub const YELLOW: u32 = 0xFEE75C;
    /// Failed plays
    pub const GREY: u32 = 0x95A5A6;
}
