//! Card display helpers

use crate::model::TutorRecord;

/// Avatar initials: first letter of up to two words, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

/// Five-glyph star bar, one filled star per whole rating point.
pub fn star_glyphs(rating: f32) -> String {
    let full = if rating.is_nan() { 0 } else { rating.clamp(0.0, 5.0).floor() as usize };
    (0..5).map(|i| if i < full { '★' } else { '☆' }).collect()
}

/// "$18 / الساعة · EET GMT+3"
pub fn price_line(tutor: &TutorRecord) -> String {
    let mut line = format!("${} / الساعة", tutor.hourly_price.normalize());
    if !tutor.timezones.is_empty() {
        line.push_str(" · ");
        line.push_str(&tutor.timezones.join(" "));
    }
    line
}
