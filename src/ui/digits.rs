//! Block-digit font for the big clock face.
//!
//! Every character is a 3×5 bitmap (the colon is 1×5). A font choice only
//! changes the glyph used to fill lit pixels.

/// Rows in every bitmap.
pub const ROWS: usize = 5;

/// Fill glyph for each entry of [`crate::types::FONTS`], in the same order.
pub const FONT_GLYPHS: [char; 8] = ['█', '▓', '▒', '#', '●', '■', '◆', '*'];

const DIGITS: [[&str; ROWS]; 10] = [
    ["###", "#.#", "#.#", "#.#", "###"],
    [".#.", "##.", ".#.", ".#.", "###"],
    ["###", "..#", "###", "#..", "###"],
    ["###", "..#", "###", "..#", "###"],
    ["#.#", "#.#", "###", "..#", "..#"],
    ["###", "#..", "###", "..#", "###"],
    ["###", "#..", "###", "#.#", "###"],
    ["###", "..#", "..#", "..#", "..#"],
    ["###", "#.#", "###", "#.#", "###"],
    ["###", "#.#", "###", "..#", "###"],
];

const COLON: [&str; ROWS] = [".", "#", ".", "#", "."];

fn bitmap(c: char) -> Option<&'static [&'static str; ROWS]> {
    match c {
        '0'..='9' => Some(&DIGITS[c as usize - '0' as usize]),
        ':' => Some(&COLON),
        _ => None,
    }
}

/// Returns the fill glyph for a font index, wrapping out-of-range indices.
pub fn glyph_for(font_index: usize) -> char {
    FONT_GLYPHS[font_index % FONT_GLYPHS.len()]
}

/// Renders `text` as big rows.
///
/// Each pixel becomes `2 * scale` columns and `scale` rows; characters are
/// separated by one blank pixel. Characters without a bitmap are skipped.
pub fn big_rows(text: &str, glyph: char, scale: usize) -> Vec<String> {
    let scale = scale.max(1);
    let pixel_w = 2 * scale;
    let mut rows = vec![String::new(); ROWS * scale];

    let bitmaps: Vec<_> = text.chars().filter_map(bitmap).collect();
    for (i, map) in bitmaps.iter().enumerate() {
        for (r, line) in map.iter().enumerate() {
            let mut expanded = String::new();
            for px in line.chars() {
                let fill = if px == '#' { glyph } else { ' ' };
                expanded.extend(std::iter::repeat(fill).take(pixel_w));
            }
            if i + 1 < bitmaps.len() {
                expanded.extend(std::iter::repeat(' ').take(pixel_w));
            }
            for row in rows.iter_mut().skip(r * scale).take(scale) {
                row.push_str(&expanded);
            }
        }
    }
    rows
}

/// Width in columns of `text` rendered at `scale`.
pub fn big_width(text: &str, scale: usize) -> usize {
    let scale = scale.max(1);
    let pixels: usize = text
        .chars()
        .filter_map(bitmap)
        .map(|map| map[0].chars().count())
        .sum();
    let chars = text.chars().filter_map(bitmap).count();
    (pixels + chars.saturating_sub(1)) * 2 * scale
}
