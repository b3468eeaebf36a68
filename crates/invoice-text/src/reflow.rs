//! Address reflow
//!
//! Turns a free-form postal address into exactly three display lines for the
//! fixed header layout. Inputs may already contain `<br>` tags or newlines;
//! those are flattened before the address is re-split.

use crate::LINE_BREAK;

/// Reflow an address into three display lines joined by [`LINE_BREAK`].
///
/// The output always splits into exactly three pieces on the marker, any of
/// which may be empty. See [`reflow_lines`] for the line-level form.
///
/// ```
/// use invoice_text::reflow;
///
/// assert_eq!(reflow("Plot 12, MIDC, Pune"), "Plot 12<br>MIDC<br>Pune");
/// assert_eq!(reflow(""), "<br><br>");
/// ```
pub fn reflow(address: &str) -> String {
    reflow_lines(address).join(LINE_BREAK)
}

/// Reflow an address into exactly three display lines.
///
/// Splitting strategies, tried in order:
/// 1. comma, semicolon and pipe delimiters
/// 2. runs of two or more spaces
/// 3. word-count balancing for a single undelimited part
///
/// More than three parts are packed greedily onto the first two lines and the
/// remainder joined onto the third.
pub fn reflow_lines(address: &str) -> [String; 3] {
    let normalized = normalize(address);
    if normalized.is_empty() {
        return empty_lines();
    }

    let mut parts = split_delimiters(&normalized);
    if parts.len() == 1 {
        parts = split_wide_gaps(&parts[0]);
    }
    if parts.len() == 1 {
        parts = split_words(&parts[0]);
    }
    distribute(parts)
}

fn empty_lines() -> [String; 3] {
    [String::new(), String::new(), String::new()]
}

/// Flatten existing breaks to spaces and collapse whitespace runs.
///
/// `<br>` tags are recognized in any ASCII casing.
fn normalize(address: &str) -> String {
    let mut flat = String::with_capacity(address.len());
    let mut rest = address;
    while !rest.is_empty() {
        if rest
            .get(..4)
            .map_or(false, |tag| tag.eq_ignore_ascii_case("<br>"))
        {
            flat.push(' ');
            rest = &rest[4..];
            continue;
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            flat.push(if ch == '\n' || ch == '\r' { ' ' } else { ch });
        }
        rest = chars.as_str();
    }

    let mut out = String::with_capacity(flat.len());
    for word in flat.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Split on comma, semicolon and pipe, dropping empty parts.
fn split_delimiters(text: &str) -> Vec<String> {
    text.split([',', ';', '|'])
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

/// Split a single part on runs of two or more spaces.
///
/// Single spaces stay inside their part. When no wide gap exists the part is
/// returned unchanged.
fn split_wide_gaps(part: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut gap = 0usize;
    for ch in part.chars() {
        if ch.is_whitespace() {
            gap += 1;
            continue;
        }
        if gap >= 2 {
            if !current.is_empty() {
                parts.push(current.clone());
                current.clear();
            }
        } else if gap == 1 && !current.is_empty() {
            current.push(' ');
        }
        gap = 0;
        current.push(ch);
    }
    if !current.is_empty() {
        parts.push(current);
    }
    if parts.is_empty() {
        vec![part.to_string()]
    } else {
        parts
    }
}

/// Split a single undelimited part by word count.
///
/// Up to three words stay on one line, four to six words split in half, and
/// anything longer splits in thirds with the remainder on the last line.
fn split_words(part: &str) -> Vec<String> {
    let words: Vec<&str> = part.split_ascii_whitespace().collect();
    match words.len() {
        0..=3 => vec![part.to_string()],
        n @ 4..=6 => {
            let mid = n / 2;
            vec![words[..mid].join(" "), words[mid..].join(" ")]
        }
        n => {
            let third = n / 3;
            vec![
                words[..third].join(" "),
                words[third..2 * third].join(" "),
                words[2 * third..].join(" "),
            ]
        }
    }
}

/// Place up to three parts one per line; hand larger counts to the packer.
fn distribute(parts: Vec<String>) -> [String; 3] {
    if parts.len() <= 3 {
        let mut lines = empty_lines();
        for (slot, part) in lines.iter_mut().zip(parts) {
            *slot = part;
        }
        return lines;
    }
    pack_lines(parts)
}

/// Greedy packer for more than three parts.
///
/// Lines one and two accept parts until they reach a floating target of
/// remaining parts over remaining lines; everything left joins onto line
/// three. The target is recomputed after each completed line, so earlier
/// lines take the larger share of uneven counts.
fn pack_lines(parts: Vec<String>) -> [String; 3] {
    let total = parts.len();
    let mut lines: Vec<String> = Vec::with_capacity(3);
    let mut current: Vec<String> = Vec::new();
    let mut placed = 0usize;
    let mut target = total as f64 / 3.0;

    for part in parts {
        current.push(part);
        if lines.len() < 2 && current.len() as f64 >= target {
            placed += current.len();
            lines.push(current.join(", "));
            current.clear();
            target = (total - placed) as f64 / (3 - lines.len()) as f64;
        }
    }
    if !current.is_empty() {
        lines.push(current.join(", "));
    }

    let mut out = empty_lines();
    for (slot, line) in out.iter_mut().zip(lines) {
        *slot = line;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input() {
        assert_eq!(reflow(""), "<br><br>");
        assert_eq!(reflow("   "), "<br><br>");
        assert_eq!(reflow(",,,"), "<br><br>");
    }

    #[test]
    fn test_three_delimited_parts() {
        assert_eq!(
            reflow_lines("Plot 12, MIDC, Pune"),
            ["Plot 12".to_string(), "MIDC".to_string(), "Pune".to_string()]
        );
    }

    #[test]
    fn test_mixed_delimiters() {
        assert_eq!(
            reflow("12-A Tower; Marine Drive | Mumbai"),
            "12-A Tower<br>Marine Drive<br>Mumbai"
        );
    }

    #[test]
    fn test_empty_parts_dropped() {
        assert_eq!(reflow("Unit 4,  Phase II,, Pune"), "Unit 4<br>Phase II<br>Pune");
    }

    #[test]
    fn test_two_parts_leave_third_line_empty() {
        assert_eq!(reflow("Willow House, Kochi"), "Willow House<br>Kochi<br>");
    }

    #[test]
    fn test_single_part_stays_on_first_line() {
        assert_eq!(reflow("Fort Kochi"), "Fort Kochi<br><br>");
        assert_eq!(reflow("One Two Three"), "One Two Three<br><br>");
    }

    #[test]
    fn test_four_parts_pack_two_one_one() {
        assert_eq!(reflow("A, B, C, D"), "A, B<br>C<br>D");
    }

    #[test]
    fn test_five_parts_pack_two_two_one() {
        assert_eq!(reflow("A, B, C, D, E"), "A, B<br>C, D<br>E");
    }

    #[test]
    fn test_six_parts_pack_evenly() {
        assert_eq!(reflow("A, B, C, D, E, F"), "A, B<br>C, D<br>E, F");
    }

    #[test]
    fn test_seven_parts_front_loaded() {
        assert_eq!(reflow("A, B, C, D, E, F, G"), "A, B, C<br>D, E<br>F, G");
    }

    #[test]
    fn test_nine_parts_pack_evenly() {
        assert_eq!(
            reflow("a, b, c, d, e, f, g, h, i"),
            "a, b, c<br>d, e, f<br>g, h, i"
        );
    }

    #[test]
    fn test_four_words_split_in_half() {
        assert_eq!(reflow("Alpha Beta Gamma Delta"), "Alpha Beta<br>Gamma Delta<br>");
    }

    #[test]
    fn test_five_words_split_in_half() {
        assert_eq!(reflow("one two three four five"), "one two<br>three four five<br>");
    }

    #[test]
    fn test_seven_words_split_in_thirds() {
        assert_eq!(
            reflow("Seven word address token example case here"),
            "Seven word<br>address token<br>example case here"
        );
    }

    #[test]
    fn test_newlines_flattened_before_splitting() {
        assert_eq!(reflow("A\nB\r\nC"), "A B C<br><br>");
    }

    #[test]
    fn test_br_tags_flattened_case_insensitively() {
        assert_eq!(reflow("Old Street<br>New Area<BR>City"), "Old Street<br>New Area City<br>");
        assert_eq!(reflow("X<bR>Y"), "X Y<br><br>");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(reflow("Plot   12,   MIDC"), "Plot 12<br>MIDC<br>");
    }

    #[test]
    fn test_always_exactly_three_lines() {
        let inputs = [
            "",
            "word",
            "a, b",
            "a, b, c, d, e, f, g, h",
            "un del imi ted words here going long",
            "trailing, commas,,,",
        ];
        for input in inputs {
            assert_eq!(reflow(input).split(LINE_BREAK).count(), 3, "input: {input:?}");
        }
    }

    #[test]
    fn test_large_part_count_balances() {
        let parts: Vec<String> = (1..=100).map(|n| n.to_string()).collect();
        let address = parts.join(", ");
        let lines = reflow_lines(&address);
        assert_eq!(lines[0].split(", ").count(), 34);
        assert_eq!(lines[1].split(", ").count(), 33);
        assert_eq!(lines[2].split(", ").count(), 33);
    }

    #[test]
    fn test_split_wide_gaps() {
        assert_eq!(split_wide_gaps("Plot 7  Sector 9"), vec!["Plot 7", "Sector 9"]);
        assert_eq!(split_wide_gaps("Plot 7 Sector 9"), vec!["Plot 7 Sector 9"]);
        assert_eq!(split_wide_gaps("A   B   C"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_normalize_trims_and_collapses() {
        assert_eq!(normalize("  a \t b  "), "a b");
        assert_eq!(normalize("a<br>b"), "a b");
    }
}
