// src/include/lines.rs
// =============================================================================
// Line selection for the `lines` attribute.
//
// A selection looks like `1;3..4;6..-1`:
// - a single number picks one line (1-based)
// - `from..to` picks an inclusive range
// - `-1` as `to` means "through the last line"
//
// Entries are separated by `;` or `,`, and whitespace around numbers is
// ignored so quoted values like "1, 3..4 , 6 .. -1" work too.
//
// Malformed entries never raise. A number that doesn't parse reads as 0, and
// line 0 doesn't exist, so it just selects nothing.
// =============================================================================

/// Splits an attribute value on the data delimiter (`;` or `,`)
///
/// Empty entries are dropped and each entry is trimmed.
pub fn split_data_list(value: &str) -> Vec<&str> {
    value
        .split([';', ','])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

// Parses a selection into ascending, de-duplicated 1-based line numbers
//
// Parameters:
//   spec: the raw `lines` value
//   total_lines: number of lines in the file, used for `-1`
//
// Ranges are clipped to the file, but single numbers are kept as written,
// so the result can still contain 0 or numbers past the end; select_lines
// skips those.
pub fn parse_line_selection(spec: &str, total_lines: usize) -> Vec<i64> {
    let last = total_lines as i64;
    let mut selected = Vec::new();

    for entry in split_data_list(spec) {
        match entry.split_once("..") {
            Some((from, to)) => {
                let from = parse_int_lenient(from);
                let mut to = parse_int_lenient(to);
                if to == -1 {
                    to = last;
                }
                // Clamped to the file so `1..999999999` stays cheap.
                // An inverted range is simply empty.
                selected.extend(from.max(0)..=to.min(last));
            }
            None => selected.push(parse_int_lenient(entry)),
        }
    }

    selected.sort_unstable();
    selected.dedup();
    selected
}

// Picks the selected lines out of the file content
//
// Numbers below 1 or past the end of the file are skipped silently.
pub fn select_lines(lines: &[String], spec: &str) -> Vec<String> {
    parse_line_selection(spec, lines.len())
        .into_iter()
        .filter(|&n| n >= 1)
        .filter_map(|n| lines.get((n - 1) as usize).cloned())
        .collect()
}

// Reads an integer the forgiving way: optional sign, then leading digits
//
// "12" -> 12, " -1 " -> -1, "7abc" -> 7, "abc" -> 0, "" -> 0
fn parse_int_lenient(text: &str) -> i64 {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    // Overflowing values are as meaningless as garbage, so they read as 0 too
    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative {
        -value
    } else {
        value
    }
}
