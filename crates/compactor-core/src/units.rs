/// Unit formatting -- human-readable byte counts and magnitudes, and the
/// inverse parse back to numbers.
///
/// All internal sizes are `u64` bytes. Floating point is only used at the
/// display-formatting boundary. The active [`UnitSystem`] is always passed in
/// explicitly; nothing here holds formatting state.

/// Magnitude suffixes, largest last. Index 0 means "no suffix".
const SUFFIXES: [&str; 9] = ["", "K", "M", "G", "T", "P", "E", "Z", "Y"];

/// Selects the divisor and suffix style used for byte counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitSystem {
    /// Powers of 1000, suffixed `KB`, `MB`, ...
    Decimal,
    /// Powers of 1024, suffixed `KiB`, `MiB`, ...
    #[default]
    Binary,
}

impl UnitSystem {
    /// Map the backend's `decimal` config flag onto a unit system.
    pub fn from_decimal(decimal: bool) -> Self {
        if decimal {
            Self::Decimal
        } else {
            Self::Binary
        }
    }

    pub fn is_decimal(self) -> bool {
        self == Self::Decimal
    }

    fn base(self) -> f64 {
        match self {
            Self::Decimal => 1000.0,
            Self::Binary => 1024.0,
        }
    }

    fn byte_suffix(self) -> &'static str {
        match self {
            Self::Decimal => "B",
            Self::Binary => "iB",
        }
    }
}

/// Format `n` with thousand separators and exactly `digits` fraction digits.
///
/// `format_number(1234.5, 2)` gives `"1,234.50"`; `format_number(7.0, 0)`
/// gives `"7"`.
pub fn format_number(n: f64, digits: usize) -> String {
    if !n.is_finite() {
        return n.to_string();
    }

    let fixed = format!("{:.*}", digits, n.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (fixed.as_str(), None),
    };

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
    // "-0.00" is not a useful thing to show.
    if n < 0.0 && fixed.bytes().any(|b| (b'1'..=b'9').contains(&b)) {
        out.push('-');
    }
    push_grouped(int_part, &mut out);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format a byte count using the largest unit it reaches.
///
/// Counts below one unit (1000 or 1024 bytes) are returned as a bare integer.
pub fn bytes_to_human(bytes: u64, system: UnitSystem) -> String {
    match magnitude(bytes as f64, system.base()) {
        Some((scaled, idx)) => format!(
            "{} {}{}",
            format_number(scaled, 2),
            SUFFIXES[idx],
            system.byte_suffix()
        ),
        None => bytes.to_string(),
    }
}

/// Format a non-byte magnitude (e.g. a file count) in powers of 1000.
pub fn number_to_human(n: u64) -> String {
    match magnitude(n as f64, 1000.0) {
        Some((scaled, idx)) => format!("{} {}", format_number(scaled, 2), SUFFIXES[idx]),
        None => n.to_string(),
    }
}

/// How far above `u64::MAX` formatted text may land and still parse.
const TOP_OF_RANGE_SLACK: f64 = 1.001;

/// Parse text such as `"1.50 MiB"`, `"12 KB"` or `"512"` back into bytes.
///
/// An `i` after the unit letter selects powers of 1024, otherwise powers of
/// 1000. Returns `None` for empty, negative or malformed input.
pub fn human_to_bytes(text: &str) -> Option<u64> {
    let parsed = parse_human(text)?;
    if parsed.value < 0.0 {
        return None;
    }
    let base = if parsed.binary { 1024.0 } else { 1000.0 };
    let bytes = (parsed.value * f64::powi(base, parsed.power)).round();
    if !bytes.is_finite() || bytes > u64::MAX as f64 * TOP_OF_RANGE_SLACK {
        return None;
    }
    // Text for values near 2^64 rounds up past u64::MAX.
    Some(bytes.min(u64::MAX as f64) as u64)
}

/// Parse text such as `"12.35 K"` back into a plain number (powers of 1000).
pub fn human_to_number(text: &str) -> Option<f64> {
    let parsed = parse_human(text)?;
    let value = parsed.value * f64::powi(1000.0, parsed.power);
    value.is_finite().then_some(value)
}

/// Find the largest suffix index whose divisor `value` reaches.
///
/// Never yields index 0, so callers fall back to the bare number.
fn magnitude(value: f64, base: f64) -> Option<(f64, usize)> {
    (1..SUFFIXES.len()).rev().find_map(|idx| {
        let divisor = f64::powi(base, idx as i32);
        (value >= divisor).then(|| (value / divisor, idx))
    })
}

fn push_grouped(digits: &str, out: &mut String) {
    let len = digits.len();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
}

struct ParsedHuman {
    value: f64,
    power: i32,
    binary: bool,
}

fn parse_human(text: &str) -> Option<ParsedHuman> {
    let text = text.trim();

    let literal_end = text
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || c == ',' || (i == 0 && c == '-')))
        .map_or(text.len(), |(i, _)| i);
    let literal: String = text[..literal_end].chars().filter(|&c| c != ',').collect();
    let value: f64 = literal.parse().ok()?;

    let mut rest = text[literal_end..].trim_start().chars();
    let mut next = rest.next();

    let mut power = 0;
    if let Some(idx) = next.and_then(unit_index) {
        power = idx as i32;
        next = rest.next();
    }

    let mut binary = false;
    if power > 0 && next == Some('i') {
        binary = true;
        next = rest.next();
    }

    if matches!(next, Some('b' | 'B')) {
        next = rest.next();
    }

    if next.is_some() {
        return None;
    }

    Some(ParsedHuman {
        value,
        power,
        binary,
    })
}

fn unit_index(c: char) -> Option<usize> {
    let upper = c.to_ascii_uppercase();
    SUFFIXES
        .iter()
        .position(|s| s.starts_with(upper))
}
