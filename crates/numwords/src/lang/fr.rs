//! French number words
//!
//! Traditional (pre-1990) orthography: hyphens only below one hundred,
//! "et" before un/onze where usage requires it, plural agreement on
//! cent/vingt/million/milliard.

/// Words for 1..=16 (index 0 unused)
const UNITS: [&str; 17] = [
  "", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf", "dix", "onze",
  "douze", "treize", "quatorze", "quinze", "seize",
];

/// Words for the tens column, 20..=60 (indices 0, 1 and 7..=9 unused)
const TENS: [&str; 7] = ["", "", "vingt", "trente", "quarante", "cinquante", "soixante"];

/// Largest value expressible with the milliard scale.
const MAX_SUPPORTED: i64 = 999_999_999_999;

/// French: supports 0..=999_999_999_999; anything else yields the empty
/// string.
#[must_use]
pub fn french(number: i64) -> String {
  if !(0..=MAX_SUPPORTED).contains(&number) {
    return String::new();
  }
  if number == 0 {
    return "zéro".to_string();
  }

  let milliards = (number / 1_000_000_000) as usize;
  let millions = (number / 1_000_000 % 1_000) as usize;
  let thousands = (number / 1_000 % 1_000) as usize;
  let units = (number % 1_000) as usize;

  let mut parts: Vec<String> = Vec::new();

  if milliards > 0 {
    let noun = if milliards == 1 { "milliard" } else { "milliards" };
    parts.push(format!("{} {noun}", triple(milliards, true)));
  }
  if millions > 0 {
    let noun = if millions == 1 { "million" } else { "millions" };
    parts.push(format!("{} {noun}", triple(millions, true)));
  }
  if thousands == 1 {
    // "mille", never "un mille"
    parts.push("mille".to_string());
  } else if thousands > 1 {
    // cent/vingt drop their plural s in front of mille
    parts.push(format!("{} mille", triple(thousands, false)));
  }
  if units > 0 {
    parts.push(triple(units, true));
  }

  parts.join(" ")
}

/// Words for 1..=999.
///
/// `terminal` is false when another numeral follows (the mille group),
/// which suppresses the plural s of "cents" and "quatre-vingts".
fn triple(n: usize, terminal: bool) -> String {
  let hundreds = n / 100;
  let rest = n % 100;

  let hundred_words = match hundreds {
    0 => String::new(),
    1 => "cent".to_string(),
    h if rest == 0 && terminal => format!("{} cents", UNITS[h]),
    h => format!("{} cent", UNITS[h]),
  };

  if rest == 0 {
    return hundred_words;
  }

  let rest_words = under_hundred(rest, terminal);
  if hundred_words.is_empty() { rest_words } else { format!("{hundred_words} {rest_words}") }
}

/// Words for 1..=99
fn under_hundred(n: usize, terminal: bool) -> String {
  match n {
    1..=16 => UNITS[n].to_string(),
    17..=19 => format!("dix-{}", UNITS[n - 10]),
    71 => "soixante et onze".to_string(),
    70..=79 => format!("soixante-{}", under_hundred(n - 60, terminal)),
    80 if terminal => "quatre-vingts".to_string(),
    80 => "quatre-vingt".to_string(),
    81..=99 => format!("quatre-vingt-{}", under_hundred(n - 80, terminal)),
    _ => {
      // 20..=69
      let tens = TENS[n / 10];
      match n % 10 {
        0 => tens.to_string(),
        1 => format!("{tens} et un"),
        ones => format!("{tens}-{}", UNITS[ones]),
      }
    }
  }
}
