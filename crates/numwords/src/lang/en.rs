//! English number words (American and British variants)

/// Words for 0..=19
const ONES: [&str; 20] = [
  "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
  "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

/// Words for the tens column, 20..=90 (indices 0 and 1 unused)
const TENS: [&str; 10] = [
  "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Short-scale group names; index k names the 1000^(k+1) group.
/// Quintillion is enough to cover all of `i64`.
const SCALES: [&str; 6] =
  ["thousand", "million", "billion", "trillion", "quadrillion", "quintillion"];

/// American English: no "and" between hundreds and the remainder.
///
/// Supports the full non-negative `i64` range; negatives are unsupported
/// and yield the empty string.
#[must_use]
pub fn american(number: i64) -> String {
  integer_to_words(number, false)
}

/// British English: "and" joins hundreds to the remainder
/// ("one hundred and one") and a trailing sub-hundred group to the higher
/// groups ("one thousand and one").
#[must_use]
pub fn british(number: i64) -> String {
  integer_to_words(number, true)
}

fn integer_to_words(number: i64, use_and: bool) -> String {
  if number < 0 {
    return String::new();
  }
  if number == 0 {
    return ONES[0].to_string();
  }

  // Base-1000 groups, least significant first.
  let mut groups: Vec<usize> = Vec::new();
  let mut rest = number;
  while rest > 0 {
    groups.push((rest % 1000) as usize);
    rest /= 1000;
  }

  let mut parts: Vec<String> = Vec::new();
  for idx in (0..groups.len()).rev() {
    let group = groups[idx];
    if group == 0 {
      continue;
    }
    let words = triple(group, use_and);
    if idx == 0 {
      parts.push(words);
    } else {
      parts.push(format!("{words} {}", SCALES[idx - 1]));
    }
  }

  // British usage joins a final group below one hundred with "and".
  if use_and && parts.len() > 1 && groups[0] > 0 && groups[0] < 100 {
    if let Some(last) = parts.pop() {
      let joined = parts.join(" ");
      return format!("{joined} and {last}");
    }
  }

  parts.join(" ")
}

/// Words for 1..=999
fn triple(n: usize, use_and: bool) -> String {
  let hundreds = n / 100;
  let rest = n % 100;

  let rest_words = if rest == 0 {
    String::new()
  } else if rest < 20 {
    ONES[rest].to_string()
  } else {
    let tens = TENS[rest / 10];
    let ones = rest % 10;
    if ones == 0 { tens.to_string() } else { format!("{tens}-{}", ONES[ones]) }
  };

  match (hundreds, rest) {
    (0, _) => rest_words,
    (h, 0) => format!("{} hundred", ONES[h]),
    (h, _) if use_and => format!("{} hundred and {rest_words}", ONES[h]),
    (h, _) => format!("{} hundred {rest_words}", ONES[h]),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn zero() {
    assert_eq!(american(0), "zero");
  }

  #[test]
  fn single_digits_and_teens() {
    assert_eq!(american(5), "five");
    assert_eq!(american(13), "thirteen");
    assert_eq!(american(19), "nineteen");
  }

  #[test]
  fn tens_are_hyphenated() {
    assert_eq!(american(20), "twenty");
    assert_eq!(american(42), "forty-two");
    assert_eq!(american(99), "ninety-nine");
  }

  #[test]
  fn hundreds_american() {
    assert_eq!(american(100), "one hundred");
    assert_eq!(american(101), "one hundred one");
    assert_eq!(american(999), "nine hundred ninety-nine");
  }

  #[test]
  fn hundreds_british_use_and() {
    assert_eq!(british(101), "one hundred and one");
    assert_eq!(british(342), "three hundred and forty-two");
    assert_eq!(british(100), "one hundred");
  }

  #[test]
  fn thousands() {
    assert_eq!(american(1_000), "one thousand");
    assert_eq!(american(1_001), "one thousand one");
    assert_eq!(american(12_345), "twelve thousand three hundred forty-five");
  }

  #[test]
  fn british_trailing_and() {
    assert_eq!(british(1_001), "one thousand and one");
    assert_eq!(british(1_101), "one thousand one hundred and one");
    assert_eq!(british(2_020), "two thousand and twenty");
  }

  #[test]
  fn millions_and_beyond() {
    assert_eq!(american(1_000_000), "one million");
    assert_eq!(
      american(1_234_567),
      "one million two hundred thirty-four thousand five hundred sixty-seven"
    );
    assert_eq!(american(1_000_000_000), "one billion");
    assert_eq!(american(1_000_000_000_000), "one trillion");
  }

  #[test]
  fn zero_groups_are_skipped() {
    assert_eq!(american(1_000_001), "one million one");
    assert_eq!(american(2_000_000_005), "two billion five");
  }

  #[test]
  fn i64_max_is_supported() {
    // 9_223_372_036_854_775_807
    assert_eq!(
      american(i64::MAX),
      "nine quintillion two hundred twenty-three quadrillion three hundred seventy-two trillion \
       thirty-six billion eight hundred fifty-four million seven hundred seventy-five thousand \
       eight hundred seven"
    );
  }

  #[test]
  fn negatives_are_unsupported() {
    assert_eq!(american(-1), "");
    assert_eq!(british(-42), "");
    assert_eq!(american(i64::MIN), "");
  }
}
