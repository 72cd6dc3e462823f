use super::alphabet::Alphabet;
use crate::error::{MorphologyError, Result};

use serde::{Serialize, Serializer};
use std::fmt;

/// Longest accepted pattern name, in characters.
pub const MAX_PATTERN_NAME_LEN: usize = 50;

pub const WEAK_LETTERS: [char; 2] = ['و', 'ي'];
pub const HAMZA_LETTERS: [char; 6] = ['أ', 'إ', 'آ', 'ء', 'ؤ', 'ئ'];

pub fn is_weak(c: char) -> bool {
    WEAK_LETTERS.contains(&c)
}

pub fn is_hamza(c: char) -> bool {
    HAMZA_LETTERS.contains(&c)
}

/// Three consonants of the configured alphabet. Ordered by code point.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Root {
    text: String,
    letters: [char; 3],
}

impl Root {
    /// Normalizes `raw` and checks it is exactly three consonants of `alphabet`.
    pub fn parse(raw: &str, alphabet: Alphabet) -> Result<Self> {
        let text = alphabet.normalize(raw);
        if text.is_empty() {
            return Err(MorphologyError::invalid_root(raw, "root is empty"));
        }

        let chars: Vec<char> = text.chars().collect();
        if chars.len() != 3 {
            return Err(MorphologyError::invalid_root(
                &text,
                format!("expected exactly 3 consonants, got {}", chars.len()),
            ));
        }
        if let Some(bad) = chars.iter().find(|c| !alphabet.is_consonant(**c)) {
            return Err(MorphologyError::invalid_root(
                &text,
                format!("'{}' is not a consonant", bad),
            ));
        }

        Ok(Self {
            letters: [chars[0], chars[1], chars[2]],
            text,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn letters(&self) -> [char; 3] {
        self.letters
    }

    /// Letter at 1-based slot `k`.
    pub fn letter(&self, slot: usize) -> Option<char> {
        slot.checked_sub(1).and_then(|i| self.letters.get(i).copied())
    }

    pub fn root_type(&self) -> RootType {
        RootType::classify(self.letters)
    }

    pub fn contains_hamza(&self) -> bool {
        self.letters.iter().any(|c| is_hamza(*c))
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl Serialize for Root {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

/// Morphological class of a root. A label only; generation ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootType {
    Salim,
    Mahmouz,
    Moudaaf,
    Mithal,
    Ajwaf,
    Naqis,
    Lafeef,
}

impl RootType {
    /// Doubling wins over weakness, and hamza only counts when no letter is weak.
    pub fn classify(letters: [char; 3]) -> Self {
        let [l1, l2, l3] = letters;
        if l2 == l3 {
            return RootType::Moudaaf;
        }

        let weak = letters.iter().filter(|c| is_weak(**c)).count();
        if weak >= 2 {
            RootType::Lafeef
        } else if is_weak(l1) {
            RootType::Mithal
        } else if is_weak(l2) {
            RootType::Ajwaf
        } else if is_weak(l3) {
            RootType::Naqis
        } else if letters.iter().any(|c| is_hamza(*c)) {
            RootType::Mahmouz
        } else {
            RootType::Salim
        }
    }

    pub fn arabic_name(&self) -> &'static str {
        match self {
            RootType::Salim => "سالم",
            RootType::Mahmouz => "مهموز",
            RootType::Moudaaf => "مضعف",
            RootType::Mithal => "مثال",
            RootType::Ajwaf => "أجوف",
            RootType::Naqis => "ناقص",
            RootType::Lafeef => "لفيف",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RootType::Salim => "no weak letter, regular conjugation",
            RootType::Mahmouz => "contains a hamza (أ, إ, ؤ, ئ, ء)",
            RootType::Moudaaf => "second and third letters are identical",
            RootType::Mithal => "starts with و or ي",
            RootType::Ajwaf => "weak middle letter",
            RootType::Naqis => "ends with و or ي",
            RootType::Lafeef => "two or more weak letters",
        }
    }
}

/// Human-readable note on how `root` behaves under substitution.
pub fn explain(root: &Root) -> String {
    let [l1, l2, l3] = root.letters();
    let hamza = if root.contains_hamza() {
        " Contains a hamza whose spelling may vary."
    } else {
        ""
    };
    let body = match root.root_type() {
        RootType::Salim => "Sound root: direct substitution.".to_string(),
        RootType::Mahmouz => return "Hamzated root: the hamza seat may change with the pattern.".to_string(),
        RootType::Moudaaf => format!("Doubled root: '{}' = '{}', usually written with shadda.", l2, l3),
        RootType::Mithal => format!("Assimilated root: initial '{}' drops in some forms.", l1),
        RootType::Ajwaf => format!("Hollow root: middle '{}' may become ا or ء.", l2),
        RootType::Naqis => format!("Defective root: final '{}' may become ى or drop.", l3),
        RootType::Lafeef => "Doubly weak root: several transformations combine.".to_string(),
    };
    format!("{}{}", body, hamza)
}

/// One symbol of a pattern rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleSymbol {
    /// Root letter slot, 1-based.
    Slot(usize),
    Fixed(char),
}

/// A named template with markers `1`, `2`, `3` exactly once each, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    pub name: String,
    pub rule: String,
    #[serde(skip)]
    symbols: Vec<RuleSymbol>,
}

impl Pattern {
    pub fn new(name: &str, rule: &str) -> Result<Self> {
        let name = validate_pattern_name(name)?;
        let rule = rule.trim();
        let symbols = parse_rule(&name, rule)?;
        Ok(Self {
            name,
            rule: rule.to_string(),
            symbols,
        })
    }

    pub fn symbols(&self) -> &[RuleSymbol] {
        &self.symbols
    }

    /// Length of every word this pattern produces.
    pub fn width(&self) -> usize {
        self.symbols.len()
    }

    /// The fixed (non-slot) symbols, in rule order.
    pub fn affixes(&self) -> Vec<char> {
        self.symbols
            .iter()
            .filter_map(|s| match s {
                RuleSymbol::Fixed(c) => Some(*c),
                RuleSymbol::Slot(_) => None,
            })
            .collect()
    }

    /// Reads the three slot letters out of `base` if every fixed symbol lines up.
    pub fn extract(&self, base: &[char]) -> Option<[char; 3]> {
        if base.len() != self.symbols.len() {
            return None;
        }
        let mut letters = ['\0'; 3];
        for (symbol, c) in self.symbols.iter().zip(base) {
            match symbol {
                RuleSymbol::Fixed(f) if f != c => return None,
                RuleSymbol::Fixed(_) => {}
                RuleSymbol::Slot(k) => letters[k - 1] = *c,
            }
        }
        Some(letters)
    }
}

pub(crate) fn validate_pattern_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(MorphologyError::invalid_pattern(raw, "name is empty"));
    }
    if name.chars().count() > MAX_PATTERN_NAME_LEN {
        return Err(MorphologyError::invalid_pattern(
            name,
            format!("name longer than {} characters", MAX_PATTERN_NAME_LEN),
        ));
    }
    if name.contains('|') {
        return Err(MorphologyError::invalid_pattern(name, "name may not contain '|'"));
    }
    Ok(name.to_string())
}

fn parse_rule(name: &str, rule: &str) -> Result<Vec<RuleSymbol>> {
    if rule.is_empty() {
        return Err(MorphologyError::invalid_pattern(name, "rule is empty"));
    }

    let symbols: Vec<RuleSymbol> = rule
        .chars()
        .map(|c| match c {
            '1' => RuleSymbol::Slot(1),
            '2' => RuleSymbol::Slot(2),
            '3' => RuleSymbol::Slot(3),
            other => RuleSymbol::Fixed(other),
        })
        .collect();

    let slots: Vec<usize> = symbols
        .iter()
        .filter_map(|s| match s {
            RuleSymbol::Slot(k) => Some(*k),
            RuleSymbol::Fixed(_) => None,
        })
        .collect();

    if slots != [1usize, 2, 3] {
        let reason = if slots.len() != 3 || !(1..=3).all(|k| slots.contains(&k)) {
            format!("rule '{}' must contain markers 1, 2 and 3 exactly once", rule)
        } else {
            format!("markers in rule '{}' must appear in the order 1, 2, 3", rule)
        };
        return Err(MorphologyError::invalid_pattern(name, reason));
    }

    Ok(symbols)
}
