use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// The colored mana symbols recognized in a mana cost (X counts as colored).
const COLORED_SYMBOLS: [char; 6] = ['X', 'W', 'U', 'B', 'R', 'G'];

// ---------------------------------------------------------------------------
// CardFields — raw construction input
// ---------------------------------------------------------------------------

/// Raw, unvalidated card fields as supplied by the caller.
///
/// Every field is free-form text; [`Card::new`] normalizes and validates them
/// all at once. `power_toughness` is only meaningful for creatures and may be
/// left at its default for everything else.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardFields {
    pub name: String,
    pub mana_cost: String,
    #[serde(rename = "type")]
    pub card_type: String,
    pub colors: String,
    pub power_toughness: String,
}

// ---------------------------------------------------------------------------
// CardType
// ---------------------------------------------------------------------------

/// The seven card types a deck may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Instant,
    Sorcery,
    Creature,
    Enchantment,
    Land,
    Artifact,
    Planeswalker,
}

impl CardType {
    pub const ALL: [CardType; 7] = [
        CardType::Instant,
        CardType::Sorcery,
        CardType::Creature,
        CardType::Enchantment,
        CardType::Land,
        CardType::Artifact,
        CardType::Planeswalker,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CardType::Instant => "instant",
            CardType::Sorcery => "sorcery",
            CardType::Creature => "creature",
            CardType::Enchantment => "enchantment",
            CardType::Land => "land",
            CardType::Artifact => "artifact",
            CardType::Planeswalker => "planeswalker",
        }
    }

    /// True for types that stay on the battlefield once played, as opposed to
    /// the one-shot instant and sorcery spells.
    pub fn is_permanent(self) -> bool {
        !matches!(self, CardType::Instant | CardType::Sorcery)
    }
}

impl FromStr for CardType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "instant" => Ok(CardType::Instant),
            "sorcery" => Ok(CardType::Sorcery),
            "creature" => Ok(CardType::Creature),
            "enchantment" => Ok(CardType::Enchantment),
            "land" => Ok(CardType::Land),
            "artifact" => Ok(CardType::Artifact),
            "planeswalker" => Ok(CardType::Planeswalker),
            other => Err(ValidationError::UnknownType(other.to_string())),
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Color
// ---------------------------------------------------------------------------

/// The six colors a card may carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
    Colorless,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Blue,
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Colorless,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Blue => "blue",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Colorless => "colorless",
        }
    }
}

impl FromStr for Color {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "white" => Ok(Color::White),
            "blue" => Ok(Color::Blue),
            "black" => Ok(Color::Black),
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "colorless" => Ok(Color::Colorless),
            other => Err(ValidationError::UnknownColor(other.to_string())),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// A validated Magic: The Gathering card.
///
/// Constructed exclusively through [`Card::new`]; an invalid `Card` cannot
/// exist. Deserialization is routed through the same validation via
/// [`CardFields`], so JSON input in field shape is checked too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "CardFields")]
pub struct Card {
    name: String,
    mana_cost: String,
    #[serde(rename = "type")]
    card_type: CardType,
    colors: Vec<Color>,
    power_toughness: String,
}

impl Card {
    /// Validate and normalize the raw fields into a card.
    ///
    /// Fields are checked in order: name, mana cost, type, colors, then
    /// power/toughness (which depends on the already-validated type). The
    /// first failure aborts construction.
    pub fn new(fields: &CardFields) -> Result<Self, ValidationError> {
        let name = validate_name(&fields.name)?;
        let mana_cost = validate_mana_cost(&fields.mana_cost)?;
        let card_type = validate_type(&fields.card_type)?;
        let colors = validate_colors(&fields.colors)?;
        let power_toughness = validate_power_toughness(&fields.power_toughness, card_type)?;

        Ok(Self {
            name,
            mana_cost,
            card_type,
            colors,
            power_toughness,
        })
    }

    /// Normalized name: trimmed and lowercased.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized mana cost: trimmed and uppercased. Empty for lands and
    /// other zero-cost cards.
    pub fn mana_cost(&self) -> &str {
        &self.mana_cost
    }

    pub fn card_type(&self) -> CardType {
        self.card_type
    }

    /// Colors in input order, duplicates preserved. Never empty.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// `"power/toughness"` for creatures, empty string for everything else.
    pub fn power_toughness(&self) -> &str {
        &self.power_toughness
    }

    /// Converted mana value: one per colored symbol plus the generic numeric
    /// component of the cost. `"10GG"` is 10 generic + 2 colored = 12.
    pub fn mana_value(&self) -> u32 {
        let colored = self
            .mana_cost
            .chars()
            .filter(|c| COLORED_SYMBOLS.contains(c))
            .count() as u32;

        // Standard notation has at most one numeric run (the generic cost).
        let generic: u32 = self
            .mana_cost
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect::<String>()
            .parse()
            .unwrap_or(0);

        colored + generic
    }
}

impl TryFrom<CardFields> for Card {
    type Error = ValidationError;

    fn try_from(fields: CardFields) -> Result<Self, Self::Error> {
        Card::new(&fields)
    }
}

// ---------------------------------------------------------------------------
// Field validation
// ---------------------------------------------------------------------------

fn validate_name(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    let name = trimmed.to_lowercase();
    let valid = name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, ',' | '\'' | '-'));
    if !valid {
        return Err(ValidationError::InvalidName(name));
    }

    Ok(name)
}

fn validate_mana_cost(raw: &str) -> Result<String, ValidationError> {
    // Empty is valid: lands and some artifacts have no mana cost.
    let mana_cost = raw.trim().to_uppercase();
    let valid = mana_cost
        .chars()
        .all(|c| c.is_ascii_digit() || COLORED_SYMBOLS.contains(&c));
    if !valid {
        return Err(ValidationError::InvalidManaCost(mana_cost));
    }

    Ok(mana_cost)
}

fn validate_type(raw: &str) -> Result<CardType, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyType);
    }

    trimmed.to_lowercase().parse()
}

fn validate_colors(raw: &str) -> Result<Vec<Color>, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::EmptyColor);
    }

    raw.to_lowercase().split_whitespace().map(Color::from_str).collect()
}

fn validate_power_toughness(
    raw: &str,
    card_type: CardType,
) -> Result<String, ValidationError> {
    // Only creatures carry stats; any input for other types is ignored.
    if card_type != CardType::Creature {
        return Ok(String::new());
    }

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingPowerToughness);
    }

    let valid = match trimmed.split_once('/') {
        Some((power, toughness)) => is_stat(power) && is_stat(toughness),
        None => false,
    };
    if !valid {
        return Err(ValidationError::InvalidPowerToughness(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}

/// One side of a power/toughness pair: digits, `*`, `X` and `-` only,
/// covering special stats like `*/*` or `2/X`.
fn is_stat(side: &str) -> bool {
    !side.is_empty()
        && side
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '*' | 'X' | '-'))
}
