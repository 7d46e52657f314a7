/// Per-field failure raised by card construction.
///
/// Construction is all-or-nothing: the first failing field aborts the whole
/// card, so at most one of these is produced per construction attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("card name cannot be empty or just whitespace")]
    EmptyName,

    #[error("invalid card name: {0}. Must contain only letters, numbers, spaces, commas, apostrophes and hyphens")]
    InvalidName(String),

    #[error("invalid mana cost: {0}. Must contain only X, W, U, B, R, G and digits 0-9")]
    InvalidManaCost(String),

    #[error("card type cannot be empty or just whitespace")]
    EmptyType,

    #[error("invalid card type: {0}. Must be one of: instant, sorcery, creature, enchantment, land, artifact, planeswalker")]
    UnknownType(String),

    #[error("card color cannot be empty or just whitespace")]
    EmptyColor,

    #[error("invalid card color: {0}. Must be one or more of: white, blue, black, red, green, colorless")]
    UnknownColor(String),

    #[error("creatures must have power/toughness")]
    MissingPowerToughness,

    #[error("invalid power/toughness: {0}. Must have format \"power/toughness\"")]
    InvalidPowerToughness(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("cannot add {requested} card(s) to deck \"{deck}\": holds {current} of at most {max}")]
    CapacityExceeded {
        deck: String,
        current: usize,
        requested: usize,
        max: usize,
    },
}

pub type Result<T> = std::result::Result<T, DeckError>;
