use std::fmt;

/// Printing of a card, taken from the parenthetical in the product name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CardType {
    #[default]
    Normal,
    Hyperspace,
    Foil,
    HyperspaceFoil,
    Showcase,
    Prestige,
    PrestigeFoil,
    Serialized,
    /// Parenthetical we don't recognise, kept verbatim
    Other(String),
}

impl CardType {
    /// Known printings in gameplay order
    pub const ALL: [CardType; 8] = [
        CardType::Normal,
        CardType::Hyperspace,
        CardType::Foil,
        CardType::HyperspaceFoil,
        CardType::Showcase,
        CardType::Prestige,
        CardType::PrestigeFoil,
        CardType::Serialized,
    ];

    /// Parse the text inside a product-name parenthetical
    pub fn from_marker(s: &str) -> Self {
        match s.trim() {
            "" | "Normal" => CardType::Normal,
            "Hyperspace" => CardType::Hyperspace,
            "Foil" => CardType::Foil,
            "Hyperspace Foil" => CardType::HyperspaceFoil,
            "Showcase" => CardType::Showcase,
            "Prestige" => CardType::Prestige,
            "Prestige Foil" => CardType::PrestigeFoil,
            "Serialized" => CardType::Serialized,
            other => CardType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CardType::Normal => "Normal",
            CardType::Hyperspace => "Hyperspace",
            CardType::Foil => "Foil",
            CardType::HyperspaceFoil => "Hyperspace Foil",
            CardType::Showcase => "Showcase",
            CardType::Prestige => "Prestige",
            CardType::PrestigeFoil => "Prestige Foil",
            CardType::Serialized => "Serialized",
            CardType::Other(s) => s,
        }
    }

    /// Position in the sort order; unknown printings go last
    pub fn rank(&self) -> u8 {
        match self {
            CardType::Normal => 0,
            CardType::Hyperspace => 1,
            CardType::Foil => 2,
            CardType::HyperspaceFoil => 3,
            CardType::Showcase => 4,
            CardType::Prestige => 5,
            CardType::PrestigeFoil => 6,
            CardType::Serialized => 7,
            CardType::Other(_) => 8,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
