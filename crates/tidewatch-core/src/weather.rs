//! Weather and region enumerations.
//!
//! Both enums are fixed vocabularies shared with the report producer; the
//! wire keys are the `SCREAMING_SNAKE_CASE` names used by the server.

use serde::{Deserialize, Serialize};

/// Weather conditions a region can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Weather {
    /// Clear skies
    Clear,
    /// Fair skies
    Fair,
    /// Overcast
    Overcast,
    /// Fog
    Fog,
    /// Wind
    Wind,
    /// Gales
    Gales,
    /// Rain
    Rain,
    /// Showers
    Showers,
    /// Thunder
    Thunder,
    /// Thunderstorms
    Thunderstorms,
    /// Dust storms
    DustStorms,
    /// Sandstorms
    Sandstorms,
    /// Hot spells
    HotSpells,
    /// Heat wave
    HeatWave,
    /// Snow
    Snow,
    /// Blizzards
    Blizzards,
    /// Aurora
    Aurora,
    /// Gloom
    Gloom,
}

impl Weather {
    /// Parses a wire key, returning `None` for unknown values.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "CLEAR" => Some(Self::Clear),
            "FAIR" => Some(Self::Fair),
            "OVERCAST" => Some(Self::Overcast),
            "FOG" => Some(Self::Fog),
            "WIND" => Some(Self::Wind),
            "GALES" => Some(Self::Gales),
            "RAIN" => Some(Self::Rain),
            "SHOWERS" => Some(Self::Showers),
            "THUNDER" => Some(Self::Thunder),
            "THUNDERSTORMS" => Some(Self::Thunderstorms),
            "DUST_STORMS" => Some(Self::DustStorms),
            "SANDSTORMS" => Some(Self::Sandstorms),
            "HOT_SPELLS" => Some(Self::HotSpells),
            "HEAT_WAVE" => Some(Self::HeatWave),
            "SNOW" => Some(Self::Snow),
            "BLIZZARDS" => Some(Self::Blizzards),
            "AURORA" => Some(Self::Aurora),
            "GLOOM" => Some(Self::Gloom),
            _ => None,
        }
    }

    /// Display name for UI layers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Fair => "Fair",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Wind => "Wind",
            Self::Gales => "Gales",
            Self::Rain => "Rain",
            Self::Showers => "Showers",
            Self::Thunder => "Thunder",
            Self::Thunderstorms => "Thunderstorms",
            Self::DustStorms => "Dust Storms",
            Self::Sandstorms => "Sandstorms",
            Self::HotSpells => "Hot Spells",
            Self::HeatWave => "Heat Wave",
            Self::Snow => "Snow",
            Self::Blizzards => "Blizzards",
            Self::Aurora => "Aurora",
            Self::Gloom => "Gloom",
        }
    }

    /// Whether this weather involves precipitation.
    #[must_use]
    pub fn is_precipitation(self) -> bool {
        matches!(
            self,
            Self::Rain | Self::Showers | Self::Thunderstorms | Self::Snow | Self::Blizzards
        )
    }
}

/// Game-world areas with independent weather cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Region {
    /// Limsa Lominsa Lower Decks
    LimsaLominsaLowerDecks,
    /// Limsa Lominsa Upper Decks (shares weather with the lower decks)
    LimsaLominsaUpperDecks,
    /// Middle La Noscea
    MiddleLaNoscea,
    /// Lower La Noscea
    LowerLaNoscea,
    /// Eastern La Noscea
    EasternLaNoscea,
    /// Western La Noscea
    WesternLaNoscea,
    /// Upper La Noscea
    UpperLaNoscea,
    /// Outer La Noscea
    OuterLaNoscea,
    /// Mist
    Mist,
    /// New Gridania
    NewGridania,
    /// Old Gridania (shares weather with New Gridania)
    OldGridania,
    /// Central Shroud
    CentralShroud,
    /// East Shroud
    EastShroud,
    /// South Shroud
    SouthShroud,
    /// North Shroud
    NorthShroud,
    /// The Lavender Beds
    LavenderBeds,
    /// Western Thanalan
    WesternThanalan,
    /// Central Thanalan
    CentralThanalan,
    /// Eastern Thanalan
    EasternThanalan,
    /// Southern Thanalan
    SouthernThanalan,
    /// Northern Thanalan
    NorthernThanalan,
    /// The Goblet
    TheGoblet,
    /// Coerthas Central Highlands
    CoerthasCentralHighlands,
    /// Mor Dhona
    MorDhona,
}

impl Region {
    /// Parses a wire key, returning `None` for unknown values.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "LIMSA_LOMINSA_LOWER_DECKS" => Some(Self::LimsaLominsaLowerDecks),
            "LIMSA_LOMINSA_UPPER_DECKS" => Some(Self::LimsaLominsaUpperDecks),
            "MIDDLE_LA_NOSCEA" => Some(Self::MiddleLaNoscea),
            "LOWER_LA_NOSCEA" => Some(Self::LowerLaNoscea),
            "EASTERN_LA_NOSCEA" => Some(Self::EasternLaNoscea),
            "WESTERN_LA_NOSCEA" => Some(Self::WesternLaNoscea),
            "UPPER_LA_NOSCEA" => Some(Self::UpperLaNoscea),
            "OUTER_LA_NOSCEA" => Some(Self::OuterLaNoscea),
            "MIST" => Some(Self::Mist),
            "NEW_GRIDANIA" => Some(Self::NewGridania),
            "OLD_GRIDANIA" => Some(Self::OldGridania),
            "CENTRAL_SHROUD" => Some(Self::CentralShroud),
            "EAST_SHROUD" => Some(Self::EastShroud),
            "SOUTH_SHROUD" => Some(Self::SouthShroud),
            "NORTH_SHROUD" => Some(Self::NorthShroud),
            "LAVENDER_BEDS" => Some(Self::LavenderBeds),
            "WESTERN_THANALAN" => Some(Self::WesternThanalan),
            "CENTRAL_THANALAN" => Some(Self::CentralThanalan),
            "EASTERN_THANALAN" => Some(Self::EasternThanalan),
            "SOUTHERN_THANALAN" => Some(Self::SouthernThanalan),
            "NORTHERN_THANALAN" => Some(Self::NorthernThanalan),
            "THE_GOBLET" => Some(Self::TheGoblet),
            "COERTHAS_CENTRAL_HIGHLANDS" => Some(Self::CoerthasCentralHighlands),
            "MOR_DHONA" => Some(Self::MorDhona),
            _ => None,
        }
    }

    /// Display name for UI layers.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::LimsaLominsaLowerDecks => "Limsa Lominsa Lower Decks",
            Self::LimsaLominsaUpperDecks => "Limsa Lominsa Upper Decks",
            Self::MiddleLaNoscea => "Middle La Noscea",
            Self::LowerLaNoscea => "Lower La Noscea",
            Self::EasternLaNoscea => "Eastern La Noscea",
            Self::WesternLaNoscea => "Western La Noscea",
            Self::UpperLaNoscea => "Upper La Noscea",
            Self::OuterLaNoscea => "Outer La Noscea",
            Self::Mist => "Mist",
            Self::NewGridania => "New Gridania",
            Self::OldGridania => "Old Gridania",
            Self::CentralShroud => "Central Shroud",
            Self::EastShroud => "East Shroud",
            Self::SouthShroud => "South Shroud",
            Self::NorthShroud => "North Shroud",
            Self::LavenderBeds => "The Lavender Beds",
            Self::WesternThanalan => "Western Thanalan",
            Self::CentralThanalan => "Central Thanalan",
            Self::EasternThanalan => "Eastern Thanalan",
            Self::SouthernThanalan => "Southern Thanalan",
            Self::NorthernThanalan => "Northern Thanalan",
            Self::TheGoblet => "The Goblet",
            Self::CoerthasCentralHighlands => "Coerthas Central Highlands",
            Self::MorDhona => "Mor Dhona",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_keys_round_trip() {
        assert_eq!(Weather::from_key("DUST_STORMS"), Some(Weather::DustStorms));
        assert_eq!(Weather::from_key("CLEAR"), Some(Weather::Clear));
        assert_eq!(Weather::from_key("HAIL"), None);
    }

    #[test]
    fn test_region_keys() {
        assert_eq!(Region::from_key("MOR_DHONA"), Some(Region::MorDhona));
        assert_eq!(
            Region::from_key("COERTHAS_CENTRAL_HIGHLANDS"),
            Some(Region::CoerthasCentralHighlands)
        );
        assert_eq!(Region::from_key("WOLVES_DEN_PIER"), None);
    }

    #[test]
    fn test_serde_keys_match_from_key() {
        let json = serde_json::to_string(&Weather::HeatWave).expect("serializes");
        assert_eq!(json, "\"HEAT_WAVE\"");
        let parsed: Weather = serde_json::from_str(&json).expect("parses");
        assert_eq!(parsed, Weather::HeatWave);
    }

    #[test]
    fn test_precipitation() {
        assert!(Weather::Showers.is_precipitation());
        assert!(!Weather::Fog.is_precipitation());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Weather::DustStorms.display_name(), "Dust Storms");
        assert_eq!(
            Region::LimsaLominsaLowerDecks.display_name(),
            "Limsa Lominsa Lower Decks"
        );
    }
}
