use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meteorological season attached to every daily aggregate row.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Winter, Season::Spring, Season::Summer, Season::Fall];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Winter => "Winter",
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
        }
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Season {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "winter" => Ok(Season::Winter),
            "spring" => Ok(Season::Spring),
            "summer" => Ok(Season::Summer),
            "fall" | "autumn" => Ok(Season::Fall),
            other => Err(anyhow!("invalid season '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Season;

    #[test]
    fn test_parse_season() {
        assert_eq!("Summer".parse::<Season>().unwrap(), Season::Summer);
        assert_eq!(" winter ".parse::<Season>().unwrap(), Season::Winter);
        assert_eq!("Autumn".parse::<Season>().unwrap(), Season::Fall);
        assert!("Monsoon".parse::<Season>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for season in Season::ALL {
            assert_eq!(season.to_string().parse::<Season>().unwrap(), season);
        }
    }
}
