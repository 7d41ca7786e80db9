use serde::{Deserialize, Serialize};

use crate::core::PulseError;

/// A supported market.
///
/// Each market maps to one upstream news source and one local session
/// calendar used by the cache TTL policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Market {
    /// Korean market; news via the authenticated keyword-search provider.
    Kr,
    /// US market; news via the public RSS feed provider.
    Us,
}

impl Market {
    /// The market tag used in responses ("KR" / "US").
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Market::Kr => "KR",
            Market::Us => "US",
        }
    }

    /// Prefix applied to cache keys so the two markets never collide.
    pub(crate) const fn cache_prefix(self) -> &'static str {
        match self {
            Market::Kr => "",
            Market::Us => "us_",
        }
    }

    /// The market's local timezone.
    #[must_use]
    pub const fn timezone(self) -> chrono_tz::Tz {
        match self {
            Market::Kr => chrono_tz::Asia::Seoul,
            Market::Us => chrono_tz::America::New_York,
        }
    }
}

impl std::str::FromStr for Market {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "KR" => Ok(Market::Kr),
            "US" => Ok(Market::Us),
            other => Err(PulseError::Data(format!("unknown market: {other}"))),
        }
    }
}

impl std::fmt::Display for Market {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
