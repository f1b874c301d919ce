//! Region inference from infrastructure host names.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Coarse deployment region of a config endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum Region {
    #[strum(serialize = "EU")]
    #[serde(rename = "EU")]
    Eu,
    #[strum(serialize = "AF")]
    #[serde(rename = "AF")]
    Af,
    #[strum(serialize = "APAC")]
    #[serde(rename = "APAC")]
    Apac,
    #[strum(serialize = "SA")]
    #[serde(rename = "SA")]
    Sa,
    #[strum(serialize = "HR")]
    #[serde(rename = "HR")]
    Hr,
    Stage,
    /// A host that matches no known naming fragment
    Custom,
    /// No host could be extracted
    #[strum(serialize = "UNKNOWN")]
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

/// Ordered; the first fragment contained in the host wins.
const REGION_HINTS: &[(&str, Region)] = &[
    ("eu-central-1", Region::Eu),
    ("af-south-1", Region::Af),
    ("apac", Region::Apac),
    ("ap-east-1", Region::Apac),
    ("ap-southeast-1", Region::Apac),
    ("sa-east-1", Region::Sa),
    ("app-hr1", Region::Hr),
    ("staging", Region::Stage),
    ("dev-test", Region::Stage),
    ("spribe.dev", Region::Stage),
];

/// Infers the region of `host`.
pub fn infer_region(host: Option<&str>) -> Region {
    let Some(host) = host.map(str::trim).filter(|h| !h.is_empty()) else {
        return Region::Unknown;
    };
    let host = host.to_lowercase();
    REGION_HINTS
        .iter()
        .find(|(fragment, _)| host.contains(fragment))
        .map_or(Region::Custom, |(_, region)| *region)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_fragments() {
        let cases = [
            ("ws-eu-central-1.spribegaming.com", Region::Eu),
            ("AF-SOUTH-1.aviator.example", Region::Af),
            ("apac-2.spribegaming.com", Region::Apac),
            ("game.ap-southeast-1.aws", Region::Apac),
            ("sa-east-1.spribegaming.com", Region::Sa),
            ("app-hr1.spribegaming.com", Region::Hr),
            ("aviator.staging.spribe.dev", Region::Stage),
            ("dev-test-03.internal", Region::Stage),
            ("config.spribe.dev", Region::Stage),
            ("ws.SPRIBE.DEV", Region::Stage),
        ];
        for (host, region) in cases {
            assert_eq!(infer_region(Some(host)), region, "{host}");
        }
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(infer_region(Some("eu-central-1.staging.spribe.dev")), Region::Eu);
    }

    #[test]
    fn test_custom_and_unknown() {
        assert_eq!(infer_region(Some("games.operator.com")), Region::Custom);
        assert_eq!(infer_region(None), Region::Unknown);
        assert_eq!(infer_region(Some("  ")), Region::Unknown);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(Region::Apac.to_string(), "APAC");
        assert_eq!(Region::Stage.to_string(), "Stage");
        assert_eq!(Region::Custom.to_string(), "Custom");
        assert_eq!(Region::Unknown.to_string(), "UNKNOWN");
    }
}
