//! Configuration constants.
//!
//! Host markers, launch prefixes, round-details domains and config endpoint
//! defaults. Reference tables (currencies, catalog, parameter names) live in
//! [`crate::reference`] instead because they can be overridden at runtime.

/// Primary production domain for launch URLs.
pub const PROD_DOMAIN: &str = "spribegaming.com";

/// Redirector domain that fronts production launches.
pub const REDIRECTOR_DOMAIN: &str = "spribelaunch.com";

/// Numeric-suffixed production mirrors, e.g. `spribegaming12.click`.
pub const CLICK_MIRROR_PATTERN: &str = r"spribegaming\d+\.click";

/// Prefix every production launch URL must start with.
pub const PROD_LAUNCH_PREFIX: &str = "https://launch.spribegaming.com/";

/// Scheme and subdomain shared by all production-family launch hosts.
pub const PROD_LAUNCH_SCHEME_AND_SUBDOMAIN: &str = "https://launch.";

/// Host marker for the stage environment.
pub const STAGE_DOMAIN_MARKER: &str = "staging.spribe.dev";

/// Host marker for round-details pages. Checked before any launch marker.
pub const ROUND_DETAILS_MARKER: &str = "round-details";

/// Allow-listed round-details hosts, keyed by region label.
pub const ROUND_DETAILS_DOMAINS: &[(&str, &str)] = &[
    ("EU", "round-details-eu.spribegaming.com"),
    ("AF", "round-details-af.spribegaming.com"),
    ("APAC", "round-details-apac.spribegaming.com"),
    ("SA", "round-details-sa.spribegaming.com"),
    ("HR", "round-details-hr.spribegaming.com"),
    ("Stage", "round-details.staging.spribe.dev"),
];

/// Host fragments that hint at an intended round-details region.
///
/// Used to build a "did you mean" suggestion when a host is close to, but not
/// on, the allow-list. Order matters: `apac` must win over `-af`/`-sa` style
/// fragments that could appear inside longer labels.
pub const ROUND_DETAILS_REGION_HINTS: &[(&str, &str)] = &[
    ("apac", "APAC"),
    ("-eu", "EU"),
    ("-af", "AF"),
    ("-sa", "SA"),
    ("-hr", "HR"),
    ("staging", "Stage"),
];

/// Query parameters that must be present on every round-details URL.
pub const ROUND_DETAILS_MANDATORY_PARAMS: &[&str] =
    &["game", "provider", "operator", "user", "round_id"];

/// Partner-integration game id parameters, in lookup priority order.
pub const PARTNER_GAME_ID_PARAMS: &[&str] = &["gameid", "nogsgameid", "ogsgameid", "gameName"];
pub const PARTNER_OPERATOR_PARAM: &str = "operatorid";
pub const PARTNER_SESSION_PARAM: &str = "sessionid";
pub const PARTNER_MODE_PARAM: &str = "mode";
pub const PARTNER_DEMO_MODE: &str = "demo";

pub const CURRENCY_PARAM: &str = "currency";
pub const JURISDICTION_PARAM: &str = "jurisdiction";

/// Default base URL of the production config endpoints.
pub const DEFAULT_PROD_CONFIG_BASE: &str = "https://config.spribegaming.com";

/// Default base URL of the stage config endpoints.
pub const DEFAULT_STAGE_CONFIG_BASE: &str = "https://config.staging.spribe.dev";

/// Query parameter carrying the cache-busting timestamp on config probes.
pub const CACHE_BUST_PARAM: &str = "t";

/// Default per-request timeout for config and dataset fetches, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default User-Agent string for outbound requests.
pub const DEFAULT_USER_AGENT: &str = concat!("launch_inspector/", env!("CARGO_PKG_VERSION"));

/// Placeholder used in certification sheets for "no value".
pub const EMPTY_CELL_PLACEHOLDER: &str = "-";

/// Certificate that permits every loaded game.
pub const UNIVERSAL_CERTIFICATE: &str = "Curacao";
