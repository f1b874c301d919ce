//! Launch URL validation.
//!
//! Each scheme is an independent function with the same shape,
//! `fn(&str, &ReferenceData) -> ValidationOutcome`. [`validator_for`] is the
//! dispatch table; [`validate_detected`] runs detection first.
//!
//! Validators never fail: every finding is returned in the
//! [`ValidationOutcome`], and components are withheld only when the URL could
//! not be parsed or failed the production prefix gate.
//!
//! # Example
//!
//! ```
//! use launch_inspector::reference::ReferenceData;
//! use launch_inspector::validate::{validate_url, Scheme};
//!
//! let reference = ReferenceData::builtin();
//! let outcome = validate_url(
//!     Scheme::ProdLaunch,
//!     "https://launch.spribegaming.com/aviator?user=u1&token=t1&currency=USD&operator=op1",
//!     &reference,
//! );
//! assert!(outcome.is_valid());
//! assert_eq!(outcome.components.unwrap().game_id, "aviator");
//! ```

mod common;
mod launch;
mod outcome;
mod partner;
mod round_details;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

use crate::detect::detect_scheme;
use crate::reference::ReferenceData;

pub use launch::{validate_generic_launch, validate_prod_launch, validate_stage_launch};
pub use outcome::{ParsedUrlComponents, Payload, ValidationOutcome};
pub use partner::validate_partner_integration;
pub use round_details::validate_round_details;

/// Launch URL dialects.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, ValueEnum,
)]
pub enum Scheme {
    #[serde(rename = "roundDetailsValidation")]
    #[strum(serialize = "roundDetailsValidation")]
    #[value(name = "round-details")]
    RoundDetails,

    #[serde(rename = "stageLaunchURLValidation")]
    #[strum(serialize = "stageLaunchURLValidation")]
    #[value(name = "stage")]
    StageLaunch,

    #[serde(rename = "prodLaunchURLValidation")]
    #[strum(serialize = "prodLaunchURLValidation")]
    #[value(name = "prod")]
    ProdLaunch,

    /// Never produced by detection
    #[serde(rename = "partnerIntegrationValidation")]
    #[strum(serialize = "partnerIntegrationValidation")]
    #[value(name = "partner")]
    PartnerIntegration,

    /// Never produced by detection
    #[serde(rename = "genericLaunchValidation")]
    #[strum(serialize = "genericLaunchValidation")]
    #[value(name = "generic")]
    GenericLaunch,
}

/// Signature shared by every scheme validator.
pub type Validator = fn(&str, &ReferenceData) -> ValidationOutcome;

/// Maps a scheme to its validator.
pub fn validator_for(scheme: Scheme) -> Validator {
    match scheme {
        Scheme::RoundDetails => validate_round_details,
        Scheme::StageLaunch => validate_stage_launch,
        Scheme::ProdLaunch => validate_prod_launch,
        Scheme::PartnerIntegration => validate_partner_integration,
        Scheme::GenericLaunch => validate_generic_launch,
    }
}

/// Validates `raw` against `scheme`.
pub fn validate_url(scheme: Scheme, raw: &str, reference: &ReferenceData) -> ValidationOutcome {
    validator_for(scheme)(raw, reference)
}

/// Detects the scheme of `raw` and validates against it.
///
/// Returns `None` if no scheme was detected.
pub fn validate_detected(raw: &str, reference: &ReferenceData) -> Option<(Scheme, ValidationOutcome)> {
    let scheme = detect_scheme(raw)?;
    log::debug!("Detected {scheme} for {raw}");
    Some((scheme, validate_url(scheme, raw, reference)))
}
