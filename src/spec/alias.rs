//! Alias spec as it appears in the rendering input.
//!
//! JSON shape:
//! {
//!   "aliases": [
//!     {
//!       "domain": "credhub.cf.internal",   // grouping key, used raw
//!       "targets": [
//!         {
//!           "query": "*",                  // literal first segment
//!           "instance_group": "diego_cell",
//!           "deployment": "cf",
//!           "network": "default",
//!           "domain": "bosh"               // optional, falls back to the
//!                                          // ambient default domain
//!         }
//!       ]
//!     },
//!     ...
//!   ]
//! }
//!
//! Required fields are modeled as Option so that absence surfaces as a
//! typed MissingFieldError from the builder instead of a deserialize
//! failure; type mismatches are still rejected by serde up front.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AliasesSpec {
    #[serde(default)]
    pub aliases: Vec<AliasSpec>,
}

/// One alias entry. `domain` and `targets` are both required.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AliasSpec {
    #[serde(default)]
    pub domain: Option<String>,

    #[serde(default)]
    pub targets: Option<Vec<TargetSpec>>,
}

/// One routing target contributing a query string to its alias.
///
/// `query`, `instance_group`, `deployment`, and `network` are required;
/// `domain` is optional and defaults to the caller-supplied ambient
/// domain when absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TargetSpec {
    #[serde(default)]
    pub query: Option<String>,

    #[serde(default)]
    pub instance_group: Option<String>,

    #[serde(default)]
    pub deployment: Option<String>,

    #[serde(default)]
    pub network: Option<String>,

    #[serde(default)]
    pub domain: Option<String>,
}
