//! Alias builder: validate alias specs and assemble grouped query strings.
//!
//! Query string segment order is fixed:
//!   query . instance_group . network . deployment . domain
//! with instance_group, network, and deployment canonicalized, and query
//! and domain used raw.

use crate::canon::canonicalize;
use crate::map::AliasMap;
use crate::spec::{AliasSpec, TargetSpec};
use thiserror::Error;

/// A required field was absent from an alias or target.
///
/// Carries the field name so callers can match on the exact key instead
/// of parsing a message. The display form mirrors the lookup failure the
/// deployment tooling surfaces for the same input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("key not found: {0:?}")]
pub struct MissingFieldError(pub &'static str);

fn require<'a>(
    field: &'a Option<String>,
    name: &'static str,
) -> Result<&'a str, MissingFieldError> {
    field.as_deref().ok_or(MissingFieldError(name))
}

/// Build the alias-domain -> query-strings mapping.
///
/// Fail-fast: the first missing required field aborts the whole call with
/// no partial mapping. Validation order is `domain` then `targets` per
/// alias, and `query`, `instance_group`, `deployment`, `network` per
/// target.
///
/// A target's own `domain` wins over `default_domain` only when present
/// and non-empty; an empty string is treated the same as absent.
pub fn build(aliases: &[AliasSpec], default_domain: &str) -> Result<AliasMap, MissingFieldError> {
    let mut out = AliasMap::new();

    for alias in aliases {
        let domain = require(&alias.domain, "domain")?;
        let targets = alias.targets.as_deref().ok_or(MissingFieldError("targets"))?;

        for target in targets {
            out.push(domain, build_query(target, default_domain)?);
        }
    }

    Ok(out)
}

fn build_query(target: &TargetSpec, default_domain: &str) -> Result<String, MissingFieldError> {
    let query = require(&target.query, "query")?;
    let instance_group = require(&target.instance_group, "instance_group")?;
    let deployment = require(&target.deployment, "deployment")?;
    let network = require(&target.network, "network")?;

    let resolved_domain = match target.domain.as_deref() {
        Some(d) if !d.is_empty() => d,
        _ => default_domain,
    };

    Ok([
        query,
        &canonicalize(instance_group),
        &canonicalize(network),
        &canonicalize(deployment),
        resolved_domain,
    ]
    .join("."))
}
