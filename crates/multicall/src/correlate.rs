//! Re-attaching relay outcomes to the calls they belong to.
//!
//! The relay returns results in call order and does not echo any call
//! identity, so outcomes are matched to calls purely by position.

use {
    crate::{Call, Error, Outcome, Response, Result},
    itertools::Itertools as _,
    std::{collections::HashMap, fmt::Debug, hash::Hash},
};

/// Pairs every outcome with the correlation data of the call at the same
/// position, preserving input order.
pub fn ordered<T>(calls: Vec<Call<T>>, outcomes: Vec<Outcome>) -> Result<Vec<Response<T>>> {
    ensure_aligned(calls.len(), outcomes.len())?;
    Ok(calls
        .into_iter()
        .zip(outcomes)
        .map(|(call, outcome)| outcome.correlate(call.correlation))
        .collect())
}

/// Maps every call's identifier to the outcome at the same position.
///
/// Identifiers must be unique, check them with [`ensure_unique`] before
/// sending any request. With duplicates the later outcome wins.
pub fn keyed<K>(calls: Vec<Call<K>>, outcomes: Vec<Outcome>) -> Result<HashMap<K, Outcome>>
where
    K: Eq + Hash,
{
    ensure_aligned(calls.len(), outcomes.len())?;
    Ok(calls
        .into_iter()
        .map(|call| call.correlation)
        .zip(outcomes)
        .collect())
}

/// Fails if two calls share the same identifier.
pub fn ensure_unique<K>(calls: &[Call<K>]) -> Result<()>
where
    K: Eq + Hash + Debug,
{
    match calls.iter().map(|call| &call.correlation).duplicates().next() {
        Some(id) => Err(Error::DuplicateIdentifier(format!("{id:?}"))),
        None => Ok(()),
    }
}

fn ensure_aligned(calls: usize, outcomes: usize) -> Result<()> {
    if calls != outcomes {
        return Err(Error::Decoding(format!(
            "got {outcomes} results for {calls} calls"
        )));
    }
    Ok(())
}
