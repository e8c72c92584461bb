//! Batched read-only contract calls through an on-chain Multicall relay.
//!
//! A [`Caller`] takes an arbitrary number of [`Call`]s, splits them into
//! batches, sends one `tryAggregate` `eth_call` per batch to the relay
//! contract and hands back one result per call, in input order or keyed by
//! the caller supplied identifier. Individual calls that revert show up as
//! unsuccessful [`Outcome`]s; they never fail the whole batch.

pub mod call;
pub mod caller;
pub mod chain;
pub mod codec;
pub mod contracts;
pub mod correlate;
pub mod error;
pub mod outcome;
pub mod partition;
pub mod registry;

pub use {
    call::Call,
    caller::Caller,
    chain::ChainReader,
    codec::RelayCodec,
    error::{Error, Result},
    outcome::{Outcome, Response},
};

/// Default number of calls aggregated into a single relay invocation.
pub const DEFAULT_BATCH_SIZE: usize = 100;
