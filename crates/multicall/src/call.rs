//! A single logical call submitted to the relay.

use alloy::{
    primitives::{Address, Bytes},
    sol_types::SolCall,
};

/// One read-only contract invocation.
///
/// `correlation` is opaque to the batching logic. It is carried along and
/// handed back with the call's result so callers can tell results apart
/// without relying on positions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Call<T = ()> {
    /// The contract to call.
    pub target: Address,

    /// ABI encoded call data, forwarded to the relay byte for byte.
    pub call_data: Bytes,

    /// Caller supplied identity or payload.
    pub correlation: T,
}

impl<T> Call<T> {
    pub fn new(target: Address, call_data: impl Into<Bytes>, correlation: T) -> Self {
        Self {
            target,
            call_data: call_data.into(),
            correlation,
        }
    }

    /// Builds a call from a typed contract binding.
    pub fn from_sol<C: SolCall>(target: Address, call: &C, correlation: T) -> Self {
        Self::new(target, call.abi_encode(), correlation)
    }
}
