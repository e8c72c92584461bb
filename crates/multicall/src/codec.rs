//! Encoding and decoding of the relay's `tryAggregate` function.
//!
//! The relay is called with `requireSuccess = false` so that a reverting
//! sub-call is reported as an unsuccessful result instead of reverting the
//! whole batch.

use {
    crate::{Call, Error, Outcome, Result},
    alloy::{
        dyn_abi::{DynSolValue, FunctionExt as _, JsonAbiExt as _},
        json_abi::{Function, JsonAbi},
        primitives::Bytes,
    },
};

/// ABI of the Multicall2 contract deployed on the networks in
/// [`crate::registry`].
pub const MULTICALL2_ABI: &str = include_str!("../abi/Multicall2.json");

const FUNCTION: &str = "tryAggregate";
const SIGNATURE: &str = "tryAggregate(bool,(address,bytes)[])";
const RETURNS: &str = "(bool,bytes)[]";

/// Codec for the relay's batched read function.
#[derive(Clone, Debug)]
pub struct RelayCodec {
    function: Function,
}

impl RelayCodec {
    /// Codec for the bundled Multicall2 interface.
    pub fn multicall2() -> Result<Self> {
        Self::from_json_abi(MULTICALL2_ABI)
    }

    /// Builds a codec from a JSON ABI. The ABI needs to contain
    /// `tryAggregate(bool,(address,bytes)[])` returning `(bool,bytes)[]`.
    pub fn from_json_abi(json: &str) -> Result<Self> {
        let abi: JsonAbi = serde_json::from_str(json)
            .map_err(|err| Error::Configuration(format!("invalid relay ABI: {err}")))?;
        let function = abi
            .function(FUNCTION)
            .into_iter()
            .flatten()
            .find(|function| function.signature() == SIGNATURE)
            .ok_or_else(|| {
                Error::Configuration(format!("relay ABI does not contain {SIGNATURE}"))
            })?;
        if function.outputs.len() != 1 || function.outputs[0].selector_type() != RETURNS {
            return Err(Error::Configuration(format!(
                "relay function {SIGNATURE} must return {RETURNS}"
            )));
        }

        Ok(Self {
            function: function.clone(),
        })
    }

    /// Encodes the call data for one relay invocation covering `calls`.
    pub fn encode<T>(&self, calls: &[Call<T>]) -> Result<Bytes> {
        let calls = calls
            .iter()
            .map(|call| {
                DynSolValue::Tuple(vec![
                    DynSolValue::Address(call.target),
                    DynSolValue::Bytes(call.call_data.to_vec()),
                ])
            })
            .collect();
        let data = self
            .function
            .abi_encode_input(&[DynSolValue::Bool(false), DynSolValue::Array(calls)])
            .map_err(Error::Encoding)?;

        Ok(data.into())
    }

    /// Decodes the relay's return data into one [`Outcome`] per call, in the
    /// order the calls were encoded.
    ///
    /// The return data of the individual calls is not inspected.
    pub fn decode(&self, return_data: &[u8]) -> Result<Vec<Outcome>> {
        let mut values = self
            .function
            .abi_decode_output(return_data)
            .map_err(|err| Error::Decoding(err.to_string()))?;
        let results = match values.pop() {
            Some(DynSolValue::Array(results)) if values.is_empty() => results,
            other => {
                return Err(Error::Decoding(format!(
                    "expected a single result array but got {other:?}"
                )));
            }
        };

        results.into_iter().map(decode_result).collect()
    }
}

fn decode_result(value: DynSolValue) -> Result<Outcome> {
    let DynSolValue::Tuple(fields) = value else {
        return Err(Error::Decoding(format!("expected a result tuple but got {value:?}")));
    };
    match fields.as_slice() {
        [DynSolValue::Bool(success), DynSolValue::Bytes(data)] => Ok(Outcome {
            success: *success,
            return_data: Bytes::copy_from_slice(data),
        }),
        _ => Err(Error::Decoding(format!(
            "expected a (bool,bytes) result but got {fields:?}"
        ))),
    }
}
