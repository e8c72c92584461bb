use alloy::{
    primitives::Bytes,
    sol_types::{Revert, SolError},
};

/// Result of a single call as reported by the relay.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Outcome {
    /// Whether the call returned without reverting.
    pub success: bool,

    /// The raw return data, or the revert data if the call failed.
    pub return_data: Bytes,
}

impl Outcome {
    /// Decodes the `Error(string)` reason of a reverted call.
    ///
    /// Returns `None` for successful calls and for reverts without a
    /// standard reason string (custom errors, empty reverts, ...).
    pub fn revert_reason(&self) -> Option<String> {
        if self.success {
            return None;
        }
        Revert::abi_decode(&self.return_data)
            .ok()
            .map(|revert| revert.reason)
    }

    /// Turns the outcome into a `Result` of its return data.
    pub fn into_result(self) -> Result<Bytes, Bytes> {
        match self.success {
            true => Ok(self.return_data),
            false => Err(self.return_data),
        }
    }

    /// Attaches correlation data to the outcome.
    pub fn correlate<T>(self, correlation: T) -> Response<T> {
        Response {
            success: self.success,
            return_data: self.return_data,
            correlation,
        }
    }
}

/// An [`Outcome`] together with the correlation data of the call it belongs
/// to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Response<T> {
    pub success: bool,
    pub return_data: Bytes,
    pub correlation: T,
}

impl<T> Response<T> {
    /// Splits the response back into the relay outcome and the correlation
    /// data.
    pub fn into_parts(self) -> (Outcome, T) {
        (
            Outcome {
                success: self.success,
                return_data: self.return_data,
            },
            self.correlation,
        )
    }
}

#[cfg(test)]
mod tests {
    use {super::*, hex_literal::hex};

    #[test]
    fn decodes_revert_reason() {
        let outcome = Outcome {
            success: false,
            return_data: Bytes::from(hex!(
                "08c379a0
                 0000000000000000000000000000000000000000000000000000000000000020
                 0000000000000000000000000000000000000000000000000000000000000004
                 6e6f706500000000000000000000000000000000000000000000000000000000"
            )),
        };
        assert_eq!(outcome.revert_reason().as_deref(), Some("nope"));
    }

    #[test]
    fn no_revert_reason() {
        let empty_revert = Outcome {
            success: false,
            return_data: Bytes::new(),
        };
        assert_eq!(empty_revert.revert_reason(), None);

        let custom_error = Outcome {
            success: false,
            return_data: Bytes::from(hex!("deadbeef")),
        };
        assert_eq!(custom_error.revert_reason(), None);

        let success = Outcome {
            success: true,
            return_data: Bytes::from(hex!("08c379a0")),
        };
        assert_eq!(success.revert_reason(), None);
    }

    #[test]
    fn splits_response() {
        let outcome = Outcome {
            success: true,
            return_data: Bytes::from(hex!("0102")),
        };
        let response = outcome.clone().correlate("id");
        assert_eq!(response.correlation, "id");
        assert_eq!(response.into_parts(), (outcome.clone(), "id"));
        assert_eq!(outcome.into_result(), Ok(Bytes::from(hex!("0102"))));
    }
}
