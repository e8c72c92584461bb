//! Typed bindings for the relay and for contracts commonly read through it.

alloy::sol! {
    /// Multicall2 relay. [`crate::RelayCodec`] speaks the same `tryAggregate`
    /// wire format without being tied to this binding.
    #[derive(Debug, PartialEq, Eq)]
    interface Multicall2 {
        struct Call {
            address target;
            bytes callData;
        }

        struct Result {
            bool success;
            bytes returnData;
        }

        function tryAggregate(bool requireSuccess, Call[] calls) returns (Result[] returnData);
    }

    /// ERC-20 metadata and balance reads.
    #[derive(Debug, PartialEq, Eq)]
    interface IERC20 {
        function name() external view returns (string);
        function symbol() external view returns (string);
        function decimals() external view returns (uint8);
        function totalSupply() external view returns (uint256);
        function balanceOf(address owner) external view returns (uint256);
    }
}
