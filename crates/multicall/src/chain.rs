//! Access to the chain the relay contract lives on.

use {
    alloy::{
        eips::BlockId,
        primitives::{Address, Bytes},
        providers::{DynProvider, Provider},
        rpc::types::{TransactionInput, TransactionRequest},
        transports::TransportError,
    },
    async_trait::async_trait,
};

/// The node operations needed to run batched reads.
#[cfg_attr(any(test, feature = "test-util"), mockall::automock)]
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Executes an `eth_call` of `data` against `target`, at `block` or at
    /// the latest block if unset, and returns the raw return data.
    async fn call(
        &self,
        target: Address,
        data: Bytes,
        block: Option<BlockId>,
    ) -> Result<Bytes, TransportError>;

    /// Returns the chain id of the connected network.
    async fn chain_id(&self) -> Result<u64, TransportError>;
}

#[async_trait]
impl ChainReader for DynProvider {
    async fn call(
        &self,
        target: Address,
        data: Bytes,
        block: Option<BlockId>,
    ) -> Result<Bytes, TransportError> {
        let request = TransactionRequest::default()
            .to(target)
            .input(TransactionInput::new(data));
        let call = Provider::call(self, request);
        match block {
            Some(block) => call.block(block).await,
            None => call.await,
        }
    }

    async fn chain_id(&self) -> Result<u64, TransportError> {
        self.get_chain_id().await
    }
}
