//! Drives batched reads through the relay contract.

use {
    crate::{
        Call,
        ChainReader,
        Error,
        Outcome,
        RelayCodec,
        Response,
        Result,
        correlate,
        partition::partition,
        registry,
    },
    alloy::{eips::BlockId, primitives::Address},
    std::{collections::HashMap, fmt, fmt::Debug, hash::Hash, sync::Arc},
};

/// Executes many read-only calls with as few `eth_call`s as possible by
/// aggregating them through a relay contract.
///
/// Batches are sent one after another. A `Caller` is never mutated after
/// construction so it can be cloned and shared freely.
#[derive(Clone)]
pub struct Caller {
    reader: Arc<dyn ChainReader>,
    relay: Address,
    codec: RelayCodec,
    block: Option<BlockId>,
}

impl Caller {
    /// Creates a caller for the Multicall2 relay deployed at `relay`.
    pub fn new(reader: Arc<dyn ChainReader>, relay: Address) -> Result<Self> {
        Ok(Self {
            reader,
            relay,
            codec: RelayCodec::multicall2()?,
            block: None,
        })
    }

    /// Creates a caller for the relay deployed on the network `reader` is
    /// connected to.
    pub async fn for_network(reader: Arc<dyn ChainReader>) -> Result<Self> {
        let chain_id = reader.chain_id().await?;
        let relay = registry::relay_address(chain_id)?;
        tracing::debug!(chain_id, ?relay, "using known relay deployment");
        Self::new(reader, relay)
    }

    /// Pins all reads to the state at `block` instead of the latest block.
    pub fn with_block(self, block: BlockId) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Uses a custom relay interface.
    pub fn with_codec(self, codec: RelayCodec) -> Self {
        Self { codec, ..self }
    }

    pub fn relay(&self) -> Address {
        self.relay
    }

    pub fn block(&self) -> Option<BlockId> {
        self.block
    }

    /// Executes `calls` in batches of at most `batch_size` and returns one
    /// response per call, in input order, carrying the call's correlation
    /// data.
    ///
    /// Either all calls are answered or an error is returned; a reverting
    /// call is not an error but an unsuccessful response.
    pub async fn execute<T>(
        &self,
        calls: Vec<Call<T>>,
        batch_size: usize,
    ) -> Result<Vec<Response<T>>> {
        let outcomes = self.aggregate(&calls, batch_size).await?;
        correlate::ordered(calls, outcomes)
    }

    /// Like [`Self::execute`] but uses the correlation data of every call as
    /// a unique identifier to look its outcome up by.
    ///
    /// Fails without sending any request if two calls share an identifier.
    pub async fn execute_keyed<K>(
        &self,
        calls: Vec<Call<K>>,
        batch_size: usize,
    ) -> Result<HashMap<K, Outcome>>
    where
        K: Eq + Hash + Debug,
    {
        correlate::ensure_unique(&calls)?;
        let outcomes = self.aggregate(&calls, batch_size).await?;
        correlate::keyed(calls, outcomes)
    }

    /// Executes `calls` in batches of at most `batch_size` and returns the
    /// raw outcomes in input order.
    pub async fn aggregate<T>(
        &self,
        calls: &[Call<T>],
        batch_size: usize,
    ) -> Result<Vec<Outcome>> {
        let batches = partition(calls, batch_size)?;

        let mut outcomes = Vec::with_capacity(calls.len());
        for (batch, calls) in batches.enumerate() {
            let data = self.codec.encode(calls)?;
            tracing::debug!(batch, calls = calls.len(), "executing relay batch");
            tracing::trace!(batch, %data, "relay call data");

            let return_data = self
                .reader
                .call(self.relay, data, self.block)
                .await
                .inspect_err(|err| tracing::warn!(?err, batch, "relay call failed"))?;
            let results = self.codec.decode(&return_data)?;
            if results.len() != calls.len() {
                tracing::warn!(
                    batch,
                    calls = calls.len(),
                    results = results.len(),
                    "relay result count mismatch"
                );
                return Err(Error::Decoding(format!(
                    "relay returned {} results for {} calls",
                    results.len(),
                    calls.len()
                )));
            }
            outcomes.extend(results);
        }

        Ok(outcomes)
    }
}

impl Debug for Caller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caller")
            .field("relay", &self.relay)
            .field("codec", &self.codec)
            .field("block", &self.block)
            .finish_non_exhaustive()
    }
}
