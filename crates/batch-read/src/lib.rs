pub mod arguments;

use {
    alloy::{
        eips::BlockId,
        primitives::Address,
        providers::{Provider, ProviderBuilder},
        sol_types::SolCall,
    },
    anyhow::{Context, Result},
    multicall::{Call, Caller, ChainReader, Outcome, contracts::IERC20},
    std::sync::Arc,
};

/// Metadata of an ERC-20 token. Fields are `None` when the token does not
/// implement the corresponding getter.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct TokenInfo {
    pub symbol: Option<String>,
    pub decimals: Option<u8>,
}

#[derive(Clone, Copy, Debug)]
enum Field {
    Symbol,
    Decimals,
}

pub async fn run(args: arguments::Arguments) -> Result<()> {
    let provider = ProviderBuilder::new()
        .connect_http(args.node_url.clone())
        .erased();
    let reader: Arc<dyn ChainReader> = Arc::new(provider);

    let caller = match args.relay {
        Some(relay) => Caller::new(reader, relay)?,
        None => Caller::for_network(reader)
            .await
            .context("could not select relay contract")?,
    };
    let caller = match args.block {
        Some(block) => caller.with_block(BlockId::number(block)),
        None => caller,
    };

    let infos = fetch_token_infos(&caller, &args.tokens, args.batch_size).await?;
    for (token, info) in args.tokens.iter().zip(infos) {
        println!(
            "{token}\t{}\t{}",
            info.symbol.as_deref().unwrap_or("-"),
            info.decimals
                .map(|decimals| decimals.to_string())
                .unwrap_or_else(|| "-".to_owned()),
        );
    }

    Ok(())
}

/// Reads symbol and decimals of all `tokens` and returns them in the same
/// order.
pub async fn fetch_token_infos(
    caller: &Caller,
    tokens: &[Address],
    batch_size: usize,
) -> Result<Vec<TokenInfo>> {
    let calls = tokens
        .iter()
        .enumerate()
        .flat_map(|(i, token)| {
            [
                Call::from_sol(*token, &IERC20::symbolCall {}, (i, Field::Symbol)),
                Call::from_sol(*token, &IERC20::decimalsCall {}, (i, Field::Decimals)),
            ]
        })
        .collect();

    let responses = caller
        .execute(calls, batch_size)
        .await
        .context("failed to read token metadata")?;

    let mut infos = vec![TokenInfo::default(); tokens.len()];
    for response in responses {
        let (outcome, (i, field)) = response.into_parts();
        let info = &mut infos[i];
        match field {
            Field::Symbol => {
                info.symbol = decode::<IERC20::symbolCall>(tokens[i], field, outcome);
            }
            Field::Decimals => {
                info.decimals = decode::<IERC20::decimalsCall>(tokens[i], field, outcome);
            }
        }
    }

    Ok(infos)
}

fn decode<C: SolCall>(token: Address, field: Field, outcome: Outcome) -> Option<C::Return> {
    let reason = outcome.revert_reason();
    let return_data = outcome
        .into_result()
        .inspect_err(|_| tracing::debug!(?token, ?field, ?reason, "token call reverted"))
        .ok()?;
    C::abi_decode_returns(&return_data)
        .inspect_err(|err| tracing::debug!(?token, ?field, ?err, "invalid token call result"))
        .ok()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        alloy::{
            primitives::{Bytes, U256},
            sol_types::SolValue,
        },
        multicall::{chain::MockChainReader, contracts::Multicall2},
    };

    const COW: Address = Address::new([1; 20]);
    const NOT_A_TOKEN: Address = Address::new([2; 20]);

    /// Relay where only `COW` implements the ERC-20 getters.
    fn relay(data: &Bytes) -> Bytes {
        let batch = Multicall2::tryAggregateCall::abi_decode(data).unwrap();
        batch
            .calls
            .into_iter()
            .map(|call| {
                let selector = call.callData.get(..4).unwrap_or_default();
                let return_data: Option<Bytes> = if call.target != COW {
                    None
                } else if selector == IERC20::symbolCall::SELECTOR {
                    Some("COW".to_string().abi_encode().into())
                } else if selector == IERC20::decimalsCall::SELECTOR {
                    Some(U256::from(18u8).abi_encode().into())
                } else {
                    None
                };
                Multicall2::Result {
                    success: return_data.is_some(),
                    returnData: return_data.unwrap_or_default(),
                }
            })
            .collect::<Vec<_>>()
            .abi_encode()
            .into()
    }

    #[tokio::test]
    async fn reads_token_infos() {
        let mut reader = MockChainReader::new();
        reader
            .expect_call()
            .times(2)
            .returning(|_, data, _| Ok(relay(&data)));
        let caller = Caller::new(Arc::new(reader), Address::ZERO).unwrap();

        let infos = fetch_token_infos(&caller, &[COW, NOT_A_TOKEN], 3)
            .await
            .unwrap();

        assert_eq!(
            infos,
            [
                TokenInfo {
                    symbol: Some("COW".to_owned()),
                    decimals: Some(18),
                },
                TokenInfo::default(),
            ]
        );
    }

    #[tokio::test]
    async fn no_tokens() {
        let caller = Caller::new(Arc::new(MockChainReader::new()), Address::ZERO).unwrap();
        let infos = fetch_token_infos(&caller, &[], 10).await.unwrap();
        assert!(infos.is_empty());
    }
}
