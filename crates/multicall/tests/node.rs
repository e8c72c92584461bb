//! Tests against a live node. Run with `NODE_URL` pointing at a Polygon RPC
//! endpoint and `cargo test -- --ignored`.

use {
    alloy::{
        primitives::address,
        providers::{Provider, ProviderBuilder},
    },
    multicall::{Call, Caller, contracts::IERC20},
    std::sync::Arc,
};

fn caller_provider() -> alloy::providers::DynProvider {
    let url = std::env::var("NODE_URL").unwrap();
    ProviderBuilder::new()
        .connect_http(url.parse().unwrap())
        .erased()
}

#[ignore]
#[tokio::test]
async fn polygon_token_symbols() {
    observe::initialize_reentrant("multicall=debug");
    let caller = Caller::for_network(Arc::new(caller_provider()))
        .await
        .unwrap();

    let calls = vec![
        Call::from_sol(
            address!("0x1bfd67037b42cf73acf2047067bd4f2c47d9bfd6"),
            &IERC20::symbolCall {},
            "WBTC",
        ),
        Call::from_sol(
            address!("0x2791bca1f2de4661ed88a30c99a7a9449aa84174"),
            &IERC20::symbolCall {},
            "USDC",
        ),
    ];

    let responses = caller.execute(calls, 10).await.unwrap();
    assert_eq!(responses.len(), 2);
    for response in responses {
        assert!(response.success);
        let symbol = <IERC20::symbolCall as alloy::sol_types::SolCall>::abi_decode_returns(
            &response.return_data,
        )
        .unwrap();
        assert_eq!(symbol, response.correlation);
    }
}
