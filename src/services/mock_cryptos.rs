//! Static cryptocurrency list used to seed the `stocks` table.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::stock::CandidateAsset;

const CRYPTO_EXCHANGE: &str = "CRYPTO";

fn candidate(
    symbol: &'static str,
    name: &'static str,
    current_price: Decimal,
    previous_close: Decimal,
    logo_url: &'static str,
    description: Option<&'static str>,
) -> CandidateAsset {
    let change = current_price - previous_close;
    let change_percent = if previous_close.is_zero() {
        Decimal::ZERO
    } else {
        (change / previous_close * dec!(100)).round_dp(2)
    };

    CandidateAsset {
        symbol,
        name,
        exchange: CRYPTO_EXCHANGE,
        current_price,
        previous_close,
        change,
        change_percent,
        logo_url,
        description,
    }
}

pub fn mock_cryptos() -> Vec<CandidateAsset> {
    vec![
        candidate(
            "BTC",
            "Bitcoin",
            dec!(64250.12),
            dec!(63510.40),
            "https://cryptologos.cc/logos/bitcoin-btc-logo.png",
            Some("The first decentralized cryptocurrency, secured by proof-of-work."),
        ),
        candidate(
            "ETH",
            "Ethereum",
            dec!(3120.55),
            dec!(3178.90),
            "https://cryptologos.cc/logos/ethereum-eth-logo.png",
            Some("Programmable blockchain platform and native currency of the Ethereum network."),
        ),
        candidate(
            "BNB",
            "BNB",
            dec!(585.30),
            dec!(579.10),
            "https://cryptologos.cc/logos/bnb-bnb-logo.png",
            None,
        ),
        candidate(
            "SOL",
            "Solana",
            dec!(142.75),
            dec!(138.20),
            "https://cryptologos.cc/logos/solana-sol-logo.png",
            Some("High-throughput proof-of-stake blockchain."),
        ),
        candidate(
            "XRP",
            "XRP",
            dec!(0.5231),
            dec!(0.5302),
            "https://cryptologos.cc/logos/xrp-xrp-logo.png",
            None,
        ),
        candidate(
            "ADA",
            "Cardano",
            dec!(0.4512),
            dec!(0.4470),
            "https://cryptologos.cc/logos/cardano-ada-logo.png",
            None,
        ),
        candidate(
            "DOGE",
            "Dogecoin",
            dec!(0.1234),
            dec!(0.1301),
            "https://cryptologos.cc/logos/dogecoin-doge-logo.png",
            Some("Meme-born cryptocurrency with an active community."),
        ),
        candidate(
            "DOT",
            "Polkadot",
            dec!(6.85),
            dec!(6.92),
            "https://cryptologos.cc/logos/polkadot-new-dot-logo.png",
            None,
        ),
        candidate(
            "AVAX",
            "Avalanche",
            dec!(27.40),
            dec!(26.15),
            "https://cryptologos.cc/logos/avalanche-avax-logo.png",
            None,
        ),
        candidate(
            "LINK",
            "Chainlink",
            dec!(13.62),
            dec!(13.48),
            "https://cryptologos.cc/logos/chainlink-link-logo.png",
            Some("Decentralized oracle network."),
        ),
        candidate(
            "MATIC",
            "Polygon",
            dec!(0.5620),
            dec!(0.5710),
            "https://cryptologos.cc/logos/polygon-matic-logo.png",
            None,
        ),
        candidate(
            "LTC",
            "Litecoin",
            dec!(71.30),
            dec!(70.05),
            "https://cryptologos.cc/logos/litecoin-ltc-logo.png",
            None,
        ),
        candidate(
            "TRX",
            "TRON",
            dec!(0.1215),
            dec!(0.1198),
            "https://cryptologos.cc/logos/tron-trx-logo.png",
            None,
        ),
        candidate(
            "ATOM",
            "Cosmos",
            dec!(6.48),
            dec!(6.61),
            "https://cryptologos.cc/logos/cosmos-atom-logo.png",
            None,
        ),
        candidate(
            "UNI",
            "Uniswap",
            dec!(7.92),
            dec!(7.70),
            "https://cryptologos.cc/logos/uniswap-uni-logo.png",
            Some("Governance token of the Uniswap decentralized exchange."),
        ),
        candidate(
            "XLM",
            "Stellar",
            dec!(0.0951),
            dec!(0.0962),
            "https://cryptologos.cc/logos/stellar-xlm-logo.png",
            None,
        ),
        candidate(
            "NEAR",
            "NEAR Protocol",
            dec!(5.21),
            dec!(5.04),
            "https://cryptologos.cc/logos/near-protocol-near-logo.png",
            None,
        ),
        candidate(
            "APT",
            "Aptos",
            dec!(8.77),
            dec!(8.95),
            "https://cryptologos.cc/logos/aptos-apt-logo.png",
            None,
        ),
    ]
}
