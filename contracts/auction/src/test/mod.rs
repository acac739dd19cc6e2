pub mod withdraw_test;

use crate::{AuctionLedger, AuctionLedgerClient, AuctionParams, DutchParams, EnglishParams};
use livestock_nft::{LivestockNft, LivestockNftClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

pub const START_TIME: u64 = 1_000;
pub const FUNDING: i128 = 10_000_000;

pub struct Setup {
    pub env: Env,
    pub ledger: AuctionLedgerClient<'static>,
    pub nft: LivestockNftClient<'static>,
    pub token: token::TokenClient<'static>,
    pub admin: Address,
    pub seller: Address,
    pub alice: Address,
    pub bob: Address,
    pub carol: Address,
}

pub fn setup_test() -> Setup {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| li.timestamp = START_TIME);

    let nft_id = env.register(LivestockNft, ());
    let nft = LivestockNftClient::new(&env, &nft_id);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    let ledger_id = env.register(AuctionLedger, ());
    let ledger = AuctionLedgerClient::new(&env, &ledger_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);
    let carol = Address::generate(&env);

    for bidder in [&alice, &bob, &carol] {
        token_admin_client.mint(bidder, &FUNDING);
    }

    ledger.initialize(&admin, &token_address, &nft_id);

    Setup {
        env,
        ledger,
        nft,
        token: token_client,
        admin,
        seller,
        alice,
        bob,
        carol,
    }
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| li.timestamp += seconds);
}

pub fn mint_livestock(s: &Setup, owner: &Address) -> u64 {
    s.nft
        .mint(owner, &String::from_str(&s.env, "ipfs://QmHerefordBull"))
}

pub fn english(starting_bid: i128, duration: u64) -> AuctionParams {
    AuctionParams::English(EnglishParams {
        starting_bid,
        duration,
    })
}

pub fn dutch(start_price: i128, end_price: i128, duration: u64) -> AuctionParams {
    AuctionParams::Dutch(DutchParams {
        start_price,
        end_price,
        duration,
    })
}

/// Mint a token to the seller and open an English auction on it.
pub fn open_english(s: &Setup, starting_bid: i128, duration: u64) -> (u64, u64) {
    let token_id = mint_livestock(s, &s.seller);
    let auction_id = s
        .ledger
        .create_auction(&s.seller, &token_id, &english(starting_bid, duration));
    (auction_id, token_id)
}

/// Mint a token to the seller and open a Dutch auction on it.
pub fn open_dutch(s: &Setup, start_price: i128, end_price: i128, duration: u64) -> (u64, u64) {
    let token_id = mint_livestock(s, &s.seller);
    let auction_id = s.ledger.create_auction(
        &s.seller,
        &token_id,
        &dutch(start_price, end_price, duration),
    );
    (auction_id, token_id)
}

pub fn ledger_balance(s: &Setup) -> i128 {
    s.token.balance(&s.ledger.address)
}
