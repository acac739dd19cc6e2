use crate::test::{advance_ledger, ledger_balance, open_english, setup_test, FUNDING};
use crate::types::{Bid, DataKey};
use crate::Error;
use soroban_sdk::testutils::storage::Persistent as _;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Vec};

#[test]
fn test_withdraw_pays_out_pending_returns() {
    let s = setup_test();
    let (auction_id, _) = open_english(&s, 100, 3600);
    s.ledger.bid(&auction_id, &s.alice, &300);
    s.ledger.bid(&auction_id, &s.bob, &450);

    assert_eq!(s.token.balance(&s.alice), FUNDING - 300);
    let paid = s.ledger.withdraw(&s.alice);

    assert_eq!(paid, 300);
    assert_eq!(s.token.balance(&s.alice), FUNDING);
    assert_eq!(s.ledger.pending_returns(&s.alice), 0);
    assert_eq!(ledger_balance(&s), 450);
}

#[test]
fn test_second_withdraw_is_noop() {
    let s = setup_test();
    let (auction_id, _) = open_english(&s, 100, 3600);
    s.ledger.bid(&auction_id, &s.alice, &300);
    s.ledger.bid(&auction_id, &s.bob, &450);
    s.ledger.bid(&auction_id, &s.alice, &500);

    let first = s.ledger.withdraw(&s.bob);
    let second = s.ledger.withdraw(&s.bob);

    assert_eq!(first, 450);
    assert_eq!(second, 0);
    assert_eq!(s.token.balance(&s.bob), FUNDING);
}

#[test]
fn test_withdraw_with_nothing_owed() {
    let s = setup_test();
    let stranger = Address::generate(&s.env);

    assert_eq!(s.ledger.withdraw(&stranger), 0);
    assert_eq!(s.token.balance(&stranger), 0);
}

#[test]
fn test_highest_bidder_has_nothing_to_withdraw() {
    let s = setup_test();
    let (auction_id, _) = open_english(&s, 100, 3600);
    s.ledger.bid(&auction_id, &s.alice, &300);

    assert_eq!(s.ledger.withdraw(&s.alice), 0);
    assert_eq!(ledger_balance(&s), 300);
}

#[test]
fn test_withdraw_spans_auctions() {
    let s = setup_test();
    let (first, _) = open_english(&s, 100, 3600);
    let (second, _) = open_english(&s, 100, 3600);

    s.ledger.bid(&first, &s.alice, &200);
    s.ledger.bid(&second, &s.alice, &250);
    s.ledger.bid(&first, &s.bob, &300);
    s.ledger.bid(&second, &s.carol, &350);

    assert_eq!(s.ledger.pending_returns(&s.alice), 450);
    assert_eq!(s.ledger.withdraw(&s.alice), 450);
}

#[test]
fn test_losing_bidder_withdraws_after_settlement() {
    let s = setup_test();
    let (auction_id, _) = open_english(&s, 100, 3600);
    s.ledger.bid(&auction_id, &s.alice, &300);
    s.ledger.bid(&auction_id, &s.bob, &450);

    advance_ledger(&s.env, 3600);
    s.ledger.end_auction(&auction_id, &s.carol);

    assert_eq!(s.ledger.withdraw(&s.alice), 300);
    assert_eq!(ledger_balance(&s), 0);
}

#[test]
fn test_withdraw_before_initialize() {
    let s = setup_test();
    let env = s.env.clone();
    let fresh = crate::AuctionLedgerClient::new(&env, &env.register(crate::AuctionLedger, ()));

    let result = fresh.try_withdraw(&s.alice);
    assert_eq!(result, Err(Ok(Error::NotInitialized)));
}

fn persistent_ttl(s: &crate::test::Setup, key: &DataKey) -> u32 {
    s.env
        .as_contract(&s.ledger.address, || s.env.storage().persistent().get_ttl(key))
}

#[test]
fn test_reads_extend_record_ttl() {
    let s = setup_test();
    let (auction_id, _) = open_english(&s, 100, 3600);

    // Written without extension, so both entries start at the minimum TTL.
    let returns_key = DataKey::PendingReturns(s.alice.clone());
    let history_key = DataKey::BidHistory(auction_id);
    s.env.as_contract(&s.ledger.address, || {
        let storage = s.env.storage().persistent();
        storage.set(&returns_key, &300_i128);
        storage.set(&history_key, &Vec::<Bid>::new(&s.env));
    });
    let stale_returns = persistent_ttl(&s, &returns_key);
    let stale_history = persistent_ttl(&s, &history_key);

    assert_eq!(s.ledger.pending_returns(&s.alice), 300);
    assert!(s.ledger.get_bid_history(&auction_id).is_empty());

    assert!(persistent_ttl(&s, &returns_key) > stale_returns);
    assert!(persistent_ttl(&s, &history_key) > stale_history);
}
