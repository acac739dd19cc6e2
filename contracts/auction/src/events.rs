use soroban_sdk::{contractevent, Address};

use crate::types::{AuctionKind, AuctionStatus};

/// Event emitted when the ledger is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerInitializedEventData {
    #[topic]
    pub admin: Address,
    pub payment_token: Address,
    pub nft_contract: Address,
}

/// Event emitted when a new auction opens and its token enters escrow
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
    pub token_id: u64,
    pub kind: AuctionKind,
}

/// Event emitted when an English auction accepts a new highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub displaced_bidder: Option<Address>,
}

/// Event emitted when a bidder withdraws their pending returns
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawnEventData {
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an English auction is finalized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub auction_id: u64,
    pub status: AuctionStatus,
    pub winner: Option<Address>,
    pub amount: i128,
}

/// Event emitted when a Dutch auction is bought
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DutchAuctionBoughtEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub buyer: Address,
    pub price: i128,
    pub refunded: i128,
}

/// Event emitted when a seller withdraws an auction
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCancelledEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
}

/// Event emitted when the admin role changes hands
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminChangedEventData {
    #[topic]
    pub old_admin: Address,
    #[topic]
    pub new_admin: Address,
}
