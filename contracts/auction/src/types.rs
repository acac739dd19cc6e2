use soroban_sdk::{contracttype, Address};

/// Ledger-wide configuration stored by `initialize`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LedgerConfig {
    pub admin: Address,
    /// Token every bid, purchase and refund is denominated in
    pub payment_token: Address,
    /// Livestock NFT contract holding the assets under auction
    pub nft_contract: Address,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionStatus {
    Active = 0,
    Settled = 1,
    Cancelled = 2,
}

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AuctionKind {
    English = 0,
    Dutch = 1,
}

/// Creation parameters. The variant selects the auction kind.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionParams {
    English(EnglishParams),
    Dutch(DutchParams),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnglishParams {
    pub starting_bid: i128,
    pub duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DutchParams {
    pub start_price: i128,
    pub end_price: i128,
    pub duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EnglishTerms {
    pub starting_bid: i128,
    pub end_time: u64,
    pub highest_bid: i128,
    pub highest_bidder: Option<Address>,
    pub bid_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DutchTerms {
    pub start_price: i128,
    pub end_price: i128,
    pub start_time: u64,
    pub duration: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuctionTerms {
    English(EnglishTerms),
    Dutch(DutchTerms),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub auction_id: u64,
    pub seller: Address,
    pub token_id: u64,
    pub status: AuctionStatus,
    pub winner: Option<Address>,
    pub created_at: u64,
    pub terms: AuctionTerms,
}

impl Auction {
    pub fn kind(&self) -> AuctionKind {
        match self.terms {
            AuctionTerms::English(_) => AuctionKind::English,
            AuctionTerms::Dutch(_) => AuctionKind::Dutch,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AuctionStatus::Active
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    AuctionCounter,
    Auction(u64),
    BidHistory(u64),
    PendingReturns(Address),
}
