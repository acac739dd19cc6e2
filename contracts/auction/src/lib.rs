#![no_std]

//! # Livestock Auction Ledger
//!
//! Custodial auction house for livestock NFTs. Two auction kinds share one
//! record shape:
//!
//! - **English**: ascending bids until a fixed `end_time`. Each accepted bid
//!   is held by the ledger; the bid it displaces becomes a pending return the
//!   displaced bidder pulls out with [`AuctionLedger::withdraw`].
//! - **Dutch**: the price decays linearly from `start_price` to `end_price`
//!   over `duration` and the first buyer to pay the current price wins.
//!
//! The auctioned token sits in the ledger's custody from creation until the
//! auction reaches its terminal state. An auction leaves `Active` exactly
//! once, and always before any funds or tokens leave the ledger.

use soroban_sdk::{contract, contracterror, contractimpl, log, Address, Env, Vec};

mod admin;
mod custody;
mod events;
mod pricing;
mod storage;
mod types;

pub use types::{
    Auction, AuctionKind, AuctionParams, AuctionStatus, AuctionTerms, Bid, DutchParams,
    DutchTerms, EnglishParams, EnglishTerms, LedgerConfig,
};

use events::{
    AdminChangedEventData, AuctionCancelledEventData, AuctionCreatedEventData,
    AuctionEndedEventData, BidPlacedEventData, DutchAuctionBoughtEventData,
    LedgerInitializedEventData, RefundWithdrawnEventData,
};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    InvalidParameters = 4,
    NotOwner = 5,
    AuctionNotFound = 6,
    AuctionInactive = 7,
    TooEarly = 8,
    BidTooLow = 9,
    InsufficientPayment = 10,
    /// A token or payment transfer failed. The invocation is rolled back.
    TransferFailed = 11,
    WrongAuctionKind = 12,
    SellerCannotBid = 13,
    CannotCancelWithBids = 14,
    ArithmeticOverflow = 15,
}

#[contract]
pub struct AuctionLedger;

#[contractimpl]
impl AuctionLedger {
    /// Store the ledger configuration. Can only be called once.
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        nft_contract: Address,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let config = LedgerConfig {
            admin: admin.clone(),
            payment_token: payment_token.clone(),
            nft_contract: nft_contract.clone(),
        };
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        LedgerInitializedEventData {
            admin,
            payment_token,
            nft_contract,
        }
        .publish(&env);

        Ok(())
    }

    pub fn set_admin(env: Env, admin: Address, new_admin: Address) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &admin)?;

        config.admin = new_admin.clone();
        storage::set_config(&env, &config);

        AdminChangedEventData {
            old_admin: admin,
            new_admin,
        }
        .publish(&env);

        Ok(())
    }

    /// Open an auction for `token_id` and take the token into escrow.
    ///
    /// # Errors
    /// * `Error::InvalidParameters` - Negative amounts, zero duration, or a
    ///   Dutch `start_price` below its `end_price`
    /// * `Error::NotOwner` - `seller` does not hold `token_id`
    pub fn create_auction(
        env: Env,
        seller: Address,
        token_id: u64,
        params: AuctionParams,
    ) -> Result<u64, Error> {
        seller.require_auth();
        let config = admin::load_config(&env)?;

        let now = env.ledger().timestamp();
        let terms = build_terms(&params, now)?;

        if custody::token_owner(&env, &config, token_id) != Some(seller.clone()) {
            return Err(Error::NotOwner);
        }
        custody::escrow_token(&env, &config, &seller, token_id)?;

        let auction_id = storage::increment_auction_counter(&env);
        let auction = Auction {
            auction_id,
            seller: seller.clone(),
            token_id,
            status: AuctionStatus::Active,
            winner: None,
            created_at: now,
            terms,
        };
        storage::save_auction(&env, &auction);
        storage::extend_instance_ttl(&env);

        AuctionCreatedEventData {
            auction_id,
            seller,
            token_id,
            kind: auction.kind(),
        }
        .publish(&env);

        Ok(auction_id)
    }

    /// Place a bid on an English auction.
    ///
    /// The bid is collected into the ledger. The bid it outbids is credited
    /// to the previous bidder's pending returns.
    pub fn bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();
        let config = admin::load_config(&env)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let mut terms = english_terms(&auction)?;

        let now = env.ledger().timestamp();
        if !auction.is_active() || now >= terms.end_time {
            return Err(Error::AuctionInactive);
        }
        if bidder == auction.seller {
            return Err(Error::SellerCannotBid);
        }
        if amount <= terms.highest_bid || amount < terms.starting_bid {
            return Err(Error::BidTooLow);
        }

        custody::collect_payment(&env, &config, &bidder, amount)?;

        let displaced_bidder = terms.highest_bidder.clone();
        if let Some(previous) = &displaced_bidder {
            credit_pending_returns(&env, previous, terms.highest_bid)?;
        }

        terms.highest_bid = amount;
        terms.highest_bidder = Some(bidder.clone());
        terms.bid_count = terms.bid_count.saturating_add(1);
        auction.terms = AuctionTerms::English(terms);
        storage::save_auction(&env, &auction);

        storage::add_bid_to_history(
            &env,
            auction_id,
            Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: now,
            },
        );

        BidPlacedEventData {
            auction_id,
            bidder,
            amount,
            displaced_bidder,
        }
        .publish(&env);

        Ok(())
    }

    /// Pay out everything owed to `bidder` from displaced bids.
    ///
    /// Returns the amount paid. A zero balance is a no-op returning 0.
    pub fn withdraw(env: Env, bidder: Address) -> Result<i128, Error> {
        bidder.require_auth();
        let config = admin::load_config(&env)?;

        let amount = storage::get_pending_returns(&env, &bidder);
        if amount == 0 {
            return Ok(0);
        }

        // Zero first: nothing may observe the old balance once payout starts.
        storage::clear_pending_returns(&env, &bidder);
        custody::pay_out(&env, &config, &bidder, amount)?;

        RefundWithdrawnEventData {
            bidder: bidder.clone(),
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    /// Finalize an English auction once `end_time` has passed. Anyone may call.
    ///
    /// The highest bid goes to the seller and the token to the highest
    /// bidder. Without bids the token returns to the seller.
    pub fn end_auction(env: Env, auction_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = admin::load_config(&env)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let terms = english_terms(&auction)?;

        if !auction.is_active() {
            return Err(Error::AuctionInactive);
        }
        if env.ledger().timestamp() < terms.end_time {
            return Err(Error::TooEarly);
        }

        match &terms.highest_bidder {
            Some(winner) => {
                auction.status = AuctionStatus::Settled;
                auction.winner = Some(winner.clone());
                storage::save_auction(&env, &auction);

                custody::pay_out(&env, &config, &auction.seller, terms.highest_bid)?;
                custody::release_token(&env, &config, winner, auction.token_id)?;
                log!(&env, "english auction settled", auction_id, terms.highest_bid);
            }
            None => {
                auction.status = AuctionStatus::Cancelled;
                storage::save_auction(&env, &auction);

                custody::release_token(&env, &config, &auction.seller, auction.token_id)?;
                log!(&env, "english auction closed without bids", auction_id);
            }
        }

        AuctionEndedEventData {
            auction_id,
            status: auction.status,
            winner: auction.winner.clone(),
            amount: terms.highest_bid,
        }
        .publish(&env);

        Ok(())
    }

    /// Withdraw an auction nobody has bid on or bought yet.
    pub fn cancel_auction(env: Env, auction_id: u64, seller: Address) -> Result<(), Error> {
        seller.require_auth();
        let config = admin::load_config(&env)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        if auction.seller != seller {
            return Err(Error::Unauthorized);
        }
        if !auction.is_active() {
            return Err(Error::AuctionInactive);
        }
        if let AuctionTerms::English(terms) = &auction.terms {
            if terms.highest_bidder.is_some() {
                return Err(Error::CannotCancelWithBids);
            }
        }

        auction.status = AuctionStatus::Cancelled;
        storage::save_auction(&env, &auction);
        custody::release_token(&env, &config, &seller, auction.token_id)?;

        AuctionCancelledEventData { auction_id, seller }.publish(&env);

        Ok(())
    }

    /// Current price of a Dutch auction. Read only.
    pub fn get_current_price(env: Env, auction_id: u64) -> Result<i128, Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let terms = dutch_terms(&auction)?;
        pricing::dutch_price(&terms, env.ledger().timestamp())
    }

    /// Buy a Dutch auction at its current price.
    ///
    /// `amount_paid` is collected in full; the seller receives the current
    /// price and the excess is refunded to the buyer.
    ///
    /// # Errors
    /// * `Error::AuctionInactive` - Already bought or cancelled
    /// * `Error::InsufficientPayment` - `amount_paid` is below the current price
    pub fn buy_dutch_auction(
        env: Env,
        auction_id: u64,
        buyer: Address,
        amount_paid: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();
        let config = admin::load_config(&env)?;

        let mut auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let terms = dutch_terms(&auction)?;

        if !auction.is_active() {
            return Err(Error::AuctionInactive);
        }
        if buyer == auction.seller {
            return Err(Error::SellerCannotBid);
        }

        let now = env.ledger().timestamp();
        let price = pricing::dutch_price(&terms, now)?;
        if amount_paid < price {
            return Err(Error::InsufficientPayment);
        }
        let refund = amount_paid - price;

        // Terminal status is written before any value moves.
        auction.status = AuctionStatus::Settled;
        auction.winner = Some(buyer.clone());
        storage::save_auction(&env, &auction);

        custody::collect_payment(&env, &config, &buyer, amount_paid)?;
        custody::pay_out(&env, &config, &auction.seller, price)?;
        custody::pay_out(&env, &config, &buyer, refund)?;
        custody::release_token(&env, &config, &buyer, auction.token_id)?;

        storage::add_bid_to_history(
            &env,
            auction_id,
            Bid {
                bidder: buyer.clone(),
                amount: price,
                timestamp: now,
            },
        );
        log!(&env, "dutch auction bought", auction_id, price);

        DutchAuctionBoughtEventData {
            auction_id,
            buyer,
            price,
            refunded: refund,
        }
        .publish(&env);

        Ok(())
    }

    // ========== QUERIES ==========

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)
    }

    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        if storage::get_auction(&env, auction_id).is_none() {
            return Err(Error::AuctionNotFound);
        }
        Ok(storage::get_bid_history(&env, auction_id))
    }

    pub fn get_highest_bid(env: Env, auction_id: u64) -> Result<(Option<Address>, i128), Error> {
        let auction = storage::get_auction(&env, auction_id).ok_or(Error::AuctionNotFound)?;
        let terms = english_terms(&auction)?;
        Ok((terms.highest_bidder, terms.highest_bid))
    }

    /// Amount `bidder` can currently withdraw
    pub fn pending_returns(env: Env, bidder: Address) -> i128 {
        storage::get_pending_returns(&env, &bidder)
    }

    pub fn auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    pub fn get_config(env: Env) -> Result<LedgerConfig, Error> {
        admin::load_config(&env)
    }
}

fn build_terms(params: &AuctionParams, now: u64) -> Result<AuctionTerms, Error> {
    match params {
        AuctionParams::English(p) => {
            if p.starting_bid < 0 || p.duration == 0 {
                return Err(Error::InvalidParameters);
            }
            let end_time = now
                .checked_add(p.duration)
                .ok_or(Error::InvalidParameters)?;
            Ok(AuctionTerms::English(EnglishTerms {
                starting_bid: p.starting_bid,
                end_time,
                highest_bid: 0,
                highest_bidder: None,
                bid_count: 0,
            }))
        }
        AuctionParams::Dutch(p) => {
            if p.end_price < 0 || p.start_price < p.end_price || p.duration == 0 {
                return Err(Error::InvalidParameters);
            }
            if now.checked_add(p.duration).is_none() {
                return Err(Error::InvalidParameters);
            }
            // Bounds every spread * elapsed the price decay computes.
            if (p.start_price - p.end_price)
                .checked_mul(p.duration as i128)
                .is_none()
            {
                return Err(Error::InvalidParameters);
            }
            Ok(AuctionTerms::Dutch(DutchTerms {
                start_price: p.start_price,
                end_price: p.end_price,
                start_time: now,
                duration: p.duration,
            }))
        }
    }
}

fn english_terms(auction: &Auction) -> Result<EnglishTerms, Error> {
    match &auction.terms {
        AuctionTerms::English(terms) => Ok(terms.clone()),
        AuctionTerms::Dutch(_) => Err(Error::WrongAuctionKind),
    }
}

fn dutch_terms(auction: &Auction) -> Result<DutchTerms, Error> {
    match &auction.terms {
        AuctionTerms::Dutch(terms) => Ok(terms.clone()),
        AuctionTerms::English(_) => Err(Error::WrongAuctionKind),
    }
}

fn credit_pending_returns(env: &Env, bidder: &Address, amount: i128) -> Result<(), Error> {
    let balance = storage::get_pending_returns(env, bidder)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    storage::set_pending_returns(env, bidder, balance);
    Ok(())
}

#[cfg(test)]
mod test;
