#![no_std]

//! Livestock NFT registry.
//!
//! Each token represents one animal listed on the marketplace and carries the
//! URI of its pinned metadata document. Ownership changes only through
//! owner-authorised [`LivestockNft::transfer`] calls, which is also how the
//! auction ledger takes tokens into escrow and releases them.

use soroban_sdk::{contract, contractimpl, Address, Env, String};

mod errors;
mod events;
mod storage;
mod types;

pub use errors::Error;
pub use types::LivestockToken;

use events::{MintedEventData, TransferredEventData};

#[contract]
pub struct LivestockNft;

#[contractimpl]
impl LivestockNft {
    // ========== MINTING ==========

    /// Mint a new token to `to` with the given metadata URI.
    ///
    /// # Errors
    /// * `Error::InvalidMetadata` - If `metadata_uri` is empty
    pub fn mint(env: Env, to: Address, metadata_uri: String) -> Result<u64, Error> {
        to.require_auth();

        if metadata_uri.is_empty() {
            return Err(Error::InvalidMetadata);
        }

        let token_id = storage::increment_token_counter(&env);
        let token = LivestockToken {
            token_id,
            owner: to.clone(),
            minter: to.clone(),
            metadata_uri: metadata_uri.clone(),
            minted_at: env.ledger().timestamp(),
        };

        storage::set_token(&env, &token);
        storage::increment_balance(&env, &to);

        MintedEventData {
            to,
            token_id,
            metadata_uri,
        }
        .publish(&env);

        Ok(token_id)
    }

    // ========== TRANSFERS ==========

    /// Move `token_id` from `from` to `to`. Requires `from` authorization.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let mut token = storage::get_token(&env, token_id).ok_or(Error::TokenNotFound)?;
        if token.owner != from {
            return Err(Error::NotOwner);
        }

        token.owner = to.clone();
        storage::set_token(&env, &token);
        storage::decrement_balance(&env, &from);
        storage::increment_balance(&env, &to);

        TransferredEventData { from, to, token_id }.publish(&env);

        Ok(())
    }

    // ========== QUERIES ==========

    /// Current owner, or `None` for an unknown token
    pub fn owner_of(env: Env, token_id: u64) -> Option<Address> {
        storage::get_token(&env, token_id).map(|token| token.owner)
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        storage::get_token(&env, token_id)
            .map(|token| token.metadata_uri)
            .ok_or(Error::TokenNotFound)
    }

    pub fn get_token(env: Env, token_id: u64) -> Result<LivestockToken, Error> {
        storage::get_token(&env, token_id).ok_or(Error::TokenNotFound)
    }

    /// Number of tokens held by `owner`
    pub fn balance(env: Env, owner: Address) -> u64 {
        storage::get_balance(&env, &owner)
    }

    pub fn total_supply(env: Env) -> u64 {
        storage::get_token_counter(&env)
    }
}
