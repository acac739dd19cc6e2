//! Fund and asset movements between participants and the ledger.
//!
//! Every transfer goes through a `try_*` client call so a failing token or
//! NFT contract surfaces as [`Error::TransferFailed`] instead of a trap.
//! Nothing here retries.

use soroban_sdk::{contractclient, token, Address, Env};

use crate::types::LedgerConfig;
use crate::Error;

/// The subset of the livestock NFT contract the ledger relies on.
#[allow(dead_code)]
#[contractclient(name = "NftRegistryClient")]
pub trait NftRegistry {
    fn owner_of(env: Env, token_id: u64) -> Option<Address>;
    fn transfer(env: Env, from: Address, to: Address, token_id: u64);
}

fn settled<T, C, I>(result: Result<Result<T, C>, I>) -> Result<T, Error> {
    match result {
        Ok(Ok(value)) => Ok(value),
        _ => Err(Error::TransferFailed),
    }
}

pub fn token_owner(env: &Env, config: &LedgerConfig, token_id: u64) -> Option<Address> {
    let nft = NftRegistryClient::new(env, &config.nft_contract);
    match nft.try_owner_of(&token_id) {
        Ok(Ok(owner)) => owner,
        _ => None,
    }
}

/// Move `token_id` from the seller into the ledger's custody.
pub fn escrow_token(
    env: &Env,
    config: &LedgerConfig,
    seller: &Address,
    token_id: u64,
) -> Result<(), Error> {
    let nft = NftRegistryClient::new(env, &config.nft_contract);
    settled(nft.try_transfer(seller, &env.current_contract_address(), &token_id))
}

/// Hand an escrowed token to its final owner.
pub fn release_token(
    env: &Env,
    config: &LedgerConfig,
    to: &Address,
    token_id: u64,
) -> Result<(), Error> {
    let nft = NftRegistryClient::new(env, &config.nft_contract);
    settled(nft.try_transfer(&env.current_contract_address(), to, &token_id))
}

/// Pull `amount` of the payment token from `from` into the ledger.
pub fn collect_payment(
    env: &Env,
    config: &LedgerConfig,
    from: &Address,
    amount: i128,
) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token_client = token::TokenClient::new(env, &config.payment_token);
    settled(token_client.try_transfer(from, &env.current_contract_address(), &amount))
}

/// Pay `amount` of the payment token out of the ledger to `to`.
pub fn pay_out(env: &Env, config: &LedgerConfig, to: &Address, amount: i128) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token_client = token::TokenClient::new(env, &config.payment_token);
    settled(token_client.try_transfer(&env.current_contract_address(), to, &amount))
}
