use soroban_sdk::{contracttype, Address, String};

/// Storage keys for the livestock NFT contract
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    TokenCounter,
    Token(u64),
    Balance(Address),
}

/// A minted livestock token.
///
/// `metadata_uri` points at the pinned JSON document describing the animal
/// (detection result, photo reference, listing details).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LivestockToken {
    pub token_id: u64,
    pub owner: Address,
    pub minter: Address,
    pub metadata_uri: String,
    pub minted_at: u64,
}
