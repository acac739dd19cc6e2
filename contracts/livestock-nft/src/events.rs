use soroban_sdk::{contractevent, Address, String};

/// Event emitted when a livestock token is minted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MintedEventData {
    #[topic]
    pub to: Address,
    pub token_id: u64,
    pub metadata_uri: String,
}

/// Event emitted when ownership of a token changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferredEventData {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub token_id: u64,
}
