use crate::storage;
use crate::types::LedgerConfig;
use crate::Error;
use soroban_sdk::{Address, Env};

pub fn load_config(env: &Env) -> Result<LedgerConfig, Error> {
    storage::get_config(env).ok_or(Error::NotInitialized)
}

pub fn require_admin(env: &Env, admin: &Address) -> Result<LedgerConfig, Error> {
    admin.require_auth();
    let config = load_config(env)?;
    if config.admin != *admin {
        return Err(Error::Unauthorized);
    }
    Ok(config)
}
