#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod ledger;
pub mod lifecycle;
pub mod quorum;
pub mod settlement;
pub mod storage;
pub mod types;
pub mod vault_proxy;
pub mod views;

use errors::{ERR_NOT_REGISTERED, ERR_WRONG_TOKEN};
use types::AgentRecord;

// ============================================================
// Constants
// ============================================================

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// 66% — one side must hold at least this share of the total stake
pub const QUORUM_BPS: u64 = 6_600;

/// Losing stakes forfeit 10%
pub const SLASH_BPS: u64 = 1_000;

/// Winning stakes earn 5%
pub const REWARD_BPS: u64 = 500;

/// Staking window: 30 minutes in seconds
pub const PROPOSAL_TIMEOUT: u64 = 30 * 60;

/// Creation lockout after a loss: 60 minutes in seconds
pub const COOLDOWN_PERIOD: u64 = 60 * 60;

/// Gas forwarded to the vault's executeTrade
pub const TRADE_EXECUTION_GAS: u64 = 20_000_000;

/// Gas reserved for the trade execution callback
pub const TRADE_CALLBACK_GAS: u64 = 3_000_000;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait AgentConsensus:
    storage::StorageModule
    + events::EventsModule
    + ledger::StakeLedgerModule
    + lifecycle::LifecycleModule
    + settlement::SettlementModule
    + views::ViewsModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        stake_token: EgldOrEsdtTokenIdentifier,
        vault_address: OptionalValue<ManagedAddress>,
    ) {
        require!(stake_token.is_valid(), ERR_WRONG_TOKEN);
        self.stake_token().set(&stake_token);

        if let OptionalValue::Some(vault) = vault_address {
            self.vault_address().set(&vault);
        }
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ADMIN: agent registry
    // Eligibility is decided off-chain; the engine only keeps
    // the flag and the stats it produces itself.
    // ========================================================

    #[only_owner]
    #[endpoint(registerAgent)]
    fn register_agent(&self, agent: ManagedAddress) {
        let mapper = self.agents(&agent);
        if mapper.is_empty() {
            mapper.set(AgentRecord::new());
        } else {
            mapper.update(|record| record.registered = true);
        }
        self.agent_registered_event(&agent);
    }

    #[only_owner]
    #[endpoint(unregisterAgent)]
    fn unregister_agent(&self, agent: ManagedAddress) {
        let mapper = self.agents(&agent);
        require!(!mapper.is_empty(), ERR_NOT_REGISTERED);

        mapper.update(|record| record.registered = false);
        self.agent_unregistered_event(&agent);
    }

    // ========================================================
    // ADMIN: trade execution venue
    // ========================================================

    #[only_owner]
    #[endpoint(setVaultAddress)]
    fn set_vault_address(&self, vault: ManagedAddress) {
        self.vault_address().set(&vault);
    }

    #[only_owner]
    #[endpoint(clearVaultAddress)]
    fn clear_vault_address(&self) {
        self.vault_address().clear();
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue5<u64, u64, u64, u64, u64> {
        (
            QUORUM_BPS,
            PROPOSAL_TIMEOUT,
            COOLDOWN_PERIOD,
            SLASH_BPS,
            REWARD_BPS,
        )
            .into()
    }
}
