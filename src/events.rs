multiversx_sc::imports!();

use crate::types::{ProposalId, TradeDirection};

// ============================================================
// EVENTS
// Every state transition logs the totals it produced, so an
// indexer can replay proposal history from the log alone.
// ============================================================

#[multiversx_sc::module]
pub trait EventsModule {
    // ── Lifecycle ──

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] creator: &ManagedAddress,
        #[indexed] token: &ManagedBuffer,
        #[indexed] direction: TradeDirection,
        #[indexed] created_at: u64,
        expires_at: u64,
    );

    #[event("stakePlaced")]
    fn stake_placed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] participant: &ManagedAddress,
        #[indexed] is_for: bool,
        #[indexed] amount: &BigUint,
        #[indexed] stake_for: &BigUint,
        stake_against: &BigUint,
    );

    #[event("consensusReached")]
    fn consensus_reached_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] token: &ManagedBuffer,
        #[indexed] direction: TradeDirection,
        #[indexed] stake_for: &BigUint,
        total_stake: &BigUint,
    );

    #[event("proposalRejected")]
    fn proposal_rejected_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] stake_against: &BigUint,
        total_stake: &BigUint,
    );

    #[event("proposalExpired")]
    fn proposal_expired_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] stake_for: &BigUint,
        stake_against: &BigUint,
    );

    // ── Trade execution ──

    #[event("tradeExecutionRequested")]
    fn trade_execution_requested_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] token: &ManagedBuffer,
        #[indexed] direction: TradeDirection,
        total_stake_for: &BigUint,
    );

    #[event("tradeExecutionFailed")]
    fn trade_execution_failed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] err_code: u32,
        err_msg: &ManagedBuffer,
    );

    // ── Settlement ──

    #[event("rewardClaimed")]
    fn reward_claimed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] agent: &ManagedAddress,
        #[indexed] stake: &BigUint,
        #[indexed] reward: &BigUint,
        payout: &BigUint,
    );

    #[event("agentSlashed")]
    fn agent_slashed_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] agent: &ManagedAddress,
        #[indexed] stake: &BigUint,
        #[indexed] slashed: &BigUint,
        #[indexed] payout: &BigUint,
        cooldown_until: u64,
    );

    #[event("stakeRefunded")]
    fn stake_refunded_event(
        &self,
        #[indexed] proposal_id: &ProposalId<Self::Api>,
        #[indexed] agent: &ManagedAddress,
        amount: &BigUint,
    );

    // ── Ledger ──

    #[event("deposit")]
    fn deposit_event(&self, #[indexed] agent: &ManagedAddress, amount: &BigUint);

    #[event("withdraw")]
    fn withdraw_event(&self, #[indexed] agent: &ManagedAddress, amount: &BigUint);

    #[event("rewardReserveFunded")]
    fn reward_reserve_funded_event(&self, #[indexed] funder: &ManagedAddress, amount: &BigUint);

    // ── Registry ──

    #[event("agentRegistered")]
    fn agent_registered_event(&self, #[indexed] agent: &ManagedAddress);

    #[event("agentUnregistered")]
    fn agent_unregistered_event(&self, #[indexed] agent: &ManagedAddress);
}
