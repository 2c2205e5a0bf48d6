multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_STAKED, ERR_DUPLICATE_PROPOSAL, ERR_EMPTY_TOKEN, ERR_INSUFFICIENT_STAKE,
    ERR_NOT_REGISTERED, ERR_ON_COOLDOWN, ERR_PROPOSAL_NOT_ACTIVE, ERR_PROPOSAL_NOT_FOUND,
    ERR_TIMEOUT_NOT_REACHED, ERR_VAULT_GAS,
};
use crate::quorum::{self, QuorumDecision};
use crate::types::{AgentRecord, Proposal, ProposalId, ProposalStatus, Stake, TradeDirection};
use crate::vault_proxy;
use crate::{PROPOSAL_TIMEOUT, TRADE_CALLBACK_GAS, TRADE_EXECUTION_GAS};

#[multiversx_sc::module]
pub trait LifecycleModule:
    crate::storage::StorageModule
    + crate::ledger::StakeLedgerModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createProposal
    // Creator's initial stake is recorded on the "for" side.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(
        &self,
        token: ManagedBuffer,
        direction: TradeDirection,
        initial_stake: BigUint,
    ) -> ProposalId<Self::Api> {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        let mut agent = self.require_registered(&caller);
        require!(!agent.is_on_cooldown(now), ERR_ON_COOLDOWN);
        require!(initial_stake > 0u64, ERR_INSUFFICIENT_STAKE);
        require!(!token.is_empty(), ERR_EMPTY_TOKEN);

        let proposal_id = self.derive_proposal_id(&token, direction, now, &caller);
        require!(
            self.proposals(&proposal_id).is_empty(),
            ERR_DUPLICATE_PROPOSAL
        );

        self.debit(&caller, &initial_stake);

        let proposal = Proposal {
            id: proposal_id.clone(),
            creator: caller.clone(),
            token,
            direction,
            status: ProposalStatus::Pending,
            stake_for: initial_stake.clone(),
            stake_against: BigUint::zero(),
            created_at: now,
            expires_at: now + PROPOSAL_TIMEOUT,
            finalized_at: 0,
        };

        self.proposals(&proposal_id).set(&proposal);
        self.proposal_ids().push(&proposal_id);
        self.active_proposals().insert(proposal_id.clone());
        self.record_stake(&proposal_id, &caller, &initial_stake, true);

        agent.total_staked += &initial_stake;
        self.agents(&caller).set(&agent);

        self.proposal_created_event(
            &proposal_id,
            &caller,
            &proposal.token,
            direction,
            now,
            proposal.expires_at,
        );
        self.stake_placed_event(
            &proposal_id,
            &caller,
            true,
            &initial_stake,
            &proposal.stake_for,
            &proposal.stake_against,
        );

        proposal_id
    }

    // ========================================================
    // ENDPOINT: placeStake
    // One position per participant. Quorum is re-evaluated
    // synchronously after every stake. A decisive stake on a
    // Long/Short proposal with a vault set forwards
    // TRADE_EXECUTION_GAS + TRADE_CALLBACK_GAS to the vault when
    // that much gas is left; otherwise tradeExecutionFailed is logged.
    // ========================================================

    #[endpoint(placeStake)]
    fn place_stake(&self, proposal_id: ProposalId<Self::Api>, amount: BigUint, is_for: bool) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        let mut agent = self.require_registered(&caller);
        let mut proposal = self.require_proposal(&proposal_id);
        require!(proposal.is_open_at(now), ERR_PROPOSAL_NOT_ACTIVE);
        require!(
            self.stakes(&proposal_id, &caller).is_empty(),
            ERR_ALREADY_STAKED
        );
        require!(amount > 0u64, ERR_INSUFFICIENT_STAKE);

        self.debit(&caller, &amount);
        self.record_stake(&proposal_id, &caller, &amount, is_for);

        if is_for {
            proposal.stake_for += &amount;
        } else {
            proposal.stake_against += &amount;
        }

        agent.total_staked += &amount;
        self.agents(&caller).set(&agent);
        self.proposals(&proposal_id).set(&proposal);

        self.stake_placed_event(
            &proposal_id,
            &caller,
            is_for,
            &amount,
            &proposal.stake_for,
            &proposal.stake_against,
        );

        self.apply_quorum(proposal, now);
    }

    // ========================================================
    // ENDPOINT: expireProposal
    // Anyone can call once the timeout has elapsed. There is no
    // background expiry; this is the only deadline transition.
    // ========================================================

    #[endpoint(expireProposal)]
    fn expire_proposal(&self, proposal_id: ProposalId<Self::Api>) {
        let mut proposal = self.require_proposal(&proposal_id);
        require!(
            proposal.status == ProposalStatus::Pending,
            ERR_PROPOSAL_NOT_ACTIVE
        );

        let now = self.blockchain().get_block_timestamp();
        require!(now >= proposal.expires_at, ERR_TIMEOUT_NOT_REACHED);

        proposal.status = ProposalStatus::Expired;
        proposal.finalized_at = now;
        self.proposals(&proposal_id).set(&proposal);
        self.active_proposals().swap_remove(&proposal_id);

        self.proposal_expired_event(&proposal_id, &proposal.stake_for, &proposal.stake_against);
    }

    // ========================================================
    // INTERNAL: quorum transition
    // ========================================================

    fn apply_quorum(&self, mut proposal: Proposal<Self::Api>, now: u64) {
        let status = match quorum::resolve(&proposal.stake_for, &proposal.stake_against) {
            QuorumDecision::Undecided => return,
            QuorumDecision::Approved => ProposalStatus::Executed,
            QuorumDecision::Rejected => ProposalStatus::Rejected,
        };

        proposal.status = status;
        proposal.finalized_at = now;
        self.proposals(&proposal.id).set(&proposal);
        self.active_proposals().swap_remove(&proposal.id);

        let total = proposal.total_stake();
        if status == ProposalStatus::Rejected {
            self.proposal_rejected_event(&proposal.id, &proposal.stake_against, &total);
            return;
        }

        self.consensus_reached_event(
            &proposal.id,
            &proposal.token,
            proposal.direction,
            &proposal.stake_for,
            &total,
        );

        // State is committed above; the vault only ever sees a final proposal.
        if proposal.direction.is_tradable() {
            self.signal_trade_execution(&proposal);
        }
    }

    // ========================================================
    // INTERNAL: trade execution signal (fire-and-forget)
    // ========================================================

    fn signal_trade_execution(&self, proposal: &Proposal<Self::Api>) {
        self.trade_execution_requested_event(
            &proposal.id,
            &proposal.token,
            proposal.direction,
            &proposal.stake_for,
        );

        if self.vault_address().is_empty() {
            return;
        }
        // Too little gas for the promise: log it, keep the stake.
        if self.blockchain().get_gas_left() < TRADE_EXECUTION_GAS + TRADE_CALLBACK_GAS {
            let reason = ManagedBuffer::from(ERR_VAULT_GAS);
            self.trade_execution_failed_event(&proposal.id, 0, &reason);
            return;
        }
        let vault = self.vault_address().get();

        self.tx()
            .to(&vault)
            .typed(vault_proxy::VaultProxy)
            .execute_trade(
                &proposal.id,
                &proposal.token,
                proposal.direction,
                &proposal.stake_for,
            )
            .gas(TRADE_EXECUTION_GAS)
            .callback(self.callbacks().trade_execution_callback(proposal.id.clone()))
            .gas_for_callback(TRADE_CALLBACK_GAS)
            .register_promise();
    }

    /// Vault failures are logged only. Consensus stays as decided.
    #[promises_callback]
    fn trade_execution_callback(
        &self,
        proposal_id: ProposalId<Self::Api>,
        #[call_result] result: ManagedAsyncCallResult<()>,
    ) {
        if let ManagedAsyncCallResult::Err(err) = result {
            self.trade_execution_failed_event(&proposal_id, err.err_code, &err.err_msg);
        }
    }

    // ========================================================
    // INTERNAL: helpers
    // ========================================================

    fn record_stake(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        participant: &ManagedAddress,
        amount: &BigUint,
        is_for: bool,
    ) {
        let stake = Stake {
            amount: amount.clone(),
            is_for,
            claimed: false,
        };
        self.stakes(proposal_id, participant).set(&stake);
        self.stakers(proposal_id).push(participant);
    }

    fn require_registered(&self, agent: &ManagedAddress) -> AgentRecord<Self::Api> {
        let record_mapper = self.agents(agent);
        require!(!record_mapper.is_empty(), ERR_NOT_REGISTERED);

        let record = record_mapper.get();
        require!(record.registered, ERR_NOT_REGISTERED);
        record
    }

    fn require_proposal(&self, proposal_id: &ProposalId<Self::Api>) -> Proposal<Self::Api> {
        let mapper = self.proposals(proposal_id);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    #[view(computeProposalId)]
    fn compute_proposal_id(
        &self,
        token: ManagedBuffer,
        direction: TradeDirection,
        created_at: u64,
        creator: ManagedAddress,
    ) -> ProposalId<Self::Api> {
        self.derive_proposal_id(&token, direction, created_at, &creator)
    }

    /// Length-prefixes the token so distinct (token, direction) pairs
    /// can never share a preimage.
    fn derive_proposal_id(
        &self,
        token: &ManagedBuffer,
        direction: TradeDirection,
        created_at: u64,
        creator: &ManagedAddress,
    ) -> ProposalId<Self::Api> {
        let mut preimage = ManagedBuffer::new();
        preimage.append_bytes(&(token.len() as u32).to_be_bytes());
        preimage.append(token);
        preimage.append_bytes(&[direction.as_u8()]);
        preimage.append_bytes(&created_at.to_be_bytes());
        preimage.append(creator.as_managed_buffer());

        self.crypto().keccak256(&preimage)
    }
}
