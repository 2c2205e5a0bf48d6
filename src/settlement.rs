multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_CLAIMED, ERR_NOT_FINALIZED, ERR_NO_STAKE, ERR_PROPOSAL_NOT_FOUND,
};
use crate::types::{ProposalId, ProposalStatus, Settlement, SettlementOutcome, Stake};
use crate::{BPS_DENOMINATOR, COOLDOWN_PERIOD, REWARD_BPS, SLASH_BPS};

// ============================================================
// Pure settlement rules
// ============================================================

/// Caller must have checked that `status` is final.
pub fn classify(status: ProposalStatus, is_for: bool) -> SettlementOutcome {
    match (status, is_for) {
        (ProposalStatus::Executed, true) | (ProposalStatus::Rejected, false) => {
            SettlementOutcome::Won
        }
        (ProposalStatus::Expired, _) => SettlementOutcome::Refunded,
        _ => SettlementOutcome::Lost,
    }
}

pub fn compute_settlement<M: ManagedTypeApi>(
    outcome: SettlementOutcome,
    amount: &BigUint<M>,
) -> Settlement<M> {
    match outcome {
        SettlementOutcome::Won => {
            let reward = (amount * REWARD_BPS) / BPS_DENOMINATOR;
            Settlement {
                outcome,
                payout: amount + &reward,
                reward,
                slashed: BigUint::zero(),
            }
        }
        SettlementOutcome::Lost => {
            let slashed = (amount * SLASH_BPS) / BPS_DENOMINATOR;
            Settlement {
                outcome,
                payout: amount - &slashed,
                reward: BigUint::zero(),
                slashed,
            }
        }
        SettlementOutcome::Refunded => Settlement {
            outcome,
            payout: amount.clone(),
            reward: BigUint::zero(),
            slashed: BigUint::zero(),
        },
    }
}

// ============================================================
// Settlement & Slashing
// ============================================================

#[multiversx_sc::module]
pub trait SettlementModule:
    crate::storage::StorageModule
    + crate::ledger::StakeLedgerModule
    + crate::events::EventsModule
{
    #[endpoint(claim)]
    fn claim(&self, proposal_id: ProposalId<Self::Api>) -> BigUint {
        let caller = self.blockchain().get_caller();
        self.settle(&proposal_id, &caller)
    }

    /// Settles someone else's stake. The payout still goes to them.
    #[endpoint(claimFor)]
    fn claim_for(
        &self,
        proposal_id: ProposalId<Self::Api>,
        participant: ManagedAddress,
    ) -> BigUint {
        self.settle(&proposal_id, &participant)
    }

    #[view(previewClaim)]
    fn preview_claim(
        &self,
        proposal_id: ProposalId<Self::Api>,
        participant: ManagedAddress,
    ) -> BigUint {
        let (status, stake) = self.require_claimable(&proposal_id, &participant);
        compute_settlement(classify(status, stake.is_for), &stake.amount).payout
    }

    // ========================================================
    // INTERNAL: settle one (proposal, participant) position
    // ========================================================

    fn settle(&self, proposal_id: &ProposalId<Self::Api>, participant: &ManagedAddress) -> BigUint {
        let (status, mut stake) = self.require_claimable(proposal_id, participant);

        // Mark before any value moves.
        stake.claimed = true;
        self.stakes(proposal_id, participant).set(&stake);

        let settlement = compute_settlement(classify(status, stake.is_for), &stake.amount);
        let now = self.blockchain().get_block_timestamp();

        let mut agent = self.agents(participant).get();
        agent.total_staked -= &stake.amount;
        match settlement.outcome {
            SettlementOutcome::Won => agent.wins += 1,
            SettlementOutcome::Lost => {
                agent.losses += 1;
                agent.cooldown_until = now + COOLDOWN_PERIOD;
            }
            SettlementOutcome::Refunded => {}
        }
        self.agents(participant).set(&agent);

        self.release_escrow(&stake.amount);
        self.credit(participant, &settlement.payout);

        match settlement.outcome {
            SettlementOutcome::Won => self.reward_claimed_event(
                proposal_id,
                participant,
                &stake.amount,
                &settlement.reward,
                &settlement.payout,
            ),
            SettlementOutcome::Lost => self.agent_slashed_event(
                proposal_id,
                participant,
                &stake.amount,
                &settlement.slashed,
                &settlement.payout,
                agent.cooldown_until,
            ),
            SettlementOutcome::Refunded => {
                self.stake_refunded_event(proposal_id, participant, &settlement.payout)
            }
        }

        settlement.payout
    }

    fn require_claimable(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        participant: &ManagedAddress,
    ) -> (ProposalStatus, Stake<Self::Api>) {
        let proposal_mapper = self.proposals(proposal_id);
        require!(!proposal_mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);

        let status = proposal_mapper.get().status;
        require!(status.is_final(), ERR_NOT_FINALIZED);

        let stake_mapper = self.stakes(proposal_id, participant);
        require!(!stake_mapper.is_empty(), ERR_NO_STAKE);

        let stake = stake_mapper.get();
        require!(!stake.claimed, ERR_ALREADY_CLAIMED);

        (status, stake)
    }
}
