multiversx_sc::imports!();

use crate::errors::{ERR_AGENT_NOT_FOUND, ERR_NO_STAKE, ERR_PROPOSAL_NOT_FOUND};
use crate::quorum;
use crate::types::{AgentRecord, Proposal, ProposalId, Stake};

// ============================================================
// VIEWS — read-only queries
// ============================================================

#[multiversx_sc::module]
pub trait ViewsModule: crate::storage::StorageModule {
    #[view(getProposal)]
    fn get_proposal(&self, id: ProposalId<Self::Api>) -> Proposal<Self::Api> {
        self.stored_proposal(&id)
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> usize {
        self.proposal_ids().len()
    }

    /// Creation-ordered history, 1-based like the underlying VecMapper.
    #[view(getProposals)]
    fn get_proposals(&self, from: usize, count: usize) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.proposal_ids().len();
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for i in start..=end {
            let id = self.proposal_ids().get(i);
            result.push(self.proposals(&id).get());
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for id in self.active_proposals().iter() {
            result.push(self.proposals(&id).get());
        }
        result
    }

    /// Active proposals whose deadline has passed; each is a valid
    /// `expireProposal` target.
    #[view(getExpirableProposals)]
    fn get_expirable_proposals(&self) -> MultiValueEncoded<ProposalId<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();
        for id in self.active_proposals().iter() {
            if now >= self.proposals(&id).get().expires_at {
                result.push(id);
            }
        }
        result
    }

    /// (for, against) share of the current total, in basis points.
    #[view(getProposalShares)]
    fn get_proposal_shares(&self, id: ProposalId<Self::Api>) -> MultiValue2<BigUint, BigUint> {
        let proposal = self.stored_proposal(&id);
        let total = proposal.total_stake();
        (
            quorum::share_bps(&proposal.stake_for, &total),
            quorum::share_bps(&proposal.stake_against, &total),
        )
            .into()
    }

    #[view(getStake)]
    fn get_stake(&self, id: ProposalId<Self::Api>, participant: ManagedAddress) -> Stake<Self::Api> {
        let mapper = self.stakes(&id, &participant);
        require!(!mapper.is_empty(), ERR_NO_STAKE);
        mapper.get()
    }

    #[view(hasStaked)]
    fn has_staked(&self, id: ProposalId<Self::Api>, participant: ManagedAddress) -> bool {
        !self.stakes(&id, &participant).is_empty()
    }

    #[view(getStakers)]
    fn get_stakers(&self, id: ProposalId<Self::Api>) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for staker in self.stakers(&id).iter() {
            result.push(staker);
        }
        result
    }

    #[view(getAgent)]
    fn get_agent(&self, agent: ManagedAddress) -> AgentRecord<Self::Api> {
        let mapper = self.agents(&agent);
        require!(!mapper.is_empty(), ERR_AGENT_NOT_FOUND);
        mapper.get()
    }

    #[view(isOnCooldown)]
    fn is_on_cooldown(&self, agent: ManagedAddress) -> bool {
        let mapper = self.agents(&agent);
        if mapper.is_empty() {
            return false;
        }
        mapper.get().is_on_cooldown(self.blockchain().get_block_timestamp())
    }

    fn stored_proposal(&self, id: &ProposalId<Self::Api>) -> Proposal<Self::Api> {
        let mapper = self.proposals(id);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }
}
