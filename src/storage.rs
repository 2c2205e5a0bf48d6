multiversx_sc::imports!();

use crate::types::{AgentRecord, Proposal, ProposalId, Stake};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[view(getVaultAddress)]
    #[storage_mapper("vaultAddress")]
    fn vault_address(&self) -> SingleValueMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, id: &ProposalId<Self::Api>) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Creation order, for paginated history.
    #[storage_mapper("proposalIds")]
    fn proposal_ids(&self) -> VecMapper<ProposalId<Self::Api>>;

    /// Pending proposals only. Finalized ones are archived out of this set.
    #[storage_mapper("activeProposals")]
    fn active_proposals(&self) -> UnorderedSetMapper<ProposalId<Self::Api>>;

    // ── Stakes ──

    #[storage_mapper("stakes")]
    fn stakes(
        &self,
        proposal_id: &ProposalId<Self::Api>,
        participant: &ManagedAddress,
    ) -> SingleValueMapper<Stake<Self::Api>>;

    #[storage_mapper("stakers")]
    fn stakers(&self, proposal_id: &ProposalId<Self::Api>) -> VecMapper<ManagedAddress>;

    // ── Agents ──

    #[storage_mapper("agents")]
    fn agents(&self, agent: &ManagedAddress) -> SingleValueMapper<AgentRecord<Self::Api>>;
}
