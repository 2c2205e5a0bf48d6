multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// keccak256 over (token, direction, created_at, creator).
pub type ProposalId<M> = ManagedByteArray<M, 32>;

// ============================================================
// Trade Direction
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum TradeDirection {
    Long,
    Short,
    /// Consensus to stay put. Never forwarded to the vault.
    Hold,
}

impl TradeDirection {
    pub fn as_u8(&self) -> u8 {
        match self {
            TradeDirection::Long => 0,
            TradeDirection::Short => 1,
            TradeDirection::Hold => 2,
        }
    }

    pub fn is_tradable(&self) -> bool {
        *self != TradeDirection::Hold
    }
}

// ============================================================
// Proposal Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Accepting stakes until quorum or deadline.
    Pending,
    /// "For" side reached quorum. Terminal.
    Executed,
    /// "Against" side reached quorum. Terminal.
    Rejected,
    /// Deadline passed without quorum. Terminal, every stake refunded.
    Expired,
}

impl ProposalStatus {
    pub fn is_final(&self) -> bool {
        *self != ProposalStatus::Pending
    }
}

// ============================================================
// Proposal — the consensus record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: ProposalId<M>,
    pub creator: ManagedAddress<M>,
    /// Asset the trade targets. Opaque to the engine.
    pub token: ManagedBuffer<M>,
    pub direction: TradeDirection,
    pub status: ProposalStatus,
    pub stake_for: BigUint<M>,
    pub stake_against: BigUint<M>,
    pub created_at: u64,
    pub expires_at: u64,
    /// Block timestamp of the terminal transition (0 while Pending)
    pub finalized_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn total_stake(&self) -> BigUint<M> {
        &self.stake_for + &self.stake_against
    }

    pub fn is_open_at(&self, now: u64) -> bool {
        self.status == ProposalStatus::Pending && now < self.expires_at
    }
}

// ============================================================
// Stake — one position per (proposal, participant)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Stake<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    pub is_for: bool,
    pub claimed: bool,
}

// ============================================================
// Agent Record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct AgentRecord<M: ManagedTypeApi> {
    pub registered: bool,
    /// Sum of this agent's unsettled stakes. A stake stays counted after
    /// its proposal finalizes and is released only when it is claimed.
    pub total_staked: BigUint<M>,
    pub wins: u64,
    pub losses: u64,
    /// Creation is blocked while now < cooldown_until
    pub cooldown_until: u64,
}

impl<M: ManagedTypeApi> AgentRecord<M> {
    pub fn new() -> Self {
        AgentRecord {
            registered: true,
            total_staked: BigUint::zero(),
            wins: 0,
            losses: 0,
            cooldown_until: 0,
        }
    }

    pub fn is_on_cooldown(&self, now: u64) -> bool {
        now < self.cooldown_until
    }
}

// ============================================================
// Settlement
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum SettlementOutcome {
    Won,
    Lost,
    Refunded,
}

/// Split of one settled stake. `payout + slashed == amount + reward`.
#[derive(Clone)]
pub struct Settlement<M: ManagedTypeApi> {
    pub outcome: SettlementOutcome,
    pub payout: BigUint<M>,
    pub reward: BigUint<M>,
    pub slashed: BigUint<M>,
}
