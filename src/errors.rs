// Caller eligibility
pub const ERR_NOT_REGISTERED: &str = "Not a registered agent";
pub const ERR_ON_COOLDOWN: &str = "Agent is on cooldown";
pub const ERR_AGENT_NOT_FOUND: &str = "Agent does not exist";

// Proposal lifecycle
pub const ERR_PROPOSAL_NOT_FOUND: &str = "Proposal does not exist";
pub const ERR_PROPOSAL_NOT_ACTIVE: &str = "Proposal is not active";
pub const ERR_DUPLICATE_PROPOSAL: &str = "Proposal already exists";
pub const ERR_EMPTY_TOKEN: &str = "Token identifier is empty";
pub const ERR_TIMEOUT_NOT_REACHED: &str = "Proposal timeout not reached";

// Staking
pub const ERR_ALREADY_STAKED: &str = "Already staked on this proposal";
pub const ERR_INSUFFICIENT_STAKE: &str = "Stake must be greater than zero";

// Settlement
pub const ERR_NOT_FINALIZED: &str = "Proposal is not finalized";
pub const ERR_NO_STAKE: &str = "No stake on this proposal";
pub const ERR_ALREADY_CLAIMED: &str = "Stake already claimed";

// Ledger
pub const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";
pub const ERR_INSUFFICIENT_RESERVE: &str = "Insufficient reward reserve";
pub const ERR_WRONG_TOKEN: &str = "Wrong stake token";
pub const ERR_INVALID_AMOUNT: &str = "Invalid amount";

// Trade execution
pub const ERR_VAULT_GAS: &str = "Not enough gas left for vault call";
