multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_BALANCE, ERR_INSUFFICIENT_RESERVE, ERR_INVALID_AMOUNT, ERR_WRONG_TOKEN};

// ============================================================
// Stake Ledger
// Custodies the stake token. Value sits in one of three buckets:
// an agent's free balance, escrow (backing open stakes), or the
// reserve (slashed stakes + owner top-ups, pays out rewards).
// ============================================================

#[multiversx_sc::module]
pub trait StakeLedgerModule: crate::events::EventsModule {
    #[payable("*")]
    #[endpoint(deposit)]
    fn deposit(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.require_stake_payment();

        self.balance(&caller).update(|b| *b += &amount);
        self.deposit_event(&caller, &amount);
    }

    #[endpoint(withdraw)]
    fn withdraw(&self, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_INVALID_AMOUNT);

        let balance = self.balance(&caller).get();
        require!(balance >= amount, ERR_INSUFFICIENT_BALANCE);
        self.balance(&caller).set(&(balance - &amount));

        let token = self.stake_token().get();
        self.send().direct(&caller, &token, 0, &amount);
        self.withdraw_event(&caller, &amount);
    }

    #[only_owner]
    #[payable("*")]
    #[endpoint(fundRewardReserve)]
    fn fund_reward_reserve(&self) {
        let caller = self.blockchain().get_caller();
        let amount = self.require_stake_payment();

        self.reward_reserve().update(|r| *r += &amount);
        self.reward_reserve_funded_event(&caller, &amount);
    }

    // ========================================================
    // INTERNAL: custody movements used by the engine
    // ========================================================

    /// Free balance → escrow.
    fn debit(&self, participant: &ManagedAddress, amount: &BigUint) {
        let balance = self.balance(participant).get();
        require!(&balance >= amount, ERR_INSUFFICIENT_BALANCE);

        self.balance(participant).set(&(balance - amount));
        self.total_escrow().update(|e| *e += amount);
    }

    /// Escrow → reserve, once the stake it backs is settled.
    fn release_escrow(&self, amount: &BigUint) {
        self.total_escrow().update(|e| *e -= amount);
        self.reward_reserve().update(|r| *r += amount);
    }

    /// Reserve → free balance. Zero is a no-op.
    fn credit(&self, participant: &ManagedAddress, amount: &BigUint) {
        if amount == &0u64 {
            return;
        }

        let reserve = self.reward_reserve().get();
        require!(&reserve >= amount, ERR_INSUFFICIENT_RESERVE);

        self.reward_reserve().set(&(reserve - amount));
        self.balance(participant).update(|b| *b += amount);
    }

    fn require_stake_payment(&self) -> BigUint {
        let (token, amount) = self.call_value().egld_or_single_fungible_esdt();
        require!(token == self.stake_token().get(), ERR_WRONG_TOKEN);
        require!(amount > 0u64, ERR_INVALID_AMOUNT);
        amount
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[view(getStakeToken)]
    #[storage_mapper("stakeToken")]
    fn stake_token(&self) -> SingleValueMapper<EgldOrEsdtTokenIdentifier>;

    #[view(getBalance)]
    #[storage_mapper("balance")]
    fn balance(&self, agent: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[view(getTotalEscrow)]
    #[storage_mapper("totalEscrow")]
    fn total_escrow(&self) -> SingleValueMapper<BigUint>;

    #[view(getRewardReserve)]
    #[storage_mapper("rewardReserve")]
    fn reward_reserve(&self) -> SingleValueMapper<BigUint>;
}
