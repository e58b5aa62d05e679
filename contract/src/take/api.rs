use near_sdk::{
    env, ext_contract, is_promise_success, json_types::U128, near, AccountId, Gas, NearToken, Promise,
    PromiseOrValue,
};
use penny_jar_model::{api::TakeApi, take_view::TakeView, TokenAmount, WithdrawalEvent};

use crate::{
    event::{emit, EventKind},
    Contract, ContractExt,
};

const GAS_FOR_AFTER_TAKE: Gas = Gas::from_tgas(5);

#[ext_contract(ext_self)]
pub trait TakeCallbacks {
    fn after_take(&mut self, account_id: AccountId, amount: U128) -> TakeView;
}

#[near]
impl TakeApi for Contract {
    fn take(&mut self, amount: U128) -> PromiseOrValue<TakeView> {
        let taker = env::predecessor_account_id();

        // The withdrawal event is emitted in the callback, once the transfer
        // is known to have succeeded.
        self.ledger
            .take(taker.clone(), amount.0)
            .unwrap_or_else(|err| env::panic_str(&err.to_string()));

        self.transfer_take(&taker, amount.0)
    }
}

impl Contract {
    pub(crate) fn after_take_internal(
        &mut self,
        account_id: AccountId,
        amount: TokenAmount,
        is_promise_success: bool,
    ) -> TakeView {
        if !is_promise_success {
            self.ledger.refund(amount);

            return TakeView::new(0);
        }

        emit(EventKind::Withdrawal(WithdrawalEvent::new(account_id, amount)));

        TakeView::new(amount)
    }
}

#[cfg(not(test))]
#[mutants::skip] // Requires a real transfer promise
impl Contract {
    fn transfer_take(&mut self, account_id: &AccountId, amount: TokenAmount) -> PromiseOrValue<TakeView> {
        Promise::new(account_id.clone())
            .transfer(NearToken::from_yoctonear(amount))
            .then(
                ext_self::ext(env::current_account_id())
                    .with_static_gas(GAS_FOR_AFTER_TAKE)
                    .after_take(account_id.clone(), amount.into()),
            )
            .into()
    }
}

#[cfg(test)]
impl Contract {
    fn transfer_take(&mut self, account_id: &AccountId, amount: TokenAmount) -> PromiseOrValue<TakeView> {
        let taken = self.after_take_internal(
            account_id.clone(),
            amount,
            crate::common::test_data::get_test_future_success(),
        );

        PromiseOrValue::Value(taken)
    }
}

#[near]
impl TakeCallbacks for Contract {
    #[private]
    fn after_take(&mut self, account_id: AccountId, amount: U128) -> TakeView {
        self.after_take_internal(account_id, amount.0, is_promise_success())
    }
}
