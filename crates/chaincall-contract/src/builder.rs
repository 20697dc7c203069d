//! Fluent construction of call/transaction parameters.

use alloy_primitives::{Address, U256};

use chaincall_core::{AccessListItem, CallRequest};

/// Fluent access to the `CallRequest` owned by a call builder.
///
/// Every setter takes and returns `Self` by value, so a chain of
/// configuration calls on a concrete builder yields that same concrete
/// type — configuring a read-write call keeps it read-write.
///
/// Builders are not meant for concurrent mutation: each call flow is
/// confined to one logical owner until submission, which the by-value
/// setters enforce naturally.
pub trait CallBuilder: Sized {
    /// The parameter record owned by this builder.
    fn request(&self) -> &CallRequest;

    fn request_mut(&mut self) -> &mut CallRequest;

    /// An independent snapshot of the current parameters. Mutating the
    /// snapshot never affects this builder, and vice versa.
    fn to_call_request(&self) -> CallRequest {
        self.request().clone()
    }

    fn from(mut self, from: Address) -> Self {
        self.request_mut().from = Some(from);
        self
    }

    fn value(mut self, value: U256) -> Self {
        self.request_mut().value = Some(value);
        self
    }

    fn gas(mut self, gas: u64) -> Self {
        self.request_mut().gas = Some(gas);
        self
    }

    fn gas_price(mut self, gas_price: u128) -> Self {
        self.request_mut().gas_price = Some(gas_price);
        self
    }

    fn gas_fee_cap(mut self, fee_cap: u128) -> Self {
        self.request_mut().gas_fee_cap = Some(fee_cap);
        self
    }

    fn gas_tip_cap(mut self, tip_cap: u128) -> Self {
        self.request_mut().gas_tip_cap = Some(tip_cap);
        self
    }

    fn nonce(mut self, nonce: u64) -> Self {
        self.request_mut().nonce = Some(nonce);
        self
    }

    fn access_list(mut self, access_list: Vec<AccessListItem>) -> Self {
        self.request_mut().access_list = access_list;
        self
    }
}
