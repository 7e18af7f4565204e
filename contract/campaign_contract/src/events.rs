use soroban_sdk::{contracttype, Address, String, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct ContributeEvent {
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct RefundEvent {
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct SpendingRequestCreatedEvent {
    pub request_id: u32,
    pub recipient: Address,
    pub description: String,
    pub value: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct ApproveEvent {
    pub request_id: u32,
    pub contributor: Address,
}

#[contracttype]
#[derive(Clone)]
pub struct SpendEvent {
    pub request_id: u32,
    pub recipient: Address,
    pub value: i128,
}

pub fn emit_contribute(env: &soroban_sdk::Env, event: ContributeEvent) {
    env.events().publish(
        (Symbol::new(env, "contribute"),),
        event,
    );
}

pub fn emit_refund(env: &soroban_sdk::Env, event: RefundEvent) {
    env.events().publish(
        (Symbol::new(env, "refund"),),
        event,
    );
}

pub fn emit_request_created(env: &soroban_sdk::Env, event: SpendingRequestCreatedEvent) {
    env.events().publish(
        (Symbol::new(env, "request_created"),),
        event,
    );
}

pub fn emit_approve(env: &soroban_sdk::Env, event: ApproveEvent) {
    env.events().publish(
        (Symbol::new(env, "approve"),),
        event,
    );
}

pub fn emit_spend(env: &soroban_sdk::Env, event: SpendEvent) {
    env.events().publish(
        (Symbol::new(env, "spend"),),
        event,
    );
}
