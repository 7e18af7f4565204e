#![no_std]


mod events;
mod storage_types;
use storage_types::{
    CampaignError, DataKey, PersistentKey, RequestId, SpendingRequest,
    MINIMUM_CONTRIBUTION, TTL_INSTANCE, TTL_PERSISTENT,
};

use soroban_sdk::{contract, contractimpl, token, Address, Env, String};

#[contract]
pub struct CampaignContract;

#[contractimpl]
impl CampaignContract {
    /// Initialize the campaign with its owner, funding token, deadline and goal
    pub fn initialize(
        e: Env,
        owner: Address,
        token: Address,
        deadline: u64,
        goal: i128,
    ) -> Result<(), CampaignError> {
        if e.storage().instance().has(&DataKey::Owner) {
            return Err(CampaignError::AlreadyInitialized);
        }

        owner.require_auth();

        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::Deadline, &deadline);
        e.storage().instance().set(&DataKey::Goal, &goal);
        e.storage().instance().set(&DataKey::TotalContributed, &0i128);
        e.storage().instance().set(&DataKey::ContributorCount, &0u32);
        e.storage().instance().set(&DataKey::RequestCount, &0u32);

        extend_instance(&e);

        Ok(())
    }

    /// Contribute funds to the campaign while funding is open
    pub fn contribute(e: Env, contributor: Address, amount: i128) -> Result<(), CampaignError> {
        contributor.require_auth();

        if e.ledger().timestamp() >= get_deadline(&e) {
            return Err(CampaignError::DeadlinePassed);
        }
        if amount < MINIMUM_CONTRIBUTION {
            return Err(CampaignError::InsufficientContribution);
        }

        let token_client = token::Client::new(&e, &get_token(&e));
        token_client.transfer(&contributor, &e.current_contract_address(), &amount);

        let key = PersistentKey::Contribution(contributor.clone());
        let contributed: i128 = e.storage().persistent().get(&key).unwrap_or(0);
        if contributed == 0 {
            let count: u32 = e.storage().instance().get(&DataKey::ContributorCount).unwrap();
            e.storage().instance().set(&DataKey::ContributorCount, &(count + 1));
        }
        e.storage().persistent().set(&key, &(contributed + amount));

        let total = get_total_contributed(&e);
        e.storage().instance().set(&DataKey::TotalContributed, &(total + amount));

        extend_persistent(&e, &key);
        extend_instance(&e);

        events::emit_contribute(&e, events::ContributeEvent { contributor, amount });

        Ok(())
    }

    /// Reclaim a contribution after the deadline when the goal was not met
    pub fn refund(e: Env, contributor: Address) -> Result<(), CampaignError> {
        contributor.require_auth();

        if e.ledger().timestamp() < get_deadline(&e) {
            return Err(CampaignError::DeadlineNotPassed);
        }
        if get_total_contributed(&e) >= get_goal(&e) {
            return Err(CampaignError::GoalReached);
        }

        let key = PersistentKey::Contribution(contributor.clone());
        let amount: i128 = e.storage().persistent().get(&key).unwrap_or(0);
        if amount == 0 {
            return Err(CampaignError::NotAContributor);
        }

        // The entry is zeroed before the outward transfer
        e.storage().persistent().remove(&key);
        let total = get_total_contributed(&e);
        e.storage().instance().set(&DataKey::TotalContributed, &(total - amount));

        let token_client = token::Client::new(&e, &get_token(&e));
        if token_client
            .try_transfer(&e.current_contract_address(), &contributor, &amount)
            .is_err()
        {
            return Err(CampaignError::TransferFailed);
        }

        extend_instance(&e);

        events::emit_refund(&e, events::RefundEvent { contributor, amount });

        Ok(())
    }

    /// Create a spending request against the raised funds (owner only)
    pub fn create_spending_request(
        e: Env,
        caller: Address,
        recipient: Address,
        description: String,
        value: i128,
    ) -> Result<RequestId, CampaignError> {
        caller.require_auth();

        if caller != get_owner(&e) {
            return Err(CampaignError::Unauthorized);
        }
        if e.ledger().timestamp() < get_deadline(&e) {
            return Err(CampaignError::DeadlineNotPassed);
        }
        if get_total_contributed(&e) < get_goal(&e) {
            return Err(CampaignError::GoalNotReached);
        }
        if recipient == e.current_contract_address() {
            return Err(CampaignError::InvalidRecipient);
        }

        let token_client = token::Client::new(&e, &get_token(&e));
        if value > token_client.balance(&e.current_contract_address()) {
            return Err(CampaignError::InsufficientBalance);
        }

        let request_id: RequestId = e.storage().instance().get(&DataKey::RequestCount).unwrap();
        let request = SpendingRequest {
            recipient: recipient.clone(),
            description: description.clone(),
            value,
            approval_count: 0,
            completed: false,
        };

        e.storage().persistent().set(&PersistentKey::Request(request_id), &request);
        e.storage().instance().set(&DataKey::RequestCount, &(request_id + 1));

        extend_persistent(&e, &PersistentKey::Request(request_id));
        extend_instance(&e);

        events::emit_request_created(
            &e,
            events::SpendingRequestCreatedEvent {
                request_id,
                recipient,
                description,
                value,
            },
        );

        Ok(request_id)
    }

    /// Approve a spending request (contributors only, one vote each)
    pub fn approve(e: Env, contributor: Address, request_id: RequestId) -> Result<(), CampaignError> {
        contributor.require_auth();

        let mut request = get_request(&e, request_id)?;

        let contributed: i128 = e
            .storage()
            .persistent()
            .get(&PersistentKey::Contribution(contributor.clone()))
            .unwrap_or(0);
        if contributed == 0 {
            return Err(CampaignError::NotAContributor);
        }

        let approval_key = PersistentKey::Approval(request_id, contributor.clone());
        if e.storage().persistent().has(&approval_key) {
            return Err(CampaignError::AlreadyApproved);
        }

        e.storage().persistent().set(&approval_key, &true);
        request.approval_count += 1;
        e.storage().persistent().set(&PersistentKey::Request(request_id), &request);

        extend_persistent(&e, &approval_key);
        extend_persistent(&e, &PersistentKey::Request(request_id));

        events::emit_approve(&e, events::ApproveEvent { request_id, contributor });

        Ok(())
    }

    /// Execute a spending request that has reached quorum (owner only)
    pub fn execute_request(e: Env, caller: Address, request_id: RequestId) -> Result<(), CampaignError> {
        caller.require_auth();

        if caller != get_owner(&e) {
            return Err(CampaignError::Unauthorized);
        }

        let mut request = get_request(&e, request_id)?;
        if request.completed {
            return Err(CampaignError::AlreadyCompleted);
        }

        // Quorum: at least half of all-time contributors, ties pass
        let contributor_count: u32 =
            e.storage().instance().get(&DataKey::ContributorCount).unwrap();
        if request.approval_count * 2 < contributor_count {
            return Err(CampaignError::QuorumNotMet);
        }

        // Completion is recorded before the outward transfer
        request.completed = true;
        e.storage().persistent().set(&PersistentKey::Request(request_id), &request);

        let token_client = token::Client::new(&e, &get_token(&e));
        if token_client
            .try_transfer(&e.current_contract_address(), &request.recipient, &request.value)
            .is_err()
        {
            return Err(CampaignError::TransferFailed);
        }

        extend_persistent(&e, &PersistentKey::Request(request_id));
        extend_instance(&e);

        events::emit_spend(
            &e,
            events::SpendEvent {
                request_id,
                recipient: request.recipient,
                value: request.value,
            },
        );

        Ok(())
    }

    /// View functions
    pub fn get_contribution(e: Env, contributor: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&PersistentKey::Contribution(contributor))
            .unwrap_or(0)
    }

    pub fn number_of_contributors(e: Env) -> u32 {
        e.storage().instance().get(&DataKey::ContributorCount).unwrap()
    }

    pub fn get_spending_request_count(e: Env) -> u32 {
        e.storage().instance().get(&DataKey::RequestCount).unwrap()
    }

    pub fn get_spending_request(e: Env, request_id: RequestId) -> Result<SpendingRequest, CampaignError> {
        get_request(&e, request_id)
    }

    pub fn is_approved(e: Env, request_id: RequestId, contributor: Address) -> bool {
        e.storage()
            .persistent()
            .has(&PersistentKey::Approval(request_id, contributor))
    }

    pub fn goal(e: Env) -> i128 {
        get_goal(&e)
    }

    pub fn deadline(e: Env) -> u64 {
        get_deadline(&e)
    }

    pub fn owner(e: Env) -> Address {
        get_owner(&e)
    }

    pub fn token(e: Env) -> Address {
        get_token(&e)
    }

    pub fn total_contributed(e: Env) -> i128 {
        get_total_contributed(&e)
    }

    pub fn minimum_contribution() -> i128 {
        MINIMUM_CONTRIBUTION
    }
}

// Helper functions
fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn get_owner(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Owner).unwrap()
}

fn get_token(e: &Env) -> Address {
    e.storage().instance().get(&DataKey::Token).unwrap()
}

fn get_deadline(e: &Env) -> u64 {
    e.storage().instance().get(&DataKey::Deadline).unwrap()
}

fn get_goal(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::Goal).unwrap()
}

fn get_total_contributed(e: &Env) -> i128 {
    e.storage().instance().get(&DataKey::TotalContributed).unwrap()
}

fn get_request(e: &Env, request_id: RequestId) -> Result<SpendingRequest, CampaignError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Request(request_id))
        .ok_or(CampaignError::RequestNotFound)
}
