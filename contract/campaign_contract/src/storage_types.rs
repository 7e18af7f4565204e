use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Owner,
    Token,
    Deadline,
    Goal,
    TotalContributed,
    ContributorCount,
    RequestCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Contribution(Address),
    Request(RequestId),
    Approval(RequestId, Address),
}

// Spending request ID type (id = creation index)
pub type RequestId = u32;

// A proposed disbursement from campaign funds, unlocked by contributor approvals
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct SpendingRequest {
    pub recipient: Address,
    pub description: String,
    pub value: i128,
    pub approval_count: u32,
    pub completed: bool,
}

// Custom error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CampaignError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    DeadlinePassed = 3,
    DeadlineNotPassed = 4,
    InsufficientContribution = 5,
    GoalNotReached = 6,
    GoalReached = 7,
    InvalidRecipient = 8,
    InsufficientBalance = 9,
    RequestNotFound = 10,
    AlreadyApproved = 11,
    NotAContributor = 12,
    AlreadyCompleted = 13,
    QuorumNotMet = 14,
    TransferFailed = 15,
}

// Constants
pub const MINIMUM_CONTRIBUTION: i128 = 1_000_000; // 0.1 token at 7 decimals
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
