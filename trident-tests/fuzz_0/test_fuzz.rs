use fuzz_accounts::*;
use trident_fuzz::fuzzing::*;
mod fuzz_accounts;

const TOKEN_DECIMALS: u32 = 6;
const INITIAL_DEPOSITOR_BALANCE: u64 = 1_000 * 10u64.pow(TOKEN_DECIMALS);

/// Vault state tracking for invariant checks
#[derive(Default, Clone)]
struct VaultTracker {
    initialized: bool,
    vault_authority_tampered: bool,
    vault_balance: u64,
    depositor_balance: u64,
    accepted_deposit_sum: u64,
}

#[derive(FuzzTestMethods)]
struct FuzzTest {
    trident: Trident,
    fuzz_accounts: AccountAddresses,
    vault_tracker: VaultTracker,
}

#[flow_executor]
impl FuzzTest {
    fn new() -> Self {
        Self {
            trident: Trident::default(),
            fuzz_accounts: AccountAddresses::default(),
            vault_tracker: VaultTracker::default(),
        }
    }

    #[init]
    fn start(&mut self) {
        self.vault_tracker = VaultTracker::default();
        self.vault_tracker.depositor_balance = INITIAL_DEPOSITOR_BALANCE;
    }

    /// Initialize the owner authority - must succeed exactly once
    #[flow]
    fn flow_initialize(&mut self) {
        if self.vault_tracker.initialized {
            // Second call is rejected with AlreadyInitialized and leaves the
            // record untouched; nothing in the tracker changes.
            return;
        }

        self.vault_tracker.initialized = true;
    }

    /// Deposit a fuzzed positive amount within the depositor's balance
    #[flow]
    fn flow_deposit(&mut self) {
        if !self.vault_tracker.initialized || self.vault_tracker.depositor_balance == 0 {
            return;
        }

        let amount = rand::random::<u64>() % self.vault_tracker.depositor_balance + 1;

        let accepted = self.apply_deposit(amount);
        assert!(accepted, "in-balance positive deposit must be accepted");

        // Invariant: deposits only add, and the ledger never diverges from
        // the running sum of accepted deposits
        assert_eq!(
            self.vault_tracker.vault_balance,
            self.vault_tracker.accepted_deposit_sum
        );
    }

    /// Zero amounts are rejected before any ledger interaction
    #[flow]
    fn flow_zero_deposit(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        let vault_before = self.vault_tracker.vault_balance;
        let depositor_before = self.vault_tracker.depositor_balance;

        let accepted = self.apply_deposit(0);

        assert!(!accepted, "zero deposit must be rejected");
        assert_eq!(self.vault_tracker.vault_balance, vault_before);
        assert_eq!(self.vault_tracker.depositor_balance, depositor_before);
    }

    /// Deposits beyond the depositor's balance are rejected without effect
    #[flow]
    fn flow_overdraw_deposit(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        let vault_before = self.vault_tracker.vault_balance;
        let depositor_before = self.vault_tracker.depositor_balance;

        let accepted = self.apply_deposit(depositor_before.saturating_add(1));

        assert!(!accepted, "overdraw must be rejected");
        assert_eq!(self.vault_tracker.vault_balance, vault_before);
        assert_eq!(self.vault_tracker.depositor_balance, depositor_before);
    }

    /// A vault-shaped account whose authority was swapped out must never
    /// accept deposits
    #[flow]
    fn flow_tampered_authority(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        self.vault_tracker.vault_authority_tampered = true;
        let vault_before = self.vault_tracker.vault_balance;

        let accepted = self.apply_deposit(1);

        assert!(!accepted, "deposit into tampered vault must be rejected");
        assert_eq!(self.vault_tracker.vault_balance, vault_before);

        self.vault_tracker.vault_authority_tampered = false;
    }

    #[end]
    fn end(&mut self) {
        if !self.vault_tracker.initialized {
            return;
        }

        // Conservation: nothing is created or lost across any interleaving
        // of accepted and rejected deposits
        assert_eq!(
            self.vault_tracker.vault_balance + self.vault_tracker.depositor_balance,
            INITIAL_DEPOSITOR_BALANCE,
        );
        assert_eq!(
            self.vault_tracker.vault_balance,
            self.vault_tracker.accepted_deposit_sum
        );
    }

    /// Model of the deposit instruction: returns whether the call was
    /// accepted, applying the balance movement only on acceptance.
    fn apply_deposit(&mut self, amount: u64) -> bool {
        if !self.vault_tracker.initialized {
            return false;
        }
        if amount == 0 {
            return false;
        }
        if self.vault_tracker.vault_authority_tampered {
            // AuthorityMismatch: the account at the derived address is not
            // controlled by the owner authority
            return false;
        }
        if self.vault_tracker.depositor_balance < amount {
            return false;
        }

        self.vault_tracker.depositor_balance -= amount;
        self.vault_tracker.vault_balance += amount;
        self.vault_tracker.accepted_deposit_sum += amount;
        true
    }
}

/// Deterministic scenario: 6-decimal asset, depositor starts with 1000 units,
/// deposits 100 then 200.
fn run_deposit_scenario() {
    let mut test = FuzzTest::new();
    test.start();
    test.flow_initialize();

    let unit = 10u64.pow(TOKEN_DECIMALS);
    assert!(test.apply_deposit(100 * unit));
    assert!(test.apply_deposit(200 * unit));

    assert_eq!(test.vault_tracker.vault_balance, 300 * unit);
    assert_eq!(test.vault_tracker.depositor_balance, 700 * unit);

    // Reversed order lands on the same balances
    let mut reversed = FuzzTest::new();
    reversed.start();
    reversed.flow_initialize();
    assert!(reversed.apply_deposit(200 * unit));
    assert!(reversed.apply_deposit(100 * unit));
    assert_eq!(
        reversed.vault_tracker.vault_balance,
        test.vault_tracker.vault_balance
    );
}

fn main() {
    run_deposit_scenario();

    // Run 1000 iterations with up to 100 flows per iteration
    FuzzTest::fuzz(1000, 100);
}
