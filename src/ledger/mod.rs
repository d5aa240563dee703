//! Row-locking data access for the two balance ledgers.
//!
//! These modules are the only place balances are read for mutation. The
//! contract, shared by accounts and phone numbers:
//!
//! - `load_for_update` reads the row while taking its exclusive lock
//!   (`SELECT ... FOR UPDATE`); the lock is held until the enclosing
//!   transaction commits or rolls back
//! - `save_*` writes a balance previously obtained via `load_for_update`
//!
//! Unlocked reads live with the reader: phone numbers are shared, so their
//! plain `load`/`list_active` sit here; account reads are always scoped to
//! the owning API key and stay in the handlers.
//!
//! Lock waits are bounded by the pool-wide `lock_timeout` session setting
//! (see `db::create_pool`), so a blocked unit of work either proceeds once
//! the competing transaction finishes or aborts with a retryable error.
//!
//! Callers must follow a fixed lock-acquisition order to stay deadlock-free:
//! credit approval locks the request row before the account row, and charge
//! sales lock the account row before the phone-number row. The debtor row
//! always comes first when two operations could meet on the same account.

/// Account credit ledger
pub mod accounts;
/// Phone number charge ledger
pub mod phones;
