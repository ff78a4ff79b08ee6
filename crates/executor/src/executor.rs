//! The executor - dispatch from parsed commands to registry operations.

use tracing::debug;

use pactdb_core::{ContractField, LedgerStore};
use pactdb_registry::Registry;

use crate::command::Command;
use crate::error::{Error, Result};
use crate::output::Output;

/// Stateless dispatcher over a [`Registry`].
///
/// Holds no state of its own; every invocation is independent, matching the
/// host's one-at-a-time execution model. The router calls
/// [`invoke`](Executor::invoke) with the verb and argument list it received
/// and forwards the resulting bytes or error message to its own caller.
#[derive(Debug)]
pub struct Executor<S> {
    registry: Registry<S>,
}

impl<S: LedgerStore> Executor<S> {
    /// Create an executor over a ledger store.
    pub fn new(store: S) -> Self {
        Self {
            registry: Registry::new(store),
        }
    }

    /// The registry this executor dispatches to.
    pub fn registry(&self) -> &Registry<S> {
        &self.registry
    }

    /// Parse and execute in one step.
    pub fn invoke(&self, function: &str, args: &[String]) -> Result<Output> {
        debug!(%function, args = args.len(), "invoke");
        self.execute(Command::parse(function, args)?)
    }

    /// Execute a parsed command.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        match cmd {
            Command::Init { counter } => {
                self.registry.init(counter)?;
                Ok(Output::Unit)
            }
            Command::Write { key, value } => {
                self.registry.write_raw(&key, value.as_bytes())?;
                Ok(Output::Unit)
            }
            Command::Read { key } => match self.registry.read_raw(&key) {
                Ok(bytes) => Ok(Output::Bytes(bytes)),
                // A failed read is wrapped in a structured payload rather
                // than surfaced as a bare error
                Err(_) => Err(Error::ReadFailed {
                    payload: serde_json::json!({
                        "Error": format!("Failed to get state for {key}")
                    })
                    .to_string(),
                }),
            },
            Command::Delete { key } => {
                self.registry.delete(&key)?;
                Ok(Output::Unit)
            }
            Command::InitContract { contract } => {
                self.registry.create(contract)?;
                Ok(Output::Unit)
            }
            Command::SetUser { id, company1 } => {
                self.registry
                    .update_field(&id, ContractField::Company1, &company1)?;
                Ok(Output::Unit)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pactdb_registry::testing::{FailingLedger, MemoryLedger};

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    fn executor() -> Executor<MemoryLedger> {
        Executor::new(MemoryLedger::new())
    }

    #[test]
    fn test_write_then_read_passthrough() {
        let exec = executor();
        exec.invoke("write", &strings(&["k", "hello"])).unwrap();

        let out = exec.invoke("read", &strings(&["k"])).unwrap();
        assert_eq!(out.into_bytes(), b"hello");
    }

    #[test]
    fn test_read_never_written_is_empty() {
        let exec = executor();
        let out = exec.invoke("read", &strings(&["ghost"])).unwrap();
        assert!(out.into_bytes().is_empty());
    }

    #[test]
    fn test_read_failure_wraps_payload() {
        let exec = Executor::new(FailingLedger);
        let err = exec.invoke("read", &strings(&["C1"])).unwrap_err();
        match err {
            Error::ReadFailed { payload } => {
                let json: serde_json::Value = serde_json::from_str(&payload).unwrap();
                assert_eq!(json["Error"], "Failed to get state for C1");
            }
            other => panic!("wrong error: {other:?}"),
        }
    }

    #[test]
    fn test_init_contract_duplicate_fails() {
        let exec = executor();
        let args = strings(&[
            "C1", "2024-01-01", "2024-12-31", "NYC", "body", "P1", "P2", "Title",
        ]);
        exec.invoke("init_contract", &args).unwrap();

        let err = exec.invoke("init_contract", &args).unwrap_err();
        assert!(matches!(
            err,
            Error::Registry(pactdb_core::Error::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_arg_count_checked_before_store_access() {
        // A failing store never gets touched when the arg count is wrong
        let exec = Executor::new(FailingLedger);
        let err = exec.invoke("init_contract", &strings(&["C1"])).unwrap_err();
        assert!(matches!(err, Error::ArgumentCount { .. }));
    }
}
