//! Constants used in the integration tests

use std::time::Duration;

/// The name of a contract that is known not to exist in the artifact registry
pub(crate) const MISSING_CONTRACT_NAME: &str = "DoesNotExist";

/// The timeout for devnet deployment confirmation.
///
/// The devnet mines instantly; anything longer indicates a hung node.
pub(crate) const DEVNET_CONFIRM_TIMEOUT: Duration = Duration::from_secs(30);

/// An RPC URL with no listener behind it
pub(crate) const UNREACHABLE_RPC_URL: &str = "http://localhost:1";
