//! Configuration constants.
//!
//! This module defines the fixed identifiers, paths and defaults shared by the
//! client, the renderer and the CLI.

/// Relative path of the analysis endpoint on the backend.
pub const ANALYZE_PATH: &str = "/api/analyze";

/// Default backend base URL (the Flask service listens on 5000 by default).
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Environment variable holding the backend base URL.
pub const ENDPOINT_ENV_VAR: &str = "TAINT_ANALYZE_ENDPOINT";

/// Default per-request timeout in seconds.
///
/// The backend runs the EVM once per argument combination, so a single
/// analysis can take a while.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// User-Agent sent with every analysis request.
pub const USER_AGENT: &str = concat!("taint_analyze/", env!("CARGO_PKG_VERSION"));

// Multipart field names
pub const FIELD_TYPE: &str = "type";
pub const FIELD_CODE: &str = "code";
pub const FIELD_INPUT: &str = "input";
/// Contract name; only sent when the caller provides one.
pub const FIELD_NAME: &str = "name";

// Page element identifiers
/// Element receiving the rendered report.
pub const RESULT_ELEMENT_ID: &str = "analyze_result";
pub const SOLIDITY_CODE_ID: &str = "solidity";
pub const SOLIDITY_INPUT_ID: &str = "solidity_input";
pub const BYTECODE_CODE_ID: &str = "bytecode";
pub const BYTECODE_INPUT_ID: &str = "bytecode_input";
pub const SOLIDITY_LABEL_ID: &str = "solidity_analyze";
pub const BYTECODE_LABEL_ID: &str = "bytecode_analyze";

/// Text shown on a status label before any submission.
pub const DEFAULT_LABEL_TEXT: &str = "Analyze";

/// Transient status text written while a request is in flight.
pub const ANALYZING_TEXT: &str = "Analyzing";

/// Message of the blocking alert raised on a failed exchange.
pub const ALERT_MESSAGE: &str = "Problem retrieving XML data";

/// Runtime bytecode of the bundled overflow demo contract.
pub const DEMO_CODE: &str = "608060405260043610610062576000357c0100000000000000000000000000000000000000000000000000000000900463ffffffff16806333a581d214610067578063710419ab14610092578063b79e70ed146100dd578063c1b9e80314610128575b600080fd5b34801561007357600080fd5b5061007c610173565b6040518082815260200191505060405180910390f35b34801561009e57600080fd5b506100c76004803603810190808035906020019092919080359060200190929190505050610197565b6040518082815260200191505060405180910390f35b3480156100e957600080fd5b5061011260048036038101908080359060200190929190803590602001909291905050506101d3565b6040518082815260200191505060405180910390f35b34801561013457600080fd5b5061015d60048036038101908080359060200190929190803590602001909291905050506101f7565b6040518082815260200191505060405180910390f35b7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff81565b6000817fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff038311156101c857600080fd5b818301905092915050565b6000828284011015156101ed5781830192508290506101f1565b8290505b92915050565b600080828401905083811015151561020b57fe5b80915050929150505600a165627a7a72305820fd40ac0f90592eaf3991dc1806889e89f3b6e2447ce5f5e8a2e0f25f3cc648910029e";

/// Call data for the demo contract: selector `b79e70ed` with `(2^256 - 1, 2)`.
pub const DEMO_INPUT: &str = "b79e70edffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff0000000000000000000000000000000000000000000000000000000000000002";
