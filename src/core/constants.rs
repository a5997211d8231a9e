/*!
Registry-wide constants.

These values are part of the externally visible configuration contract
and must not change between releases.
*/

/// Name of the configuration section holding the algorithm table
pub const ALGORITHM_SECTION: &str = "algorithm";

/// Table key consulted when a requested name has no entry of its own
pub const DEFAULT_KEY: &str = "default";

/// Implementation identifier that disables an entry (compared case-insensitively)
pub const DISABLED: &str = "none";
