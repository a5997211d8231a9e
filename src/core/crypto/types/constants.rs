/*!
Constants for the algorithm implementations.

This module defines default cipher names, encoded lengths and the salt
alphabet used by the individual implementations.
*/

/// Digest implementation constants
pub mod digest {
    /// Cipher used when none has been selected
    pub const DEFAULT_CIPHER: &str = "SHA";
}

/// Legacy truncated digest constants
pub mod legacy {
    /// Raw digest length that gets the short encoding
    pub const SHORT_DIGEST_BYTES: usize = 16;

    /// Encoded length for 16-byte digests
    pub const SHORT_ENCODED_LEN: usize = 20;

    /// Encoded length for every other digest length, including 32 and 64 bytes
    pub const LONG_ENCODED_LEN: usize = 24;
}

/// Unix crypt constants
pub mod unix {
    /// Number of salt characters at the start of every output
    pub const SALT_LENGTH: usize = 2;

    /// Total length of an encoded value, salt included
    pub const ENCODED_LEN: usize = 13;

    /// Characters allowed in a salt
    pub const SALT_CHARS: &[u8; 64] =
        b"./0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
}
