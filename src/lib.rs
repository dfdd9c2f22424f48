//! Fixed-size block columnar transposition cipher.
//!
//! A message is chunked into blocks of `rows * cols` characters. Each block
//! is written into a rectangular grid in row-major order (short final blocks
//! are padded with `'A'`), then read back out in column-major order to
//! produce the ciphertext. Decryption loads each ciphertext block
//! column-major, reads it back row-major, and strips the trailing padding.
//!
//! The grid dimensions are the key: decryption only succeeds with the same
//! `rows`/`cols` pair used for encryption.
//!
//! This is a classical transposition cipher: the permutation of character
//! positions is the entire transformation. It provides no diffusion or
//! confusion and is **not** suitable for protecting data against a
//! motivated attacker.
//!
//! # Architecture
//!
//! ```text
//! Grid         (R x C character block — row-major/column-major fill + read)
//!     ↕ one block at a time
//! BlockCipher  (chunking, padding, pad stripping, dimension validation)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt a message with a 2x3 grid:
//!
//! ```
//! use blockcipher::BlockCipher;
//!
//! let mut cipher = BlockCipher::new(2, 3).unwrap();
//!
//! let encrypted = cipher.encrypt("HELLO");
//! assert_eq!(encrypted, "HLEOLA");
//!
//! let decrypted = cipher.decrypt(&encrypted);
//! assert_eq!(decrypted, "HELLO");
//! ```
//!
//! Dimensions must be positive:
//!
//! ```
//! use blockcipher::BlockCipher;
//!
//! assert!(BlockCipher::new(0, 3).is_err());
//! assert!(BlockCipher::new(3, -1).is_err());
//! ```
//!
//! # Known limitation
//!
//! Decryption cannot distinguish injected padding from genuine trailing
//! `'A'` characters in the original message, so messages that end in `'A'`
//! lose those characters on the round trip. See
//! [`BlockCipher::decrypt`] for details.

#![deny(clippy::all)]

pub mod error;

mod blockcipher;
mod grid;

pub use blockcipher::BlockCipher;
pub use grid::Grid;
