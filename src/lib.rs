//! Hill cipher engine over the 26-letter Latin alphabet.
//!
//! Text is split into blocks of n letters; each block is treated as a vector
//! of alphabet indices (`A` = 0 … `Z` = 25) and multiplied by an n×n key
//! matrix modulo 26. Decryption multiplies by the key's modular inverse,
//! which exists only when `gcd(det(K) mod 26, 26) == 1`.
//!
//! The Hill cipher is a classical teaching cipher. It is linear and is
//! broken by a known-plaintext attack; it provides no real confidentiality.
//!
//! # Architecture
//!
//! ```text
//! utils::{modular, matrix, alphabet}  (gcd, inverses, determinant, adjugate, A-Z mapping)
//!     ↓
//! KeyMatrix   (validates or samples an invertible key, caches its inverse)
//!     ↓
//! BlockCodec  (normalize + pad, partition into blocks, vector transform)
//!     ↓
//! HillCipher  (public encrypt / decrypt)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt with a fixed 2×2 key:
//!
//! ```
//! use hillcrypt::HillCipher;
//!
//! let cipher = HillCipher::with_key(2, &[[3, 3], [2, 5]]).unwrap();
//!
//! let ciphertext = cipher.encrypt("help").unwrap();
//! assert_eq!(ciphertext, "HIAT");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), "HELP");
//! ```
//!
//! Generate a reproducible random 3×3 key:
//!
//! ```
//! use hillcrypt::HillCipher;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(2024);
//! let cipher = HillCipher::random(3, &mut rng).unwrap();
//!
//! let sealed = cipher.encrypt_padded("relax").unwrap();
//! assert_eq!(cipher.decrypt_padded(&sealed).unwrap(), "RELAX");
//! ```

#![deny(clippy::all)]

pub mod block_codec;
pub mod config;
pub mod error;
pub mod key_matrix;
pub mod utils;

mod hillcrypt;

pub use config::{BlockOrientation, CipherConfig};
pub use error::HillCryptError;
pub use hillcrypt::{HillCipher, PaddedCiphertext};
pub use key_matrix::KeyMatrix;
