//! HillCipher: the public encrypt/decrypt engine.
//!
//! Binds a validated [`KeyMatrix`] to a [`BlockCodec`]. An instance is
//! immutable after construction and can be shared freely between threads.

use log::trace;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::block_codec::BlockCodec;
use crate::config::CipherConfig;
use crate::error::HillCryptError;
use crate::key_matrix::KeyMatrix;
use crate::utils::alphabet;
use crate::utils::matrix::SquareMatrix;

/// Ciphertext together with the exact number of filler letters appended
/// during encryption.
///
/// Decrypting through [`HillCipher::decrypt_padded`] removes exactly
/// `padding` letters, so plaintexts ending in the filler letter survive the
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaddedCiphertext {
    /// Uppercase ciphertext, a whole number of blocks.
    pub text: String,
    /// Filler letters appended to the plaintext, in `[0, n-1]`.
    pub padding: usize,
}

/// Hill cipher over the 26-letter Latin alphabet.
///
/// Encrypts by multiplying each n-letter block by the key matrix modulo 26
/// and decrypts with the inverse key computed at construction.
///
/// This is a classical teaching cipher. It is linear and falls to a
/// known-plaintext attack with n blocks of matching text; do not use it to
/// protect anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HillCipher {
    key: KeyMatrix,
    codec: BlockCodec,
    config: CipherConfig,
}

impl HillCipher {
    /// Creates a cipher from an explicit key, or a random one when `key` is `None`.
    ///
    /// Uses the default [`CipherConfig`] and the thread-local RNG for
    /// random keys.
    ///
    /// # Parameters
    /// - `size`: Key dimension n, in `[2, 8]`.
    /// - `key`: n rows of n entries, or `None` to generate an invertible key.
    ///
    /// # Errors
    /// - [`HillCryptError::UnsupportedDimension`] if `size` is out of range.
    /// - [`HillCryptError::DimensionMismatch`] if `key` is not `size`×`size`.
    /// - [`HillCryptError::NotInvertible`] if `key` is not invertible mod 26.
    /// - [`HillCryptError::KeyGenerationExhausted`] if random sampling gives up.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::HillCipher;
    ///
    /// let cipher = HillCipher::new(2, Some(&[[3, 3], [2, 5]][..])).unwrap();
    /// assert_eq!(cipher.encrypt("help").unwrap(), "HIAT");
    ///
    /// let rows = vec![vec![3, 3], vec![2, 5]];
    /// let same = HillCipher::new(2, Some(rows.as_slice())).unwrap();
    /// assert_eq!(same, cipher);
    ///
    /// let random = HillCipher::new(3, None::<&[[i64; 3]]>).unwrap();
    /// assert_eq!(random.size(), 3);
    /// ```
    pub fn new<R: AsRef<[i64]>>(size: usize, key: Option<&[R]>) -> Result<Self, HillCryptError> {
        Self::with_config(size, key, CipherConfig::default(), &mut rand::thread_rng())
    }

    /// Creates a cipher from an explicit key with the default configuration.
    ///
    /// # Errors
    /// Same as [`new`](Self::new), minus key generation.
    pub fn with_key<R: AsRef<[i64]>>(size: usize, rows: &[R]) -> Result<Self, HillCryptError> {
        let config = CipherConfig::default();
        Self::assemble(KeyMatrix::new(size, rows)?, config)
    }

    /// Creates a cipher with a random invertible key drawn from `rng`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::HillCipher;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let a = HillCipher::random(3, &mut StdRng::seed_from_u64(42)).unwrap();
    /// let b = HillCipher::random(3, &mut StdRng::seed_from_u64(42)).unwrap();
    /// assert_eq!(a.key_matrix(), b.key_matrix());
    /// ```
    pub fn random<G: Rng + ?Sized>(size: usize, rng: &mut G) -> Result<Self, HillCryptError> {
        Self::with_config(size, None::<&[Vec<i64>]>, CipherConfig::default(), rng)
    }

    /// Creates a cipher with an explicit configuration.
    ///
    /// `rng` is only consulted when `key` is `None`, and then at most
    /// `config.max_key_attempts` candidates are drawn.
    ///
    /// # Errors
    /// [`HillCryptError::InvalidConfig`] if `config` fails validation, plus
    /// everything [`new`](Self::new) can return.
    pub fn with_config<R: AsRef<[i64]>, G: Rng + ?Sized>(
        size: usize,
        key: Option<&[R]>,
        config: CipherConfig,
        rng: &mut G,
    ) -> Result<Self, HillCryptError> {
        let config = config.normalized();
        config.validate()?;
        let key = match key {
            Some(rows) => KeyMatrix::new(size, rows)?,
            None => KeyMatrix::generate(size, rng, config.max_key_attempts)?,
        };
        Self::assemble(key, config)
    }

    /// Creates a cipher around an already-validated key.
    pub fn from_key_matrix(key: KeyMatrix, config: CipherConfig) -> Result<Self, HillCryptError> {
        let config = config.normalized();
        config.validate()?;
        Self::assemble(key, config)
    }

    fn assemble(key: KeyMatrix, config: CipherConfig) -> Result<Self, HillCryptError> {
        let codec = BlockCodec::new(key.size(), config.filler, config.orientation)?;
        Ok(HillCipher { key, codec, config })
    }

    /// Key dimension n (letters per block).
    pub fn size(&self) -> usize {
        self.key.size()
    }

    /// The validated key matrix.
    pub fn key_matrix(&self) -> &SquareMatrix {
        self.key.matrix()
    }

    /// The inverse key matrix used for decryption.
    pub fn inverse_key_matrix(&self) -> &SquareMatrix {
        self.key.inverse()
    }

    /// The validated key together with its inverse.
    pub fn key(&self) -> &KeyMatrix {
        &self.key
    }

    /// The configuration this cipher was built with.
    pub fn config(&self) -> &CipherConfig {
        &self.config
    }

    /// Encrypts `plaintext`.
    ///
    /// The text is uppercased, whitespace is removed and the filler letter
    /// is appended up to a whole number of blocks.
    ///
    /// # Errors
    /// Returns [`HillCryptError::InvalidCharacter`] if `plaintext` contains
    /// anything other than ASCII letters and whitespace.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, HillCryptError> {
        Ok(self.encrypt_padded(plaintext)?.text)
    }

    /// Decrypts `ciphertext` and strips trailing filler letters.
    ///
    /// Stripping is lexical: if the original message ended with the filler
    /// letter, those letters are lost too. Use
    /// [`decrypt_padded`](Self::decrypt_padded) when that matters.
    ///
    /// # Errors
    /// - [`HillCryptError::InvalidCharacter`] for characters outside the alphabet.
    /// - [`HillCryptError::DimensionMismatch`] if the letter count is not a
    ///   multiple of the block size.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::HillCipher;
    ///
    /// let cipher = HillCipher::with_key(3, &[[6, 24, 1], [13, 16, 10], [20, 17, 15]]).unwrap();
    /// let ct = cipher.encrypt("act now").unwrap();
    /// assert_eq!(cipher.decrypt(&ct).unwrap(), "ACTNOW");
    /// ```
    pub fn decrypt(&self, ciphertext: &str) -> Result<String, HillCryptError> {
        let plain = self.decrypt_blocks(ciphertext)?;
        Ok(self.codec.strip_filler(&plain).to_string())
    }

    /// Encrypts `plaintext` and records how much padding was added.
    ///
    /// # Errors
    /// Same as [`encrypt`](Self::encrypt).
    pub fn encrypt_padded(&self, plaintext: &str) -> Result<PaddedCiphertext, HillCryptError> {
        let normalized = self.codec.normalize(plaintext)?;
        let encrypted = self.codec.apply(normalized.indices(), self.key.matrix())?;
        trace!(
            "Encrypted {} letters ({} padding) with {}x{} key",
            encrypted.len(),
            normalized.padding(),
            self.size(),
            self.size()
        );
        Ok(PaddedCiphertext {
            text: alphabet::indices_to_text(&encrypted),
            padding: normalized.padding(),
        })
    }

    /// Decrypts a [`PaddedCiphertext`], removing exactly its recorded padding.
    ///
    /// # Errors
    /// - [`HillCryptError::InvalidPadding`] if `padding` is not below the block
    ///   size or exceeds the text length.
    /// - Everything [`decrypt`](Self::decrypt) can return.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::HillCipher;
    ///
    /// let cipher = HillCipher::with_key(2, &[[3, 3], [2, 5]]).unwrap();
    /// let sealed = cipher.encrypt_padded("box").unwrap();
    /// assert_eq!(sealed.padding, 1);
    /// assert_eq!(cipher.decrypt_padded(&sealed).unwrap(), "BOX");
    /// ```
    pub fn decrypt_padded(&self, ciphertext: &PaddedCiphertext) -> Result<String, HillCryptError> {
        if ciphertext.padding >= self.size() {
            return Err(HillCryptError::InvalidPadding {
                padding: ciphertext.padding,
                block_size: self.size(),
            });
        }
        let mut plain = self.decrypt_blocks(&ciphertext.text)?;
        if ciphertext.padding > plain.len() {
            return Err(HillCryptError::InvalidPadding {
                padding: ciphertext.padding,
                block_size: self.size(),
            });
        }
        plain.truncate(plain.len() - ciphertext.padding);
        Ok(plain)
    }

    fn decrypt_blocks(&self, ciphertext: &str) -> Result<String, HillCryptError> {
        let indices = self.codec.blocks_exact(ciphertext)?;
        let decrypted = self.codec.apply(&indices, self.key.inverse())?;
        trace!("Decrypted {} letters", decrypted.len());
        Ok(alphabet::indices_to_text(&decrypted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BlockOrientation;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn help_key() -> Vec<Vec<i64>> {
        vec![vec![3, 3], vec![2, 5]]
    }

    fn row_config() -> CipherConfig {
        CipherConfig {
            orientation: BlockOrientation::Row,
            ..CipherConfig::default()
        }
    }

    #[test]
    fn test_encrypt_help_column() {
        let cipher = HillCipher::new(2, Some(help_key().as_slice())).unwrap();
        assert_eq!(cipher.encrypt("HELP").unwrap(), "HIAT");
        assert_eq!(cipher.decrypt("HIAT").unwrap(), "HELP");
    }

    #[test]
    fn test_encrypt_help_row() {
        let mut rng = StdRng::seed_from_u64(0);
        let cipher =
            HillCipher::with_config(2, Some(help_key().as_slice()), row_config(), &mut rng)
                .unwrap();
        assert_eq!(cipher.encrypt("HELP").unwrap(), "DPLE");
        assert_eq!(cipher.decrypt("DPLE").unwrap(), "HELP");
    }

    #[test]
    fn test_rejects_singular_key() {
        let key = vec![vec![2, 4], vec![1, 2]];
        assert_eq!(
            HillCipher::new(2, Some(key.as_slice())),
            Err(HillCryptError::NotInvertible { determinant: 0 })
        );
    }

    #[test]
    fn test_random_key_roundtrip() {
        let mut rng = StdRng::seed_from_u64(11);
        let cipher = HillCipher::random(4, &mut rng).unwrap();
        let ct = cipher.encrypt("the quick brown fox jumps").unwrap();
        assert_eq!(ct.len() % 4, 0);
        assert_eq!(cipher.decrypt(&ct).unwrap(), "THEQUICKBROWNFOXJUMPS");
    }

    #[test]
    fn test_invalid_character_is_fatal() {
        let cipher = HillCipher::with_key(2, &help_key()).unwrap();
        assert_eq!(
            cipher.encrypt("HELP 2"),
            Err(HillCryptError::InvalidCharacter {
                character: '2',
                position: 5
            })
        );
        assert!(matches!(
            cipher.decrypt("HI-AT"),
            Err(HillCryptError::InvalidCharacter { character: '-', .. })
        ));
    }

    #[test]
    fn test_decrypt_ragged_ciphertext() {
        let cipher = HillCipher::with_key(2, &help_key()).unwrap();
        assert_eq!(
            cipher.decrypt("HIA"),
            Err(HillCryptError::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_lexical_strip_loses_trailing_filler() {
        let cipher = HillCipher::with_key(2, &help_key()).unwrap();
        let ct = cipher.encrypt("box").unwrap();
        assert_eq!(cipher.decrypt(&ct).unwrap(), "BO");
    }

    #[test]
    fn test_padded_roundtrip_keeps_trailing_filler() {
        let key = [[6, 24, 1], [13, 16, 10], [20, 17, 15]];
        let cipher = HillCipher::with_key(3, &key).unwrap();
        for text in ["RELAX", "XX", "SIXTYSIX", ""] {
            let sealed = cipher.encrypt_padded(text).unwrap();
            assert!(sealed.padding < 3);
            assert_eq!(cipher.decrypt_padded(&sealed).unwrap(), text);
        }
    }

    #[test]
    fn test_decrypt_padded_rejects_bad_padding() {
        let cipher = HillCipher::with_key(2, &help_key()).unwrap();
        let too_big = PaddedCiphertext {
            text: "HIAT".to_string(),
            padding: 2,
        };
        assert_eq!(
            cipher.decrypt_padded(&too_big),
            Err(HillCryptError::InvalidPadding {
                padding: 2,
                block_size: 2
            })
        );
        let empty = PaddedCiphertext {
            text: String::new(),
            padding: 1,
        };
        assert!(matches!(
            cipher.decrypt_padded(&empty),
            Err(HillCryptError::InvalidPadding { .. })
        ));
    }

    #[test]
    fn test_empty_text() {
        let cipher = HillCipher::with_key(2, &help_key()).unwrap();
        assert_eq!(cipher.encrypt("").unwrap(), "");
        assert_eq!(cipher.decrypt("").unwrap(), "");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = CipherConfig {
            filler: '9',
            ..CipherConfig::default()
        };
        assert!(matches!(
            HillCipher::with_config(2, Some(help_key().as_slice()), config, &mut rng),
            Err(HillCryptError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_constructors_take_any_row_type() {
        let array_rows = [[3, 3], [2, 5]];
        let slice_rows: [&[i64]; 2] = [&[3, 3], &[2, 5]];
        let mut rng = StdRng::seed_from_u64(0);

        let from_vec = HillCipher::new(2, Some(help_key().as_slice())).unwrap();
        let from_array = HillCipher::new(2, Some(&array_rows[..])).unwrap();
        let from_slices = HillCipher::new(2, Some(&slice_rows[..])).unwrap();
        let configured =
            HillCipher::with_config(2, Some(&array_rows[..]), row_config(), &mut rng).unwrap();

        assert_eq!(from_array, from_vec);
        assert_eq!(from_slices, from_vec);
        assert_eq!(HillCipher::with_key(2, &array_rows).unwrap(), from_vec);
        assert_eq!(configured.key_matrix(), from_vec.key_matrix());
        assert_eq!(configured.encrypt("HELP").unwrap(), "DPLE");
    }

    #[test]
    fn test_with_config_respects_attempt_cap() {
        let config = CipherConfig {
            max_key_attempts: 1,
            ..CipherConfig::default()
        };

        // seed 2024 draws a singular 3x3 candidate first
        let mut rng = StdRng::seed_from_u64(2024);
        assert_eq!(
            HillCipher::with_config(3, None::<&[[i64; 3]]>, config.clone(), &mut rng),
            Err(HillCryptError::KeyGenerationExhausted { attempts: 1 })
        );

        let mut constant = StepRng::new(0, 0);
        assert_eq!(
            HillCipher::with_config(2, None::<&[[i64; 2]]>, config, &mut constant),
            Err(HillCryptError::KeyGenerationExhausted { attempts: 1 })
        );

        // The same seed succeeds once a second attempt is allowed
        let mut rng = StdRng::seed_from_u64(2024);
        let two = CipherConfig {
            max_key_attempts: 2,
            ..CipherConfig::default()
        };
        let cipher = HillCipher::with_config(3, None::<&[[i64; 3]]>, two, &mut rng).unwrap();
        assert_eq!(cipher.key().determinant(), -4419);
    }

    #[test]
    fn test_from_key_matrix() {
        let key = KeyMatrix::new(2, &help_key()).unwrap();
        let cipher = HillCipher::from_key_matrix(key.clone(), CipherConfig::default()).unwrap();
        assert_eq!(cipher.key(), &key);
        assert_eq!(cipher.inverse_key_matrix().to_rows(), vec![vec![15, 17], vec![20, 9]]);
    }

    #[test]
    fn test_cipher_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HillCipher>();
    }
}
