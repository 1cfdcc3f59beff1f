//! Cipher configuration.
//!
//! A [`CipherConfig`] can be built in code or loaded from a `[cipher]` TOML
//! table. Every field is optional in TOML and falls back to its default.
//!
//! ```toml
//! [cipher]
//! filler = "X"
//! orientation = "column"
//! max_key_attempts = 10000
//! ```

use serde::{Deserialize, Serialize};

use crate::error::HillCryptError;

/// Default padding letter.
pub const DEFAULT_FILLER: char = 'X';

/// Default cap on random key samples before giving up.
pub const DEFAULT_MAX_KEY_ATTEMPTS: u32 = 10_000;

/// How a block vector is multiplied by the key matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockOrientation {
    /// Column vector on the right: `result[i] = Σ_j v[j] * K[i][j]`.
    #[default]
    Column,
    /// Row vector on the left: `result[i] = Σ_j v[j] * K[j][i]`.
    Row,
}

/// Tunable parameters of a [`HillCipher`](crate::HillCipher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// Letter appended to fill the last block.
    pub filler: char,
    /// Vector orientation used by both encryption and decryption.
    pub orientation: BlockOrientation,
    /// Maximum number of random matrices sampled when generating a key.
    pub max_key_attempts: u32,
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER,
            orientation: BlockOrientation::Column,
            max_key_attempts: DEFAULT_MAX_KEY_ATTEMPTS,
        }
    }
}

impl CipherConfig {
    /// Parses a configuration from the `[cipher]` table of a TOML document.
    ///
    /// A missing table yields the defaults. The result is validated.
    ///
    /// # Errors
    /// Returns [`HillCryptError::ParseFailure`] for malformed TOML and
    /// [`HillCryptError::InvalidConfig`] if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use hillcrypt::config::{BlockOrientation, CipherConfig};
    ///
    /// let cfg = CipherConfig::from_toml("[cipher]\norientation = \"row\"\n").unwrap();
    /// assert_eq!(cfg.orientation, BlockOrientation::Row);
    /// assert_eq!(cfg.filler, 'X');
    /// ```
    pub fn from_toml(s: &str) -> Result<Self, HillCryptError> {
        #[derive(Deserialize)]
        struct Root {
            #[serde(default)]
            cipher: CipherConfig,
        }

        let raw: Root =
            toml::from_str(s).map_err(|e| HillCryptError::ParseFailure(e.to_string()))?;
        let config = raw.cipher.normalized();
        config.validate()?;
        Ok(config)
    }

    /// Checks that every field is usable.
    ///
    /// # Errors
    /// Returns [`HillCryptError::InvalidConfig`] if the filler is not an ASCII
    /// letter or `max_key_attempts` is zero.
    pub fn validate(&self) -> Result<(), HillCryptError> {
        if !self.filler.is_ascii_alphabetic() {
            return Err(HillCryptError::InvalidConfig(format!(
                "filler must be an ASCII letter, got {:?}",
                self.filler
            )));
        }
        if self.max_key_attempts == 0 {
            return Err(HillCryptError::InvalidConfig(
                "max_key_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a copy with the filler uppercased.
    pub(crate) fn normalized(mut self) -> Self {
        self.filler = self.filler.to_ascii_uppercase();
        self
    }
}
