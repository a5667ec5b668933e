//! Configuration (fichier TOML + valeurs par défaut).
//!
//! Emplacement natif : `<config_dir>/calculatrice_parlante/config.toml`.
//! Fichier absent : les valeurs par défaut sont écrites. En wasm : défauts seulement.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::mots::Langue;
use crate::parole::DEBIT_DEFAUT;
use crate::session::Reglages;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub langue: Langue,
    pub mode_degres: bool,
    pub voix_active: bool,
    /// Multiplicateur de débit de la voix.
    pub debit_voix: f32,
    /// Programme de synthèse vocale (natif).
    pub commande_voix: String,
    /// Police à charger (glyphes persans) ; sinon recherche dans les polices système.
    pub police: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            langue: Langue::Fa,
            mode_degres: false,
            voix_active: true,
            debit_voix: DEBIT_DEFAUT,
            commande_voix: "espeak-ng".to_string(),
            police: None,
        }
    }
}

impl Config {
    pub fn reglages(&self) -> Reglages {
        Reglages {
            langue: self.langue,
            mode_degres: self.mode_degres,
            voix_active: self.voix_active,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use fichier::{chemin_par_defaut, ErreurConfig};

#[cfg(not(target_arch = "wasm32"))]
mod fichier {
    use super::Config;
    use std::fs;
    use std::path::{Path, PathBuf};
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum ErreurConfig {
        #[error("lecture/écriture de {chemin}: {source}")]
        Io {
            chemin: PathBuf,
            #[source]
            source: std::io::Error,
        },
        #[error("config invalide dans {chemin}: {source}")]
        Format {
            chemin: PathBuf,
            #[source]
            source: toml::de::Error,
        },
        #[error("sérialisation de la config: {0}")]
        Serialisation(#[from] toml::ser::Error),
    }

    pub fn chemin_par_defaut() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("calculatrice_parlante")
            .join("config.toml")
    }

    impl Config {
        /// Charge la config ; si le fichier n’existe pas, écrit et retourne les défauts.
        pub fn load(chemin: &Path) -> Result<Self, ErreurConfig> {
            if !chemin.exists() {
                let defaut = Config::default();
                defaut.save(chemin)?;
                tracing::info!(chemin = %chemin.display(), "config par défaut écrite");
                return Ok(defaut);
            }

            let contenu = fs::read_to_string(chemin).map_err(|source| ErreurConfig::Io {
                chemin: chemin.to_path_buf(),
                source,
            })?;
            Self::from_toml(&contenu).map_err(|source| ErreurConfig::Format {
                chemin: chemin.to_path_buf(),
                source,
            })
        }

        pub fn from_toml(contenu: &str) -> Result<Self, toml::de::Error> {
            toml::from_str(contenu)
        }

        pub fn save(&self, chemin: &Path) -> Result<(), ErreurConfig> {
            let io = |source| ErreurConfig::Io {
                chemin: chemin.to_path_buf(),
                source,
            };

            if let Some(parent) = chemin.parent() {
                fs::create_dir_all(parent).map_err(io)?;
            }
            let contenu = toml::to_string(self)?;
            fs::write(chemin, contenu).map_err(io)?;
            Ok(())
        }
    }
}
