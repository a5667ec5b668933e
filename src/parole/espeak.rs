// src/parole/espeak.rs
//
// Voix native via espeak-ng (processus enfant).
// - une annonce = un processus
// - l’annonce précédente encore en cours est tuée avant de lancer la suivante
// - espeak-ng absent : avertissement une seule fois, puis silence

use std::process::{Child, Command, Stdio};

use super::{SortieVocale, DEBIT_DEFAUT};
use crate::mots::Langue;

/// Débit nominal espeak-ng (mots par minute) pour un multiplicateur de 1.0.
const MOTS_PAR_MINUTE: f32 = 175.0;

#[derive(Debug)]
pub struct Espeak {
    commande: String,
    debit: f32,
    en_cours: Option<Child>,
    indisponible: bool,
}

impl Espeak {
    pub fn new(commande: impl Into<String>, debit: f32) -> Self {
        Self {
            commande: commande.into(),
            debit: if debit > 0.0 { debit } else { DEBIT_DEFAUT },
            en_cours: None,
            indisponible: false,
        }
    }

    /// Attend la fin de l’annonce en cours (mode ligne de commande).
    pub fn attendre(&mut self) {
        if let Some(mut child) = self.en_cours.take() {
            if let Err(e) = child.wait() {
                tracing::debug!(error = %e, "attente de l’annonce");
            }
        }
    }

    fn couper_precedente(&mut self) {
        if let Some(mut child) = self.en_cours.take() {
            match child.try_wait() {
                Ok(Some(_)) => {}
                _ => {
                    if let Err(e) = child.kill() {
                        tracing::debug!(error = %e, "annonce précédente déjà terminée");
                    }
                    if let Err(e) = child.wait() {
                        tracing::debug!(error = %e, "attente de l’annonce coupée");
                    }
                }
            }
        }
    }
}

impl SortieVocale for Espeak {
    fn annoncer(&mut self, texte: &str, langue: Langue) {
        if self.indisponible || texte.trim().is_empty() {
            return;
        }

        self.couper_precedente();

        let mpm = (MOTS_PAR_MINUTE * self.debit).round() as u32;
        let lancement = Command::new(&self.commande)
            .arg("-v")
            .arg(langue.voix_espeak())
            .arg("-s")
            .arg(mpm.to_string())
            // "-3" ou "-1e-7" ne doivent pas être pris pour des options
            .arg("--")
            .arg(texte)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();

        match lancement {
            Ok(child) => {
                tracing::debug!(texte, %langue, pid = child.id(), "annonce");
                self.en_cours = Some(child);
            }
            Err(e) => {
                tracing::warn!(commande = %self.commande, error = %e, "synthèse vocale indisponible");
                self.indisponible = true;
            }
        }
    }
}

impl Drop for Espeak {
    fn drop(&mut self) {
        self.couper_precedente();
    }
}
