// src/parole/navigateur.rs
//
// Voix web via window.speechSynthesis.
// cancel() puis speak() : la nouvelle phrase remplace celle en cours.

use web_sys::{window, SpeechSynthesis, SpeechSynthesisUtterance};

use super::SortieVocale;
use crate::mots::Langue;

pub struct Navigateur {
    synthese: Option<SpeechSynthesis>,
    debit: f32,
}

impl Navigateur {
    pub fn new(debit: f32) -> Self {
        let synthese = window().and_then(|w| w.speech_synthesis().ok());
        if synthese.is_none() {
            tracing::warn!("speechSynthesis indisponible dans ce navigateur");
        }
        Self { synthese, debit }
    }
}

impl SortieVocale for Navigateur {
    fn annoncer(&mut self, texte: &str, langue: Langue) {
        let Some(synthese) = &self.synthese else {
            return;
        };

        synthese.cancel();

        match SpeechSynthesisUtterance::new_with_text(texte) {
            Ok(u) => {
                u.set_lang(langue.etiquette());
                u.set_rate(self.debit);
                synthese.speak(&u);
            }
            Err(e) => tracing::warn!(?e, "énoncé refusé par le navigateur"),
        }
    }
}
