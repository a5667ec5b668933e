//! Sortie vocale (collaborateur externe du noyau)
//!
//! Contrat :
//! - `annoncer` ne bloque pas et ne renvoie rien : la voix est “au mieux”
//! - une nouvelle annonce coupe la précédente (une seule phrase active)
//!
//! Implémentations :
//! - Silence    : aucune voix (tests, `commande_voix` vide)
//! - Espeak     : natif, processus espeak-ng
//! - Navigateur : wasm, window.speechSynthesis

use crate::mots::Langue;

#[cfg(not(target_arch = "wasm32"))]
mod espeak;
#[cfg(target_arch = "wasm32")]
mod navigateur;

#[cfg(not(target_arch = "wasm32"))]
pub use espeak::Espeak;
#[cfg(target_arch = "wasm32")]
pub use navigateur::Navigateur;

/// Débit par défaut (un peu plus lent que la normale).
pub const DEBIT_DEFAUT: f32 = 0.95;

pub trait SortieVocale {
    fn annoncer(&mut self, texte: &str, langue: Langue);
}

impl<S: SortieVocale + ?Sized> SortieVocale for Box<S> {
    fn annoncer(&mut self, texte: &str, langue: Langue) {
        (**self).annoncer(texte, langue);
    }
}

/// Aucune voix.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Clone, Copy, Debug, Default)]
pub struct Silence;

impl SortieVocale for Silence {
    fn annoncer(&mut self, texte: &str, langue: Langue) {
        tracing::trace!(texte, %langue, "annonce ignorée (silence)");
    }
}

/// Voix native : espeak-ng (ou la commande configurée), Silence si la commande est vide.
#[cfg(not(target_arch = "wasm32"))]
pub fn voix_systeme(commande: &str, debit: f32) -> Box<dyn SortieVocale> {
    let commande = commande.trim();
    if commande.is_empty() {
        tracing::info!("commande vocale vide, voix désactivée");
        Box::new(Silence)
    } else {
        Box::new(Espeak::new(commande, debit))
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn commande_vide_donne_le_silence() {
        let mut v = voix_systeme("  ", 1.0);
        // rien n’est lancé, rien ne panique
        v.annoncer("سه", Langue::Fa);
        v.annoncer("-3", Langue::En);
    }

    #[test]
    fn commande_absente_reste_silencieuse() {
        let mut v = voix_systeme("commande-vocale-inexistante-xyz", 1.0);
        v.annoncer("one", Langue::En);
        v.annoncer("two", Langue::En);
    }
}
