//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la session de calcul (tampon, résultat, mémoire, voix) et
//! traduire les gestes de l’utilisateur (bouton, clavier) en événements de session.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session`.
//! - Clavier : chiffres, point, opérateurs, parenthèses, Entrée, Retour arrière, Échap.

use crate::config::Config;
use crate::parole::SortieVocale;
use crate::session::{Action, EcranMemoire, Session};

/// Caractères acceptés directement depuis le clavier physique.
const TOUCHES_CLAVIER: &str = "0123456789.+-*/()%";

/// Touche spéciale du clavier physique.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToucheSpeciale {
    Entree,
    Retour,
    Echap,
}

pub struct AppCalc {
    pub session: Session<EcranMemoire, Box<dyn SortieVocale>>,
}

impl AppCalc {
    pub fn new(config: &Config, voix: Box<dyn SortieVocale>) -> Self {
        tracing::info!(
            langue = %config.langue,
            mode_degres = config.mode_degres,
            voix_active = config.voix_active,
            "session démarrée"
        );
        Self {
            session: Session::new(config.reglages(), EcranMemoire::default(), voix),
        }
    }

    /* ------------------------ Gestes ------------------------ */

    /// Texte tapé au clavier : seuls les caractères de calculatrice sont retenus.
    pub fn texte_clavier(&mut self, texte: &str) {
        for c in texte.chars() {
            if TOUCHES_CLAVIER.contains(c) {
                self.session.appuyer(c.encode_utf8(&mut [0; 4]));
            }
        }
    }

    pub fn touche_speciale(&mut self, touche: ToucheSpeciale) {
        let action = match touche {
            ToucheSpeciale::Entree => Action::Evaluer,
            ToucheSpeciale::Retour => Action::Retour,
            ToucheSpeciale::Echap => Action::Effacer,
        };
        self.session.action(action);
    }

    /// Case "voix" : activer annonce l’activation, couper est silencieux.
    pub fn regler_voix(&mut self, active: bool) {
        if active {
            self.session.activer_voix();
        } else {
            self.session.couper_voix();
        }
    }
}
