// src/noyau/erreur.rs

use thiserror::Error;

/// Erreurs du noyau d’évaluation.
///
/// `EntreeVide` n’est pas une vraie faute : l’appelant la traite comme un no-op
/// (tampon et résultat inchangés).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("entrée vide")]
    EntreeVide,

    /// Caractère ou nom hors liste blanche : l’entrée n’est jamais évaluée.
    #[error("grammaire invalide: {0}")]
    GrammaireInvalide(String),

    /// Expression mal formée ou résultat non fini (±∞, NaN).
    #[error("échec d’évaluation: {0}")]
    EchecEvaluation(String),
}

impl ErreurEval {
    pub(crate) fn echec(msg: impl Into<String>) -> Self {
        ErreurEval::EchecEvaluation(msg.into())
    }
}
