//! Noyau d’évaluation (flottant, liste blanche)
//!
//! Organisation interne :
//! - preparation.rs : glyphes × ÷ π, pourcent, liste blanche
//! - jetons.rs      : tokenisation
//! - rpn.rs         : shunting-yard + construction Expr
//! - expr.rs        : AST f64 + mode degrés
//! - format.rs      : texte d’un résultat (entier, décimal, scientifique)
//! - erreur.rs      : EntreeVide / GrammaireInvalide / EchecEvaluation
//! - eval.rs        : pipeline complet + arrondi 12 décimales

pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod preparation;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{arrondir_12, evaluer, evaluer_avec_demarche, DemarcheNoyau, Options};
pub use format::format_nombre;
