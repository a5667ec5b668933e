//! Noyau - évaluation (pipeline réel)
//!
//! préparation (glyphes, pourcent, liste blanche) -> jetons -> RPN -> Expr
//!        -> mode degrés (optionnel) -> eval f64 -> contrôle fini -> arrondi 12 décimales
//!
//! Aucune évaluation dynamique : seul l’AST de la liste blanche est calculé.

use super::erreur::ErreurEval;
use super::jetons::{format_tokens, tokenize};
use super::preparation::preparer;
use super::rpn::{from_rpn, to_rpn};

/// Arrondi : 12 décimales.
const ECHELLE_ARRONDI: f64 = 1e12;

/// Passes supplémentaires au plus pour atteindre le point fixe de l’arrondi.
const PASSES_ARRONDI_MAX: usize = 8;

/// Options d’évaluation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Arguments de sin/cos/tan en degrés.
    pub mode_degres: bool,
}

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub prepare: String,
    pub jetons: String,
    pub rpn: String,
    pub arbre: String,
}

/// API publique : évalue une expression brute et retourne le nombre normalisé.
pub fn evaluer(brut: &str, options: &Options) -> Result<f64, ErreurEval> {
    evaluer_avec_demarche(brut, options).map(|(v, _d)| v)
}

/// Même pipeline, avec la démarche (chaîne préparée, jetons, RPN, arbre).
pub fn evaluer_avec_demarche(
    brut: &str,
    options: &Options,
) -> Result<(f64, DemarcheNoyau), ErreurEval> {
    // 1) Préparation (glyphes, pourcent, liste blanche)
    let prepare = preparer(brut)?;

    // 2) Jetons
    let jetons = tokenize(&prepare)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    // 4) AST (Expr) + mode degrés
    let mut expr = from_rpn(&rpn)?;
    if options.mode_degres {
        expr = expr.en_degres();
    }

    // 5) Valeur brute : ±∞ / NaN refusés
    let brute = expr.eval();
    if !brute.is_finite() {
        return Err(ErreurEval::echec(format!("résultat non fini ({brute})")));
    }

    // 6) Arrondi anti-bruit flottant
    let v = arrondir_12(brute);
    tracing::debug!(brut, %expr, brute, v, "évaluation");

    let d = DemarcheNoyau {
        prepare,
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
        arbre: expr.to_string(),
    };

    Ok((v, d))
}

/// Arrondi à 12 décimales (×1e12, round, ÷1e12), tant que le produit est fini.
///
/// Au-delà de 2^51, ÷1e12 puis ×1e12 peut décaler d’un ulp : on réapplique
/// jusqu’au point fixe, pour que réévaluer un résultat redonne le même nombre.
pub fn arrondir_12(v: f64) -> f64 {
    let mut r = arrondi_simple(v);
    for _ in 0..PASSES_ARRONDI_MAX {
        let s = arrondi_simple(r);
        if s == r {
            break;
        }
        r = s;
    }
    // -0 => 0
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

fn arrondi_simple(v: f64) -> f64 {
    let scaled = v * ECHELLE_ARRONDI;
    if !scaled.is_finite() {
        return v;
    }
    scaled.round() / ECHELLE_ARRONDI
}
