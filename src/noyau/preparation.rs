// src/noyau/preparation.rs
//
// Préparation de l’entrée brute (avant jetons)
// --------------------------------------------
// - glyphes alternatifs : × ÷ − π  => * / - PI
// - pourcent            : 50%      => (50/100)
// - liste blanche       : chiffres, . + - * / % ( ) , espaces, sin cos tan sqrt pow log PI e
//
// Rien ici n’évalue : une entrée hors liste blanche ne va jamais plus loin.

use lazy_static::lazy_static;
use regex::Regex;

use super::erreur::ErreurEval;

lazy_static! {
    /// Suite maximale de chiffres / points collée à un '%'.
    static ref POURCENT: Regex = Regex::new(r"([0-9.]+)%").expect("regex pourcent");

    /// Liste blanche stricte (pas de lettres hors des noms autorisés).
    static ref GRAMMAIRE: Regex = Regex::new(
        r"^(?:[0-9.+\-*/%(),\s]|sin|cos|tan|sqrt|pow|log|PI|e)+$"
    ).expect("regex grammaire");
}

/// Normalise les glyphes de calculatrice vers la forme ASCII.
pub fn normaliser_symboles(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            'π' => out.push_str("PI"),
            _ => out.push(c),
        }
    }
    out
}

/// `n%` => `(n/100)`.
pub fn reecrire_pourcent(s: &str) -> String {
    POURCENT.replace_all(s, "(${1}/100)").into_owned()
}

/// Vérifie la liste blanche.
pub fn valider_grammaire(s: &str) -> Result<(), ErreurEval> {
    if GRAMMAIRE.is_match(s) {
        Ok(())
    } else {
        Err(ErreurEval::GrammaireInvalide(s.to_string()))
    }
}

/// Pipeline complet de préparation : retourne la chaîne prête pour `tokenize`.
pub fn preparer(brut: &str) -> Result<String, ErreurEval> {
    let s = brut.trim();
    if s.is_empty() {
        return Err(ErreurEval::EntreeVide);
    }

    let s = normaliser_symboles(s);
    let s = reecrire_pourcent(&s);
    valider_grammaire(&s)?;

    tracing::debug!(brut, prepare = %s, "entrée préparée");
    Ok(s)
}
