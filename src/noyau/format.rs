// src/noyau/format.rs
//
// Texte d’un résultat flottant, tel qu’il est affiché puis ré-injecté dans le tampon.
// - entier => pas de ".0"
// - |v| >= 1e21 ou |v| < 1e-6 => notation scientifique "1e+21", "2.5e-7"
// - -0 => "0"

/// Au-delà : notation scientifique.
const SEUIL_GRAND: f64 = 1e21;
/// En deçà (non nul) : notation scientifique.
const SEUIL_PETIT: f64 = 1e-6;

pub fn format_nombre(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let a = v.abs();
    if a >= SEUIL_GRAND || a < SEUIL_PETIT {
        return format_scientifique(v);
    }

    // Display f64 : plus courte écriture qui relit la même valeur, jamais d’exposant.
    format!("{v}")
}

fn format_scientifique(v: f64) -> String {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
        _ => s,
    }
}

/// Vrai si le texte est une notation scientifique (lue telle quelle, pas en mots).
pub fn est_scientifique(s: &str) -> bool {
    s.contains('e')
}
