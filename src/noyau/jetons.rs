// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Pi,
    E,

    // Fonction de la liste blanche (sin, cos, tan, sqrt, pow, log)
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent, // reste (le pourcent collé à un nombre a déjà été réécrit)

    LPar,
    RPar,
    Virgule,

    // Jetons produits seulement par le shunting-yard (RPN)
    Neg,
    Appel(String, usize),
}

/// Fonctions reconnues et leur arité.
pub fn arite_fonction(name: &str) -> Option<usize> {
    match name {
        "sin" | "cos" | "tan" | "sqrt" | "log" => Some(1),
        "pow" => Some(2),
        _ => None,
    }
}

/// Tokenize une chaîne déjà préparée (liste blanche validée).
/// Supporte:
/// - nombres décimaux (ex: 12, 3.14, .5)
/// - exposant collé (ex: 1e+21, 2.5e-7) : forme produite par l’affichage des très grands/petits
/// - opérateurs + - * / %
/// - parenthèses ( ) et virgule (arguments de pow)
/// - constantes PI et e
/// - fonctions sin cos tan sqrt pow log
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            ',' => Some(Tok::Virgule),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Mots : PI, e, fonctions
        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();

            match word.as_str() {
                "PI" => out.push(Tok::Pi),
                "e" => out.push(Tok::E),
                w if arite_fonction(w).is_some() => out.push(Tok::Ident(word)),
                _ => return Err(ErreurEval::echec(format!("identifiant inconnu: '{word}'"))),
            }
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }

            // exposant : e suivi d’un chiffre, ou de +/- puis d’un chiffre
            if i < chars.len() && chars[i] == 'e' {
                let signe = matches!(chars.get(i + 1), Some('+') | Some('-'));
                let pos_chiffre = if signe { i + 2 } else { i + 1 };
                if chars.get(pos_chiffre).is_some_and(|d| d.is_ascii_digit()) {
                    i = pos_chiffre;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }

            let lit: String = chars[start..i].iter().collect();
            let v = lit
                .parse::<f64>()
                .map_err(|_| ErreurEval::echec(format!("nombre invalide: '{lit}'")))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurEval::GrammaireInvalide(format!(
            "caractère inattendu: '{c}'"
        )));
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => super::format::format_nombre(*v),
            Tok::Pi => "PI".to_string(),
            Tok::E => "e".to_string(),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
            Tok::Virgule => ",".to_string(),

            Tok::Neg => "neg".to_string(),
            Tok::Appel(name, n) => format!("{name}/{n}"),
        };
        out.push(s);
    }
    out.join(" ")
}
