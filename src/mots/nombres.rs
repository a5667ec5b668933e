// src/mots/nombres.rs
//
// Nombre -> mots (persan / anglais)
// ---------------------------------
// - non fini        : infini / indéfini
// - scientifique    : rendu tel quel (1e+21)
// - négatif         : "négatif" + récursion sur la valeur absolue
// - décimal         : partie entière en mots + "point" + chaque chiffre un par un
// - entier          : groupes 10^12, 10^9, 10^6, 10^3 puis reste 0–999
//
// Total : ne panique jamais ; un symbole inconnu est renvoyé tel quel.

use super::lexique::{Langue, Lexique};
use crate::noyau::format::{est_scientifique, format_nombre};
use crate::noyau::preparation::normaliser_symboles;

/// Valeurs des échelles, alignées sur `Lexique::echelles`.
const ECHELLES: [u128; 4] = [1_000_000_000_000, 1_000_000_000, 1_000_000, 1_000];

#[derive(Clone, Copy, Debug)]
pub struct Convertisseur {
    lexique: &'static Lexique,
}

impl Convertisseur {
    pub fn new(langue: Langue) -> Self {
        Self {
            lexique: langue.lexique(),
        }
    }

    pub fn lexique(&self) -> &'static Lexique {
        self.lexique
    }

    /// Mot d’une touche (chiffre, opérateur, parenthèse, fonction, constante).
    /// "sin(" se lit comme "sin" ; un symbole inconnu est renvoyé tel quel.
    pub fn touche(&self, symbole: &str) -> String {
        let cle = normaliser_symboles(symbole);
        let cle = cle.strip_suffix('(').filter(|c| !c.is_empty()).unwrap_or(&cle);
        self.lexique
            .mot_touche(cle)
            .map(str::to_string)
            .unwrap_or_else(|| symbole.to_string())
    }

    /// Ce qui est dit à l’appui d’une touche (variante éventuelle, ex. persan "منهای").
    pub fn appui(&self, symbole: &str) -> String {
        let cle = normaliser_symboles(symbole);
        let cle = cle.strip_suffix('(').filter(|c| !c.is_empty()).unwrap_or(&cle);
        self.lexique
            .mot_appui(cle)
            .map(str::to_string)
            .unwrap_or_else(|| symbole.to_string())
    }

    /// Nombre flottant -> mots.
    pub fn nombre(&self, v: f64) -> String {
        let lx = self.lexique;
        if v.is_nan() {
            return lx.indefini.to_string();
        }
        if v.is_infinite() {
            return if v > 0.0 {
                lx.infini.to_string()
            } else {
                format!("{} {}", lx.negatif, lx.infini)
            };
        }
        self.texte(&format_nombre(v))
    }

    /// Texte d’un nombre (tel qu’affiché) -> mots.
    pub fn texte(&self, s: &str) -> String {
        let lx = self.lexique;
        let s = s.trim();

        if s.is_empty() {
            return String::new();
        }

        // touche seule (chiffre, opérateur...) : table directe
        if let Some(mot) = lx.mot_touche(s) {
            return mot.to_string();
        }

        match s {
            "NaN" => return lx.indefini.to_string(),
            "Infinity" => return lx.infini.to_string(),
            _ => {}
        }

        // repli volontaire : très grands / très petits lus tels quels
        if est_scientifique(s) {
            return s.to_string();
        }

        if let Some(reste) = s.strip_prefix('-') {
            let mots = self.texte(reste);
            return format!("{} {}", lx.negatif, mots);
        }

        if let Some((ent, frac)) = s.split_once('.') {
            let Some(ent_mots) = self.partie_entiere(ent) else {
                return s.to_string();
            };
            if !frac.chars().all(|c| c.is_ascii_digit()) {
                return s.to_string();
            }

            let mut out = format!("{} {}", ent_mots, lx.point);
            for c in frac.chars() {
                out.push(' ');
                out.push_str(&self.touche(c.encode_utf8(&mut [0; 4])));
            }
            return out;
        }

        self.partie_entiere(s).unwrap_or_else(|| s.to_string())
    }

    /// Chiffres seuls -> mots ; None si ce n’est pas un entier lisible.
    fn partie_entiere(&self, s: &str) -> Option<String> {
        if s.is_empty() {
            // ".5" : partie entière implicite
            return Some(self.lexique.zero.to_string());
        }
        if !s.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let n = s.parse::<u128>().ok()?;
        Some(self.entier(n))
    }

    /// Entier -> mots.
    pub fn entier(&self, n: u128) -> String {
        let lx = self.lexique;
        if n == 0 {
            return lx.zero.to_string();
        }

        let mut mots: Vec<String> = Vec::new();
        let mut reste = n;

        for (valeur, nom) in ECHELLES.iter().zip(lx.echelles.iter()) {
            if reste >= *valeur {
                let compte = reste / valeur;
                reste %= valeur;

                // au-delà de 999 billions : le compte se lit lui-même en entier
                let compte_mots = if compte < 1000 {
                    self.trois_chiffres(compte)
                } else {
                    self.entier(compte)
                };
                mots.push(format!("{compte_mots} {nom}"));
            }
        }

        if reste > 0 {
            mots.push(self.trois_chiffres(reste));
        }

        mots.join(lx.conjonction)
    }

    /// 1..=999 -> mots.
    fn trois_chiffres(&self, x: u128) -> String {
        let lx = self.lexique;
        let h = (x / 100) as usize;
        let rem = (x % 100) as usize;

        let dizaine_unite = if (10..20).contains(&rem) {
            Some(lx.dix_a_dix_neuf[rem - 10].to_string())
        } else {
            match (rem / 10, rem % 10) {
                (0, 0) => None,
                (0, o) => Some(lx.unites[o].to_string()),
                (t, 0) => Some(lx.dizaines[t].to_string()),
                (t, o) => Some(format!("{}{}{}", lx.dizaines[t], lx.conjonction, lx.unites[o])),
            }
        };

        match (h, dizaine_unite) {
            (0, Some(du)) => du,
            (h, None) => lx.centaines[h].to_string(),
            (h, Some(du)) => format!("{}{}{}", lx.centaines[h], lx.conjonction, du),
        }
    }
}
