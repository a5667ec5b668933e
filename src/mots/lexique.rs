// src/mots/lexique.rs
//
// Tables de mots par langue (persan / anglais).
// Une seule table par langue, choisie à la construction du convertisseur.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Langue des mots et de la voix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(not(target_arch = "wasm32"), derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Langue {
    #[default]
    Fa,
    En,
}

impl Langue {
    pub fn lexique(self) -> &'static Lexique {
        match self {
            Langue::Fa => &LEXIQUE_FA,
            Langue::En => &LEXIQUE_EN,
        }
    }

    /// Étiquette BCP 47 pour la synthèse vocale du navigateur.
    #[cfg(any(test, target_arch = "wasm32"))]
    pub fn etiquette(self) -> &'static str {
        match self {
            Langue::Fa => "fa-IR",
            Langue::En => "en-US",
        }
    }

    /// Nom de voix espeak-ng.
    pub fn voix_espeak(self) -> &'static str {
        match self {
            Langue::Fa => "fa",
            Langue::En => "en",
        }
    }
}

impl fmt::Display for Langue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Langue::Fa => write!(f, "fa"),
            Langue::En => write!(f, "en"),
        }
    }
}

/// Phrases fixes annoncées par la session.
#[derive(Debug)]
pub struct Phrases {
    pub erreur_affichage: &'static str,
    pub erreur_annonce: &'static str,
    pub efface: &'static str,
    pub supprime: &'static str,
    pub voix_activee: &'static str,
    pub memoire_effacee: &'static str,
    pub memoire_ajoutee: &'static str,
    pub memoire_soustraite: &'static str,
    pub mode_degres: &'static str,
    pub mode_radians: &'static str,
}

#[derive(Debug)]
pub struct Lexique {
    // --- touches ---
    pub chiffres: [&'static str; 10],
    /// Symbole de touche -> mot (opérateurs, parenthèses, fonctions, constantes).
    pub touches: &'static [(&'static str, &'static str)],
    /// Variantes prononcées à l’appui d’une touche (prioritaires sur `touches`).
    pub appuis: &'static [(&'static str, &'static str)],

    // --- nombres ---
    pub unites: [&'static str; 10],
    pub dix_a_dix_neuf: [&'static str; 10],
    pub dizaines: [&'static str; 10],
    pub centaines: [&'static str; 10],
    /// Noms d’échelle, du plus grand (10^12) au plus petit (10^3).
    pub echelles: [&'static str; 4],

    // --- liaisons ---
    /// Conjonction : entre dizaine et unité, après la centaine, entre groupes.
    pub conjonction: &'static str,

    // --- mots spéciaux ---
    pub zero: &'static str,
    pub point: &'static str,
    pub negatif: &'static str,
    pub infini: &'static str,
    pub indefini: &'static str,

    pub phrases: Phrases,
}

impl Lexique {
    pub fn mot_touche(&self, symbole: &str) -> Option<&'static str> {
        let mut chars = symbole.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Some(self.chiffres[d as usize]);
            }
        }
        cherche(self.touches, symbole)
    }

    pub fn mot_appui(&self, symbole: &str) -> Option<&'static str> {
        cherche(self.appuis, symbole).or_else(|| self.mot_touche(symbole))
    }
}

fn cherche(table: &[(&str, &'static str)], symbole: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(cle, _)| *cle == symbole)
        .map(|(_, mot)| *mot)
}

/* ------------------------ Persan ------------------------ */

pub static LEXIQUE_FA: Lexique = Lexique {
    chiffres: ["صفر", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"],
    touches: &[
        (".", "ممیز"),
        ("+", "جمع"),
        ("-", "منها"),
        ("*", "ضرب"),
        ("/", "تقسیم"),
        ("%", "درصد"),
        ("(", "پرانتز باز"),
        (")", "پرانتز بسته"),
        (",", "کاما"),
        ("sin", "سینوس"),
        ("cos", "کسینوس"),
        ("tan", "تانژانت"),
        ("sqrt", "رادیکال"),
        ("pow", "توان"),
        ("log", "لگاریتم"),
        ("PI", "پی"),
        ("e", "عدد نپر"),
    ],
    appuis: &[("-", "منهای")],

    unites: ["", "یک", "دو", "سه", "چهار", "پنج", "شش", "هفت", "هشت", "نه"],
    dix_a_dix_neuf: [
        "ده", "یازده", "دوازده", "سیزده", "چهارده", "پانزده", "شانزده", "هفده", "هجده", "نوزده",
    ],
    dizaines: ["", "ده", "بیست", "سی", "چهل", "پنجاه", "شصت", "هفتاد", "هشتاد", "نود"],
    centaines: [
        "", "یکصد", "دویست", "سیصد", "چهارصد", "پانصد", "ششصد", "هفتصد", "هشتصد", "نهصد",
    ],
    echelles: ["تریلیون", "میلیارد", "میلیون", "هزار"],

    conjonction: " و ",

    zero: "صفر",
    point: "ممیز",
    negatif: "منفی",
    infini: "بی‌نهایت",
    indefini: "نامشخص",

    phrases: Phrases {
        erreur_affichage: "خطا",
        erreur_annonce: "خطا در محاسبه",
        efface: "پاک شد",
        supprime: "حذف شد",
        voix_activee: "صدا فعال شد",
        memoire_effacee: "حافظه پاک شد",
        memoire_ajoutee: "به حافظه اضافه شد",
        memoire_soustraite: "از حافظه کم شد",
        mode_degres: "حالت درجه",
        mode_radians: "حالت رادیان",
    },
};

/* ------------------------ Anglais ------------------------ */

pub static LEXIQUE_EN: Lexique = Lexique {
    chiffres: [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
    touches: &[
        (".", "point"),
        ("+", "plus"),
        ("-", "minus"),
        ("*", "times"),
        ("/", "divided by"),
        ("%", "percent"),
        ("(", "open parenthesis"),
        (")", "close parenthesis"),
        (",", "comma"),
        ("sin", "sine"),
        ("cos", "cosine"),
        ("tan", "tangent"),
        ("sqrt", "square root"),
        ("pow", "power"),
        ("log", "log"),
        ("PI", "pi"),
        ("e", "e"),
    ],
    appuis: &[],

    unites: [
        "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ],
    dix_a_dix_neuf: [
        "ten",
        "eleven",
        "twelve",
        "thirteen",
        "fourteen",
        "fifteen",
        "sixteen",
        "seventeen",
        "eighteen",
        "nineteen",
    ],
    dizaines: [
        "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    ],
    centaines: [
        "",
        "one hundred",
        "two hundred",
        "three hundred",
        "four hundred",
        "five hundred",
        "six hundred",
        "seven hundred",
        "eight hundred",
        "nine hundred",
    ],
    echelles: ["trillion", "billion", "million", "thousand"],

    conjonction: " and ",

    zero: "zero",
    point: "point",
    negatif: "negative",
    infini: "infinity",
    indefini: "undefined",

    phrases: Phrases {
        erreur_affichage: "Error",
        erreur_annonce: "calculation error",
        efface: "cleared",
        supprime: "deleted",
        voix_activee: "voice enabled",
        memoire_effacee: "memory cleared",
        memoire_ajoutee: "added to memory",
        memoire_soustraite: "subtracted from memory",
        mode_degres: "degree mode",
        mode_radians: "radian mode",
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chiffres_et_touches() {
        let fa = Langue::Fa.lexique();
        assert_eq!(fa.mot_touche("0"), Some("صفر"));
        assert_eq!(fa.mot_touche("+"), Some("جمع"));
        assert_eq!(fa.mot_touche("."), Some("ممیز"));

        let en = Langue::En.lexique();
        assert_eq!(en.mot_touche("0"), Some("zero"));
        assert_eq!(en.mot_touche("+"), Some("plus"));
        assert_eq!(en.mot_touche("12"), None);
        assert_eq!(en.mot_touche("x"), None);
    }

    #[test]
    fn appui_moins_persan() {
        let fa = Langue::Fa.lexique();
        assert_eq!(fa.mot_touche("-"), Some("منها"));
        assert_eq!(fa.mot_appui("-"), Some("منهای"));
        // pas de variante : retombe sur la table des touches
        assert_eq!(fa.mot_appui("*"), Some("ضرب"));
    }

    #[test]
    fn etiquettes() {
        assert_eq!(Langue::Fa.etiquette(), "fa-IR");
        assert_eq!(Langue::En.etiquette(), "en-US");
        assert_eq!(Langue::En.to_string(), "en");
    }
}
