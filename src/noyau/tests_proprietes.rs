//! Campagne de propriétés : le comportement observable de la calculatrice,
//! du texte brut jusqu’aux mots annoncés.
//!
//! Chaque test nomme une propriété ; les cas limites sont groupés avec elle.

use super::{evaluer, format_nombre, ErreurEval, Options};
use crate::mots::{Convertisseur, Langue};
use crate::parole::Silence;
use crate::session::{EcranMemoire, Reglages, Session};

fn rad() -> Options {
    Options::default()
}

fn deg() -> Options {
    Options { mode_degres: true }
}

fn en(v: f64) -> String {
    Convertisseur::new(Langue::En).nombre(v)
}

fn fa(v: f64) -> String {
    Convertisseur::new(Langue::Fa).nombre(v)
}

/* ------------------------ Évaluation ------------------------ */

#[test]
fn priorite_des_operateurs_standard() {
    assert_eq!(evaluer("2+2*2", &rad()), Ok(6.0));
    assert_eq!(evaluer("2*3+4*5", &rad()), Ok(26.0));
    assert_eq!(evaluer("8-2-1", &rad()), Ok(5.0));
    assert_eq!(evaluer("16/4/2", &rad()), Ok(2.0));
}

#[test]
fn pourcent_reecrit_en_centiemes() {
    assert_eq!(evaluer("50%", &rad()), Ok(0.5));
    assert_eq!(evaluer("12.5%", &rad()), Ok(0.125));
}

#[test]
fn entree_vide_sans_effet_sur_la_session() {
    assert_eq!(evaluer("", &rad()), Err(ErreurEval::EntreeVide));
    assert_eq!(evaluer("   ", &rad()), Err(ErreurEval::EntreeVide));

    let r = Reglages {
        langue: Langue::En,
        mode_degres: false,
        voix_active: true,
    };
    let mut s = Session::new(r, EcranMemoire::default(), Silence);
    s.appuyer("7");
    s.action(crate::session::Action::Evaluer);
    s.action(crate::session::Action::Effacer);

    let ecran_avant = s.ecran().clone();
    let annonce_avant = s.derniere_annonce().to_string();
    assert_eq!(s.evaluer(), None);
    assert_eq!(s.ecran(), &ecran_avant);
    assert_eq!(s.tampon(), "");
    assert_eq!(s.derniere_annonce(), annonce_avant);
}

#[test]
fn lettres_hors_liste_blanche_refusees() {
    for brut in ["abc", "2+x", "SIN(1)", "alert(1)", "2;3", "exp(1)"] {
        assert!(
            matches!(evaluer(brut, &rad()), Err(ErreurEval::GrammaireInvalide(_))),
            "{brut:?} aurait dû être refusé"
        );
    }
}

#[test]
fn resultat_non_fini_refuse() {
    for brut in ["1/0", "-1/0", "0/0", "sqrt(-1)", "log(0)", "pow(10,400)"] {
        assert!(
            matches!(evaluer(brut, &rad()), Err(ErreurEval::EchecEvaluation(_))),
            "{brut:?} aurait dû échouer"
        );
    }
}

#[test]
fn arrondi_supprime_le_bruit_flottant() {
    assert_eq!(evaluer("0.1+0.2", &rad()), Ok(0.3));
    assert_eq!(format_nombre(evaluer("0.1+0.2", &rad()).unwrap()), "0.3");
    assert_eq!(evaluer("1.1*3", &rad()), Ok(3.3));
    assert_eq!(evaluer("0.3-0.1", &rad()), Ok(0.2));
    assert_eq!(evaluer("3000.1+0.2", &rad()), Ok(3000.3));
    assert_eq!(format_nombre(evaluer("3000.1+0.2", &rad()).unwrap()), "3000.3");
}

/* ------------------------ Mots ------------------------ */

#[test]
fn zero_en_mots() {
    assert_eq!(en(0.0), "zero");
    assert_eq!(fa(0.0), "صفر");
    assert_eq!(en(-0.0), "zero");
}

#[test]
fn negatif_et_table_des_dix_a_dix_neuf() {
    assert_eq!(en(-15.0), "negative fifteen");
    assert_eq!(fa(-15.0), "منفی پانزده");
    assert!(!en(-15.0).contains("ten"));
    assert_eq!(en(11.0), "eleven");
    assert_eq!(en(19.0), "nineteen");
}

#[test]
fn echelle_nommee_une_seule_fois() {
    let m = en(1_000_000.0);
    assert_eq!(m, "one million");
    assert_eq!(m.matches("million").count(), 1);
    assert!(!m.contains("thousand"));

    assert_eq!(fa(1_000_000.0), "یک میلیون");
    assert_eq!(en(2_000_000_000.0), "two billion");
    assert_eq!(en(1_001_000.0), "one million and one thousand");
}

#[test]
fn conjonction_de_la_langue_entre_dizaine_unite_et_groupes() {
    assert_eq!(en(23.0), "twenty and three");
    assert_eq!(fa(23.0), "بیست و سه");
    assert_eq!(en(2_023.0), "two thousand and twenty and three");
    assert_eq!(fa(2_023.0), "دو هزار و بیست و سه");
    assert!(!en(45.0).contains('-'));
}

#[test]
fn decimales_chiffre_par_chiffre() {
    assert_eq!(en(3.14), "three point one four");
    assert_eq!(fa(3.14), "سه ممیز یک چهار");
    assert_eq!(en(0.05), "zero point zero five");
    assert_eq!(en(-2.5), "negative two point five");
}

#[test]
fn grands_et_petits_lus_tels_quels() {
    assert_eq!(en(1e21), "1e+21");
    assert_eq!(fa(2.5e-7), "2.5e-7");
    assert_eq!(en(f64::INFINITY), "infinity");
    assert_eq!(en(f64::NAN), "undefined");
}

/* ------------------------ Stabilité ------------------------ */

#[test]
fn reevaluer_un_resultat_donne_la_meme_valeur() {
    let exprs = [
        "2+2*2",
        "0.1+0.2",
        "10/3",
        "-7/2",
        "sqrt(2)",
        "PI",
        "e",
        "pow(10,21)",
        "pow(10,22)*3",
        "1/4000000",
        "-1/3000000",
        "sin(1)",
        "123456789*1000",
    ];

    for brut in exprs {
        let v = evaluer(brut, &rad()).unwrap_or_else(|e| panic!("{brut:?}: {e}"));
        let texte = format_nombre(v);
        let v2 = evaluer(&texte, &rad()).unwrap_or_else(|e| panic!("{texte:?}: {e}"));
        assert_eq!(v, v2, "{brut:?} -> {texte:?} -> {v2}");
        assert_eq!(format_nombre(v2), texte);
    }
}

#[test]
fn mode_degres_sur_les_fonctions_trigonometriques() {
    let d = evaluer("sin(90)", &deg()).unwrap();
    assert!((d - 1.0).abs() < 1e-12, "sin(90°) = {d}");

    let r = evaluer("sin(90)", &rad()).unwrap();
    assert!((r - 1.0).abs() > 0.1, "sin(90 rad) = {r}");

    assert_eq!(evaluer("cos(180)", &deg()), Ok(-1.0));
    assert_eq!(evaluer("cos(PI)", &rad()), Ok(-1.0));
    // hors trigonométrie : aucun effet
    assert_eq!(evaluer("sqrt(81)+90", &deg()), Ok(99.0));
}

#[test]
fn mots_totaux_sur_tout_resultat() {
    let c = Convertisseur::new(Langue::Fa);
    for v in [
        0.0,
        1.0,
        -1.0,
        0.5,
        999.0,
        1000.0,
        123_456_789.0,
        1e15,
        1e18,
        9.007_199_254_740_992e15,
        1e-7,
        f64::MAX,
        f64::MIN_POSITIVE,
    ] {
        assert!(!c.nombre(v).is_empty(), "{v}");
    }
}
