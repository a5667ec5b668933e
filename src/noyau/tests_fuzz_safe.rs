//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - invariants clés :
//!   * jamais de panique, quelle que soit la soupe de jetons
//!   * Ok(v) => v fini, et ré-évaluer format_nombre(v) redonne v
//!   * les mots d’un résultat ne sont jamais vides

use std::time::{Duration, Instant};

use super::{evaluer, format_nombre, ErreurEval, Options};
use crate::mots::{Convertisseur, Langue};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Invariants ------------------------ */

fn verifier_succes(expr: &str, v: f64, options: &Options) {
    assert!(v.is_finite(), "résultat non fini accepté: expr={expr:?} v={v}");

    let texte = format_nombre(v);
    match evaluer(&texte, options) {
        Ok(v2) => assert_eq!(v, v2, "ré-évaluation instable: {expr:?} -> {texte:?} -> {v2}"),
        Err(e) => panic!("résultat non ré-évaluable: {expr:?} -> {texte:?}: {e}"),
    }

    for langue in [Langue::Fa, Langue::En] {
        let mots = Convertisseur::new(langue).nombre(v);
        assert!(!mots.trim().is_empty(), "mots vides pour {v} ({langue})");
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "0".to_string(),
        1 => format!("{}", rng.pick(10)),
        2 => format!("{}", rng.pick(100_000)),
        3 => format!("{}.{}", rng.pick(100), rng.pick(1000)),
        4 => format!(".{}", rng.pick(100)),
        _ => format!("{}%", rng.pick(300)),
    }
}

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 | 1 | 2 => gen_nombre(rng),
        3 => "PI".to_string(),
        4 => "e".to_string(),
        _ => format!("-{}", gen_nombre(rng)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    let a = gen_expr(rng, depth - 1);
    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({a}+{})", gen_expr(rng, depth - 1)),
        2 => format!("({a}-{})", gen_expr(rng, depth - 1)),
        3 => format!("{a}*{}", gen_expr(rng, depth - 1)),
        4 => format!("({a})/({})", gen_expr(rng, depth - 1)),
        5 => format!("({a})%({})", gen_expr(rng, depth - 1)),
        6 => format!("sin({a})"),
        7 => format!("cos({a})"),
        8 => format!("tan({a})"),
        9 => format!("sqrt({a})"),
        10 => format!("log({a})"),
        _ => format!("pow({a},{})", rng.pick(5)),
    }
}

/// Soupe de jetons de la liste blanche, sans structure : la plupart sont mal formées.
fn gen_soupe(rng: &mut Rng) -> String {
    const JETONS: &[&str] = &[
        "1", "2", "7", "0", ".", "..", "+", "-", "*", "/", "%", "(", ")", ",", "sin", "cos(",
        "tan", "sqrt(", "pow(", "log", "PI", "e", " ", "1e", "e+", "×", "÷", "−", "π",
    ];

    let n = 1 + rng.pick(12) as usize;
    (0..n)
        .map(|_| JETONS[rng.pick(JETONS.len() as u32) as usize])
        .collect()
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_expressions_bien_formees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        let options = Options {
            mode_degres: rng.coin(),
        };

        match evaluer(&expr, &options) {
            Ok(v) => {
                verifier_succes(&expr, v, &options);
                seen_ok += 1;
            }
            Err(e) => {
                // bien formée : seule une valeur non finie (÷0, log(0), sqrt(-1)...) peut échouer
                assert!(
                    matches!(e, ErreurEval::EchecEvaluation(_)),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_soupe_de_jetons_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(400);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..400 {
        budget(t0, max);

        let expr = gen_soupe(&mut rng);
        let options = Options::default();

        match evaluer(&expr, &options) {
            Ok(v) => verifier_succes(&expr, v, &options),
            Err(ErreurEval::EntreeVide) => {
                assert!(expr.trim().is_empty(), "EntreeVide sur {expr:?}")
            }
            Err(_) => seen_err += 1,
        }
    }

    assert!(seen_err > 100, "soupe trop souvent valide: {seen_err} erreurs");
}

#[test]
fn fuzz_safe_determinisme() {
    let mut a = Rng::new(42);
    let mut b = Rng::new(42);

    for _ in 0..50 {
        let ea = gen_expr(&mut a, 3);
        let eb = gen_expr(&mut b, 3);
        assert_eq!(ea, eb);
        assert_eq!(
            evaluer(&ea, &Options::default()),
            evaluer(&eb, &Options::default())
        );
    }
}

#[test]
fn fuzz_safe_mots_sur_valeurs_extremes() {
    let mut rng = Rng::new(0x5EED);
    let c = Convertisseur::new(Langue::En);

    for _ in 0..300 {
        // exposant dans [-320, 320], mantisse quelconque, signe aléatoire
        let m = 1.0 + f64::from(rng.pick(1_000_000)) / 1_000_000.0;
        let exp = rng.pick(641) as i32 - 320;
        let mut v = m * 10f64.powi(exp);
        if rng.coin() {
            v = -v;
        }

        let mots = c.nombre(v);
        assert!(!mots.trim().is_empty(), "mots vides pour {v}");
    }
}

#[test]
fn fuzz_safe_somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = somme_balancee("1/2", 800);
    budget(t0, max);

    let v = evaluer(&expr, &Options::default()).unwrap_or_else(|e| panic!("err: {e}"));

    // 800*(1/2) = 400
    assert_eq!(v, 400.0);
}

#[test]
fn fuzz_safe_parentheses_profondes() {
    let profondeur = 500;
    let expr = format!("{}7{}", "(".repeat(profondeur), ")".repeat(profondeur));
    assert_eq!(evaluer(&expr, &Options::default()), Ok(7.0));

    let desequilibre = format!("{}7{}", "(".repeat(profondeur), ")".repeat(profondeur - 1));
    assert!(matches!(
        evaluer(&desequilibre, &Options::default()),
        Err(ErreurEval::EchecEvaluation(_))
    ));
}

#[test]
fn fuzz_safe_imbrication_profonde_refusee_sans_crash() {
    let t0 = Instant::now();
    let max = Duration::from_millis(1000);

    let negations = format!("{}1", "-".repeat(200_000));
    let chaine = format!("1{}", "+1".repeat(50_000));
    let appels = format!("{}1{}", "sqrt(".repeat(5_000), ")".repeat(5_000));

    for expr in [&negations, &chaine, &appels] {
        for mode_degres in [false, true] {
            let r = evaluer(expr, &Options { mode_degres });
            assert!(
                matches!(r, Err(ErreurEval::EchecEvaluation(_))),
                "attendu EchecEvaluation, obtenu {r:?} (longueur {})",
                expr.len()
            );
        }
    }
    budget(t0, max);

    // bien en deçà de la limite : toujours calculé
    let raisonnable = format!("1{}", "+1".repeat(100));
    assert_eq!(evaluer(&raisonnable, &Options::default()), Ok(101.0));
}

