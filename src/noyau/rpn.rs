// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name) : fonction de la liste blanche, DOIT être suivie de '('
//   => sortie en RPN sous forme Appel(name, nb_args) après la parenthèse fermante
// - Virgule : sépare les arguments (pow(a, b)), seulement dans une parenthèse de fonction
// - Moins unaire : si '-' arrive quand on n’attend PAS une valeur => Neg (préfixe, prioritaire)
// - Plus unaire : ignoré
// - Pas de multiplication implicite : "2(3)", "2PI" sont refusés

use super::erreur::ErreurEval;
use super::expr::Expr;
use super::jetons::{arite_fonction, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

fn est_operateur(t: &Tok) -> bool {
    precedence(t) > 0
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Pi, Slash, Num(2), RPar]
///   rpn:    [Pi, Num(2), Slash, Appel("sin", 1)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // Une entrée par '(' ouverte : Some(nb_args) si parenthèse d’appel, None sinon.
    let mut parens: Vec<Option<usize>> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les opérandes manquants.
    let mut prev_was_value = false;
    let mut attend_parenthese = false;

    for tok in tokens.iter().cloned() {
        if attend_parenthese && tok != Tok::LPar {
            return Err(ErreurEval::echec("fonction sans parenthèse"));
        }

        match tok {
            Tok::Num(_) | Tok::Pi | Tok::E => {
                if prev_was_value {
                    return Err(ErreurEval::echec("opérateur manquant"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if prev_was_value {
                    return Err(ErreurEval::echec("opérateur manquant"));
                }
                // fonction : on la garde sur la pile (elle sortira après son argument)
                ops.push(Tok::Ident(name));
                attend_parenthese = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::echec("opérateur manquant avant '('"));
                }
                parens.push(if attend_parenthese { Some(1) } else { None });
                attend_parenthese = false;
                ops.push(tok);
            }

            Tok::Virgule => {
                if !prev_was_value {
                    return Err(ErreurEval::echec("argument manquant"));
                }
                depile_jusqua_parenthese(&mut ops, &mut out)?;
                match parens.last_mut() {
                    Some(Some(n)) => *n += 1,
                    _ => return Err(ErreurEval::echec("virgule hors d’un appel de fonction")),
                }
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::echec("parenthèses vides ou opérande manquant"));
                }
                depile_jusqua_parenthese(&mut ops, &mut out)?;
                // retire la '(' elle-même
                ops.pop();

                let appel = parens
                    .pop()
                    .ok_or_else(|| ErreurEval::echec("parenthèse fermante sans ouvrante"))?;

                // si c’était une parenthèse d’appel, la fonction est au sommet
                if let Some(nb_args) = appel {
                    let Some(Tok::Ident(name)) = ops.pop() else {
                        return Err(ErreurEval::echec("appel de fonction mal formé"));
                    };
                    if arite_fonction(&name) != Some(nb_args) {
                        return Err(ErreurEval::echec(format!(
                            "{name} : nombre d’arguments incorrect ({nb_args})"
                        )));
                    }
                    out.push(Tok::Appel(name, nb_args));
                }

                prev_was_value = true;
            }

            Tok::Minus | Tok::Plus if !prev_was_value => {
                // unaire : '-' devient Neg, '+' ne fait rien
                if tok == Tok::Minus {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                if !prev_was_value {
                    return Err(ErreurEval::echec("opérande manquant"));
                }

                // dépile tant que l’opérateur du haut lie au moins aussi fort (associativité gauche)
                while let Some(top) = ops.last() {
                    if !est_operateur(top) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg | Tok::Appel(..) => {
                return Err(ErreurEval::echec("jeton RPN inattendu en entrée"));
            }
        }
    }

    if attend_parenthese {
        return Err(ErreurEval::echec("fonction sans parenthèse"));
    }
    if !prev_was_value {
        return Err(ErreurEval::echec("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if !est_operateur(&op) {
            return Err(ErreurEval::echec("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Dépile les opérateurs jusqu’à la '(' ouvrante (laissée sur la pile).
fn depile_jusqua_parenthese(ops: &mut Vec<Tok>, out: &mut Vec<Tok>) -> Result<(), ErreurEval> {
    loop {
        match ops.last() {
            None => return Err(ErreurEval::echec("parenthèse fermante sans ouvrante")),
            Some(Tok::LPar) => return Ok(()),
            Some(_) => {
                if let Some(op) = ops.pop() {
                    out.push(op);
                }
            }
        }
    }
}

/// Profondeur maximale de l’arbre : eval, mode degrés, affichage et libération sont récursifs.
pub const PROFONDEUR_MAX: usize = 256;

/// Pile de construction : chaque sous-arbre garde sa profondeur.
struct Pile {
    items: Vec<(Expr, usize)>,
}

impl Pile {
    fn feuille(&mut self, e: Expr) {
        self.items.push((e, 1));
    }

    fn depiler(&mut self) -> Result<(Box<Expr>, usize), ErreurEval> {
        self.items
            .pop()
            .map(|(e, p)| (Box::new(e), p))
            .ok_or_else(|| ErreurEval::echec("expression invalide"))
    }

    fn noeud(&mut self, e: Expr, prof_enfants: usize) -> Result<(), ErreurEval> {
        let prof = prof_enfants + 1;
        if prof > PROFONDEUR_MAX {
            return Err(ErreurEval::echec(format!(
                "expression trop imbriquée (profondeur > {PROFONDEUR_MAX})"
            )));
        }
        self.items.push((e, prof));
        Ok(())
    }
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Result<Expr, ErreurEval> {
    let mut st = Pile { items: Vec::new() };

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(v) => st.feuille(Expr::Nombre(v)),
            Tok::Pi => st.feuille(Expr::Pi),
            Tok::E => st.feuille(Expr::E),

            Tok::Neg => {
                let (x, p) = st.depiler()?;
                st.noeud(Expr::Neg(x), p)?;
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                let (b, pb) = st.depiler()?;
                let (a, pa) = st.depiler()?;

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    _ => Expr::Rem(a, b),
                };
                st.noeud(e, pa.max(pb))?;
            }

            Tok::Appel(name, nb_args) => {
                if st.items.len() < nb_args {
                    return Err(ErreurEval::echec("fonction sans argument"));
                }

                let inconnue = || ErreurEval::echec(format!("fonction inconnue: {name}/{nb_args}"));

                match nb_args {
                    2 if name == "pow" => {
                        let (exposant, pe) = st.depiler()?;
                        let (base, pb) = st.depiler()?;
                        st.noeud(Expr::Pow(base, exposant), pb.max(pe))?;
                    }
                    1 => {
                        let (x, p) = st.depiler()?;
                        let e = match name.as_str() {
                            "sin" => Expr::Sin(x),
                            "cos" => Expr::Cos(x),
                            "tan" => Expr::Tan(x),
                            "sqrt" => Expr::Sqrt(x),
                            "log" => Expr::Log(x),
                            _ => return Err(inconnue()),
                        };
                        st.noeud(e, p)?;
                    }
                    _ => return Err(inconnue()),
                }
            }

            Tok::Ident(_) | Tok::LPar | Tok::RPar | Tok::Virgule => {
                return Err(ErreurEval::echec("jeton inattendu en RPN"));
            }
        }
    }

    if st.items.len() != 1 {
        return Err(ErreurEval::echec("expression invalide"));
    }
    st.depiler().map(|(e, _)| *e)
}
