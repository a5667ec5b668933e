// src/noyau/expr.rs
//
// AST flottant (f64), restreint à la liste blanche.
// - Nombre : littéral
// - Pi, E  : constantes
// - Neg    : moins unaire
// - Rem    : reste flottant (opérateur '%' qui n’était pas un pourcent)
//
// IMPORTANT (SAFE):
// - pas de variables, pas d’effets de bord : eval() ne lit que l’arbre.

use std::f64::consts;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),
    Pi,
    E,

    Neg(Box<Expr>),

    Sqrt(Box<Expr>),
    Log(Box<Expr>), // logarithme népérien
    Pow(Box<Expr>, Box<Expr>),

    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Rem(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évaluation brute en f64 (peut produire ±∞ ou NaN : la normalisation tranche ensuite).
    pub fn eval(&self) -> f64 {
        use Expr::*;

        match self {
            Nombre(v) => *v,
            Pi => consts::PI,
            E => consts::E,

            Neg(x) => -x.eval(),

            Sqrt(x) => x.eval().sqrt(),
            Log(x) => x.eval().ln(),
            Pow(a, b) => a.eval().powf(b.eval()),

            Sin(x) => x.eval().sin(),
            Cos(x) => x.eval().cos(),
            Tan(x) => x.eval().tan(),

            Add(a, b) => a.eval() + b.eval(),
            Sub(a, b) => a.eval() - b.eval(),
            Mul(a, b) => a.eval() * b.eval(),
            Div(a, b) => a.eval() / b.eval(),
            Rem(a, b) => a.eval() % b.eval(),
        }
    }

    /// Mode degrés : chaque argument de sin/cos/tan devient (PI/180)*(argument).
    /// Récursif : les appels imbriqués sont convertis aussi.
    pub fn en_degres(self) -> Expr {
        use Expr::*;

        fn radians(x: Box<Expr>) -> Box<Expr> {
            let facteur = Div(Box::new(Pi), Box::new(Nombre(180.0)));
            Box::new(Mul(Box::new(facteur), Box::new(x.en_degres())))
        }

        match self {
            Nombre(_) | Pi | E => self,

            Sin(x) => Sin(radians(x)),
            Cos(x) => Cos(radians(x)),
            Tan(x) => Tan(radians(x)),

            Neg(x) => Neg(Box::new(x.en_degres())),
            Sqrt(x) => Sqrt(Box::new(x.en_degres())),
            Log(x) => Log(Box::new(x.en_degres())),
            Pow(a, b) => Pow(Box::new(a.en_degres()), Box::new(b.en_degres())),

            Add(a, b) => Add(Box::new(a.en_degres()), Box::new(b.en_degres())),
            Sub(a, b) => Sub(Box::new(a.en_degres()), Box::new(b.en_degres())),
            Mul(a, b) => Mul(Box::new(a.en_degres()), Box::new(b.en_degres())),
            Div(a, b) => Div(Box::new(a.en_degres()), Box::new(b.en_degres())),
            Rem(a, b) => Rem(Box::new(a.en_degres()), Box::new(b.en_degres())),
        }
    }
}

/// Affichage parenthésé (démarche).
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;

        match self {
            Nombre(v) => write!(f, "{}", super::format::format_nombre(*v)),
            Pi => write!(f, "PI"),
            E => write!(f, "e"),
            Neg(x) => write!(f, "-{x}"),
            Sqrt(x) => write!(f, "sqrt({x})"),
            Log(x) => write!(f, "log({x})"),
            Pow(a, b) => write!(f, "pow({a}, {b})"),
            Sin(x) => write!(f, "sin({x})"),
            Cos(x) => write!(f, "cos({x})"),
            Tan(x) => write!(f, "tan({x})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Rem(a, b) => write!(f, "({a}%{b})"),
        }
    }
}
