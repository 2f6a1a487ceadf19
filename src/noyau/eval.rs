// src/noyau/eval.rs
//
// Machine à pile : évalue une RPN avec x lié.
//
// Discipline de pile (ordre des opérandes, NE PAS inverser):
// - opérateur binaire : b = pop(), a = pop() => a op b
//   (préserve a-b, a/b, a^b)
// - fonction unaire : v = pop() => f(v)
//
// Domaine:
// - sqrt(v) avec v < 0  => ErreurEval::RacineNegative
// - log(v)  avec v <= 0 => ErreurEval::LogNonPositif
// - division par zéro, (-base)^fractionnaire : PAS des erreurs,
//   sémantique IEEE (±inf / NaN) assumée.

use super::erreurs::ErreurEval;
use super::jetons::{Fonction, Tok};

/// Évalue une RPN en substituant `x` à la variable.
///
/// Invariant : une RPN bien formée laisse exactement une valeur sur la
/// pile; toute autre taille finale signale une séquence malformée.
pub fn eval_rpn(rpn: &[Tok], x: f64) -> Result<f64, ErreurEval> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),
            Tok::Var => pile.push(x),

            Tok::Fct(f) => {
                let v = pile
                    .pop()
                    .ok_or(ErreurEval::OperandeManquante(f.nom()))?;
                pile.push(applique_fonction(f, v)?);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let sym = symbole_op(&tok);
                let b = pile.pop().ok_or(ErreurEval::OperandeManquante(sym))?;
                let a = pile.pop().ok_or(ErreurEval::OperandeManquante(sym))?;

                let r = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    Tok::Caret => a.powf(b),
                    _ => unreachable!(),
                };
                pile.push(r);
            }

            // jamais produit par to_rpn; on classe quand même
            Tok::LPar | Tok::RPar => return Err(ErreurEval::ParentheseEnRpn),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurEval::PileFinale(pile.len()));
    }
    Ok(pile.pop().unwrap())
}

fn applique_fonction(f: Fonction, v: f64) -> Result<f64, ErreurEval> {
    match f {
        Fonction::Sqrt => {
            if v < 0.0 {
                Err(ErreurEval::RacineNegative(v))
            } else {
                Ok(v.sqrt())
            }
        }
        Fonction::Sin => Ok(v.sin()),
        Fonction::Cos => Ok(v.cos()),
        Fonction::Tan => Ok(v.tan()),
        Fonction::Log => {
            if v <= 0.0 {
                Err(ErreurEval::LogNonPositif(v))
            } else {
                Ok(v.ln())
            }
        }
    }
}

fn symbole_op(t: &Tok) -> &'static str {
    match t {
        Tok::Plus => "+",
        Tok::Minus => "-",
        Tok::Star => "*",
        Tok::Slash => "/",
        Tok::Caret => "^",
        _ => "?",
    }
}
