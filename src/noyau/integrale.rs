//! Noyau — pipeline complet d'intégration
//!
//! brut -> parenthèses -> jetons -> RPN -> [f(x) = eval_rpn] -> I_n, I_2n
//!      -> Richardson -> (estimation raffinée, borne d'erreur)
//!
//! Remarque : la quadrature appelle f via une closure sur la RPN; la
//! première faute d'évaluation (domaine, pile) est mémorisée et fait
//! échouer TOUT le pipeline une fois les sommes terminées (fail-fast par
//! expression, pas de récupération partielle). Un NaN/inf purement IEEE
//! sans faute, lui, passe comme résultat numérique.

use std::cell::RefCell;

use super::erreurs::{ErreurNoyau, Resultat};
use super::eval::eval_rpn;
use super::jetons::{format_tokens, tokenize, Tok};
use super::parentheses::verifie_parentheses;
use super::quadrature::{point_milieu, richardson};
use super::rpn::to_rpn;

/// Trace du pipeline (panneau “démarche” du rapport).
#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// Les quatre nombres du calcul : I_n, I_2n, raffiné, borne d'erreur.
#[derive(Clone, Copy, Debug)]
pub struct ResultatIntegrale {
    pub i_n: f64,
    pub i_2n: f64,
    pub raffine: f64,
    pub erreur: f64,
    /// Nombre de subdivisions de la passe grossière (la fine en fait 2n).
    pub n: usize,
}

/// Prépare une expression : trim + vide, pré-filtre parenthèses,
/// jetons, RPN. C'est la moitié “texte” du pipeline, réutilisable
/// pour évaluer f en un point sans intégrer.
pub fn prepare_expression(expr_str: &str) -> Resultat<Vec<Tok>> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }

    // fast-fail AVANT tokenisation (to_rpn re-vérifie de toute façon)
    verifie_parentheses(s)?;

    let jetons = tokenize(s)?;
    let rpn = to_rpn(&jetons)?;
    Ok(rpn)
}

/// Évalue f(x) pour une expression donnée (pratique pour sonder f
/// avant d'intégrer, et pour les tests bout-en-bout).
pub fn evalue_expression(expr_str: &str, x: f64) -> Resultat<f64> {
    let rpn = prepare_expression(expr_str)?;
    Ok(eval_rpn(&rpn, x)?)
}

/// API publique : intègre une expression sur [a,b] avec n puis 2n
/// subdivisions, combine par Richardson, et retourne:
/// - les quatre nombres (I_n, I_2n, raffiné, erreur)
/// - la démarche (jetons, RPN, note)
pub fn integre_expression(
    expr_str: &str,
    a: f64,
    b: f64,
    n: usize,
) -> Resultat<(ResultatIntegrale, DemarcheNoyau)> {
    if n == 0 {
        return Err(ErreurNoyau::SubdivisionsNulles);
    }

    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurNoyau::EntreeVide);
    }
    verifie_parentheses(s)?;

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_tokens(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);

    // 3) f(x) = eval_rpn(rpn, x), avec mémorisation de la PREMIÈRE faute.
    //    La somme continue sur NaN pour garder un coût borné et simple;
    //    la faute mémorisée prime sur le nombre obtenu.
    let faute = RefCell::new(None);
    let f = |x: f64| match eval_rpn(&rpn, x) {
        Ok(v) => v,
        Err(e) => {
            faute.borrow_mut().get_or_insert(e);
            f64::NAN
        }
    };

    // 4) Quadrature grossière (n) puis fine (2n)
    let i_n = point_milieu(&f, a, b, n);
    let i_2n = point_milieu(&f, a, b, 2 * n);

    if let Some(e) = faute.into_inner() {
        return Err(e.into());
    }

    // 5) Richardson
    let (raffine, erreur) = richardson(i_n, i_2n);

    let resultat = ResultatIntegrale {
        i_n,
        i_2n,
        raffine,
        erreur,
        n,
    };

    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
        note: "Pipeline: parenthèses → jetons → RPN → f(x) → point milieu (n, 2n) → Richardson."
            .into(),
    };

    Ok((resultat, d))
}
