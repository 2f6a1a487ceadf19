//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - on accepte certaines erreurs attendues (domaine sqrt/log, etc.)
//! - invariant clé : le pipeline est une fonction pure de (expr, a, b, n)
//!   => deux passes identiques donnent exactement les mêmes bits

use std::time::{Duration, Instant};

use super::erreurs::{ErreurEval, ErreurNoyau};
use super::integrale::integre_expression;

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

/* ------------------------ Helpers fuzz ------------------------ */

fn is_erreur_attendue(e: &ErreurNoyau) -> bool {
    // Liste blanche : fautes *normales* pour un fuzz qui compose
    // librement sqrt/log avec des sous-expressions quelconques.
    matches!(
        e,
        ErreurNoyau::Eval(ErreurEval::RacineNegative(_))
            | ErreurNoyau::Eval(ErreurEval::LogNonPositif(_))
    )
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_atom(rng: &mut Rng) -> String {
    match rng.pick(6) {
        0 => "x".to_string(),
        1 => format!("{}", rng.pick(9) + 1),
        2 => format!("{}.5", rng.pick(4)),
        3 => "(x+2)".to_string(),
        4 => "(x*x+1)".to_string(),
        _ => {
            if rng.coin() {
                "2e-1".to_string()
            } else {
                "1.5".to_string()
            }
        }
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atom(rng);
    }

    match rng.pick(12) {
        0 => gen_atom(rng),
        1 => format!("({}+{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("({}-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("({}*{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({}/{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("sin({})", gen_expr(rng, depth - 1)),
        6 => format!("cos({})", gen_expr(rng, depth - 1)),
        7 => format!("sqrt({})", gen_expr(rng, depth - 1)),
        8 => format!("log({})", gen_expr(rng, depth - 1)),
        // moins unaire collé derrière un opérateur binaire
        9 => format!("({}*-{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        10 => format!("({}--{})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        _ => format!("-({})", gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_robustesse_et_erreurs_classees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        match integre_expression(&expr, 0.5, 2.0, 16) {
            Ok((r, _d)) => {
                // NaN/inf IEEE acceptés; jamais de panique — c'est le contrat
                let _ = r.raffine;
                seen_ok += 1;
            }
            Err(e) => {
                // Seules les fautes de domaine sont attendues ici : le
                // générateur ne produit ni lexique ni syntaxe invalides.
                assert!(
                    is_erreur_attendue(&e),
                    "erreur non attendue: expr={expr:?} err={e}"
                );
                seen_err += 1;
            }
        }
    }

    // On veut surtout des succès; le compte d'erreurs dépend du seed.
    assert!(seen_ok > 20, "trop peu de succès: {seen_ok}");

    // Sonde déterministe : une faute de domaine DOIT sortir classée,
    // même au milieu d'une somme de quadrature.
    let e = integre_expression("log(x-3)", 0.5, 2.0, 16).unwrap_err();
    assert!(is_erreur_attendue(&e), "faute mal classée: {e} ({seen_err} vues en fuzz)");
}

#[test]
fn fuzz_safe_determinisme_du_pipeline() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..60 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 4);

        let premiere = integre_expression(&expr, -1.0, 3.0, 32);
        let seconde = integre_expression(&expr, -1.0, 3.0, 32);

        match (premiere, seconde) {
            (Ok((r1, d1)), Ok((r2, d2))) => {
                // mêmes bits, NaN compris
                assert_eq!(r1.i_n.to_bits(), r2.i_n.to_bits(), "expr={expr:?}");
                assert_eq!(r1.i_2n.to_bits(), r2.i_2n.to_bits(), "expr={expr:?}");
                assert_eq!(r1.raffine.to_bits(), r2.raffine.to_bits(), "expr={expr:?}");
                assert_eq!(r1.erreur.to_bits(), r2.erreur.to_bits(), "expr={expr:?}");
                assert_eq!(d1.rpn, d2.rpn);
            }
            (Err(e1), Err(e2)) => assert_eq!(e1, e2, "expr={expr:?}"),
            (a, b) => panic!("non déterministe: expr={expr:?} {a:?} vs {b:?}"),
        }
    }
}

#[test]
fn fuzz_safe_grosse_expression_plate() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // somme plate de 400 termes : la RPN reste peu profonde
    // (l'associativité gauche dépile au fur et à mesure)
    let mut expr = String::new();
    for k in 0..400 {
        if k > 0 {
            expr.push('+');
        }
        expr.push('x');
    }

    let (r, _d) = integre_expression(&expr, 0.0, 1.0, 8).unwrap_or_else(|e| panic!("err: {e}"));

    // 400 * ∫x sur [0,1] = 200 (exact au point milieu, degré 1)
    assert!((r.raffine - 200.0).abs() < 1e-9, "raffine={}", r.raffine);
    budget(t0, max);
}
