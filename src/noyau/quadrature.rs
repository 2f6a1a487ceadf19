// src/noyau/quadrature.rs
//
// Rectangles composés au point milieu + extrapolation de Richardson.
//
// Point milieu : h = (b-a)/n, somme de f(a + (k+0.5)h) pour k=0..n-1,
// le tout fois h. Erreur dominante en O(h²) => doubler n divise l'erreur
// par ~4, ce qui permet l'annulation de Richardson :
//   raffiné = (4·I_2n - I_n)/3,   erreur ≈ |I_2n - I_n|/3.
//
// Précondition : n > 0 (rejetée par l'appelant AVANT l'appel; le pipeline
// le fait). Aucun chemin d'erreur ici : NaN/inf se propagent tels quels.

/// Intégrale approchée de f sur [a,b] par n rectangles au point milieu.
pub fn point_milieu<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64,
{
    debug_assert!(n > 0, "n doit être strictement positif");

    let h = (b - a) / n as f64;
    let somme: f64 = (0..n).map(|k| f(a + (k as f64 + 0.5) * h)).sum();
    somme * h
}

/// Variante parallèle de la somme des points milieux (réduction associative,
/// insensible à l'ordre — le ré-ordonnancement flottant est assumé).
/// En dessous d'un seuil, retombe sur la version séquentielle (l'overhead
/// rayon coûterait plus que la somme).
#[cfg(feature = "parallel")]
pub fn point_milieu_parallele<F>(f: F, a: f64, b: f64, n: usize) -> f64
where
    F: Fn(f64) -> f64 + Sync,
{
    use rayon::prelude::*;

    const MIN_PARALLELE: usize = 1024;

    debug_assert!(n > 0, "n doit être strictement positif");

    if n < MIN_PARALLELE {
        return point_milieu(f, a, b, n);
    }

    let h = (b - a) / n as f64;
    let somme: f64 = (0..n)
        .into_par_iter()
        .map(|k| f(a + (k as f64 + 0.5) * h))
        .sum();
    somme * h
}

/// Combine I_n et I_2n en une estimation raffinée + une borne d'erreur.
///
/// Total : toujours un résultat, y compris I_n == I_2n (erreur 0.0)
/// ou entrées NaN/inf (propagées, à l'appelant de trier).
pub fn richardson(i_n: f64, i_2n: f64) -> (f64, f64) {
    let raffine = (4.0 * i_2n - i_n) / 3.0;
    let erreur = (i_2n - i_n).abs() / 3.0;
    (raffine, erreur)
}
