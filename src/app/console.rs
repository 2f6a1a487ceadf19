//! src/app/console.rs
//!
//! Saisie console (sans noyau, sans rapport).
//!
//! Rôle : demander f(x), a, b et n sur l'entrée standard, avec re-demande
//! sur nombre illisible. Aucune évaluation ici (pas de parsing d'expression) :
//! la chaîne part telle quelle vers le noyau, qui classe les fautes.

use std::io::{self, BufRead, Write};

/// Garde-fou : borne n (anti-abus / anti-gel).
const N_MAX: usize = 100_000_000;

/// Ce que l'utilisateur a fourni pour UNE intégrale.
#[derive(Clone, Debug)]
pub struct Saisie {
    pub expression: String,
    pub a: f64,
    pub b: f64,
    pub n: usize,
}

/// Lit une saisie complète. `None` si l'expression est vide
/// (convention : fin de session) ou si stdin est fermé.
pub fn lire_saisie() -> io::Result<Option<Saisie>> {
    let expression = match lire_ligne("f(x) = ")? {
        Some(s) if !s.trim().is_empty() => s.trim().to_string(),
        _ => return Ok(None),
    };

    let a = match lire_f64("a = ")? {
        Some(v) => v,
        None => return Ok(None),
    };
    let b = match lire_f64("b = ")? {
        Some(v) => v,
        None => return Ok(None),
    };
    let n = match lire_n("n = ")? {
        Some(v) => v,
        None => return Ok(None),
    };

    Ok(Some(Saisie { expression, a, b, n }))
}

/// Une ligne après une invite. `None` = fin d'entrée (EOF).
fn lire_ligne(invite: &str) -> io::Result<Option<String>> {
    print!("{invite}");
    io::stdout().flush()?;

    let mut ligne = String::new();
    let lus = io::stdin().lock().read_line(&mut ligne)?;
    if lus == 0 {
        return Ok(None); // EOF
    }
    Ok(Some(ligne.trim_end().to_string()))
}

/// Un f64, re-demandé tant que la ligne ne se lit pas comme un nombre.
fn lire_f64(invite: &str) -> io::Result<Option<f64>> {
    loop {
        let ligne = match lire_ligne(invite)? {
            Some(l) => l,
            None => return Ok(None),
        };
        match ligne.trim().parse::<f64>() {
            Ok(v) => return Ok(Some(v)),
            Err(_) => println!("nombre illisible: {ligne:?} — réessayer"),
        }
    }
}

/// Un n entier > 0 (borné), re-demandé sinon.
fn lire_n(invite: &str) -> io::Result<Option<usize>> {
    loop {
        let ligne = match lire_ligne(invite)? {
            Some(l) => l,
            None => return Ok(None),
        };
        match ligne.trim().parse::<usize>() {
            Ok(v) if v > 0 && v <= N_MAX => return Ok(Some(v)),
            Ok(_) => println!("n doit être entre 1 et {N_MAX} — réessayer"),
            Err(_) => println!("entier illisible: {ligne:?} — réessayer"),
        }
    }
}
