//! src/app/rapport.rs
//!
//! Rapport humain (texte) : mise en forme + écriture fichier.
//!
//! Rôle : restituer les quatre nombres (I_n, I_2n, raffiné, erreur),
//! l'expression d'origine et la démarche (jetons, RPN). Aucune logique
//! numérique ici.

use std::fs;
use std::io;
use std::path::Path;

use crate::app::Saisie;
use crate::noyau::{DemarcheNoyau, ResultatIntegrale};

/// Fichier de sortie par défaut (répertoire courant).
pub const FICHIER_RAPPORT: &str = "rapport_integrale.txt";

/// Met en forme un rapport complet.
pub fn format_rapport(saisie: &Saisie, r: &ResultatIntegrale, d: &DemarcheNoyau) -> String {
    let mut out = String::new();

    out.push_str("===== Intégration — rectangles au point milieu =====\n\n");
    out.push_str(&format!("f(x)      : {}\n", saisie.expression));
    out.push_str(&format!("intervalle: [{}, {}]\n", saisie.a, saisie.b));
    out.push_str(&format!("n         : {} (passe fine : {})\n\n", r.n, 2 * r.n));

    out.push_str(&format!("I_n   (n={})  = {:.12e}\n", r.n, r.i_n));
    out.push_str(&format!("I_2n  (n={}) = {:.12e}\n", 2 * r.n, r.i_2n));
    out.push_str(&format!("raffiné (Richardson) = {:.12e}\n", r.raffine));
    out.push_str(&format!("erreur estimée       = {:.3e}\n\n", r.erreur));

    out.push_str("--- démarche ---\n");
    out.push_str(&format!("jetons : {}\n", d.jetons));
    out.push_str(&format!("RPN    : {}\n", d.rpn));
    out.push_str(&format!("note   : {}\n", d.note));

    out
}

/// Écrit le rapport (écrase le fichier précédent).
pub fn ecrire_rapport(chemin: &Path, contenu: &str) -> io::Result<()> {
    fs::write(chemin, contenu)
}
