// src/main.rs
//
// Intégrateur point milieu — point d'entrée console
// -------------------------------------------------
// But:
// - demander f(x), a, b, n
// - intégrer via le noyau (point milieu n et 2n + Richardson)
// - afficher le rapport et le persister dans rapport_integrale.txt
//
// IMPORTANT (structure projet):
// - Aucun calcul ici : le séquencement seulement.
// - Les fautes du noyau (lexique / syntaxe / évaluation) sont affichées
//   et la session continue; expression vide = fin de session.

use std::io;
use std::path::Path;

use integrateur_milieu::app;
use integrateur_milieu::app::rapport::{ecrire_rapport, format_rapport, FICHIER_RAPPORT};
use integrateur_milieu::noyau::integre_expression;

/// Titre unique (bannière).
const TITRE_APP: &str = "Intégrateur point milieu";

fn main() -> io::Result<()> {
    println!("{TITRE_APP}");
    println!("Expression en x (sqrt/sin/cos/tan/log, + - * / ^). Expression vide pour quitter.");
    println!();

    loop {
        let saisie = match app::console::lire_saisie()? {
            Some(s) => s,
            None => break, // vide ou EOF : fin de session
        };

        match integre_expression(&saisie.expression, saisie.a, saisie.b, saisie.n) {
            Ok((resultat, demarche)) => {
                let rapport = format_rapport(&saisie, &resultat, &demarche);
                println!("\n{rapport}");

                let chemin = Path::new(FICHIER_RAPPORT);
                match ecrire_rapport(chemin, &rapport) {
                    Ok(()) => println!("(rapport écrit dans {FICHIER_RAPPORT})\n"),
                    Err(e) => println!("(rapport non écrit : {e})\n"),
                }
            }
            Err(e) => {
                println!("erreur : {e}\n");
            }
        }
    }

    Ok(())
}
