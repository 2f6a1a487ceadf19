// src/app.rs
//
// Intégrateur point milieu — module App (racine)
// ----------------------------------------------
// Rôle:
// - Déclarer les sous-modules (console.rs + rapport.rs)
// - Ré-exporter la saisie (pour main.rs: use crate::app::Saisie;)
//
// Important:
// - Aucun calcul ici : le noyau expose des appels de fonction simples,
//   cette couche ne fait que séquencer (lire -> calculer -> restituer).

pub mod console;
pub mod rapport;

// Ré-export pratique : `use crate::app::Saisie;`
pub use console::Saisie;
