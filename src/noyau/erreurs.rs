// src/noyau/erreurs.rs
//
// Erreurs classées par étage du pipeline.
// Contrat : chaque étage échoue vite (pas de récupération partielle),
// l'appelant peut matcher sur Lex / Syntaxe / Eval uniformément.

use thiserror::Error;

pub type Resultat<T> = std::result::Result<T, ErreurNoyau>;

/// Étage jetons : suite de caractères non reconnue.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurLex {
    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    /// Identifiant qui n'est ni la variable x ni une fonction connue
    /// (ex: "sqt(2)" — faute de frappe).
    #[error("nom inconnu: \"{0}\"")]
    NomInconnu(String),

    #[error("nombre invalide: \"{0}\"")]
    NombreInvalide(String),
}

/// Étage RPN : imbrication de parenthèses malformée.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("parenthèse fermante sans ouvrante")]
    FermanteOrpheline,

    #[error("parenthèses non fermées")]
    NonFermees,
}

/// Étage évaluation : faute à l'exécution de la RPN.
///
/// NOTE: la division par zéro N'EST PAS une erreur ici — elle suit la
/// sémantique flottante standard (±inf / NaN), idem pour une base négative
/// élevée à un exposant fractionnaire.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurEval {
    /// Pile sous-remplie au moment d'appliquer un opérateur ou une fonction.
    #[error("opérande manquante pour '{0}'")]
    OperandeManquante(&'static str),

    #[error("√ : argument négatif ({0})")]
    RacineNegative(f64),

    #[error("log : argument non strictement positif ({0})")]
    LogNonPositif(f64),

    /// Une RPN bien formée laisse exactement UNE valeur sur la pile.
    #[error("RPN malformée : {0} valeur(s) sur la pile en fin d'évaluation")]
    PileFinale(usize),

    #[error("parenthèse inattendue en RPN")]
    ParentheseEnRpn,
}

/// Erreur “parapluie” du pipeline complet (jetons → RPN → quadrature).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurNoyau {
    #[error("lexique : {0}")]
    Lex(#[from] ErreurLex),

    #[error("syntaxe : {0}")]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error("évaluation : {0}")]
    Eval(#[from] ErreurEval),

    #[error("Entrée vide")]
    EntreeVide,

    #[error("n doit être strictement positif")]
    SubdivisionsNulles,
}
