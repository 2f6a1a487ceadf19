//! Noyau intégrateur point milieu
//!
//! Organisation interne :
//! - erreurs.rs     : erreurs classées (lexique / syntaxe / évaluation)
//! - jetons.rs      : tokenisation
//! - parentheses.rs : pré-filtre d'équilibre des parenthèses
//! - rpn.rs         : shunting-yard (infixe -> postfixe)
//! - eval.rs        : machine à pile (RPN + x lié -> f64)
//! - quadrature.rs  : rectangles au point milieu + Richardson
//! - integrale.rs   : pipeline complet

pub mod erreurs;
pub mod eval;
pub mod integrale;
pub mod jetons;
pub mod parentheses;
pub mod quadrature;
pub mod rpn;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::{ErreurEval, ErreurLex, ErreurNoyau, ErreurSyntaxe, Resultat};
pub use eval::eval_rpn;
pub use integrale::{evalue_expression, integre_expression, DemarcheNoyau, ResultatIntegrale};
pub use jetons::tokenize;
pub use parentheses::{parentheses_equilibrees, verifie_parentheses};
pub use quadrature::{point_milieu, richardson};
pub use rpn::to_rpn;

#[cfg(feature = "parallel")]
pub use quadrature::point_milieu_parallele;
