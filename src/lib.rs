//! Intégrateur point milieu
//!
//! Évalue une fonction réelle f(x) donnée en notation infixe et l'intègre
//! sur [a,b] par rectangles composés au point milieu, avec estimation
//! d'erreur automatique (extrapolation de Richardson).
//!
//! Le cœur vit dans [`noyau`] (jetons → RPN → machine à pile → quadrature);
//! [`app`] n'est que la glu console/rapport du binaire.

pub mod app;
pub mod noyau;
