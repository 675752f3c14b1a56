//! Noyau de calcul (sans UI)
//!
//! Organisation interne :
//! - jetons.rs   : normalisation des symboles, liste blanche, tokenisation
//! - rpn.rs      : shunting-yard + évaluation RPN exacte (rationnels)
//! - eval.rs     : pipeline complet + ErreurEval
//! - format.rs   : affichage borné (décimal / exponentielle) + forme canonique

pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use eval::{eval_expression, ErreurEval};
pub use format::{format_affichage, texte_canonique, SENTINELLE_ERREUR};
