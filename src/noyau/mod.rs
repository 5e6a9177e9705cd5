//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - jetons.rs     : tokenisation (Tok, TokKind)
//! - operateurs.rs : table des opérateurs + registre des fonctions (partagés)
//! - rpn.rs        : shunting-yard -> RPN
//! - eval.rs       : réduction de la RPN + pipeline complet
//! - config.rs     : mode d’angle, garde-fou de longueur
//! - erreur.rs     : erreurs typées

pub mod config;
pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use config::{Config, ModeAngle, LONGUEUR_MAX_DEFAUT};
pub use erreur::{ErreurCalcul, ErreurDomaine, ResultatCalcul};
pub use eval::{eval_expression, eval_rpn, Demarche, Evaluateur};
pub use jetons::{format_tokens, tokenize, Paren, Tok, TokKind};
pub use operateurs::{Arite, Fonction, Operateur, TABLE_OPERATEURS};
pub use rpn::to_rpn;
