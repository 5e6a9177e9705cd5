// src/lib.rs
//
// Calculatrice RPN — évaluation d’expressions arithmétiques
// ---------------------------------------------------------
// Pipeline : texte -> jetons -> RPN (shunting-yard) -> f64
//
// Usage :
//   let v = calculatrice_rpn::eval_expression("3*(10+5)")?;        // radians
//   let v = calculatrice_rpn::Evaluateur::degres().evaluate("sin(90)")?;
//
// Pas d’interface ici (CLI / affichage) : l’appelant formate lui-même
// le résultat ou l’erreur.

pub mod noyau;

pub use noyau::{
    eval_expression, eval_rpn, format_tokens, to_rpn, tokenize, Arite, Config, Demarche,
    ErreurCalcul, ErreurDomaine, Evaluateur, Fonction, ModeAngle, Operateur, Paren,
    ResultatCalcul, Tok, TokKind, LONGUEUR_MAX_DEFAUT, TABLE_OPERATEURS,
};
