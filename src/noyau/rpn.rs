// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok (infixe) en RPN (postfix), sans parenthèses
//
// Règles:
// - Num        : sortie directe
// - Fonction   : sur la pile, ressort juste après sa parenthèse fermante
// - Op         : dépile tant que le sommet est un Op de précédence >= (gauche à droite
//                pour TOUS les opérateurs, ^ compris : 2^3^2 = (2^3)^2)
// - '('        : sur la pile
// - ')'        : dépile jusqu’à '(' ; pile vide avant '(' => parenthèses non équilibrées
//
// NOTE:
// - Les précédences viennent de TABLE_OPERATEURS (même table qu’à l’évaluation).

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{Paren, Tok};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Op(*), Paren((), Num(10), Op(+), Num(5), Paren())]
///   rpn:    [Num(3), Num(10), Num(5), Op(+), Op(*)]
pub fn to_rpn(tokens: &[Tok]) -> ResultatCalcul<Vec<Tok>> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            // fonction : on la garde sur la pile (elle sortira après son argument)
            Tok::Fonction(_) => ops.push(tok),

            Tok::Op(op) => {
                // une fonction ou '(' bloque la descente
                while let Some(&Tok::Op(sommet)) = ops.last() {
                    if sommet.precedence() < op.precedence() {
                        break;
                    }
                    ops.pop();
                    out.push(Tok::Op(sommet));
                }
                ops.push(Tok::Op(op));
            }

            Tok::Paren(Paren::Ouvrante) => ops.push(tok),

            Tok::Paren(Paren::Fermante) => {
                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Tok::Paren(Paren::Ouvrante)) => break,
                        Some(t) => out.push(t),
                        None => return Err(ErreurCalcul::MismatchedParenthesis),
                    }
                }

                // si une fonction est au sommet, elle s’applique à ce groupe
                if matches!(ops.last(), Some(Tok::Fonction(_))) {
                    out.extend(ops.pop());
                }
            }
        }
    }

    // vide la pile ops
    while let Some(t) = ops.pop() {
        if matches!(t, Tok::Paren(_)) {
            return Err(ErreurCalcul::MismatchedParenthesis);
        }
        out.push(t);
    }

    Ok(out)
}
