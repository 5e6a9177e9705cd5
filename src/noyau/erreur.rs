// src/noyau/erreur.rs
//
// Erreurs du noyau
// ----------------
// - ErreurCalcul  : tout ce qui interrompt evaluate() (lecture, parse, réduction)
// - ErreurDomaine : échecs numériques (division par zéro, factorielle, log/asin...)
//
// Aucune erreur n’est avalée : chaque étape remonte avec `?` jusqu’à l’appelant.

use thiserror::Error;

pub type ResultatCalcul<T> = Result<T, ErreurCalcul>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalcul {
    #[error("caractère inattendu: '{caractere}' (position {position})")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("nombre invalide: '{litteral}' (position {position})")]
    MalformedNumber { litteral: String, position: usize },

    #[error("parenthèses non équilibrées")]
    MismatchedParenthesis,

    #[error("fonction inconnue: {0}")]
    UnknownFunction(String),

    #[error("opérandes insuffisants pour '{0}'")]
    InsufficientOperands(String),

    #[error("expression invalide ({restantes} valeur(s) sur la pile)")]
    InvalidExpression { restantes: usize },

    #[error("expression trop longue: {longueur} caractères (max {max})")]
    ExpressionTooLong { longueur: usize, max: usize },

    #[error(transparent)]
    NumericDomain(#[from] ErreurDomaine),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurDomaine {
    #[error("division par zéro")]
    DivisionParZero,

    #[error("factorielle d’un nombre négatif: {0}")]
    FactorielleNegative(i64),

    #[error("factorielle d’une valeur non finie")]
    FactorielleNonFinie,

    #[error("{operation}: argument hors domaine ({argument})")]
    HorsDomaine {
        operation: &'static str,
        argument: f64,
    },
}
