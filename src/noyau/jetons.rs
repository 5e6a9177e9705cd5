// src/noyau/jetons.rs

use std::fmt;

use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::operateurs::Operateur;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Paren {
    Ouvrante,
    Fermante,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),

    // Toute suite de lettres : le registre des fonctions tranchera à l’évaluation.
    Fonction(String),

    Paren(Paren),
}

/// Nature d’un jeton, sans sa valeur.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokKind {
    Number,
    Operator,
    Function,
    Parenthesis,
}

impl Tok {
    pub fn kind(&self) -> TokKind {
        match self {
            Tok::Num(_) => TokKind::Number,
            Tok::Op(_) => TokKind::Operator,
            Tok::Fonction(_) => TokKind::Function,
            Tok::Paren(_) => TokKind::Parenthesis,
        }
    }

    /// Symbole textuel ("+", "sin", "(" ...) ; None pour un nombre.
    pub fn symbole(&self) -> Option<String> {
        match self {
            Tok::Num(_) => None,
            autre => Some(autre.to_string()),
        }
    }
}

impl fmt::Display for Tok {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tok::Num(x) => write!(f, "{x}"),
            Tok::Op(op) => write!(f, "{}", op.symbole()),
            Tok::Fonction(nom) => f.write_str(nom),
            Tok::Paren(Paren::Ouvrante) => f.write_str("("),
            Tok::Paren(Paren::Fermante) => f.write_str(")"),
        }
    }
}

/// Tokenize une chaîne en jetons (un seul passage, sans retour arrière).
/// Supporte:
/// - nombres décimaux : suite de chiffres ASCII et de '.' (ex: 12, 12.5, .5, 5.)
/// - noms de fonctions : suite de lettres (ex: sin, ln)
/// - opérateurs de la table (+ - * / ^ !)
/// - parenthèses ( )
/// - espaces ignorés
///
/// Positions d’erreur = index de caractère (0 = premier).
pub fn tokenize(s: &str) -> ResultatCalcul<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Nombre : "1.2.3" est lu d’un bloc puis refusé par le parse f64
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let litteral: String = chars[start..i].iter().collect();
            let x = litteral
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::MalformedNumber {
                    litteral,
                    position: start,
                })?;
            out.push(Tok::Num(x));
            continue;
        }

        // Nom de fonction (casse conservée)
        if c.is_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_alphabetic() {
                i += 1;
            }
            out.push(Tok::Fonction(chars[start..i].iter().collect()));
            continue;
        }

        if let Some(op) = Operateur::depuis_symbole(c) {
            out.push(Tok::Op(op));
            i += 1;
            continue;
        }

        match c {
            '(' => out.push(Tok::Paren(Paren::Ouvrante)),
            ')' => out.push(Tok::Paren(Paren::Fermante)),
            _ => {
                return Err(ErreurCalcul::InvalidCharacter {
                    caractere: c,
                    position: i,
                })
            }
        }
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(Tok::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
