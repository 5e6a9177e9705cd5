//! Noyau — évaluation (pipeline réel)
//!
//! texte -> jetons -> RPN -> réduction sur pile -> f64
//!
//! Remarque : la configuration (mode d’angle, longueur max) est figée à la
//! construction de l’Evaluateur ; evaluate() ne modifie aucun état.

use tracing::{debug, trace};

use super::config::{Config, ModeAngle};
use super::erreur::{ErreurCalcul, ResultatCalcul};
use super::jetons::{format_tokens, tokenize, Tok};
use super::operateurs::{Comportement, Fonction, Operateur};
use super::rpn::to_rpn;

/// Trace textuelle des deux étapes (jetons, RPN).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluateur {
    config: Config,
}

impl Evaluateur {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Raccourci : configuration par défaut, angles en degrés.
    pub fn degres() -> Self {
        Self::new(Config::default().degres())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// API publique : évalue une expression infixe.
    #[tracing::instrument(level = "debug", skip(self), fields(mode = %self.config.mode_angle))]
    pub fn evaluate(&self, expression: &str) -> ResultatCalcul<f64> {
        let resultat = self
            .etapes(expression)
            .and_then(|(_, rpn)| eval_rpn(&rpn, self.config.mode_angle));

        match &resultat {
            Ok(v) => debug!(resultat = *v, "évaluation terminée"),
            Err(e) => debug!(erreur = %e, "évaluation refusée"),
        }
        resultat
    }

    /// Comme evaluate(), avec en plus la démarche (jetons + RPN) en texte.
    pub fn evaluate_avec_demarche(&self, expression: &str) -> ResultatCalcul<(f64, Demarche)> {
        let (jetons, rpn) = self.etapes(expression)?;
        let valeur = eval_rpn(&rpn, self.config.mode_angle)?;

        let d = Demarche {
            jetons: format_tokens(&jetons),
            rpn: format_tokens(&rpn),
        };
        Ok((valeur, d))
    }

    /// Garde-fou longueur, puis 1) jetons 2) RPN.
    fn etapes(&self, expression: &str) -> ResultatCalcul<(Vec<Tok>, Vec<Tok>)> {
        let longueur = expression.chars().count();
        if longueur > self.config.longueur_max {
            return Err(ErreurCalcul::ExpressionTooLong {
                longueur,
                max: self.config.longueur_max,
            });
        }

        let jetons = tokenize(expression)?;
        trace!(jetons = %format_tokens(&jetons), "jetons");

        let rpn = to_rpn(&jetons)?;
        trace!(rpn = %format_tokens(&rpn), "rpn");

        Ok((jetons, rpn))
    }
}

/// Évalue avec la configuration par défaut (radians).
pub fn eval_expression(expression: &str) -> ResultatCalcul<f64> {
    Evaluateur::default().evaluate(expression)
}

/// Réduit une RPN sur une pile de valeurs.
///
/// - Num      : empile
/// - Fonction : dépile 1, (degrés -> radians si trig), applique, empile
/// - Op       : dépile selon l’arité (sommet = opérande droit), applique, empile
///
/// À la fin, il doit rester exactement une valeur.
pub fn eval_rpn(rpn: &[Tok], mode: ModeAngle) -> ResultatCalcul<f64> {
    let mut pile: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(x) => pile.push(*x),

            Tok::Fonction(nom) => {
                let f = Fonction::depuis_nom(nom)
                    .ok_or_else(|| ErreurCalcul::UnknownFunction(nom.clone()))?;
                let x = pile
                    .pop()
                    .ok_or_else(|| ErreurCalcul::InsufficientOperands(nom.clone()))?;
                pile.push(f.appliquer(x, mode)?);
            }

            Tok::Op(op) => {
                // arité lue dans la table : pile vérifiée avant de dépiler
                let n = op.arite().nombre();
                if pile.len() < n {
                    return Err(insuffisants(*op));
                }
                let operandes = pile.split_off(pile.len() - n);

                let r = match (op.descripteur().comportement, operandes.as_slice()) {
                    (Comportement::Unaire(f), &[x]) => f(x)?,
                    (Comportement::Binaire(f), &[gauche, droite]) => f(gauche, droite)?,
                    _ => return Err(insuffisants(*op)),
                };
                pile.push(r);
            }

            // une RPN issue de to_rpn n’en contient jamais
            Tok::Paren(_) => {
                return Err(ErreurCalcul::InvalidExpression {
                    restantes: pile.len(),
                })
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurCalcul::InvalidExpression {
            restantes: pile.len(),
        }),
    }
}

fn insuffisants(op: Operateur) -> ErreurCalcul {
    ErreurCalcul::InsufficientOperands(op.symbole().to_string())
}
