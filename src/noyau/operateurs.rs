// src/noyau/operateurs.rs
//
// Table des opérateurs + registre des fonctions
// ---------------------------------------------
// Une seule table constante : jetons.rs y lit l’ensemble des symboles,
// rpn.rs les précédences, eval.rs l’arité et le comportement.
//
// Règles numériques :
// - division par zéro        => ErreurDomaine::DivisionParZero
// - NaN produit par ^ ou par une fonction (sin(inf)) => ErreurDomaine::HorsDomaine
// - débordement (10^400)     => ±inf, renvoyé tel quel
// - factorielle exacte (big int) jusqu’à 170!, +inf au-delà

use num_bigint::BigUint;
use num_traits::{One, ToPrimitive};

use super::config::ModeAngle;
use super::erreur::ErreurDomaine;

/// Plus grand n tel que n! tienne dans un f64.
const FACTORIELLE_MAX: u32 = 170;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Factorielle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arite {
    Unaire,
    Binaire,
}

impl Arite {
    pub fn nombre(self) -> usize {
        match self {
            Arite::Unaire => 1,
            Arite::Binaire => 2,
        }
    }
}

/// Comportement d’un opérateur. L’arité découle de la variante :
/// impossible de déclarer un opérateur binaire avec une fonction unaire.
#[derive(Clone, Copy, Debug)]
pub enum Comportement {
    Unaire(fn(f64) -> Result<f64, ErreurDomaine>),
    Binaire(fn(f64, f64) -> Result<f64, ErreurDomaine>),
}

#[derive(Clone, Copy, Debug)]
pub struct DescripteurOperateur {
    pub symbole: char,
    pub operateur: Operateur,
    /// Plus haut = lie plus fort.
    pub precedence: u8,
    pub comportement: Comportement,
}

impl DescripteurOperateur {
    pub fn arite(&self) -> Arite {
        match self.comportement {
            Comportement::Unaire(_) => Arite::Unaire,
            Comportement::Binaire(_) => Arite::Binaire,
        }
    }
}

/// Ordre = ordre des variantes de `Operateur` (vérifié à la compilation plus bas).
pub const TABLE_OPERATEURS: [DescripteurOperateur; 6] = [
    DescripteurOperateur {
        symbole: '+',
        operateur: Operateur::Plus,
        precedence: 1,
        comportement: Comportement::Binaire(addition),
    },
    DescripteurOperateur {
        symbole: '-',
        operateur: Operateur::Moins,
        precedence: 1,
        comportement: Comportement::Binaire(soustraction),
    },
    DescripteurOperateur {
        symbole: '*',
        operateur: Operateur::Fois,
        precedence: 2,
        comportement: Comportement::Binaire(multiplication),
    },
    DescripteurOperateur {
        symbole: '/',
        operateur: Operateur::Divise,
        precedence: 2,
        comportement: Comportement::Binaire(division),
    },
    DescripteurOperateur {
        symbole: '^',
        operateur: Operateur::Puissance,
        precedence: 3,
        comportement: Comportement::Binaire(puissance),
    },
    DescripteurOperateur {
        symbole: '!',
        operateur: Operateur::Factorielle,
        precedence: 4,
        comportement: Comportement::Unaire(factorielle),
    },
];

const _: () = {
    let mut i = 0;
    while i < TABLE_OPERATEURS.len() {
        assert!(TABLE_OPERATEURS[i].operateur as usize == i);
        i += 1;
    }
};

impl Operateur {
    pub fn depuis_symbole(c: char) -> Option<Operateur> {
        TABLE_OPERATEURS
            .iter()
            .find(|d| d.symbole == c)
            .map(|d| d.operateur)
    }

    pub fn descripteur(self) -> &'static DescripteurOperateur {
        &TABLE_OPERATEURS[self as usize]
    }

    pub fn symbole(self) -> char {
        self.descripteur().symbole
    }

    pub fn precedence(self) -> u8 {
        self.descripteur().precedence
    }

    pub fn arite(self) -> Arite {
        self.descripteur().arite()
    }
}

/* ------------------------ Comportements ------------------------ */

fn addition(a: f64, b: f64) -> Result<f64, ErreurDomaine> {
    Ok(a + b)
}

fn soustraction(a: f64, b: f64) -> Result<f64, ErreurDomaine> {
    Ok(a - b)
}

fn multiplication(a: f64, b: f64) -> Result<f64, ErreurDomaine> {
    Ok(a * b)
}

fn division(a: f64, b: f64) -> Result<f64, ErreurDomaine> {
    if b == 0.0 {
        return Err(ErreurDomaine::DivisionParZero);
    }
    Ok(a / b)
}

fn puissance(a: f64, b: f64) -> Result<f64, ErreurDomaine> {
    let r = a.powf(b);
    // (-8)^(1/3) : pas de résultat réel
    if r.is_nan() && !a.is_nan() && !b.is_nan() {
        return Err(ErreurDomaine::HorsDomaine {
            operation: "^",
            argument: a,
        });
    }
    Ok(r)
}

/// n! avec n = troncature de x (vers zéro).
fn factorielle(x: f64) -> Result<f64, ErreurDomaine> {
    if !x.is_finite() {
        return Err(ErreurDomaine::FactorielleNonFinie);
    }

    let n = x.trunc();
    if n < 0.0 {
        return Err(ErreurDomaine::FactorielleNegative(n as i64));
    }
    if n > f64::from(FACTORIELLE_MAX) {
        return Ok(f64::INFINITY);
    }

    let produit = (2..=n as u32).fold(BigUint::one(), |acc, k| acc * k);
    Ok(produit.to_f64().unwrap_or(f64::INFINITY))
}

/* ------------------------ Fonctions ------------------------ */

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Log,
    Ln,
    Abs,
}

const REGISTRE_FONCTIONS: [(&str, Fonction); 9] = [
    ("sin", Fonction::Sin),
    ("cos", Fonction::Cos),
    ("tan", Fonction::Tan),
    ("asin", Fonction::Asin),
    ("acos", Fonction::Acos),
    ("atan", Fonction::Atan),
    ("log", Fonction::Log),
    ("ln", Fonction::Ln),
    ("abs", Fonction::Abs),
];

impl Fonction {
    /// Sensible à la casse : "SIN" n’est pas reconnu.
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        REGISTRE_FONCTIONS
            .iter()
            .find(|(n, _)| *n == nom)
            .map(|(_, f)| *f)
    }

    pub fn nom(self) -> &'static str {
        REGISTRE_FONCTIONS
            .iter()
            .find(|(_, f)| *f == self)
            .map_or("?", |(n, _)| *n)
    }

    /// Les six fonctions trigonométriques : leur argument suit le mode d’angle.
    pub fn est_angulaire(self) -> bool {
        matches!(
            self,
            Fonction::Sin
                | Fonction::Cos
                | Fonction::Tan
                | Fonction::Asin
                | Fonction::Acos
                | Fonction::Atan
        )
    }

    pub fn appliquer(self, x: f64, mode: ModeAngle) -> Result<f64, ErreurDomaine> {
        let x = if self.est_angulaire() {
            mode.vers_radians(x)
        } else {
            x
        };

        let hors_domaine = match self {
            Fonction::Log | Fonction::Ln => x <= 0.0,
            Fonction::Asin | Fonction::Acos => x.abs() > 1.0,
            _ => false,
        };
        if hors_domaine {
            return Err(ErreurDomaine::HorsDomaine {
                operation: self.nom(),
                argument: x,
            });
        }

        let r = match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Asin => x.asin(),
            Fonction::Acos => x.acos(),
            Fonction::Atan => x.atan(),
            Fonction::Log => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Abs => x.abs(),
        };

        // sin(inf), cos(inf)... : même règle que pour ^
        if r.is_nan() && !x.is_nan() {
            return Err(ErreurDomaine::HorsDomaine {
                operation: self.nom(),
                argument: x,
            });
        }
        Ok(r)
    }
}
