//! Tests scientifiques (campagne) : comportements attendus du pipeline complet.
//!
//! - valeurs de référence (arithmétique, factorielle, trig en degrés)
//! - choix explicites : ^ associatif à gauche, nombres à deux points refusés,
//!   division par zéro = erreur de domaine, pas de moins unaire
//! - stress borné (longueur, profondeur de parenthèses)

use std::time::{Duration, Instant};

use super::{eval_expression, ErreurCalcul, ErreurDomaine, Evaluateur};

fn eval_ok(expr: &str) -> f64 {
    eval_expression(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn eval_err(expr: &str) -> ErreurCalcul {
    match eval_expression(expr) {
        Ok(v) => panic!("expr={expr:?} aurait dû échouer, valeur={v}"),
        Err(e) => e,
    }
}

fn assert_proche(expr: &str, v: f64, attendu: f64) {
    assert!(
        (v - attendu).abs() < 1e-9,
        "expr={expr:?} valeur={v} attendu={attendu}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Valeurs de référence ------------------------ */

#[test]
fn sci_valeurs_reference() {
    assert_eq!(eval_ok("1+2+3+4"), 10.0);
    assert_eq!(eval_ok("3*(10+5)"), 45.0);
    assert_eq!(eval_ok("5!"), 120.0);
    assert_eq!(eval_ok("2*3+4*5"), 26.0);
    assert_eq!(eval_ok("(2+3)*(4+5)"), 45.0);
    assert_eq!(eval_ok("100/(2*5)/2"), 5.0);
    assert_eq!(eval_ok("12.5+3"), 15.5);
    assert_eq!(eval_ok("3!+2^3"), 14.0);
}

#[test]
fn sci_trig_degres() {
    let deg = Evaluateur::degres();

    let v = deg.evaluate("1+2+3+4+sin(90)").unwrap();
    assert_proche("1+2+3+4+sin(90)", v, 11.0);

    assert_proche("cos(180)", deg.evaluate("cos(180)").unwrap(), -1.0);
    assert_proche("tan(45)", deg.evaluate("tan(45)").unwrap(), 1.0);
    assert_proche("sin(30)*2", deg.evaluate("sin(30)*2").unwrap(), 1.0);

    // log/ln/abs ne sont pas affectés par le mode
    assert_proche("log(100)", deg.evaluate("log(100)").unwrap(), 2.0);
    assert_proche("abs(0-7)", deg.evaluate("abs(0-7)").unwrap(), 7.0);
}

#[test]
fn sci_trig_inverse_en_degres_convertit_l_entree() {
    // l’argument des six fonctions trig est converti, asin/acos/atan compris
    let deg = Evaluateur::degres();
    let v = deg.evaluate("asin(30)").unwrap();
    assert_proche("asin(30)", v, 30f64.to_radians().asin());

    // 90° -> π/2 > 1 : hors domaine pour asin
    assert!(matches!(
        deg.evaluate("asin(90)"),
        Err(ErreurCalcul::NumericDomain(ErreurDomaine::HorsDomaine { operation: "asin", .. }))
    ));
}

#[test]
fn sci_trig_radians() {
    assert_proche("sin(0)", eval_ok("sin(0)"), 0.0);
    assert_proche("cos(0)+1", eval_ok("cos(0)+1"), 2.0);
    assert_proche("atan(1)*4", eval_ok("atan(1)*4"), std::f64::consts::PI);
    assert_proche("acos(0)*2", eval_ok("acos(0)*2"), std::f64::consts::PI);
    assert_proche("ln(1)", eval_ok("ln(1)"), 0.0);
}

/* ------------------------ Choix explicites ------------------------ */

#[test]
fn sci_puissance_associative_a_gauche() {
    // (2^3)^2 = 64, et non 2^(3^2) = 512
    assert_eq!(eval_ok("2^3^2"), 64.0);
    assert_eq!(eval_ok("2^(3^2)"), 512.0);
}

#[test]
fn sci_nombre_a_deux_points() {
    assert_eq!(
        eval_err("1.2.3"),
        ErreurCalcul::MalformedNumber {
            litteral: "1.2.3".into(),
            position: 0,
        }
    );
}

#[test]
fn sci_division_par_zero() {
    assert_eq!(
        eval_err("1/0"),
        ErreurCalcul::NumericDomain(ErreurDomaine::DivisionParZero)
    );
    assert_eq!(
        eval_err("0/0"),
        ErreurCalcul::NumericDomain(ErreurDomaine::DivisionParZero)
    );
    assert_eq!(
        eval_err("5/(2-2)"),
        ErreurCalcul::NumericDomain(ErreurDomaine::DivisionParZero)
    );
}

#[test]
fn sci_factorielle() {
    assert_eq!(eval_ok("0!"), 1.0);
    // troncature vers zéro
    assert_eq!(eval_ok("4.7!"), 24.0);
    assert_eq!(eval_ok("3!!"), 720.0);
    assert_eq!(eval_ok("171!"), f64::INFINITY);
    assert_eq!(
        eval_err("(1-6)!"),
        ErreurCalcul::NumericDomain(ErreurDomaine::FactorielleNegative(-5))
    );
}

#[test]
fn sci_debordement_vers_infini() {
    assert_eq!(eval_ok("10^400"), f64::INFINITY);
    assert_eq!(eval_ok("0-10^400"), f64::NEG_INFINITY);
}

#[test]
fn sci_trig_d_un_infini() {
    // 10^400 = +inf est accepté seul, mais sin(+inf) n’a pas de valeur
    assert!(matches!(
        eval_err("sin(10^400)"),
        ErreurCalcul::NumericDomain(ErreurDomaine::HorsDomaine { operation: "sin", .. })
    ));
    assert!(matches!(
        Evaluateur::degres().evaluate("cos(10^400)"),
        Err(ErreurCalcul::NumericDomain(ErreurDomaine::HorsDomaine { operation: "cos", .. }))
    ));
}

#[test]
fn sci_pas_de_moins_unaire() {
    assert_eq!(eval_err("-3"), ErreurCalcul::InsufficientOperands("-".into()));
    assert_eq!(eval_ok("0-3"), -3.0);
}

#[test]
fn sci_pas_de_multiplication_implicite() {
    // 2(3+4) : deux valeurs restent sur la pile
    assert_eq!(
        eval_err("2(3+4)"),
        ErreurCalcul::InvalidExpression { restantes: 2 }
    );
}

#[test]
fn sci_erreurs_pipeline() {
    assert_eq!(eval_err("(1+2"), ErreurCalcul::MismatchedParenthesis);
    assert_eq!(eval_err("1+2)"), ErreurCalcul::MismatchedParenthesis);
    assert_eq!(eval_err("foo(1)"), ErreurCalcul::UnknownFunction("foo".into()));
    assert_eq!(eval_err("SIN(1)"), ErreurCalcul::UnknownFunction("SIN".into()));
    assert_eq!(eval_err("1 2"), ErreurCalcul::InvalidExpression { restantes: 2 });
    assert_eq!(
        eval_err("1 $ 2"),
        ErreurCalcul::InvalidCharacter {
            caractere: '$',
            position: 2,
        }
    );
}

/* ------------------------ Déterminisme ------------------------ */

#[test]
fn sci_idempotence() {
    let e = Evaluateur::degres();
    for expr in ["1+2*3", "sin(45)^2+cos(45)^2", "5!/3!", "1/0", "(1"] {
        let a = e.evaluate(expr);
        let b = e.evaluate(expr);
        assert_eq!(a, b, "expr={expr:?}");
    }
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_somme_longue() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["1"; 1000].join("+");
    budget(t0, max);

    assert_eq!(eval_ok(&expr), 1000.0);
    budget(t0, max);
}

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // pile explicite : pas de récursion, donc pas de risque de débordement
    let n = 800;
    let expr = format!("{}1{}", "(".repeat(n), "+1)".repeat(n));
    budget(t0, max);

    assert_eq!(eval_ok(&expr), (n + 1) as f64);
    budget(t0, max);
}

#[test]
fn sci_stress_longueur_refusee() {
    let expr = "1+".repeat(3000) + "1";
    assert!(matches!(
        eval_err(&expr),
        ErreurCalcul::ExpressionTooLong { longueur: 6001, .. }
    ));
}
