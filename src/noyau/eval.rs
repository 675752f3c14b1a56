//! Noyau — évaluation (pipeline réel)
//!
//! normalise (× ÷ −) -> liste blanche -> jetons -> RPN -> rationnel exact -> f64
//!
//! Aucune exécution dynamique : la grammaire est fermée sur la liste blanche,
//! et chaque échec est une variante d’ErreurEval (jamais de panique).

use num_traits::ToPrimitive;
use thiserror::Error;

use super::jetons::{caractere_autorise, format_tokens, normaliser_symboles, tokenize};
use super::rpn::{eval_rpn, to_rpn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("caractère interdit: '{0}'")]
    CaractereInvalide(char),

    #[error("syntaxe invalide: {0}")]
    SyntaxeInvalide(&'static str),

    /// Division par zéro ou dépassement de la plage f64.
    #[error("résultat non fini")]
    NonFini,
}

/// API publique : évalue une expression (symboles d’affichage acceptés).
pub fn eval_expression(expr_str: &str) -> Result<f64, ErreurEval> {
    // 1) Symboles d’affichage -> opérateurs canoniques
    let s = normaliser_symboles(expr_str);

    // 2) Liste blanche, avant toute lecture
    if let Some(c) = s.chars().find(|c| !caractere_autorise(*c)) {
        return Err(ErreurEval::CaractereInvalide(c));
    }

    // 3) Jetons + RPN
    let jetons = tokenize(&s)?;
    let rpn = to_rpn(&jetons)?;
    tracing::trace!(rpn = %format_tokens(&rpn), "expression compilée");

    // 4) Valeur exacte, puis lecture f64 (bornée)
    let exact = eval_rpn(&rpn)?;
    match exact.to_f64() {
        Some(v) if v.is_finite() => Ok(v),
        _ => Err(ErreurEval::NonFini),
    }
}

#[cfg(test)]
mod tests {
    use super::{eval_expression, ErreurEval};

    fn ok(s: &str) -> f64 {
        eval_expression(s).unwrap_or_else(|e| panic!("eval_expression({s:?}) erreur: {e}"))
    }

    fn assert_proche(a: f64, b: f64) {
        if (a - b).abs() > 1e-12 * b.abs().max(1.0) {
            panic!("diff:\nA={a:?}\nB={b:?}");
        }
    }

    // --- Arithmétique de base ---

    #[test]
    fn quatre_operations() {
        assert_eq!(ok("7 + 3"), 10.0);
        assert_eq!(ok("7 - 10"), -3.0);
        assert_eq!(ok("6 * 7"), 42.0);
        assert_eq!(ok("1 / 4"), 0.25);
    }

    #[test]
    fn symboles_affichage() {
        assert_eq!(ok("8 × 2 ÷ 4 − 1"), 3.0);
    }

    #[test]
    fn precedence_et_parentheses() {
        assert_eq!(ok("2 + 3 * 4"), 14.0);
        assert_eq!(ok("(2 + 3) * 4"), 20.0);
        assert_eq!(ok("  ( 1 + ( 2 * ( 3 + 4 ) ) ) "), 15.0);
    }

    // --- Exactitude : pas d’erreur binaire au milieu du calcul ---

    #[test]
    fn decimaux_exacts() {
        assert_eq!(ok("0.1 + 0.2"), 0.3);
        assert_eq!(ok("1.1 * 3"), 3.3);
        assert_proche(ok("1 / 3"), 1.0 / 3.0);
    }

    #[test]
    fn pourcentage_via_division() {
        assert_eq!(ok("50/100"), 0.5);
        assert_eq!(ok("-12.5/100"), -0.125);
    }

    // --- Erreurs ---

    #[test]
    fn division_par_zero() {
        assert_eq!(eval_expression("5/0"), Err(ErreurEval::NonFini));
        assert_eq!(eval_expression("5 ÷ 0"), Err(ErreurEval::NonFini));
    }

    #[test]
    fn depassement_f64() {
        let enorme = format!("1{} * 10", "0".repeat(320));
        assert_eq!(eval_expression(&enorme), Err(ErreurEval::NonFini));
    }

    #[test]
    fn caracteres_interdits() {
        assert_eq!(
            eval_expression("alert(1)"),
            Err(ErreurEval::CaractereInvalide('a'))
        );
        assert_eq!(eval_expression("2 ^ 3"), Err(ErreurEval::CaractereInvalide('^')));
        assert_eq!(eval_expression("1e3"), Err(ErreurEval::CaractereInvalide('e')));
    }

    #[test]
    fn syntaxe_invalide() {
        for s in ["", "   ", "1 +", "(", "1..2", "3 4"] {
            assert!(
                matches!(eval_expression(s), Err(ErreurEval::SyntaxeInvalide(_))),
                "{s:?}"
            );
        }
    }

    #[test]
    fn messages_lisibles() {
        assert_eq!(ErreurEval::NonFini.to_string(), "résultat non fini");
        assert_eq!(
            ErreurEval::CaractereInvalide('$').to_string(),
            "caractère interdit: '$'"
        );
    }
}
