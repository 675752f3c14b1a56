// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur exacte
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe au passage
// - Puis évaluer la RPN sur des rationnels exacts
//
// Règles:
// - Moins unaire : un '-' qui arrive quand on attend une valeur devient Tok::Neg
//   (préfixe, priorité la plus forte). Un '+' unaire est ignoré.
// - Pas de multiplication implicite : "2(3)" ou "(1)(2)" sont refusés.

use num_rational::BigRational;
use num_traits::Zero;

use super::eval::ErreurEval;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Neg => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [Num(2), Num(3), Neg, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurEval> {
    if tokens.is_empty() {
        return Err(ErreurEval::SyntaxeInvalide("expression vide"));
    }

    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire et les trous de syntaxe.
    let mut prev_was_value = false;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurEval::SyntaxeInvalide("opérateur manquant"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurEval::SyntaxeInvalide("opérateur manquant avant '('"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(ErreurEval::SyntaxeInvalide("opérande manquant avant ')'"));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(ErreurEval::SyntaxeInvalide("parenthèse fermante sans ouvrante"));
                }
            }

            Tok::Minus if !prev_was_value => {
                // préfixe : ne dépile rien
                ops.push(Tok::Neg);
            }

            Tok::Plus if !prev_was_value => {}

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                if !prev_was_value {
                    return Err(ErreurEval::SyntaxeInvalide("opérande manquant"));
                }

                // associativité gauche : on sort tout ce qui lie au moins aussi fort
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) || precedence(top) < precedence(&tok) {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurEval::SyntaxeInvalide("jeton inattendu")),
        }
    }

    if !prev_was_value {
        return Err(ErreurEval::SyntaxeInvalide("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurEval::SyntaxeInvalide("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur des rationnels exacts.
///
/// Division (ou reste) par zéro => ErreurEval::NonFini.
pub fn eval_rpn(rpn: &[Tok]) -> Result<BigRational, ErreurEval> {
    const INVALIDE: ErreurEval = ErreurEval::SyntaxeInvalide("expression invalide");

    let mut st: Vec<BigRational> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(r) => st.push(r),

            Tok::Neg => {
                let x = st.pop().ok_or(INVALIDE)?;
                st.push(-x);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent => {
                let b = st.pop().ok_or(INVALIDE)?;
                let a = st.pop().ok_or(INVALIDE)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash | Tok::Percent if b.is_zero() => return Err(ErreurEval::NonFini),
                    Tok::Slash => a / b,
                    _ => a % b,
                };

                st.push(v);
            }

            Tok::LPar | Tok::RPar => {
                return Err(ErreurEval::SyntaxeInvalide("parenthèse inattendue en RPN"))
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(INVALIDE),
    }
}
