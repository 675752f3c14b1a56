// src/noyau/jetons.rs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::One;

use super::eval::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(BigRational),

    Plus,
    Minus,
    Star,
    Slash,
    Percent, // reste (a % b)

    // Moins unaire : jamais produit par tokenize, seulement par to_rpn.
    Neg,

    LPar,
    RPar,
}

/// Remplace les symboles d’affichage par les opérateurs canoniques.
/// × -> *, ÷ -> /, − -> -
pub fn normaliser_symboles(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '×' => '*',
            '÷' => '/',
            '−' => '-',
            _ => c,
        })
        .collect()
}

/// Liste blanche (après normalisation).
pub fn caractere_autorise(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '*' | '/' | '(' | ')' | '.' | '%')
}

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Lit un littéral décimal ("12", "12.5", "5.", ".5") en rationnel exact.
fn lire_nombre(texte: &str) -> Result<BigRational, ErreurEval> {
    let (entier, frac) = match texte.split_once('.') {
        Some((e, f)) => (e, f),
        None => (texte, ""),
    };
    if frac.contains('.') {
        return Err(ErreurEval::SyntaxeInvalide("deux points décimaux dans un nombre"));
    }
    if entier.is_empty() && frac.is_empty() {
        return Err(ErreurEval::SyntaxeInvalide("point décimal isolé"));
    }

    let chiffres = format!("{entier}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or(ErreurEval::SyntaxeInvalide("nombre invalide"))?;

    if frac.is_empty() {
        Ok(BigRational::from_integer(n))
    } else {
        Ok(BigRational::new(n, pow10(frac.len())))
    }
}

/// Tokenize une chaîne déjà normalisée.
/// Supporte:
/// - nombres décimaux (12, 12.5, 5., .5)
/// - opérateurs + - * / %
/// - parenthèses ( )
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            '%' => Some(Tok::Percent),
            _ => None,
        };
        if let Some(t) = tok {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : suite de chiffres et de points (validée par lire_nombre)
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let texte: String = chars[start..i].iter().collect();
            out.push(Tok::Num(lire_nombre(&texte)?));
            continue;
        }

        return Err(ErreurEval::CaractereInvalide(c));
    }

    Ok(out)
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(r) => {
                if r.denom().is_one() {
                    format!("{}", r.numer())
                } else {
                    format!("{}/{}", r.numer(), r.denom())
                }
            }

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
