//! src/app/touches.rs
//!
//! Événements logiques (indépendants de l’origine : clic ou clavier)
//! + correspondance clavier -> événement.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Addition,
    Soustraction,
    Multiplication,
    Division,
}

impl Operateur {
    /// Symbole d’affichage (historique + pavé).
    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Addition => "+",
            Operateur::Soustraction => "−",
            Operateur::Multiplication => "×",
            Operateur::Division => "÷",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Evenement {
    /// Chiffre 0..=9.
    Chiffre(u8),
    Decimale,
    Operateur(Operateur),
    Egal,
    Effacer,
    Inverser,
    Pourcentage,
    Supprimer,
}

// rejeu sans interface : natif seulement
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("touche inconnue: {0:?}")]
pub struct ToucheInconnue(pub char);

/// Caractère tapé -> événement.
pub fn touche_caractere(c: char) -> Option<Evenement> {
    let ev = match c {
        '0'..='9' => Evenement::Chiffre(c as u8 - b'0'),
        '.' | ',' => Evenement::Decimale,
        '+' => Evenement::Operateur(Operateur::Addition),
        '-' | '−' => Evenement::Operateur(Operateur::Soustraction),
        '*' | 'x' | '×' => Evenement::Operateur(Operateur::Multiplication),
        '/' | '÷' => Evenement::Operateur(Operateur::Division),
        '=' => Evenement::Egal,
        '%' => Evenement::Pourcentage,
        'i' => Evenement::Inverser,
        _ => return None,
    };
    Some(ev)
}

/// Touche nommée (noms egui / navigateur) -> événement.
pub fn touche_nommee(nom: &str) -> Option<Evenement> {
    match nom {
        "Enter" => Some(Evenement::Egal),
        "Backspace" => Some(Evenement::Supprimer),
        "Escape" => Some(Evenement::Effacer),
        _ => None,
    }
}

/// Séquence texte -> événements (mode sans interface).
///
/// Jetons séparés par des espaces : une touche nommée ("Enter") ou une suite
/// de caractères ("12+3").
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
pub fn sequence_touches(s: &str) -> Result<Vec<Evenement>, ToucheInconnue> {
    let mut out = Vec::new();
    for mot in s.split_whitespace() {
        if let Some(ev) = touche_nommee(mot) {
            out.push(ev);
            continue;
        }
        for c in mot.chars() {
            out.push(touche_caractere(c).ok_or(ToucheInconnue(c))?);
        }
    }
    Ok(out)
}
