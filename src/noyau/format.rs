// src/noyau/format.rs

use crate::reglages::Reglages;

/// Valeur sentinelle affichée (et acceptée en entrée) pour un calcul impossible.
pub const SENTINELLE_ERREUR: &str = "Error";

/* ------------------------ Forme canonique ------------------------ */

/// f64 -> texte canonique (représentation décimale la plus courte, jamais “-0”).
/// C’est la forme stockée comme opérande après une évaluation.
pub fn texte_canonique(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    format!("{v}")
}

/* ------------------------ Helpers ------------------------ */

/// "12.3400" -> "12.34", "5.000" -> "5" ; sans point, rien ne change.
fn retirer_zeros(s: &str) -> &str {
    if !s.contains('.') {
        return s;
    }
    s.trim_end_matches('0').trim_end_matches('.')
}

/// Notation exponentielle façon navigateur (1.5e+12, -2e-10).
///
/// La précision de la mantisse descend de `precision_exp` vers 0 jusqu’à tenir
/// dans la largeur ; les zéros finaux de la mantisse sont retirés.
fn notation_exponentielle(v: f64, reglages: &Reglages) -> String {
    let mut dernier = String::new();

    for p in (0..=reglages.precision_exp).rev() {
        let brut = format!("{v:.p$e}");
        let (mantisse, exposant) = brut.split_once('e').unwrap_or((brut.as_str(), "0"));
        let signe = if exposant.starts_with('-') { "" } else { "+" };

        dernier = format!("{}e{signe}{exposant}", retirer_zeros(mantisse));
        if dernier.chars().count() <= reglages.largeur_max {
            return dernier;
        }
    }

    // largeur_max ≥ LARGEUR_MIN garantit qu’on n’arrive pas ici ; on tronque quand même
    dernier.chars().take(reglages.largeur_max).collect()
}

/* ------------------------ Affichage borné ------------------------ */

/// Texte (nombre ou sentinelle) -> chaîne d’affichage de largeur bornée.
///
/// - "Error", non numérique ou non fini => "Error"
/// - |x| = 0 ou dans [seuil_exp_bas, seuil_exp_haut) => notation décimale
/// - sinon => notation exponentielle
/// - décimal trop large => décimales tronquées (arrondies) ; sinon exponentielle
pub fn format_affichage(valeur: &str, reglages: &Reglages) -> String {
    if valeur == SENTINELLE_ERREUR {
        return SENTINELLE_ERREUR.to_string();
    }

    let v = match valeur.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => return SENTINELLE_ERREUR.to_string(),
    };

    let abs = v.abs();
    if abs != 0.0 && (abs >= reglages.seuil_exp_haut || abs < reglages.seuil_exp_bas) {
        return notation_exponentielle(v, reglages);
    }

    let s = texte_canonique(v);
    if s.chars().count() <= reglages.largeur_max {
        return s;
    }

    if s.contains('.') {
        let signe = usize::from(v < 0.0);
        let entier = format!("{}", abs.trunc()).len();
        let decimales = reglages.largeur_max.saturating_sub(entier + signe + 1);

        let fixe = format!("{v:.decimales$}");
        let court = retirer_zeros(&fixe);

        // l’arrondi ne doit ni déborder ni effacer tous les chiffres significatifs
        let efface = court.parse::<f64>().map(|x| x == 0.0).unwrap_or(true);
        if court.len() <= reglages.largeur_max && !efface {
            return court.to_string();
        }
    }

    notation_exponentielle(v, reglages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn f(s: &str) -> String {
        format_affichage(s, &Reglages::default())
    }

    #[test]
    fn sentinelle_et_non_finis() {
        assert_eq!(f("Error"), "Error");
        assert_eq!(f("abc"), "Error");
        assert_eq!(f("inf"), "Error");
        assert_eq!(f("NaN"), "Error");
    }

    #[test]
    fn decimal_court_inchange() {
        assert_eq!(f("0"), "0");
        assert_eq!(f("123"), "123");
        assert_eq!(f("-42.5"), "-42.5");
        assert_eq!(f("9999999999"), "9999999999");
    }

    #[test]
    fn decimales_tronquees() {
        assert_eq!(f("0.6666666666666666"), "0.66666667");
        assert_eq!(f("-1234.56789012"), "-1234.5679");
        assert_eq!(f("3.1000000001"), "3.1");
    }

    #[test]
    fn exponentielle_au_dela_des_seuils() {
        assert_eq!(f("10000000000"), "1e+10");
        assert_eq!(f("12345678901"), "1.2346e+10");
        assert_eq!(f("0.0000000001"), "1e-10");
        assert_eq!(f("-0.0000000001234"), "-1.234e-10");
    }

    #[test]
    fn arrondi_qui_deborde() {
        // 9999999999.7 arrondi à 0 décimale => 11 caractères => exponentielle
        assert_eq!(f("9999999999.7"), "1e+10");
        assert_eq!(f("-9999999999"), "-1e+10");
    }

    #[test]
    fn arrondi_qui_efface() {
        // -0.0000000012 : 7 décimales donneraient "-0"
        assert_eq!(f("-0.0000000012"), "-1.2e-9");
    }

    #[test]
    fn largeur_configurable() {
        let r = Reglages {
            largeur_max: 7,
            ..Reglages::default()
        };
        assert_eq!(format_affichage("3.14159265", &r), "3.14159");
        assert_eq!(format_affichage("-1e-300", &r), "-1e-300");
    }

    #[test]
    fn texte_canonique_sans_exposant() {
        assert_eq!(texte_canonique(0.0), "0");
        assert_eq!(texte_canonique(-0.0), "0");
        assert_eq!(texte_canonique(0.5), "0.5");
        assert_eq!(texte_canonique(10.0), "10");
        assert_eq!(texte_canonique(1e21), "1000000000000000000000");
    }
}
