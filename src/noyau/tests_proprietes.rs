//! Tests de propriétés : invariants du noyau et de la machine à états.
//!
//! - a op b (b ≠ 0) : résultat juste à la tolérance flottante près
//! - affichage : jamais plus large que largeur_max, quelle que soit la valeur
//! - séquences de touches aléatoires : pas de panique, écran toujours borné
//! - Effacer : idempotent, ramène à l’état initial

use proptest::prelude::*;

use super::{eval_expression, format_affichage, texte_canonique};
use crate::app::etat::Calculatrice;
use crate::app::touches::{Evenement, Operateur};
use crate::reglages::Reglages;

/* ------------------------ Stratégies ------------------------ */

/// Littéral décimal signé, jusqu’à 3 décimales (ex: "-12.375").
fn litteral() -> impl Strategy<Value = (String, f64)> {
    (-1_000_000i64..1_000_000, 0u32..4).prop_map(|(n, dec)| {
        let v = n as f64 / 10f64.powi(dec as i32);
        (texte_canonique(v), v)
    })
}

fn operateur() -> impl Strategy<Value = Operateur> {
    prop_oneof![
        Just(Operateur::Addition),
        Just(Operateur::Soustraction),
        Just(Operateur::Multiplication),
        Just(Operateur::Division),
    ]
}

fn evenement() -> impl Strategy<Value = Evenement> {
    prop_oneof![
        4 => (0u8..=9).prop_map(Evenement::Chiffre),
        1 => Just(Evenement::Decimale),
        2 => operateur().prop_map(Evenement::Operateur),
        1 => Just(Evenement::Egal),
        1 => Just(Evenement::Inverser),
        1 => Just(Evenement::Pourcentage),
        1 => Just(Evenement::Supprimer),
    ]
}

fn proche(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #[test]
    fn prop_deux_operandes((ta, a) in litteral(), (tb, b) in litteral(), op in operateur()) {
        prop_assume!(op != Operateur::Division || b != 0.0);

        let attendu = match op {
            Operateur::Addition => a + b,
            Operateur::Soustraction => a - b,
            Operateur::Multiplication => a * b,
            Operateur::Division => a / b,
        };
        let obtenu = eval_expression(&format!("{ta} {} {tb}", op.symbole())).unwrap();
        prop_assert!(proche(obtenu, attendu), "{ta} {:?} {tb} = {obtenu}, attendu {attendu}", op);
    }

    #[test]
    fn prop_affichage_borne_f64(v in any::<f64>()) {
        let r = Reglages::default();
        let s = format_affichage(&texte_canonique(v), &r);
        prop_assert!(s.chars().count() <= r.largeur_max, "{v:?} -> {s:?}");
    }

    #[test]
    fn prop_affichage_borne_largeur(v in -1e12f64..1e12, largeur in 7usize..16) {
        let r = Reglages { largeur_max: largeur, ..Reglages::default() };
        let s = format_affichage(&texte_canonique(v), &r);
        prop_assert!(s.chars().count() <= largeur, "{v:?} -> {s:?}");
    }

    #[test]
    fn prop_affichage_texte_quelconque(s in "\\PC{0,20}") {
        let r = Reglages::default();
        prop_assert!(format_affichage(&s, &r).chars().count() <= r.largeur_max);
    }

    #[test]
    fn prop_eval_sans_panique(s in "[0-9+\\-*/().% ×÷−a]{0,24}") {
        let _ = eval_expression(&s);
    }

    #[test]
    fn prop_sequences_aleatoires(evs in prop::collection::vec(evenement(), 0..40)) {
        let largeur = Reglages::default().largeur_max;
        let mut c = Calculatrice::default();
        for ev in evs {
            c.appliquer(ev);
            prop_assert!(c.texte_affichage().chars().count() <= largeur);
        }

        c.appliquer(Evenement::Effacer);
        let une_fois = c.clone();
        c.appliquer(Evenement::Effacer);
        prop_assert_eq!(&c, &une_fois);
        prop_assert_eq!(c, Calculatrice::default());
    }
}
