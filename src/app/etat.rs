//! src/app/etat.rs
//!
//! État de la calculatrice (sans vue) : machine à états “accumulateur”.
//!
//! Rôle : appliquer chaque événement logique (chiffre, opérateur, =, AC, ±, %, DEL)
//! comme une transition, et produire les deux textes à afficher (écran + historique).
//!
//! Contrats :
//! - Un événement est traité en entier avant le suivant (aucune suspension).
//! - Les erreurs du noyau s’arrêtent ici : elles deviennent le mode Erreur,
//!   jamais une panique ni un Err renvoyé à la vue.
//! - En mode Erreur, seul Effacer est accepté.

use tracing::{debug, warn};

use super::touches::{Evenement, Operateur};
use crate::noyau::{
    eval_expression, format_affichage, texte_canonique, ErreurEval, SENTINELLE_ERREUR,
};
use crate::reglages::Reglages;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// L’utilisateur compose un opérande : affichage brut (point final conservé).
    Saisie,
    /// L’écran montre une valeur calculée, effacée, ou attend le 2e opérande.
    Resultat,
    /// Calcul impossible : "Error" jusqu’à Effacer.
    Erreur,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Calculatrice {
    // --- opérandes ---
    courant: String,
    precedent: Option<String>,
    operateur: Option<Operateur>,

    mode: Mode,
    // Opérande issu d’un calcul (%) mais encore modifiable : affiché formaté.
    calcule: bool,

    // --- UX ---
    // Touche opérateur dessinée active (effacée par un chiffre, = ou AC).
    surligne: Option<Operateur>,

    // --- paramètres ---
    reglages: Reglages,
}

impl Default for Calculatrice {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Calculatrice {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            courant: "0".to_string(),
            precedent: None,
            operateur: None,
            mode: Mode::Resultat,
            calcule: false,
            surligne: None,
            reglages,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    pub fn operande_courant(&self) -> &str {
        &self.courant
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn operateur_surligne(&self) -> Option<Operateur> {
        self.surligne
    }

    /// Texte de l’écran principal.
    pub fn texte_affichage(&self) -> String {
        match self.mode {
            Mode::Erreur => SENTINELLE_ERREUR.to_string(),
            Mode::Saisie if self.calcule => format_affichage(&self.courant, &self.reglages),
            // saisie en cours : brut, coupé à la largeur (garde "12." tel quel)
            Mode::Saisie => self.courant.chars().take(self.reglages.largeur_max).collect(),
            Mode::Resultat => format_affichage(&self.courant, &self.reglages),
        }
    }

    /// Ligne d’historique : "précédent opérateur", vide sans opération en attente.
    pub fn texte_historique(&self) -> String {
        match (&self.precedent, self.operateur) {
            (Some(p), Some(op)) => format!("{p} {}", op.symbole()),
            _ => String::new(),
        }
    }

    /* ------------------------ Transitions ------------------------ */

    /// Applique un événement logique.
    pub fn appliquer(&mut self, ev: Evenement) {
        if self.mode == Mode::Erreur && ev != Evenement::Effacer {
            debug!(?ev, "ignoré (mode Erreur)");
            return;
        }

        match ev {
            Evenement::Chiffre(d) => self.chiffre(d),
            Evenement::Decimale => self.decimale(),
            Evenement::Operateur(op) => self.operateur(op),
            Evenement::Egal => self.egal(),
            Evenement::Effacer => self.effacer(),
            Evenement::Inverser => self.inverser(),
            Evenement::Pourcentage => self.pourcentage(),
            Evenement::Supprimer => self.supprimer(),
        }

        debug!(
            ?ev,
            mode = ?self.mode,
            affichage = %self.texte_affichage(),
            historique = %self.texte_historique(),
            "transition"
        );
    }

    fn chiffre(&mut self, d: u8) {
        let Some(c) = char::from_digit(u32::from(d), 10) else {
            return;
        };

        if self.mode == Mode::Resultat || self.courant == "0" {
            self.courant = c.to_string();
        } else {
            self.courant.push(c);
        }
        self.mode = Mode::Saisie;
        self.calcule = false;
        self.surligne = None;
    }

    fn decimale(&mut self) {
        if self.mode == Mode::Resultat {
            self.courant = "0.".to_string();
            self.mode = Mode::Saisie;
        } else if !self.courant.contains('.') {
            self.courant.push('.');
            self.calcule = false;
        }
    }

    fn operateur(&mut self, op: Operateur) {
        // enchaînement "7 + 3 ×" : on calcule d’abord 7 + 3
        if self.mode == Mode::Saisie {
            if let (Some(p), Some(op_prec)) = (self.precedent.take(), self.operateur) {
                match calculer(&p, &self.courant, op_prec) {
                    Ok(v) => self.courant = v,
                    Err(e) => {
                        self.passer_en_erreur(e);
                        return;
                    }
                }
            }
        }

        // plusieurs opérateurs de suite : le dernier remplace le précédent
        self.precedent = Some(self.courant.clone());
        self.operateur = Some(op);
        self.mode = Mode::Resultat;
        self.calcule = false;
        self.surligne = Some(op);
    }

    fn egal(&mut self) {
        if self.mode != Mode::Saisie {
            return;
        }
        let (Some(p), Some(op)) = (self.precedent.as_deref(), self.operateur) else {
            return;
        };

        match calculer(p, &self.courant, op) {
            Ok(v) => {
                self.courant = v;
                self.precedent = None;
                self.operateur = None;
                self.mode = Mode::Resultat;
                self.calcule = false;
                self.surligne = None;
            }
            Err(e) => self.passer_en_erreur(e),
        }
    }

    /// AC : remise à zéro totale (réglages conservés).
    fn effacer(&mut self) {
        *self = Self::new(self.reglages.clone());
    }

    fn inverser(&mut self) {
        if self.courant == "0" {
            return;
        }
        if self.courant.starts_with('-') {
            self.courant.remove(0);
        } else {
            self.courant.insert(0, '-');
        }
    }

    fn pourcentage(&mut self) {
        match eval_expression(&format!("{} / 100", self.courant)) {
            Ok(v) => {
                self.courant = texte_canonique(v);
                self.calcule = self.mode == Mode::Saisie;
            }
            Err(e) => self.passer_en_erreur(e),
        }
    }

    /// DEL : retire le dernier caractère saisi (sans effet sur un résultat).
    fn supprimer(&mut self) {
        if self.mode != Mode::Saisie {
            return;
        }
        self.courant.pop();
        self.calcule = false;
        if matches!(self.courant.as_str(), "" | "-" | "-0") {
            self.courant = "0".to_string();
        }
    }

    fn passer_en_erreur(&mut self, e: ErreurEval) {
        warn!(erreur = %e, courant = %self.courant, "calcul impossible");
        self.courant = "0".to_string();
        self.precedent = None;
        self.operateur = None;
        self.surligne = None;
        self.calcule = false;
        self.mode = Mode::Erreur;
    }
}

/// a op b via le noyau, résultat sous forme canonique.
fn calculer(a: &str, b: &str, op: Operateur) -> Result<String, ErreurEval> {
    let v = eval_expression(&format!("{a} {} {b}", op.symbole()))?;
    Ok(texte_canonique(v))
}
