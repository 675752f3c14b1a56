// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + touches.rs + vue.rs)
// - Ré-exporter Calculatrice (pour main.rs: use crate::app::Calculatrice;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier est traduit ici en Evenement, avant de dessiner la vue.
// - Les chiffres/opérateurs arrivent en Event::Text (une seule fois),
//   Enter/Backspace/Escape en Event::Key : pas de double déclenchement.

pub mod etat;
pub mod touches;
pub mod vue;

// Ré-export pratique : `use crate::app::Calculatrice;`
pub use etat::Calculatrice;

use eframe::egui;

use touches::{touche_caractere, touche_nommee, Evenement};

/// Événement egui -> événements logiques (0, 1 ou plusieurs pour un texte collé).
fn evenements_clavier(ev: &egui::Event) -> Vec<Evenement> {
    match ev {
        egui::Event::Text(t) => t.chars().filter_map(touche_caractere).collect(),
        egui::Event::Key {
            key, pressed: true, ..
        } => touche_nommee(key.name()).into_iter().collect(),
        _ => Vec::new(),
    }
}

impl eframe::App for Calculatrice {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let evenements: Vec<Evenement> =
            ctx.input(|i| i.events.iter().flat_map(evenements_clavier).collect());
        for ev in evenements {
            self.appliquer(ev);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
