// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même Calculatrice (etat.rs) pour natif + wasm
// - Écran : historique (petit) + affichage (grand), alignés à droite
// - Pavé 4×5 façon calculatrice de poche, opérateur actif surligné
//
// Note :
// - La vue ne calcule rien : un clic = un Evenement, transmis à appliquer().

use eframe::egui;

use super::etat::{Calculatrice, Mode};
use super::touches::{Evenement, Operateur};

const TAILLE_TOUCHE: [f32; 2] = [64.0, 48.0];

const PAVE: [[(&str, Evenement); 4]; 5] = [
    [
        ("AC", Evenement::Effacer),
        ("±", Evenement::Inverser),
        ("%", Evenement::Pourcentage),
        ("÷", Evenement::Operateur(Operateur::Division)),
    ],
    [
        ("7", Evenement::Chiffre(7)),
        ("8", Evenement::Chiffre(8)),
        ("9", Evenement::Chiffre(9)),
        ("×", Evenement::Operateur(Operateur::Multiplication)),
    ],
    [
        ("4", Evenement::Chiffre(4)),
        ("5", Evenement::Chiffre(5)),
        ("6", Evenement::Chiffre(6)),
        ("−", Evenement::Operateur(Operateur::Soustraction)),
    ],
    [
        ("1", Evenement::Chiffre(1)),
        ("2", Evenement::Chiffre(2)),
        ("3", Evenement::Chiffre(3)),
        ("+", Evenement::Operateur(Operateur::Addition)),
    ],
    [
        ("0", Evenement::Chiffre(0)),
        (".", Evenement::Decimale),
        ("DEL", Evenement::Supprimer),
        ("=", Evenement::Egal),
    ],
];

impl Calculatrice {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.vertical_centered(|ui| {
            ui.set_max_width(4.0 * TAILLE_TOUCHE[0] + 3.0 * 6.0);

            self.ui_ecran(ui);
            ui.add_space(8.0);
            self.ui_pave(ui);
        });
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    // ligne vide gardée à hauteur constante
                    let historique = self.texte_historique();
                    let historique = if historique.is_empty() {
                        " ".to_string()
                    } else {
                        historique
                    };
                    ui.label(
                        egui::RichText::new(historique)
                            .monospace()
                            .size(18.0)
                            .color(ui.visuals().weak_text_color()),
                    );
                    let mut affichage = egui::RichText::new(self.texte_affichage())
                        .monospace()
                        .size(40.0);
                    if self.mode() == Mode::Erreur {
                        affichage = affichage.color(ui.visuals().error_fg_color);
                    }
                    // l’écran est borné : l’opérande complet reste lisible au survol
                    ui.label(affichage).on_hover_text(self.operande_courant());
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let surligne = self.operateur_surligne();
        let mut clic = None;

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for rangee in PAVE.iter() {
                    for &(label, ev) in rangee {
                        let actif = matches!(ev, Evenement::Operateur(op) if surligne == Some(op));
                        let bouton =
                            egui::Button::new(egui::RichText::new(label).size(20.0)).selected(actif);
                        if ui.add_sized(TAILLE_TOUCHE, bouton).clicked() {
                            clic = Some(ev);
                        }
                    }
                    ui.end_row();
                }
            });

        if let Some(ev) = clic {
            self.appliquer(ev);
        }
    }
}
