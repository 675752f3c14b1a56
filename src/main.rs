// src/main.rs
//
// Calculatrice de poche — point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 (+ CLI : réglages TOML, niveau de log, rejeu sans UI)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;
mod reglages;

use app::Calculatrice;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::io::Write;
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use super::{egui, Calculatrice, TITRE_APP};
    use crate::app::touches::sequence_touches;
    use crate::reglages::Reglages;

    /// Calculatrice de poche (egui) : écran borné, historique, pavé + clavier.
    #[derive(Parser, Debug)]
    #[command(name = "calculatrice", author, version, about, long_about = None)]
    pub struct Args {
        /// Fichier de réglages TOML (largeur_max, precision_exp, seuil_exp_haut, seuil_exp_bas)
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        /// Filtre de log (trace, debug, info, warn, error, ou directives EnvFilter)
        #[arg(short, long, default_value = "info", env = "RUST_LOG")]
        pub log: String,

        /// Rejoue une séquence de touches sans fenêtre, ex: "7+3 Enter"
        #[arg(short, long)]
        pub touches: Option<String>,
    }

    fn installer_journal(filtre: &str) {
        let filtre = EnvFilter::try_new(filtre).unwrap_or_else(|_| EnvFilter::new("info"));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }

    /// Mode sans interface : historique puis affichage, une ligne chacun.
    fn rejouer(
        reglages: Reglages,
        sequence: &str,
        sortie: &mut impl Write,
    ) -> anyhow::Result<()> {
        let evenements = sequence_touches(sequence).context("séquence de touches")?;

        let mut calc = Calculatrice::new(reglages);
        for ev in evenements {
            calc.appliquer(ev);
        }

        writeln!(sortie, "{}", calc.texte_historique())?;
        writeln!(sortie, "{}", calc.texte_affichage())?;
        Ok(())
    }

    pub fn lancer() -> anyhow::Result<()> {
        let args = Args::parse();
        installer_journal(&args.log);

        let reglages = match &args.config {
            Some(chemin) => Reglages::charger(chemin)
                .with_context(|| format!("réglages {}", chemin.display()))?,
            None => Reglages::default(),
        };

        if let Some(sequence) = &args.touches {
            return rejouer(reglages, sequence, &mut std::io::stdout().lock());
        }

        tracing::info!(largeur = reglages.largeur_max, "démarrage de la fenêtre");

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([320.0, 460.0])
                .with_min_inner_size([300.0, 420.0]),
            ..Default::default()
        };

        eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |_cc| Ok(Box::new(Calculatrice::new(reglages)))),
        )
        .map_err(|e| anyhow::anyhow!("eframe: {e}"))
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    natif::lancer()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
    // On laisse main() vide pour rester clair.
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{Calculatrice, TITRE_APP};
    use crate::reglages::Reglages;

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Installe le hook de panique (console du navigateur)
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        console_error_panic_hook::set_once();

        // 1) window/document
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        // 2) element by id
        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        // 3) cast -> HtmlCanvasElement
        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        // 4) run web
        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::new(Calculatrice::new(Reglages::default())))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
