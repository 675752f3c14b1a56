//! src/reglages.rs
//!
//! Réglages d’affichage (largeur, notation exponentielle).
//!
//! - Valeurs par défaut = comportement d’une calculatrice de poche (10 caractères).
//! - En natif : fichier TOML optionnel (`--config`), toutes les clés facultatives.
//! - Toute valeur chargée passe par `valider` (largeur minimale, seuils cohérents).

use serde::Deserialize;
use thiserror::Error;

/// Plus petite largeur qui contient toujours une exponentielle ("-1e-308").
pub const LARGEUR_MIN: usize = 7;

/// Au-delà, f64 n’a plus de chiffres significatifs à montrer.
pub const PRECISION_MAX: usize = 16;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    /// Nombre maximal de caractères sur l’écran principal.
    pub largeur_max: usize,
    /// Décimales de mantisse en notation exponentielle (avant réduction).
    pub precision_exp: usize,
    /// |x| ≥ seuil_exp_haut => exponentielle.
    pub seuil_exp_haut: f64,
    /// 0 < |x| < seuil_exp_bas => exponentielle.
    pub seuil_exp_bas: f64,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            largeur_max: 10,
            precision_exp: 6,
            seuil_exp_haut: 1e10,
            seuil_exp_bas: 1e-9,
        }
    }
}

// valider() n’est appelé que par le chargement TOML (natif)
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
#[derive(Debug, Error)]
pub enum ErreurReglages {
    #[error("lecture de {}: {source}", .chemin.display())]
    Lecture {
        chemin: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("réglages TOML invalides: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("largeur_max doit être ≥ 7 (reçu {0})")]
    LargeurTropPetite(usize),

    #[error("precision_exp doit être ≤ 16 (reçu {0})")]
    PrecisionTropGrande(usize),

    #[error("seuils incohérents: il faut 0 < seuil_exp_bas < seuil_exp_haut")]
    SeuilsIncoherents,
}

impl Reglages {
    /// Garde-fous : refuse une configuration qui casserait l’affichage borné.
    #[cfg_attr(target_arch = "wasm32", allow(dead_code))]
    pub fn valider(self) -> Result<Self, ErreurReglages> {
        if self.largeur_max < LARGEUR_MIN {
            return Err(ErreurReglages::LargeurTropPetite(self.largeur_max));
        }
        if self.precision_exp > PRECISION_MAX {
            return Err(ErreurReglages::PrecisionTropGrande(self.precision_exp));
        }
        let bas_ok = self.seuil_exp_bas.is_finite() && self.seuil_exp_bas > 0.0;
        let haut_ok = self.seuil_exp_haut > self.seuil_exp_bas;
        if !bas_ok || !haut_ok {
            return Err(ErreurReglages::SeuilsIncoherents);
        }
        Ok(self)
    }

    /// Lit des réglages depuis un texte TOML (clés absentes => défaut).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn depuis_toml(texte: &str) -> Result<Self, ErreurReglages> {
        let r: Reglages = toml::from_str(texte)?;
        r.valider()
    }

    /// Charge un fichier TOML.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn charger(chemin: &std::path::Path) -> Result<Self, ErreurReglages> {
        let texte =
            std::fs::read_to_string(chemin).map_err(|source| ErreurReglages::Lecture {
                chemin: chemin.to_path_buf(),
                source,
            })?;
        let r = Self::depuis_toml(&texte)?;
        tracing::info!(chemin = %chemin.display(), ?r, "réglages chargés");
        Ok(r)
    }
}
