// src/main.rs
//
// Calculatrice parlante - point d’entrée NATIF + WEB (WASM)
// ---------------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 ou `--calcul <EXPR>` (sans fenêtre)
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
// - Polices                    : glyphes persans (fichier configuré ou police système)
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod config;
mod mots;
mod noyau;
mod parole;
mod session;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice parlante";

/* ------------------------ Polices (natif + web) ------------------------ */

/// Ajoute une police en tête des familles proportionnelle et monospace.
#[cfg_attr(target_arch = "wasm32", allow(dead_code))]
fn installer_police(ctx: &egui::Context, nom: &str, octets: Vec<u8>) {
    use egui::{FontData, FontDefinitions, FontFamily};

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(nom.to_string(), FontData::from_owned(octets).into());

    for famille in [FontFamily::Proportional, FontFamily::Monospace] {
        fonts
            .families
            .entry(famille)
            .or_default()
            .insert(0, nom.to_string());
    }

    ctx.set_fonts(fonts);
}

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use super::{installer_police, AppCalc, TITRE_APP};

    use clap::Parser;
    use eframe::egui;
    use std::path::{Path, PathBuf};
    use std::process::ExitCode;
    use tracing_subscriber::EnvFilter;

    use crate::config::{chemin_par_defaut, Config, ErreurConfig};
    use crate::mots::Langue;
    use crate::parole::{voix_systeme, Espeak};
    use crate::session::{EcranMemoire, Session};

    /// Polices système essayées si aucune n’est configurée.
    const POLICES_SYSTEME: &[&str] = &[
        "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf",
        "/usr/share/fonts/noto/NotoSansArabic-Regular.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "C:\\Windows\\Fonts\\tahoma.ttf",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
    ];

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice_parlante", version, about = "Calculatrice qui lit ses touches et ses résultats à voix haute")]
    struct Args {
        /// Langue des mots et de la voix
        #[arg(long, value_enum)]
        langue: Option<Langue>,

        /// Fonctions trigonométriques en degrés
        #[arg(long)]
        degres: bool,

        /// Démarrer sans voix
        #[arg(long)]
        muet: bool,

        /// Fichier de configuration (TOML)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Évalue une expression, affiche et annonce le résultat, puis quitte
        #[arg(long, value_name = "EXPR")]
        calcul: Option<String>,

        /// Journal détaillé (debug)
        #[arg(long)]
        verbeux: bool,
    }

    fn initialiser_journal(verbeux: bool) {
        let defaut = if verbeux { "debug" } else { "info" };
        let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(defaut));
        tracing_subscriber::fmt()
            .with_env_filter(filtre)
            .with_writer(std::io::stderr)
            .init();
    }

    fn charger_config(args: &Args) -> Config {
        let chemin = args.config.clone().unwrap_or_else(chemin_par_defaut);

        let mut cfg = match Config::load(&chemin) {
            Ok(c) => c,
            Err(e @ ErreurConfig::Format { .. }) => {
                tracing::warn!(error = %e, "config invalide (fichier laissé tel quel), valeurs par défaut");
                Config::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "config illisible, valeurs par défaut");
                Config::default()
            }
        };

        if let Some(l) = args.langue {
            cfg.langue = l;
        }
        if args.degres {
            cfg.mode_degres = true;
        }
        if args.muet {
            cfg.voix_active = false;
        }
        cfg
    }

    fn charger_police(cfg: &Config) -> Option<(String, Vec<u8>)> {
        let candidats = cfg
            .police
            .iter()
            .map(PathBuf::as_path)
            .chain(POLICES_SYSTEME.iter().map(|p| Path::new(*p)));

        for chemin in candidats {
            match std::fs::read(chemin) {
                Ok(octets) => {
                    tracing::debug!(chemin = %chemin.display(), "police chargée");
                    return Some(("police_parlante".to_string(), octets));
                }
                Err(e) => tracing::debug!(chemin = %chemin.display(), error = %e, "police absente"),
            }
        }
        tracing::warn!("aucune police trouvée, les glyphes persans peuvent manquer");
        None
    }

    /// `--calcul` : une évaluation, sans fenêtre. Code 1 si erreur ou entrée vide.
    fn calcul_unique(cfg: &Config, expression: &str) -> ExitCode {
        let voix = Espeak::new(cfg.commande_voix.clone(), cfg.debit_voix);
        let mut session = Session::new(cfg.reglages(), EcranMemoire::default(), voix);

        session.saisir(expression);
        let issue = session.evaluer();

        println!("{}", session.ecran().resultat);
        if !session.derniere_annonce().is_empty() {
            println!("{}", session.derniere_annonce());
        }
        session.voix_mut().attendre();

        match issue {
            Some(Ok(_)) => ExitCode::SUCCESS,
            Some(Err(e)) => {
                eprintln!("{e}");
                ExitCode::FAILURE
            }
            None => {
                eprintln!("expression vide");
                ExitCode::FAILURE
            }
        }
    }

    pub fn main() -> ExitCode {
        let args = Args::parse();
        initialiser_journal(args.verbeux);

        let cfg = charger_config(&args);

        if let Some(expr) = &args.calcul {
            return calcul_unique(&cfg, expr);
        }

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(TITRE_APP)
                .with_inner_size([420.0, 720.0])
                .with_min_inner_size([360.0, 600.0]),
            ..Default::default()
        };

        let police = charger_police(&cfg);
        let voix = voix_systeme(&cfg.commande_voix, cfg.debit_voix);

        let issue = eframe::run_native(
            TITRE_APP,
            options,
            Box::new(move |cc| {
                // Contexte egui prêt => polices avant la première frame.
                if let Some((nom, octets)) = police {
                    installer_police(&cc.egui_ctx, &nom, octets);
                }
                Ok(Box::new(AppCalc::new(&cfg, voix)))
            }),
        );

        match issue {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                tracing::error!(error = %e, "fenêtre interrompue");
                ExitCode::FAILURE
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    natif::main()
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    use crate::config::Config;
    use crate::parole::Navigateur;

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    ///
    /// La voix démarre coupée : les navigateurs exigent un geste de l’utilisateur
    /// (la case "Voix") avant toute synthèse.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let cfg = Config {
            voix_active: false,
            ..Config::default()
        };
        let voix = Box::new(Navigateur::new(cfg.debit_voix));

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(move |_cc| Ok(Box::new(AppCalc::new(&cfg, voix)))),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
