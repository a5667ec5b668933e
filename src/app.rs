// src/app.rs
//
// Calculatrice parlante - module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Le clavier physique est lu ici, une seule fois par frame (événements bruts).
// - La vue n’a pas de champ texte : pas de double déclenchement possible.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;
use etat::ToucheSpeciale;

impl AppCalc {
    fn lire_clavier(&mut self, ctx: &egui::Context) {
        let evenements = ctx.input(|i| i.events.clone());

        for ev in evenements {
            match ev {
                egui::Event::Text(texte) => self.texte_clavier(&texte),
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    let touche = match key {
                        egui::Key::Enter => Some(ToucheSpeciale::Entree),
                        egui::Key::Backspace => Some(ToucheSpeciale::Retour),
                        egui::Key::Escape => Some(ToucheSpeciale::Echap),
                        _ => None,
                    };
                    if let Some(t) = touche {
                        self.touche_speciale(t);
                    }
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.lire_clavier(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
