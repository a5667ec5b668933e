// src/app/vue.rs
//
// Vue (UI egui) - natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Affichage : expression (tampon) + résultat + dernière annonce
// - Tactile : gros boutons ; chaque bouton = un jeton envoyé à la session
// - Cases : voix, mode degrés
//
// Note :
// - Le clavier physique est géré dans app.rs (événements bruts),
//   pas de TextEdit ici : l’expression n’est modifiable que par jetons.

use eframe::egui;

use super::etat::AppCalc;
use crate::session::Action;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice parlante");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);
                self.ui_reglages(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fonctions(ui);
                ui.add_space(6.0);
                self.ui_pave_numerique(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let ecran = self.session.ecran();

        ui.label("Expression :");
        Self::champ_monospace(ui, "expression_out", &ecran.expression, 20.0);

        ui.add_space(6.0);

        ui.label("Résultat :");
        Self::champ_monospace(ui, "resultat_out", &ecran.resultat, 28.0);

        let annonce = self.session.derniere_annonce();
        if !annonce.is_empty() {
            ui.add_space(4.0);
            ui.weak(format!("🔊 {annonce}"));
        }
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut voix = self.session.voix_active();
            if ui.checkbox(&mut voix, "Voix").changed() {
                self.regler_voix(voix);
            }

            let mut degres = self.session.mode_degres();
            if ui.checkbox(&mut degres, "Degrés").changed() {
                self.session.basculer_degres();
            }

            ui.separator();
            ui.label(format!("Langue : {}", self.session.langue()));

            ui.separator();
            let memoire = self.session.memoire();
            if memoire != 0.0 {
                ui.monospace(format!("M = {}", crate::noyau::format_nombre(memoire)));
            }
        });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            for jeton in ["sin(", "cos(", "tan(", "sqrt(", "pow(", "log(", "PI", "e", ","] {
                self.bouton_jeton(ui, jeton);
            }
        });

        ui.horizontal(|ui| {
            self.bouton_action(ui, "MC", "Efface la mémoire", Action::MemoireEffacer);
            self.bouton_action(ui, "MR", "Rappelle la mémoire", Action::MemoireRappel);
            self.bouton_action(ui, "M+", "Ajoute à la mémoire", Action::MemoireAjouter);
            self.bouton_action(ui, "M-", "Soustrait de la mémoire", Action::MemoireSoustraire);
        });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_parlant")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Efface tout", Action::Effacer);
                self.bouton_jeton(ui, "(");
                self.bouton_jeton(ui, ")");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Retour);
                ui.end_row();

                self.bouton_jeton(ui, "7");
                self.bouton_jeton(ui, "8");
                self.bouton_jeton(ui, "9");
                self.bouton_jeton(ui, "/");
                ui.end_row();

                self.bouton_jeton(ui, "4");
                self.bouton_jeton(ui, "5");
                self.bouton_jeton(ui, "6");
                self.bouton_jeton(ui, "*");
                ui.end_row();

                self.bouton_jeton(ui, "1");
                self.bouton_jeton(ui, "2");
                self.bouton_jeton(ui, "3");
                self.bouton_jeton(ui, "-");
                ui.end_row();

                self.bouton_jeton(ui, "0");
                self.bouton_jeton(ui, ".");
                self.bouton_jeton(ui, "%");
                self.bouton_jeton(ui, "+");
                ui.end_row();
            });

        ui.add_space(6.0);
        let eq = ui.add_sized([ui.available_width().min(236.0), 40.0], egui::Button::new("="));
        if eq.clicked() {
            self.session.action(Action::Evaluer);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                let d = self.session.demarche();
                Self::champ_demarche(ui, "Préparée", "demarche_prepare", &d.prepare);
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &d.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &d.rpn);
                Self::champ_demarche(ui, "Arbre", "demarche_arbre", &d.arbre);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 14.0);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, taille: f32) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.label(egui::RichText::new(contenu).monospace().size(taille));
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 36.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            self.session.action(action);
        }
    }

    fn bouton_jeton(&mut self, ui: &mut egui::Ui, jeton: &str) {
        let label = jeton.strip_suffix('(').filter(|l| !l.is_empty()).unwrap_or(jeton);
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(label));
        if resp.clicked() {
            self.session.appuyer(jeton);
        }
    }
}
