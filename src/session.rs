//! Session de calcul : le seul propriétaire du tampon, du résultat et de la mémoire.
//!
//! Rôle : recevoir les événements (touche appuyée, action), appeler le noyau et
//! le convertisseur de mots, prévenir l’écran après chaque mutation et envoyer
//! les annonces à la sortie vocale.
//!
//! Contrats :
//! - Entrée vide sur "=" : aucun changement (ni tampon, ni résultat, ni annonce).
//! - Erreur d’évaluation : résultat = mot "erreur", tampon vidé, phrase d’erreur annoncée.
//! - Succès : le tampon est ré-ensemencé avec le texte du résultat.
//! - La voix n’influence jamais l’état (annonce “au mieux”).

use crate::mots::{Convertisseur, Langue};
use crate::noyau::{
    arrondir_12, evaluer, evaluer_avec_demarche, format_nombre, DemarcheNoyau, ErreurEval, Options,
};
use crate::parole::SortieVocale;

/// Jetons effacés d’un coup par le retour arrière.
const JETONS_COMPOSES: &[&str] = &["sqrt(", "sin(", "cos(", "tan(", "pow(", "log(", "PI"];

/// Écran (collaborateur d’affichage).
pub trait Ecran {
    fn expression_changee(&mut self, expression: &str);
    fn resultat_change(&mut self, resultat: &str);
}

/// Écran en mémoire : garde les derniers textes (UI egui, ligne de commande, tests).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EcranMemoire {
    pub expression: String,
    pub resultat: String,
}

impl Default for EcranMemoire {
    fn default() -> Self {
        Self {
            expression: "0".to_string(),
            resultat: "0".to_string(),
        }
    }
}

impl Ecran for EcranMemoire {
    fn expression_changee(&mut self, expression: &str) {
        self.expression = expression.to_string();
    }

    fn resultat_change(&mut self, resultat: &str) {
        self.resultat = resultat.to_string();
    }
}

/// Actions (hors saisie de jetons).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Effacer,
    Retour,
    Evaluer,
    MemoireEffacer,
    MemoireRappel,
    MemoireAjouter,
    MemoireSoustraire,
}

/// Réglages d’une session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reglages {
    pub langue: Langue,
    pub mode_degres: bool,
    pub voix_active: bool,
}

pub struct Session<E: Ecran, V: SortieVocale> {
    tampon: String,
    memoire: f64,
    derniere_valeur: Option<f64>,
    demarche: DemarcheNoyau,
    derniere_annonce: String,

    options: Options,
    langue: Langue,
    mots: Convertisseur,
    voix_active: bool,

    ecran: E,
    voix: V,
}

impl<E: Ecran, V: SortieVocale> Session<E, V> {
    pub fn new(reglages: Reglages, mut ecran: E, voix: V) -> Self {
        ecran.expression_changee("0");
        ecran.resultat_change("0");

        Self {
            tampon: String::new(),
            memoire: 0.0,
            derniere_valeur: None,
            demarche: DemarcheNoyau::default(),
            derniere_annonce: String::new(),
            options: Options {
                mode_degres: reglages.mode_degres,
            },
            langue: reglages.langue,
            mots: Convertisseur::new(reglages.langue),
            voix_active: reglages.voix_active,
            ecran,
            voix,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    #[cfg(test)]
    pub fn tampon(&self) -> &str {
        &self.tampon
    }

    pub fn memoire(&self) -> f64 {
        self.memoire
    }

    pub fn langue(&self) -> Langue {
        self.langue
    }

    pub fn mode_degres(&self) -> bool {
        self.options.mode_degres
    }

    pub fn voix_active(&self) -> bool {
        self.voix_active
    }

    pub fn ecran(&self) -> &E {
        &self.ecran
    }

    pub fn demarche(&self) -> &DemarcheNoyau {
        &self.demarche
    }

    /// Dernier texte envoyé (ou qui aurait été envoyé) à la voix.
    pub fn derniere_annonce(&self) -> &str {
        &self.derniere_annonce
    }

    pub fn voix_mut(&mut self) -> &mut V {
        &mut self.voix
    }

    /* ------------------------ Événements ------------------------ */

    /// Touche appuyée : le jeton va au bout du tampon, puis son nom est annoncé.
    pub fn appuyer(&mut self, jeton: &str) {
        if jeton.is_empty() {
            return;
        }
        self.tampon.push_str(jeton);
        self.publier_expression();

        let mot = self.mots.appui(jeton);
        self.annoncer(mot);
    }

    /// Remplace tout le tampon (saisie clavier libre, ligne de commande).
    pub fn saisir(&mut self, texte: &str) {
        self.tampon = texte.to_string();
        self.publier_expression();
    }

    pub fn action(&mut self, action: Action) {
        tracing::info!(?action, tampon = %self.tampon, "action");

        match action {
            Action::Effacer => self.effacer(),
            Action::Retour => self.retour(),
            Action::Evaluer => {
                self.evaluer();
            }
            Action::MemoireEffacer => {
                self.memoire = 0.0;
                let p = self.mots.lexique().phrases.memoire_effacee;
                self.annoncer(p.to_string());
            }
            Action::MemoireRappel => self.memoire_rappeler(),
            Action::MemoireAjouter => self.memoire_operer(1.0),
            Action::MemoireSoustraire => self.memoire_operer(-1.0),
        }
    }

    /// C : tampon vide, résultat "0".
    pub fn effacer(&mut self) {
        self.tampon.clear();
        self.publier_expression();
        self.ecran.resultat_change("0");

        let p = self.mots.lexique().phrases.efface;
        self.annoncer(p.to_string());
    }

    /// DEL : retire le dernier jeton ("sin(" d’un coup, sinon un caractère).
    pub fn retour(&mut self) {
        let avant = self.tampon.len();

        while self.tampon.ends_with(' ') {
            self.tampon.pop();
        }
        match JETONS_COMPOSES.iter().find(|j| self.tampon.ends_with(**j)) {
            Some(j) => {
                let garde = self.tampon.len() - j.len();
                self.tampon.truncate(garde);
            }
            None => {
                self.tampon.pop();
            }
        }

        if self.tampon.len() != avant {
            self.publier_expression();
            let p = self.mots.lexique().phrases.supprime;
            self.annoncer(p.to_string());
        }
    }

    /// "=" : None si le tampon est vide (no-op), sinon le résultat de l’évaluation.
    pub fn evaluer(&mut self) -> Option<Result<f64, ErreurEval>> {
        match evaluer_avec_demarche(&self.tampon, &self.options) {
            Err(ErreurEval::EntreeVide) => None,
            Ok((v, demarche)) => {
                let texte = format_nombre(v);
                tracing::info!(expression = %self.tampon, resultat = %texte, "évaluation réussie");

                self.demarche = demarche;
                self.derniere_valeur = Some(v);
                self.ecran.resultat_change(&texte);

                let mots = self.mots.nombre(v);
                self.annoncer(mots);

                // ré-ensemencement : on continue le calcul à partir du résultat
                self.tampon = texte;
                self.publier_expression();
                Some(Ok(v))
            }
            Err(e) => {
                tracing::warn!(expression = %self.tampon, error = %e, "évaluation refusée");
                self.signaler_erreur();
                self.tampon.clear();
                self.publier_expression();
                Some(Err(e))
            }
        }
    }

    /// Active la voix et annonce l’activation.
    pub fn activer_voix(&mut self) {
        self.voix_active = true;
        let p = self.mots.lexique().phrases.voix_activee;
        self.annoncer(p.to_string());
    }

    pub fn couper_voix(&mut self) {
        self.voix_active = false;
    }

    pub fn basculer_degres(&mut self) {
        self.options.mode_degres = !self.options.mode_degres;
        let phrases = &self.mots.lexique().phrases;
        let p = if self.options.mode_degres {
            phrases.mode_degres
        } else {
            phrases.mode_radians
        };
        self.annoncer(p.to_string());
    }

    /* ------------------------ Interne ------------------------ */

    /// MR : après une valeur, la mémoire remplace le tampon ; après un opérateur
    /// ou "(", elle est ajoutée (entre parenthèses si négative ou scientifique).
    fn memoire_rappeler(&mut self) {
        let texte = format_nombre(self.memoire);

        if finit_par_une_valeur(&self.tampon) {
            self.tampon = texte.clone();
        } else if texte.starts_with('-') || texte.contains('e') {
            self.tampon.push('(');
            self.tampon.push_str(&texte);
            self.tampon.push(')');
        } else {
            self.tampon.push_str(&texte);
        }
        self.publier_expression();

        let mots = self.mots.texte(&texte);
        self.annoncer(mots);
    }

    /// M+ / M- : valeur du tampon (ou dernier résultat si tampon vide).
    fn memoire_operer(&mut self, signe: f64) {
        let valeur = match evaluer(&self.tampon, &self.options) {
            Ok(v) => v,
            Err(ErreurEval::EntreeVide) => match self.derniere_valeur {
                Some(v) => v,
                None => return,
            },
            Err(e) => {
                tracing::warn!(expression = %self.tampon, error = %e, "mémoire : évaluation refusée");
                self.signaler_erreur();
                return;
            }
        };

        self.memoire = arrondir_12(self.memoire + signe * valeur);
        tracing::info!(memoire = self.memoire, "mémoire mise à jour");

        let phrases = &self.mots.lexique().phrases;
        let p = if signe > 0.0 {
            phrases.memoire_ajoutee
        } else {
            phrases.memoire_soustraite
        };
        self.annoncer(p.to_string());
    }

    fn signaler_erreur(&mut self) {
        let phrases = &self.mots.lexique().phrases;
        let (affichage, annonce) = (phrases.erreur_affichage, phrases.erreur_annonce);
        self.ecran.resultat_change(affichage);
        self.annoncer(annonce.to_string());
    }

    fn publier_expression(&mut self) {
        if self.tampon.is_empty() {
            self.ecran.expression_changee("0");
        } else {
            self.ecran.expression_changee(&self.tampon);
        }
    }

    fn annoncer(&mut self, texte: String) {
        if self.voix_active {
            self.voix.annoncer(&texte, self.langue);
        }
        self.derniere_annonce = texte;
    }
}

/// Le tampon se termine-t-il par un nombre, une constante ou ")" ?
fn finit_par_une_valeur(tampon: &str) -> bool {
    let t = tampon.trim_end();
    match t.chars().last() {
        Some(c) if c.is_ascii_digit() || c == '.' || c == ')' => true,
        Some('I') => t.ends_with("PI"),
        Some('e') => true,
        _ => false,
    }
}
