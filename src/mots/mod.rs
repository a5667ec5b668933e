//! Mots parlés : lexique par langue + conversion nombre -> mots.
//!
//! - lexique.rs : tables persan / anglais (chiffres, touches, échelles, phrases)
//! - nombres.rs : Convertisseur (touche, nombre, texte affiché)

pub mod lexique;
pub mod nombres;

pub use lexique::Langue;
pub use nombres::Convertisseur;
