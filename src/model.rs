use crate::hours::{is_open_now, QueryInstant, Schedule};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour Listing
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(String);

impl ListingId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Fiche de lieu telle qu'éditée dans le fichier de contenu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Horaire hebdomadaire en texte libre, un des scripts supportés.
    /// Rédigé par des opérateurs non techniques ; jamais validé à l'entrée.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
}

impl Listing {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            id: ListingId::random(),
            name: name.into(),
            category: None,
            hours: None,
        }
    }

    /// Analyse du texte horaire, `None` si la fiche n'en a pas.
    pub fn schedule(&self) -> Option<Schedule> {
        self.hours.as_deref().map(Schedule::parse)
    }

    pub fn is_open_at(&self, now: QueryInstant) -> bool {
        is_open_now(self.hours.as_deref(), now)
    }
}

/// Annuaire complet
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Directory {
    pub listings: Vec<Listing>,
}

impl Directory {
    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Listing> {
        self.listings.iter().find(|l| l.name == name)
    }
    pub fn find_by_id<'a>(&'a self, id: &ListingId) -> Option<&'a Listing> {
        self.listings.iter().find(|l| &l.id == id)
    }
    pub fn find_mut_by_id(&mut self, id: &ListingId) -> Option<&mut Listing> {
        self.listings.iter_mut().find(|l| &l.id == id)
    }

    /// Fiches ouvertes à l'instant donné, dans l'ordre de l'annuaire.
    pub fn open_at(&self, now: QueryInstant) -> Vec<&Listing> {
        self.listings.iter().filter(|l| l.is_open_at(now)).collect()
    }
}
