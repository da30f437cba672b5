//! Person and studio reference enrichment.
//!
//! Every reference in yields exactly one enriched reference out, in input
//! order; a registry miss only leaves the image absent. Nothing here is an
//! error path.

use vireo_model::PersonInfo;

use crate::dto::{ItemPerson, ItemStudio};
use crate::registry::ImageRegistry;

#[derive(Clone, Copy)]
pub struct Enricher<'a> {
    images: &'a dyn ImageRegistry,
}

impl std::fmt::Debug for Enricher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Enricher").finish_non_exhaustive()
    }
}

impl<'a> Enricher<'a> {
    pub fn new(images: &'a dyn ImageRegistry) -> Self {
        Self { images }
    }

    pub fn enrich_person(&self, person: &PersonInfo) -> ItemPerson {
        ItemPerson {
            person: person.clone(),
            primary_image_path: self.images.person_image(&person.name),
        }
    }

    pub fn enrich_people(&self, people: &[PersonInfo]) -> Vec<ItemPerson> {
        people.iter().map(|p| self.enrich_person(p)).collect()
    }

    pub fn enrich_studio(&self, name: &str) -> ItemStudio {
        ItemStudio {
            name: name.to_string(),
            primary_image_path: self.images.studio_image(name),
        }
    }

    pub fn enrich_studios(&self, studios: &[String]) -> Vec<ItemStudio> {
        studios.iter().map(|s| self.enrich_studio(s)).collect()
    }
}
