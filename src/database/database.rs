//! The linked NEO / close approach database
//!
//! # Construction
//!
//! 1. Index NEOs by designation (later duplicates win the slot)
//! 2. Index NEOs by non-empty name (all duplicates kept, in input order)
//! 3. Resolve each approach's designation and link both directions
//!
//! Single pass over each collection, no sorting. Links are positions into the
//! owned collections. Nothing is mutated after construction.

use std::collections::HashMap;

use crate::filters::AttributeFilter;
use crate::model::{CloseApproach, LinkedApproach, NearEarthObject};
use crate::observability::{log_event_with_fields, Event};

use super::query::Query;

/// Counts recorded while linking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LinkSummary {
    /// NEOs owned by the database
    pub neos: usize,
    /// Close approaches owned by the database
    pub approaches: usize,
    /// Approaches resolved to an NEO
    pub linked: usize,
    /// Approaches whose designation matched no NEO
    pub unlinked: usize,
}

/// An in-memory database of NEOs and their close approaches
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    /// designation -> position in `neos`
    by_designation: HashMap<String, usize>,
    /// name -> positions in `neos`, input order
    by_name: HashMap<String, Vec<usize>>,
    summary: LinkSummary,
}

impl NeoDatabase {
    /// Links unlinked NEOs and close approaches into a database.
    ///
    /// Precondition: every NEO has no approaches and every approach has no
    /// NEO. Records built with `NearEarthObject::new` and
    /// `CloseApproach::new` satisfy this.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name: HashMap<String, Vec<usize>> = HashMap::new();

        for (index, neo) in neos.iter().enumerate() {
            if by_designation
                .insert(neo.designation().to_string(), index)
                .is_some()
            {
                log_event_with_fields(
                    Event::DuplicateDesignation,
                    &[("designation", neo.designation())],
                );
            }

            if let Some(name) = neo.name() {
                let entries = by_name.entry(name.to_string()).or_default();
                if !entries.is_empty() {
                    log_event_with_fields(Event::DuplicateName, &[("name", name)]);
                }
                entries.push(index);
            }
        }

        let mut linked = 0;
        for (index, approach) in approaches.iter_mut().enumerate() {
            if let Some(&neo_index) = by_designation.get(approach.designation()) {
                approach.neo = Some(neo_index);
                neos[neo_index].approaches.push(index);
                linked += 1;
            }
        }

        let summary = LinkSummary {
            neos: neos.len(),
            approaches: approaches.len(),
            linked,
            unlinked: approaches.len() - linked,
        };

        let counts = [
            summary.neos.to_string(),
            summary.approaches.to_string(),
            summary.linked.to_string(),
            summary.unlinked.to_string(),
        ];
        log_event_with_fields(
            Event::DatabaseLinked,
            &[
                ("neos", counts[0].as_str()),
                ("approaches", counts[1].as_str()),
                ("linked", counts[2].as_str()),
                ("unlinked", counts[3].as_str()),
            ],
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
            summary,
        }
    }

    /// Finds an NEO by exact primary designation
    pub fn get_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .map(|&index| &self.neos[index])
    }

    /// Finds an NEO by exact name.
    ///
    /// If several NEOs share the name, the first in input order is returned.
    /// The empty string never matches.
    pub fn get_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.get_all_by_name(name).next()
    }

    /// All NEOs with exactly this name, in input order
    pub fn get_all_by_name<'a>(
        &'a self,
        name: &str,
    ) -> impl Iterator<Item = &'a NearEarthObject> + 'a {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&index| &self.neos[index])
    }

    /// The NEO an approach is linked to, if any.
    ///
    /// An approach that was not linked by this database resolves to `None`.
    pub fn neo_of(&self, approach: &CloseApproach) -> Option<&NearEarthObject> {
        let index = approach.neo_index()?;
        match self.by_designation.get(approach.designation()) {
            Some(&owner) if owner == index => self.neos.get(owner),
            _ => None,
        }
    }

    /// An NEO's close approaches, in dataset order.
    ///
    /// Empty for an NEO this database does not own.
    pub fn approaches_of<'a>(
        &'a self,
        neo: &NearEarthObject,
    ) -> impl Iterator<Item = &'a CloseApproach> + 'a {
        self.by_designation
            .get(neo.designation())
            .and_then(|&index| self.neos.get(index))
            .filter(|owned| std::ptr::eq(*owned, neo))
            .map(NearEarthObject::approach_indices)
            .unwrap_or_default()
            .iter()
            .filter_map(move |&index| self.approaches.get(index))
    }

    /// Pairs an approach with its linked NEO
    pub fn link<'a>(&'a self, approach: &'a CloseApproach) -> LinkedApproach<'a> {
        LinkedApproach::new(approach, self.neo_of(approach))
    }

    /// Lazily streams approaches matching every filter, in dataset order.
    ///
    /// An empty filter slice matches every approach.
    pub fn query<'f>(&self, filters: &'f [AttributeFilter]) -> Query<'_, 'f> {
        Query::new(self, filters)
    }

    pub fn neos(&self) -> &[NearEarthObject] {
        &self.neos
    }

    pub fn approaches(&self) -> &[CloseApproach] {
        &self.approaches
    }

    pub fn summary(&self) -> LinkSummary {
        self.summary
    }
}
