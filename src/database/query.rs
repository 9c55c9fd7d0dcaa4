//! Lazy query stream over a database's close approaches

use std::iter::FusedIterator;
use std::slice;

use crate::filters::{AttributeFilter, FilterResult};
use crate::model::{CloseApproach, LinkedApproach};

use super::database::NeoDatabase;

/// Stream of close approaches matching every filter, in dataset order
///
/// Created by [`NeoDatabase::query`]. Nothing is evaluated ahead of
/// consumption. A predicate error is yielded once and ends the stream.
///
/// Results borrow only the database, so they may outlive the filters.
#[derive(Debug, Clone)]
pub struct Query<'db, 'f> {
    db: &'db NeoDatabase,
    filters: &'f [AttributeFilter],
    approaches: slice::Iter<'db, CloseApproach>,
    halted: bool,
}

impl<'db, 'f> Query<'db, 'f> {
    pub(crate) fn new(db: &'db NeoDatabase, filters: &'f [AttributeFilter]) -> Self {
        Self {
            db,
            filters,
            approaches: db.approaches().iter(),
            halted: false,
        }
    }

    /// Conjunction of all filters; stops at the first false
    fn matches_all(filters: &[AttributeFilter], linked: &LinkedApproach<'_>) -> FilterResult<bool> {
        for filter in filters {
            if !filter.evaluate(linked)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<'db> Iterator for Query<'db, '_> {
    type Item = FilterResult<LinkedApproach<'db>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted {
            return None;
        }

        for approach in self.approaches.by_ref() {
            let linked = self.db.link(approach);
            match Self::matches_all(self.filters, &linked) {
                Ok(true) => return Some(Ok(linked)),
                Ok(false) => continue,
                Err(e) => {
                    self.halted = true;
                    return Some(Err(e));
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.halted {
            (0, Some(0))
        } else {
            (0, Some(self.approaches.len()))
        }
    }
}

impl FusedIterator for Query<'_, '_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::{Comparator, FilterErrorCode};
    use crate::model::NearEarthObject;

    fn sample_db() -> NeoDatabase {
        NeoDatabase::new(
            vec![
                NearEarthObject::new("433", Some("Eros".to_string()), 16.84, false),
                NearEarthObject::new("99942", Some("Apophis".to_string()), 0.37, true),
            ],
            vec![
                CloseApproach::new("433", None, 0.15, 5.1),
                CloseApproach::new("99942", None, 0.0003, 7.4),
                CloseApproach::new("433", None, 0.35, 4.2),
            ],
        )
    }

    #[test]
    fn test_empty_filters_match_everything_in_order() {
        let db = sample_db();
        let distances: Vec<_> = db
            .query(&[])
            .map(|r| r.unwrap().approach.distance())
            .collect();
        assert_eq!(distances, vec![0.15, 0.0003, 0.35]);
    }

    #[test]
    fn test_conjunction() {
        let db = sample_db();
        let filters = [
            AttributeFilter::distance(Comparator::Le, 0.2),
            AttributeFilter::hazardous(Comparator::Eq, false),
        ];
        let results: Vec<_> = db.query(&filters).collect::<FilterResult<_>>().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].neo.unwrap().designation(), "433");
        assert_eq!(results[0].approach.distance(), 0.15);
    }

    #[test]
    fn test_filter_order_irrelevant() {
        let db = sample_db();
        let forward = [
            AttributeFilter::velocity(Comparator::Ge, 4.5),
            AttributeFilter::diameter(Comparator::Ge, 1.0),
        ];
        let backward = [forward[1], forward[0]];

        let a: Vec<_> = db
            .query(&forward)
            .map(|r| r.unwrap().approach.distance())
            .collect();
        let b: Vec<_> = db
            .query(&backward)
            .map(|r| r.unwrap().approach.distance())
            .collect();
        assert_eq!(a, b);
        assert_eq!(a, vec![0.15]);
    }

    #[test]
    fn test_independent_queries() {
        let db = sample_db();
        let filters = [AttributeFilter::distance(Comparator::Le, 0.2)];

        let mut first = db.query(&filters);
        let mut second = db.query(&filters);
        assert!(first.next().is_some());
        assert_eq!(
            second.next().unwrap().unwrap().approach.distance(),
            0.15
        );
        assert_eq!(first.count(), 1);
    }

    #[test]
    fn test_results_outlive_filters() {
        let db = sample_db();
        let results: Vec<LinkedApproach<'_>> = {
            let filters = vec![AttributeFilter::distance(Comparator::Le, 0.2)];
            db.query(&filters).collect::<FilterResult<_>>().unwrap()
        };
        assert_eq!(results.len(), 2);
    }

    #[test]
    fn test_unlinked_approach_halts_query() {
        let db = NeoDatabase::new(
            vec![NearEarthObject::new("433", None, 16.84, false)],
            vec![
                CloseApproach::new("433", None, 0.15, 5.1),
                CloseApproach::new("2099 ZZ", None, 0.01, 9.0),
                CloseApproach::new("433", None, 0.25, 5.3),
            ],
        );
        let filters = [AttributeFilter::diameter(Comparator::Ge, 1.0)];
        let mut query = db.query(&filters);

        assert!(query.next().unwrap().is_ok());
        let err = query.next().unwrap().unwrap_err();
        assert_eq!(err.code(), FilterErrorCode::NeoUnlinkedApproach);
        assert!(query.next().is_none());
    }

    #[test]
    fn test_unlinked_approach_fine_without_neo_filters() {
        let db = NeoDatabase::new(
            vec![],
            vec![CloseApproach::new("2099 ZZ", None, 0.01, 9.0)],
        );
        let filters = [AttributeFilter::distance(Comparator::Le, 0.1)];
        let results: Vec<_> = db.query(&filters).collect::<FilterResult<_>>().unwrap();
        assert_eq!(results.len(), 1);
        assert!(results[0].neo.is_none());
    }
}
