//! A close approach paired with its resolved NEO

use std::fmt;

use super::{CloseApproach, NearEarthObject};

/// A close approach borrowed from a database, together with its linked NEO
/// (`None` if the approach's designation matched no NEO)
#[derive(Debug, Clone, Copy)]
pub struct LinkedApproach<'a> {
    pub approach: &'a CloseApproach,
    pub neo: Option<&'a NearEarthObject>,
}

impl<'a> LinkedApproach<'a> {
    pub fn new(approach: &'a CloseApproach, neo: Option<&'a NearEarthObject>) -> Self {
        Self { approach, neo }
    }

    /// Full name of the linked NEO, or the bare join key if unlinked
    pub fn fullname(&self) -> String {
        match self.neo {
            Some(neo) => neo.fullname(),
            None => self.approach.designation().to_string(),
        }
    }
}

impl fmt::Display for LinkedApproach<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "At {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            self.fullname(),
            self.approach.distance(),
            self.approach.velocity()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::time::cd_to_datetime;

    #[test]
    fn test_display_uses_neo_fullname() {
        let neo = NearEarthObject::new("433", Some("Eros".to_string()), 16.84, false);
        let time = cd_to_datetime("2020-Jan-01 12:30").unwrap();
        let ca = CloseApproach::new("433", Some(time), 0.15, 5.1);
        let linked = LinkedApproach::new(&ca, Some(&neo));
        assert_eq!(
            linked.to_string(),
            "At 2020-01-01 12:30, '433 (Eros)' approaches Earth at a distance of 0.15 au and a velocity of 5.10 km/s."
        );
    }

    #[test]
    fn test_unlinked_falls_back_to_designation() {
        let ca = CloseApproach::new("2099 ZZ", None, 0.01, 20.0);
        let linked = LinkedApproach::new(&ca, None);
        assert_eq!(linked.fullname(), "2099 ZZ");
    }
}
