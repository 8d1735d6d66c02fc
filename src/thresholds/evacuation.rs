use crate::evacuation::{PathConfiguration, PathKind};
use PathConfiguration::{DeadEnd, DistinctExits};
use PathKind::{ExteriorRoute, InteriorRoute, Local};

/// Maximum travel distance for one path situation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistanceLimit {
    pub kind: PathKind,
    pub configuration: PathConfiguration,
    /// Applies only when the path serves risk D/E occupants; `None` rows
    /// apply regardless.
    pub serves_high_risk: Option<bool>,
    pub max_distance: f64,
}

const fn row(
    kind: PathKind,
    configuration: PathConfiguration,
    serves_high_risk: Option<bool>,
    max_distance: f64,
) -> DistanceLimit {
    DistanceLimit {
        kind,
        configuration,
        serves_high_risk,
        max_distance,
    }
}

/// Distance limits in meters
pub const DISTANCE_LIMITS: [DistanceLimit; 7] = [
    row(Local, DeadEnd, None, 15.0),
    row(Local, DistinctExits, None, 30.0),
    row(InteriorRoute, DeadEnd, Some(true), 10.0),
    row(InteriorRoute, DeadEnd, Some(false), 15.0),
    row(InteriorRoute, DistinctExits, None, 30.0),
    row(ExteriorRoute, DeadEnd, None, 30.0),
    row(ExteriorRoute, DistinctExits, None, 60.0),
];

/// Maximum allowed travel distance in meters
pub fn distance_limit(
    kind: PathKind,
    configuration: PathConfiguration,
    serves_high_risk: bool,
) -> f64 {
    DISTANCE_LIMITS
        .iter()
        .find(|limit| {
            limit.kind == kind
                && limit.configuration == configuration
                && limit
                    .serves_high_risk
                    .is_none_or(|required| required == serves_high_risk)
        })
        .map(|limit| limit.max_distance)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_situation_has_exactly_one_row() {
        for kind in PathKind::ALL {
            for configuration in PathConfiguration::ALL {
                for high_risk in [false, true] {
                    let matches = DISTANCE_LIMITS
                        .iter()
                        .filter(|limit| {
                            limit.kind == kind
                                && limit.configuration == configuration
                                && limit.serves_high_risk.is_none_or(|r| r == high_risk)
                        })
                        .count();
                    assert_eq!(matches, 1, "{kind:?} {configuration:?} {high_risk}");
                }
            }
        }
    }

    #[test]
    fn test_table_values() {
        assert_eq!(distance_limit(Local, DeadEnd, false), 15.0);
        assert_eq!(distance_limit(Local, DeadEnd, true), 15.0);
        assert_eq!(distance_limit(Local, DistinctExits, false), 30.0);
        assert_eq!(distance_limit(InteriorRoute, DeadEnd, true), 10.0);
        assert_eq!(distance_limit(InteriorRoute, DeadEnd, false), 15.0);
        assert_eq!(distance_limit(InteriorRoute, DistinctExits, true), 30.0);
        assert_eq!(distance_limit(ExteriorRoute, DeadEnd, false), 30.0);
        assert_eq!(distance_limit(ExteriorRoute, DistinctExits, false), 60.0);
    }
}
