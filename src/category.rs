//! Building risk category classification.
//!
//! The building is compared against the limit rows of its utilization
//! profile from the least severe category up. The first row admitting the
//! building gives its category; a building exceeding every row is category 4.

use crate::core::{BuildingDescriptor, ClassificationFactor, RiskCategory};
use crate::thresholds::category_limits;
use serde::Serialize;
use tracing::debug;

/// Classify a building into its risk category
pub fn classify_building(building: &BuildingDescriptor) -> RiskCategory {
    let rows = category_limits(building.utilization_type.profile());
    let category = rows
        .iter()
        .zip(RiskCategory::ALL)
        .find(|(limits, _)| limits.admits(building))
        .map(|(_, category)| category)
        .unwrap_or(RiskCategory::Four);

    debug!(
        utilization_type = building.utilization_type.as_str(),
        height = building.height,
        gross_area = building.gross_area,
        occupancy = building.occupancy,
        below_grade_floors = building.below_grade_floors,
        category = category.ordinal(),
        "Classified building"
    );
    category
}

/// One limit the building went over
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExceededLimit {
    /// Category whose row was exceeded
    pub category: RiskCategory,
    pub factor: ClassificationFactor,
    pub limit: f64,
    pub actual: f64,
}

/// Category together with the limits that pushed the building past the
/// less severe categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryExplanation {
    pub category: RiskCategory,
    pub exceeded: Vec<ExceededLimit>,
}

/// Classify and report which limits of the lower categories were exceeded
pub fn explain_category(building: &BuildingDescriptor) -> CategoryExplanation {
    let category = classify_building(building);
    let rows = category_limits(building.utilization_type.profile());

    let exceeded = rows
        .iter()
        .zip(RiskCategory::ALL)
        .take_while(|(_, row_category)| *row_category < category)
        .flat_map(|(limits, row_category)| {
            limits
                .exceeded_factors(building)
                .into_iter()
                .filter_map(move |factor| {
                    limits.limit_for(factor).map(|limit| ExceededLimit {
                        category: row_category,
                        factor,
                        limit,
                        actual: factor_value(building, factor),
                    })
                })
        })
        .collect();

    CategoryExplanation { category, exceeded }
}

fn factor_value(building: &BuildingDescriptor, factor: ClassificationFactor) -> f64 {
    match factor {
        ClassificationFactor::Height => building.height,
        ClassificationFactor::GrossArea => building.gross_area,
        ClassificationFactor::Occupancy => f64::from(building.occupancy),
        ClassificationFactor::BelowGradeFloors => f64::from(building.below_grade_floors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::UtilizationType;

    fn building(
        ut: UtilizationType,
        height: f64,
        area: f64,
        occupancy: u32,
        floors: u32,
    ) -> BuildingDescriptor {
        BuildingDescriptor {
            height,
            gross_area: area,
            occupancy,
            below_grade_floors: floors,
            ..BuildingDescriptor::new(ut)
        }
    }

    fn classify(
        ut: UtilizationType,
        height: f64,
        area: f64,
        occupancy: u32,
        floors: u32,
    ) -> RiskCategory {
        classify_building(&building(ut, height, area, occupancy, floors))
    }

    #[test]
    fn test_residential_rows() {
        use UtilizationType::I;
        assert_eq!(classify(I, 9.0, 0.0, 0, 1), RiskCategory::One);
        assert_eq!(classify(I, 9.0, 0.0, 0, 2), RiskCategory::Two);
        assert_eq!(classify(I, 28.5, 0.0, 0, 0), RiskCategory::Three);
        assert_eq!(classify(I, 50.0, 0.0, 0, 5), RiskCategory::Three);
        assert_eq!(classify(I, 50.1, 0.0, 0, 0), RiskCategory::Four);
    }

    #[test]
    fn test_parking_area_rows() {
        use UtilizationType::II;
        assert_eq!(classify(II, 3.0, 3_200.0, 0, 0), RiskCategory::One);
        assert_eq!(classify(II, 3.0, 3_201.0, 0, 0), RiskCategory::Two);
        assert_eq!(classify(II, 3.0, 32_000.0, 0, 0), RiskCategory::Three);
        assert_eq!(classify(II, 3.0, 32_001.0, 0, 0), RiskCategory::Four);
    }

    #[test]
    fn test_administrative_allows_taller_category_three() {
        assert_eq!(
            classify(UtilizationType::III, 45.0, 0.0, 900, 0),
            RiskCategory::Three
        );
        assert_eq!(
            classify(UtilizationType::IV, 45.0, 0.0, 900, 0),
            RiskCategory::Four
        );
    }

    #[test]
    fn test_assembly_below_grade_floors() {
        use UtilizationType::VI;
        assert_eq!(classify(VI, 6.0, 0.0, 80, 2), RiskCategory::One);
        assert_eq!(classify(VI, 6.0, 0.0, 500, 3), RiskCategory::Three);
        assert_eq!(classify(VI, 6.0, 0.0, 500, 4), RiskCategory::Four);
    }

    #[test]
    fn test_retail_and_industrial() {
        use UtilizationType::{VIII, XII};
        assert_eq!(classify(VIII, 6.0, 2_500.0, 0, 2), RiskCategory::Two);
        assert_eq!(classify(XII, 12.0, 800.0, 0, 0), RiskCategory::Two);
        assert_eq!(classify(XII, 8.0, 20_000.0, 0, 0), RiskCategory::Three);
    }

    #[test]
    fn test_empty_building_is_category_one() {
        for ut in UtilizationType::ALL {
            let category = classify_building(&BuildingDescriptor::new(ut));
            assert_eq!(category, RiskCategory::One, "{ut}");
        }
    }

    #[test]
    fn test_explanation_lists_exceeded_rows() {
        let explanation = explain_category(&building(UtilizationType::VIII, 12.0, 5_000.0, 0, 0));
        assert_eq!(explanation.category, RiskCategory::Three);
        assert_eq!(
            explanation.exceeded,
            vec![
                ExceededLimit {
                    category: RiskCategory::One,
                    factor: ClassificationFactor::Height,
                    limit: 9.0,
                    actual: 12.0,
                },
                ExceededLimit {
                    category: RiskCategory::One,
                    factor: ClassificationFactor::GrossArea,
                    limit: 300.0,
                    actual: 5_000.0,
                },
                ExceededLimit {
                    category: RiskCategory::Two,
                    factor: ClassificationFactor::GrossArea,
                    limit: 3_000.0,
                    actual: 5_000.0,
                },
            ]
        );
    }

    #[test]
    fn test_explanation_empty_for_category_one() {
        let explanation = explain_category(&building(UtilizationType::III, 3.0, 100.0, 20, 0));
        assert_eq!(explanation.category, RiskCategory::One);
        assert!(explanation.exceeded.is_empty());
    }
}
