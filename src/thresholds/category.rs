use crate::core::{BuildingDescriptor, ClassificationFactor, UtilizationProfile};
use serde::Serialize;

/// Upper limits a building must stay within to fall in one category.
///
/// `None` means the factor is not evaluated for the profile. Height is
/// always evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryLimits {
    pub max_height: f64,
    pub max_gross_area: Option<f64>,
    pub max_occupancy: Option<u32>,
    pub max_below_grade_floors: Option<u32>,
}

impl CategoryLimits {
    const fn new(
        max_height: f64,
        max_gross_area: Option<f64>,
        max_occupancy: Option<u32>,
        max_below_grade_floors: Option<u32>,
    ) -> Self {
        Self {
            max_height,
            max_gross_area,
            max_occupancy,
            max_below_grade_floors,
        }
    }

    /// Factors of `building` exceeding these limits, in evaluation order
    pub fn exceeded_factors(&self, building: &BuildingDescriptor) -> Vec<ClassificationFactor> {
        let mut exceeded = Vec::new();
        if building.height > self.max_height {
            exceeded.push(ClassificationFactor::Height);
        }
        if self
            .max_gross_area
            .is_some_and(|limit| building.gross_area > limit)
        {
            exceeded.push(ClassificationFactor::GrossArea);
        }
        if self
            .max_occupancy
            .is_some_and(|limit| building.occupancy > limit)
        {
            exceeded.push(ClassificationFactor::Occupancy);
        }
        if self
            .max_below_grade_floors
            .is_some_and(|limit| building.below_grade_floors > limit)
        {
            exceeded.push(ClassificationFactor::BelowGradeFloors);
        }
        exceeded
    }

    /// Whether every evaluated factor of `building` is within the limits
    pub fn admits(&self, building: &BuildingDescriptor) -> bool {
        building.height <= self.max_height
            && self
                .max_gross_area
                .is_none_or(|limit| building.gross_area <= limit)
            && self
                .max_occupancy
                .is_none_or(|limit| building.occupancy <= limit)
            && self
                .max_below_grade_floors
                .is_none_or(|limit| building.below_grade_floors <= limit)
    }

    /// Limit value for one factor, as a real number
    pub fn limit_for(&self, factor: ClassificationFactor) -> Option<f64> {
        match factor {
            ClassificationFactor::Height => Some(self.max_height),
            ClassificationFactor::GrossArea => self.max_gross_area,
            ClassificationFactor::Occupancy => self.max_occupancy.map(f64::from),
            ClassificationFactor::BelowGradeFloors => self.max_below_grade_floors.map(f64::from),
        }
    }
}

const fn limits(
    height: f64,
    area: Option<f64>,
    occupancy: Option<u32>,
    floors: Option<u32>,
) -> CategoryLimits {
    CategoryLimits::new(height, area, occupancy, floors)
}

// Rows for categories 1, 2 and 3. Category 4 is the open-ended ceiling and
// has no row.

const RESIDENTIAL: [CategoryLimits; 3] = [
    limits(9.0, None, None, Some(1)),
    limits(28.0, None, None, Some(3)),
    limits(50.0, None, None, Some(5)),
];

const PARKING: [CategoryLimits; 3] = [
    limits(9.0, Some(3_200.0), None, Some(1)),
    limits(28.0, Some(9_600.0), None, Some(3)),
    limits(28.0, Some(32_000.0), None, Some(5)),
];

const ADMINISTRATIVE: [CategoryLimits; 3] = [
    limits(9.0, None, Some(100), Some(100)),
    limits(28.0, None, Some(1_000), Some(100)),
    limits(50.0, None, Some(5_000), Some(100)),
];

const INSTITUTIONAL: [CategoryLimits; 3] = [
    limits(9.0, None, Some(100), Some(100)),
    limits(28.0, None, Some(1_000), Some(100)),
    limits(28.0, None, Some(5_000), Some(100)),
];

const ASSEMBLY: [CategoryLimits; 3] = [
    limits(9.0, None, Some(100), Some(100)),
    limits(28.0, None, Some(1_000), Some(2)),
    limits(28.0, None, Some(5_000), Some(3)),
];

const RETAIL: [CategoryLimits; 3] = [
    limits(9.0, Some(300.0), None, Some(1)),
    limits(28.0, Some(3_000.0), None, Some(2)),
    limits(28.0, Some(10_000.0), None, Some(3)),
];

const INDUSTRIAL: [CategoryLimits; 3] = [
    limits(9.0, Some(1_000.0), None, Some(100)),
    limits(28.0, Some(5_000.0), None, Some(100)),
    limits(28.0, Some(20_000.0), None, Some(100)),
];

/// Limit rows for categories 1..=3 of a profile, least severe first
pub fn category_limits(profile: UtilizationProfile) -> &'static [CategoryLimits; 3] {
    match profile {
        UtilizationProfile::Residential => &RESIDENTIAL,
        UtilizationProfile::Parking => &PARKING,
        UtilizationProfile::Administrative => &ADMINISTRATIVE,
        UtilizationProfile::Institutional => &INSTITUTIONAL,
        UtilizationProfile::Assembly => &ASSEMBLY,
        UtilizationProfile::Retail => &RETAIL,
        UtilizationProfile::Industrial => &INDUSTRIAL,
    }
}
