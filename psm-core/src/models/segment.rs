/// The market segment an analysis run is scaled to.
///
/// The population is the number of potential buyers; demand at any price is
/// the population multiplied by the fraction of it accepting that price.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "MarketSegmentDto", into = "MarketSegmentDto")
)]
pub struct MarketSegment {
    name: String,
    population: u64,
}

impl MarketSegment {
    /// Creates a new market segment, rejecting an empty population
    pub fn new(name: impl Into<String>, population: u64) -> Result<Self, SegmentError> {
        Self::try_from(MarketSegmentDto {
            name: name.into(),
            population,
        })
    }

    /// The display name of the segment
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of potential buyers in the segment
    pub fn population(&self) -> u64 {
        self.population
    }
}

/// A DTO to ensure that we always validate when we deserialize from an untrusted source
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema), schemars(inline))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug)]
pub struct MarketSegmentDto {
    /// The display name of the segment
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    /// The number of potential buyers (strictly positive)
    pub population: u64,
}

impl From<MarketSegment> for MarketSegmentDto {
    fn from(value: MarketSegment) -> Self {
        Self {
            name: value.name,
            population: value.population,
        }
    }
}

impl TryFrom<MarketSegmentDto> for MarketSegment {
    type Error = SegmentError;

    fn try_from(value: MarketSegmentDto) -> Result<Self, Self::Error> {
        if value.population == 0 {
            return Err(SegmentError::EmptyPopulation);
        }

        Ok(Self {
            name: value.name,
            population: value.population,
        })
    }
}

/// Errors that can occur when creating a MarketSegment
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum SegmentError {
    /// Error when the segment has no potential buyers
    #[error("Population must be positive")]
    EmptyPopulation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_segment() {
        let segment = MarketSegment::new("students", 10_000).unwrap();
        assert_eq!(segment.name(), "students");
        assert_eq!(segment.population(), 10_000);
    }

    #[test]
    fn test_empty_population() {
        assert_eq!(
            MarketSegment::new("nobody", 0).unwrap_err(),
            SegmentError::EmptyPopulation
        );
    }

    #[test]
    fn test_deserialize_without_name() {
        let segment = serde_json::from_str::<MarketSegment>(r#"{ "population": 250 }"#).unwrap();
        assert_eq!(segment.name(), "");
        assert_eq!(segment.population(), 250);
    }

    #[test]
    fn test_deserialize_rejects_zero() {
        assert!(serde_json::from_str::<MarketSegment>(r#"{ "population": 0 }"#).is_err());
    }
}
